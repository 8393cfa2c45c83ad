use tokio::sync::mpsc;

use crate::effects::EffectHandler;
use crate::store::app::{AppIntent, AppReducer, AppState};
use crate::store::mvi::Reducer;

/// Cloneable handle used by effects to feed intents back into the store.
#[derive(Clone)]
pub struct Dispatcher {
    sender: mpsc::UnboundedSender<AppIntent>,
}

impl Dispatcher {
    pub fn dispatch(&self, intent: impl Into<AppIntent>) {
        if self.sender.send(intent.into()).is_err() {
            tracing::trace!("Intent dropped (store gone)");
        }
    }
}

/// Owns the application state and runs reducers and effects.
///
/// Each dispatched intent is reduced first; effects then see the intent
/// together with the state it produced.
pub struct Store {
    state: AppState,
    effects: Box<dyn EffectHandler>,
    dispatcher: Dispatcher,
    receiver: mpsc::UnboundedReceiver<AppIntent>,
}

impl Store {
    pub fn new(effects: impl EffectHandler + 'static) -> Self {
        Self::with_state(AppState::default(), effects)
    }

    pub fn with_state(state: AppState, effects: impl EffectHandler + 'static) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            state,
            effects: Box::new(effects),
            dispatcher: Dispatcher { sender },
            receiver,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    pub fn dispatch(&mut self, intent: impl Into<AppIntent>) {
        let intent = intent.into();
        tracing::debug!(?intent, "Dispatch");
        self.state = AppReducer::reduce(std::mem::take(&mut self.state), intent.clone());
        self.effects.handle(&intent, &self.state, &self.dispatcher);
    }

    /// Apply every intent queued by effects without waiting.
    ///
    /// Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.receiver.try_recv() {
            self.dispatch(intent);
            applied += 1;
        }
        applied
    }

    /// Wait for the next intent queued by an effect, apply it and return it.
    pub async fn next(&mut self) -> Option<AppIntent> {
        let intent = self.receiver.recv().await?;
        self.dispatch(intent.clone());
        Some(intent)
    }
}
