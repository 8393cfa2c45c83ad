use tokio::task::JoinHandle;

/// Holds at most one running task of a given kind.
///
/// Starting a new task aborts the previous one if it is still running, so
/// only the latest request can deliver a result. Dropping the slot aborts
/// the task.
pub(crate) struct TaskSlot {
    name: &'static str,
    handle: Option<JoinHandle<()>>,
}

impl TaskSlot {
    pub(crate) fn new(name: &'static str) -> Self {
        Self { name, handle: None }
    }

    pub(crate) fn replace(&mut self, handle: JoinHandle<()>) {
        if let Some(previous) = self.handle.replace(handle) {
            if !previous.is_finished() {
                tracing::debug!(task = self.name, "Cancelling in-flight task");
                previous.abort();
            }
        }
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for TaskSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
