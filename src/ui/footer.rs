use crate::store::{AppState, Route};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom bar: key hints for the current screen, then status and version.
pub struct Footer;

impl Footer {
    pub fn widget(state: &AppState, area: Rect) -> Paragraph<'static> {
        let hints = hints(state.route(), state.auth.is_authenticated());
        let status = status(state);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let used = hints.chars().count()
            + status.as_ref().map_or(0, |(text, _)| text.chars().count())
            + version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width.saturating_sub(used);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
        ];
        if let Some((text, style)) = status {
            spans.push(Span::styled(text, style));
        }
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints(route: Route, authenticated: bool) -> &'static str {
    match route {
        Route::Auth => " Tab: Field │ Enter: Submit │ Ctrl+T: Login/Signup │ Ctrl+O: List │ Ctrl+C: Quit",
        Route::Recipes => " ↑↓: Select │ Enter: Open │ n: New │ r: Fetch │ s: Save │ o: List │ l: Logout │ q: Quit",
        Route::RecipeDetail(_) => " a: To list │ e: Edit │ d: Delete │ Esc: Back │ q: Quit",
        Route::RecipeNew | Route::RecipeEdit(_) => {
            " Tab: Field │ Ctrl+N: Add row │ Ctrl+D: Drop row │ Enter: Save │ Esc: Cancel"
        }
        Route::ShoppingList if authenticated => {
            " ↑↓: Select │ Enter: Edit │ +/-: Amount │ x: Delete │ f: Recipes │ q: Quit"
        }
        Route::ShoppingList => " ↑↓: Select │ Enter: Edit │ +/-: Amount │ x: Delete │ f: Login │ q: Quit",
    }
}

fn status(state: &AppState) -> Option<(String, Style)> {
    let error = Style::default().fg(STATUS_ERROR);
    if let Some(message) = &state.auth.auth_error {
        return Some((format!("{}  ", message), error));
    }
    if let Some(message) = &state.recipes.error {
        return Some((format!("{}  ", message), error));
    }
    if state.auth.loading || state.recipes.loading {
        return Some(("Loading…  ".to_string(), Style::default().fg(STATUS_OK)));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::auth::AuthIntent;
    use crate::store::mvi::Reducer;
    use crate::store::{AppIntent, AppReducer};

    #[test]
    fn auth_error_wins_over_loading() {
        let state = AppReducer::reduce(
            AppState::default(),
            AppIntent::Auth(AuthIntent::AuthenticateFailure("This email exists already".into())),
        );
        let (text, _) = status(&state).unwrap();
        assert!(text.starts_with("This email exists already"));
    }

    #[test]
    fn idle_state_has_no_status() {
        assert!(status(&AppState::default()).is_none());
    }
}
