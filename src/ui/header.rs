use crate::store::{AppState, Route};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: navigation tabs and the logged-in user.
pub struct Header;

impl Header {
    pub fn widget(state: &AppState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let route = state.route();

        let tab = |label: &'static str, active: bool| {
            Span::styled(label, if active { active_style } else { text_style })
        };

        let mut spans = vec![
            Span::styled("  Recipe Book", active_style),
            Span::styled("  │  ", separator_style),
        ];
        if state.auth.is_authenticated() {
            spans.push(tab("Recipes", route.requires_auth()));
            spans.push(Span::styled("  │  ", separator_style));
        } else {
            spans.push(tab("Authenticate", route == Route::Auth));
            spans.push(Span::styled("  │  ", separator_style));
        }
        spans.push(tab("Shopping List", route == Route::ShoppingList));

        if let Some(user) = &state.auth.user {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("● ", Style::default().fg(STATUS_OK)));
            spans.push(Span::styled(user.email.clone(), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
