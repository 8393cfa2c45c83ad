use crate::model::Recipe;
use crate::store::Route;
use crate::ui::app::{App, AuthField, AuthMode};
use crate::ui::editor::{EditorField, EditorState};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions, split_master_detail};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, STATUS_ERROR};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::widget(app.state()), header);
    frame.render_widget(Footer::widget(app.state(), footer), footer);

    match app.route() {
        Route::Auth => draw_auth(frame, app, body),
        Route::Recipes => draw_recipes(frame, app, body, None),
        Route::RecipeDetail(index) => draw_recipes(frame, app, body, Some(index)),
        Route::RecipeNew | Route::RecipeEdit(_) => {
            let (list, form) = split_master_detail(body);
            draw_recipe_list(frame, app, list);
            draw_editor(frame, app.editor(), form);
        }
        Route::ShoppingList => draw_shopping_list(frame, app, body),
    }
}

fn bordered(title: &str, focused: bool) -> Block<'static> {
    let color = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn draw_auth(frame: &mut Frame, app: &App, body: Rect) {
    let form = app.auth_form();
    let auth = &app.state().auth;
    let area = centered_rect(60, 60, body);
    frame.render_widget(Clear, area);

    let title = match form.mode {
        AuthMode::Login => "Login",
        AuthMode::Signup => "Sign Up",
    };
    let block = bordered(title, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    let masked = "•".repeat(form.password.chars().count());
    frame.render_widget(
        Paragraph::new(form.email.as_str())
            .block(bordered("E-Mail", form.focus == AuthField::Email)),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(masked).block(bordered("Password", form.focus == AuthField::Password)),
        rows[1],
    );

    let status = if auth.loading {
        Line::from(Span::styled("Authenticating…", Style::default().fg(ACCENT)))
    } else if let Some(error) = &auth.auth_error {
        Line::from(Span::styled(error.clone(), Style::default().fg(STATUS_ERROR)))
    } else {
        let other = match form.mode {
            AuthMode::Login => "Ctrl+T to switch to Sign Up",
            AuthMode::Signup => "Ctrl+T to switch to Login",
        };
        Line::from(Span::styled(other, Style::default().add_modifier(Modifier::DIM)))
    };
    frame.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), rows[2]);
}

fn draw_recipes(frame: &mut Frame, app: &App, body: Rect, detail: Option<usize>) {
    let (list, side) = split_master_detail(body);
    draw_recipe_list(frame, app, list);

    let recipe = detail.and_then(|index| app.state().recipes.get(index));
    match recipe {
        Some(recipe) => draw_recipe_detail(frame, recipe, side),
        None => {
            let hint = Paragraph::new("Please select a Recipe!")
                .style(Style::default().add_modifier(Modifier::DIM))
                .block(bordered("Recipe", false));
            frame.render_widget(hint, side);
        }
    }
}

fn draw_recipe_list(frame: &mut Frame, app: &App, area: Rect) {
    let recipes = &app.state().recipes;
    let focused = app.route() == Route::Recipes;

    if recipes.recipes.is_empty() {
        let text = if recipes.loading {
            "Loading…"
        } else {
            "No recipes yet. Press n to add one or r to fetch."
        };
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(bordered("Recipes", focused)),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = recipes
        .recipes
        .iter()
        .map(|recipe| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    recipe.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    recipe.description.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ])
        })
        .collect();

    let selected = match app.route() {
        Route::RecipeDetail(index) | Route::RecipeEdit(index) => index,
        _ => app.recipe_selection(),
    };
    let mut state = ListState::default().with_selected(Some(selected));
    let list = List::new(items)
        .block(bordered("Recipes", focused))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).fg(ACCENT));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_recipe_detail(frame: &mut Frame, recipe: &Recipe, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            recipe.name.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Image: {}", recipe.image_path),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(recipe.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Ingredients",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
    ];
    lines.extend(
        recipe
            .ingredients
            .iter()
            .map(|ingredient| Line::from(format!("  • {}", ingredient.label()))),
    );

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(bordered("Recipe", true)),
        area,
    );
}

fn draw_editor(frame: &mut Frame, editor: &EditorState, area: Rect) {
    let title = if editor.index.is_some() {
        "Edit Recipe"
    } else {
        "New Recipe"
    };
    let block = bordered(title, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let focused = editor.focused_field();
    let field = |label: &str, value: &str, this: EditorField| {
        Paragraph::new(value.to_string()).block(bordered(label, focused == this))
    };
    frame.render_widget(field("Name", &editor.name, EditorField::Name), rows[0]);
    frame.render_widget(
        field("Image URL", &editor.image_path, EditorField::ImagePath),
        rows[1],
    );
    frame.render_widget(
        field("Description", &editor.description, EditorField::Description),
        rows[2],
    );

    let ingredients: Vec<Line> = if editor.ingredients.is_empty() {
        vec![Line::from(Span::styled(
            "Ctrl+N adds a row: name, amount, unit",
            Style::default().add_modifier(Modifier::DIM),
        ))]
    } else {
        editor
            .ingredients
            .iter()
            .enumerate()
            .map(|(row, text)| {
                let style = if focused == EditorField::Ingredient(row) {
                    Style::default().bg(ACTIVE_HIGHLIGHT).fg(ACCENT)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("{:>2}. {}", row + 1, text), style))
            })
            .collect()
    };
    let in_rows = matches!(focused, EditorField::Ingredient(_));
    frame.render_widget(
        Paragraph::new(ingredients).block(bordered("Ingredients", in_rows)),
        rows[3],
    );

    if let Some(error) = &editor.error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.clone(), Style::default().fg(STATUS_ERROR))),
            rows[4],
        );
    }
}

fn draw_shopping_list(frame: &mut Frame, app: &App, body: Rect) {
    let list = &app.state().shopping_list;
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(body);

    let edit_line = match &list.edited_ingredient {
        Some(ingredient) => Line::from(vec![
            Span::styled("Editing: ", Style::default().fg(ACCENT)),
            Span::raw(ingredient.label()),
            Span::styled(
                "   +/- amount, x delete, Esc done",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
        None => Line::from(Span::styled(
            "Select an item and press Enter to edit it",
            Style::default().add_modifier(Modifier::DIM),
        )),
    };
    frame.render_widget(
        Paragraph::new(edit_line).block(bordered("Edit", list.is_editing())),
        parts[0],
    );

    let items: Vec<ListItem> = list
        .ingredients
        .iter()
        .enumerate()
        .map(|(index, ingredient)| {
            let style = if list.edited_index == Some(index) {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(ingredient.label(), style))
        })
        .collect();

    let mut state = ListState::default();
    if !list.ingredients.is_empty() {
        state.select(Some(app.shopping_selection()));
    }
    let widget = List::new(items)
        .block(bordered("Shopping List", !list.is_editing()))
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    frame.render_stateful_widget(widget, parts[1], &mut state);
}
