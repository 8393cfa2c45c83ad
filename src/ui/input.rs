use crate::store::Route;
use crate::ui::app::App;
use crate::ui::editor::EditorIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::Auth => handle_auth_key(app, key),
        Route::Recipes => handle_recipes_key(app, key),
        Route::RecipeDetail(index) => handle_detail_key(app, key, index),
        Route::RecipeNew | Route::RecipeEdit(_) => handle_editor_key(app, key),
        Route::ShoppingList => handle_shopping_list_key(app, key),
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 't') {
        app.auth_toggle_mode();
        return;
    }
    if is_ctrl_char(key, 'o') {
        app.navigate(Route::ShoppingList);
        return;
    }

    match key.code {
        KeyCode::Esc => app.clear_error(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.auth_toggle_field(),
        KeyCode::Enter => app.auth_submit(),
        KeyCode::Backspace => app.auth_backspace(),
        KeyCode::Char(c) if is_plain(key) => app.auth_input(c),
        _ => {}
    }
}

/// Keys shared by the screens that are not text forms.
fn handle_common_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('o') => app.navigate(Route::ShoppingList),
        KeyCode::Char('r') => app.fetch_recipes(),
        KeyCode::Char('s') => app.save_recipes(),
        KeyCode::Char('l') => app.logout(),
        _ => return false,
    }
    true
}

fn handle_recipes_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_recipe_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_recipe_selection(1),
        KeyCode::Enter => app.open_selected_recipe(),
        KeyCode::Char('n') => app.navigate(Route::RecipeNew),
        _ => {
            handle_common_key(app, key);
        }
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent, index: usize) {
    match key.code {
        KeyCode::Char('a') => app.add_to_shopping_list(index),
        KeyCode::Char('e') => app.navigate(Route::RecipeEdit(index)),
        KeyCode::Char('d') => app.delete_recipe(index),
        KeyCode::Esc => app.navigate(Route::Recipes),
        _ => {
            handle_common_key(app, key);
        }
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'n') {
        app.dispatch_editor(EditorIntent::AddIngredient);
        return;
    }
    if is_ctrl_char(key, 'd') {
        app.dispatch_editor(EditorIntent::RemoveIngredient);
        return;
    }
    if is_ctrl_char(key, 's') {
        app.submit_editor();
        return;
    }

    match key.code {
        KeyCode::Esc => app.cancel_editor(),
        KeyCode::Enter => app.submit_editor(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_editor(EditorIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_editor(EditorIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
        KeyCode::Char(c) if is_plain(key) => app.dispatch_editor(EditorIntent::Input(c)),
        _ => {}
    }
}

fn handle_shopping_list_key(app: &mut App, key: KeyEvent) {
    let authenticated = app.state().auth.is_authenticated();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_shopping_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_shopping_selection(1),
        KeyCode::Enter | KeyCode::Char('e') => app.start_edit_ingredient(),
        KeyCode::Esc => app.stop_edit_ingredient(),
        KeyCode::Char('+') => app.adjust_edited_amount(1),
        KeyCode::Char('-') => app.adjust_edited_amount(-1),
        KeyCode::Char('x') | KeyCode::Delete => app.delete_edited_ingredient(),
        KeyCode::Char('f') if authenticated => app.navigate(Route::Recipes),
        KeyCode::Char('f') => app.navigate(Route::Auth),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('l') if authenticated => app.logout(),
        _ => {}
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::NoEffects;
    use crate::model::{Ingredient, Recipe, User};
    use crate::store::auth::AuthIntent;
    use crate::store::recipes::RecipeIntent;
    use crate::store::shopping_list::ShoppingListIntent;
    use crate::store::Store;
    use chrono::{Duration, Utc};

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn logged_in_with_recipe() -> App {
        let mut app = App::new(Store::new(NoEffects));
        app.dispatch(AuthIntent::AuthenticateSuccess {
            user: User::new("cook@example.com", "uid", "t", Utc::now() + Duration::hours(1)),
            redirect: true,
        });
        app.dispatch(RecipeIntent::AddRecipe(Recipe::new(
            "Paella",
            "Spanish food",
            "paella.jpg",
            vec![Ingredient::new("Rice", 1, Some("kg"))],
        )));
        app
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let mut app = App::new(Store::new(NoEffects));
        ctrl(&mut app, 'c');
        assert!(app.should_quit());
    }

    #[test]
    fn letters_on_auth_screen_are_typed_not_commands() {
        let mut app = App::new(Store::new(NoEffects));
        type_text(&mut app, "qlo");
        assert!(!app.should_quit());
        assert_eq!(app.auth_form().email, "qlo");
        assert_eq!(app.route(), Route::Auth);
    }

    #[test]
    fn shopping_list_is_reachable_without_login() {
        let mut app = App::new(Store::new(NoEffects));
        ctrl(&mut app, 'o');
        assert_eq!(app.route(), Route::ShoppingList);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.route(), Route::Auth);
    }

    #[test]
    fn open_detail_and_add_to_shopping_list() {
        let mut app = logged_in_with_recipe();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), Route::RecipeDetail(0));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state().shopping_list.ingredients.len(), 1);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route(), Route::Recipes);
    }

    #[test]
    fn delete_from_detail_returns_to_list() {
        let mut app = logged_in_with_recipe();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.route(), Route::Recipes);
        assert!(app.state().recipes.recipes.is_empty());
    }

    #[test]
    fn editor_adds_ingredient_row() {
        let mut app = logged_in_with_recipe();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.route(), Route::RecipeNew);
        type_text(&mut app, "Soup");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "soup.png");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Warm");
        ctrl(&mut app, 'n');
        type_text(&mut app, "Water, 2, l");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route(), Route::Recipes);
        let soup = &app.state().recipes.recipes[1];
        assert_eq!(soup.ingredients, vec![Ingredient::new("Water", 2, Some("l"))]);
    }

    #[test]
    fn escape_leaves_editor_without_saving() {
        let mut app = logged_in_with_recipe();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "xyz");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route(), Route::RecipeDetail(0));
        assert_eq!(app.state().recipes.recipes[0].name, "Paella");
    }

    #[test]
    fn shopping_list_edit_keys() {
        let mut app = App::new(Store::new(NoEffects));
        app.dispatch(ShoppingListIntent::AddIngredients(vec![
            Ingredient::new("Apples", 5, None),
            Ingredient::new("Tomatoes", 10, None),
        ]));
        app.navigate(Route::ShoppingList);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().shopping_list.edited_index, Some(1));
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.state().shopping_list.ingredients[1].amount, 11);
        press(&mut app, KeyCode::Char('x'));

        let list = &app.state().shopping_list;
        assert_eq!(list.ingredients.len(), 1);
        assert!(!list.is_editing());
    }
}
