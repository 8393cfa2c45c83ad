use crate::model::Credentials;
use crate::store::auth::AuthIntent;
use crate::store::mvi::Reducer;
use crate::store::recipes::RecipeIntent;
use crate::store::shopping_list::ShoppingListIntent;
use crate::store::{AppIntent, AppState, Route, Store};
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum AuthField {
    #[default]
    Email,
    Password,
}

/// Text typed on the auth screen. Never leaves the UI except as credentials.
#[derive(Clone, Debug, Default)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub focus: AuthField,
    pub mode: AuthMode,
}

impl AuthForm {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }
}

/// View-side state wrapped around the [`Store`].
pub struct App {
    should_quit: bool,
    store: Store,
    auth_form: AuthForm,
    recipe_selection: usize,
    shopping_selection: usize,
    editor: EditorState,
}

impl App {
    pub fn new(store: Store) -> Self {
        Self {
            should_quit: false,
            store,
            auth_form: AuthForm::default(),
            recipe_selection: 0,
            shopping_selection: 0,
            editor: EditorState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn route(&self) -> Route {
        self.store.state().route()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn auth_form(&self) -> &AuthForm {
        &self.auth_form
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn recipe_selection(&self) -> usize {
        self.recipe_selection
    }

    pub fn shopping_selection(&self) -> usize {
        self.shopping_selection
    }

    pub fn dispatch(&mut self, intent: impl Into<AppIntent>) {
        self.store.dispatch(intent);
        self.clamp_selections();
    }

    /// Apply intents delivered by effects since the last tick.
    pub fn on_tick(&mut self) {
        if self.store.drain() > 0 {
            self.clamp_selections();
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.dispatch(route);
        match self.route() {
            Route::RecipeNew => self.dispatch_editor(EditorIntent::Open {
                index: None,
                recipe: None,
            }),
            Route::RecipeEdit(index) => {
                let recipe = self.state().recipes.get(index).cloned();
                self.dispatch_editor(EditorIntent::Open {
                    index: Some(index),
                    recipe,
                });
            }
            _ => {}
        }
    }

    // -- Auth screen ----------------------------------------------------------

    pub fn auth_input(&mut self, c: char) {
        self.auth_form.focused_mut().push(c);
    }

    pub fn auth_backspace(&mut self) {
        self.auth_form.focused_mut().pop();
    }

    pub fn auth_toggle_field(&mut self) {
        self.auth_form.focus = match self.auth_form.focus {
            AuthField::Email => AuthField::Password,
            AuthField::Password => AuthField::Email,
        };
    }

    pub fn auth_toggle_mode(&mut self) {
        self.auth_form.mode = match self.auth_form.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
    }

    pub fn auth_submit(&mut self) {
        let email = self.auth_form.email.trim();
        if email.is_empty() || self.auth_form.password.is_empty() || self.state().auth.loading {
            return;
        }
        let credentials = Credentials::new(email, self.auth_form.password.clone());
        self.auth_form.password.clear();
        let intent = match self.auth_form.mode {
            AuthMode::Login => AuthIntent::LoginStart(credentials),
            AuthMode::Signup => AuthIntent::SignupStart(credentials),
        };
        self.dispatch(intent);
    }

    pub fn clear_error(&mut self) {
        self.dispatch(AuthIntent::ClearError);
    }

    // -- Header actions -------------------------------------------------------

    pub fn fetch_recipes(&mut self) {
        self.dispatch(RecipeIntent::FetchRecipes);
    }

    pub fn save_recipes(&mut self) {
        self.dispatch(RecipeIntent::StoreRecipes);
    }

    pub fn logout(&mut self) {
        self.dispatch(AuthIntent::Logout);
    }

    // -- Recipes ----------------------------------------------------------------

    pub fn move_recipe_selection(&mut self, delta: isize) {
        let len = self.state().recipes.recipes.len();
        self.recipe_selection = step(self.recipe_selection, delta, len);
    }

    pub fn open_selected_recipe(&mut self) {
        if self.state().recipes.get(self.recipe_selection).is_some() {
            self.navigate(Route::RecipeDetail(self.recipe_selection));
        }
    }

    /// Send every ingredient of the shown recipe to the shopping list.
    pub fn add_to_shopping_list(&mut self, index: usize) {
        let Some(recipe) = self.state().recipes.get(index) else {
            return;
        };
        let ingredients = recipe.ingredients.clone();
        self.dispatch(ShoppingListIntent::AddIngredients(ingredients));
    }

    pub fn delete_recipe(&mut self, index: usize) {
        self.dispatch(RecipeIntent::DeleteRecipe(index));
        self.navigate(Route::Recipes);
    }

    // -- Editor -------------------------------------------------------------------

    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    pub fn submit_editor(&mut self) {
        let recipe = match self.editor.to_recipe() {
            Ok(recipe) => recipe,
            Err(message) => {
                self.dispatch_editor(EditorIntent::Invalid(message));
                return;
            }
        };
        match self.editor.index {
            Some(index) => self.dispatch(RecipeIntent::UpdateRecipe { index, recipe }),
            None => self.dispatch(RecipeIntent::AddRecipe(recipe)),
        }
        self.cancel_editor();
    }

    /// Leave the editor: back to the recipe when editing, else to the list.
    pub fn cancel_editor(&mut self) {
        let target = match self.editor.index {
            Some(index) => Route::RecipeDetail(index),
            None => Route::Recipes,
        };
        self.editor = EditorState::default();
        self.navigate(target);
    }

    // -- Shopping list --------------------------------------------------------------

    pub fn move_shopping_selection(&mut self, delta: isize) {
        let len = self.state().shopping_list.ingredients.len();
        self.shopping_selection = step(self.shopping_selection, delta, len);
    }

    pub fn start_edit_ingredient(&mut self) {
        self.dispatch(ShoppingListIntent::StartEdit(self.shopping_selection));
    }

    pub fn stop_edit_ingredient(&mut self) {
        self.dispatch(ShoppingListIntent::StopEdit);
    }

    pub fn delete_edited_ingredient(&mut self) {
        self.dispatch(ShoppingListIntent::DeleteIngredient);
    }

    /// Change the amount of the ingredient being edited, never below 1.
    pub fn adjust_edited_amount(&mut self, delta: i64) {
        self.dispatch(ShoppingListIntent::AdjustAmount(delta));
    }

    fn clamp_selections(&mut self) {
        let recipes = self.state().recipes.recipes.len();
        let ingredients = self.state().shopping_list.ingredients.len();
        self.recipe_selection = self.recipe_selection.min(recipes.saturating_sub(1));
        self.shopping_selection = self.shopping_selection.min(ingredients.saturating_sub(1));
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = current as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}
