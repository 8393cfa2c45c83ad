use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use recipebook::cli::{Cli, Command};
use recipebook::config::{Config, CredentialStatus};
use recipebook::effects::{EffectContext, Effects};
use recipebook::logging::init_tracing;
use recipebook::model::Recipe;
use recipebook::session::SessionStorage;
use recipebook::store::auth::AuthIntent;
use recipebook::store::recipes::RecipeIntent;
use recipebook::store::{AppIntent, Store};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let CredentialStatus::Unconfigured { reason } = config.auth.resolve_api_key() {
        tracing::warn!(%reason, "No API key; login will fail");
    }

    match cli.command() {
        Command::Logout => {
            let session = SessionStorage::new(config.session.resolved_path());
            session.clear().context("Failed to clear session")?;
            println!("Logged out.");
            Ok(())
        }
        Command::List => {
            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            let mut store = build_store(&config, &runtime)?;
            runtime.block_on(list_recipes(&mut store, u64::from(config.defaults.timeout_seconds)))
        }
        Command::Tui => {
            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            let store = build_store(&config, &runtime)?;
            recipebook::ui::run(store).context("Terminal UI failed")
        }
    }
}

/// Production store with the stored session already restored, if any.
fn build_store(config: &Config, runtime: &tokio::runtime::Runtime) -> Result<Store> {
    let context = EffectContext::from_config(config, runtime.handle().clone())
        .context("Failed to build HTTP clients")?;
    let mut store = Store::new(Effects::new(context));
    store.dispatch(AuthIntent::AutoLogin);
    // Applies the restored login and the recipe preload it triggers.
    store.drain();
    Ok(store)
}

async fn list_recipes(store: &mut Store, timeout_seconds: u64) -> Result<()> {
    if !store.state().auth.is_authenticated() {
        bail!("Not logged in. Run `recipebook` and log in first.");
    }
    if !store.state().recipes.loading {
        store.dispatch(RecipeIntent::FetchRecipes);
    }

    let wait = async {
        while let Some(intent) = store.next().await {
            match intent {
                AppIntent::Recipes(RecipeIntent::SetRecipes(_)) => return Ok(()),
                AppIntent::Recipes(RecipeIntent::RecipesFailure(message)) => bail!(message),
                _ => {}
            }
        }
        bail!("Store closed before recipes arrived")
    };
    tokio::time::timeout(Duration::from_secs(timeout_seconds), wait)
        .await
        .context("Timed out fetching recipes")??;

    print_recipes(&store.state().recipes.recipes);
    Ok(())
}

fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes stored.");
        return;
    }
    for (index, recipe) in recipes.iter().enumerate() {
        println!("{}. {}", index + 1, recipe.name);
        println!("   {}", recipe.description);
        for ingredient in &recipe.ingredients {
            println!("   - {}", ingredient.label());
        }
    }
}
