use reqwest::{Client, Url};
use serde_json::Value;

use crate::api::{ensure_success, parse_url, ApiError};
use crate::config::StorageConfig;
use crate::model::Recipe;

/// Client for the recipe list in the remote document store.
///
/// The whole list is one JSON document: fetched with GET, replaced with PUT.
#[derive(Clone)]
pub struct RecipeClient {
    http: Client,
    config: StorageConfig,
}

impl RecipeClient {
    pub fn new(http: Client, config: StorageConfig) -> Self {
        Self { http, config }
    }

    fn document_url(&self, token: Option<&str>) -> Result<Url, ApiError> {
        let mut url = parse_url(format!(
            "{}/{}.json",
            self.config.database_url.trim_end_matches('/'),
            self.config.collection
        ))?;
        if let Some(token) = token {
            url.query_pairs_mut().append_pair("auth", token);
        }
        Ok(url)
    }

    fn display_url(&self) -> String {
        format!(
            "{}/{}.json",
            self.config.database_url.trim_end_matches('/'),
            self.config.collection
        )
    }

    pub async fn fetch(&self, token: Option<&str>) -> Result<Vec<Recipe>, ApiError> {
        let url = self.document_url(token)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Connection {
                url: self.display_url(),
                source: e,
            })?;

        let body = ensure_success(response)
            .await?
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let recipes = decode_recipes(body)?;
        tracing::info!(count = recipes.len(), "Fetched recipes");
        Ok(recipes)
    }

    pub async fn store(&self, token: Option<&str>, recipes: &[Recipe]) -> Result<(), ApiError> {
        let url = self.document_url(token)?;
        let response = self
            .http
            .put(url)
            .json(recipes)
            .send()
            .await
            .map_err(|e| ApiError::Connection {
                url: self.display_url(),
                source: e,
            })?;

        ensure_success(response).await?;
        tracing::info!(count = recipes.len(), "Stored recipes");
        Ok(())
    }
}

/// Decode the stored document into a recipe list.
///
/// An empty store returns `null`. Arrays with deleted slots come back with
/// `null` holes, and sparse arrays come back as objects keyed by index.
fn decode_recipes(body: Value) -> Result<Vec<Recipe>, ApiError> {
    let items: Vec<Value> = match body {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| match (a.parse::<u64>(), b.parse::<u64>()) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => a.cmp(b),
            });
            entries.into_iter().map(|(_, value)| value).collect()
        }
        other => {
            return Err(ApiError::Decode(format!(
                "expected a recipe list, got {}",
                other
            )))
        }
    };

    items
        .into_iter()
        .filter(|item| !item.is_null())
        .map(|item| serde_json::from_value(item).map_err(|e| ApiError::Decode(e.to_string())))
        .collect()
}
