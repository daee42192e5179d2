use async_trait::async_trait;

use crate::domain::entities::Pokemon;
use crate::domain::errors::BoxError;

// Port over the species API.
// `Ok(None)` means the name is unknown or has no English description.
#[async_trait]
pub trait PokemonFetcher: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<Option<Pokemon>, BoxError>;
}

// Port over the translation API.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, BoxError>;
}
