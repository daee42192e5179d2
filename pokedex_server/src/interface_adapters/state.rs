use crate::domain::{PokemonFetcher, Translator};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Arc<dyn Trait> lets production clients and test doubles slot in alike.
    pub fetcher: Arc<dyn PokemonFetcher>,
    pub translator: Arc<dyn Translator>,
}
