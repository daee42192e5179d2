use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{BoxError, Pokemon, PokemonFetcher, Translator};

pub(crate) type CallLog = Arc<Mutex<Vec<String>>>;

// In-memory fetcher keyed by requested name; unknown names resolve to `None`.
#[derive(Clone, Default)]
pub(crate) struct StubFetcher {
    pokemon: HashMap<String, Pokemon>,
    failure: Option<String>,
    calls: CallLog,
}

impl StubFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_pokemon(self, name: &str, description: &str) -> Self {
        self.with_pokemon_named(name, name, description)
    }

    // Register a record whose stored name differs from the lookup key.
    pub(crate) fn with_pokemon_named(mut self, key: &str, name: &str, description: &str) -> Self {
        self.pokemon.insert(
            key.to_string(),
            Pokemon {
                name: name.to_string(),
                description: description.to_string(),
            },
        );
        self
    }

    pub(crate) fn failing(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl PokemonFetcher for StubFetcher {
    async fn fetch(&self, name: &str) -> Result<Option<Pokemon>, BoxError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(name.to_string());

        if let Some(reason) = &self.failure {
            return Err(reason.clone().into());
        }
        Ok(self.pokemon.get(name).cloned())
    }
}

// In-memory translator; any text without a registered translation fails.
#[derive(Clone, Default)]
pub(crate) struct StubTranslator {
    translations: HashMap<String, String>,
    calls: CallLog,
}

impl StubTranslator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_translation(mut self, text: &str, translated: &str) -> Self {
        self.translations
            .insert(text.to_string(), translated.to_string());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(&self, text: &str) -> Result<String, BoxError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(text.to_string());

        self.translations
            .get(text)
            .cloned()
            .ok_or_else(|| "some error".into())
    }
}
