use std::env;

// Runtime constants, overridable through the environment.

const DEFAULT_HTTP_PORT: u16 = 5000;
const DEFAULT_SPECIES_URL: &str = "https://pokeapi.co/api/v2/pokemon-species";
const DEFAULT_TRANSLATION_URL: &str = "https://api.funtranslations.com/translate/shakespeare.json";

pub fn http_port() -> u16 {
    env::var("POKEDEX_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}

pub fn species_service_url() -> String {
    env::var("POKEMON_SPECIES_URL").unwrap_or_else(|_| DEFAULT_SPECIES_URL.to_string())
}

pub fn translation_service_url() -> String {
    env::var("SHAKESPEARE_TRANSLATION_URL").unwrap_or_else(|_| DEFAULT_TRANSLATION_URL.to_string())
}

// Base URLs of the two upstream services.
#[derive(Debug, Clone)]
pub struct UpstreamUrls {
    pub species: String,
    pub translation: String,
}

impl UpstreamUrls {
    pub fn from_env() -> Self {
        Self {
            species: species_service_url(),
            translation: translation_service_url(),
        }
    }
}
