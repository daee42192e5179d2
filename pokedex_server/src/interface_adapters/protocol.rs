use crate::domain::Pokemon;
use serde::{Deserialize, Serialize};

// Success body for `GET /pokemon/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    pub description: String,
}

impl From<Pokemon> for PokemonResponse {
    fn from(pokemon: Pokemon) -> Self {
        Self {
            name: pokemon.name,
            description: pokemon.description,
        }
    }
}

// Error envelope; `status` mirrors the HTTP status code of the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
}
