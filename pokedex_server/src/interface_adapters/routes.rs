use crate::interface_adapters::handlers::pokemon::{
    describe_pokemon, describe_pokemon_without_name, not_found,
};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // The wildcard keeps extra segments so the handler can reject them with a 400.
    Router::new()
        .route("/pokemon/", get(describe_pokemon_without_name))
        .route("/pokemon/{*name}", get(describe_pokemon))
        .fallback(not_found)
        .with_state(state)
}
