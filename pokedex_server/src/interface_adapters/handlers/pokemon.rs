use crate::domain::DescribeError;
use crate::interface_adapters::protocol::{ErrorResponse, PokemonResponse};
use crate::interface_adapters::response;
use crate::interface_adapters::state::AppState;
use crate::use_cases::DescribePokemonUseCase;
use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::Response,
};
use std::sync::Arc;

#[tracing::instrument(name = "describe_pokemon", skip_all, fields(name = tracing::field::Empty))]
pub async fn describe_pokemon(
    State(state): State<Arc<AppState>>,
    name: Result<Path<String>, PathRejection>,
) -> Response {
    // Undecodable paths are rejected the same way as multi-segment ones.
    let name = match name {
        Ok(Path(name)) => name,
        Err(rejection) => {
            tracing::info!(error = %rejection, "rejected pokemon path.");
            return response::error(&map_describe_error(&DescribeError::InvalidRequest));
        }
    };
    tracing::Span::current().record("name", name.as_str());

    describe(&state, &name).await
}

// `/pokemon/` with nothing after the prefix.
#[tracing::instrument(name = "describe_pokemon", skip_all, fields(name = ""))]
pub async fn describe_pokemon_without_name(State(state): State<Arc<AppState>>) -> Response {
    describe(&state, "").await
}

// Unknown routes still answer with a JSON envelope.
pub async fn not_found() -> Response {
    response::error(&map_describe_error(&DescribeError::NotFound))
}

async fn describe(state: &AppState, name: &str) -> Response {
    let use_case = DescribePokemonUseCase {
        fetcher: state.fetcher.as_ref(),
        translator: state.translator.as_ref(),
    };

    match use_case.execute(name).await {
        Ok(pokemon) => {
            tracing::info!("pokemon described.");
            response::send(&PokemonResponse::from(pokemon))
        }
        Err(err) => {
            match &err {
                DescribeError::Fetch(_) | DescribeError::Translate(_) => {
                    tracing::error!(error = %err, "upstream call failed.");
                }
                DescribeError::InvalidRequest | DescribeError::NotFound => {
                    tracing::info!(error = %err, "pokemon not described.");
                }
            }
            response::error(&map_describe_error(&err))
        }
    }
}

fn map_describe_error(err: &DescribeError) -> ErrorResponse {
    let status = match err {
        DescribeError::InvalidRequest => StatusCode::BAD_REQUEST,
        DescribeError::NotFound => StatusCode::NOT_FOUND,
        DescribeError::Fetch(_) | DescribeError::Translate(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    ErrorResponse {
        message: err.to_string(),
        status: status.as_u16(),
    }
}
