use crate::domain::{BoxError, Pokemon, PokemonFetcher};
use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};
use serde::Deserialize;
use std::fmt;
use url::Url;

const ENGLISH: &str = "en";

// Thin wrapper around reqwest for species lookups.
#[derive(Clone)]
pub struct SpeciesClient {
    http: Client,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct SpeciesResponse {
    #[serde(default)]
    flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Deserialize)]
struct FlavorTextEntry {
    flavor_text: String,
    language: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug)]
pub enum SpeciesClientError {
    InvalidBaseUrl(String),
    Transport(reqwest::Error),
    Decode(reqwest::Error),
}

impl fmt::Display for SpeciesClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesClientError::InvalidBaseUrl(url) => {
                write!(f, "species base url cannot take a path segment: {url}")
            }
            SpeciesClientError::Transport(err) => write!(f, "species transport error: {err}"),
            SpeciesClientError::Decode(err) => write!(f, "species response decode error: {err}"),
        }
    }
}

impl std::error::Error for SpeciesClientError {}

impl SpeciesClient {
    pub fn new(base_url: &str) -> Result<Self, SpeciesClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| SpeciesClientError::InvalidBaseUrl(format!("{base_url} ({err})")))?;
        if base_url.cannot_be_a_base() {
            return Err(SpeciesClientError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    // Append the name as a single encoded path segment.
    fn species_url(&self, name: &str) -> Result<Url, SpeciesClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SpeciesClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }
}

// Only a UTF-8 JSON payload is treated as a species record.
// A bare `application/json` counts as UTF-8.
fn is_utf8_json(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return false;
    };
    let mut parts = content_type.split(';').map(str::trim);
    let essence = parts.next().unwrap_or_default();
    if !essence.eq_ignore_ascii_case("application/json") {
        return false;
    }

    parts.all(|param| match param.split_once('=') {
        Some((key, value)) if key.trim().eq_ignore_ascii_case("charset") => value
            .trim()
            .trim_matches('"')
            .eq_ignore_ascii_case("utf-8"),
        _ => true,
    })
}

#[async_trait]
impl PokemonFetcher for SpeciesClient {
    async fn fetch(&self, name: &str) -> Result<Option<Pokemon>, BoxError> {
        let url = self.species_url(name)?;
        tracing::debug!(%url, "fetching species.");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(SpeciesClientError::Transport)?;

        // The species API answers unknown names with a plain-text body.
        let content_type = res
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        if !is_utf8_json(content_type) {
            tracing::info!(content_type = ?content_type, "species response is not json.");
            return Ok(None);
        }

        let species = res
            .json::<SpeciesResponse>()
            .await
            .map_err(SpeciesClientError::Decode)?;

        // First English entry wins; the requested name is kept as-is.
        Ok(species
            .flavor_text_entries
            .into_iter()
            .find(|entry| entry.language.name == ENGLISH)
            .and_then(|entry| Pokemon::new(name, entry.flavor_text)))
    }
}
