use crate::domain::{DescribeError, Pokemon, PokemonFetcher, Translator};

// Validate the path remainder after the `/pokemon/` prefix.
// A single segment is passed through untouched, even when empty.
pub fn parse_pokemon_name(rest: &str) -> Result<&str, DescribeError> {
    if rest.contains('/') {
        return Err(DescribeError::InvalidRequest);
    }
    Ok(rest)
}

// Fetch-then-translate use case with injected upstream ports.
pub struct DescribePokemonUseCase<'a> {
    pub fetcher: &'a dyn PokemonFetcher,
    pub translator: &'a dyn Translator,
}

impl DescribePokemonUseCase<'_> {
    pub async fn execute(&self, rest: &str) -> Result<Pokemon, DescribeError> {
        let name = parse_pokemon_name(rest)?;

        let pokemon = self
            .fetcher
            .fetch(name)
            .await
            .map_err(|err| DescribeError::Fetch(err.to_string()))?
            .ok_or(DescribeError::NotFound)?;

        // Translation depends on the fetched description, so this runs strictly after.
        let translated = self
            .translator
            .translate(&pokemon.description)
            .await
            .map_err(|err| DescribeError::Translate(err.to_string()))?;

        Pokemon::new(name, translated).ok_or(DescribeError::NotFound)
    }
}
