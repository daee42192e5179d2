pub mod describe;

#[cfg(test)]
pub(crate) mod test_support;

pub use describe::{DescribePokemonUseCase, parse_pokemon_name};
