pub mod entities;
pub mod errors;
pub mod ports;

// Re-export the domain boundary types and ports.
pub use entities::Pokemon;
pub use errors::{BoxError, DescribeError};
pub use ports::{PokemonFetcher, Translator};
