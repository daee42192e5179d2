// reqwest clients for the two upstream services, adapted to the domain ports.
pub mod species;
pub mod translation;

pub use species::{SpeciesClient, SpeciesClientError};
pub use translation::{TranslationClient, TranslationClientError};
