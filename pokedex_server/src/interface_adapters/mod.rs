pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod response;
pub mod routes;
pub mod state;
