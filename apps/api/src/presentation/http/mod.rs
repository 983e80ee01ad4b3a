pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod params;
pub mod routes;
pub mod state;
