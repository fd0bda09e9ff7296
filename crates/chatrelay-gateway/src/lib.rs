pub mod config;
pub mod error;
pub mod framer;
pub mod routes;
pub mod state;

pub use routes::app_router;
pub use state::AppState;
