//! Meetbrief: HTTP and command-line front ends for the brief pipeline.

pub mod cli;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
