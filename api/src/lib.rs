pub mod config;
pub mod routes;
pub mod server;
pub mod services;

pub use config::Config;
pub use server::{run_server, ServerHandle};
