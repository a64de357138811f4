pub mod config;
pub mod handler;
pub mod model;
pub mod routes;
pub mod server;
