pub mod api;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod mapper;
pub mod notion;
pub mod server;
pub mod state;

#[cfg(test)]
pub mod testing;
