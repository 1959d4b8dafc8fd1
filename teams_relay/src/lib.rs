pub mod config;
pub mod decoder;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod orchestrator;
pub mod presenter;
#[cfg(test)]
pub mod tests;
