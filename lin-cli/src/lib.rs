// ABOUTME: Library exports for the lin CLI modules
// ABOUTME: Makes handlers and the workspace layer available to integration tests

pub mod cli;
pub mod cli_output;
pub mod commands;
pub mod config;
pub mod constants;
pub mod context;
pub mod output;
pub mod types;
pub mod workspace;
