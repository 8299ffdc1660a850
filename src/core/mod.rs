//! Core engine types shared by every detector: errors and configuration.

pub mod config;
pub mod errors;
