pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod logger;
pub mod notes;
pub mod simulator;
