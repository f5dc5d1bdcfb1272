pub mod cli;
pub mod config;
pub mod error;
pub mod eval;
pub mod exit;
pub mod explore;
pub mod graph;
pub mod report;
