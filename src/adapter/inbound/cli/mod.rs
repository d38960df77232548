//! CLI module graph.

pub mod claim;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod frontier;
pub mod operator;
pub mod output;
pub mod paths;
pub mod report;
pub mod run;
pub mod select;
