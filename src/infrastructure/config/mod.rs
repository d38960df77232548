//! Infrastructure configuration modules.

pub mod experiment;
pub mod logging;
pub mod pool;
pub mod selection;
pub mod settings;
pub mod solver;
