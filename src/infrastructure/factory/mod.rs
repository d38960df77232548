//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration.
//!
//! # Submodules
//!
//! - [`solver`] - Exact solver and selector construction

pub mod solver;
