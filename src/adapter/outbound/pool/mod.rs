//! Loaders for the upstream vessel attribute table.

pub mod csv;
