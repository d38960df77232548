//! Fleet selection strategies and the shared constraint validator.

pub mod exact;
pub mod greedy;
pub mod validator;
