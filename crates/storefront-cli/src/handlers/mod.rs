//! Command handlers.

pub mod invoke;
pub mod routes;
pub mod serve;
