//! Authentication service client: wire types, errors, and the HTTP transport.

pub mod api;
pub mod error;
pub mod types;
