//! HTTP request handlers for the mock server.

pub mod entities;

pub use entities::*;
