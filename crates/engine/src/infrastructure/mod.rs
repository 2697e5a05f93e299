//! External interface implementations.

pub mod http;
