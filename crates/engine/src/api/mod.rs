//! HTTP entry points.

pub mod docs;
pub mod http;
