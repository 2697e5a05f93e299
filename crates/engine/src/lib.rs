//! Grimoire engine library.
//!
//! Server-side code for the character / magic item REST API.
//!
//! ## Structure
//!
//! - `stores/` - In-memory stores with monotonic id assignment
//! - `infrastructure/` - HTTP route handlers and DTOs
//! - `api/` - Router construction, error mapping, OpenAPI document
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod stores;

pub use app::App;
