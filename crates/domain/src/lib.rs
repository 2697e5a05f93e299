//! Grimoire domain library.
//!
//! Core entity types and error taxonomy for the character / magic item
//! API. This crate is deliberately free of async and web dependencies;
//! stores and HTTP handlers live in `grimoire-engine`.

pub mod entities;
pub mod error;

pub use entities::{Character, Item, AMULET_TYPE};
pub use error::DomainError;
