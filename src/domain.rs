//! Domain models for editable entities.
//!
//! This module contains the record types managed by the store: the identity
//! seam ([`Identified`]) and the concrete editable record kinds.

/// The identity trait connecting record types to the store.
pub mod entity;
pub use entity::Identified;

/// Editable record types and their tagged union.
pub mod record;
pub use record::{EntryKind, InvalidKind, Method, Request, RequestEntry, RequestGroup, Scenario};
