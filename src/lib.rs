//! Indexed hierarchical entity collections.
//!
//! Every editable collection in the application (requests and request
//! groups, scenarios, authorizations, certificates, proxies) is held in an
//! [`EntityStore`]: a map from id to entity plus the presentation order
//! across a two-level hierarchy, a flat top-level list plus an ordered
//! child list for each entity that acts as a group.

pub mod domain;
pub use domain::{
    EntryKind, Identified, InvalidKind, Method, Request, RequestEntry, RequestGroup, Scenario,
};

/// The entity store and its ordering primitives.
pub mod store;
pub use store::{DropTarget, EntityStore, Error, Inconsistency, Snapshot};
