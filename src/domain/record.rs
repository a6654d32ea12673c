use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Identified;

/// An HTTP request definition.
///
/// Only the fields the collection model cares about are represented here;
/// execution-time concerns (headers, body, timeouts) live with the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name shown in the navigation tree.
    pub name: String,
    /// Target URL.
    pub url: String,
    /// HTTP method.
    #[serde(default)]
    pub method: Method,
    /// When the request was created.
    pub created: DateTime<Utc>,
}

impl Request {
    /// Construct a new request with a freshly minted id.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            url: url.into(),
            method: Method::default(),
            created: Utc::now(),
        }
    }
}

/// An HTTP method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// HTTP GET.
    #[default]
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP PATCH.
    Patch,
    /// HTTP DELETE.
    Delete,
    /// HTTP HEAD.
    Head,
    /// HTTP OPTIONS.
    Options,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        };
        f.write_str(s)
    }
}

/// A named container of requests.
///
/// Groups own an ordered child list in the store; they cannot contain other
/// groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestGroup {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name shown in the navigation tree.
    pub name: String,
    /// When the group was created.
    pub created: DateTime<Utc>,
}

impl RequestGroup {
    /// Construct a new group with a freshly minted id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created: Utc::now(),
        }
    }
}

/// A named set of variable substitutions.
///
/// Scenarios are a flat collection: they are stored in an [`crate::EntityStore`]
/// with no groups, which exercises the store's generic, single-level shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Variable name to value substitutions.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl Scenario {
    /// Construct a new scenario with a freshly minted id and no variables.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            variables: BTreeMap::new(),
        }
    }
}

/// One entry in the request collection: either a request or a group.
///
/// The variant is encoded in the serialized form as a `type` field
/// (`"request"` or `"group"`), so persisted collections remain readable if
/// further kinds are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RequestEntry {
    /// A leaf request.
    Request(Request),
    /// A group of requests.
    Group(RequestGroup),
}

/// The kind of a [`RequestEntry`], used in mismatch reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A leaf request.
    Request,
    /// A group of requests.
    Group,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => f.write_str("request"),
            Self::Group => f.write_str("group"),
        }
    }
}

/// Error raised when an entry's variant does not match the expected kind.
///
/// Raised by the typed accessors on [`RequestEntry`] during read/write
/// translation at the serialization boundary, never by the store itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("entity {id} is a {actual}, expected a {expected}")]
pub struct InvalidKind {
    /// Id of the offending entry.
    pub id: String,
    /// The kind the caller asked for.
    pub expected: EntryKind,
    /// The kind actually stored.
    pub actual: EntryKind,
}

impl RequestEntry {
    /// The kind of this entry.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::Request(_) => EntryKind::Request,
            Self::Group(_) => EntryKind::Group,
        }
    }

    /// Whether this entry is a group.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// The display name of the entry, whichever variant it is.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Request(request) => &request.name,
            Self::Group(group) => &group.name,
        }
    }

    /// Borrow the entry as a request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKind`] if the entry is a group.
    pub fn as_request(&self) -> Result<&Request, InvalidKind> {
        match self {
            Self::Request(request) => Ok(request),
            Self::Group(group) => Err(InvalidKind {
                id: group.id.clone(),
                expected: EntryKind::Request,
                actual: EntryKind::Group,
            }),
        }
    }

    /// Borrow the entry as a group.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKind`] if the entry is a request.
    pub fn as_group(&self) -> Result<&RequestGroup, InvalidKind> {
        match self {
            Self::Group(group) => Ok(group),
            Self::Request(request) => Err(InvalidKind {
                id: request.id.clone(),
                expected: EntryKind::Group,
                actual: EntryKind::Request,
            }),
        }
    }
}

impl Identified for Request {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for RequestGroup {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Scenario {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for RequestEntry {
    fn id(&self) -> &str {
        match self {
            Self::Request(request) => &request.id,
            Self::Group(group) => &group.id,
        }
    }
}

impl From<Request> for RequestEntry {
    fn from(request: Request) -> Self {
        Self::Request(request)
    }
}

impl From<RequestGroup> for RequestEntry {
    fn from(group: RequestGroup) -> Self {
        Self::Group(group)
    }
}
