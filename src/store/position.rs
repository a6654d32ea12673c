//! Destination resolution for drag-drop placement.
//!
//! A drop gesture arrives as a [`DropTarget`]: the id of the row the entity
//! was dropped on, whether the pointer was in the lower half of that row,
//! and whether the row is a group header. This module translates the
//! gesture into a concrete list-and-index destination against the store's
//! order lists. It is pure: all functions borrow the lists and never mutate.

use std::collections::HashMap;

/// A placement hint produced by the UI's drop-target geometry.
#[derive(Debug, Clone, Copy)]
pub struct DropTarget<'a> {
    /// The id of the entity the drop landed on, or `None` for a drop above
    /// the whole collection.
    pub destination_id: Option<&'a str>,
    /// Whether the pointer was in the lower half of the destination row
    /// (drop below the row rather than above it).
    pub on_lower_half: bool,
    /// Whether the destination row is a group header, making the dropped
    /// entity the group's first child.
    pub is_section: bool,
}

impl<'a> DropTarget<'a> {
    /// A drop above the whole collection: the entity becomes the first
    /// top-level row.
    #[must_use]
    pub const fn top() -> Self {
        Self {
            destination_id: None,
            on_lower_half: false,
            is_section: false,
        }
    }

    /// A drop on the upper half of the destination row.
    #[must_use]
    pub const fn above(destination_id: &'a str) -> Self {
        Self {
            destination_id: Some(destination_id),
            on_lower_half: false,
            is_section: false,
        }
    }

    /// A drop on the lower half of the destination row.
    #[must_use]
    pub const fn below(destination_id: &'a str) -> Self {
        Self {
            destination_id: Some(destination_id),
            on_lower_half: true,
            is_section: false,
        }
    }

    /// A drop onto a group header.
    #[must_use]
    pub const fn into_group(destination_id: &'a str) -> Self {
        Self {
            destination_id: Some(destination_id),
            on_lower_half: false,
            is_section: true,
        }
    }
}

/// Identity of the list that owns an id: the top-level list or one group's
/// child list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ListKey {
    TopLevel,
    Group(String),
}

/// A concrete position: which list, and the index within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) list: ListKey,
    pub(crate) index: usize,
}

/// A resolved destination for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Destination {
    /// Insert at a concrete slot.
    At(Slot),
    /// The destination id resolved to nothing; fall back to appending to
    /// the top-level list.
    AppendTopLevel,
}

/// Find the list and index currently holding `id`.
///
/// The top-level list is searched first, then each group's child list in
/// map-iteration order. Under the partition invariant an id lives in at
/// most one list, so the order only matters for inconsistent input.
pub(crate) fn locate(
    top_level_ids: &[String],
    child_ids: &HashMap<String, Vec<String>>,
    id: &str,
) -> Option<Slot> {
    if let Some(index) = top_level_ids.iter().position(|entry| entry == id) {
        return Some(Slot {
            list: ListKey::TopLevel,
            index,
        });
    }
    child_slot(child_ids, id).map(|(group_id, index)| Slot {
        list: ListKey::Group(group_id.to_string()),
        index,
    })
}

/// Find the group and index holding `id` as a child, if any.
pub(crate) fn child_slot<'a>(
    child_ids: &'a HashMap<String, Vec<String>>,
    id: &str,
) -> Option<(&'a str, usize)> {
    child_ids.iter().find_map(|(group_id, children)| {
        children
            .iter()
            .position(|child| child == id)
            .map(|index| (group_id.as_str(), index))
    })
}

/// Translate a drop gesture into a destination.
///
/// Gestures never fail: an absent destination id means "front of the
/// top-level list", a group header with `is_section` means "front of that
/// group", and an id that cannot be found degrades to a top-level append.
pub(crate) fn resolve(
    top_level_ids: &[String],
    child_ids: &HashMap<String, Vec<String>>,
    target: DropTarget<'_>,
) -> Destination {
    let Some(destination_id) = target.destination_id else {
        return Destination::At(Slot {
            list: ListKey::TopLevel,
            index: 0,
        });
    };

    // Dropping onto a group header prepends, regardless of on_lower_half.
    if target.is_section && child_ids.contains_key(destination_id) {
        return Destination::At(Slot {
            list: ListKey::Group(destination_id.to_string()),
            index: 0,
        });
    }

    match locate(top_level_ids, child_ids, destination_id) {
        Some(mut slot) => {
            slot.index += usize::from(target.on_lower_half);
            Destination::At(slot)
        }
        None => Destination::AppendTopLevel,
    }
}
