//! The indexed entity store.
//!
//! [`EntityStore`] is the sole owner of the id-to-entity mapping and of the
//! two-level presentation order. After every public operation the following
//! holds:
//!
//! 1. Every id referenced by the top-level list or by any child list has an
//!    entry in the entity map.
//! 2. Every id in the entity map appears in exactly one place: the
//!    top-level list, or exactly one group's child list.
//! 3. Child lists are keyed by ids that are themselves entities.
//!
//! Lookups (`get`, and the mapping step of `children`) fail loudly on
//! unknown ids, since those indicate a stale reference in the caller.
//! Structural placements (`add`, `move_entity` destinations) come from
//! fuzzy UI gestures and never fail; unresolvable targets degrade to a safe
//! default position instead.

use std::{
    cell::OnceCell,
    collections::{HashMap, hash_map::Entry},
};

use tracing::instrument;

use crate::{
    domain::Identified,
    store::{
        Snapshot,
        position::{self, Destination, DropTarget, ListKey, Slot},
    },
};

/// Errors returned by lookup-style store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The referenced id does not exist where expected.
    #[error("entity {0} not found")]
    NotFound(String),
}

/// An in-memory collection of uniquely identified entities with a two-level
/// presentation order.
///
/// The store holds three collections: the entity map, the ordered top-level
/// id list, and an ordered child-id list per group. Entities that act as
/// containers ("groups") are ordinary entities whose id also keys a child
/// list; groups cannot contain other groups.
///
/// Read accessors return borrowed, immutable views. All mutation goes
/// through the documented operations, which keep the partition invariant
/// intact.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    /// Entity values, keyed by id. Carries no order of its own.
    entities: HashMap<String, T>,

    /// The authoritative top-level display order.
    top_level_ids: Vec<String>,

    /// Ordered child ids, keyed by the owning group's id.
    child_ids: HashMap<String, Vec<String>>,

    /// Memoized flat view of all values, rebuilt once per mutation epoch
    /// rather than once per read.
    values_cache: OnceCell<Vec<T>>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            entities: HashMap::new(),
            top_level_ids: Vec::new(),
            child_ids: HashMap::new(),
            values_cache: OnceCell::new(),
        }
    }
}

impl<T> EntityStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from already-validated collections.
    ///
    /// This is the deserialization entry point: the caller (typically via
    /// [`Snapshot`]) is responsible for supplying collections that satisfy
    /// the partition invariant. No validation is performed here; use
    /// [`Self::check`] to audit untrusted input.
    #[must_use]
    pub fn from_parts(
        entities: HashMap<String, T>,
        top_level_ids: Vec<String>,
        child_ids: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            entities,
            top_level_ids,
            child_ids,
            values_cache: OnceCell::new(),
        }
    }

    /// Removes every entity and all ordering state.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.top_level_ids.clear();
        self.child_ids.clear();
        self.values_cache.take();
    }

    /// The number of entities in the store, groups included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the store holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Whether an entity with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    /// Whether the given id owns a child list.
    #[must_use]
    pub fn is_group(&self, id: &str) -> bool {
        self.child_ids.contains_key(id)
    }

    /// The ordered top-level ids.
    #[must_use]
    pub fn top_level_ids(&self) -> &[String] {
        &self.top_level_ids
    }

    /// The ordered child ids of a group, or `None` if the id does not own a
    /// child list.
    #[must_use]
    pub fn child_ids_of(&self, group_id: &str) -> Option<&[String]> {
        self.child_ids.get(group_id).map(Vec::as_slice)
    }

    /// Looks up the entity for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no entity with that id exists.
    pub fn get(&self, id: &str) -> Result<&T, Error> {
        self.entities
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// The ordered child entities of a group.
    ///
    /// An id with no recorded child list yields an empty sequence; absence
    /// of a child list is the normal state for non-container entities.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if a listed child id has no entity,
    /// which can only happen when [`Self::from_parts`] was given
    /// inconsistent input.
    pub fn children(&self, group_id: &str) -> Result<Vec<&T>, Error> {
        self.child_ids
            .get(group_id)
            .into_iter()
            .flatten()
            .map(|child_id| self.get(child_id))
            .collect()
    }

    /// The group entity whose child list contains `id`, or `None` if the id
    /// is top-level or unknown.
    ///
    /// Linear in the number of groups; these are UI-sized collections, not
    /// bulk data.
    #[must_use]
    pub fn find_parent(&self, id: &str) -> Option<&T> {
        self.child_ids.iter().find_map(|(group_id, children)| {
            if children.iter().any(|child| child == id) {
                self.entities.get(group_id)
            } else {
                None
            }
        })
    }

    /// Moves an entity to the position described by a drop gesture.
    ///
    /// A `None` destination moves the entity to the front of the top-level
    /// list. A destination that is a group header (`is_section`) moves it
    /// to the front of that group's child list. Any other destination
    /// places the entity above the destination row, or below it when
    /// `on_lower_half` is set. A destination id that cannot be found
    /// degrades to a top-level append; the gesture never fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `id` itself is not held by any list.
    #[instrument(skip(self))]
    pub fn move_entity(&mut self, id: &str, target: DropTarget<'_>) -> Result<(), Error> {
        let source = self.locate(id)?;
        let destination = position::resolve(&self.top_level_ids, &self.child_ids, target);

        match destination {
            Destination::AppendTopLevel => {
                self.list_mut(&source.list).remove(source.index);
                self.top_level_ids.push(id.to_string());
            }
            Destination::At(dest) if dest.list == source.list => {
                let list = self.list_mut(&source.list);
                let index = dest.index.min(list.len());
                list.insert(index, id.to_string());
                // The insertion shifts the original occurrence right by one
                // unless it sat strictly before the insertion point.
                if source.index < index {
                    list.remove(source.index);
                } else {
                    list.remove(source.index + 1);
                }
            }
            Destination::At(dest) => {
                let dest_list = self.list_mut(&dest.list);
                let index = dest.index.min(dest_list.len());
                dest_list.insert(index, id.to_string());
                self.list_mut(&source.list).remove(source.index);
            }
        }

        self.values_cache.take();
        Ok(())
    }

    /// Removes the entity with the given id, unlinking it from whichever
    /// list holds it.
    ///
    /// Removing a group removes its child list and the child entities that
    /// list named, so no orphaned entities survive. Returns whether
    /// anything was removed.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: &str) -> bool {
        let unlinked = self.unlink(id);
        let existed = self.entities.remove(id).is_some();

        if let Some(children) = self.child_ids.remove(id) {
            // Groups cannot nest, so one pass over the children suffices.
            for child_id in &children {
                self.entities.remove(child_id);
            }
        }

        if unlinked || existed {
            self.values_cache.take();
            true
        } else {
            false
        }
    }

    /// Audits the store against its invariants.
    ///
    /// Returns every violation found, or an empty list for a consistent
    /// store. Intended for validating deserialized input and for tests;
    /// the mutation operations themselves never produce violations.
    #[must_use]
    pub fn check(&self) -> Vec<Inconsistency> {
        let mut issues = Vec::new();

        let mut listings: HashMap<&str, usize> = HashMap::new();
        for id in &self.top_level_ids {
            *listings.entry(id).or_default() += 1;
        }
        for children in self.child_ids.values() {
            for id in children {
                *listings.entry(id).or_default() += 1;
            }
        }

        for (&id, &count) in &listings {
            if !self.entities.contains_key(id) {
                issues.push(Inconsistency::MissingEntity { id: id.to_string() });
            }
            if count > 1 {
                issues.push(Inconsistency::DuplicateListing { id: id.to_string() });
            }
        }

        for id in self.entities.keys() {
            if !listings.contains_key(id.as_str()) {
                issues.push(Inconsistency::Unlisted { id: id.clone() });
            }
        }

        for group_id in self.child_ids.keys() {
            if !self.entities.contains_key(group_id) {
                issues.push(Inconsistency::UnknownGroup {
                    id: group_id.clone(),
                });
            }
        }

        issues
    }

    fn locate(&self, id: &str) -> Result<Slot, Error> {
        position::locate(&self.top_level_ids, &self.child_ids, id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Removes `id` from whichever order list holds it, leaving the entity
    /// map untouched. Returns whether a listing was removed.
    fn unlink(&mut self, id: &str) -> bool {
        if let Some(index) = self.top_level_ids.iter().position(|entry| entry == id) {
            self.top_level_ids.remove(index);
            return true;
        }
        let slot = position::child_slot(&self.child_ids, id)
            .map(|(group_id, index)| (group_id.to_string(), index));
        if let Some((group_id, index)) = slot {
            if let Some(children) = self.child_ids.get_mut(&group_id) {
                children.remove(index);
            }
            return true;
        }
        false
    }

    /// The order list identified by `key`. The key always originates from a
    /// lookup against this store, so the entry is present; `or_default`
    /// keeps the path panic-free regardless.
    fn list_mut(&mut self, key: &ListKey) -> &mut Vec<String> {
        match key {
            ListKey::TopLevel => &mut self.top_level_ids,
            ListKey::Group(group_id) => self.child_ids.entry(group_id.clone()).or_default(),
        }
    }
}

impl<T: Identified> EntityStore<T> {
    /// Replaces the stored value for an existing id, leaving its position
    /// untouched.
    ///
    /// Unknown ids are rejected rather than created: admitting a new id
    /// here would leave it absent from every order list. New entities go
    /// through [`Self::add`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no entity with the value's id exists.
    pub fn set(&mut self, entity: T) -> Result<(), Error> {
        match self.entities.entry(entity.id().to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(entity);
                self.values_cache.take();
                Ok(())
            }
            Entry::Vacant(slot) => Err(Error::NotFound(slot.into_key())),
        }
    }

    /// Inserts an entity and places its id in the display order.
    ///
    /// When `as_group` is set, an empty child list is created for the new
    /// id, making it a valid container. Placement follows the target:
    ///
    /// - a target that is a group appends the id to the end of that group's
    ///   children;
    /// - a target inside a group's child list inserts the id immediately
    ///   after that sibling;
    /// - a target in the top-level list inserts the id immediately before
    ///   the target row;
    /// - no target, or a target that cannot be found, appends to the end of
    ///   the top-level list.
    ///
    /// An unresolvable target is not an error. Re-adding an existing id
    /// replaces the value and repositions the id.
    pub fn add(&mut self, entity: T, as_group: bool, target_id: Option<&str>) {
        let id = entity.id().to_string();
        if self.entities.insert(id.clone(), entity).is_some() {
            self.unlink(&id);
        }
        if as_group {
            self.child_ids.entry(id.clone()).or_default();
        }
        self.place(id, target_id);
        self.values_cache.take();
    }

    /// Inserts `id` into the order lists according to the placement rules
    /// of [`Self::add`].
    fn place(&mut self, id: String, target_id: Option<&str>) {
        let Some(target) = target_id else {
            self.top_level_ids.push(id);
            return;
        };
        if let Some(children) = self.child_ids.get_mut(target) {
            children.push(id);
            return;
        }
        let sibling = position::child_slot(&self.child_ids, target)
            .map(|(group_id, index)| (group_id.to_string(), index));
        if let Some((group_id, index)) = sibling {
            // After the sibling inside a group, but before the target at
            // top level. The asymmetry is long-standing observed behavior.
            if let Some(children) = self.child_ids.get_mut(&group_id) {
                children.insert(index + 1, id);
            }
            return;
        }
        if let Some(index) = self.top_level_ids.iter().position(|entry| entry == target) {
            self.top_level_ids.insert(index, id);
            return;
        }
        self.top_level_ids.push(id);
    }
}

impl<T: Clone> EntityStore<T> {
    /// A flat view of every entity in the store.
    ///
    /// No order is guaranteed beyond stability until the next mutation. The
    /// view is memoized: it is rebuilt at most once per mutation epoch, so
    /// repeated reads from a render loop are cheap.
    #[must_use]
    pub fn values(&self) -> &[T] {
        self.values_cache
            .get_or_init(|| self.entities.values().cloned().collect())
    }

    /// Captures the store's state as a [`Snapshot`] for the serialization
    /// boundary.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<T> {
        Snapshot {
            entities: self.entities.clone(),
            top_level_ids: self.top_level_ids.clone(),
            child_ids: self.child_ids.clone(),
        }
    }
}

/// A single invariant violation reported by [`EntityStore::check`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Inconsistency {
    /// An order list references an id with no entity.
    #[error("id {id} is listed but has no entity")]
    MissingEntity {
        /// The dangling id.
        id: String,
    },
    /// An entity's id appears in no order list.
    #[error("entity {id} appears in no order list")]
    Unlisted {
        /// The unlisted id.
        id: String,
    },
    /// An id appears in more than one place across the order lists.
    #[error("id {id} is listed more than once")]
    DuplicateListing {
        /// The duplicated id.
        id: String,
    },
    /// A child list is keyed by an id with no entity.
    #[error("child list owner {id} has no entity")]
    UnknownGroup {
        /// The unknown group id.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        id: String,
        label: String,
    }

    impl Identified for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            label: format!("item {id}"),
        }
    }

    /// `[a, b]` at top level plus group `g` with children `[x, y]`.
    fn seeded() -> EntityStore<Item> {
        let mut store = EntityStore::new();
        store.add(item("a"), false, None);
        store.add(item("b"), false, None);
        store.add(item("g"), true, None);
        store.add(item("x"), false, Some("g"));
        store.add(item("y"), false, Some("g"));
        store
    }

    #[test]
    fn seeded_store_is_consistent() {
        let store = seeded();
        assert_eq!(store.top_level_ids(), ["a", "b", "g"]);
        assert_eq!(store.child_ids_of("g").unwrap(), ["x", "y"]);
        assert_eq!(store.check(), []);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = seeded();
        assert_eq!(
            store.get("missing"),
            Err(Error::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn children_of_a_non_group_is_empty() {
        let store = seeded();
        assert_eq!(store.children("a").unwrap(), Vec::<&Item>::new());
        assert_eq!(store.children("missing").unwrap(), Vec::<&Item>::new());
    }

    #[test]
    fn children_are_returned_in_list_order() {
        let store = seeded();
        let children = store.children("g").unwrap();
        let ids: Vec<&str> = children.iter().map(|child| child.id()).collect();
        assert_eq!(ids, ["x", "y"]);
    }

    #[test]
    fn find_parent_resolves_group_membership() {
        let store = seeded();
        assert_eq!(store.find_parent("x").unwrap().id(), "g");
        assert!(store.find_parent("a").is_none());
        assert!(store.find_parent("missing").is_none());
    }

    #[test]
    fn set_replaces_value_without_touching_order() {
        let mut store = seeded();
        let order_before = store.top_level_ids().to_vec();

        store
            .set(Item {
                id: "b".to_string(),
                label: "renamed".to_string(),
            })
            .unwrap();

        assert_eq!(store.get("b").unwrap().label, "renamed");
        assert_eq!(store.top_level_ids(), order_before.as_slice());
    }

    #[test]
    fn set_rejects_unknown_id() {
        let mut store = seeded();
        let error = store.set(item("missing")).unwrap_err();
        assert_eq!(error, Error::NotFound("missing".to_string()));
        assert!(!store.contains("missing"));
    }

    #[test]
    fn add_with_group_target_appends_to_its_children() {
        let mut store = seeded();
        store.add(item("z"), false, Some("g"));
        assert_eq!(store.child_ids_of("g").unwrap(), ["x", "y", "z"]);
        assert_eq!(store.check(), []);
    }

    #[test]
    fn add_with_child_target_inserts_after_the_sibling() {
        let mut store = seeded();
        store.add(item("z"), false, Some("x"));
        assert_eq!(store.child_ids_of("g").unwrap(), ["x", "z", "y"]);
    }

    #[test]
    fn add_with_top_level_target_inserts_before_it() {
        let mut store = seeded();
        store.add(item("z"), false, Some("b"));
        assert_eq!(store.top_level_ids(), ["a", "z", "b", "g"]);
    }

    #[test]
    fn add_with_unresolvable_target_appends_to_top_level() {
        let mut store = seeded();
        store.add(item("z"), false, Some("nonexistent-id"));
        assert_eq!(store.top_level_ids(), ["a", "b", "g", "z"]);
        assert_eq!(store.check(), []);
    }

    #[test]
    fn re_adding_an_existing_id_repositions_it() {
        let mut store = seeded();
        store.add(item("a"), false, Some("g"));
        assert_eq!(store.top_level_ids(), ["b", "g"]);
        assert_eq!(store.child_ids_of("g").unwrap(), ["x", "y", "a"]);
        assert_eq!(store.check(), []);
    }

    #[test]
    fn add_then_remove_round_trips() {
        let mut store = seeded();
        let top_before = store.top_level_ids().to_vec();
        let children_before = store.child_ids_of("g").unwrap().to_vec();
        let len_before = store.len();

        store.add(item("temp"), false, None);
        assert!(store.remove("temp"));

        assert_eq!(store.top_level_ids(), top_before.as_slice());
        assert_eq!(store.child_ids_of("g").unwrap(), children_before.as_slice());
        assert_eq!(store.len(), len_before);
    }

    #[test]
    fn remove_unknown_id_returns_false() {
        let mut store = seeded();
        assert!(!store.remove("missing"));
    }

    #[test]
    fn removing_a_child_unlinks_it_from_its_group() {
        let mut store = seeded();
        assert!(store.remove("x"));
        assert_eq!(store.child_ids_of("g").unwrap(), ["y"]);
        assert!(!store.contains("x"));
        assert_eq!(store.check(), []);
    }

    #[test]
    fn removing_group_cascades_to_children() {
        let mut store = seeded();
        assert!(store.remove("g"));

        assert_eq!(store.top_level_ids(), ["a", "b"]);
        assert!(!store.contains("g"));
        assert!(!store.contains("x"));
        assert!(!store.contains("y"));
        assert!(store.child_ids_of("g").is_none());
        assert_eq!(store.check(), []);
    }

    #[test]
    fn move_with_no_destination_goes_to_the_front() {
        let mut store = seeded();
        store.move_entity("b", DropTarget::top()).unwrap();
        assert_eq!(store.top_level_ids(), ["b", "a", "g"]);
        assert_eq!(store.check(), []);
    }

    #[test]
    fn move_unknown_id_is_not_found() {
        let mut store = seeded();
        let error = store
            .move_entity("missing", DropTarget::top())
            .unwrap_err();
        assert_eq!(error, Error::NotFound("missing".to_string()));
    }

    #[test]
    fn move_onto_group_header_prepends_regardless_of_half() {
        for on_lower_half in [false, true] {
            let mut store = seeded();
            let mut target = DropTarget::into_group("g");
            target.on_lower_half = on_lower_half;

            store.move_entity("a", target).unwrap();

            assert_eq!(store.top_level_ids(), ["b", "g"]);
            assert_eq!(store.child_ids_of("g").unwrap(), ["a", "x", "y"]);
            assert_eq!(store.check(), []);
        }
    }

    #[test]
    fn same_list_move_accounts_for_the_insertion_shift() {
        // [a, b, c, d]: moving a above c must yield [b, a, c, d].
        let mut store = EntityStore::new();
        for id in ["a", "b", "c", "d"] {
            store.add(item(id), false, None);
        }

        store.move_entity("a", DropTarget::above("c")).unwrap();

        assert_eq!(store.top_level_ids(), ["b", "a", "c", "d"]);
        assert_eq!(store.check(), []);
    }

    #[test]
    fn same_list_move_backwards_keeps_neighbours_intact() {
        let mut store = EntityStore::new();
        for id in ["a", "b", "c", "d"] {
            store.add(item(id), false, None);
        }

        store.move_entity("d", DropTarget::above("b")).unwrap();

        assert_eq!(store.top_level_ids(), ["a", "d", "b", "c"]);
    }

    #[test]
    fn move_to_own_position_is_a_no_op() {
        let mut store = seeded();

        store.move_entity("b", DropTarget::above("b")).unwrap();
        assert_eq!(store.top_level_ids(), ["a", "b", "g"]);

        store.move_entity("b", DropTarget::below("b")).unwrap();
        assert_eq!(store.top_level_ids(), ["a", "b", "g"]);

        store.move_entity("x", DropTarget::above("x")).unwrap();
        assert_eq!(store.child_ids_of("g").unwrap(), ["x", "y"]);
    }

    #[test]
    fn cross_list_move_below_a_child() {
        let mut store = seeded();

        store.move_entity("b", DropTarget::below("x")).unwrap();

        assert_eq!(store.top_level_ids(), ["a", "g"]);
        assert_eq!(store.child_ids_of("g").unwrap(), ["x", "b", "y"]);
        assert_eq!(store.check(), []);
    }

    #[test]
    fn cross_list_move_out_of_a_group() {
        let mut store = seeded();

        store.move_entity("y", DropTarget::above("a")).unwrap();

        assert_eq!(store.top_level_ids(), ["y", "a", "b", "g"]);
        assert_eq!(store.child_ids_of("g").unwrap(), ["x"]);
        assert_eq!(store.check(), []);
    }

    #[test]
    fn move_to_unknown_destination_appends_to_top_level() {
        let mut store = seeded();

        store.move_entity("x", DropTarget::above("missing")).unwrap();

        assert_eq!(store.top_level_ids(), ["a", "b", "g", "x"]);
        assert_eq!(store.child_ids_of("g").unwrap(), ["y"]);
        assert_eq!(store.check(), []);
    }

    #[test]
    fn partition_invariant_survives_an_operation_storm() {
        let mut store = seeded();

        store.add(item("h"), true, None);
        store.move_entity("x", DropTarget::into_group("h")).unwrap();
        store.move_entity("a", DropTarget::below("x")).unwrap();
        store.add(item("z"), false, Some("y"));
        store.remove("b");
        store.move_entity("y", DropTarget::top()).unwrap();
        store
            .set(Item {
                id: "z".to_string(),
                label: "replaced".to_string(),
            })
            .unwrap();
        store.remove("h");

        assert_eq!(store.check(), []);
    }

    #[test]
    fn values_reflect_mutations() {
        let mut store = seeded();
        assert_eq!(store.values().len(), 5);

        // Same epoch: the memoized slice is stable.
        let first = store.values().to_vec();
        assert_eq!(store.values(), first.as_slice());

        store.remove("g");
        assert_eq!(store.values().len(), 2);

        store.add(item("w"), false, None);
        let ids: Vec<&str> = store.values().iter().map(|value| value.id()).collect();
        assert!(ids.contains(&"w"));
    }

    #[test]
    fn clear_empties_everything() {
        let mut store = seeded();
        store.clear();
        assert!(store.is_empty());
        assert!(store.top_level_ids().is_empty());
        assert!(store.child_ids_of("g").is_none());
        assert!(store.values().is_empty());
    }

    #[test]
    fn from_parts_accepts_collections_verbatim() {
        let entities = HashMap::from([
            ("a".to_string(), item("a")),
            ("g".to_string(), item("g")),
            ("x".to_string(), item("x")),
        ]);
        let store = EntityStore::from_parts(
            entities,
            vec!["a".to_string(), "g".to_string()],
            HashMap::from([("g".to_string(), vec!["x".to_string()])]),
        );

        assert_eq!(store.top_level_ids(), ["a", "g"]);
        assert_eq!(store.find_parent("x").unwrap().id(), "g");
        assert_eq!(store.check(), []);
    }

    #[test]
    fn check_reports_inconsistent_input() {
        let store: EntityStore<Item> = EntityStore::from_parts(
            HashMap::from([("orphan".to_string(), item("orphan"))]),
            vec!["ghost".to_string()],
            HashMap::from([("phantom".to_string(), Vec::new())]),
        );

        let issues = store.check();
        assert!(issues.contains(&Inconsistency::MissingEntity {
            id: "ghost".to_string()
        }));
        assert!(issues.contains(&Inconsistency::Unlisted {
            id: "orphan".to_string()
        }));
        assert!(issues.contains(&Inconsistency::UnknownGroup {
            id: "phantom".to_string()
        }));
    }

    #[test]
    fn check_reports_duplicate_listings() {
        let store: EntityStore<Item> = EntityStore::from_parts(
            HashMap::from([("a".to_string(), item("a")), ("g".to_string(), item("g"))]),
            vec!["a".to_string(), "g".to_string()],
            HashMap::from([("g".to_string(), vec!["a".to_string()])]),
        );

        assert!(store.check().contains(&Inconsistency::DuplicateListing {
            id: "a".to_string()
        }));
    }
}
