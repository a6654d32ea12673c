/// A record with a stable, caller-assigned unique identifier.
///
/// The store never inspects an entity beyond its id. Ids are globally unique
/// across a whole store, including ids that also act as group containers.
///
/// The id must not change while the entity is held by a store; the order
/// lists reference entities by id, so a renamed id would strand the entity's
/// list entry.
pub trait Identified {
    /// The unique identifier of this record.
    fn id(&self) -> &str;
}
