mod entity_store;
pub use entity_store::{EntityStore, Error, Inconsistency};

mod position;
pub use position::DropTarget;

mod snapshot;
pub use snapshot::Snapshot;
