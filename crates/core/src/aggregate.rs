//! Aggregate root trait for consistency-bounded domain models.

use crate::entity::Entity;
use crate::field::GuardedFields;

/// Aggregate root marker.
///
/// An aggregate is an entity whose invariants are enforced by its own
/// operations only. State changes after construction go through the
/// aggregate's guarded field set, so the identity can never be written.
pub trait AggregateRoot: Entity + GuardedFields {
    /// Short, stable name of the aggregate type, recorded on log events.
    fn aggregate_type() -> &'static str;
}
