//! Resource store accessor: every SQL statement in the service lives here.
//!
//! Ownership is enforced at this layer. Each statement that touches a row by
//! id also binds the caller's `user_id` in the same predicate, so a
//! mismatched owner affects zero rows. There is no fetch-then-check path.

pub mod analytics;
pub mod events;
pub mod notes;
pub mod purge;
pub mod tasks;
