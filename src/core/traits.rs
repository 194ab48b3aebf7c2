//! Core traits shared by the record store and the entity types
//!
//! The record store is generic over [`Record`]; each entity type states how
//! it is identified, who owns it and how its listings are ordered. New
//! records are built from a [`NewRecord`] draft once the store has allocated
//! an id and a timestamp.

use chrono::{DateTime, Utc};

/// How `list_for_user` orders records of a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Newest `created_at` first; equal timestamps keep insertion order
    NewestFirst,
    /// Insertion order
    Insertion,
}

/// A record kept in a [`RecordStore`](crate::core::RecordStore)
pub trait Record: Clone + Send + Sync + 'static {
    /// Display name of the record kind, used in `NotFound` errors
    const KIND: &'static str;

    /// Listing order for this kind
    const ORDER: ListOrder;

    /// The record's unique id
    fn id(&self) -> &str;

    /// Id of the user owning the record
    fn user_id(&self) -> &str;

    /// Creation timestamp, for kinds that carry one
    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

/// Caller-supplied fields of a record that does not exist yet
pub trait NewRecord {
    /// The record this draft turns into
    type Output: Record;

    /// Build the record, filling defaults for omitted fields
    ///
    /// # Arguments
    ///
    /// * `id` - Freshly allocated unique id
    /// * `now` - Creation timestamp for kinds that carry one
    fn into_record(self, id: String, now: DateTime<Utc>) -> Self::Output;
}
