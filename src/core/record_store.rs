//! Thread-safe keyed storage for one record kind
//!
//! This module provides the `RecordStore` struct, an in-memory map from id to
//! record used for users, cards, transactions and contacts alike.
//!
//! # Design
//!
//! `RecordStore` uses `DashMap` (a concurrent HashMap) so actix workers can
//! read and write records concurrently. Mutations run inside a closure while
//! the record's entry lock is held, so a read-modify-write of one record can
//! never interleave with another writer of the same record.
//!
//! The store is a flat keyed map: no uniqueness beyond the id, no joins and
//! no cascading deletes.
//!
//! # Ordering
//!
//! Every record remembers an insertion sequence number. Listings sort on it
//! to give contacts their insertion order and to keep equal timestamps
//! stable for kinds listed newest first.

use crate::core::traits::{ListOrder, NewRecord, Record};
use crate::types::WalletError;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Allocate a fresh unique record id
pub fn next_id() -> String {
    Uuid::new_v4().to_string()
}

/// A stored record with its insertion sequence number
#[derive(Debug, Clone)]
struct Slot<R> {
    seq: u64,
    record: R,
}

/// Thread-safe store for records of one kind
///
/// # Thread Safety
///
/// All methods take `&self` and are safe to call from multiple threads. The
/// internal `DashMap` ensures that:
/// - Reads of different records don't block each other
/// - Writes to the same record are serialized
/// - Closures passed to [`update`](Self::update) and
///   [`with_entry`](Self::with_entry) observe and modify a record atomically
#[derive(Debug)]
pub struct RecordStore<R: Record> {
    /// Map of record id to stored slot
    records: DashMap<String, Slot<R>>,

    /// Next insertion sequence number
    next_seq: AtomicU64,
}

impl<R: Record> RecordStore<R> {
    /// Create a new empty store
    pub fn new() -> Self {
        RecordStore {
            records: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Get a copy of a record by id
    ///
    /// # Returns
    ///
    /// * `Some(R)` - If the record exists
    /// * `None` - If the id is not found
    pub fn get(&self, id: &str) -> Option<R> {
        self.records.get(id).map(|slot| slot.record.clone())
    }

    /// Whether a record with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// List every record owned by `user_id`
    ///
    /// Kinds with [`ListOrder::NewestFirst`] are sorted by creation time,
    /// newest first, with equal timestamps in insertion order. Kinds with
    /// [`ListOrder::Insertion`] come back in insertion order.
    pub fn list_for_user(&self, user_id: &str) -> Vec<R> {
        let mut slots: Vec<Slot<R>> = self
            .records
            .iter()
            .filter(|entry| entry.value().record.user_id() == user_id)
            .map(|entry| entry.value().clone())
            .collect();

        slots.sort_by_key(|slot| slot.seq);
        if R::ORDER == ListOrder::NewestFirst {
            // stable: equal timestamps keep the insertion order from above
            slots.sort_by(|a, b| b.record.created_at().cmp(&a.record.created_at()));
        }

        slots.into_iter().map(|slot| slot.record).collect()
    }

    /// Copies of every stored record, in no particular order
    pub fn values(&self) -> Vec<R> {
        self.records
            .iter()
            .map(|entry| entry.value().record.clone())
            .collect()
    }

    /// Find the first record (in insertion order) matching a predicate
    pub fn find<P>(&self, predicate: P) -> Option<R>
    where
        P: Fn(&R) -> bool,
    {
        self.records
            .iter()
            .filter(|entry| predicate(&entry.value().record))
            .min_by_key(|entry| entry.value().seq)
            .map(|entry| entry.value().record.clone())
    }

    /// Store a record under its own id
    ///
    /// Used for seed data with fixed ids and by the ledger, which assembles
    /// transactions itself.
    ///
    /// # Errors
    ///
    /// Returns `StoreFault` if a record with the same id already exists; the
    /// existing record is left untouched.
    pub fn insert(&self, record: R) -> Result<R, WalletError> {
        match self.records.entry(record.id().to_string()) {
            Entry::Occupied(_) => Err(WalletError::store_fault(format!(
                "{} id {} is already taken",
                R::KIND,
                record.id()
            ))),
            Entry::Vacant(vacant) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                vacant.insert(Slot {
                    seq,
                    record: record.clone(),
                });
                Ok(record)
            }
        }
    }

    /// Create a record from a draft, allocating a fresh id and timestamp
    ///
    /// # Errors
    ///
    /// Returns `StoreFault` in the (practically impossible) case of an id
    /// collision.
    pub fn create<N>(&self, draft: N) -> Result<R, WalletError>
    where
        N: NewRecord<Output = R>,
    {
        self.insert(draft.into_record(next_id(), Utc::now()))
    }

    /// Update a record using a closure
    ///
    /// The closure runs while the record's entry lock is held.
    ///
    /// # Returns
    ///
    /// * `Some(R)` - A copy of the record after the update
    /// * `None` - If the id is not found; the closure is not called
    pub fn update<F>(&self, id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut R),
    {
        let mut slot = self.records.get_mut(id)?;
        f(&mut slot.record);
        Some(slot.record.clone())
    }

    /// Run a closure with exclusive access to a record, if it exists
    ///
    /// The entry lock is held for the whole closure, so everything the
    /// closure does happens atomically with respect to other writers of this
    /// record. The closure receives `None` for an absent id (or when `id`
    /// itself is `None`) and no lock is taken.
    ///
    /// Callers nesting `with_entry` across several stores must always lock
    /// them in the same order.
    pub fn with_entry<T, F>(&self, id: Option<&str>, f: F) -> T
    where
        F: FnOnce(Option<&mut R>) -> T,
    {
        match id.and_then(|id| self.records.get_mut(id)) {
            Some(mut slot) => f(Some(&mut slot.record)),
            None => f(None),
        }
    }

    /// Delete a record
    ///
    /// # Returns
    ///
    /// `true` if the record existed and was removed, `false` otherwise
    pub fn delete(&self, id: &str) -> bool {
        self.records.remove(id).is_some()
    }
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
