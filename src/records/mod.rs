//! In-memory record processing
//!
//! A record is an ordered mapping from field name to a dynamically typed
//! value; a field that is simply not present is distinct from one set to
//! null. Operations borrow the input sequence and return new data — the
//! caller's records are never mutated, dropped, or reordered except as the
//! operation itself requires.

/// Field value ordering and grouping keys
pub mod value;

/// Filter, sort, group, and aggregate operations
pub mod ops;

use indexmap::IndexMap;

pub use ops::{Aggregate, aggregate, aggregate_with, filter, group_by_field, sort_by_field};
pub use value::{FieldKey, compare_sort_keys, compare_values};

/// One record: field names to values, in insertion order.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Records partitioned by field value, keys in first-observed order.
pub type GroupedRecords = IndexMap<FieldKey, Vec<Record>>;
