//! Filtering, sorting, grouping, and aggregation over record sequences.
//!
//! Every operation is pure: it borrows the input slice, never mutates it,
//! and never drops or reorders records beyond what the operation itself
//! requires.

use crate::error::RecordError;
use crate::records::value::{FieldKey, compare_sort_keys};
use crate::records::{GroupedRecords, Record};
use serde_json::{Number, Value};

type Result<T> = std::result::Result<T, RecordError>;

/// Built-in reductions for [`aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// Number of records that have the field.
    Count,
    /// Numeric sum; 0 for an empty input.
    Sum,
    /// Smallest numeric value; `Null` for an empty input.
    Min,
    /// Largest numeric value; `Null` for an empty input.
    Max,
    /// Arithmetic mean; an empty input is an error.
    Average,
}

impl Aggregate {
    fn name(self) -> &'static str {
        match self {
            Aggregate::Count => "count",
            Aggregate::Sum => "sum",
            Aggregate::Min => "min",
            Aggregate::Max => "max",
            Aggregate::Average => "average",
        }
    }
}

/// Keep the records for which `predicate` holds, in their original order.
///
/// The predicate receives the whole record and decides for itself how to
/// treat absent fields.
pub fn filter<F>(records: &[Record], mut predicate: F) -> Vec<Record>
where
    F: FnMut(&Record) -> bool,
{
    records
        .iter()
        .filter(|record| predicate(record))
        .cloned()
        .collect()
}

/// Return a new sequence ordered by the value at `field`.
///
/// Records lacking the field sort before every record that has it. The sort
/// is stable: records with equal keys keep their original relative order,
/// ascending or descending. See [`compare_sort_keys`] for the order over
/// mixed-type values.
pub fn sort_by_field(records: &[Record], field: &str, descending: bool) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_sort_keys(a.get(field), b.get(field));
        if descending { ordering.reverse() } else { ordering }
    });
    sorted
}

/// Partition records by the value at `field`.
///
/// Group keys appear in first-observed order; members keep their relative
/// input order. Records lacking the field land in a [`FieldKey::Missing`]
/// group, distinct from any present value including null.
pub fn group_by_field(records: &[Record], field: &str) -> GroupedRecords {
    let mut groups = GroupedRecords::new();
    for record in records {
        let key = match record.get(field) {
            Some(value) => FieldKey::Value(value.clone()),
            None => FieldKey::Missing,
        };
        groups.entry(key).or_default().push(record.clone());
    }
    groups
}

/// Apply a built-in reduction to the values at `field`.
///
/// Records lacking the field are skipped (not substituted); the surviving
/// values feed the reduction in input order. A present non-numeric value is
/// an error for the numeric reductions, never silently dropped.
pub fn aggregate(records: &[Record], field: &str, op: Aggregate) -> Result<Value> {
    let values = collect_field(records, field);

    match op {
        Aggregate::Count => Ok(Value::from(values.len() as u64)),
        Aggregate::Sum => sum(&values, field),
        Aggregate::Min | Aggregate::Max => extremum(&values, field, op),
        Aggregate::Average => average(&values, field),
    }
}

/// Apply a caller-supplied reduction to the values at `field`.
///
/// Same collection semantics as [`aggregate`]; whatever the closure returns
/// (including a `Result` carrying its own failure) propagates untouched.
pub fn aggregate_with<F, T>(records: &[Record], field: &str, op: F) -> T
where
    F: FnOnce(&[Value]) -> T,
{
    let values: Vec<Value> = records
        .iter()
        .filter_map(|record| record.get(field))
        .cloned()
        .collect();
    op(&values)
}

fn collect_field<'a>(records: &'a [Record], field: &str) -> Vec<(usize, &'a Value)> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| record.get(field).map(|value| (index, value)))
        .collect()
}

fn expect_number<'a>(
    entry: &(usize, &'a Value),
    field: &str,
) -> Result<&'a Number> {
    let (index, value) = entry;
    match value {
        Value::Number(n) => Ok(n),
        other => Err(RecordError::NonNumericField {
            field: field.to_string(),
            value: other.to_string(),
            index: *index,
        }),
    }
}

fn sum(values: &[(usize, &Value)], field: &str) -> Result<Value> {
    let numbers = values
        .iter()
        .map(|entry| expect_number(entry, field))
        .collect::<Result<Vec<_>>>()?;

    // Integer inputs keep an integer result; any float promotes the whole sum.
    let as_ints: Option<Vec<i64>> = numbers.iter().map(|n| n.as_i64()).collect();
    match as_ints {
        Some(ints) => Ok(Value::from(ints.iter().sum::<i64>())),
        None => {
            let total: f64 = numbers.iter().filter_map(|n| n.as_f64()).sum();
            Ok(Value::from(total))
        }
    }
}

fn extremum(values: &[(usize, &Value)], field: &str, op: Aggregate) -> Result<Value> {
    let mut best: Option<(f64, &Value)> = None;
    for entry in values {
        let candidate = expect_number(entry, field)?.as_f64().unwrap_or_default();
        let replace = match best {
            None => true,
            Some((current, _)) => match op {
                Aggregate::Min => candidate < current,
                _ => candidate > current,
            },
        };
        if replace {
            best = Some((candidate, entry.1));
        }
    }
    Ok(best.map(|(_, value)| value.clone()).unwrap_or(Value::Null))
}

fn average(values: &[(usize, &Value)], field: &str) -> Result<Value> {
    if values.is_empty() {
        return Err(RecordError::EmptyAggregation {
            operation: Aggregate::Average.name().to_string(),
            field: field.to_string(),
        });
    }

    let mut total = 0.0;
    for entry in values {
        total += expect_number(entry, field)?.as_f64().unwrap_or_default();
    }
    Ok(Value::from(total / values.len() as f64))
}
