//! Row filtering.
//!
//! A [`RowFilter`] is built once from the parsed condition list and the
//! invert flag, then asked about each row in turn. Conditions are OR-ed
//! with short-circuiting; AND is composed externally by piping the tool
//! into itself. Evaluation never fails: every row decides to a boolean.

use crate::expr::{Condition, Rhs};
use crate::value::{compare, decode_field, FieldValue};

/// Decides, per row, whether the row passes.
#[derive(Debug, Clone)]
pub struct RowFilter {
    conditions: Vec<Condition>,
    invert: bool,
}

impl RowFilter {
    /// Create a filter. With `invert` set it passes exactly the rows it
    /// would otherwise drop.
    pub fn new(conditions: Vec<Condition>, invert: bool) -> Self {
        Self { conditions, invert }
    }

    /// Decide whether a row passes the filter.
    pub fn matches(&self, row: &[String]) -> bool {
        self.selected(row) != self.invert
    }

    /// True when at least one condition holds for the row.
    fn selected(&self, row: &[String]) -> bool {
        self.conditions
            .iter()
            .any(|condition| condition_holds(condition, row))
    }
}

fn condition_holds(condition: &Condition, row: &[String]) -> bool {
    let left = match field_value(row, condition.left) {
        Some(value) => value,
        // A cell with no decodable value skips the condition.
        None => return false,
    };
    let right = match &condition.rhs {
        Rhs::Literal(value) => Some(value.clone()),
        Rhs::Column(index) => field_value(row, *index),
        Rhs::Unresolved => None,
    };
    compare(&left, right.as_ref(), condition.op)
}

fn field_value(row: &[String], index: usize) -> Option<FieldValue> {
    row.get(index).and_then(|field| decode_field(field))
}
