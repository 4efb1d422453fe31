//! Boolean events over network variables, in disjunctive normal form.
//!
//! An [`Event`] is an OR of [`AndClause`]s; each clause is an AND of
//! per-variable [`Condition`]s. Every boolean combination of equality
//! constraints can be brought into this form, and the inference engine
//! consumes events exclusively in this form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The kind of constraint a [`Condition`] places on a variable.
///
/// The set is closed: the engine matches on it exhaustively, so an
/// unhandled kind cannot exist at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionKind {
    /// The variable must take exactly this value.
    Equal,
    /// The variable must take any value other than this one.
    NotEqual,
}

/// A single constraint on a single variable: an operator and a target value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Whether the constraint requires or excludes the value.
    pub kind: ConditionKind,
    /// The value the constraint refers to.
    pub value: String,
}

impl Condition {
    /// Constraint requiring the variable to equal `value`.
    pub fn equal(value: impl Into<String>) -> Self {
        Self {
            kind: ConditionKind::Equal,
            value: value.into(),
        }
    }

    /// Constraint requiring the variable to differ from `value`.
    pub fn not_equal(value: impl Into<String>) -> Self {
        Self {
            kind: ConditionKind::NotEqual,
            value: value.into(),
        }
    }
}

/// A conjunction of conditions, grouped by variable.
///
/// Every condition recorded for every variable must hold simultaneously.
/// A variable may carry several conditions (e.g. two `NotEqual`s narrowing
/// a larger domain). Variables absent from the clause are unconstrained.
///
/// # Example
///
/// ```rust
/// use discrete_bayes::{AndClause, Condition};
///
/// // Alarm went off, but not because of a burglary.
/// let clause = AndClause::new()
///     .with("Alarm", Condition::equal("true"))
///     .with("Burglary", Condition::equal("false"));
///
/// assert_eq!(clause.variables().count(), 2);
/// assert_eq!(clause.conditions("Alarm").len(), 1);
/// assert!(clause.conditions("Earthquake").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndClause {
    conditions: BTreeMap<String, Vec<Condition>>,
}

impl AndClause {
    /// An empty clause. With no conditions it is satisfied by every
    /// assignment, so as an event it represents the certain event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a condition on `variable`, keeping any already present.
    pub fn with(mut self, variable: impl Into<String>, condition: Condition) -> Self {
        self.conditions
            .entry(variable.into())
            .or_default()
            .push(condition);
        self
    }

    /// The variables this clause constrains, in name order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.conditions.keys().map(String::as_str)
    }

    /// All conditions recorded for `variable`; empty if unconstrained.
    pub fn conditions(&self, variable: &str) -> &[Condition] {
        self.conditions
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether this clause constrains `variable` at all.
    pub fn constrains(&self, variable: &str) -> bool {
        self.conditions.contains_key(variable)
    }

    /// The conjunction of two clauses: all conditions from both.
    fn merge(&self, other: &AndClause) -> AndClause {
        let mut merged = self.clone();
        for (variable, conditions) in &other.conditions {
            merged
                .conditions
                .entry(variable.clone())
                .or_default()
                .extend(conditions.iter().cloned());
        }
        merged
    }
}

/// A boolean event in disjunctive normal form: true iff any clause holds.
///
/// An event with no clauses is the impossible event (probability zero).
///
/// # Example
///
/// ```rust
/// use discrete_bayes::Event;
///
/// let sprinkler = Event::equal("Sprinkler", "on");
/// let rain = Event::equal("Rain", "true");
///
/// // "the grass got water from somewhere"
/// let watered = Event::or(&sprinkler, &rain);
/// assert_eq!(watered.and_clauses().len(), 2);
///
/// // "both at once" collapses back to a single clause
/// let both = Event::and(&sprinkler, &rain);
/// assert_eq!(both.and_clauses().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    clauses: Vec<AndClause>,
}

impl Event {
    /// The impossible event: no clause can hold.
    pub fn never() -> Self {
        Self::default()
    }

    /// Wrap a list of clauses into an event (their disjunction).
    pub fn from_and_clauses(clauses: impl IntoIterator<Item = AndClause>) -> Self {
        Self {
            clauses: clauses.into_iter().collect(),
        }
    }

    /// Single-clause event constraining `variable` to equal `value`.
    pub fn equal(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from_and_clauses([AndClause::new().with(variable, Condition::equal(value))])
    }

    /// Single-clause event constraining `variable` to differ from `value`.
    pub fn not_equal(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self::from_and_clauses([AndClause::new().with(variable, Condition::not_equal(value))])
    }

    /// The clauses of this event, in declaration order.
    pub fn and_clauses(&self) -> &[AndClause] {
        &self.clauses
    }

    /// The conjunction of two events, kept in DNF.
    ///
    /// Distributes AND over OR: the result has one clause for every pair of
    /// clauses from `a` and `b`, so the clause count is the product of the
    /// operands' clause counts. If either operand is impossible, so is the
    /// result.
    pub fn and(a: &Event, b: &Event) -> Event {
        let mut clauses = Vec::with_capacity(a.clauses.len() * b.clauses.len());
        for left in &a.clauses {
            for right in &b.clauses {
                clauses.push(left.merge(right));
            }
        }
        Event { clauses }
    }

    /// The disjunction of two events: clause lists concatenated.
    pub fn or(a: &Event, b: &Event) -> Event {
        let mut clauses = a.clauses.clone();
        clauses.extend(b.clauses.iter().cloned());
        Event { clauses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_distributes_over_or() {
        let left = Event::or(&Event::equal("A", "1"), &Event::equal("B", "1"));
        let right = Event::or(&Event::equal("C", "1"), &Event::equal("D", "1"));

        let product = Event::and(&left, &right);
        assert_eq!(product.and_clauses().len(), 4);

        // First clause is A=1 AND C=1.
        let first = &product.and_clauses()[0];
        assert!(first.constrains("A"));
        assert!(first.constrains("C"));
        assert!(!first.constrains("B"));
    }

    #[test]
    fn test_and_with_impossible_event_is_impossible() {
        let some = Event::equal("X", "true");
        let nothing = Event::never();

        assert!(Event::and(&some, &nothing).and_clauses().is_empty());
        assert!(Event::and(&nothing, &some).and_clauses().is_empty());
    }

    #[test]
    fn test_merge_keeps_conditions_on_shared_variable() {
        let not_a = Event::not_equal("X", "a");
        let not_b = Event::not_equal("X", "b");

        let both = Event::and(&not_a, &not_b);
        assert_eq!(both.and_clauses().len(), 1);
        assert_eq!(both.and_clauses()[0].conditions("X").len(), 2);
    }

    #[test]
    fn test_clause_accessors() {
        let clause = AndClause::new()
            .with("X", Condition::equal("1"))
            .with("X", Condition::not_equal("2"))
            .with("Y", Condition::equal("0"));

        let vars: Vec<&str> = clause.variables().collect();
        assert_eq!(vars, vec!["X", "Y"]);
        assert_eq!(clause.conditions("X").len(), 2);
        assert_eq!(clause.conditions("Z").len(), 0);
    }
}
