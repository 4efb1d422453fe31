//! Conditional probability tables, one per network variable.

use crate::error::BayesError;
use std::collections::{BTreeSet, HashMap};

/// The conditional probability table (CPT) for a single variable.
///
/// Stores P(variable = value | parent₁ = v₁, ..., parentₖ = vₖ) for every
/// combination the author recorded. Rows are keyed by the ordered tuple
/// `(own value, parent values in declared parent order)`, so the parent
/// order given to the builder must match the order used in `entry` calls.
///
/// The table is deliberately permissive at construction time: nothing
/// checks that rows sum to one per parent combination, that parent names
/// refer to registered variables, or that the parent relation is acyclic.
/// A malformed table yields wrong numbers (or a [`BayesError`] at query
/// time), never a build error.
///
/// # Example
///
/// ```rust
/// use discrete_bayes::ConditionalDistribution;
///
/// let wet_grass = ConditionalDistribution::builder("WetGrass")
///     .parents(["Rain"])
///     .entry("true", &["true"], 0.9)
///     .entry("false", &["true"], 0.1)
///     .entry("true", &["false"], 0.1)
///     .entry("false", &["false"], 0.9)
///     .build();
///
/// assert_eq!(wet_grass.variable(), "WetGrass");
/// assert_eq!(wet_grass.values().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ConditionalDistribution {
    variable: String,
    parents: Vec<String>,
    values: BTreeSet<String>,
    table: HashMap<Vec<String>, f32>,
}

impl ConditionalDistribution {
    /// Start building the table for `variable`.
    pub fn builder(variable: impl Into<String>) -> DistributionBuilder {
        DistributionBuilder {
            variable: variable.into(),
            parents: Vec::new(),
            values: BTreeSet::new(),
            table: HashMap::new(),
        }
    }

    /// The variable this table belongs to.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Parent variable names, in the order used for lookup keys.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// The variable's domain: every value that appeared in an entry.
    pub fn values(&self) -> &BTreeSet<String> {
        &self.values
    }

    /// Look up the probability recorded for `key`.
    ///
    /// `key` is `(own value, parent values in declared order)`. There is no
    /// fallback: a key that was never recorded is a [`BayesError::MissingEntry`].
    pub fn probability(&self, key: &[String]) -> Result<f32, BayesError> {
        self.table
            .get(key)
            .copied()
            .ok_or_else(|| BayesError::MissingEntry {
                variable: self.variable.clone(),
                key: key.to_vec(),
            })
    }
}

/// Mutable accumulator for [`ConditionalDistribution`].
#[derive(Debug)]
pub struct DistributionBuilder {
    variable: String,
    parents: Vec<String>,
    values: BTreeSet<String>,
    table: HashMap<Vec<String>, f32>,
}

impl DistributionBuilder {
    /// Declare the parent variables. Their order here fixes the key order
    /// for every subsequent [`entry`](Self::entry).
    pub fn parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parents = parents.into_iter().map(Into::into).collect();
        self
    }

    /// Record P(variable = `value` | parents = `parent_values`) = `probability`.
    ///
    /// `value` is added to the variable's domain as a side effect, so the
    /// domain is exactly the set of values that appear in entries.
    pub fn entry(mut self, value: impl Into<String>, parent_values: &[&str], probability: f32) -> Self {
        let value = value.into();
        let mut key = Vec::with_capacity(1 + parent_values.len());
        key.push(value.clone());
        key.extend(parent_values.iter().map(|v| v.to_string()));
        self.values.insert(value);
        self.table.insert(key, probability);
        self
    }

    /// Freeze the accumulated entries into an immutable table.
    pub fn build(self) -> ConditionalDistribution {
        ConditionalDistribution {
            variable: self.variable,
            parents: self.parents,
            values: self.values,
            table: self.table,
        }
    }
}
