//! Error types for network queries.

use thiserror::Error;

/// Errors that can occur while evaluating a query against a network.
///
/// All of these are fatal for the query that triggered them: the engine
/// stops at the first failed lookup and propagates. The network itself is
/// immutable, so a failed query leaves no state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BayesError {
    /// A clause, assignment, or parent reference named a variable that was
    /// never registered with the network.
    #[error("no distribution registered for variable `{name}`")]
    UnknownVariable { name: String },

    /// A complete assignment produced a lookup key that the variable's
    /// conditional probability table does not contain. This indicates an
    /// incompletely populated table; it is only discovered when enumeration
    /// actually reaches the missing combination.
    #[error("no probability entry for variable `{variable}` with key {key:?}")]
    MissingEntry { variable: String, key: Vec<String> },
}
