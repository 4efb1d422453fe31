//! # Discrete Bayes — exact inference by enumeration
//!
//! This crate computes exact probabilities of boolean events over a discrete
//! Bayesian network. A network is a set of named variables, each with a
//! conditional probability table (CPT) over its finite domain given its
//! parents. Events are arbitrary boolean queries in disjunctive normal form
//! (an OR of AND-clauses of `=` / `≠` constraints), optionally conditioned
//! on evidence expressed the same way.
//!
//! ## How it computes
//!
//! - An OR of clauses is reduced with inclusion-exclusion:
//!   P(A ∨ B) = P(A) + P(B) − P(A ∧ B).
//! - A single clause is evaluated by fixing the variables its conditions pin
//!   down and summing the joint distribution over every consistent
//!   completion of the rest (marginalization by enumeration).
//! - A complete assignment's joint probability is the product of one CPT
//!   entry per variable.
//!
//! Everything is brute force on purpose: the target is teaching-scale
//! networks, where enumeration is tractable and easy to reason about. Both
//! recursions (clause splitting and free-variable enumeration) are
//! exponential in the worst case; callers must bound network and event size
//! themselves.
//!
//! ## Example: does rain explain the wet grass?
//!
//! ```rust
//! use discrete_bayes::{BayesNetwork, ConditionalDistribution, Event};
//!
//! let rain = ConditionalDistribution::builder("Rain")
//!     .entry("true", &[], 0.2)
//!     .entry("false", &[], 0.8)
//!     .build();
//!
//! let wet_grass = ConditionalDistribution::builder("WetGrass")
//!     .parents(["Rain"])
//!     .entry("true", &["true"], 0.9)
//!     .entry("false", &["true"], 0.1)
//!     .entry("true", &["false"], 0.1)
//!     .entry("false", &["false"], 0.9)
//!     .build();
//!
//! let network = BayesNetwork::builder().add(rain).add(wet_grass).build();
//!
//! // Prior probability of wet grass.
//! let wet = Event::equal("WetGrass", "true");
//! let p_wet = network.query_probability(&wet).unwrap();
//! assert!((p_wet - 0.26).abs() < 1e-6);
//!
//! // Posterior probability of rain, given that the grass is wet.
//! let rainy = Event::equal("Rain", "true");
//! let posterior = network
//!     .query_probability_with_evidence(&rainy, &wet)
//!     .unwrap();
//! assert!((posterior - 0.18 / 0.26).abs() < 1e-6);
//! ```

mod distribution;
mod error;
mod event;
mod network;

pub use distribution::{ConditionalDistribution, DistributionBuilder};
pub use error::BayesError;
pub use event::{AndClause, Condition, ConditionKind, Event};
pub use network::{BayesNetwork, NetworkBuilder};

/// Tolerance for probability comparisons in tests and doctests.
pub const PROB_TOLERANCE: f32 = 1e-6;
