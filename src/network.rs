//! The inference engine: exact event probabilities by enumeration.

use crate::distribution::ConditionalDistribution;
use crate::error::BayesError;
use crate::event::{AndClause, Condition, ConditionKind, Event};
use std::collections::{BTreeSet, HashMap};

/// A Bayesian network over named discrete variables.
///
/// Holds one [`ConditionalDistribution`] per variable, in registration
/// order. That order is canonical: it is the order [`variables`](Self::variables)
/// reports and the order in which table entries are multiplied when a joint
/// probability is computed.
///
/// The network is frozen once built. Queries only read, and every query
/// allocates its own intermediate state, so a shared `&BayesNetwork` can be
/// queried from several threads at once.
///
/// # Example
///
/// ```rust
/// use discrete_bayes::{BayesNetwork, ConditionalDistribution, Event};
///
/// let rain = ConditionalDistribution::builder("Rain")
///     .entry("true", &[], 0.2)
///     .entry("false", &[], 0.8)
///     .build();
///
/// let wet_grass = ConditionalDistribution::builder("WetGrass")
///     .parents(["Rain"])
///     .entry("true", &["true"], 0.9)
///     .entry("false", &["true"], 0.1)
///     .entry("true", &["false"], 0.1)
///     .entry("false", &["false"], 0.9)
///     .build();
///
/// let network = BayesNetwork::builder().add(rain).add(wet_grass).build();
///
/// // P(WetGrass) = P(Rain)·P(W|R) + P(¬Rain)·P(W|¬R) = 0.2·0.9 + 0.8·0.1
/// let p = network
///     .query_probability(&Event::equal("WetGrass", "true"))
///     .unwrap();
/// assert!((p - 0.26).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BayesNetwork {
    distributions: Vec<ConditionalDistribution>,
}

impl BayesNetwork {
    /// Start building a network.
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder {
            distributions: Vec::new(),
        }
    }

    /// Variable names in registration order. Stable across calls.
    pub fn variables(&self) -> Vec<&str> {
        self.distributions
            .iter()
            .map(ConditionalDistribution::variable)
            .collect()
    }

    /// Compute the probability of `event`, conditioned on `evidence`:
    /// P(event | evidence) = P(event ∧ evidence) / P(evidence).
    ///
    /// The division is performed as-is. If the evidence has probability
    /// zero the quotient is mathematically undefined and this returns NaN
    /// rather than an error; callers that cannot rule out zero-probability
    /// evidence must check for it themselves.
    pub fn query_probability_with_evidence(
        &self,
        event: &Event,
        evidence: &Event,
    ) -> Result<f32, BayesError> {
        Ok(self.query_probability(&Event::and(event, evidence))?
            / self.query_probability(evidence)?)
    }

    /// Compute the probability of `event`.
    ///
    /// A multi-clause event is reduced by the two-term inclusion-exclusion
    /// identity: P(first ∨ rest) = P(first) + P(rest) − P(first ∧ rest),
    /// recursing on `rest` and on the cross-conjunction. The intersection
    /// term can double the clause count at each level, so the worst case is
    /// exponential in the number of clauses. That is acceptable for the
    /// small DNF expressions this engine targets; no memoization is done.
    pub fn query_probability(&self, event: &Event) -> Result<f32, BayesError> {
        match event.and_clauses() {
            [] => Ok(0.0),
            [clause] => self.clause_probability(clause),
            [first, rest @ ..] => {
                let first = Event::from_and_clauses([first.clone()]);
                let rest = Event::from_and_clauses(rest.iter().cloned());
                let both = Event::and(&first, &rest);
                Ok(self.query_probability(&first)? + self.query_probability(&rest)?
                    - self.query_probability(&both)?)
            }
        }
    }

    /// Probability of a single conjunctive clause.
    ///
    /// Splits the clause's variables into fixed ones (narrowed to a single
    /// value) and free ones (narrowed to several), adds every unconstrained
    /// network variable as free over its full domain, and marginalizes by
    /// enumerating all completions of the partial assignment.
    fn clause_probability<'a>(&'a self, clause: &'a AndClause) -> Result<f32, BayesError> {
        let mut assignment: HashMap<&str, &str> = HashMap::new();
        let mut free: Vec<(&str, Vec<&str>)> = Vec::new();

        for variable in clause.variables() {
            let allowed = self.allowed_values(variable, clause.conditions(variable))?;
            if allowed.is_empty() {
                // The conditions contradict each other; nothing to enumerate.
                return Ok(0.0);
            }
            if allowed.len() == 1 {
                assignment.insert(variable, allowed[0]);
            } else {
                free.push((variable, allowed));
            }
        }

        for nuisance in self.nuisance_variables(clause) {
            let domain = self.distribution(nuisance)?.values();
            free.push((nuisance, domain.iter().map(String::as_str).collect()));
        }

        self.sum_assignments(&mut assignment, &free, 0)
    }

    /// Narrow `variable`'s domain through each condition in turn.
    ///
    /// `Equal` intersects the candidate set with the target value and
    /// `NotEqual` removes it. Both operations commute, so the declaration
    /// order of the conditions does not matter.
    fn allowed_values<'a>(
        &'a self,
        variable: &str,
        conditions: &[Condition],
    ) -> Result<Vec<&'a str>, BayesError> {
        let mut allowed: Vec<&str> = self
            .distribution(variable)?
            .values()
            .iter()
            .map(String::as_str)
            .collect();
        for condition in conditions {
            match condition.kind {
                ConditionKind::Equal => allowed.retain(|v| *v == condition.value),
                ConditionKind::NotEqual => allowed.retain(|v| *v != condition.value),
            }
        }
        Ok(allowed)
    }

    /// Sum the joint probability over all completions of `assignment`.
    ///
    /// `free` is consumed by position: each level binds the variable at
    /// `index` to each of its candidates in turn, recurses on `index + 1`,
    /// and unbinds on the way out. The recursion depth equals the number of
    /// free variables; the leaf count is the product of the candidate-set
    /// sizes.
    fn sum_assignments<'a>(
        &'a self,
        assignment: &mut HashMap<&'a str, &'a str>,
        free: &[(&'a str, Vec<&'a str>)],
        index: usize,
    ) -> Result<f32, BayesError> {
        if index == free.len() {
            return self.joint_probability(assignment);
        }

        let (variable, candidates) = &free[index];
        let mut total = 0.0;
        for &value in candidates {
            assignment.insert(*variable, value);
            total += self.sum_assignments(assignment, free, index + 1)?;
        }
        assignment.remove(*variable);
        Ok(total)
    }

    /// Joint probability of a complete assignment: the product, over every
    /// registered variable in registration order, of its table entry under
    /// the assignment.
    fn joint_probability(&self, assignment: &HashMap<&str, &str>) -> Result<f32, BayesError> {
        let mut product = 1.0;
        for distribution in &self.distributions {
            let mut key = Vec::with_capacity(1 + distribution.parents().len());
            key.push(assigned(assignment, distribution.variable())?.to_string());
            for parent in distribution.parents() {
                key.push(assigned(assignment, parent)?.to_string());
            }
            product *= distribution.probability(&key)?;
        }
        Ok(product)
    }

    /// Find a variable's table by name. Linear scan; the networks this
    /// engine targets are small enough that an index would not pay for
    /// itself.
    fn distribution(&self, name: &str) -> Result<&ConditionalDistribution, BayesError> {
        self.distributions
            .iter()
            .find(|d| d.variable() == name)
            .ok_or_else(|| BayesError::UnknownVariable {
                name: name.to_string(),
            })
    }

    /// Network variables the clause does not constrain. These must be
    /// marginalized over their full domains.
    fn nuisance_variables<'a>(&'a self, clause: &AndClause) -> Vec<&'a str> {
        let constrained: BTreeSet<&str> = clause.variables().collect();
        self.distributions
            .iter()
            .map(ConditionalDistribution::variable)
            .filter(|v| !constrained.contains(v))
            .collect()
    }
}

/// Look up a variable in a complete assignment. A miss means the variable
/// (typically a dangling parent reference) was never registered.
fn assigned<'a>(
    assignment: &HashMap<&str, &'a str>,
    variable: &str,
) -> Result<&'a str, BayesError> {
    assignment
        .get(variable)
        .copied()
        .ok_or_else(|| BayesError::UnknownVariable {
            name: variable.to_string(),
        })
}

/// Mutable accumulator for [`BayesNetwork`].
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    distributions: Vec<ConditionalDistribution>,
}

impl NetworkBuilder {
    /// Register a variable's table. Registration order becomes the
    /// network's canonical variable order. Parent references are not
    /// checked here: a dangling or cyclic reference only surfaces when a
    /// query touches it.
    pub fn add(mut self, distribution: ConditionalDistribution) -> Self {
        self.distributions.push(distribution);
        self
    }

    /// Freeze the registered tables into an immutable network.
    pub fn build(self) -> BayesNetwork {
        BayesNetwork {
            distributions: self.distributions,
        }
    }
}
