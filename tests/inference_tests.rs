//! Integration tests on the classic four-node sprinkler network.
//!
//! Structure:
//!
//! ```text
//!      Cloudy (C)
//!      ↙     ↘
//! Sprinkler   Rain
//!     (S)      (R)
//!        ↘    ↙
//!       WetGrass (W)
//! ```
//!
//! All expected numbers below are hand-computed from the tables by summing
//! P(C)·P(S|C)·P(R|C)·P(W|S,R) over the relevant assignments.

use discrete_bayes::{AndClause, BayesNetwork, Condition, ConditionalDistribution, Event};

// f32 arithmetic over eight 4-factor products; looser than PROB_TOLERANCE.
const TOLERANCE: f32 = 1e-5;

fn sprinkler_network() -> BayesNetwork {
    let cloudy = ConditionalDistribution::builder("Cloudy")
        .entry("true", &[], 0.5)
        .entry("false", &[], 0.5)
        .build();

    let sprinkler = ConditionalDistribution::builder("Sprinkler")
        .parents(["Cloudy"])
        .entry("true", &["true"], 0.1)
        .entry("false", &["true"], 0.9)
        .entry("true", &["false"], 0.5)
        .entry("false", &["false"], 0.5)
        .build();

    let rain = ConditionalDistribution::builder("Rain")
        .parents(["Cloudy"])
        .entry("true", &["true"], 0.8)
        .entry("false", &["true"], 0.2)
        .entry("true", &["false"], 0.2)
        .entry("false", &["false"], 0.8)
        .build();

    let wet_grass = ConditionalDistribution::builder("WetGrass")
        .parents(["Sprinkler", "Rain"])
        .entry("true", &["true", "true"], 0.99)
        .entry("false", &["true", "true"], 0.01)
        .entry("true", &["true", "false"], 0.9)
        .entry("false", &["true", "false"], 0.1)
        .entry("true", &["false", "true"], 0.8)
        .entry("false", &["false", "true"], 0.2)
        .entry("true", &["false", "false"], 0.0)
        .entry("false", &["false", "false"], 1.0)
        .build();

    BayesNetwork::builder()
        .add(cloudy)
        .add(sprinkler)
        .add(rain)
        .add(wet_grass)
        .build()
}

#[test]
fn registration_order_is_stable() {
    let network = sprinkler_network();
    assert_eq!(
        network.variables(),
        vec!["Cloudy", "Sprinkler", "Rain", "WetGrass"]
    );
}

#[test]
fn marginals_of_intermediate_variables() {
    let network = sprinkler_network();

    // P(S=t) = 0.5·0.1 + 0.5·0.5
    let p_sprinkler = network
        .query_probability(&Event::equal("Sprinkler", "true"))
        .unwrap();
    assert!((p_sprinkler - 0.3).abs() < TOLERANCE);

    // P(R=t) = 0.5·0.8 + 0.5·0.2
    let p_rain = network
        .query_probability(&Event::equal("Rain", "true"))
        .unwrap();
    assert!((p_rain - 0.5).abs() < TOLERANCE);
}

#[test]
fn marginal_of_leaf_sums_the_whole_joint() {
    let network = sprinkler_network();
    let p_wet = network
        .query_probability(&Event::equal("WetGrass", "true"))
        .unwrap();
    assert!((p_wet - 0.6061).abs() < TOLERANCE);
}

#[test]
fn inclusion_exclusion_identity_holds() {
    let network = sprinkler_network();

    let sprinkler_on = Event::equal("Sprinkler", "true");
    let raining = Event::equal("Rain", "true");
    let either = Event::or(&sprinkler_on, &raining);

    let p_union = network.query_probability(&either).unwrap();
    let p_s = network.query_probability(&sprinkler_on).unwrap();
    let p_r = network.query_probability(&raining).unwrap();
    let p_both = network
        .query_probability(&Event::and(&sprinkler_on, &raining))
        .unwrap();

    assert!((p_union - (p_s + p_r - p_both)).abs() < TOLERANCE);

    // P(S∧R) = 0.5·0.1·0.8 + 0.5·0.5·0.2 = 0.09, so the union is 0.71.
    assert!((p_union - 0.71).abs() < TOLERANCE);
}

#[test]
fn diagnostic_query_against_evidence() {
    let network = sprinkler_network();

    // P(R=t | W=t) = P(R∧W) / P(W) = 0.4171 / 0.6061
    let posterior = network
        .query_probability_with_evidence(
            &Event::equal("Rain", "true"),
            &Event::equal("WetGrass", "true"),
        )
        .unwrap();
    assert!((posterior - 0.4171 / 0.6061).abs() < TOLERANCE);
}

#[test]
fn conditioning_on_a_variable_itself_is_certain() {
    let network = sprinkler_network();
    let cloudy = Event::equal("Cloudy", "true");
    let p = network
        .query_probability_with_evidence(&cloudy, &cloudy)
        .unwrap();
    assert!((p - 1.0).abs() < TOLERANCE);
}

#[test]
fn full_space_event_has_probability_one() {
    let network = sprinkler_network();

    // Every joint assignment of (Cloudy, Rain) as a four-clause DNF.
    let mut clauses = Vec::new();
    for cloudy in ["true", "false"] {
        for rain in ["true", "false"] {
            clauses.push(
                AndClause::new()
                    .with("Cloudy", Condition::equal(cloudy))
                    .with("Rain", Condition::equal(rain)),
            );
        }
    }
    let everything = Event::from_and_clauses(clauses);

    let p = network.query_probability(&everything).unwrap();
    assert!((p - 1.0).abs() < TOLERANCE);
}

#[test]
fn mixed_dnf_query() {
    let network = sprinkler_network();

    // "the sprinkler ran, or it rained while the grass stayed dry"
    let odd = Event::or(
        &Event::equal("Sprinkler", "true"),
        &Event::from_and_clauses([AndClause::new()
            .with("Rain", Condition::equal("true"))
            .with("WetGrass", Condition::equal("false"))]),
    );

    // P(S=t) = 0.3. The second clause overlaps it only where S=t, so the
    // union adds exactly its S=f portion:
    //   0.5·0.9·0.8·0.2 + 0.5·0.5·0.2·0.2 = 0.082.
    let p = network.query_probability(&odd).unwrap();
    assert!((p - (0.3 + 0.082)).abs() < TOLERANCE);
}
