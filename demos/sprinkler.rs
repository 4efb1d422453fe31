//! Walkthrough: DNF queries on the classic sprinkler network.
//!
//! Run with: cargo run --example sprinkler
//!
//! This example demonstrates:
//! - Building conditional probability tables with the builder API
//! - Marginal queries (nuisance variables summed out automatically)
//! - DNF queries combined with `Event::or` / `Event::and`
//! - Conditioning on evidence (diagnostic reasoning)

use discrete_bayes::{BayesNetwork, ConditionalDistribution, Event};

fn main() {
    println!("=== Sprinkler network: exact inference by enumeration ===\n");

    println!("Structure:");
    println!("     Cloudy (C)");
    println!("     ↙     ↘");
    println!("Sprinkler   Rain");
    println!("    (S)      (R)");
    println!("       ↘    ↙");
    println!("      WetGrass (W)");
    println!();

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

    let network = BayesNetwork::builder()
        .add(cloudy)
        .add(sprinkler)
        .add(rain)
        .add(wet_grass)
        .build();

    println!("Variables: {:?}\n", network.variables());

    // -------------------------------------------------------------------
    // Marginal queries: everything not mentioned is summed out.
    // -------------------------------------------------------------------
    let wet = Event::equal("WetGrass", "true");
    let p_wet = network.query_probability(&wet).unwrap();
    println!("P(WetGrass = true)            = {p_wet:.4}");

    let raining = Event::equal("Rain", "true");
    let p_rain = network.query_probability(&raining).unwrap();
    println!("P(Rain = true)                = {p_rain:.4}");

    // -------------------------------------------------------------------
    // DNF queries: unions go through inclusion-exclusion.
    // -------------------------------------------------------------------
    let sprinkler_on = Event::equal("Sprinkler", "true");
    let watered = Event::or(&sprinkler_on, &raining);
    let p_watered = network.query_probability(&watered).unwrap();
    println!("P(Sprinkler ∨ Rain)           = {p_watered:.4}");

    let both = Event::and(&sprinkler_on, &raining);
    let p_both = network.query_probability(&both).unwrap();
    println!("P(Sprinkler ∧ Rain)           = {p_both:.4}");

    // -------------------------------------------------------------------
    // Diagnostic reasoning: condition on the observed effect.
    // -------------------------------------------------------------------
    let p_rain_given_wet = network
        .query_probability_with_evidence(&raining, &wet)
        .unwrap();
    println!("P(Rain = true | WetGrass)     = {p_rain_given_wet:.4}");

    let p_sprinkler_given_wet = network
        .query_probability_with_evidence(&sprinkler_on, &wet)
        .unwrap();
    println!("P(Sprinkler = true | WetGrass)= {p_sprinkler_given_wet:.4}");

    println!();
    println!("Rain explains the wet grass better than the sprinkler does,");
    println!("even though both raise its probability.");
}
