//! Leaf strategy tests.
//!
//! Each leaf runs through the engine against the grocer fixture.

use cartpick_foundation::Query;
use cartpick_strategy::{EngineConfig, ImmediateResume, Leaf, StrategyEngine};

use crate::fixtures::{grocer, names, searched};

fn run(line: &str) -> Vec<String> {
    let mut catalog = grocer();
    StrategyEngine::default()
        .select(&mut catalog, &mut ImmediateResume, line)
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect()
}

#[test]
fn first_takes_first_match() {
    assert_eq!(run("milk 1l|fst"), vec!["Milk 3.2% 1L"]);
}

#[test]
fn all_takes_every_match_in_order() {
    assert_eq!(
        run("milk 1l|all"),
        vec!["Milk 3.2% 1L", "Milk 1L, lactose free", "Milk 2.5% 1L"]
    );
}

#[test]
fn min_and_max_price() {
    assert_eq!(run("milk 1l|min"), vec!["Milk 2.5% 1L"]);
    assert_eq!(run("milk 1l|max"), vec!["Milk 1L, lactose free"]);
}

#[test]
fn single_match_is_returned_by_every_leaf() {
    for flag in ["fst", "all", "min", "max"] {
        assert_eq!(run(&format!("cream|{flag}")), vec!["Cream 20%"], "flag {flag}");
    }
}

#[test]
fn no_match_is_empty() {
    for flag in ["fst", "all", "min", "max"] {
        assert!(run(&format!("espresso machine|{flag}")).is_empty(), "flag {flag}");
    }
}

#[test]
fn ask_searches_waits_and_selects_nothing() {
    let mut catalog = grocer();
    let mut waited = Vec::new();
    let mut resume = |q: &Query| waited.push(q.to_string());

    let picked = Leaf::Ask
        .select(&mut catalog, &Query::new("milk 1l"), &mut resume, &EngineConfig::default())
        .unwrap();

    assert!(picked.is_empty());
    assert_eq!(waited, vec!["milk 1l"]);
    assert_eq!(searched(&catalog), vec!["milk 1l"]);
}

#[test]
fn leaves_are_deterministic() {
    for line in ["milk 1l|fst", "milk 1l|all", "milk 1l|min", "milk 1l|max"] {
        let mut catalog = grocer();
        let engine = StrategyEngine::default();
        let first = engine.select(&mut catalog, &mut ImmediateResume, line).unwrap();
        let second = engine.select(&mut catalog, &mut ImmediateResume, line).unwrap();
        assert_eq!(names(&first), names(&second), "line {line}");
    }
}
