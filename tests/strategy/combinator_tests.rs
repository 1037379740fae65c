//! Combinator tests.
//!
//! Fallback chains and minimum-across-alternatives, end to end.

use cartpick_strategy::{ImmediateResume, StrategyEngine};

use crate::fixtures::{grocer, names, searched};

#[test]
fn fallback_uses_second_alternative_when_first_is_empty() {
    let engine = StrategyEngine::default();
    let mut catalog = grocer();
    let chained = engine
        .select(&mut catalog, &mut ImmediateResume, "espresso machine,coffee maker|fbc,fst")
        .unwrap();

    let mut alone = grocer();
    let direct = engine
        .select(&mut alone, &mut ImmediateResume, "coffee maker|fst")
        .unwrap();

    assert_eq!(chained, direct);
    assert_eq!(names(&chained), vec!["Drip coffee maker"]);
    assert_eq!(searched(&catalog), vec!["espresso machine", "coffee maker"]);
}

#[test]
fn fallback_stops_at_first_hit() {
    let mut catalog = grocer();
    let picked = StrategyEngine::default()
        .select(&mut catalog, &mut ImmediateResume, "cream,milk 1l|fbc,all")
        .unwrap();

    assert_eq!(names(&picked), vec!["Cream 20%"]);
    assert_eq!(searched(&catalog), vec!["cream"]);
}

#[test]
fn fallback_with_nothing_anywhere_is_empty() {
    let mut catalog = grocer();
    let picked = StrategyEngine::default()
        .select(&mut catalog, &mut ImmediateResume, "espresso machine,tea|fbc,fst")
        .unwrap();
    assert!(picked.is_empty());
}

#[test]
fn fallback_list_flag_defaults_to_ask() {
    let mut catalog = grocer();
    let mut waits = 0;
    let mut resume = |_: &cartpick_foundation::Query| waits += 1;

    let picked = StrategyEngine::default()
        .select(&mut catalog, &mut resume, "cream,milk 1l|fbc")
        .unwrap();

    assert!(picked.is_empty());
    assert_eq!(waits, 2);
}

#[test]
fn min_across_alternatives_picks_cheapest_of_union() {
    let mut catalog = grocer();
    let picked = StrategyEngine::default()
        .select(&mut catalog, &mut ImmediateResume, "red shoes,blue shoes|mlt,all")
        .unwrap();

    // "Red shoes, kids" and "Blue shoes suede" tie at 25; the earlier wins.
    assert_eq!(names(&picked), vec!["Red shoes, kids"]);
    assert_eq!(searched(&catalog), vec!["red shoes", "blue shoes"]);
}

#[test]
fn min_across_alternatives_uses_list_flag_per_alternative() {
    let mut catalog = grocer();
    let picked = StrategyEngine::default()
        .select(&mut catalog, &mut ImmediateResume, "milk 1l,cream|mlt,max")
        .unwrap();

    // max picks 1.9 for milk and 2.4 for cream; the minimum of those is milk.
    assert_eq!(names(&picked), vec!["Milk 1L, lactose free"]);
}

#[test]
fn min_across_nothing_is_empty() {
    let mut catalog = grocer();
    let picked = StrategyEngine::default()
        .select(&mut catalog, &mut ImmediateResume, "tea,espresso machine|mlt,all")
        .unwrap();
    assert!(picked.is_empty());
}

#[test]
fn nested_combinator_in_list_flag() {
    let mut catalog = grocer();
    let mut waits = Vec::new();
    let mut resume = |q: &cartpick_foundation::Query| waits.push(q.to_string());

    let picked = StrategyEngine::default()
        .select(&mut catalog, &mut resume, "cream,milk 1l|mlt,fbc")
        .unwrap();

    // Each alternative becomes "<query>|fbc", whose own list flag is ask.
    assert!(picked.is_empty());
    assert_eq!(waits, vec!["cream", "milk 1l"]);
}
