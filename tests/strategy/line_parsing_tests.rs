//! Query line parsing tests.

use cartpick_foundation::ErrorKind;
use cartpick_strategy::{Flag, QueryLine};

#[test]
fn parse_defaults() {
    let line = QueryLine::parse("green tea").unwrap();
    assert_eq!(line.alternatives.len(), 1);
    assert_eq!(line.main, Flag::Ask);
    assert_eq!(line.list, Flag::Ask);
}

#[test]
fn parse_every_token() {
    for (token, flag) in [
        ("fst", Flag::First),
        ("all", Flag::All),
        ("ask", Flag::Ask),
        ("min", Flag::MinPrice),
        ("max", Flag::MaxPrice),
        ("fbc", Flag::FallbackChain),
        ("mlt", Flag::MinAcrossAlternatives),
    ] {
        let line = QueryLine::parse(&format!("tea|{token}")).unwrap();
        assert_eq!(line.main, flag, "token {token}");
    }
}

#[test]
fn parse_list_flag() {
    let line = QueryLine::parse("red shoes,blue shoes|mlt,all").unwrap();
    assert_eq!(line.main, Flag::MinAcrossAlternatives);
    assert_eq!(line.list, Flag::All);
    assert_eq!(line.alternatives[1].as_str(), "blue shoes");
}

#[test]
fn parse_flags_must_be_exact_tokens() {
    for line in ["tea| fst", "tea|fst ", "tea|fbc, min", "tea|FST"] {
        let err = QueryLine::parse(line).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownStrategy(_)), "line {line:?}");
    }
}

#[test]
fn parse_ignores_flags_after_the_list_flag() {
    let line = QueryLine::parse("espresso machine,coffee maker|fbc,fst,min").unwrap();
    assert_eq!(line.main, Flag::FallbackChain);
    assert_eq!(line.list, Flag::First);
    assert_eq!(line.to_string(), "espresso machine,coffee maker|fbc,fst");
}

#[test]
fn parse_unknown_list_flag() {
    let err = QueryLine::parse("tea|fst,cheapest").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownStrategy(ref n) if n == "cheapest"));
}

#[test]
fn parse_trailing_comma_gives_empty_alternative() {
    let line = QueryLine::parse("tea,|fbc,fst").unwrap();
    assert_eq!(line.alternatives.len(), 2);
    assert_eq!(line.alternatives[1].as_str(), "");
}
