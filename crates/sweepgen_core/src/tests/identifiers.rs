//! Naming policy selection and identifier sequences

use super::{collect_values, identifiers};
use crate::enumerator::Expansion;
use crate::naming::StrategyKind;
use crate::template::Template;

#[test]
fn test_single_entry_uses_counter_value() {
    let template = Template::from_pairs([("search.aspiration", "[0.25,1,0.25]")]);
    assert_eq!(
        identifiers(&template),
        vec!["0.25", "0.50", "0.75", "1.00"]
    );
}

#[test]
fn test_multi_entry_trims_shared_prefix() {
    let template = Template::from_pairs([
        ("search.coeff.min", "[1,3]"),
        ("search.coeff.max", "[5,6]"),
    ]);
    assert_eq!(
        Expansion::new(&template).unwrap().strategy(),
        StrategyKind::MultiEntry
    );
    assert_eq!(
        identifiers(&template),
        vec![
            "min@1-max@5",
            "min@2-max@5",
            "min@3-max@5",
            "min@1-max@6",
            "min@2-max@6",
            "min@3-max@6",
        ]
    );
}

#[test]
fn test_multi_entry_trims_shared_suffix() {
    let template = Template::from_pairs([
        ("pawn.value", "[90,110,10]"),
        ("threads", "1"),
        ("knight.value", "[300,320,20]"),
    ]);
    assert_eq!(
        identifiers(&template),
        vec![
            "pawn@90-knight@300",
            "pawn@100-knight@300",
            "pawn@110-knight@300",
            "pawn@90-knight@320",
            "pawn@100-knight@320",
            "pawn@110-knight@320",
        ]
    );
}

#[test]
fn test_multi_entry_trims_prefix_and_suffix() {
    let template = Template::from_pairs([
        ("eval.mg.pawn.weight", "[1,2]"),
        ("eval.mg.rook.weight", "[3,3]"),
    ]);
    assert_eq!(identifiers(&template), vec!["pawn@1-rook@3", "pawn@2-rook@3"]);
}

#[test]
fn test_names_without_dotted_overlap_fall_back_to_incremental() {
    let template = Template::from_pairs([("depth", "[1,2]"), ("width", "[1,2]")]);
    assert_eq!(
        Expansion::new(&template).unwrap().strategy(),
        StrategyKind::Incremental
    );
    assert_eq!(identifiers(&template), vec!["0", "1", "2", "3"]);
}

#[test]
fn test_multi_range_value_forces_incremental() {
    let template = Template::from_pairs([("pair", "[0,1]-[0,1]")]);
    let pairs = collect_values(&template, "pair");
    let expected: Vec<(String, String)> = [
        ("0", "0-0"),
        ("1", "1-0"),
        ("2", "0-1"),
        ("3", "1-1"),
    ]
    .iter()
    .map(|(id, value)| (id.to_string(), value.to_string()))
    .collect();
    assert_eq!(pairs, expected);
}

#[test]
fn test_multi_range_value_overrides_nameable_properties() {
    let template = Template::from_pairs([
        ("eval.a", "[0,1]"),
        ("eval.b", "[0,1]"),
        ("eval.pair", "[0,1]x[0,1]"),
    ]);
    let ids = identifiers(&template);
    assert_eq!(ids.len(), 16);
    assert_eq!(ids.first().map(String::as_str), Some("0"));
    assert_eq!(ids.last().map(String::as_str), Some("15"));
}

#[test]
fn test_negative_values_in_identifiers() {
    let template = Template::from_pairs([("eval.a", "[-1,0]"), ("eval.b", "[-0.5,-0.5]")]);
    assert_eq!(identifiers(&template), vec!["a@-1-b@-0.5", "a@0-b@-0.5"]);
}
