use super::dex::{dex, generation_of};
use super::species::normalize_label;
use super::types::Type;
use crate::error::DexError;

#[test]
fn charizard_base_data() {
    let charizard = dex().species("Charizard").expect("Charizard should exist");
    let base = charizard.default_variant();
    assert_eq!(base.base_stats.hp, 78);
    assert_eq!(base.base_stats.atk, 84);
    assert_eq!(base.primary_type, Type::Fire);
    assert_eq!(base.secondary_type, Some(Type::Flying));
    assert_eq!(charizard.dex_no(), 6);
    assert!(charizard.flavor().is_some());
}

#[test]
fn species_lookup_is_normalized() {
    assert!(dex().contains("CHARIZARD"));
    assert!(dex().contains("flabebe"));
    assert_eq!(dex().species("Flabébé").unwrap().dex_no(), 669);
    let missing = dex().species("Missingno");
    assert!(matches!(missing, Err(DexError::SpeciesNotFound(_))));
}

#[test]
fn form_resolution_is_fuzzy_but_never_defaults() {
    let charizard = dex().species("Charizard").unwrap();
    assert_eq!(charizard.resolve("").unwrap().label, "");
    assert_eq!(charizard.resolve("mega x").unwrap().label, "Mega X");
    assert_eq!(charizard.resolve("MEGA-X").unwrap().label, "Mega X");
    assert!(matches!(
        charizard.resolve("Gigantamax"),
        Err(DexError::FormNotFound { .. })
    ));
}

#[test]
fn chart_has_immunities_and_double_damage() {
    let chart = dex().type_chart();
    assert_eq!(chart.multiplier(Type::Normal, Type::Ghost), 0.0);
    assert_eq!(chart.multiplier(Type::Electric, Type::Ground), 0.0);
    assert_eq!(chart.multiplier(Type::Ice, Type::Dragon), 2.0);
    assert_eq!(chart.dual(Type::Ice, Type::Dragon, Some(Type::Flying)), 4.0);
    // unlisted pairs read as neutral
    assert_eq!(chart.multiplier(Type::Normal, Type::Normal), 1.0);
}

#[test]
fn generation_boundaries() {
    assert_eq!(generation_of(1), 1);
    assert_eq!(generation_of(151), 1);
    assert_eq!(generation_of(152), 2);
    assert_eq!(generation_of(493), 4);
    assert_eq!(generation_of(809), 7);
}

#[test]
fn generation_views_truncate_and_wrap() {
    let red = dex().generation_view("Red").expect("Red is a known game");
    assert_eq!(red.name(), "Red");
    assert_eq!(red.len(), 15); // embedded corpus holds 15 gen-1 species
    assert!(red.contains("Mew"));
    assert!(!red.contains("Chikorita"));

    assert_eq!(red.by_position(1).unwrap().name(), "Bulbasaur");
    // position 0 and position len both wrap back into range
    assert_eq!(red.by_position(0).unwrap().name(), red.by_position(15).unwrap().name());
    assert_eq!(red.by_position(16).unwrap().name(), "Bulbasaur");

    let moon = dex().generation_view("Moon").unwrap();
    assert_eq!(moon.len(), dex().len());
    assert!(matches!(
        dex().generation_view("Sword"),
        Err(DexError::GameNotFound(_))
    ));
}

#[test]
fn malformed_corpora_fail_atomically() {
    let cases = [
        r#"{"species": [], "type_chart": {}}"#,
        // duplicate form labels under normalization
        r#"{"species": [{"name": "Testmon", "dex": 1, "variants": [
            {"label": "Mega", "base_stats": [1,1,1,1,1,1], "types": ["Normal"], "height": 1.0, "weight": 1.0},
            {"label": "MEGA", "base_stats": [1,1,1,1,1,1], "types": ["Normal"], "height": 1.0, "weight": 1.0}
        ]}], "type_chart": {}}"#,
        // unknown type name
        r#"{"species": [{"name": "Testmon", "dex": 1, "variants": [
            {"base_stats": [1,1,1,1,1,1], "types": ["Shadow"], "height": 1.0, "weight": 1.0}
        ]}], "type_chart": {}}"#,
        // dex ordering violation
        r#"{"species": [
            {"name": "A", "dex": 5, "variants": [{"base_stats": [1,1,1,1,1,1], "types": ["Normal"], "height": 1.0, "weight": 1.0}]},
            {"name": "B", "dex": 4, "variants": [{"base_stats": [1,1,1,1,1,1], "types": ["Normal"], "height": 1.0, "weight": 1.0}]}
        ], "type_chart": {}}"#,
        // non-positive dimensions
        r#"{"species": [{"name": "Testmon", "dex": 1, "variants": [
            {"base_stats": [1,1,1,1,1,1], "types": ["Normal"], "height": 0.0, "weight": 1.0}
        ]}], "type_chart": {}}"#,
    ];
    for json in cases {
        let result = crate::data::dex::Dex::from_json(json);
        assert!(
            matches!(result, Err(DexError::MalformedCorpus(_))),
            "corpus should be rejected: {}",
            json
        );
    }
}

#[test]
fn every_label_is_unique_after_normalization() {
    for species in dex().iter() {
        let mut seen = std::collections::HashSet::new();
        for variant in species.variants() {
            assert!(
                seen.insert(normalize_label(&variant.label)),
                "{} has colliding labels",
                species.name()
            );
        }
    }
}
