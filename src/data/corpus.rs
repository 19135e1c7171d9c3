//! Load-time corpus parsing and structural validation.
//!
//! The corpus is a single JSON document holding the species list and the type
//! chart. Any structural problem fails the whole load; nothing is installed
//! partially.

use crate::data::species::{normalize_label, BaseStats, Species, Variant};
use crate::data::types::{Type, TypeChart};
use crate::error::DexError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};

#[derive(Deserialize)]
struct CorpusDoc {
    species: Vec<SpeciesRecord>,
    type_chart: BTreeMap<String, BTreeMap<String, f32>>,
}

#[derive(Deserialize)]
struct SpeciesRecord {
    name: String,
    dex: u16,
    #[serde(default)]
    flavor: Option<String>,
    variants: Vec<VariantRecord>,
}

#[derive(Deserialize)]
struct VariantRecord {
    #[serde(default)]
    label: String,
    base_stats: [u16; 6],
    types: Vec<String>,
    height: f32,
    weight: f32,
}

pub(crate) fn parse(json: &str) -> Result<(Vec<Species>, TypeChart), DexError> {
    let doc: CorpusDoc = serde_json::from_str(json)?;
    let species = build_species(doc.species)?;
    let chart = build_chart(&doc.type_chart)?;
    Ok((species, chart))
}

fn build_species(records: Vec<SpeciesRecord>) -> Result<Vec<Species>, DexError> {
    if records.is_empty() {
        return Err(DexError::MalformedCorpus("empty species list".to_string()));
    }
    let mut seen_names = HashSet::new();
    let mut last_dex = 0u16;
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        if !seen_names.insert(normalize_label(&record.name)) {
            return Err(DexError::MalformedCorpus(format!(
                "duplicate species name '{}'",
                record.name
            )));
        }
        if record.dex <= last_dex {
            return Err(DexError::MalformedCorpus(format!(
                "species '{}' breaks dex-number ordering ({} after {})",
                record.name, record.dex, last_dex
            )));
        }
        last_dex = record.dex;
        if record.variants.is_empty() {
            return Err(DexError::MalformedCorpus(format!(
                "species '{}' has no variants",
                record.name
            )));
        }
        let mut seen_labels = HashSet::new();
        let mut variants = Vec::with_capacity(record.variants.len());
        for variant in record.variants {
            if !seen_labels.insert(normalize_label(&variant.label)) {
                return Err(DexError::MalformedCorpus(format!(
                    "species '{}' has duplicate form label '{}'",
                    record.name, variant.label
                )));
            }
            variants.push(build_variant(&record.name, variant)?);
        }
        out.push(Species::new(record.name, record.dex, record.flavor, variants));
    }
    Ok(out)
}

fn build_variant(species: &str, record: VariantRecord) -> Result<Variant, DexError> {
    if record.types.is_empty() || record.types.len() > 2 {
        return Err(DexError::MalformedCorpus(format!(
            "species '{}' form '{}' must have one or two types",
            species, record.label
        )));
    }
    let primary_type = parse_type(species, &record.types[0])?;
    let secondary_type = match record.types.get(1) {
        Some(name) => Some(parse_type(species, name)?),
        None => None,
    };
    if !(record.height > 0.0 && record.weight > 0.0) {
        return Err(DexError::MalformedCorpus(format!(
            "species '{}' form '{}' has non-positive dimensions",
            species, record.label
        )));
    }
    let [hp, atk, def, spa, spd, spe] = record.base_stats;
    Ok(Variant {
        label: record.label,
        base_stats: BaseStats {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        },
        primary_type,
        secondary_type,
        height: record.height,
        weight: record.weight,
    })
}

fn parse_type(species: &str, name: &str) -> Result<Type, DexError> {
    Type::from_name(name).ok_or_else(|| {
        DexError::MalformedCorpus(format!("species '{}' has unknown type '{}'", species, name))
    })
}

fn build_chart(table: &BTreeMap<String, BTreeMap<String, f32>>) -> Result<TypeChart, DexError> {
    let mut chart = TypeChart::neutral();
    for (attacking, row) in table {
        let attacking = Type::from_name(attacking).ok_or_else(|| {
            DexError::MalformedCorpus(format!("type chart has unknown type '{}'", attacking))
        })?;
        for (defending, &multiplier) in row {
            let defending = Type::from_name(defending).ok_or_else(|| {
                DexError::MalformedCorpus(format!("type chart has unknown type '{}'", defending))
            })?;
            if !(multiplier >= 0.0 && multiplier.is_finite()) {
                return Err(DexError::MalformedCorpus(format!(
                    "type chart multiplier {} -> {} is not a non-negative number",
                    attacking, defending
                )));
            }
            chart.set(attacking, defending, multiplier);
        }
    }
    Ok(chart)
}
