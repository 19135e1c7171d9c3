use crate::data::corpus;
use crate::data::species::{normalize_label, Species};
use crate::data::types::TypeChart;
use crate::error::DexError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Highest national-dex number in each generation; index 0 is a sentinel so
/// that generation `g` spans `BOUNDS[g-1]+1 ..= BOUNDS[g]`.
pub const GENERATION_BOUNDS: [u16; 8] = [0, 151, 251, 386, 493, 649, 721, 809];

/// Which generation each mainline game title belongs to.
pub static GAME_GENERATIONS: phf::Map<&'static str, u8> = phf::phf_map! {
    "Red" => 1, "Blue" => 1, "Yellow" => 1,
    "Gold" => 2, "Silver" => 2, "Crystal" => 2,
    "Ruby" => 3, "Sapphire" => 3, "Emerald" => 3, "FireRed" => 3, "LeafGreen" => 3,
    "Diamond" => 4, "Pearl" => 4, "Platinum" => 4, "HeartGold" => 4, "SoulSilver" => 4,
    "Black" => 5, "White" => 5, "Black 2" => 5, "White 2" => 5,
    "X" => 6, "Y" => 6, "Omega Ruby" => 6, "Alpha Sapphire" => 6,
    "Sun" => 7, "Moon" => 7, "Ultra Sun" => 7, "Ultra Moon" => 7,
};

/// Generation a dex number belongs to (1..=7).
pub fn generation_of(dex_no: u16) -> u8 {
    for (g, &bound) in GENERATION_BOUNDS.iter().enumerate().skip(1) {
        if dex_no <= bound {
            return g as u8;
        }
    }
    (GENERATION_BOUNDS.len() - 1) as u8
}

/// The species registry plus the type chart, built once from a corpus and
/// read-only afterwards.
pub struct Dex {
    species: Vec<Species>,
    by_key: HashMap<String, usize>,
    chart: TypeChart,
}

impl Dex {
    /// Parse and validate a JSON corpus. Fails atomically: on any error no
    /// registry is produced.
    pub fn from_json(json: &str) -> Result<Self, DexError> {
        let (species, chart) = corpus::parse(json)?;
        let by_key = species
            .iter()
            .enumerate()
            .map(|(idx, sp)| (normalize_label(sp.name()), idx))
            .collect();
        Ok(Self {
            species,
            by_key,
            chart,
        })
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Species> {
        self.by_key
            .get(&normalize_label(name))
            .map(|&idx| &self.species[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_key.contains_key(&normalize_label(name))
    }

    /// Name lookup that reports an error for unknown species.
    pub fn species(&self, name: &str) -> Result<&Species, DexError> {
        self.get(name)
            .ok_or_else(|| DexError::SpeciesNotFound(name.to_string()))
    }

    pub fn type_chart(&self) -> &TypeChart {
        &self.chart
    }

    /// Registry window for one game title, truncated at that generation's
    /// dex-number cutoff.
    pub fn generation_view(&self, game: &str) -> Result<GenerationView<'_>, DexError> {
        let generation = GAME_GENERATIONS
            .get(game)
            .copied()
            .ok_or_else(|| DexError::GameNotFound(game.to_string()))?;
        let cutoff = GENERATION_BOUNDS[generation as usize];
        let species = self
            .species
            .iter()
            .take_while(|sp| sp.dex_no() <= cutoff)
            .collect();
        Ok(GenerationView {
            name: game.to_string(),
            species,
        })
    }
}

/// Read-only windowed projection of the registry for one game.
pub struct GenerationView<'a> {
    name: String,
    species: Vec<&'a Species>,
}

impl<'a> GenerationView<'a> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Species> + '_ {
        self.species.iter().copied()
    }

    /// 1-indexed lookup that wraps modulo the view's size, so position 0 and
    /// position `len` both land back in range. `None` only for an empty view.
    pub fn by_position(&self, position: i64) -> Option<&'a Species> {
        let len = self.species.len() as i64;
        if len == 0 {
            return None;
        }
        let idx = (position - 1).rem_euclid(len) as usize;
        Some(self.species[idx])
    }

    pub fn get(&self, name: &str) -> Option<&'a Species> {
        let wanted = normalize_label(name);
        self.species
            .iter()
            .copied()
            .find(|sp| normalize_label(sp.name()) == wanted)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

static NATDEX: Lazy<Dex> = Lazy::new(|| {
    Dex::from_json(include_str!("../../data/dex.json")).expect("embedded dex corpus is valid")
});

/// The registry built from the embedded corpus.
pub fn dex() -> &'static Dex {
    &NATDEX
}
