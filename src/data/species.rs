use crate::data::types::Type;
use crate::error::DexError;

/// Six base stats of one form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

/// Immutable data for one named form of a species.
///
/// An empty `label` marks the canonical/default form.
#[derive(Clone, Debug)]
pub struct Variant {
    pub label: String,
    pub base_stats: BaseStats,
    pub primary_type: Type,
    pub secondary_type: Option<Type>,
    pub height: f32,
    pub weight: f32,
}

/// A species: display name, national-dex number, and its forms in insertion
/// order. The first form is the default returned when no label is supplied.
#[derive(Clone, Debug)]
pub struct Species {
    name: String,
    dex_no: u16,
    flavor: Option<String>,
    variants: Vec<Variant>,
}

impl Species {
    pub(crate) fn new(
        name: String,
        dex_no: u16,
        flavor: Option<String>,
        variants: Vec<Variant>,
    ) -> Self {
        debug_assert!(!variants.is_empty());
        Self {
            name,
            dex_no,
            flavor,
            variants,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dex_no(&self) -> u16 {
        self.dex_no
    }

    /// Descriptive corpus text, when the corpus carries any.
    pub fn flavor(&self) -> Option<&str> {
        self.flavor.as_deref()
    }

    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }

    pub fn default_variant(&self) -> &Variant {
        &self.variants[0]
    }

    /// Resolve a possibly-fuzzy form label to the matching variant.
    ///
    /// Empty input returns the default form. Non-empty input is compared against
    /// every label case/diacritic/whitespace-insensitively; an unrecognized label
    /// is an error, never silently the default.
    pub fn resolve(&self, label: &str) -> Result<&Variant, DexError> {
        if label.is_empty() {
            return Ok(self.default_variant());
        }
        let wanted = normalize_label(label);
        self.variants
            .iter()
            .find(|v| normalize_label(&v.label) == wanted)
            .ok_or_else(|| DexError::FormNotFound {
                species: self.name.clone(),
                form: label.to_string(),
            })
    }
}

/// Canonical comparison key for species names and form labels: lowercased,
/// diacritics folded, whitespace runs joined with `-`, everything else
/// non-alphanumeric stripped, repeated joiners collapsed.
pub fn normalize_label(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().map(fold_diacritic) {
        let c = c.to_ascii_lowercase();
        if c.is_whitespace() {
            out.push('-');
        } else if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c);
        }
    }
    let mut collapsed = String::with_capacity(out.len());
    for c in out.chars() {
        if c == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}

fn fold_diacritic(c: char) -> char {
    match c {
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
        'á' | 'à' | 'â' | 'ä' | 'Á' | 'À' | 'Â' | 'Ä' => 'a',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'u',
        'ñ' | 'Ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(label: &str) -> Variant {
        Variant {
            label: label.to_string(),
            base_stats: BaseStats {
                hp: 45,
                atk: 49,
                def: 49,
                spa: 65,
                spd: 65,
                spe: 45,
            },
            primary_type: Type::Grass,
            secondary_type: Some(Type::Poison),
            height: 0.7,
            weight: 6.9,
        }
    }

    #[test]
    fn normalize_folds_case_diacritics_and_whitespace() {
        assert_eq!(normalize_label("Flabébé"), "flabebe");
        assert_eq!(normalize_label("Dusk  Mane"), "dusk-mane");
        assert_eq!(normalize_label("Pa'u"), "pau");
        assert_eq!(normalize_label("10%"), "10");
        assert_eq!(normalize_label("Red-Striped"), "red-striped");
    }

    #[test]
    fn resolve_prefers_first_inserted_for_empty_label() {
        let species = Species::new(
            "Wormadam".to_string(),
            413,
            None,
            vec![variant("Plant"), variant("Sandy"), variant("Trash")],
        );
        assert_eq!(species.resolve("").unwrap().label, "Plant");
        assert_eq!(species.resolve("sandy").unwrap().label, "Sandy");
        assert_eq!(species.resolve("sAnDy").unwrap().label, "Sandy");
    }

    #[test]
    fn resolve_rejects_unknown_labels() {
        let species = Species::new("Wormadam".to_string(), 413, None, vec![variant("Plant")]);
        let err = species.resolve("Gravel").unwrap_err();
        assert!(matches!(err, DexError::FormNotFound { .. }));
    }
}
