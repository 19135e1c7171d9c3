//! Display-name resolution for (species, form label) pairs.
//!
//! A priority-ordered rule table: forme labels first, then species-specific
//! phrasings, then label templates shared across species, and finally the
//! generic "(… Form)" fallback. Exactly one rule applies per pair.

/// Labels rendered as "(… Forme)" regardless of species.
const FORME_LABELS: &[&str] = &[
    "Attack",
    "Defense",
    "Speed",
    "Altered",
    "Origin",
    "Land",
    "Sky",
    "Incarnate",
    "Therian",
    "Aria",
    "Pirouette",
    "Blade",
    "Shield",
    "10%",
    "50%",
    "Complete",
];

enum Match {
    FormeLabel,
    Species(&'static [&'static str]),
    Label(&'static str),
}

struct NameRule {
    applies_to: Match,
    pattern: &'static str,
}

impl NameRule {
    fn matches(&self, species: &str, label: &str) -> bool {
        match self.applies_to {
            Match::FormeLabel => FORME_LABELS.contains(&label),
            Match::Species(names) => names.contains(&species),
            Match::Label(name) => label == name,
        }
    }
}

static NAME_RULES: &[NameRule] = &[
    NameRule {
        applies_to: Match::FormeLabel,
        pattern: "{species} ({label} Forme)",
    },
    NameRule {
        applies_to: Match::Species(&["Vivillon"]),
        pattern: "{species} ({label} Pattern)",
    },
    NameRule {
        applies_to: Match::Species(&["Flabébé", "Floette", "Florges"]),
        pattern: "{species} ({label} Flower)",
    },
    NameRule {
        applies_to: Match::Species(&["Oricorio"]),
        pattern: "{species} ({label} Style)",
    },
    NameRule {
        applies_to: Match::Species(&["Pumpkaboo", "Gourgeist"]),
        pattern: "{label} Size {species}",
    },
    NameRule {
        applies_to: Match::Species(&["Wormadam"]),
        pattern: "{label} Cloak {species}",
    },
    NameRule {
        applies_to: Match::Species(&["Silvally", "Arceus"]),
        pattern: "{species} ({label}-type)",
    },
    NameRule {
        applies_to: Match::Species(&["Furfrou"]),
        pattern: "{species} ({label} Trim)",
    },
    NameRule {
        applies_to: Match::Label("Mega"),
        pattern: "Mega {species}",
    },
    NameRule {
        applies_to: Match::Label("Mega X"),
        pattern: "Mega {species} X",
    },
    NameRule {
        applies_to: Match::Label("Mega Y"),
        pattern: "Mega {species} Y",
    },
    NameRule {
        applies_to: Match::Label("Alolan"),
        pattern: "Alolan {species}",
    },
    NameRule {
        applies_to: Match::Label("Black"),
        pattern: "Black {species}",
    },
    NameRule {
        applies_to: Match::Label("White"),
        pattern: "White {species}",
    },
    NameRule {
        applies_to: Match::Label("Ash"),
        pattern: "Ash-{species}",
    },
    NameRule {
        applies_to: Match::Label("Confined"),
        pattern: "{species} Confined",
    },
    NameRule {
        applies_to: Match::Label("Unbound"),
        pattern: "{species} Unbound",
    },
    NameRule {
        applies_to: Match::Label("Dusk Mane"),
        pattern: "Dusk Mane {species}",
    },
    NameRule {
        applies_to: Match::Label("Dawn Wings"),
        pattern: "Dawn Wings {species}",
    },
    NameRule {
        applies_to: Match::Label("Ultra"),
        pattern: "Ultra {species}",
    },
    NameRule {
        applies_to: Match::Label("Red-Striped"),
        pattern: "Red-Striped {species}",
    },
    NameRule {
        applies_to: Match::Label("Blue-Striped"),
        pattern: "Blue-Striped {species}",
    },
];

const FALLBACK_PATTERN: &str = "{species} ({label} Form)";

fn render(pattern: &str, species: &str, label: &str) -> String {
    pattern
        .replace("{species}", species)
        .replace("{label}", label)
}

/// Canonical display string for a species and form label. An empty label is
/// the default form and returns the species name unchanged.
pub fn display_name(species: &str, label: &str) -> String {
    if label.is_empty() {
        return species.to_string();
    }
    for rule in NAME_RULES {
        if rule.matches(species, label) {
            return render(rule.pattern, species, label);
        }
    }
    render(FALLBACK_PATTERN, species, label)
}
