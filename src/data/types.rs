use std::fmt;

/// The eighteen elemental types.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

pub const TYPE_COUNT: usize = 18;

impl Type {
    pub const ALL: [Type; TYPE_COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    pub fn from_name(name: &str) -> Option<Type> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    fn index(self) -> usize {
        Type::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Damage multipliers for every (attacking, defending) type pair.
///
/// Pairs absent from the corpus read as 1.0 (neutral). Built once by the loader
/// and never mutated.
#[derive(Clone, Debug)]
pub struct TypeChart {
    multipliers: [[f32; TYPE_COUNT]; TYPE_COUNT],
}

impl TypeChart {
    pub(crate) fn neutral() -> Self {
        Self {
            multipliers: [[1.0; TYPE_COUNT]; TYPE_COUNT],
        }
    }

    pub(crate) fn set(&mut self, attacking: Type, defending: Type, multiplier: f32) {
        self.multipliers[attacking.index()][defending.index()] = multiplier;
    }

    pub fn multiplier(&self, attacking: Type, defending: Type) -> f32 {
        self.multipliers[attacking.index()][defending.index()]
    }

    /// Combined multiplier against a possibly dual-typed target.
    pub fn dual(&self, attacking: Type, primary: Type, secondary: Option<Type>) -> f32 {
        let first = self.multiplier(attacking, primary);
        match secondary {
            Some(second) => first * self.multiplier(attacking, second),
            None => first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entries_are_neutral() {
        let chart = TypeChart::neutral();
        assert_eq!(chart.multiplier(Type::Fire, Type::Water), 1.0);
        assert_eq!(chart.dual(Type::Fire, Type::Water, Some(Type::Rock)), 1.0);
    }

    #[test]
    fn dual_multiplies_both_entries() {
        let mut chart = TypeChart::neutral();
        chart.set(Type::Ice, Type::Dragon, 2.0);
        chart.set(Type::Ice, Type::Flying, 2.0);
        assert_eq!(chart.dual(Type::Ice, Type::Dragon, Some(Type::Flying)), 4.0);
        assert_eq!(chart.dual(Type::Ice, Type::Dragon, None), 2.0);
    }

    #[test]
    fn type_names_round_trip() {
        for t in Type::ALL {
            assert_eq!(Type::from_name(t.name()), Some(t));
        }
        assert_eq!(Type::from_name("FAIRY"), Some(Type::Fairy));
        assert_eq!(Type::from_name("shadow"), None);
    }
}
