//! Stat formulas: base-stat derivation, nature modifiers, and in-battle stage
//! multipliers. All intermediate truncation happens exactly where the games do
//! it, not at the end.

/// The six permanent stat categories.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StatKey {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl StatKey {
    pub const ALL: [StatKey; 6] = [
        StatKey::Hp,
        StatKey::Atk,
        StatKey::Def,
        StatKey::Spa,
        StatKey::Spd,
        StatKey::Spe,
    ];

    /// Position in IV/EV arrays.
    pub fn index(self) -> usize {
        match self {
            StatKey::Hp => 0,
            StatKey::Atk => 1,
            StatKey::Def => 2,
            StatKey::Spa => 3,
            StatKey::Spd => 4,
            StatKey::Spe => 5,
        }
    }
}

/// The seven stage-modified categories (the five non-HP stats plus evasion and
/// accuracy).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum StageStat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Eva,
    Acc,
}

impl StageStat {
    pub const ALL: [StageStat; 7] = [
        StageStat::Atk,
        StageStat::Def,
        StageStat::Spa,
        StageStat::Spd,
        StageStat::Spe,
        StageStat::Eva,
        StageStat::Acc,
    ];

    pub fn index(self) -> usize {
        match self {
            StageStat::Atk => 0,
            StageStat::Def => 1,
            StageStat::Spa => 2,
            StageStat::Spd => 3,
            StageStat::Spe => 4,
            StageStat::Eva => 5,
            StageStat::Acc => 6,
        }
    }
}

/// The 25 natures in their fixed ordering. Index `i` boosts category `i / 5`
/// and cuts category `i % 5` over (Atk, Def, Spa, Spd, Spe); every fifth nature
/// is neutral because boost and cut coincide.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Nature {
    Hardy,
    Lonely,
    Adamant,
    Naughty,
    Brave,
    Bold,
    Docile,
    Impish,
    Lax,
    Relaxed,
    Modest,
    Mild,
    Bashful,
    Rash,
    Quiet,
    Calm,
    Gentle,
    Careful,
    Quirky,
    Sassy,
    Timid,
    Hasty,
    Jolly,
    Naive,
    Serious,
}

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Brave,
        Nature::Bold,
        Nature::Docile,
        Nature::Impish,
        Nature::Lax,
        Nature::Relaxed,
        Nature::Modest,
        Nature::Mild,
        Nature::Bashful,
        Nature::Rash,
        Nature::Quiet,
        Nature::Calm,
        Nature::Gentle,
        Nature::Careful,
        Nature::Quirky,
        Nature::Sassy,
        Nature::Timid,
        Nature::Hasty,
        Nature::Jolly,
        Nature::Naive,
        Nature::Serious,
    ];

    pub fn index(self) -> usize {
        Nature::ALL.iter().position(|&n| n == self).unwrap_or(0)
    }

    pub fn from_name(name: &str) -> Option<Nature> {
        Nature::ALL
            .iter()
            .copied()
            .find(|n| n.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Brave => "Brave",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Relaxed => "Relaxed",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Quiet => "Quiet",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
            Nature::Sassy => "Sassy",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Serious => "Serious",
        }
    }

    pub fn is_neutral(self) -> bool {
        let i = self.index();
        i / 5 == i % 5
    }

    /// The boosted category, `None` for neutral natures.
    pub fn boosted(self) -> Option<StatKey> {
        if self.is_neutral() {
            None
        } else {
            Some(category(self.index() / 5))
        }
    }

    /// The cut category, `None` for neutral natures.
    pub fn cut(self) -> Option<StatKey> {
        if self.is_neutral() {
            None
        } else {
            Some(category(self.index() % 5))
        }
    }
}

fn category(index: usize) -> StatKey {
    match index {
        0 => StatKey::Atk,
        1 => StatKey::Def,
        2 => StatKey::Spa,
        3 => StatKey::Spd,
        _ => StatKey::Spe,
    }
}

/// `floor((2*base + iv + floor(ev/4)) * level / 100)`, the common prefix of
/// every stat formula.
pub fn stat_base(base: u16, iv: u8, ev: u8, level: u8) -> i32 {
    (2 * base as i32 + iv as i32 + ev as i32 / 4) * level as i32 / 100
}

/// Maximum HP at the given level.
pub fn max_hp(base: u16, iv: u8, ev: u8, level: u8) -> i32 {
    stat_base(base, iv, ev, level) + level as i32 + 10
}

/// A non-HP stat before stage modifiers: `floor((stat_base + 5) * nature_mod)`.
pub fn nature_stat(base: u16, iv: u8, ev: u8, level: u8, nature: Nature, stat: StatKey) -> i32 {
    let boosted = nature.boosted() == Some(stat);
    let cut = nature.cut() == Some(stat);
    let modifier = 1.0 + 0.1 * f64::from(boosted as i32) - 0.1 * f64::from(cut as i32);
    ((stat_base(base, iv, ev, level) + 5) as f64 * modifier).floor() as i32
}

/// Stage multiplier over [-6, +6]: `(2 + max(0, s)) / (2 - min(0, s))`, with 3
/// in place of 2 for evasion and accuracy. Exact integer ratio, divided last.
pub fn stage_multiplier(stat: StageStat, stage: i8) -> f64 {
    let n = match stat {
        StageStat::Eva | StageStat::Acc => 3i32,
        _ => 2i32,
    };
    let stage = i32::from(stage);
    f64::from(n + stage.max(0)) / f64::from(n - stage.min(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_five_neutral_natures_at_fixed_indices() {
        let neutral: Vec<usize> = Nature::ALL
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_neutral())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(neutral, vec![0, 6, 12, 18, 24]);
    }

    #[test]
    fn non_neutral_natures_boost_and_cut_different_categories() {
        for nature in Nature::ALL {
            match (nature.boosted(), nature.cut()) {
                (Some(boost), Some(cut)) => assert_ne!(boost, cut, "{:?}", nature),
                (None, None) => assert!(nature.is_neutral()),
                other => panic!("half-neutral nature {:?}: {:?}", nature, other),
            }
        }
    }

    #[test]
    fn adamant_boosts_attack_and_cuts_special_attack() {
        assert_eq!(Nature::Adamant.boosted(), Some(StatKey::Atk));
        assert_eq!(Nature::Adamant.cut(), Some(StatKey::Spa));
        assert_eq!(Nature::Timid.boosted(), Some(StatKey::Spe));
        assert_eq!(Nature::Timid.cut(), Some(StatKey::Atk));
    }

    #[test]
    fn hp_formula_reference_value() {
        // base 45, no IVs/EVs, level 50 -> floor(90*50/100) + 50 + 10
        assert_eq!(max_hp(45, 0, 0, 50), 105);
    }

    #[test]
    fn nature_modifier_is_applied_after_the_plus_five() {
        let plain = nature_stat(100, 31, 252, 50, Nature::Hardy, StatKey::Atk);
        let boosted = nature_stat(100, 31, 252, 50, Nature::Adamant, StatKey::Atk);
        let cut = nature_stat(100, 31, 252, 50, Nature::Modest, StatKey::Atk);
        assert_eq!(plain, 152);
        assert_eq!(boosted, (152.0f64 * 1.1).floor() as i32);
        assert_eq!(cut, (152.0f64 * 0.9).floor() as i32);
    }

    #[test]
    fn stage_multiplier_progression() {
        assert_eq!(stage_multiplier(StageStat::Atk, 0), 1.0);
        assert_eq!(stage_multiplier(StageStat::Atk, 6), 4.0);
        assert_eq!(stage_multiplier(StageStat::Atk, -6), 0.25);
        assert_eq!(stage_multiplier(StageStat::Eva, 6), 3.0);
        assert_eq!(stage_multiplier(StageStat::Eva, -6), 1.0 / 3.0);
        assert_eq!(stage_multiplier(StageStat::Acc, 3), 2.0);
        let mut last = 0.0;
        for stage in -6..=6 {
            let m = stage_multiplier(StageStat::Spe, stage);
            assert!(m > last);
            last = m;
        }
    }
}
