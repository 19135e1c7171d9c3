use crate::data::dex::{generation_of, Dex};
use crate::data::species::{BaseStats, Species, Variant};
use crate::data::types::{Type, TypeChart};
use crate::error::DexError;
use crate::naming;
use crate::sim::effects::{Effect, StageOutcome, StatusCondition};
use crate::sim::stats::{max_hp, nature_stat, stage_multiplier, Nature, StageStat, StatKey};
use rand::Rng;
use std::collections::BTreeMap;

/// Construction record for a [`Mon`], with documented defaults.
///
/// Defaults: level 100, Hardy nature, all-zero IVs/EVs, all-zero stages, no
/// damage taken, no status, not confused.
#[derive(Clone, Debug)]
pub struct MonConfig {
    pub nickname: Option<String>,
    /// Form label resolved through [`Species::resolve`]; empty = default form.
    pub form: String,
    pub level: u8,
    pub nature: Nature,
    /// Genetic values, indexed hp/atk/def/spa/spd/spe.
    pub ivs: [u8; 6],
    /// Training values, same indexing.
    pub evs: [u8; 6],
    /// Pre-set stage counters, indexed atk/def/spa/spd/spe/eva/acc.
    pub stages: [i8; 7],
    /// HP already missing at construction.
    pub damage: i32,
    pub status: Option<StatusCondition>,
    pub status_time: u8,
    pub confused: bool,
    pub confusion_time: u8,
}

impl Default for MonConfig {
    fn default() -> Self {
        Self {
            nickname: None,
            form: String::new(),
            level: 100,
            nature: Nature::Hardy,
            ivs: [0; 6],
            evs: [0; 6],
            stages: [0; 7],
            damage: 0,
            status: None,
            status_time: 0,
            confused: false,
            confusion_time: 0,
        }
    }
}

/// One concrete individual. Borrows its species from the registry; the two
/// elemental types are copied out at construction because moves like Soak can
/// change them afterwards.
///
/// Stage counters and status live behind accessors: [`Mon::apply`] is the only
/// code path that mutates them.
#[derive(Clone, Debug)]
pub struct Mon<'a> {
    species: &'a Species,
    variant: &'a Variant,
    pub nickname: Option<String>,
    pub type1: Type,
    pub type2: Option<Type>,
    pub level: u8,
    pub nature: Nature,
    pub ivs: [u8; 6],
    pub evs: [u8; 6],
    stages: [i8; 7],
    pub current_hp: i32,
    status: Option<StatusCondition>,
    status_time: u8,
    pub confused: bool,
    pub confusion_time: u8,
}

impl<'a> Mon<'a> {
    /// Build an individual of `species`, validating the whole config up front.
    pub fn new(species: &'a Species, config: MonConfig) -> Result<Self, DexError> {
        let variant = species.resolve(&config.form)?;
        if !(1..=100).contains(&config.level) {
            return Err(DexError::InvalidConfiguration(format!(
                "level {} is outside 1..=100",
                config.level
            )));
        }
        if let Some(stage) = config.stages.iter().find(|s| !(-6..=6).contains(*s)) {
            return Err(DexError::InvalidConfiguration(format!(
                "stage counter {} is outside -6..=6",
                stage
            )));
        }
        let full_hp = max_hp(variant.base_stats.hp, config.ivs[0], config.evs[0], config.level);
        if !(0..=full_hp).contains(&config.damage) {
            return Err(DexError::InvalidConfiguration(format!(
                "damage {} exceeds maximum HP {}",
                config.damage, full_hp
            )));
        }
        Ok(Self {
            species,
            variant,
            nickname: config.nickname,
            type1: variant.primary_type,
            type2: variant.secondary_type,
            level: config.level,
            nature: config.nature,
            ivs: config.ivs,
            evs: config.evs,
            stages: config.stages,
            current_hp: full_hp - config.damage,
            status: config.status,
            status_time: config.status_time,
            confused: config.confused,
            confusion_time: if config.confused {
                config.confusion_time
            } else {
                0
            },
        })
    }

    /// Convenience lookup-and-build from a registry.
    pub fn from_dex(dex: &'a Dex, species: &str, config: MonConfig) -> Result<Self, DexError> {
        Mon::new(dex.species(species)?, config)
    }

    pub fn species(&self) -> &'a Species {
        self.species
    }

    pub fn variant(&self) -> &'a Variant {
        self.variant
    }

    pub fn dex_no(&self) -> u16 {
        self.species.dex_no()
    }

    pub fn generation(&self) -> u8 {
        generation_of(self.species.dex_no())
    }

    pub fn base_stats(&self) -> &BaseStats {
        &self.variant.base_stats
    }

    pub fn height(&self) -> f32 {
        self.variant.height
    }

    pub fn weight(&self) -> f32 {
        self.variant.weight
    }

    /// Present types, secondary omitted when absent.
    pub fn types(&self) -> (Type, Option<Type>) {
        (self.type1, self.type2)
    }

    /// Canonical display string for this individual's species and form.
    pub fn full_name(&self) -> String {
        naming::display_name(self.species.name(), &self.variant.label)
    }

    /// Nickname when set, display name otherwise.
    pub fn name(&self) -> String {
        match &self.nickname {
            Some(nickname) => nickname.clone(),
            None => self.full_name(),
        }
    }

    /// Maximum HP; current HP is the `current_hp` field.
    pub fn max_hp(&self) -> i32 {
        max_hp(self.variant.base_stats.hp, self.ivs[0], self.evs[0], self.level)
    }

    /// A stat before stage modifiers. For `Hp` this is maximum HP.
    pub fn stat_base(&self, stat: StatKey) -> i32 {
        if stat == StatKey::Hp {
            return self.max_hp();
        }
        let base = match stat {
            StatKey::Hp => unreachable!(),
            StatKey::Atk => self.variant.base_stats.atk,
            StatKey::Def => self.variant.base_stats.def,
            StatKey::Spa => self.variant.base_stats.spa,
            StatKey::Spd => self.variant.base_stats.spd,
            StatKey::Spe => self.variant.base_stats.spe,
        };
        let idx = stat.index();
        nature_stat(base, self.ivs[idx], self.evs[idx], self.level, self.nature, stat)
    }

    /// The live value used in calculations: the floored stat base times the
    /// stage multiplier. Speed is halved under paralysis; evasion and accuracy
    /// are pure stage multipliers from a baseline of 1.
    pub fn stat(&self, stat: StageStat) -> f64 {
        let multiplier = stage_multiplier(stat, self.stage(stat));
        let base = match stat {
            StageStat::Atk => self.stat_base(StatKey::Atk) as f64,
            StageStat::Def => self.stat_base(StatKey::Def) as f64,
            StageStat::Spa => self.stat_base(StatKey::Spa) as f64,
            StageStat::Spd => self.stat_base(StatKey::Spd) as f64,
            StageStat::Spe => {
                let paralyzed = self.status == Some(StatusCondition::Paralysis);
                self.stat_base(StatKey::Spe) as f64 * if paralyzed { 0.5 } else { 1.0 }
            }
            StageStat::Eva | StageStat::Acc => 1.0,
        };
        base * multiplier
    }

    pub fn stage(&self, stat: StageStat) -> i8 {
        self.stages[stat.index()]
    }

    pub fn status(&self) -> Option<StatusCondition> {
        self.status
    }

    /// Remaining turns on the active status condition.
    pub fn status_time(&self) -> u8 {
        self.status_time
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp <= 0
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.current_hp -= damage;
    }

    /// Combined chart multiplier of an attacking type against this
    /// individual's current types.
    pub fn effectiveness(&self, chart: &TypeChart, attacking: Type) -> f32 {
        chart.dual(attacking, self.type1, self.type2)
    }

    /// Apply a probabilistic effect. One uniform draw decides whether anything
    /// happens at all; a miss returns an empty map.
    ///
    /// Stage changes are clamped to [-6, +6] and reported per stat: the applied
    /// delta, or [`StageOutcome::Saturated`] when a raise was requested at +6.
    /// A status effect only lands while no condition is active; its duration is
    /// drawn uniformly from 1..=3.
    ///
    /// This is the sole writer of stage counters and status state.
    pub fn apply(&mut self, effect: &Effect, rng: &mut impl Rng) -> BTreeMap<StageStat, StageOutcome> {
        let mut outcomes = BTreeMap::new();
        let chance = match effect {
            Effect::StatChange(change) => change.chance,
            Effect::Status(status) => status.chance,
        };
        if rng.gen::<f64>() >= chance {
            return outcomes;
        }
        match effect {
            Effect::StatChange(change) => {
                for (&stat, &delta) in &change.stages {
                    let idx = stat.index();
                    let current = self.stages[idx];
                    let next = (i32::from(current) + i32::from(delta)).clamp(-6, 6) as i8;
                    let applied = next - current;
                    self.stages[idx] = next;
                    let outcome = if applied == 0 && delta > 0 {
                        StageOutcome::Saturated
                    } else {
                        StageOutcome::Applied(applied)
                    };
                    outcomes.insert(stat, outcome);
                }
            }
            Effect::Status(status) => {
                if self.status.is_none() {
                    self.status = Some(status.condition);
                    self.status_time = rng.gen_range(1..=3);
                }
            }
        }
        outcomes
    }
}
