use crate::sim::stats::StageStat;
use std::collections::BTreeMap;

/// Non-volatile status conditions; at most one is active at a time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusCondition {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    Sleep,
}

/// Probabilistic stage-change effect: per-stat signed deltas, applied with
/// clamping to [-6, +6].
#[derive(Clone, Debug)]
pub struct StatChange {
    pub chance: f64,
    pub stages: BTreeMap<StageStat, i8>,
}

impl StatChange {
    pub fn new(chance: f64, stages: impl IntoIterator<Item = (StageStat, i8)>) -> Self {
        Self {
            chance,
            stages: stages.into_iter().collect(),
        }
    }

    /// An effect that always applies.
    pub fn certain(stages: impl IntoIterator<Item = (StageStat, i8)>) -> Self {
        Self::new(1.0, stages)
    }
}

/// Probabilistic status effect; a no-op while any condition is already active.
#[derive(Clone, Copy, Debug)]
pub struct StatusEffect {
    pub chance: f64,
    pub condition: StatusCondition,
}

impl StatusEffect {
    pub fn new(chance: f64, condition: StatusCondition) -> Self {
        Self { chance, condition }
    }
}

/// The two effect kinds accepted by [`crate::sim::Mon::apply`]. The enum is
/// closed, so an unknown kind is unrepresentable.
#[derive(Clone, Debug)]
pub enum Effect {
    StatChange(StatChange),
    Status(StatusEffect),
}

impl From<StatChange> for Effect {
    fn from(change: StatChange) -> Self {
        Effect::StatChange(change)
    }
}

impl From<StatusEffect> for Effect {
    fn from(status: StatusEffect) -> Self {
        Effect::Status(status)
    }
}

/// What happened to one stage counter.
///
/// `Saturated` marks a raise that did nothing because the counter was already
/// at +6, so callers can tell it apart from a genuine zero delta.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StageOutcome {
    Applied(i8),
    Saturated,
}

impl StageOutcome {
    pub fn delta(self) -> i8 {
        match self {
            StageOutcome::Applied(delta) => delta,
            StageOutcome::Saturated => 0,
        }
    }
}
