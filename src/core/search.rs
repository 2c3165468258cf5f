use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{
    core::{dispersion::Dispersion, winter_period::WinterPeriod},
    error::EstimationError,
    prelude::*,
    quantity::{Quantity, degree_days::DegreeDays, temperature::Fahrenheit},
};

/// Fewest winter periods whose UA dispersion means anything.
pub const MIN_WINTER_PERIODS: usize = 2;

#[derive(Copy, Clone, Debug, clap::Args)]
pub struct SearchSettings {
    /// Balance point step of the first search.
    #[clap(long = "initial-step", default_value = "2", env = "INITIAL_BALANCE_POINT_STEP")]
    pub initial_step: Fahrenheit,

    /// Balance point step of the searches following each outlier removal.
    #[clap(long = "next-step", default_value = "0.5", env = "NEXT_BALANCE_POINT_STEP")]
    pub next_step: Fahrenheit,

    /// UA coefficient of variation at which outlier removal stops.
    #[clap(long = "max-stdev-pct", default_value = "0.10", env = "MAX_STDEV_PCT")]
    pub max_stdev_pct: f64,

    /// Smallest decrease of the coefficient of variation worth removing an outlier for.
    #[clap(
        long = "min-stdev-pct-improvement",
        default_value = "0.01",
        env = "MIN_STDEV_PCT_IMPROVEMENT"
    )]
    pub min_stdev_pct_improvement: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            initial_step: Quantity(2.0),
            next_step: Quantity(0.5),
            max_stdev_pct: 0.10,
            min_stdev_pct_improvement: 0.01,
        }
    }
}

/// Balance point search state.
///
/// The UA of every period, the dispersion, and the balance point always agree with each other.
/// Every step consumes the state and produces the next one.
#[must_use]
#[derive(Clone, Debug)]
pub struct SearchState {
    pub balance_point: Fahrenheit,
    pub periods: Vec<WinterPeriod>,
    pub dispersion: Dispersion,
}

/// Outcome of a single outlier removal attempt.
#[must_use]
pub enum Pruning {
    /// The outlier is gone for good.
    Removed { state: SearchState, outlier: WinterPeriod, improvement: f64 },

    /// Removing the outlier would not decrease the dispersion enough, nothing changed.
    NotWorthIt { state: SearchState, improvement: f64 },

    /// Removing anything would leave too few periods, nothing changed.
    TooFewPeriods(SearchState),
}

/// Final search state together with the removed outliers.
#[must_use]
pub struct Convergence {
    pub state: SearchState,
    pub outliers: Vec<WinterPeriod>,
}

/// State at a probed balance point, not committed yet.
#[derive(Debug)]
struct Candidate {
    balance_point: Fahrenheit,
    total_hdds: Vec<DegreeDays>,
    uas: Vec<f64>,
    dispersion: Dispersion,
}

#[derive(Copy, Clone, Debug)]
enum Direction {
    Up,
    Down,
}

impl Direction {
    const fn sign(self) -> f64 {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
        }
    }
}

impl SearchState {
    pub fn try_new(
        balance_point: Fahrenheit,
        periods: Vec<WinterPeriod>,
    ) -> Result<Self, EstimationError> {
        if periods.len() < MIN_WINTER_PERIODS {
            return Err(EstimationError::InsufficientWinterPeriods { actual: periods.len() });
        }
        let uas = periods.iter().map(|winter| winter.ua).collect_vec();
        let dispersion = Dispersion::try_from_uas(&uas)?;
        Ok(Self { balance_point, periods, dispersion })
    }

    /// Hill-climb the balance point by fixed steps while the UA dispersion decreases.
    ///
    /// Going up is tried first. Once a direction improves the dispersion, the search keeps going
    /// that way until a step stops improving it, and the opposite direction is never tried.
    /// Balance points above `ceiling` are never probed.
    #[instrument(skip_all, fields(balance_point = ?self.balance_point, step = ?step))]
    pub fn refine(self, step: Fahrenheit, ceiling: Fahrenheit) -> Result<Self, EstimationError> {
        let mut state = self;
        for direction in [Direction::Up, Direction::Down] {
            let mut has_moved = false;
            loop {
                let balance_point = state.balance_point + step * direction.sign();
                if balance_point > ceiling {
                    warn!(
                        ?balance_point,
                        ?ceiling,
                        "the balance point may not exceed the thermostat set point",
                    );
                    break;
                }
                let candidate = state.probe(balance_point)?;
                if !candidate.dispersion.is_tighter_than(&state.dispersion) {
                    debug!(?balance_point, stdev_pct = candidate.dispersion.stdev_pct, "rejected");
                    break;
                }
                debug!(?balance_point, stdev_pct = candidate.dispersion.stdev_pct, "accepted");
                state = state.accept(candidate);
                has_moved = true;
            }
            if has_moved {
                break;
            }
        }
        Ok(state)
    }

    /// Try to remove the winter period whose UA deviates the most from the average.
    #[instrument(skip_all, fields(n_periods = self.periods.len()))]
    pub fn remove_outlier(self, min_improvement: f64) -> Result<Pruning, EstimationError> {
        if self.periods.len() <= MIN_WINTER_PERIODS {
            return Ok(Pruning::TooFewPeriods(self));
        }
        let Some(outlier_index) = self.biggest_outlier() else {
            return Ok(Pruning::TooFewPeriods(self));
        };
        let remaining_uas = self
            .periods
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != outlier_index)
            .map(|(_, winter)| winter.ua)
            .collect_vec();
        let dispersion = Dispersion::try_from_uas(&remaining_uas)?;
        let improvement = self.dispersion.stdev_pct - dispersion.stdev_pct;
        if improvement < min_improvement {
            return Ok(Pruning::NotWorthIt { state: self, improvement });
        }
        let mut periods = self.periods;
        let outlier = periods.remove(outlier_index);
        Ok(Pruning::Removed {
            state: Self { balance_point: self.balance_point, periods, dispersion },
            outlier,
            improvement,
        })
    }

    /// Refine the balance point, then alternate outlier removal with finer refinement until the
    /// dispersion is acceptable or removing outliers stops paying off.
    #[instrument(skip_all, fields(n_periods = self.periods.len()))]
    pub fn converge(
        self,
        settings: &SearchSettings,
        ceiling: Fahrenheit,
    ) -> Result<Convergence, EstimationError> {
        let mut state = self.refine(settings.initial_step, ceiling)?;
        let mut outliers = Vec::new();
        while state.dispersion.stdev_pct > settings.max_stdev_pct {
            match state.remove_outlier(settings.min_stdev_pct_improvement)? {
                Pruning::Removed { state: pruned, outlier, improvement } => {
                    info!(
                        index = outlier.index,
                        ua = outlier.ua,
                        improvement,
                        "removed the outlier",
                    );
                    outliers.push(outlier);
                    state = pruned.refine(settings.next_step, ceiling)?;
                }
                Pruning::NotWorthIt { state: unchanged, improvement } => {
                    warn!(
                        improvement,
                        stdev_pct = unchanged.dispersion.stdev_pct,
                        "removing the outlier is not worth it",
                    );
                    state = unchanged;
                    break;
                }
                Pruning::TooFewPeriods(unchanged) => {
                    warn!(
                        n_periods = unchanged.periods.len(),
                        stdev_pct = unchanged.dispersion.stdev_pct,
                        "too few periods to remove any more outliers",
                    );
                    state = unchanged;
                    break;
                }
            }
        }
        Ok(Convergence { state, outliers })
    }

    /// Index of the period whose UA is the farthest from the average, the first one on ties.
    fn biggest_outlier(&self) -> Option<usize> {
        self.periods.iter().position_min_by_key(|winter| {
            Reverse(OrderedFloat((winter.ua - self.dispersion.average).abs()))
        })
    }

    fn probe(&self, balance_point: Fahrenheit) -> Result<Candidate, EstimationError> {
        let total_hdds =
            self.periods.iter().map(|winter| winter.period.hdd_at(balance_point)).collect_vec();
        let uas = self
            .periods
            .iter()
            .zip(&total_hdds)
            .map(|(winter, total_hdd)| winter.ua_at(balance_point, *total_hdd))
            .collect::<Result<Vec<_>, _>>()?;
        let dispersion = Dispersion::try_from_uas(&uas)?;
        Ok(Candidate { balance_point, total_hdds, uas, dispersion })
    }

    fn accept(self, candidate: Candidate) -> Self {
        let periods = self
            .periods
            .into_iter()
            .zip_eq(candidate.total_hdds.into_iter().zip_eq(candidate.uas))
            .map(|(mut winter, (total_hdd, ua))| {
                winter.period = winter.period.with_total_hdd(candidate.balance_point, total_hdd);
                winter.ua = ua;
                winter
            })
            .collect();
        Self { balance_point: candidate.balance_point, periods, dispersion: candidate.dispersion }
    }
}
