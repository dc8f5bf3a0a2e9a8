//! The complete integer program for one level.

use std::collections::BTreeMap;

use blinkpath_core::{BlinkPathError, Horizon, Level, OccupancyGrid};
use thiserror::Error;
use tracing::debug;

use crate::blink::blink_constraints;
use crate::constraint::{ConstraintFamily, ConstraintSet};
use crate::objective::Objective;
use crate::rules::rule_constraints;

/// Why a model could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Levels of length 0 or 1 are complete without a model.
    #[error("level of length {length} needs no model")]
    TrivialLevel { length: usize },

    #[error("horizon must cover at least one step")]
    EmptyHorizon,

    /// `steps * length` variables do not fit in `usize`.
    #[error("grid of {steps} steps by {length} positions is too large")]
    GridTooLarge { steps: usize, length: usize },
}

impl From<ModelError> for BlinkPathError {
    fn from(err: ModelError) -> Self {
        BlinkPathError::Model(err.to_string())
    }
}

/// Grid, constraints and objective of one level.
///
/// Building is a pure function of the level and horizon: two builds of the
/// same input compare equal.
///
/// # Example
///
/// ```
/// use blinkpath_core::{Horizon, Level};
/// use blinkpath_model::{ConstraintFamily, Model};
///
/// let level = Level::parse("x.x").unwrap();
/// let model = Model::build(&level, Horizon::for_length(level.len())).unwrap();
///
/// let stats = model.stats();
/// assert_eq!(stats.variable_count, 27);
/// assert_eq!(stats.by_family[&ConstraintFamily::Blink], 9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    grid: OccupancyGrid,
    constraints: ConstraintSet,
    objective: Objective,
}

impl Model {
    /// Encodes `level` over `horizon` steps.
    pub fn build(level: &Level, horizon: Horizon) -> Result<Self, ModelError> {
        if level.is_trivial() {
            return Err(ModelError::TrivialLevel {
                length: level.len(),
            });
        }
        if horizon.steps() == 0 {
            return Err(ModelError::EmptyHorizon);
        }
        if OccupancyGrid::checked_var_count(horizon, level.len()).is_none() {
            return Err(ModelError::GridTooLarge {
                steps: horizon.steps(),
                length: level.len(),
            });
        }

        let grid = OccupancyGrid::new(horizon, level.len());
        let index = level.blink_index();

        let mut constraints: ConstraintSet = rule_constraints(&grid).into_iter().collect();
        constraints.extend(blink_constraints(&grid, &index));
        let objective = Objective::earliest_progress(&grid);

        let model = Self {
            grid,
            constraints,
            objective,
        };
        for (family, count) in model.constraints.count_by_family() {
            debug!(event = "constraints_built", family = family.name(), count);
        }
        Ok(model)
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    pub fn horizon(&self) -> Horizon {
        self.grid.horizon()
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            level_length: self.grid.length(),
            horizon: self.grid.steps(),
            variable_count: self.grid.var_count(),
            constraint_count: self.constraints.len(),
            by_family: self.constraints.count_by_family(),
        }
    }
}

/// Problem scale of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStats {
    pub level_length: usize,
    pub horizon: usize,
    pub variable_count: usize,
    pub constraint_count: usize,
    pub by_family: BTreeMap<ConstraintFamily, usize>,
}
