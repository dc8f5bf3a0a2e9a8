//! Checks an assignment against every constraint of a model.

use std::fmt;

use crate::assignment::Assignment;
use crate::constraint::{Comparison, ConstraintFamily};
use crate::model::Model;

/// A constraint the assignment breaks.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub family: ConstraintFamily,
    /// Index of the constraint in the model's constraint set.
    pub index: usize,
    pub lhs: f64,
    pub comparison: Comparison,
    pub rhs: f64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "constraint #{} ({}) evaluates to {} but must be {} {}",
            self.index, self.family, self.lhs, self.comparison, self.rhs
        )
    }
}

impl Model {
    /// Every violated constraint, in model order.
    pub fn check(&self, assignment: &Assignment) -> Vec<Violation> {
        self.constraints()
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.holds(assignment))
            .map(|(index, c)| Violation {
                family: c.family,
                index,
                lhs: c.expr.evaluate(assignment),
                comparison: c.comparison,
                rhs: c.rhs,
            })
            .collect()
    }

    /// The first violated constraint, if any.
    pub fn first_violation(&self, assignment: &Assignment) -> Option<Violation> {
        self.check(assignment).into_iter().next()
    }

    /// Whether `assignment` satisfies every constraint.
    pub fn is_feasible(&self, assignment: &Assignment) -> bool {
        self.constraints().iter().all(|c| c.holds(assignment))
    }
}
