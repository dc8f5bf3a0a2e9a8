//! Linear constraints and the constraint set handed to a solver.

use std::collections::BTreeMap;
use std::fmt;

use crate::assignment::Assignment;
use crate::expr::LinearExpr;

/// Absolute tolerance when comparing sums of 0/1 terms.
const TOLERANCE: f64 = 1e-6;

/// The rule or timing family a constraint was generated by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstraintFamily {
    /// The actor starts on position 0 at step 0.
    Start,
    /// The goal is occupied exactly once over the horizon.
    EndOnce,
    /// At most one occupied position per step.
    SingleActor,
    /// Two-step, three-wide occupancy window.
    JumpWindow,
    /// An absent platform cannot be occupied.
    Blink,
}

impl ConstraintFamily {
    /// Every family in generation order.
    pub const ALL: [ConstraintFamily; 5] = [
        ConstraintFamily::Start,
        ConstraintFamily::EndOnce,
        ConstraintFamily::SingleActor,
        ConstraintFamily::JumpWindow,
        ConstraintFamily::Blink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConstraintFamily::Start => "start",
            ConstraintFamily::EndOnce => "end-once",
            ConstraintFamily::SingleActor => "single-actor",
            ConstraintFamily::JumpWindow => "jump-window",
            ConstraintFamily::Blink => "blink",
        }
    }
}

impl fmt::Display for ConstraintFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Relation between a constraint's expression and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `expr = rhs`
    Eq,
    /// `expr <= rhs`
    Le,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Comparison::Eq => "=",
            Comparison::Le => "<=",
        })
    }
}

/// `expr (= | <=) rhs`, tagged with its family.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub family: ConstraintFamily,
    pub expr: LinearExpr,
    pub comparison: Comparison,
    pub rhs: f64,
}

impl LinearConstraint {
    pub fn eq(family: ConstraintFamily, expr: LinearExpr, rhs: f64) -> Self {
        Self {
            family,
            expr,
            comparison: Comparison::Eq,
            rhs,
        }
    }

    pub fn le(family: ConstraintFamily, expr: LinearExpr, rhs: f64) -> Self {
        Self {
            family,
            expr,
            comparison: Comparison::Le,
            rhs,
        }
    }

    /// Whether `assignment` satisfies this constraint.
    pub fn holds(&self, assignment: &Assignment) -> bool {
        let lhs = self.expr.evaluate(assignment);
        match self.comparison {
            Comparison::Eq => (lhs - self.rhs).abs() <= TOLERANCE,
            Comparison::Le => lhs <= self.rhs + TOLERANCE,
        }
    }
}

impl fmt::Display for LinearConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (var, coefficient) in self.expr.terms() {
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            if *coefficient == 1.0 {
                write!(f, "{var}")?;
            } else {
                write!(f, "{coefficient}*{var}")?;
            }
        }
        write!(f, " {} {}", self.comparison, self.rhs)
    }
}

/// The ordered collection of constraints making up a model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    constraints: Vec<LinearConstraint>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinearConstraint> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Constraints generated by `family`, in order.
    pub fn family(&self, family: ConstraintFamily) -> impl Iterator<Item = &LinearConstraint> {
        self.constraints.iter().filter(move |c| c.family == family)
    }

    /// Number of constraints per family; every family has an entry.
    pub fn count_by_family(&self) -> BTreeMap<ConstraintFamily, usize> {
        let mut counts: BTreeMap<ConstraintFamily, usize> =
            ConstraintFamily::ALL.iter().map(|&f| (f, 0)).collect();
        for constraint in &self.constraints {
            *counts.entry(constraint.family).or_default() += 1;
        }
        counts
    }
}

impl Extend<LinearConstraint> for ConstraintSet {
    fn extend<I: IntoIterator<Item = LinearConstraint>>(&mut self, iter: I) {
        self.constraints.extend(iter);
    }
}

impl FromIterator<LinearConstraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = LinearConstraint>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a LinearConstraint;
    type IntoIter = std::slice::Iter<'a, LinearConstraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
