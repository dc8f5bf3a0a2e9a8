//! Linear expressions over grid variables.

use std::collections::BTreeMap;

use blinkpath_core::VarId;

use crate::assignment::Assignment;

/// A sum of `coefficient * variable` terms.
///
/// Terms are kept sorted by variable and each variable appears at most once;
/// adding a variable twice accumulates its coefficient.
///
/// # Example
///
/// ```
/// use blinkpath_core::{Horizon, OccupancyGrid};
/// use blinkpath_model::LinearExpr;
///
/// let grid = OccupancyGrid::new(Horizon::new(2), 2);
/// let mut expr = LinearExpr::sum(grid.row(0));
/// expr.add(grid.var(0, 1), 2.0);
///
/// assert_eq!(expr.len(), 2);
/// assert_eq!(expr.coefficient(grid.var(0, 1)), 3.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(VarId, f64)>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unit-weight sum of `vars`.
    pub fn sum(vars: impl IntoIterator<Item = VarId>) -> Self {
        vars.into_iter().map(|v| (v, 1.0)).collect()
    }

    /// A single unit-weight variable.
    pub fn var(var: VarId) -> Self {
        Self {
            terms: vec![(var, 1.0)],
        }
    }

    /// Adds `coefficient * var`, merging with an existing term.
    pub fn add(&mut self, var: VarId, coefficient: f64) {
        match self.terms.binary_search_by_key(&var, |&(v, _)| v) {
            Ok(i) => self.terms[i].1 += coefficient,
            Err(i) => self.terms.insert(i, (var, coefficient)),
        }
    }

    /// Terms sorted by variable.
    pub fn terms(&self) -> &[(VarId, f64)] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Coefficient of `var`, zero when absent.
    pub fn coefficient(&self, var: VarId) -> f64 {
        self.terms
            .binary_search_by_key(&var, |&(v, _)| v)
            .map(|i| self.terms[i].1)
            .unwrap_or(0.0)
    }

    /// Value of the expression under `assignment`.
    pub fn evaluate(&self, assignment: &Assignment) -> f64 {
        self.terms
            .iter()
            .filter(|&&(v, _)| assignment.is_set(v))
            .fold(0.0, |acc, &(_, c)| acc + c)
    }
}

impl FromIterator<(VarId, f64)> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = (VarId, f64)>>(iter: I) -> Self {
        let mut merged: BTreeMap<VarId, f64> = BTreeMap::new();
        for (var, coefficient) in iter {
            *merged.entry(var).or_insert(0.0) += coefficient;
        }
        Self {
            terms: merged.into_iter().collect(),
        }
    }
}

impl Extend<(VarId, f64)> for LinearExpr {
    fn extend<I: IntoIterator<Item = (VarId, f64)>>(&mut self, iter: I) {
        for (var, coefficient) in iter {
            self.add(var, coefficient);
        }
    }
}

#[cfg(test)]
mod tests {
    use blinkpath_core::{Horizon, OccupancyGrid};

    use super::*;

    #[test]
    fn test_terms_sorted_and_merged() {
        let grid = OccupancyGrid::new(Horizon::new(2), 3);
        let expr: LinearExpr = [
            (grid.var(1, 0), 1.0),
            (grid.var(0, 2), 1.0),
            (grid.var(1, 0), 2.0),
        ]
        .into_iter()
        .collect();

        let vars: Vec<usize> = expr.terms().iter().map(|(v, _)| v.index()).collect();
        assert_eq!(vars, vec![2, 3]);
        assert_eq!(expr.coefficient(grid.var(1, 0)), 3.0);
        assert_eq!(expr.coefficient(grid.var(0, 0)), 0.0);
    }

    #[test]
    fn test_evaluate_counts_set_variables() {
        let grid = OccupancyGrid::new(Horizon::new(2), 2);
        let mut expr = LinearExpr::sum(grid.row(1));
        expr.add(grid.var(0, 0), 2.0);

        let mut assignment = Assignment::zeros(grid.var_count());
        assert_eq!(expr.evaluate(&assignment), 0.0);
        assignment.set(grid.var(0, 0), true);
        assignment.set(grid.var(1, 1), true);
        assert_eq!(expr.evaluate(&assignment), 3.0);
    }

    #[test]
    fn test_unset_expression_is_positive_zero() {
        let grid = OccupancyGrid::new(Horizon::new(2), 2);
        let zeros = Assignment::zeros(grid.var_count());

        let value = LinearExpr::sum(grid.row(0)).evaluate(&zeros);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
        assert!(LinearExpr::new().evaluate(&zeros).is_sign_positive());
        assert_eq!(format!("{}", value), "0");
    }
}
