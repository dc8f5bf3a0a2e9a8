//! Per-step position traces.
//!
//! A trace lists, for each time step, the occupied position or `None`.

/// Stays on cell 0 until `arrival`, then stands on `goal` once.
///
/// ```
/// use blinkpath_test::stay_then_jump;
///
/// assert_eq!(stay_then_jump(4, 2, 2), vec![Some(0), Some(0), Some(2), None]);
/// ```
pub fn stay_then_jump(steps: usize, goal: usize, arrival: usize) -> Vec<Option<usize>> {
    (0..steps)
        .map(|t| match t.cmp(&arrival) {
            std::cmp::Ordering::Less => Some(0),
            std::cmp::Ordering::Equal => Some(goal),
            std::cmp::Ordering::Greater => None,
        })
        .collect()
}

/// The `(time_step, position)` cells a trace occupies.
pub fn occupied_cells(trace: &[Option<usize>]) -> impl Iterator<Item = (usize, usize)> + '_ {
    trace
        .iter()
        .enumerate()
        .filter_map(|(t, p)| p.map(|p| (t, p)))
}

/// Number of steps at which the trace stands on `position`.
pub fn visits(trace: &[Option<usize>], position: usize) -> usize {
    trace.iter().filter(|&&p| p == Some(position)).count()
}
