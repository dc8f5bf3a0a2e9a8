//! Level descriptor.
//!
//! A level is a line of cells. Each cell is either a plain platform (`x`)
//! or belongs to a blink class: `.` is class 0 (empty space, never present)
//! and the digits `1` to `5` are platforms that vanish for that many steps
//! and reappear for one.
//!
//! # Example
//!
//! ```
//! use blinkpath_core::{BlinkClass, Level};
//!
//! let level: Level = "x.2x2".parse().unwrap();
//! let index = level.blink_index();
//!
//! assert_eq!(index.positions(BlinkClass::EMPTY), &[1]);
//! assert_eq!(index.positions(BlinkClass::new(2).unwrap()), &[2, 4]);
//! assert!(index.positions(BlinkClass::new(5).unwrap()).is_empty());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::LevelError;

#[cfg(test)]
mod tests;

/// Longest blink period a level may use.
pub const MAX_BLINK_PERIOD: u8 = 5;

/// Marker for a platform that is always present.
pub const PLATFORM_MARKER: char = 'x';

/// Marker for empty space (blink class 0).
pub const EMPTY_MARKER: char = '.';

/// Disappearance period of a cell.
///
/// Class 0 is permanently absent. Class `k` is invisible for `k` steps and
/// visible on the step after, repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlinkClass(u8);

impl BlinkClass {
    /// Empty space.
    pub const EMPTY: BlinkClass = BlinkClass(0);

    /// Creates a class for the given period, or `None` past [`MAX_BLINK_PERIOD`].
    pub const fn new(period: u8) -> Option<Self> {
        if period <= MAX_BLINK_PERIOD {
            Some(BlinkClass(period))
        } else {
            None
        }
    }

    /// Returns the period.
    #[inline]
    pub const fn period(self) -> u8 {
        self.0
    }

    /// Every class from 0 to [`MAX_BLINK_PERIOD`], ascending.
    pub fn all() -> impl Iterator<Item = BlinkClass> {
        (0..=MAX_BLINK_PERIOD).map(BlinkClass)
    }

    /// The character that marks this class in a level string.
    pub fn marker(self) -> char {
        match self.0 {
            0 => EMPTY_MARKER,
            k => char::from(b'0' + k),
        }
    }

    fn from_marker(marker: char) -> Option<Self> {
        match marker {
            EMPTY_MARKER => Some(BlinkClass::EMPTY),
            '1'..='5' => BlinkClass::new(marker as u8 - b'0'),
            _ => None,
        }
    }
}

impl fmt::Display for BlinkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns whether a platform of `class` is present at `time_step`.
///
/// Class 0 is never present. Class `k` is present exactly when
/// `(time_step + 1) % (k + 1) == 0`, so the cycle is counted from step 1 and
/// the visible step follows `k` invisible ones.
///
/// ```
/// use blinkpath_core::{is_present, BlinkClass};
///
/// let two = BlinkClass::new(2).unwrap();
/// let visible: Vec<usize> = (0..9).filter(|&t| is_present(two, t)).collect();
/// assert_eq!(visible, vec![2, 5, 8]);
/// assert!(!is_present(BlinkClass::EMPTY, 0));
/// ```
#[inline]
pub fn is_present(class: BlinkClass, time_step: usize) -> bool {
    match class.period() {
        0 => false,
        k => (time_step + 1) % (k as usize + 1) == 0,
    }
}

/// A single position of the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Always present.
    Platform,
    /// Present according to its blink class.
    Blink(BlinkClass),
}

impl Cell {
    /// Parses a single level character.
    pub fn from_marker(marker: char) -> Option<Self> {
        if marker == PLATFORM_MARKER {
            return Some(Cell::Platform);
        }
        BlinkClass::from_marker(marker).map(Cell::Blink)
    }

    /// The level character for this cell.
    pub fn marker(self) -> char {
        match self {
            Cell::Platform => PLATFORM_MARKER,
            Cell::Blink(class) => class.marker(),
        }
    }

    /// Returns the blink class, if any.
    pub fn blink_class(self) -> Option<BlinkClass> {
        match self {
            Cell::Platform => None,
            Cell::Blink(class) => Some(class),
        }
    }

    /// Whether the actor can stand on this cell at `time_step`.
    pub fn is_present_at(self, time_step: usize) -> bool {
        match self {
            Cell::Platform => true,
            Cell::Blink(class) => is_present(class, time_step),
        }
    }
}

/// An immutable parsed level.
///
/// Position 0 is the start, position `len() - 1` the goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Level {
    cells: Vec<Cell>,
}

impl Level {
    /// Parses a level string, failing on the first unknown character.
    pub fn parse(s: &str) -> Result<Self, LevelError> {
        let cells = s
            .chars()
            .enumerate()
            .map(|(position, marker)| {
                Cell::from_marker(marker).ok_or(LevelError::UnknownCell { marker, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Level { cells })
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// A level of length 0 or 1 is complete before any move.
    pub fn is_trivial(&self) -> bool {
        self.cells.len() <= 1
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Index of the goal cell, or `None` for an empty level.
    pub fn goal(&self) -> Option<usize> {
        self.cells.len().checked_sub(1)
    }

    /// Groups positions by blink class in one left-to-right scan.
    pub fn blink_index(&self) -> BlinkIndexMap {
        let mut map = BlinkIndexMap::empty();
        for (position, cell) in self.cells.iter().enumerate() {
            if let Cell::Blink(class) = cell {
                map.positions.entry(*class).or_default().push(position);
            }
        }
        map
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::parse(s)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.marker())?;
        }
        Ok(())
    }
}

/// Returns every position of `marker` in `level`, left to right.
///
/// ```
/// use blinkpath_core::positions_of;
///
/// assert_eq!(positions_of("x3x3.3", '3'), vec![1, 3, 5]);
/// assert!(positions_of("xxx", '.').is_empty());
/// ```
pub fn positions_of(level: &str, marker: char) -> Vec<usize> {
    level
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == marker)
        .map(|(position, _)| position)
        .collect()
}

/// Blink class -> ascending positions carrying that class.
///
/// Every class from 0 to [`MAX_BLINK_PERIOD`] has an entry, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlinkIndexMap {
    positions: BTreeMap<BlinkClass, Vec<usize>>,
}

impl BlinkIndexMap {
    fn empty() -> Self {
        Self {
            positions: BlinkClass::all().map(|class| (class, Vec::new())).collect(),
        }
    }

    /// Positions of `class`, ascending.
    pub fn positions(&self, class: BlinkClass) -> &[usize] {
        self.positions
            .get(&class)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates classes in ascending order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (BlinkClass, &[usize])> {
        self.positions
            .iter()
            .map(|(class, positions)| (*class, positions.as_slice()))
    }

    /// Total number of blinking or empty positions.
    pub fn indexed_count(&self) -> usize {
        self.positions.values().map(Vec::len).sum()
    }
}
