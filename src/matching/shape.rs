//! Shape merging: grouping runs that share cells.
//!
//! Runs are merged in one forward pass over scan order. Each run not yet
//! absorbed starts a group and pulls in every later, unabsorbed run that
//! shares a cell with it directly. Runs connected only through another
//! member are not followed, so an L-T-L chain can split into a compound and
//! a standalone run. Intersection cells are recorded once per overlapping
//! pair and are not de-duplicated.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::scanner::{scan, Run};
use crate::core::Position;
use crate::grid::Grid;

/// Two or more runs joined by shared cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compound {
    /// Member runs; the first is the run that started the group.
    pub runs: Vec<Run>,

    /// Cells shared between the first run and each later member.
    pub intersections: Vec<Position>,
}

impl Compound {
    /// Every cell of every member run. Shared cells appear once per run.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.runs.iter().flat_map(|run| run.cells.iter().copied())
    }
}

/// A match found on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// A run that overlaps no other run.
    Run(Run),
    /// Overlapping runs.
    Compound(Compound),
}

impl Shape {
    #[must_use]
    pub fn is_compound(&self) -> bool {
        matches!(self, Shape::Compound(_))
    }

    /// The runs making up this shape.
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        match self {
            Shape::Run(run) => std::slice::from_ref(run),
            Shape::Compound(compound) => &compound.runs,
        }
    }

    /// Intersection cells. Always empty for a standalone run.
    #[must_use]
    pub fn intersections(&self) -> &[Position] {
        match self {
            Shape::Run(_) => &[],
            Shape::Compound(compound) => &compound.intersections,
        }
    }

    /// Every cell of every run in the shape.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.runs().iter().flat_map(|run| run.cells.iter().copied())
    }
}

/// Group runs into shapes.
///
/// Every input run ends up in exactly one output shape. Shapes come out in
/// the scan order of the run that started them.
#[must_use]
pub fn merge(runs: &[Run]) -> Vec<Shape> {
    let mut absorbed: FxHashSet<usize> = FxHashSet::default();
    let mut shapes = Vec::new();

    for (i, run) in runs.iter().enumerate() {
        if absorbed.contains(&i) {
            continue;
        }

        let mut members = vec![run.clone()];
        let mut intersections = Vec::new();

        for (j, other) in runs.iter().enumerate().skip(i + 1) {
            if absorbed.contains(&j) {
                continue;
            }
            let shared = run.overlap(other);
            if shared.is_empty() {
                continue;
            }
            members.push(other.clone());
            intersections.extend(shared);
            absorbed.insert(j);
        }
        absorbed.insert(i);

        if members.len() > 1 {
            shapes.push(Shape::Compound(Compound {
                runs: members,
                intersections,
            }));
        } else {
            shapes.push(Shape::Run(run.clone()));
        }
    }

    shapes
}

/// Scan a grid and merge the runs into shapes.
#[must_use]
pub fn find_shapes(grid: &Grid, min_length: usize) -> Vec<Shape> {
    merge(&scan(grid, min_length))
}
