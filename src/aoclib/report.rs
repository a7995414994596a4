use rayon::prelude::*;

use crate::error::Result;
use crate::forest::{Forest, Position};
use crate::scenic::scenic_score;
use crate::visibility::is_visible;

/// What a single tree contributes to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellReport {
    pub position: Position,
    pub visible: bool,
    pub scenic_score: usize,
}

pub fn evaluate_cell(forest: &Forest, position: Position) -> Result<CellReport> {
    Ok(CellReport {
        position,
        visible: is_visible(forest, position)?,
        scenic_score: scenic_score(forest, position)?,
    })
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub visible_count: usize,
    pub max_scenic_score: usize,
}

impl Report {
    /// Fold per-tree results. The order of `cells` does not matter.
    pub fn from_cells<I: IntoIterator<Item = CellReport>>(cells: I) -> Self {
        cells
            .into_iter()
            .fold(Self::default(), |report, cell| report.record(cell))
    }

    pub fn evaluate(forest: &Forest) -> Result<Self> {
        let report = forest
            .positions()
            .try_fold(Self::default(), |report, position| {
                evaluate_cell(forest, position).map(|cell| report.record(cell))
            })?;
        log::debug!("evaluated {} trees: {:?}", forest.width() * forest.height(), report);
        Ok(report)
    }

    /// Same as [`Report::evaluate`], spread over the rayon thread pool.
    pub fn evaluate_parallel(forest: &Forest) -> Result<Self> {
        let positions = forest.positions().collect::<Vec<_>>();
        let report = positions
            .par_iter()
            .try_fold(Self::default, |report, position| {
                evaluate_cell(forest, *position).map(|cell| report.record(cell))
            })
            .try_reduce(Self::default, |a, b| Ok(a.merge(b)))?;
        log::debug!(
            "evaluated {} trees in parallel: {:?}",
            positions.len(),
            report
        );
        Ok(report)
    }

    fn record(self, cell: CellReport) -> Self {
        Self {
            visible_count: self.visible_count + usize::from(cell.visible),
            max_scenic_score: self.max_scenic_score.max(cell.scenic_score),
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            visible_count: self.visible_count + other.visible_count,
            max_scenic_score: self.max_scenic_score.max(other.max_scenic_score),
        }
    }
}
