use std::io::BufRead;
use std::str::FromStr;

use derive_more::{Display, From, Into};
use nom::{
    character::complete::satisfy,
    combinator::{all_consuming, map, map_opt},
    multi::many1,
    IResult,
};
use nonempty::NonEmpty;

use crate::error::{Error, Result};
use crate::grid::{DenseGrid, Index};
use crate::point::{Direction, Point};

pub type Position = Point<Index>;

#[derive(Debug, Display, From, Into, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct TreeHeight(u8);

fn parse_row(line: &str) -> IResult<&str, NonEmpty<TreeHeight>> {
    map_opt(
        many1(map(satisfy(|c: char| c.is_ascii_digit()), |c: char| {
            TreeHeight(c as u8 - b'0')
        })),
        NonEmpty::from_vec,
    )(line)
}

/// An immutable patch of trees, one digit per tree.
#[derive(Debug, Clone)]
pub struct Forest {
    trees: DenseGrid<TreeHeight>,
}

impl Forest {
    /// Build a forest from rows of digits. Trailing blank rows are ignored; any
    /// other blank, ragged or non-digit row is rejected.
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = rows.into_iter().collect::<Vec<_>>();
        while rows.last().map_or(false, |r| r.as_ref().is_empty()) {
            rows.pop();
        }
        let mut width = None;
        let mut cells = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            let line = i + 1;
            let row = row.as_ref();
            let (_, heights) = all_consuming(parse_row)(row)
                .map_err(|_| Error::malformed(line, format!("{:?} is not a row of digits", row)))?;
            match width {
                None => width = Some(heights.len()),
                Some(w) if w != heights.len() => {
                    return Err(Error::malformed(
                        line,
                        format!("row has {} trees, expected {}", heights.len(), w),
                    ))
                }
                Some(_) => {}
            }
            cells.extend(heights);
        }
        let width = width.ok_or_else(|| Error::malformed(0, "no rows found"))?;
        let trees = DenseGrid::from_cells(width, cells)
            .ok_or_else(|| Error::malformed(0, "rows do not form a rectangle"))?;
        log::debug!("parsed a {}x{} forest", trees.width(), trees.height());
        Ok(Self { trees })
    }

    pub fn from_reader<R: BufRead>(r: R) -> Result<Self> {
        let lines = r.lines().collect::<std::io::Result<Vec<_>>>()?;
        Self::from_rows(lines)
    }

    pub fn width(&self) -> usize {
        self.trees.width()
    }

    pub fn height(&self) -> usize {
        self.trees.height()
    }

    pub fn height_at(&self, position: Position) -> Result<TreeHeight> {
        self.trees
            .get(position)
            .ok_or_else(|| self.out_of_range(position))
    }

    pub fn is_boundary(&self, position: Position) -> Result<bool> {
        self.check(position)?;
        Ok(self.trees.is_boundary(position))
    }

    /// Heights of the trees seen looking out from `position` in `direction`,
    /// nearest first. The tree at `position` itself is not included.
    pub fn sight_line(
        &self,
        position: Position,
        direction: Direction,
    ) -> Result<impl Iterator<Item = TreeHeight> + '_> {
        self.check(position)?;
        Ok(self.trees.ray(position, direction).copied())
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        self.trees.points()
    }

    pub fn render(&self) -> String {
        self.trees
            .render_with(|h| char::from(b'0' + u8::from(*h)))
    }

    fn check(&self, position: Position) -> Result<()> {
        if self.trees.contains(position) {
            Ok(())
        } else {
            Err(self.out_of_range(position))
        }
    }

    fn out_of_range(&self, position: Position) -> Error {
        Error::OutOfRange {
            position,
            width: self.width(),
            height: self.height(),
        }
    }
}

impl FromStr for Forest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_rows(s.lines())
    }
}
