use std::fmt;

use itertools::iproduct;

use super::point::{Direction, Point};

pub type Index = i64;

/// A rectangular grid anchored at (0, 0), stored row-major.
#[derive(Debug, Clone)]
pub struct DenseGrid<V: Clone + fmt::Debug> {
    width: usize,
    height: usize,
    cells: Vec<V>,
}

impl<V: Clone + fmt::Debug> DenseGrid<V> {
    /// Build a grid from row-major cells. Returns None if `cells` is empty or
    /// does not divide evenly into rows of `width`.
    pub fn from_cells(width: usize, cells: Vec<V>) -> Option<Self> {
        if width == 0 || cells.is_empty() || cells.len() % width != 0 {
            return None;
        }
        let height = cells.len() / width;
        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Get a value by coordinate. Returns None if the coordinate is out-of-bounds.
    pub fn get(&self, coordinate: Point<Index>) -> Option<V> {
        let index = self.index_for(coordinate)?;
        self.cells.get(index).cloned()
    }

    pub fn contains(&self, coordinate: Point<Index>) -> bool {
        self.index_for(coordinate).is_some()
    }

    /// True if the coordinate lies in the first or last row or column.
    pub fn is_boundary(&self, coordinate: Point<Index>) -> bool {
        self.contains(coordinate)
            && (coordinate.x == 0
                || coordinate.y == 0
                || coordinate.x == self.width as Index - 1
                || coordinate.y == self.height as Index - 1)
    }

    /// Every coordinate in the grid, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point<Index>> {
        iproduct!(0..self.height as Index, 0..self.width as Index).map(|(y, x)| Point::new(x, y))
    }

    /// Values strictly beyond `from` in `direction`, nearest first, up to the edge.
    pub fn ray(&self, from: Point<Index>, direction: Direction) -> impl Iterator<Item = &V> + '_ {
        std::iter::successors(Some(from.step(direction)), move |p| Some(p.step(direction)))
            .map_while(move |p| self.index_for(p))
            .map(move |index| &self.cells[index])
    }

    pub fn render_with<F: Fn(&V) -> char>(&self, f: F) -> String {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(&f).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index_for(&self, coordinate: Point<Index>) -> Option<usize> {
        if coordinate.x < 0
            || coordinate.y < 0
            || coordinate.x >= self.width as Index
            || coordinate.y >= self.height as Index
        {
            None
        } else {
            Some(coordinate.y as usize * self.width + coordinate.x as usize)
        }
    }
}

impl<V: Clone + std::fmt::Debug> std::ops::Index<Point<Index>> for DenseGrid<V> {
    type Output = V;

    fn index(&self, coordinate: Point<Index>) -> &Self::Output {
        let index = self.index_for(coordinate).unwrap();
        self.cells.get(index).unwrap()
    }
}
