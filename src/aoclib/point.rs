use std::fmt;

pub trait DimVal:
    num_traits::Signed
    + num_traits::ToPrimitive
    + std::cmp::Ord
    + std::cmp::Eq
    + Clone
    + Copy
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<
        S: num_traits::Signed
            + num_traits::ToPrimitive
            + std::cmp::Ord
            + std::cmp::Eq
            + Clone
            + Copy
            + std::fmt::Display
            + std::fmt::Debug,
    > DimVal for S
{
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<I: DimVal = i64> {
    pub x: I,
    pub y: I,
}

impl<I: DimVal> Point<I> {
    pub fn new(x: I, y: I) -> Self {
        Point { x, y }
    }

    /// The neighbouring point one step away in `direction`.
    pub fn step(&self, direction: Direction) -> Self {
        *self + direction.offset()
    }
}

impl<I: DimVal> fmt::Display for Point<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<I: DimVal> std::ops::Add for Point<I> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Cardinal directions on a grid where y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn offset<I: DimVal>(self) -> Point<I> {
        let zero = I::zero();
        let one = I::one();
        match self {
            Direction::Up => Point { x: zero, y: -one },
            Direction::Down => Point { x: zero, y: one },
            Direction::Left => Point { x: -one, y: zero },
            Direction::Right => Point { x: one, y: zero },
        }
    }
}
