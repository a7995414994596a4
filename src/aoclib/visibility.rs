use crate::error::Result;
use crate::forest::{Forest, Position, TreeHeight};
use crate::point::Direction;

/// True if nothing along `line` is as tall as `height`. A tree of equal height blocks.
pub fn visible_along<I: IntoIterator<Item = TreeHeight>>(line: I, height: TreeHeight) -> bool {
    line.into_iter().all(|tree| tree < height)
}

/// Whether the tree at `position` can be seen from outside the forest.
pub fn is_visible(forest: &Forest, position: Position) -> Result<bool> {
    if forest.is_boundary(position)? {
        return Ok(true);
    }
    let height = forest.height_at(position)?;
    for direction in Direction::ALL {
        if visible_along(forest.sight_line(position, direction)?, height) {
            return Ok(true);
        }
    }
    Ok(false)
}
