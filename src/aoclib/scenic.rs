use crate::error::Result;
use crate::forest::{Forest, Position, TreeHeight};
use crate::point::Direction;

/// Number of trees seen along `line`, counting the first one at least as tall as
/// `height`. If nothing blocks the view this is the length of the line.
pub fn viewing_distance<I: IntoIterator<Item = TreeHeight>>(line: I, height: TreeHeight) -> usize {
    let mut distance = 0;
    for tree in line {
        distance += 1;
        if tree >= height {
            break;
        }
    }
    distance
}

/// Product of the four viewing distances; zero on the edge of the forest.
pub fn scenic_score(forest: &Forest, position: Position) -> Result<usize> {
    if forest.is_boundary(position)? {
        return Ok(0);
    }
    let height = forest.height_at(position)?;
    let mut score = 1;
    for direction in Direction::ALL {
        score *= viewing_distance(forest.sight_line(position, direction)?, height);
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::{scenic_score, viewing_distance};
    use crate::error::Error;
    use crate::forest::tests::example;
    use crate::forest::{Forest, Position, TreeHeight};
    use crate::point::Direction;

    fn heights(h: &[u8]) -> Vec<TreeHeight> {
        h.iter().copied().map(TreeHeight::from).collect()
    }

    fn distance(forest: &Forest, position: Position, direction: Direction) -> usize {
        let height = forest.height_at(position).unwrap();
        viewing_distance(forest.sight_line(position, direction).unwrap(), height)
    }

    #[test]
    fn test_viewing_distance() {
        let five = TreeHeight::from(5);
        assert_eq!(viewing_distance(heights(&[]), five), 0);
        assert_eq!(viewing_distance(heights(&[1, 2, 3]), five), 3);
        assert_eq!(viewing_distance(heights(&[1, 7, 3]), five), 2);
        assert_eq!(viewing_distance(heights(&[9, 1, 1]), five), 1);
    }

    #[test]
    fn test_equal_height_blocks_inclusive() {
        let five = TreeHeight::from(5);
        assert_eq!(viewing_distance(heights(&[5, 1, 1]), five), 1);
        assert_eq!(viewing_distance(heights(&[4, 5, 1]), five), 2);
        assert_eq!(viewing_distance(heights(&[4, 6, 5]), five), 2);
    }

    #[test]
    fn test_equal_height_blocks_each_direction() {
        // 5 at the centre, a 5 two steps away in every direction
        let forest: Forest = "00500\n00100\n51515\n00100\n00500".parse().unwrap();
        let center = Position::new(2, 2);
        for direction in Direction::ALL {
            assert_eq!(distance(&forest, center, direction), 2, "{:?}", direction);
        }
        assert_eq!(scenic_score(&forest, center).unwrap(), 16);
    }

    #[test]
    fn test_example_directions() {
        let forest = example();
        let position = Position::new(2, 1);
        assert_eq!(distance(&forest, position, Direction::Up), 1);
        assert_eq!(distance(&forest, position, Direction::Left), 1);
        assert_eq!(distance(&forest, position, Direction::Right), 2);
        assert_eq!(distance(&forest, position, Direction::Down), 2);
        assert_eq!(scenic_score(&forest, position).unwrap(), 4);

        let position = Position::new(2, 3);
        assert_eq!(distance(&forest, position, Direction::Up), 2);
        assert_eq!(distance(&forest, position, Direction::Left), 2);
        assert_eq!(distance(&forest, position, Direction::Down), 1);
        assert_eq!(distance(&forest, position, Direction::Right), 2);
        assert_eq!(scenic_score(&forest, position).unwrap(), 8);
    }

    #[test]
    fn test_boundary_scores_zero() {
        let forest = example();
        for position in forest.positions() {
            if forest.is_boundary(position).unwrap() {
                assert_eq!(scenic_score(&forest, position).unwrap(), 0, "{}", position);
            }
        }
    }

    #[test]
    fn test_interior_distances_bounded() {
        let forest = example();
        let (w, h) = (forest.width() as i64, forest.height() as i64);
        for position in forest.positions() {
            if forest.is_boundary(position).unwrap() {
                continue;
            }
            let to_edge = |d: Direction| {
                let cells = match d {
                    Direction::Up => position.y,
                    Direction::Down => h - 1 - position.y,
                    Direction::Left => position.x,
                    Direction::Right => w - 1 - position.x,
                };
                cells as usize
            };
            let mut product = 1;
            for direction in Direction::ALL {
                let d = distance(&forest, position, direction);
                assert!(d >= 1 && d <= to_edge(direction), "{} {:?}", position, direction);
                product *= d;
            }
            assert_eq!(scenic_score(&forest, position).unwrap(), product);
        }
    }

    #[test]
    fn test_out_of_range() {
        let forest = example();
        assert!(matches!(
            scenic_score(&forest, Position::new(-2, 2)),
            Err(Error::OutOfRange { .. })
        ));
    }
}
