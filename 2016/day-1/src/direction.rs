use crate::instruction::Turn;
use crate::position::Position;

/// The way we are facing while walking the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in clockwise order, starting at North.
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step taken when walking one block in this direction.
    pub fn vector(self) -> Position {
        match self {
            Direction::North => Position::new(1, 0),
            Direction::East => Position::new(0, 1),
            Direction::South => Position::new(-1, 0),
            Direction::West => Position::new(0, -1),
        }
    }

    /// Direction faced after a 90 degree turn.
    pub fn turn(self, turn: Turn) -> Direction {
        let offset = match turn {
            Turn::Right => 1,
            Turn::Left => Self::CLOCKWISE.len() - 1,
        };
        Self::CLOCKWISE[(self as usize + offset) % Self::CLOCKWISE.len()]
    }
}
