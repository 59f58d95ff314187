use serde::Serialize;

/// One of the eight unit steps on the grid. North points at row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Column and row offset of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

/// A line through the grid, made of two opposite directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    /// `|`
    Vertical,
    /// `-`
    Horizontal,
    /// `\`
    Backslash,
    /// `/`
    Slash,
}

impl Orientation {
    /// Order in which orientations are checked; the first winning line is
    /// the one reported.
    pub const PRIORITY: [Orientation; 4] = [
        Orientation::Vertical,
        Orientation::Horizontal,
        Orientation::Backslash,
        Orientation::Slash,
    ];

    /// The pair of opposite directions spanning this line. The first
    /// direction always leads towards the streak's start (upwards for
    /// vertical, leftwards otherwise).
    pub fn directions(self) -> (Direction, Direction) {
        match self {
            Orientation::Vertical => (Direction::North, Direction::South),
            Orientation::Horizontal => (Direction::West, Direction::East),
            Orientation::Backslash => (Direction::NorthWest, Direction::SouthEast),
            Orientation::Slash => (Direction::SouthWest, Direction::NorthEast),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
            Orientation::Backslash => "backslash",
            Orientation::Slash => "slash",
        }
    }
}
