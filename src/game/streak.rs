//! Run detection: the longest line of same-owner pieces through a piece.
//!
//! This is the one primitive behind both win detection and the bot's board
//! evaluation.

use serde::Serialize;

use super::{Direction, Grid, Orientation, Piece, Position};
use crate::game::Player;

/// Number of pieces in a row needed to win.
pub const WIN_LENGTH: usize = 4;

/// Length of a streak that counts as a near-win.
pub const NEAR_WIN_LENGTH: usize = WIN_LENGTH - 1;

/// A contiguous run of one player's pieces along one orientation, ordered
/// from one end of the line to the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Streak {
    orientation: Orientation,
    pieces: Vec<Piece>,
}

impl Streak {
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Owner of every piece in the streak
    pub fn owner(&self) -> Player {
        self.pieces[0].player
    }

    pub fn is_winning(&self) -> bool {
        self.len() >= WIN_LENGTH
    }

    pub fn contains(&self, position: Position) -> bool {
        self.pieces.iter().any(|piece| piece.position == position)
    }

    /// Piece closest to row 0
    pub fn highest(&self) -> Piece {
        self.end_by_key(|piece| piece.position.y)
    }

    /// Piece closest to column 0
    pub fn leftmost(&self) -> Piece {
        self.end_by_key(|piece| piece.position.x)
    }

    /// Piece furthest from column 0
    pub fn rightmost(&self) -> Piece {
        self.end_by_key(|piece| usize::MAX - piece.position.x)
    }

    fn end_by_key(&self, key: impl Fn(&Piece) -> usize) -> Piece {
        let mut best = self.pieces[0];
        for piece in &self.pieces[1..] {
            if key(piece) < key(&best) {
                best = *piece;
            }
        }
        best
    }
}

/// Walk outward from `anchor` while the neighbouring cells belong to the
/// same player.
fn walk(grid: &Grid, anchor: Piece, direction: Direction) -> Vec<Piece> {
    let mut found = Vec::new();
    let mut cursor = anchor.position;
    while let Some(next) = grid.neighbor(cursor, direction) {
        if grid.get(next) != Some(anchor.player) {
            break;
        }
        found.push(Piece {
            position: next,
            player: anchor.player,
        });
        cursor = next;
    }
    found
}

/// Maximal streak through `anchor` along `orientation`.
pub fn scan(grid: &Grid, anchor: Piece, orientation: Orientation) -> Streak {
    let (towards_start, towards_end) = orientation.directions();

    let mut pieces = walk(grid, anchor, towards_start);
    pieces.reverse();
    pieces.push(anchor);
    pieces.extend(walk(grid, anchor, towards_end));

    Streak {
        orientation,
        pieces,
    }
}

/// Streaks through `anchor` for all four orientations, in priority order.
pub fn scan_all(grid: &Grid, anchor: Piece) -> [Streak; 4] {
    Orientation::PRIORITY.map(|orientation| scan(grid, anchor, orientation))
}

/// Longest streak through `anchor`. Ties go to the orientation checked first.
pub fn longest(grid: &Grid, anchor: Piece) -> Streak {
    let [first, rest @ ..] = scan_all(grid, anchor);
    rest.into_iter()
        .fold(first, |best, streak| if streak.len() > best.len() { streak } else { best })
}
