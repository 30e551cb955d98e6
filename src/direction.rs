//! Traceback moves and the per-cell set of moves that tie for the optimum.

use std::fmt;

/// A move into cell `(i, j)` from one of its three DP predecessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From `(i-1, j-1)`: `A[i]` is aligned with `B[j]`.
    Diagonal,
    /// From `(i-1, j)`: `A[i]` is aligned with a gap.
    Up,
    /// From `(i, j-1)`: a gap is aligned with `B[j]`.
    Left,
}

impl Direction {
    /// All moves, in the order traceback explores them.
    pub const ALL: [Direction; 3] = [Direction::Diagonal, Direction::Up, Direction::Left];

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Direction::Diagonal => 0b001,
            Direction::Up => 0b010,
            Direction::Left => 0b100,
        }
    }

    /// Cell this move comes from. The caller guarantees the move is legal at `(i, j)`.
    #[inline]
    pub fn predecessor(self, i: usize, j: usize) -> (usize, usize) {
        match self {
            Direction::Diagonal => (i - 1, j - 1),
            Direction::Up => (i - 1, j),
            Direction::Left => (i, j - 1),
        }
    }

    fn symbol(self) -> char {
        match self {
            Direction::Diagonal => 'D',
            Direction::Up => 'U',
            Direction::Left => 'L',
        }
    }
}

/// Subset of `{Diagonal, Up, Left}` stored as a 3-bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);

    #[inline]
    pub const fn single(direction: Direction) -> Self {
        DirectionSet(direction.bit())
    }

    #[inline]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    #[inline]
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// More than one move reaches the cell's optimum.
    #[inline]
    pub fn is_tie(self) -> bool {
        self.len() > 1
    }

    /// Members in `Diagonal, Up, Left` order.
    pub fn iter(self) -> impl DoubleEndedIterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::EMPTY;
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.pad("*");
        }
        let tags: String = self.iter().map(Direction::symbol).collect();
        f.pad(&tags)
    }
}
