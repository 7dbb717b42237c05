use crate::Cell;

/// One of the 4 directions a line of [tiles](crate::Tile) can run in. Diagonals are not
/// adjacent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Towards row `0`.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column `0`.
    Left,
    /// Towards the last column.
    Right,
}

/// Whether a line runs along a row or along a column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
}

impl Direction {
    /// # Returns
    ///
    /// An array of all [`Direction`] variants in the order up, down, left, right.
    #[inline]
    pub fn directions() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// The direction pointing the other way.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The [axis](Axis) the direction moves along.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }
}

impl Axis {
    /// # Returns
    ///
    /// The backward and forward [directions](Direction) along the axis.
    #[inline]
    pub fn directions(self) -> (Direction, Direction) {
        match self {
            Axis::Horizontal => (Direction::Left, Direction::Right),
            Axis::Vertical => (Direction::Up, Direction::Down),
        }
    }
}

/// Finds the neighbouring cell of `cell` in `direction` on a board with `side` cells per side.
///
/// Steps never wrap from the end of one row onto the next row and never leave the board.
///
/// # Arguments
///
/// * `cell`: A [cell](Cell) in the range `0..side * side`.
/// * `direction`: The [direction](Direction) to step in.
/// * `side`: The number of cells on one side of the board.
///
/// # Returns
///
/// The neighbouring [cell](Cell), or [None] when `cell` is on the edge in `direction`.
pub fn step(cell: Cell, direction: Direction, side: usize) -> Option<Cell> {
    let (row, column) = (cell / side, cell % side);
    match direction {
        Direction::Up if row > 0 => Some(cell - side),
        Direction::Down if row + 1 < side => Some(cell + side),
        Direction::Left if column > 0 => Some(cell - 1),
        Direction::Right if column + 1 < side => Some(cell + 1),
        _ => None,
    }
}

/// Finds the adjacent cells of `cell` where adjacent is 4 directional and not diagonal.
///
/// # See Also
///
/// * [step]
///
/// # Returns
///
/// An [iterator](Iterator) of up to 4 [cells](Cell) in the order up, down, left, right.
pub fn adjacent_cells(cell: Cell, side: usize) -> impl Iterator<Item = Cell> {
    Direction::directions()
        .into_iter()
        .filter_map(move |direction| step(cell, direction, side))
}

/// Walks from `cell` in `direction` while `occupied` holds, stopping at the first cell
/// where it does not.
///
/// # Returns
///
/// The first unoccupied [cell](Cell) past the run, or [None] when the run reaches the edge.
pub fn first_unoccupied(
    cell: Cell,
    direction: Direction,
    side: usize,
    occupied: impl Fn(Cell) -> bool,
) -> Option<Cell> {
    let mut current = step(cell, direction, side)?;
    while occupied(current) {
        current = step(current, direction, side)?;
    }
    Some(current)
}
