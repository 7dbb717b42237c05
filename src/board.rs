use crate::{Cell, LegalMoves, NewError, Tile, SIDE_SQUARES_LIMIT};
use std::collections::HashSet;

pub use current_words::*;
pub use special_squares::*;

mod current_words;
mod legal_moves;
mod movable_tiles;
mod special_squares;
#[cfg(test)]
mod test_setup;

/// A committed [tile](Tile) on the board together with the index of the player who committed it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardTile {
    tile: Tile,
    owner: usize,
}

impl BoardTile {
    /// The committed [tile](Tile).
    #[inline]
    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    /// The index of the player who committed the [tile](Tile).
    #[inline]
    pub fn owner(&self) -> usize {
        self.owner
    }
}

/// A square grid of `side_squares` by `side_squares` [cells](Cell) holding committed
/// [tiles](Tile), the [special squares](SpecialSquares) and the cached
/// [legal moves](Board::get_legal_moves) of the current player.
#[derive(Debug, Clone)]
pub struct Board {
    /// The number of [cells](Cell) on one side.
    side_squares: usize,
    /// Bonus squares for the renderer.
    special_squares: SpecialSquares,
    /// Committed [tiles](Tile) in commit order.
    tiles: Vec<BoardTile>,
    /// The index into `tiles` of the [tile](Tile) on each [cell](Cell).
    grid: Vec<Option<usize>>,
    /// The last computed [legal moves](LegalMoves).
    legal_moves: LegalMoves,
    /// Whether `legal_moves` reflects the current board and current player.
    has_cached_moves: bool,
}

impl Board {
    /// Checks that the board has at least one [cell](Cell) and that the
    /// [special squares](SpecialSquares) are on the board and disjoint.
    ///
    /// # Arguments
    ///
    /// * `side_squares`: The number of [cells](Cell) on one side of the board.
    /// * `special_squares`: Bonus squares for the renderer.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyBoard] Attempting to create a board without [cells](Cell).
    /// * [NewError::BoardTooLarge] Attempting to create a board with more than
    /// [SIDE_SQUARES_LIMIT] [cells](Cell) on one side.
    /// * [NewError::SpecialSquareOutOfBounds] Some special square is not on the board.
    /// * [NewError::OverlappingSpecialSquares] Some square carries more than one bonus.
    pub fn new(
        side_squares: usize,
        special_squares: SpecialSquares,
    ) -> Result<Board, HashSet<NewError>> {
        let mut errors = HashSet::with_capacity(3);
        if side_squares == 0 {
            errors.insert(NewError::EmptyBoard);
        }
        if side_squares > SIDE_SQUARES_LIMIT {
            errors.insert(NewError::BoardTooLarge {
                side_squares,
                side_squares_limit: SIDE_SQUARES_LIMIT,
            });
        }
        if let Err(special_errors) = special_squares.check(side_squares) {
            errors.extend(special_errors);
        }
        let cells_len = match side_squares.checked_mul(side_squares) {
            Some(cells_len) if errors.is_empty() => cells_len,
            _ => return Err(errors),
        };

        Ok(Board {
            side_squares,
            special_squares,
            tiles: Vec::new(),
            grid: vec![None; cells_len],
            legal_moves: LegalMoves::new(),
            has_cached_moves: false,
        })
    }

    /// The number of [cells](Cell) on one side.
    #[inline]
    pub fn side_squares(&self) -> usize {
        self.side_squares
    }

    /// The number of [cells](Cell) on the board.
    #[inline]
    pub fn cells_len(&self) -> usize {
        self.grid.len()
    }

    /// The only legal [cell](Cell) of the opening move, `side_squares² / 2`.
    #[inline]
    pub fn center(&self) -> Cell {
        self.grid.len() / 2
    }

    /// Bonus squares for the renderer.
    #[inline]
    pub fn special_squares(&self) -> &SpecialSquares {
        &self.special_squares
    }

    /// Committed [tiles](Tile) in commit order.
    #[inline]
    pub fn tiles(&self) -> &[BoardTile] {
        &self.tiles
    }

    /// # Returns
    ///
    /// The committed [tile](BoardTile) on `cell`, or [None] when the cell is empty or
    /// not on the board.
    pub fn tile_at(&self, cell: Cell) -> Option<&BoardTile> {
        self.grid
            .get(cell)
            .copied()
            .flatten()
            .map(|index| &self.tiles[index])
    }

    /// Whether a committed [tile](Tile) is on `cell`.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.tile_at(cell).is_some()
    }

    /// Whether no [tile](Tile) has been committed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether the cached [legal moves](Board::get_legal_moves) are up to date.
    #[inline]
    pub fn has_cached_moves(&self) -> bool {
        self.has_cached_moves
    }

    /// Marks the cached [legal moves](Board::get_legal_moves) as stale. Called whenever a
    /// [tile](Tile) moves onto or off the board, or the current player changes.
    #[inline]
    pub fn invalidate_legal_moves(&mut self) {
        self.has_cached_moves = false;
    }

    /// Transfers `tiles` placed this turn by player `owner` onto the board.
    ///
    /// # Arguments
    ///
    /// * `tiles`: [Tiles](Tile) with a [board location](crate::Location::Board) on
    /// empty [cells](Cell).
    /// * `owner`: The index of the player committing the [tiles](Tile).
    pub(crate) fn commit(&mut self, tiles: Vec<Tile>, owner: usize) {
        for tile in tiles {
            let Some(cell) = tile.cell() else {
                unreachable!("only tiles placed on the board should be committed.");
            };
            self.grid[cell] = Some(self.tiles.len());
            self.tiles.push(BoardTile { tile, owner });
        }
        self.invalidate_legal_moves();
    }
}
