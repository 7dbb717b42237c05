use crate::{Board, Cell, Letter, Player, SpecialSquares, Tile};

impl Board {
    /// Generates an empty board without special squares.
    pub(crate) fn empty_board(side_squares: usize) -> Board {
        Board::new(side_squares, SpecialSquares::default())
            .unwrap_or_else(|errors| panic!("side_squares should be non-zero: {errors:?}"))
    }

    /// Generates a board with `committed` letters committed by player `0`.
    pub(crate) fn with_committed(
        side_squares: usize,
        committed: impl IntoIterator<Item = (Cell, Letter)>,
    ) -> Board {
        let mut board = Board::empty_board(side_squares);
        let tiles = committed
            .into_iter()
            .map(|(cell, letter)| {
                let mut tile = Tile::new(letter, letter.value());
                tile.move_to_board(cell);
                tile
            })
            .collect();
        board.commit(tiles, 0);
        board
    }
}

/// Generates a player whose rack only holds `placed` letters placed on the board this turn,
/// in the given order.
pub(crate) fn player_with_placed(placed: impl IntoIterator<Item = (Cell, Letter)>) -> Player {
    let mut player = Player::new();
    player.mut_rack().extend(placed.into_iter().map(|(cell, letter)| {
        let mut tile = Tile::new(letter, letter.value());
        tile.move_to_board(cell);
        tile
    }));
    player
}

/// Generates `len` letters of `word` paired with consecutive [cells](Cell) from `start`,
/// `stride` apart (`1` for a row, the side length for a column).
pub(crate) fn spell(word: &str, start: Cell, stride: usize) -> Vec<(Cell, Letter)> {
    word.chars()
        .enumerate()
        .map(|(index, character)| {
            let letter = Letter::try_from(character)
                .unwrap_or_else(|character| panic!("{character:?} should be a letter"));
            (start + index * stride, letter)
        })
        .collect()
}
