use crate::{step, Axis, Board, Cell, Letter, Player};
use std::collections::BTreeMap;

/// A run of adjacent letters through at least one [tile](crate::Tile) placed this turn.
///
/// Words are informational. They are never checked against a dictionary or scored, and they
/// never change which moves are legal.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Word {
    /// The [cells](Cell) of the run from left to right or top to bottom.
    pub cells: Vec<Cell>,
    /// The lower case letters of the run.
    pub text: String,
    /// Whether the run is along a row or a column.
    pub axis: Axis,
}

impl Board {
    /// Reconstructs the horizontal and vertical runs of letters passing through the
    /// [tiles](crate::Tile) placed this turn by `player`.
    ///
    /// Runs shorter than `2` letters are skipped, unless a single placed
    /// [tile](crate::Tile) touches nothing at all, in which case that letter is its own word.
    ///
    /// # Returns
    ///
    /// Every distinct run, ordered by axis and then by first [cell](Cell).
    pub fn current_words(&self, player: &Player) -> Vec<Word> {
        let letter_at = |cell: Cell| {
            self.tile_at(cell)
                .map(|board_tile| board_tile.tile().letter())
                .or_else(|| {
                    player
                        .rack()
                        .iter()
                        .find(|tile| tile.cell() == Some(cell))
                        .map(|tile| tile.letter())
                })
        };

        let mut words = BTreeMap::new();
        for cell in player.placed_cells() {
            for axis in [Axis::Horizontal, Axis::Vertical] {
                let (backward, forward) = axis.directions();
                let mut start = cell;
                while let Some(previous) = step(start, backward, self.side_squares)
                    .filter(|&previous| letter_at(previous).is_some())
                {
                    start = previous;
                }

                let mut cells = vec![start];
                while let Some(next) = cells
                    .last()
                    .and_then(|&last| step(last, forward, self.side_squares))
                    .filter(|&next| letter_at(next).is_some())
                {
                    cells.push(next);
                }

                if cells.len() > 1 {
                    words.entry((axis, start)).or_insert(cells);
                }
            }
        }

        if words.is_empty() {
            let mut placed = player.placed_cells();
            if let (Some(only), None) = (placed.next(), placed.next()) {
                words.insert((Axis::Horizontal, only), vec![only]);
            }
        }

        words
            .into_iter()
            .map(|((axis, _), cells)| Word {
                text: cells
                    .iter()
                    .filter_map(|&cell| letter_at(cell))
                    .map(Letter::as_char)
                    .collect(),
                cells,
                axis,
            })
            .collect()
    }
}
