use crate::{adjacent_cells, Board, Cell, Player};

impl Board {
    /// Finds the [tiles](crate::Tile) placed this turn by `player` which may still be picked
    /// up again: those next to at least one [legal move](Board::get_legal_moves).
    ///
    /// Recomputes the legal moves first when the cache is stale.
    ///
    /// # Returns
    ///
    /// The [cells](Cell) of the movable [tiles](crate::Tile) in rack order.
    pub fn get_movable_tiles(&mut self, player: &Player) -> Vec<Cell> {
        let side = self.side_squares;
        let legal_moves = self.get_legal_moves(player);
        player
            .placed_cells()
            .filter(|&cell| {
                adjacent_cells(cell, side).any(|adjacent| legal_moves.contains(&adjacent))
            })
            .collect()
    }
}
