use crate::{
    adjacent_cells, first_unoccupied, step, Axis, Board, Cell, Direction, LegalMoves, Player,
};
use itertools::Itertools;

impl Board {
    /// Recomputes the legal moves of `player` when the cache is stale, and then marks the
    /// cache as up to date.
    ///
    /// # Legal Moves
    ///
    /// * Nothing committed, nothing placed: only the [center](Board::center).
    /// * Something committed, nothing placed: every neighbour of a committed [tile](crate::Tile).
    /// * Nothing committed, one placed on the center: every neighbour of the placed
    /// [tile](crate::Tile).
    /// * Nothing committed, one placed elsewhere: only the [center](Board::center), which
    /// every opening must cover.
    /// * Something committed, one placed: for every occupied neighbour of the placed
    /// [tile](crate::Tile), both ends of the line through that neighbour and the placed
    /// [tile](crate::Tile). Each end is the first empty cell past the whole run, not just
    /// one cell past the neighbour.
    /// * Two or more placed: both ends of the line through the first placed
    /// [tile](crate::Tile), along the axis of the first two placed [tiles](crate::Tile).
    ///
    /// Occupied [cells](Cell), whether committed or placed this turn, are never legal. Steps
    /// never wrap around a row or leave the board, so the result may be empty.
    ///
    /// # Arguments
    ///
    /// * `player`: The current player.
    ///
    /// # Returns
    ///
    /// An ordered set of [cells](Cell) where `player` may place a [tile](crate::Tile).
    pub fn get_legal_moves(&mut self, player: &Player) -> &LegalMoves {
        if !self.has_cached_moves {
            self.legal_moves = self.compute_legal_moves(player);
            self.has_cached_moves = true;
        }
        &self.legal_moves
    }

    fn compute_legal_moves(&self, player: &Player) -> LegalMoves {
        let side = self.side_squares;
        let placed = player.placed_cells().collect_vec();
        let occupied = |cell: Cell| self.is_occupied(cell) || placed.contains(&cell);

        let candidates = match placed.as_slice() {
            [] if self.is_empty() => vec![self.center()],
            [] => self
                .tiles
                .iter()
                .filter_map(|board_tile| board_tile.tile().cell())
                .flat_map(|cell| adjacent_cells(cell, side))
                .collect_vec(),
            &[only] if self.is_empty() && only == self.center() => {
                adjacent_cells(only, side).collect_vec()
            }
            &[_] if self.is_empty() => vec![self.center()],
            &[only] => Direction::directions()
                .into_iter()
                .filter(|&direction| step(only, direction, side).map_or(false, occupied))
                .flat_map(|direction| {
                    [
                        first_unoccupied(only, direction, side, occupied),
                        first_unoccupied(only, direction.opposite(), side, occupied),
                    ]
                })
                .flatten()
                .collect_vec(),
            &[first, second, ..] => {
                let axis = if first.abs_diff(second) % side == 0 {
                    Axis::Vertical
                } else {
                    Axis::Horizontal
                };
                let (backward, forward) = axis.directions();
                [
                    first_unoccupied(first, forward, side, occupied),
                    first_unoccupied(first, backward, side, occupied),
                ]
                .into_iter()
                .flatten()
                .collect_vec()
            }
        };

        candidates
            .into_iter()
            .filter(|&cell| !occupied(cell))
            .collect()
    }
}
