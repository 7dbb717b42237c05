use crate::{Cell, Game};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Describes the reason why the held [tile](crate::Tile) could not be placed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum PlaceError {
    /// Attempting to place after the game has ended.
    #[display("the game has ended")]
    HasEnded,
    /// Attempting to place or cancel without holding a [tile](crate::Tile).
    #[display("no tile is held")]
    NothingHeld,
    /// Attempting to place on a [cell](Cell) outside the current
    /// [legal moves](Game::legal_moves).
    #[display("cell {cell} is not a legal move")]
    IllegalPlacement {
        /// The rejected [cell](Cell).
        cell: Cell,
    },
}

impl Game {
    /// Places the held [tile](crate::Tile) on `cell` if `cell` is one of the current
    /// [legal moves](Game::legal_moves), and then invalidates the legal moves.
    ///
    /// Nothing changes when an error is returned. The [tile](crate::Tile) stays held.
    ///
    /// # Errors
    ///
    /// * [PlaceError::HasEnded] Attempting to place after the game has ended.
    /// * [PlaceError::NothingHeld] Attempting to place without holding a tile.
    /// * [PlaceError::IllegalPlacement] `cell` is not a legal move.
    #[instrument(level = "debug", skip(self))]
    pub fn place(&mut self, cell: Cell) -> Result<(), PlaceError> {
        if self.is_game_over() {
            return Err(PlaceError::HasEnded);
        }
        if self.held_tile().is_none() {
            return Err(PlaceError::NothingHeld);
        }
        if !self.legal_moves().contains(&cell) {
            debug!("rejected placement");
            return Err(PlaceError::IllegalPlacement { cell });
        }

        let tile = self.players[self.current_player]
            .held_tile_mut()
            .ok_or(PlaceError::NothingHeld)?;
        tile.move_to_board(cell);
        debug!(letter = ?tile.letter(), "placed tile");
        self.board.invalidate_legal_moves();
        Ok(())
    }

    /// Puts the held [tile](crate::Tile) back into the rack slot it reserved.
    ///
    /// # Errors
    ///
    /// * [PlaceError::NothingHeld] Attempting to cancel without holding a tile.
    #[instrument(level = "debug", skip(self))]
    pub fn cancel(&mut self) -> Result<(), PlaceError> {
        let tile = self.players[self.current_player]
            .held_tile_mut()
            .ok_or(PlaceError::NothingHeld)?;
        let Some(slot) = tile.rack_slot() else {
            unreachable!("a held tile always reserves a rack slot.");
        };
        tile.move_to_rack(slot);
        debug!(letter = ?tile.letter(), slot, "returned tile to rack");
        Ok(())
    }

    /// Releases the held [tile](crate::Tile) over `target`. The [tile](crate::Tile) is
    /// [placed](Game::place) when `target` is a legal move. Otherwise it is
    /// [cancelled](Game::cancel) back into its rack slot.
    ///
    /// # Arguments
    ///
    /// * `target`: The [cell](Cell) under the release, or [None] when released off the board.
    ///
    /// # Errors
    ///
    /// * [PlaceError::HasEnded] Attempting to release after the game has ended.
    /// * [PlaceError::NothingHeld] Attempting to release without holding a tile.
    /// * [PlaceError::IllegalPlacement] `target` is not a legal move. The
    /// [tile](crate::Tile) is back in its rack slot.
    ///
    /// # Returns
    ///
    /// The [cell](Cell) the [tile](crate::Tile) was placed on, or [None] when it went back
    /// into the rack.
    pub fn release(&mut self, target: Option<Cell>) -> Result<Option<Cell>, PlaceError> {
        if self.is_game_over() {
            return Err(PlaceError::HasEnded);
        }
        let Some(cell) = target else {
            self.cancel()?;
            return Ok(None);
        };
        match self.place(cell) {
            Ok(()) => Ok(Some(cell)),
            Err(PlaceError::IllegalPlacement { cell }) => {
                self.cancel()?;
                Err(PlaceError::IllegalPlacement { cell })
            }
            Err(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LegalMoves, Location};

    #[test]
    fn nothing_held() {
        let mut game = Game::new(2, None, None).expect("new should return Ok");
        let center = game.board().center();

        assert_eq!(Err(PlaceError::NothingHeld), game.place(center));
        assert_eq!(Err(PlaceError::NothingHeld), game.cancel());
        assert_eq!(Err(PlaceError::NothingHeld), game.release(Some(center)));
        assert_eq!(Err(PlaceError::NothingHeld), game.release(None));
    }

    #[test]
    fn has_ended() {
        let mut game = Game::new(1, None, None).expect("new should return Ok");
        game.empty_bag();
        game.players[0].mut_rack().clear();
        let center = game.board().center();

        assert_eq!(Err(PlaceError::HasEnded), game.place(center));
        assert_eq!(Err(PlaceError::HasEnded), game.release(None));
    }

    #[test]
    fn place_opening_move() {
        let mut game = Game::new(2, None, None).expect("new should return Ok");
        let center = game.board().center();
        game.pick_up_from_rack(4).expect("pick_up_from_rack should return Ok");

        game.place(center).expect("place should return Ok");

        assert!(game.held_tile().is_none());
        assert_eq!(vec![center], game.players[0].placed_cells().collect::<Vec<_>>());
        assert!(!game.board().is_occupied(center));
        assert_eq!(
            &LegalMoves::from([center - 15, center + 15, center - 1, center + 1]),
            game.legal_moves()
        );
        assert_eq!(vec![center], game.movable_tiles());
    }

    #[test]
    fn illegal_placement_changes_nothing() {
        let mut game = Game::new(2, None, None).expect("new should return Ok");
        game.pick_up_from_rack(4).expect("pick_up_from_rack should return Ok");
        let before = game.clone();

        assert_eq!(
            Err(PlaceError::IllegalPlacement { cell: 0 }),
            game.place(0)
        );

        assert_eq!(before.get_rack(0), game.get_rack(0));
        assert_eq!(
            Some(Location::Held { slot: 4 }),
            game.held_tile().map(|tile| tile.location())
        );
    }

    #[test]
    fn cancel_restores_slot() {
        let mut game = Game::new(2, None, None).expect("new should return Ok");
        let before = game.get_rack(0).cloned();
        game.pick_up_from_rack(5).expect("pick_up_from_rack should return Ok");

        game.cancel().expect("cancel should return Ok");

        assert_eq!(before.as_ref(), game.get_rack(0));
    }

    #[test]
    fn release_legal_and_illegal() {
        let mut game = Game::new(2, None, None).expect("new should return Ok");
        let center = game.board().center();
        let before = game.get_rack(0).cloned();

        game.pick_up_from_rack(1).expect("pick_up_from_rack should return Ok");
        assert_eq!(
            Err(PlaceError::IllegalPlacement { cell: center + 1 }),
            game.release(Some(center + 1))
        );
        assert_eq!(before.as_ref(), game.get_rack(0));

        game.pick_up_from_rack(1).expect("pick_up_from_rack should return Ok");
        assert_eq!(Ok(None), game.release(None));
        assert_eq!(before.as_ref(), game.get_rack(0));

        game.pick_up_from_rack(1).expect("pick_up_from_rack should return Ok");
        assert_eq!(Ok(Some(center)), game.release(Some(center)));
        assert_eq!(
            Some(Location::Board(center)),
            game.get_rack(0).map(|rack| rack[1].location())
        );
    }

    #[test]
    fn move_placed_tile_to_other_end() {
        let mut game = Game::new(2, None, None).expect("new should return Ok");
        let center = game.board().center();
        game.pick_up_from_rack(0).expect("pick_up_from_rack should return Ok");
        game.place(center).expect("place should return Ok");
        game.pick_up_from_rack(1).expect("pick_up_from_rack should return Ok");
        game.place(center + 1).expect("place should return Ok");
        assert_eq!(vec![center, center + 1], game.movable_tiles());

        game.pick_up_from_board(center + 1)
            .expect("pick_up_from_board should return Ok");
        game.place(center - 1).expect("place should return Ok");

        assert_eq!(
            vec![center, center - 1],
            game.players[0].placed_cells().collect::<Vec<_>>()
        );
        assert_eq!(
            &LegalMoves::from([center - 2, center + 1]),
            game.legal_moves()
        );
    }
}
