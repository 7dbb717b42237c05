use crate::{Cell, Game, Location};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Describes the reason why a [tile](crate::Tile) could not be picked up.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum PickUpError {
    /// Attempting to pick up after the game has ended.
    #[display("the game has ended")]
    HasEnded,
    /// Attempting to pick up a second [tile](crate::Tile) while holding one.
    #[display("a tile is already held")]
    AlreadyHolding,
    /// Attempting to pick up from a rack slot without a [tile](crate::Tile).
    #[display("rack slot {slot} is empty")]
    EmptySlot {
        /// The requested rack slot.
        slot: usize,
    },
    /// Attempting to pick up something other than one of the current player's
    /// [movable tiles](Game::movable_tiles).
    #[display("no movable tile on cell {cell}")]
    NotMovable {
        /// The requested [cell](Cell).
        cell: Cell,
    },
}

impl Game {
    /// Picks up the [tile](crate::Tile) in rack `slot` of the current player. The slot is
    /// reserved so that [cancelling](Game::cancel) puts the [tile](crate::Tile) back.
    ///
    /// # Errors
    ///
    /// * [PickUpError::HasEnded] Attempting to pick up after the game has ended.
    /// * [PickUpError::AlreadyHolding] Attempting to pick up while holding a tile.
    /// * [PickUpError::EmptySlot] Attempting to pick up from an empty slot.
    #[instrument(level = "debug", skip(self))]
    pub fn pick_up_from_rack(&mut self, slot: usize) -> Result<(), PickUpError> {
        self.check_pick_up()?;

        let tile = self.players[self.current_player]
            .tile_at_mut(Location::Rack(slot))
            .ok_or(PickUpError::EmptySlot { slot })?;
        tile.hold(slot);
        debug!(letter = ?tile.letter(), "picked up tile from rack");
        Ok(())
    }

    /// Picks up the current player's [tile](crate::Tile) placed this turn on `cell`.
    /// Only [movable tiles](Game::movable_tiles) may be picked up. The
    /// [tile](crate::Tile) reserves the lowest free rack slot to return to when
    /// [cancelled](Game::cancel).
    ///
    /// # Errors
    ///
    /// * [PickUpError::HasEnded] Attempting to pick up after the game has ended.
    /// * [PickUpError::AlreadyHolding] Attempting to pick up while holding a tile.
    /// * [PickUpError::NotMovable] `cell` does not hold a movable tile.
    #[instrument(level = "debug", skip(self))]
    pub fn pick_up_from_board(&mut self, cell: Cell) -> Result<(), PickUpError> {
        self.check_pick_up()?;
        if !self.movable_tiles().contains(&cell) {
            return Err(PickUpError::NotMovable { cell });
        }

        let player = &mut self.players[self.current_player];
        let slot = player.free_slot().unwrap_or_else(|| {
            unreachable!("a placed tile owns no slot, so some slot of its rack is free.")
        });
        let tile = player
            .tile_at_mut(Location::Board(cell))
            .unwrap_or_else(|| unreachable!("movable tiles are placed by the current player."));
        tile.hold(slot);
        debug!(letter = ?tile.letter(), slot, "picked up tile from board");
        self.board.invalidate_legal_moves();
        Ok(())
    }

    fn check_pick_up(&self) -> Result<(), PickUpError> {
        if self.is_game_over() {
            return Err(PickUpError::HasEnded);
        }
        if self.held_tile().is_some() {
            return Err(PickUpError::AlreadyHolding);
        }
        Ok(())
    }
}
