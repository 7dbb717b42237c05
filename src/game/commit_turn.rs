use crate::{Cell, Game};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Describes the reason why the turn could not be [committed](Game::commit_turn).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum CommitError {
    /// Attempting to commit after the game has ended.
    #[display("the game has ended")]
    HasEnded,
    /// Attempting to commit while a [tile](crate::Tile) is held.
    #[display("a tile is still held")]
    TileHeld,
    /// Attempting to commit an opening move which leaves the center empty.
    #[display("the opening move must cover cell {center}")]
    CenterNotCovered {
        /// The [center](crate::Board::center) of the board.
        center: Cell,
    },
}

/// The result of a [committed turn](Game::commit_turn).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct CommitOutcome {
    /// The [cells](Cell) of the committed [tiles](crate::Tile) in rack order.
    pub committed: Vec<Cell>,
    /// The number of [tiles](crate::Tile) drawn into the rack.
    pub drawn: usize,
    /// Whether the bag ran out before the rack was full.
    pub bag_empty: bool,
    /// The index of the player whose turn it is now.
    pub next_player: usize,
    /// Whether the bag and every rack are empty.
    pub game_over: bool,
}

impl Game {
    /// Transfers every [tile](crate::Tile) the current player placed this turn from their
    /// rack onto the board, refills their rack, advances to the next player, and computes
    /// the legal moves of the next player.
    ///
    /// Committing with nothing placed passes the turn. Running out of [tiles](crate::Tile)
    /// during the refill is not an error: the rack keeps whatever was drawn and
    /// [CommitOutcome::bag_empty] is set.
    ///
    /// # Errors
    ///
    /// * [CommitError::HasEnded] Attempting to commit after the game has ended.
    /// * [CommitError::TileHeld] Attempting to commit while a [tile](crate::Tile) is held.
    /// * [CommitError::CenterNotCovered] Attempting to commit [tiles](crate::Tile) on an
    /// empty board without one on the [center](crate::Board::center).
    ///
    /// # Returns
    ///
    /// The [outcome](CommitOutcome) of the turn.
    #[instrument(level = "debug", skip(self), fields(player = self.current_player))]
    pub fn commit_turn(&mut self) -> Result<CommitOutcome, CommitError> {
        if self.is_game_over() {
            return Err(CommitError::HasEnded);
        }
        if self.held_tile().is_some() {
            return Err(CommitError::TileHeld);
        }
        let center = self.board.center();
        let player = &self.players[self.current_player];
        if self.board.is_empty()
            && player.placed_cells().next().is_some()
            && !player.has_placed_on(center)
        {
            return Err(CommitError::CenterNotCovered { center });
        }

        let committing_player = self.current_player;
        let player = &mut self.players[committing_player];
        let tiles = player.take_placed();
        let committed: Vec<Cell> = tiles.iter().filter_map(|tile| tile.cell()).collect();
        self.board.commit(tiles, committing_player);

        let before = player.rack().len();
        let bag_empty = player.refill_rack(&mut self.bag).is_err();
        let drawn = player.rack().len() - before;
        if bag_empty {
            debug!(drawn, "bag ran out while refilling");
        }

        self.current_player = (self.current_player + 1) % self.players.len();
        self.board.invalidate_legal_moves();
        self.legal_moves();

        let game_over = self.is_game_over();
        info!(
            committed = committed.len(),
            drawn,
            next_player = self.current_player,
            bag_len = self.bag.len(),
            "committed turn"
        );
        if game_over {
            info!(scores = ?self.game_view().scores, "game over");
        }

        Ok(CommitOutcome {
            committed,
            drawn,
            bag_empty,
            next_player: self.current_player,
            game_over,
        })
    }
}
