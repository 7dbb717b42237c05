use crate::{Board, Bonus, Cell, Game, Letter, Player, RackLens, Scores};

/// Immutably borrows properties from [`Game`].
#[derive(Debug)]
pub struct GameView<'a> {
    /// The number of [tiles](crate::Tile) that haven't been drawn yet.
    pub bag_len: usize,
    /// The committed [tiles](crate::Tile) and special squares.
    pub board: &'a Board,
    /// A vector of points for each player.
    pub scores: Scores,
    /// A vector of rack lengths, counting [tiles](crate::Tile) placed this turn.
    pub rack_lens: RackLens,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// Whether the current player is holding a [tile](crate::Tile).
    pub holding: bool,
    /// Whether the bag and every rack are empty.
    pub game_over: bool,
}

/// The [tile](crate::Tile) shown on a [cell](Cell).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Occupant {
    /// The letter of the [tile](crate::Tile).
    pub letter: Letter,
    /// The point value of the [tile](crate::Tile).
    pub value: usize,
    /// The index of the player who committed or placed the [tile](crate::Tile).
    pub owner: usize,
    /// Whether the [tile](crate::Tile) was committed in an earlier turn, as opposed to placed
    /// this turn.
    pub committed: bool,
}

/// Everything a renderer needs to draw one [cell](Cell).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CellView {
    /// The flat index of the [cell](Cell).
    pub cell: Cell,
    /// The [bonus](Bonus) printed on the [cell](Cell).
    pub bonus: Option<Bonus>,
    /// The [tile](crate::Tile) on the [cell](Cell).
    pub occupant: Option<Occupant>,
}

impl<'a> Game {
    /// # Returns
    ///
    /// A new [`GameView`] struct, which immutably borrows properties from [`Game`], but
    /// with `bag` replaced by `bag.len()` and `players` replaced by the scores and rack
    /// lengths of each player.
    pub fn game_view(&'a self) -> GameView<'a> {
        GameView {
            bag_len: self.bag.len(),
            board: &self.board,
            scores: self.players.iter().map(Player::score).collect(),
            rack_lens: self.players.iter().map(|player| player.rack().len()).collect(),
            current_player: self.current_player,
            holding: self.held_tile().is_some(),
            game_over: self.is_game_over(),
        }
    }

    /// Enumerates every [cell](Cell) of the board in row-major order, including the
    /// [tiles](crate::Tile) the current player placed this turn.
    pub fn cells(&'a self) -> impl Iterator<Item = CellView> + 'a {
        let player = &self.players[self.current_player];
        (0..self.board.cells_len()).map(move |cell| {
            let committed = self.board.tile_at(cell).map(|board_tile| Occupant {
                letter: board_tile.tile().letter(),
                value: board_tile.tile().value(),
                owner: board_tile.owner(),
                committed: true,
            });
            let placed = || {
                player
                    .rack()
                    .iter()
                    .find(|tile| tile.cell() == Some(cell))
                    .map(|tile| Occupant {
                        letter: tile.letter(),
                        value: tile.value(),
                        owner: self.current_player,
                        committed: false,
                    })
            };
            CellView {
                cell,
                bonus: self.board.special_squares().bonus(cell),
                occupant: committed.or_else(placed),
            }
        })
    }
}
