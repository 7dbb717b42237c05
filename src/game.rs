use crate::{
    Board, Cell, LegalMoves, Player, Players, Rack, SpecialSquares, Tile, TileBag, Word,
    WordList, PLAYER_CAPACITY, RACK_CAPACITY, SIDE_SQUARES, STANDARD_SIDE_SQUARES, TOTAL_TILES,
};
use derive_more::{Display, Error};
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, instrument};

pub use commit_turn::*;
pub use game_view::*;
pub use pick_up::*;
pub use place::*;

mod commit_turn;
mod game_view;
mod pick_up;
mod place;
#[cfg(test)]
mod test_setup;

/// Owns the bag, the board and every player, and advances the game one turn at a time.
/// Created from [Game::new].
#[derive(Debug, Clone)]
pub struct Game {
    /// This is a bag of all the [tiles](Tile) that haven't been drawn yet.
    bag: TileBag,
    /// The committed [tiles](Tile) and the cached legal moves of the current player.
    board: Board,
    /// A vector of players, each owning a rack.
    players: Players,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// Words shown alongside the current play. Never consulted for legality.
    word_list: Option<WordList>,
}

/// Describes the reason why [Game] could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum NewError {
    /// Attempting [to start](Game::new) with no players.
    #[display("a game needs at least one player")]
    EmptyPlayers,
    /// Attempting to fill more racks than the bag can supply.
    #[display("{requested_tiles} tiles requested for racks but the bag holds {tiles_in_bag}")]
    NotEnoughTiles {
        /// The number of [tiles](Tile) requested for full racks.
        requested_tiles: usize,
        /// The number of [tiles](Tile) in a full bag.
        tiles_in_bag: usize,
    },
    /// Attempting to create a [board](Board) without cells.
    #[display("the board needs at least one cell")]
    EmptyBoard,
    /// Attempting to create a [board](Board) with more than
    /// [SIDE_SQUARES_LIMIT](crate::SIDE_SQUARES_LIMIT) [cells](Cell) on one side.
    #[display("{side_squares} cells on one side exceeds the limit of {side_squares_limit}")]
    BoardTooLarge {
        /// The requested number of [cells](Cell) on one side.
        side_squares: usize,
        /// The largest number of [cells](Cell) on one side.
        side_squares_limit: usize,
    },
    /// Some special square is not on the [board](Board).
    #[display("special square {cell} is not on the board")]
    SpecialSquareOutOfBounds {
        /// The [cell](Cell) off the board.
        cell: Cell,
    },
    /// Some square carries more than one bonus.
    #[display("special square {cell} carries more than one bonus")]
    OverlappingSpecialSquares {
        /// The [cell](Cell) listed more than once.
        cell: Cell,
    },
}

impl Game {
    /// Creates a game with a freshly shuffled bag using [rand::thread_rng].
    ///
    /// # See Also
    ///
    /// * [Game::new_with_rng]
    pub fn new(
        players_len: usize,
        side_squares: Option<usize>,
        special_squares: Option<SpecialSquares>,
    ) -> Result<Game, HashSet<NewError>> {
        Game::new_with_rng(
            players_len,
            side_squares,
            special_squares,
            &mut rand::thread_rng(),
        )
    }

    /// Checks that there is at least one player, that the bag can fill every rack, and that
    /// the [board](Board) is valid.
    ///
    /// Fills and shuffles the bag, fills every rack in player order, and computes the legal
    /// moves of player `0`, who moves first.
    ///
    /// When `side_squares` is [None], [SIDE_SQUARES] is used. When `special_squares` is
    /// [None], the [standard layout](SpecialSquares::standard) is used on a
    /// [STANDARD_SIDE_SQUARES] board and no special squares otherwise.
    ///
    /// # Arguments
    ///
    /// * `players_len`: The number of players in the game.
    /// * `side_squares`: The number of cells on one side of the board.
    /// * `special_squares`: Bonus squares for the renderer.
    /// * `rng`: The source of randomness for the shuffle.
    ///
    /// # Errors
    ///
    /// * [NewError::EmptyPlayers] Attempting to start with no players.
    /// * [NewError::NotEnoughTiles] Attempting to fill more racks than the bag can supply.
    /// * [NewError::EmptyBoard] Attempting to create a board without cells.
    /// * [NewError::BoardTooLarge] Attempting to create a board with more than
    /// [SIDE_SQUARES_LIMIT](crate::SIDE_SQUARES_LIMIT) cells on one side.
    /// * [NewError::SpecialSquareOutOfBounds] Some special square is not on the board.
    /// * [NewError::OverlappingSpecialSquares] Some square carries more than one bonus.
    pub fn new_with_rng<R: Rng + ?Sized>(
        players_len: usize,
        side_squares: Option<usize>,
        special_squares: Option<SpecialSquares>,
        rng: &mut R,
    ) -> Result<Game, HashSet<NewError>> {
        let side_squares = side_squares.unwrap_or(SIDE_SQUARES);
        let special_squares = special_squares.unwrap_or_else(|| {
            if side_squares == STANDARD_SIDE_SQUARES {
                SpecialSquares::standard()
            } else {
                SpecialSquares::default()
            }
        });

        let mut errors = HashSet::with_capacity(4);
        if players_len == 0 {
            errors.insert(NewError::EmptyPlayers);
        }
        let requested_tiles = players_len * RACK_CAPACITY;
        if requested_tiles > TOTAL_TILES {
            errors.insert(NewError::NotEnoughTiles {
                requested_tiles,
                tiles_in_bag: TOTAL_TILES,
            });
        }
        let board = match Board::new(side_squares, special_squares) {
            Ok(board) => Some(board),
            Err(board_errors) => {
                errors.extend(board_errors);
                None
            }
        };
        let Some(board) = board.filter(|_| errors.is_empty()) else {
            return Err(errors);
        };

        let mut bag = TileBag::fill_bag(rng);
        let mut players = Players::with_capacity(PLAYER_CAPACITY);
        for _ in 0..players_len {
            let mut player = Player::new();
            if player.refill_rack(&mut bag).is_err() {
                unreachable!("requested_tiles <= TOTAL_TILES was checked.");
            }
            players.push(player);
        }

        let mut game = Game {
            bag,
            board,
            players,
            current_player: 0,
            word_list: None,
        };
        game.legal_moves();
        debug!(players_len, side_squares, "started game");
        Ok(game)
    }

    /// Injects the word list used by [Game::unknown_words].
    pub fn with_word_list(mut self, word_list: WordList) -> Game {
        self.word_list = Some(word_list);
        self
    }

    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// The [tiles](Tile) not yet drawn.
    #[inline]
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    /// The committed [tiles](Tile) and special squares.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The injected word list, if any.
    #[inline]
    pub fn word_list(&self) -> Option<&WordList> {
        self.word_list.as_ref()
    }

    /// # Returns
    ///
    /// The player at `index` or `None` if out of bounds.
    pub fn get_player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// # Returns
    ///
    /// The rack of the player at `index` or `None` if out of bounds.
    pub fn get_rack(&self, index: usize) -> Option<&Rack> {
        self.players.get(index).map(Player::rack)
    }

    /// The [tile](Tile) the current player is holding, if any.
    pub fn held_tile(&self) -> Option<&Tile> {
        self.players[self.current_player].held_tile()
    }

    /// # Returns
    ///
    /// Whether the bag and every rack are empty. No operation advances the game afterwards.
    pub fn is_game_over(&self) -> bool {
        self.bag.is_empty() && self.players.iter().all(Player::is_empty)
    }

    /// # Returns
    ///
    /// The number of [tiles](Tile) in the bag, in every rack and on the board. Always
    /// [TOTAL_TILES].
    pub fn tiles_len(&self) -> usize {
        self.bag.len()
            + self
                .players
                .iter()
                .map(|player| player.rack().len())
                .sum::<usize>()
            + self.board.tiles().len()
    }

    /// The [cells](Cell) where the current player may place the held [tile](Tile),
    /// recomputed when stale.
    ///
    /// # See Also
    ///
    /// * [Board::get_legal_moves]
    pub fn legal_moves(&mut self) -> &LegalMoves {
        self.board
            .get_legal_moves(&self.players[self.current_player])
    }

    /// The [cells](Cell) of the current player's placed [tiles](Tile) which may be picked up
    /// again.
    ///
    /// # See Also
    ///
    /// * [Board::get_movable_tiles]
    pub fn movable_tiles(&mut self) -> Vec<Cell> {
        self.board
            .get_movable_tiles(&self.players[self.current_player])
    }

    /// The runs of letters through the current player's placed [tiles](Tile).
    ///
    /// # See Also
    ///
    /// * [Board::current_words]
    pub fn current_words(&self) -> Vec<Word> {
        self.board
            .current_words(&self.players[self.current_player])
    }

    /// # Returns
    ///
    /// The [current words](Game::current_words) missing from the injected word list, or
    /// nothing when no word list was injected. Informational only.
    #[instrument(level = "debug", skip(self))]
    pub fn unknown_words(&self) -> Vec<Word> {
        let Some(word_list) = &self.word_list else {
            return Vec::new();
        };
        self.current_words()
            .into_iter()
            .filter(|word| !word_list.contains(&word.text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, SIDE_SQUARES_LIMIT};
    use map_macro::hash_set;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_default() {
        let mut game = Game::new(2, None, None).expect("new should return Ok");

        assert_eq!(0, game.current_player());
        assert_eq!(TOTAL_TILES, game.tiles_len());
        assert_eq!(TOTAL_TILES - 2 * RACK_CAPACITY, game.bag().len());
        for player in 0..2 {
            let rack = game.get_rack(player).expect("player should exist");
            assert_eq!(RACK_CAPACITY, rack.len());
            for (slot, tile) in rack.iter().enumerate() {
                assert_eq!(Location::Rack(slot), tile.location());
            }
        }
        assert!(game.get_rack(2).is_none());
        assert!(game.board().has_cached_moves());
        let center = game.board().center();
        assert_eq!(&LegalMoves::from([center]), game.legal_moves());
        assert!(!game.is_game_over());
        assert!(game.held_tile().is_none());
    }

    #[test]
    fn new_standard_special_squares() {
        let game = Game::new(2, Some(STANDARD_SIDE_SQUARES), None).expect("new should return Ok");
        assert_eq!(&SpecialSquares::standard(), game.board().special_squares());

        let game = Game::new(2, Some(9), None).expect("new should return Ok");
        assert_eq!(&SpecialSquares::default(), game.board().special_squares());
        assert_eq!(81, game.board().cells_len());
    }

    #[test]
    fn new_with_rng_is_deterministic() {
        let first = Game::new_with_rng(2, None, None, &mut StdRng::seed_from_u64(3))
            .expect("new_with_rng should return Ok");
        let second = Game::new_with_rng(2, None, None, &mut StdRng::seed_from_u64(3))
            .expect("new_with_rng should return Ok");

        assert_eq!(first.get_rack(0), second.get_rack(0));
        assert_eq!(first.get_rack(1), second.get_rack(1));
        assert_eq!(first.bag(), second.bag());
    }

    #[test]
    fn empty_players() {
        let errors = Game::new(0, None, None).expect_err("new should return Err");

        assert_eq!(hash_set! { NewError::EmptyPlayers }, errors);
    }

    #[test]
    fn not_enough_tiles() {
        let players_len = TOTAL_TILES / RACK_CAPACITY + 1;

        let errors = Game::new(players_len, None, None).expect_err("new should return Err");

        assert_eq!(
            hash_set! { NewError::NotEnoughTiles {
                requested_tiles: players_len * RACK_CAPACITY,
                tiles_in_bag: TOTAL_TILES,
            }},
            errors
        );
    }

    #[test]
    fn board_too_large() {
        let side_squares = usize::MAX / 2;

        let errors = Game::new(2, Some(side_squares), None).expect_err("new should return Err");

        assert_eq!(
            hash_set! { NewError::BoardTooLarge {
                side_squares,
                side_squares_limit: SIDE_SQUARES_LIMIT,
            }},
            errors
        );
    }

    #[test]
    fn every_error_at_once() {
        let special_squares = SpecialSquares {
            double_words: [1, 1000].into(),
            double_letters: [1].into(),
            ..SpecialSquares::default()
        };

        let errors =
            Game::new(0, Some(0), Some(special_squares)).expect_err("new should return Err");

        assert_eq!(
            hash_set! {
                NewError::EmptyPlayers,
                NewError::EmptyBoard,
                NewError::SpecialSquareOutOfBounds { cell: 1 },
                NewError::SpecialSquareOutOfBounds { cell: 1000 },
                NewError::OverlappingSpecialSquares { cell: 1 },
            },
            errors
        );
    }

    #[test]
    fn unknown_words_without_word_list() {
        let mut game = Game::new(2, None, None).expect("new should return Ok");
        let center = game.board().center();
        game.pick_up_from_rack(0).expect("pick_up_from_rack should return Ok");
        game.place(center).expect("place should return Ok");

        assert_eq!(1, game.current_words().len());
        assert!(game.unknown_words().is_empty());
    }

    #[test]
    fn unknown_words_with_word_list() {
        let mut game = Game::new(2, None, None)
            .expect("new should return Ok")
            .with_word_list(WordList::parse("zzzz\n"));
        let center = game.board().center();
        game.pick_up_from_rack(0).expect("pick_up_from_rack should return Ok");
        game.place(center).expect("place should return Ok");

        let letter = game
            .get_rack(0)
            .and_then(|rack| rack.iter().find_map(|tile| tile.cell().map(|_| tile.letter())))
            .expect("a tile should be placed");
        let unknown = game.unknown_words();

        assert_eq!(1, unknown.len());
        assert_eq!(letter.as_char().to_string(), unknown[0].text);
        assert!(game.word_list().is_some());
    }
}
