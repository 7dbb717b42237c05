use crate::{distribution_len, Letter, DISTRIBUTION};
use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of [letter](Letter) variants. `26` letters.
pub const ALPHABET_LEN: usize = 26;
const _: () = assert!(DISTRIBUTION.len() == ALPHABET_LEN);
const _: () = assert!(Letter::A as usize == 0 && Letter::Z as usize == ALPHABET_LEN - 1);
/// The number of [tiles](crate::Tile) in a game built from the standard [DISTRIBUTION].
/// `98` tiles.
///
/// The sum of the [tiles](crate::Tile) in the bag, in every rack and on the board
/// is always `TOTAL_TILES`.
///
/// # See Also
///
/// * [TileBag::fill_bag](crate::TileBag::fill_bag)
/// * [Game::tiles_len](crate::Game::tiles_len)
pub const TOTAL_TILES: usize = 98;
const _: () = assert!(distribution_len(DISTRIBUTION) == TOTAL_TILES);
/// The default number of cells on one side of the board. If the environment variable named
/// `SIDE_SQUARES` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `15`.
///
/// # See Also
///
/// * [Board::new](crate::Board::new)
/// * [Game::new](crate::Game::new)
pub const SIDE_SQUARES: usize = option::unwrap_or!(
    option::and_then!(option_env!("SIDE_SQUARES"), |str| result::ok!(
        parse_usize(str)
    )),
    15
);
const _: () = assert!(SIDE_SQUARES > 0);
const _: () = assert!(SIDE_SQUARES <= SIDE_SQUARES_LIMIT);
/// The largest number of cells on one side of a board. If the environment variable named
/// `SIDE_SQUARES_LIMIT` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `255`.
///
/// # Requirements
///
/// * When ([usize::MAX] / `SIDE_SQUARES_LIMIT` >= `SIDE_SQUARES_LIMIT`) is true so that the
/// number of cells on the largest board does not overflow.
///
/// # See Also
///
/// * [Board::new](crate::Board::new)
/// * [NewError::BoardTooLarge](crate::NewError::BoardTooLarge)
pub const SIDE_SQUARES_LIMIT: usize = option::unwrap_or!(
    option::and_then!(option_env!("SIDE_SQUARES_LIMIT"), |str| result::ok!(
        parse_usize(str)
    )),
    255
);
const _: () = assert!(SIDE_SQUARES_LIMIT > 0);
const _: () = assert!(usize::MAX / SIDE_SQUARES_LIMIT >= SIDE_SQUARES_LIMIT);
/// The maximum number of [tiles](crate::Tile) in a rack. If the environment variable named
/// `RACK_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `7`.
///
/// Racks are stored on the stack since they never hold more than `RACK_CAPACITY`
/// [tiles](crate::Tile).
///
/// # See Also
///
/// * [Rack](crate::Rack)
/// * [Player::refill_rack](crate::Player::refill_rack)
pub const RACK_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("RACK_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    7
);
const _: () = assert!(RACK_CAPACITY > 0);
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. When there are more than
/// `PLAYER_CAPACITY` players, player data will be heap allocated. If the environment variable
/// named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `2`.
///
/// # See Also
///
/// * [Game](crate::Game)
/// * [GameView](crate::GameView)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    2
);
