use crate::{Player, Tile, PLAYER_CAPACITY, RACK_CAPACITY};
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// A flat, row major index of a square on the board in the range `0..side * side`.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [step](crate::step)
pub type Cell = usize;
/// An ordered set of [cells](Cell) where the current player may place a [tile](Tile).
///
/// # See Also
///
/// * [Board::get_legal_moves](crate::Board::get_legal_moves)
/// * [Game::place](crate::Game::place)
pub type LegalMoves = BTreeSet<Cell>;
/// A vector of [tiles](Tile) for one player, including the [tiles](Tile) that player
/// placed on the board this turn.
///
/// # See Also
///
/// * [Tile]
/// * [RACK_CAPACITY]
/// * [Player](crate::Player)
pub type Rack = SmallVec<[Tile; RACK_CAPACITY]>;
/// A vector of [players](Player).
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [Game](crate::Game)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// A vector of points for each player.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameView](crate::GameView)
pub type Scores = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of rack lengths.
///
/// # See Also
///
/// * [Rack]
/// * [PLAYER_CAPACITY]
/// * [GameView](crate::GameView)
pub type RackLens = SmallVec<[usize; PLAYER_CAPACITY]>;
