//! Concrete structs to represent and protect the state of a two player word tile game with
//! methods to move [tiles](Tile) and advance the game one turn at a time.
//!
//! ## Summary
//!
//! Players take turns building words on a square [board](Board) out of lettered [tiles](Tile)
//! drawn from a shuffled [bag](TileBag). During a turn, the current player picks up
//! [tiles](Tile) from their rack and places them on [legal moves](Game::legal_moves), then
//! [commits the turn](Game::commit_turn). Committing moves the placed [tiles](Tile) onto the
//! [board](Board), refills the rack, and passes the turn to the next player.
//! The game ends when the [bag](TileBag) and every rack are empty.
//!
//! ## Where is every tile?
//!
//! Each [tile](Tile) has exactly one [location](Location):
//!
//! * [In the bag](Location::InBag): Not drawn yet.
//! * [In a rack slot](Location::Rack): Owned by a [player](Player).
//! * [Held](Location::Held): Picked up by the current player, remembering the slot to return to.
//! * [On a cell](Location::Board): Either placed this turn and still owned by the current
//! [player](Player), or committed and owned by the [board](Board).
//!
//! The number of [tiles](Tile) in the bag, in every rack and on the board is always
//! [TOTAL_TILES].
//!
//! ## How is the game created?
//!
//! [Game::new] and [Game::new_with_rng] check the number of players and the
//! [board](Board) dimensions, fill and shuffle the [bag](TileBag), and fill every rack up
//! to [RACK_CAPACITY] [tiles](Tile).
//!
//! ## How is a turn played?
//!
//! * [Pick up](Game::pick_up_from_rack) a [tile](Tile) from the rack, or
//! [pick up](Game::pick_up_from_board) a [tile](Tile) placed earlier this turn.
//! * [Place](Game::place) it on a [legal move](Game::legal_moves), [cancel](Game::cancel)
//! it back into its slot, or [release](Game::release) it over any [cell](Cell) to do
//! whichever applies.
//! * [Commit](Game::commit_turn) the placed [tiles](Tile). Committing with nothing placed
//! passes the turn.
//!
//! ## What moves are legal?
//!
//! The opening move is the [center](Board::center) of the board. Afterwards a [tile](Tile)
//! must touch the committed [tiles](Tile), and further [tiles](Tile) of the same turn must
//! extend the line through the first placed [tile](Tile). See [Board::get_legal_moves].
//!
//! Words are [reported](Game::current_words) and may be checked against an injected
//! [word list](WordList), but words never change which moves are legal. Scores are kept
//! per [player](Player) and are not computed by the game.
//!
//! ## How is the game viewed?
//!
//! [Game::game_view] shares the information visible to every player and
//! [Game::cells] enumerates every [cell](Cell) with its [bonus](Bonus) and occupant.
//! [Game::get_rack] shares the rack of an individual player.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds methods to get mutable references to private
//! properties, constructors for common boards, and helpers to play random turns.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    missing_docs,
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use board::*;
pub use cell::*;
pub use consts::*;
pub use game::*;
pub use letter::*;
pub use player::*;
#[cfg(test)]
pub use random::*;
pub use tile::*;
pub use types::*;
pub use word_list::*;

mod bag;
mod board;
mod cell;
mod consts;
mod game;
mod letter;
mod player;
#[cfg(test)]
mod random;
mod tile;
mod types;
mod word_list;
