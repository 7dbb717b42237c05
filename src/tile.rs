use crate::{Cell, Letter};

/// Describes where a [tile](Tile) currently is. A [tile](Tile) is in exactly one location.
///
/// # See Also
///
/// * [Tile::location]
/// * [Player](crate::Player)
/// * [Board](crate::Board)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Location {
    /// Not yet drawn from the [bag](crate::TileBag).
    InBag,
    /// In a player's rack at the given slot.
    Rack(usize),
    /// Picked up by the current player and not yet released. `slot` is the rack slot
    /// the [tile](Tile) returns to when the placement is cancelled.
    Held {
        /// The rack slot reserved for the [tile](Tile).
        slot: usize,
    },
    /// On the board at the given cell. Either committed or placed during the current turn.
    Board(Cell),
}

/// Describes a tile with a [letter](Letter), a point value and a [location](Location).
///
/// The letter and value never change after the tile is created. The location only changes
/// through [Tile::move_to_rack], [Tile::hold] and [Tile::move_to_board].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Tile {
    letter: Letter,
    value: usize,
    location: Location,
}

impl Tile {
    /// Creates a tile in the [bag](Location::InBag).
    pub fn new(letter: Letter, value: usize) -> Tile {
        Tile {
            letter,
            value,
            location: Location::InBag,
        }
    }

    /// The [letter](Letter) on the tile.
    #[inline]
    pub fn letter(&self) -> Letter {
        self.letter
    }

    /// The number of points the tile is worth.
    #[inline]
    pub fn value(&self) -> usize {
        self.value
    }

    /// Where the tile currently is.
    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// # Returns
    ///
    /// The cell of the tile if it is [on the board](Location::Board).
    #[inline]
    pub fn cell(&self) -> Option<Cell> {
        match self.location {
            Location::Board(cell) => Some(cell),
            _ => None,
        }
    }

    /// # Returns
    ///
    /// The rack slot owned by the tile, either the slot it [sits in](Location::Rack) or the slot
    /// it [returns to](Location::Held) when cancelled.
    #[inline]
    pub fn rack_slot(&self) -> Option<usize> {
        match self.location {
            Location::Rack(slot) | Location::Held { slot } => Some(slot),
            _ => None,
        }
    }

    /// Moves the tile into the rack at `slot`.
    pub fn move_to_rack(&mut self, slot: usize) {
        self.location = Location::Rack(slot);
    }

    /// Picks the tile up, reserving `slot` to return to.
    pub fn hold(&mut self, slot: usize) {
        self.location = Location::Held { slot };
    }

    /// Moves the tile onto the board at `cell`. Legality is checked by the
    /// [board](crate::Board), not the tile.
    pub fn move_to_board(&mut self, cell: Cell) {
        self.location = Location::Board(cell);
    }

    /// Renumbers the reserved rack slot while keeping the tile
    /// [in the rack](Location::Rack) or [held](Location::Held).
    pub(crate) fn reassign_rack_slot(&mut self, new_slot: usize) {
        match &mut self.location {
            Location::Rack(slot) | Location::Held { slot } => *slot = new_slot,
            Location::InBag | Location::Board(_) => {}
        }
    }
}
