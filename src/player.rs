use crate::{BagEmpty, Cell, Location, Rack, Tile, TileBag, RACK_CAPACITY};
use itertools::Itertools;
use tracing::debug;

/// Owns one player's rack and score.
///
/// [Tiles](Tile) placed on the board during the current turn stay in the rack with a
/// [board location](Location::Board) until the turn is committed.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Player {
    /// A vector of [tiles](Tile) held by the player.
    rack: Rack,
    /// The points earned by the player.
    score: usize,
}

impl Player {
    /// Creates a player with an empty rack and no points.
    pub fn new() -> Player {
        Player {
            rack: Rack::new(),
            score: 0,
        }
    }

    /// The [tiles](Tile) owned by the player, including [tiles](Tile) placed this turn.
    #[inline]
    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    /// The points earned by the player.
    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    /// # Returns
    ///
    /// The [cells](Cell) of the [tiles](Tile) placed this turn in rack order.
    pub fn placed_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rack.iter().filter_map(Tile::cell)
    }

    /// # Returns
    ///
    /// Whether any [tile](Tile) of the player is placed on `cell` this turn.
    pub fn has_placed_on(&self, cell: Cell) -> bool {
        self.placed_cells().any(|placed| placed == cell)
    }

    /// # Returns
    ///
    /// The [tile](Tile) sitting in rack `slot`, or [None] when the slot is empty.
    pub fn tile_in_slot(&self, slot: usize) -> Option<&Tile> {
        self.rack
            .iter()
            .find(|tile| tile.location() == Location::Rack(slot))
    }

    /// # Returns
    ///
    /// The [held](Location::Held) [tile](Tile), if any.
    pub fn held_tile(&self) -> Option<&Tile> {
        self.rack
            .iter()
            .find(|tile| matches!(tile.location(), Location::Held { .. }))
    }

    /// Whether the player owns no [tiles](Tile) at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rack.is_empty()
    }

    /// Compacts the rack slots, then draws [tiles](Tile) from `bag` until the rack holds
    /// [RACK_CAPACITY] [tiles](Tile).
    ///
    /// Compaction renumbers the [tiles](Tile) owning a slot to `0..k` in the order of
    /// their current slots. Drawn [tiles](Tile) take the next free slots in ascending order.
    /// Calling this twice in a row leaves the slots unchanged the second time.
    ///
    /// # Arguments
    ///
    /// * `bag`: The [bag](TileBag) to draw from.
    ///
    /// # Errors
    ///
    /// * [BagEmpty] The bag ran out before the rack was full. Every [tile](Tile) drawn
    /// before running out stays in the rack.
    pub fn refill_rack(&mut self, bag: &mut TileBag) -> Result<(), BagEmpty> {
        let slotted = self
            .rack
            .iter()
            .enumerate()
            .filter_map(|(index, tile)| tile.rack_slot().map(|slot| (slot, index)))
            .sorted()
            .map(|(_, index)| index)
            .collect_vec();
        for (new_slot, index) in slotted.into_iter().enumerate() {
            self.rack[index].reassign_rack_slot(new_slot);
        }

        let before = self.rack.len();
        while self.rack.len() < RACK_CAPACITY {
            let slot = self.free_slot().unwrap_or_else(|| {
                unreachable!("a rack with fewer than RACK_CAPACITY tiles has a free slot.")
            });
            let mut tile = match bag.draw() {
                Ok(tile) => tile,
                Err(error) => {
                    debug!(drawn = self.rack.len() - before, "bag ran out during refill");
                    return Err(error);
                }
            };
            tile.move_to_rack(slot);
            self.rack.push(tile);
        }
        debug!(drawn = self.rack.len() - before, "refilled rack");

        Ok(())
    }

    /// # Returns
    ///
    /// The lowest rack slot not owned by any [tile](Tile), or [None] when all
    /// [RACK_CAPACITY] slots are taken.
    pub(crate) fn free_slot(&self) -> Option<usize> {
        (0..RACK_CAPACITY).find(|&slot| self.rack.iter().all(|tile| tile.rack_slot() != Some(slot)))
    }

    /// A mutable reference to the first [tile](Tile) matching `location`.
    pub(crate) fn tile_at_mut(&mut self, location: Location) -> Option<&mut Tile> {
        self.rack
            .iter_mut()
            .find(|tile| tile.location() == location)
    }

    /// A mutable reference to the [held](Location::Held) [tile](Tile), if any.
    pub(crate) fn held_tile_mut(&mut self) -> Option<&mut Tile> {
        self.rack
            .iter_mut()
            .find(|tile| matches!(tile.location(), Location::Held { .. }))
    }

    /// Removes every [tile](Tile) placed on the board this turn from the rack.
    ///
    /// The indexes are collected first and then removed from the back so that no
    /// removal shifts an index which has yet to be removed.
    ///
    /// # Returns
    ///
    /// The removed [tiles](Tile) in rack order.
    pub(crate) fn take_placed(&mut self) -> Vec<Tile> {
        let placed = self
            .rack
            .iter()
            .positions(|tile| tile.cell().is_some())
            .collect_vec();
        let mut tiles = placed
            .into_iter()
            .rev()
            .map(|index| self.rack.remove(index))
            .collect_vec();
        tiles.reverse();
        tiles
    }
}

#[cfg(test)]
impl Player {
    /// A mutable reference to `self.rack`.
    pub(crate) fn mut_rack(&mut self) -> &mut Rack {
        &mut self.rack
    }

    /// A mutable reference to `self.score`.
    pub(crate) fn mut_score(&mut self) -> &mut usize {
        &mut self.score
    }
}
