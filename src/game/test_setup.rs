use crate::{Game, Players};

impl Game {
    /// A mutable reference to `self.players`.
    pub(crate) fn mut_players(&mut self) -> &mut Players {
        &mut self.players
    }

    /// Draws from the bag and throws the [tiles](crate::Tile) away until `len` are left.
    ///
    /// # Returns
    ///
    /// The number of [tiles](crate::Tile) thrown away.
    pub(crate) fn truncate_bag(&mut self, len: usize) -> usize {
        let mut removed = 0;
        while self.bag.len() > len && self.bag.draw().is_ok() {
            removed += 1;
        }
        removed
    }

    /// Throws away every [tile](crate::Tile) in the bag.
    pub(crate) fn empty_bag(&mut self) -> usize {
        self.truncate_bag(0)
    }

    /// Picks up the [tile](crate::Tile) in each `(slot, cell)` pair and places it on the
    /// [cell](crate::Cell).
    pub(crate) fn place_all(&mut self, plays: impl IntoIterator<Item = (usize, usize)>) {
        for (slot, cell) in plays {
            self.pick_up_from_rack(slot)
                .unwrap_or_else(|error| panic!("slot {slot} should be picked up: {error}"));
            self.place(cell)
                .unwrap_or_else(|error| panic!("cell {cell} should be legal: {error}"));
        }
    }
}
