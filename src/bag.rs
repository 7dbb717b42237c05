use crate::{Letter, Tile, ALPHABET_LEN, DISTRIBUTION};
use derive_more::{Display, Error};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::trace;

/// Describes an attempt to draw from a [bag](TileBag) with no [tiles](Tile) left.
///
/// Running out of [tiles](Tile) is a legitimate end of supply. A player may keep playing
/// with a partially filled rack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, Error)]
#[display("the tile bag is empty")]
pub struct BagEmpty;

/// Describes the reason why a distribution table could not [fill a bag](TileBag::from_distribution).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display, Error)]
pub enum ConfigIntegrityError {
    /// The table does not hold exactly one `(count, value)` pair per [letter](Letter).
    #[display("distribution has {distribution_len} entries but the alphabet has {alphabet_len}")]
    DistributionLenMismatch {
        /// The number of entries in the table.
        distribution_len: usize,
        /// The number of [letters](Letter).
        alphabet_len: usize,
    },
    /// Some [letter](Letter) with a non-zero count is worth `0` points.
    #[display("letter {letter:?} has no point value")]
    ZeroValue {
        /// The [letter](Letter) without a point value.
        letter: Letter,
    },
}

/// This is a bag of all the [tiles](Tile) that haven't been drawn yet.
///
/// The bag is shuffled once when it is filled. [Drawing](TileBag::draw) takes the last
/// [tile](Tile) of the shuffled order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TileBag {
    tiles: Vec<Tile>,
}

impl TileBag {
    /// Creates every [tile](Tile) of the standard [DISTRIBUTION] in the bag and then
    /// shuffles the bag.
    ///
    /// The standard table is checked against the alphabet at compile time, so this cannot
    /// fail.
    ///
    /// # See Also
    ///
    /// * [TileBag::from_distribution]
    /// * [TOTAL_TILES](crate::TOTAL_TILES)
    pub fn fill_bag<R: Rng + ?Sized>(rng: &mut R) -> TileBag {
        TileBag::from_distribution(DISTRIBUTION, rng).unwrap_or_else(|errors| {
            unreachable!(
                "the standard distribution is checked at compile time but failed with {:?}.",
                errors
            )
        })
    }

    /// Checks that `distribution` has exactly one `(count, value)` pair per [letter](Letter)
    /// and that every [letter](Letter) in the bag is worth points.
    ///
    /// Creates `count` [tiles](Tile) of each [letter](Letter) worth `value` points, and then
    /// shuffles the bag.
    ///
    /// # Arguments
    ///
    /// * `distribution`: `(count, value)` pairs in alphabetical order.
    /// * `rng`: The source of randomness for the shuffle.
    ///
    /// # Errors
    ///
    /// * [ConfigIntegrityError::DistributionLenMismatch] The table length does not match
    /// the [alphabet length](ALPHABET_LEN).
    /// * [ConfigIntegrityError::ZeroValue] Some [letter](Letter) is worth `0` points.
    pub fn from_distribution<R: Rng + ?Sized>(
        distribution: &[(usize, usize)],
        rng: &mut R,
    ) -> Result<TileBag, HashSet<ConfigIntegrityError>> {
        let mut errors = HashSet::with_capacity(2);
        if distribution.len() != ALPHABET_LEN {
            errors.insert(ConfigIntegrityError::DistributionLenMismatch {
                distribution_len: distribution.len(),
                alphabet_len: ALPHABET_LEN,
            });
        }
        for (letter, &(count, value)) in Letter::letters().into_iter().zip(distribution) {
            if count > 0 && value == 0 {
                errors.insert(ConfigIntegrityError::ZeroValue { letter });
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut tiles: Vec<Tile> = Letter::letters()
            .into_iter()
            .zip(distribution)
            .flat_map(|(letter, &(count, value))| vec![Tile::new(letter, value); count])
            .collect();
        tiles.shuffle(rng);
        Ok(TileBag { tiles })
    }

    /// Removes the last [tile](Tile) of the shuffled order.
    ///
    /// # Errors
    ///
    /// * [BagEmpty] There are no [tiles](Tile) left.
    pub fn draw(&mut self) -> Result<Tile, BagEmpty> {
        let tile = self.tiles.pop().ok_or(BagEmpty)?;
        trace!(letter = ?tile.letter(), remaining = self.tiles.len(), "drew tile");
        Ok(tile)
    }

    /// The number of [tiles](Tile) left in the bag.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether every [tile](Tile) has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The [tiles](Tile) left in the bag in shuffled order. The next draw is the last item.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
