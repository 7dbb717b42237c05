use crate::ALPHABET_LEN;
use num_derive::FromPrimitive;

/// The standard `(count, value)` pair of every [letter](Letter) in alphabetical order.
///
/// `count` is the number of [tiles](crate::Tile) with that [letter](Letter) in a full bag,
/// and `value` is the fixed number of points each of those [tiles](crate::Tile) is worth.
///
/// # See Also
///
/// * [TileBag::fill_bag](crate::TileBag::fill_bag)
/// * [TOTAL_TILES](crate::TOTAL_TILES)
pub const DISTRIBUTION: &[(usize, usize)] = &[
    (9, 1),
    (2, 3),
    (2, 3),
    (4, 2),
    (12, 1),
    (2, 4),
    (3, 2),
    (2, 4),
    (9, 1),
    (1, 8),
    (1, 5),
    (4, 1),
    (2, 3),
    (6, 1),
    (8, 1),
    (2, 3),
    (1, 10),
    (6, 1),
    (4, 1),
    (6, 1),
    (4, 1),
    (2, 4),
    (2, 4),
    (1, 8),
    (2, 4),
    (1, 10),
];

/// Sums the counts of a `(count, value)` distribution table.
///
/// # Returns
///
/// The number of [tiles](crate::Tile) the table creates.
pub const fn distribution_len(distribution: &[(usize, usize)]) -> usize {
    let mut len = 0;
    let mut index = 0;
    while index < distribution.len() {
        len += distribution[index].0;
        index += 1;
    }
    len
}

/// Describes the letter on a [tile](crate::Tile).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
#[allow(missing_docs)]
pub enum Letter {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
    I = 8,
    J = 9,
    K = 10,
    L = 11,
    M = 12,
    N = 13,
    O = 14,
    P = 15,
    Q = 16,
    R = 17,
    S = 18,
    T = 19,
    U = 20,
    V = 21,
    W = 22,
    X = 23,
    Y = 24,
    Z = 25,
}

impl Letter {
    /// # Returns
    ///
    /// An array of all [`Letter`] variants in alphabetical order.
    #[inline]
    pub fn letters() -> [Letter; ALPHABET_LEN] {
        [
            Letter::A,
            Letter::B,
            Letter::C,
            Letter::D,
            Letter::E,
            Letter::F,
            Letter::G,
            Letter::H,
            Letter::I,
            Letter::J,
            Letter::K,
            Letter::L,
            Letter::M,
            Letter::N,
            Letter::O,
            Letter::P,
            Letter::Q,
            Letter::R,
            Letter::S,
            Letter::T,
            Letter::U,
            Letter::V,
            Letter::W,
            Letter::X,
            Letter::Y,
            Letter::Z,
        ]
    }

    /// The number of [tiles](crate::Tile) with this letter in the standard [DISTRIBUTION].
    #[inline]
    pub fn count(self) -> usize {
        DISTRIBUTION[self as usize].0
    }

    /// The points of a [tile](crate::Tile) with this letter in the standard [DISTRIBUTION].
    #[inline]
    pub fn value(self) -> usize {
        DISTRIBUTION[self as usize].1
    }

    /// The lower case character of this letter.
    #[inline]
    pub fn as_char(self) -> char {
        char::from(b'a' + self as u8)
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    /// Accepts both upper and lower case ASCII letters. Any other character is returned
    /// as the error.
    fn try_from(character: char) -> Result<Self, Self::Error> {
        if !character.is_ascii_alphabetic() {
            return Err(character);
        }
        let index = (character.to_ascii_lowercase() as u8 - b'a') as usize;
        num::FromPrimitive::from_usize(index).ok_or(character)
    }
}
