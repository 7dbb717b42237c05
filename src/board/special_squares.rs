use crate::{Cell, NewError};
use std::collections::{BTreeSet, HashSet};

/// Describes the bonus printed on a special square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Bonus {
    /// Triples the value of a word.
    TripleWord,
    /// Doubles the value of a word.
    DoubleWord,
    /// Triples the value of a letter.
    TripleLetter,
    /// Doubles the value of a letter.
    DoubleLetter,
}

/// Four disjoint sets of [cells](Cell) carrying a [bonus](Bonus).
///
/// Special squares are only read by a renderer. The [legal moves](crate::Board::get_legal_moves)
/// never consult them.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SpecialSquares {
    /// [Cells](Cell) with a [triple word](Bonus::TripleWord) bonus.
    pub triple_words: BTreeSet<Cell>,
    /// [Cells](Cell) with a [double word](Bonus::DoubleWord) bonus.
    pub double_words: BTreeSet<Cell>,
    /// [Cells](Cell) with a [triple letter](Bonus::TripleLetter) bonus.
    pub triple_letters: BTreeSet<Cell>,
    /// [Cells](Cell) with a [double letter](Bonus::DoubleLetter) bonus.
    pub double_letters: BTreeSet<Cell>,
}

/// The side length the [standard layout](SpecialSquares::standard) is drawn for.
pub const STANDARD_SIDE_SQUARES: usize = 15;

impl SpecialSquares {
    /// The layout of a [STANDARD_SIDE_SQUARES] by [STANDARD_SIDE_SQUARES] board.
    pub fn standard() -> SpecialSquares {
        SpecialSquares {
            triple_words: BTreeSet::from([0, 7, 14, 105, 119, 210, 217, 224]),
            double_words: BTreeSet::from([
                16, 28, 32, 42, 48, 56, 64, 70, 112, 154, 160, 168, 176, 182, 192, 196, 208,
            ]),
            triple_letters: BTreeSet::from([20, 24, 76, 80, 84, 88, 136, 140, 144, 148, 200, 204]),
            double_letters: BTreeSet::from([
                36, 38, 45, 52, 59, 92, 96, 98, 102, 108, 116, 122, 126, 128, 132, 165, 172, 179,
                186, 188, 213, 221,
            ]),
        }
    }

    /// # Returns
    ///
    /// The [bonus](Bonus) on `cell`, or [None] for a plain square.
    pub fn bonus(&self, cell: Cell) -> Option<Bonus> {
        [
            (&self.triple_words, Bonus::TripleWord),
            (&self.double_words, Bonus::DoubleWord),
            (&self.triple_letters, Bonus::TripleLetter),
            (&self.double_letters, Bonus::DoubleLetter),
        ]
        .into_iter()
        .find(|(cells, _)| cells.contains(&cell))
        .map(|(_, bonus)| bonus)
    }

    /// Checks that every special square lies on a board of `side_squares` by `side_squares`
    /// cells and that no square carries more than one [bonus](Bonus).
    ///
    /// # Errors
    ///
    /// * [NewError::SpecialSquareOutOfBounds] Some special square is not on the board.
    /// * [NewError::OverlappingSpecialSquares] Some square carries more than one bonus.
    pub(crate) fn check(&self, side_squares: usize) -> Result<(), HashSet<NewError>> {
        let mut errors = HashSet::new();
        let mut seen = BTreeSet::new();
        let cells = [
            &self.triple_words,
            &self.double_words,
            &self.triple_letters,
            &self.double_letters,
        ]
        .into_iter()
        .flatten()
        .copied();

        let cells_len = side_squares.saturating_mul(side_squares);
        for cell in cells {
            if cell >= cells_len {
                errors.insert(NewError::SpecialSquareOutOfBounds { cell });
            }
            if !seen.insert(cell) {
                errors.insert(NewError::OverlappingSpecialSquares { cell });
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }
}
