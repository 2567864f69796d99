//! Sudoku houses: rows, columns, and boxes.

use crate::Position;

/// A Sudoku house (row, column, or 3×3 box).
///
/// The Sudoku rules are uniform over houses: a grid is solved when every
/// house contains each digit exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its row coordinate (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column coordinate (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position_at(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row { row } => Position::new(row, i),
            Self::Column { col } => Position::new(i, col),
            Self::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the nine positions contained in this house.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut cells = [Position::new(0, 0); 9];
        for (i, cell) in cells.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            *cell = self.position_at(i);
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_houses_cover_the_board_three_times() {
        let mut cover = [0u8; 81];
        for house in House::ALL {
            for pos in house.positions() {
                cover[pos.index()] += 1;
            }
        }
        // Every cell lies in exactly one row, one column, and one box.
        assert!(cover.iter().all(|&count| count == 3));
    }

    #[test]
    fn test_house_positions() {
        let row = House::Row { row: 2 };
        assert_eq!(row.positions()[0], Position::new(2, 0));
        assert_eq!(row.positions()[8], Position::new(2, 8));

        let col = House::Column { col: 5 };
        assert_eq!(col.positions()[0], Position::new(0, 5));
        assert_eq!(col.positions()[8], Position::new(8, 5));

        let boxed = House::Box { index: 4 };
        assert_eq!(boxed.positions()[0], Position::new(3, 3));
        assert_eq!(boxed.positions()[8], Position::new(5, 5));
    }
}
