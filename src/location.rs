//! Grid coordinates.
//!
//! A [`Location`] names a single maze cell by `(row, column)`, rows growing
//! downwards and columns growing to the right. Locations are moved around
//! with [`Offset`]s.

use derive_more::Display;

pub type Index = i32;

/// A directional delta between two [`Location`]s.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("[{row_offset},{column_offset}]")]
pub struct Offset {
    pub row_offset: Index,
    pub column_offset: Index,
}

impl Offset {
    pub const NORTH: Offset = Offset::new(-1, 0);
    pub const EAST: Offset = Offset::new(0, 1);
    pub const SOUTH: Offset = Offset::new(1, 0);
    pub const WEST: Offset = Offset::new(0, -1);

    pub const fn new(row_offset: Index, column_offset: Index) -> Self {
        Self {
            row_offset,
            column_offset,
        }
    }

    /// Stretches both components by `factor`.
    #[inline(always)]
    #[must_use]
    pub const fn scale(self, factor: Index) -> Self {
        Self::new(self.row_offset * factor, self.column_offset * factor)
    }
}

impl std::ops::Mul<Index> for Offset {
    type Output = Offset;

    #[inline(always)]
    fn mul(self, factor: Index) -> Offset {
        self.scale(factor)
    }
}

/// A maze cell.
///
/// Ordering is row-major, so ordered containers iterate locations the way
/// the maze is read.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("({row}, {column})")]
pub struct Location {
    row: Index,
    column: Index,
}

impl Location {
    pub const fn new(row: Index, column: Index) -> Self {
        Self { row, column }
    }

    #[inline(always)]
    pub const fn row(&self) -> Index {
        self.row
    }
    #[inline(always)]
    pub const fn column(&self) -> Index {
        self.column
    }

    /// The location `offset` away from this one.
    ///
    /// Both coordinates must stay within [`Index`]; see
    /// [`Location::checked_translate`] for locations near its bounds.
    #[inline(always)]
    #[must_use]
    pub const fn translate(self, offset: Offset) -> Self {
        Self::new(self.row + offset.row_offset, self.column + offset.column_offset)
    }

    /// The location `offset` away from this one, if it is representable.
    #[inline(always)]
    pub const fn checked_translate(self, offset: Offset) -> Option<Self> {
        let Some(row) = self.row.checked_add(offset.row_offset) else {
            return None;
        };
        let Some(column) = self.column.checked_add(offset.column_offset) else {
            return None;
        };
        Some(Self::new(row, column))
    }

    /// Moves this location by `offset`.
    ///
    /// Returns `self` so translations can be chained.
    #[inline(always)]
    pub fn translate_in_place(&mut self, offset: Offset) -> &mut Self {
        *self = self.translate(offset);
        self
    }
}

impl std::ops::Add<Offset> for Location {
    type Output = Location;

    #[inline(always)]
    fn add(self, offset: Offset) -> Location {
        self.translate(offset)
    }
}

impl std::ops::AddAssign<Offset> for Location {
    #[inline(always)]
    fn add_assign(&mut self, offset: Offset) {
        self.translate_in_place(offset);
    }
}
