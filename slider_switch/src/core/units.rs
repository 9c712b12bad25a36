// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal cell geometry used to decide whether a pointer event happened inside the
//! slider switch, and which of its two option "buttons" it landed on.
//!
//! ```text
//!     0   4    9    1    2
//!                   4    0
//!    ┌────┴────┴────┴────┴── col
//!  0 ┤     ╭──────┬──────╮
//!  1 ┤     │  On  │ Off  │  origin: [col 5, row 0]
//!  2 ┤     ╰──────┴──────╯  size:   [width 15, height 3]
//!    │      first  second
//!   row
//! ```
//!
//! # Examples
//!
//! ```
//! use r3bl_slider_switch::{Bounds, col, height, row, width};
//!
//! let bounds = Bounds::new(col(5) + row(0), width(15) + height(3));
//! assert!(bounds.contains(col(5) + row(2)));
//! assert!(!bounds.contains(col(20) + row(0)));
//! ```

use std::ops::Add;

/// 0-based column index of a terminal cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColIndex(pub u16);

/// 0-based row index of a terminal cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowIndex(pub u16);

/// Number of columns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColWidth(pub u16);

/// Number of rows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowHeight(pub u16);

#[must_use]
pub fn col(it: u16) -> ColIndex { ColIndex(it) }

#[must_use]
pub fn row(it: u16) -> RowIndex { RowIndex(it) }

#[must_use]
pub fn width(it: u16) -> ColWidth { ColWidth(it) }

#[must_use]
pub fn height(it: u16) -> RowHeight { RowHeight(it) }

/// Position of a terminal cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col_index: ColIndex,
    pub row_index: RowIndex,
}

/// Size of a rectangular region of terminal cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub col_width: ColWidth,
    pub row_height: RowHeight,
}

impl Add<RowIndex> for ColIndex {
    type Output = Pos;

    fn add(self, rhs: RowIndex) -> Self::Output {
        Pos {
            col_index: self,
            row_index: rhs,
        }
    }
}

impl Add<ColIndex> for RowIndex {
    type Output = Pos;

    fn add(self, rhs: ColIndex) -> Self::Output { rhs + self }
}

impl Add<RowHeight> for ColWidth {
    type Output = Size;

    fn add(self, rhs: RowHeight) -> Self::Output {
        Size {
            col_width: self,
            row_height: rhs,
        }
    }
}

impl Add<ColWidth> for RowHeight {
    type Output = Size;

    fn add(self, rhs: ColWidth) -> Self::Output { rhs + self }
}

/// The rectangular boundary of a control on screen. This plays the role that DOM node
/// containment plays in a browser: an event "inside" the control is one whose position
/// is contained in these bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub origin: Pos,
    pub size: Size,
}

impl Bounds {
    #[must_use]
    pub fn new(origin: Pos, size: Size) -> Self { Self { origin, size } }

    /// Half-open containment check: `origin <= pos < origin + size` on both axes.
    /// Empty bounds contain nothing.
    #[must_use]
    pub fn contains(&self, pos: Pos) -> bool {
        let col_start = u32::from(self.origin.col_index.0);
        let row_start = u32::from(self.origin.row_index.0);
        let col_end = col_start + u32::from(self.size.col_width.0);
        let row_end = row_start + u32::from(self.size.row_height.0);
        let col = u32::from(pos.col_index.0);
        let row = u32::from(pos.row_index.0);
        (col_start..col_end).contains(&col) && (row_start..row_end).contains(&row)
    }

    /// Splits the bounds into a left and a right half. When the width is odd, the extra
    /// column goes to the right half.
    #[must_use]
    pub fn split_halves(&self) -> (Bounds, Bounds) {
        let left_width = self.size.col_width.0 / 2;
        let right_width = self.size.col_width.0 - left_width;
        let left = Bounds::new(self.origin, width(left_width) + self.size.row_height);
        let right = Bounds::new(
            col(self.origin.col_index.0.saturating_add(left_width)) + self.origin.row_index,
            width(right_width) + self.size.row_height,
        );
        (left, right)
    }
}
