// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::OptionIndex;

/// Which option the pointer is over. Presentation state only, it never feeds back into
/// the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoverIndex {
    #[default]
    None,
    First,
    Second,
}

impl HoverIndex {
    /// `-1` when nothing is hovered, otherwise the option index.
    #[must_use]
    pub fn as_i8(self) -> i8 {
        match self {
            HoverIndex::None => -1,
            HoverIndex::First => 0,
            HoverIndex::Second => 1,
        }
    }

    #[must_use]
    pub fn is_hovered(self, index: OptionIndex) -> bool { self == HoverIndex::from(index) }
}

impl From<OptionIndex> for HoverIndex {
    fn from(index: OptionIndex) -> Self {
        match index {
            OptionIndex::First => HoverIndex::First,
            OptionIndex::Second => HoverIndex::Second,
        }
    }
}

/// Focus and hover state of one mounted slider switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusState {
    /// Keyboard (tab) focus, drives the focus ring and outside click dismissal.
    pub has_tab_focus: bool,
    pub hover_index: HoverIndex,
}
