// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Selection state machine
//!
//! ```text
//!               click_first / set_external(first value)
//!         ╭────────────────────────────────────────────────╮
//!         │                                                ▼
//!    ╭─────────╮  activate_by_key   ╭─────────╮  activate   ╭──────────╮
//!    │  Unset  │ ─────────────────▶ │  First  │ ◀─────────▶ │  Second  │
//!    ╰─────────╯                    ╰─────────╯   by_key    ╰──────────╯
//!         ▲                                                      │
//!         ╰──────────── set_external(unmatched value) ───────────╯
//! ```
//!
//! All transitions are total and pure: they take the current state by value and return
//! the next one. Being an enum, "both options selected at once" can't be represented.

use strum_macros::Display;

use super::{OptionIndex, OptionValue, SwitchOptions};

/// Which of the two options is selected, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum SelectionState {
    #[default]
    Unset,
    First,
    Second,
}

impl SelectionState {
    /// Initial state from the `selected` hints. When both options are flagged, the first
    /// one wins.
    #[must_use]
    pub fn from_options(options: &SwitchOptions) -> Self {
        if options.first().selected {
            SelectionState::First
        } else if options.second().selected {
            SelectionState::Second
        } else {
            SelectionState::Unset
        }
    }

    #[must_use]
    pub fn from_index(maybe_index: Option<OptionIndex>) -> Self {
        match maybe_index {
            Some(OptionIndex::First) => SelectionState::First,
            Some(OptionIndex::Second) => SelectionState::Second,
            None => SelectionState::Unset,
        }
    }

    #[must_use]
    pub fn click_first(self) -> Self { SelectionState::First }

    #[must_use]
    pub fn click_second(self) -> Self { SelectionState::Second }

    #[must_use]
    pub fn click(self, index: OptionIndex) -> Self {
        match index {
            OptionIndex::First => self.click_first(),
            OptionIndex::Second => self.click_second(),
        }
    }

    /// `Unset` goes to `First`, otherwise the selection swaps.
    #[must_use]
    pub fn activate_by_key(self) -> Self {
        match self {
            SelectionState::Unset | SelectionState::Second => SelectionState::First,
            SelectionState::First => SelectionState::Second,
        }
    }

    /// Jump straight to whichever option has `value`, or `Unset` if neither does. The
    /// current state is ignored.
    #[must_use]
    pub fn set_external(self, options: &SwitchOptions, value: &OptionValue) -> Self {
        Self::from_index(options.position_of(value))
    }

    #[must_use]
    pub fn is_first_selected(self) -> bool { matches!(self, SelectionState::First) }

    #[must_use]
    pub fn is_second_selected(self) -> bool { matches!(self, SelectionState::Second) }

    #[must_use]
    pub fn is_unset(self) -> bool { matches!(self, SelectionState::Unset) }

    #[must_use]
    pub fn selected_index(self) -> Option<OptionIndex> {
        match self {
            SelectionState::Unset => None,
            SelectionState::First => Some(OptionIndex::First),
            SelectionState::Second => Some(OptionIndex::Second),
        }
    }

    /// The single "current value" of the control.
    #[must_use]
    pub fn selected_value(self, options: &SwitchOptions) -> Option<&OptionValue> {
        self.selected_index().map(|index| &options.get(index).value)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{SwitchOption, assert_eq2};

    fn on_off(first_selected: bool, second_selected: bool) -> SwitchOptions {
        SwitchOptions::new(
            SwitchOption::new("On", 1).with_selected(first_selected),
            SwitchOption::new("Off", 0).with_selected(second_selected),
        )
    }

    #[test_case(false, false => SelectionState::Unset)]
    #[test_case(true, false => SelectionState::First)]
    #[test_case(false, true => SelectionState::Second)]
    #[test_case(true, true => SelectionState::First)]
    fn test_from_options(first: bool, second: bool) -> SelectionState {
        SelectionState::from_options(&on_off(first, second))
    }

    #[test_case(SelectionState::Unset => SelectionState::First)]
    #[test_case(SelectionState::First => SelectionState::Second)]
    #[test_case(SelectionState::Second => SelectionState::First)]
    fn test_activate_by_key(state: SelectionState) -> SelectionState {
        state.activate_by_key()
    }

    #[test]
    fn test_clicks_ignore_prior_state() {
        for state in [
            SelectionState::Unset,
            SelectionState::First,
            SelectionState::Second,
        ] {
            assert_eq2!(state.click_first(), SelectionState::First);
            assert_eq2!(state.click_second(), SelectionState::Second);
            assert_eq2!(state.click(OptionIndex::Second), SelectionState::Second);
        }
    }

    #[test]
    fn test_set_external() {
        let options = on_off(false, false);
        let state = SelectionState::First;
        assert_eq2!(state.set_external(&options, &0.into()), SelectionState::Second);
        assert_eq2!(state.set_external(&options, &1.into()), SelectionState::First);
        assert_eq2!(state.set_external(&options, &42.into()), SelectionState::Unset);
        assert_eq2!(state.set_external(&options, &"1".into()), SelectionState::Unset);
    }

    #[test]
    fn test_selected_value() {
        let options = on_off(false, false);
        assert_eq2!(SelectionState::Unset.selected_value(&options), None);
        assert_eq2!(
            SelectionState::First.selected_value(&options),
            Some(&OptionValue::from(1))
        );
        assert_eq2!(
            SelectionState::Second.selected_value(&options),
            Some(&OptionValue::from(0))
        );
    }

    /// Walk every sequence of up to 6 local transitions and check that the two booleans
    /// the renderer reads are never both true.
    #[test]
    fn test_never_both_selected_for_any_sequence() {
        let options = on_off(false, false);
        let ops: [fn(SelectionState, &SwitchOptions) -> SelectionState; 4] = [
            |it, _| it.click_first(),
            |it, _| it.click_second(),
            |it, _| it.activate_by_key(),
            |it, options| it.set_external(options, &7.into()),
        ];

        let mut frontier = vec![SelectionState::Unset];
        for _ in 0..6 {
            let mut next = vec![];
            for state in &frontier {
                for op in &ops {
                    let new_state = op(*state, &options);
                    assert!(!(new_state.is_first_selected() && new_state.is_second_selected()));
                    next.push(new_state);
                }
            }
            frontier = next;
        }
        assert_eq2!(frontier.len(), 4_usize.pow(6));
    }
}
