// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
                           MouseEventKind};
    use test_case::test_case;

    use crate::{Bounds, FocusMode, GlobalPointerEvent, HiddenInput, InMemoryInteractionSurface,
                InteractionSurface, KeyPropagation, OptionIndex, OptionValue, SelectionState,
                SliderSwitch, SliderSwitchProps, SwitchError, SwitchKey, SwitchOption,
                SwitchOptions, assert_eq2, col, height, row, width};

    type Received = Arc<Mutex<Vec<OptionValue>>>;

    fn on_off() -> SwitchOptions {
        SwitchOptions::new(SwitchOption::new("On", 1), SwitchOption::new("Off", 0))
    }

    /// Switch over `[On=1, Off=0]` that records every notification.
    fn recording_switch(props: SliderSwitchProps) -> (SliderSwitch, Received) {
        let received = Received::default();
        let received_clone = received.clone();
        let props = props.with_on_switch(move |value: &OptionValue| {
            received_clone.lock().unwrap().push(value.clone());
        });
        (SliderSwitch::new(props), received)
    }

    /// Columns 10..=19 on row 2. First half is 10..=14, second half 15..=19.
    fn bounds() -> Bounds { Bounds::new(col(10) + row(2), width(10) + height(1)) }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode) -> Event { Event::Key(KeyEvent::new(code, KeyModifiers::NONE)) }

    #[test]
    fn test_click_first_second_first() {
        let (mut switch, received) = recording_switch(SliderSwitchProps::new(on_off()));
        switch.on_click(OptionIndex::First);
        switch.on_click(OptionIndex::Second);
        switch.on_click(OptionIndex::First);

        assert_eq2!(switch.selection_state(), SelectionState::First);
        assert_eq2!(
            *received.lock().unwrap(),
            vec![OptionValue::from(1), OptionValue::from(0), OptionValue::from(1)]
        );
    }

    #[test]
    fn test_enter_cycles_between_options() {
        let (mut switch, received) = recording_switch(SliderSwitchProps::new(on_off()));

        let it = switch.on_key_activate(SwitchKey::Enter);
        assert_eq2!(it.notification, Some(OptionValue::from(1)));
        assert_eq2!(switch.selection_state(), SelectionState::First);

        let it = switch.on_key_activate(SwitchKey::Enter);
        assert_eq2!(it.notification, Some(OptionValue::from(0)));
        assert_eq2!(switch.selection_state(), SelectionState::Second);

        switch.on_key_activate(SwitchKey::Enter);
        assert_eq2!(switch.selection_state(), SelectionState::First);
        assert_eq2!(received.lock().unwrap().len(), 3);
    }

    #[test_case(1 => SelectionState::First)]
    #[test_case(0 => SelectionState::Second)]
    #[test_case(7 => SelectionState::Unset)]
    fn test_active_value_wins_over_local_click(active_value: i64) -> SelectionState {
        let (mut switch, received) =
            recording_switch(SliderSwitchProps::new(on_off()).with_active_value(active_value));
        switch.on_click(OptionIndex::First);
        switch.on_click(OptionIndex::Second);
        // Clicks still notify, the host decides whether to follow.
        assert_eq2!(received.lock().unwrap().len(), 2);
        switch.selection_state()
    }

    #[test]
    fn test_selected_hints_only_read_at_construction() {
        let options = SwitchOptions::new(
            SwitchOption::new("On", 1).with_selected(true),
            SwitchOption::new("Off", 0).with_selected(true),
        );
        let mut switch = SliderSwitch::new(SliderSwitchProps::new(options.clone()));
        assert_eq2!(switch.selection_state(), SelectionState::First);

        switch.on_click(OptionIndex::Second);
        switch.set_props(SliderSwitchProps::new(options));
        assert_eq2!(switch.selection_state(), SelectionState::Second);
    }

    #[test]
    fn test_empty_active_value_is_not_supplied() {
        let mut switch = SliderSwitch::new(SliderSwitchProps::new(on_off()).with_active_value(""));
        switch.on_click(OptionIndex::Second);
        assert_eq2!(switch.selection_state(), SelectionState::Second);

        switch.set_active_value(Some(OptionValue::from(1)));
        assert_eq2!(switch.selection_state(), SelectionState::First);

        // Releasing control keeps the last state.
        switch.set_active_value(None);
        assert_eq2!(switch.selection_state(), SelectionState::First);
    }

    #[test]
    fn test_mount_unmount_releases_listeners_and_never_notifies() {
        let surface = InMemoryInteractionSurface::new_shared();
        let (mut switch, received) = recording_switch(SliderSwitchProps::new(on_off()));

        switch.mount(surface.clone()).unwrap();
        assert!(switch.is_mounted());
        assert_eq2!(surface.listener_count(), 2);

        let report = switch.mount(surface.clone()).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<SwitchError>(),
            Some(&SwitchError::AlreadyMounted)
        );

        assert!(switch.unmount());
        assert!(!switch.unmount());
        assert_eq2!(surface.listener_count(), 0);
        assert!(received.lock().unwrap().is_empty());
    }

    #[test]
    fn test_drop_unmounts() {
        let surface = InMemoryInteractionSurface::new_shared();
        let mut switch = SliderSwitch::new(SliderSwitchProps::new(on_off()));
        switch.mount(surface.clone()).unwrap();
        drop(switch);
        assert_eq2!(surface.listener_count(), 0);
    }

    #[test]
    fn test_outside_release_clears_focus_not_selection() {
        let surface = InMemoryInteractionSurface::new_shared();
        let mut switch =
            SliderSwitch::new(SliderSwitchProps::new(on_off()).with_focus_mode(FocusMode::Explicit));
        switch.set_boundary(Some(bounds()));
        switch.mount(surface.clone()).unwrap();
        switch.on_key_activate(SwitchKey::Spacebar);
        switch.on_focus();
        assert!(switch.view_state().has_tab_focus);

        // Inside.
        surface.dispatch(&GlobalPointerEvent::pointer_release(col(12) + row(2)));
        assert!(switch.view_state().has_tab_focus);

        // Outside.
        surface.dispatch(&GlobalPointerEvent::touch_end(col(30) + row(2)));
        assert!(!switch.view_state().has_tab_focus);
        assert_eq2!(switch.selection_state(), SelectionState::First);
    }

    #[test]
    fn test_hidden_input() {
        let mut switch = SliderSwitch::new(SliderSwitchProps::new(on_off()).with_name("power"));
        assert_eq2!(
            switch.hidden_input(),
            HiddenInput {
                name: "power".to_string(),
                value: String::new(),
            }
        );
        switch.on_click(OptionIndex::First);
        assert_eq2!(switch.hidden_input().value, "1");
    }

    #[test]
    fn test_view_state() {
        let mut switch = SliderSwitch::new(
            SliderSwitchProps::new(on_off())
                .with_class_name("big")
                .with_tab_index(3),
        );
        let view = switch.view_state();
        assert!(view.show_unset_border);
        assert!(!view.first_active && !view.second_active);
        assert_eq2!(view.class_name.as_deref(), Some("big"));
        assert_eq2!(view.tab_index, 3);
        assert_eq2!(view.first_label, "On");

        switch.on_click(OptionIndex::Second);
        switch.on_hover(OptionIndex::First);
        let view = switch.view_state();
        assert!(!view.show_unset_border);
        assert!(view.second_active && !view.first_active);
        assert!(view.first_hovered && !view.second_hovered);

        switch.on_hover_end();
        assert!(!switch.view_state().first_hovered);
    }

    #[test]
    fn test_handle_input_event_routes_keys() {
        let (mut switch, received) = recording_switch(SliderSwitchProps::new(on_off()));
        assert_eq2!(
            switch.handle_input_event(&key(KeyCode::Char(' '))),
            KeyPropagation::Consumed
        );
        assert_eq2!(
            switch.handle_input_event(&key(KeyCode::Char('x'))),
            KeyPropagation::Propagate
        );
        assert_eq2!(switch.selection_state(), SelectionState::First);
        assert_eq2!(*received.lock().unwrap(), vec![OptionValue::from(1)]);
    }

    #[test]
    fn test_handle_input_event_routes_mouse_by_half() {
        let (mut switch, received) = recording_switch(SliderSwitchProps::new(on_off()));

        // No boundary yet, nothing is hit.
        switch.handle_input_event(&mouse(MouseEventKind::Down(MouseButton::Left), 12, 2));
        assert!(switch.selection_state().is_unset());

        switch.set_boundary(Some(bounds()));
        switch.handle_input_event(&mouse(MouseEventKind::Down(MouseButton::Left), 17, 2));
        assert_eq2!(switch.selection_state(), SelectionState::Second);

        switch.handle_input_event(&mouse(MouseEventKind::Moved, 10, 2));
        assert!(switch.view_state().first_hovered);
        switch.handle_input_event(&mouse(MouseEventKind::Moved, 10, 5));
        assert!(!switch.view_state().first_hovered);

        assert_eq2!(*received.lock().unwrap(), vec![OptionValue::from(0)]);
    }

    #[test]
    fn test_handle_input_event_focus_flip() {
        let mut switch = SliderSwitch::new(SliderSwitchProps::new(on_off()));
        switch.handle_input_event(&Event::FocusGained);
        assert!(switch.focus_state().has_tab_focus);
        switch.handle_input_event(&Event::FocusLost);
        assert!(!switch.focus_state().has_tab_focus);
    }

    #[test]
    fn test_props_from_json() {
        let json = r#"{
            "options": [{"name": "On", "value": 1}, {"name": "Off", "value": 0}],
            "name": "power",
            "active_value": 0,
            "tab_index": 2,
            "focus_mode": "explicit"
        }"#;
        let props = SliderSwitchProps::try_from_json(json).unwrap();
        assert_eq2!(props.name, "power");
        assert_eq2!(props.active_value, Some(OptionValue::from(0)));
        assert_eq2!(props.focus_mode, FocusMode::Explicit);
        assert_eq2!(props.class_name, None);

        let switch = SliderSwitch::new(props);
        assert_eq2!(switch.selection_state(), SelectionState::Second);
    }

    #[test]
    fn test_props_from_json_with_non_integer_values() {
        let json = r#"{
            "options": [{"name": "Half", "value": 0.5}, {"name": "Full", "value": 1}],
            "active_value": 0.5
        }"#;
        let props = SliderSwitchProps::try_from_json(json).unwrap();
        let half = OptionValue::from_f64(0.5).unwrap();
        assert_eq2!(props.active_value, Some(half.clone()));

        let (mut switch, received) = recording_switch(props);
        assert_eq2!(switch.selection_state(), SelectionState::First);
        assert_eq2!(switch.hidden_input().value, "0.5");

        switch.set_active_value(None);
        switch.on_click(OptionIndex::Second);
        switch.on_click(OptionIndex::First);
        assert_eq2!(switch.selected_value(), Some(&half));
        assert_eq2!(*received.lock().unwrap(), vec![OptionValue::from(1), half]);
    }

    #[test]
    fn test_props_from_json_with_three_options_fails() {
        let json = r#"{"options": [
            {"name": "a", "value": 1}, {"name": "b", "value": 2}, {"name": "c", "value": 3}
        ]}"#;
        let report = SliderSwitchProps::try_from_json(json).unwrap_err();
        let Some(SwitchError::InvalidPropsJson { reason }) = report.downcast_ref::<SwitchError>()
        else {
            panic!("expected InvalidPropsJson, got {report:?}");
        };
        assert!(reason.contains("exactly 2 options"));
    }
}
