// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interactive terminal demo of the slider switch.
//!
//! - Click either half of the switch to select it, move the mouse over it to hover.
//! - `Tab` gives the switch focus, `Shift+Tab` takes it away. While focused, `Enter` or
//!   `Space` toggles it. Clicking anywhere outside the switch drops focus.
//! - `q` or `Esc` exits.

use std::{io::{Stdout, Write, stdout},
          sync::{Arc, Mutex}};

use clap::Parser;
use crossterm::{cursor::{Hide, MoveTo, Show},
                event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange,
                        EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
                        KeyEventKind},
                execute, queue,
                style::{Print, Stylize},
                terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
                           disable_raw_mode, enable_raw_mode}};
use futures_util::StreamExt;
use miette::IntoDiagnostic;
use r3bl_slider_switch::{Bounds, CommonResult, CrosstermInteractionSurface, KeyPropagation,
                         OptionValue, SliderSwitch, SwitchViewState, col, height,
                         lock_or_recover,
                         log::try_initialize_logging_global, ok, row,
                         setup_default_miette_global_report_handler, width};

use crate::clap_config::CLIArg;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

/// Where the switch is drawn.
const SWITCH_ORIGIN_COL: u16 = 2;
const SWITCH_ORIGIN_ROW: u16 = 3;

#[tokio::main]
async fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(ISSUES_URL);

    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;
    should_log.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let last_notification: Arc<Mutex<Option<OptionValue>>> = Arc::default();
    let props = {
        let last_notification = last_notification.clone();
        cli_arg
            .try_into_props()?
            .with_on_switch(move |value: &OptionValue| {
                *lock_or_recover(&last_notification) = Some(value.clone());
            })
    };

    run_event_loop(SliderSwitch::new(props), &last_notification).await?;

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}

async fn run_event_loop(
    mut switch: SliderSwitch,
    last_notification: &Mutex<Option<OptionValue>>,
) -> CommonResult<()> {
    let surface = CrosstermInteractionSurface::new_shared();
    switch.set_boundary(Some(switch_bounds(&switch.view_state())));
    switch.mount(surface.clone())?;

    let _terminal_guard = TerminalGuard::try_new()?;
    let mut stdout = stdout();
    let mut event_stream = EventStream::new();

    render(&mut stdout, &switch, last_notification)?;

    while let Some(maybe_event) = event_stream.next().await {
        let event = maybe_event.into_diagnostic()?;
        tracing::trace!(message = "terminal event", ?event);

        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event
        {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Tab => switch.on_focus(),
                KeyCode::BackTab => switch.on_blur(),
                _ => {
                    route_key_when_focused(&mut switch, &event);
                }
            }
        } else {
            surface.dispatch_crossterm_event(&event);
            switch.handle_input_event(&event);
        }

        render(&mut stdout, &switch, last_notification)?;
    }

    switch.unmount();
    ok!()
}

/// Keys only reach the switch while it has tab focus.
fn route_key_when_focused(switch: &mut SliderSwitch, event: &Event) -> KeyPropagation {
    if switch.focus_state().has_tab_focus {
        switch.handle_input_event(event)
    } else {
        KeyPropagation::Propagate
    }
}

/// Both halves are as wide as the longest label plus padding, so the split point is
/// the middle of the bounds.
fn half_width(view_state: &SwitchViewState) -> u16 {
    let longest = view_state
        .first_label
        .chars()
        .count()
        .max(view_state.second_label.chars().count());
    u16::try_from(longest + 2).unwrap_or(u16::MAX / 2)
}

fn switch_bounds(view_state: &SwitchViewState) -> Bounds {
    let origin = col(SWITCH_ORIGIN_COL) + row(SWITCH_ORIGIN_ROW);
    Bounds::new(origin, width(half_width(view_state) * 2) + height(1))
}

fn render(
    stdout: &mut Stdout,
    switch: &SliderSwitch,
    last_notification: &Mutex<Option<OptionValue>>,
) -> CommonResult<()> {
    let view_state = switch.view_state();
    let half_width = usize::from(half_width(&view_state));
    let hidden_input = switch.hidden_input();

    let paint_half = |label: &str, active: bool, hovered: bool| {
        let text = format!("{label:^half_width$}");
        let styled = if active { text.black().on_green().bold() } else { text.grey() };
        if hovered { styled.underlined() } else { styled }
    };

    let focus_marker = if view_state.has_tab_focus { "▶ " } else { "  " };
    let unset_marker = if view_state.show_unset_border { "  (nothing selected)" } else { "" };
    let notification = lock_or_recover(last_notification)
        .as_ref()
        .map_or_else(|| "none".to_string(), ToString::to_string);

    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 1),
        Print("Slider switch demo".bold()),
        MoveTo(0, SWITCH_ORIGIN_ROW),
        Print(focus_marker),
        MoveTo(SWITCH_ORIGIN_COL, SWITCH_ORIGIN_ROW),
        Print(paint_half(
            &view_state.first_label,
            view_state.first_active,
            view_state.first_hovered
        )),
        Print(paint_half(
            &view_state.second_label,
            view_state.second_active,
            view_state.second_hovered
        )),
        Print(unset_marker.yellow()),
        MoveTo(0, SWITCH_ORIGIN_ROW + 2),
        Print(format!(
            "hidden input: {}={}",
            hidden_input.name, hidden_input.value
        )),
        MoveTo(0, SWITCH_ORIGIN_ROW + 3),
        Print(format!("last on_switch: {notification}")),
        MoveTo(0, SWITCH_ORIGIN_ROW + 5),
        Print(
            "click: select │ Tab / Shift+Tab: focus │ Enter / Space: toggle │ q / Esc: quit"
                .dark_grey()
        ),
    )
    .into_diagnostic()?;
    stdout.flush().into_diagnostic()
}

/// Puts the terminal in raw mode with mouse capture for as long as it is alive.
struct TerminalGuard;

impl TerminalGuard {
    fn try_new() -> CommonResult<Self> {
        enable_raw_mode().into_diagnostic()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            Hide
        )
        .into_diagnostic()?;
        ok!(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        execute!(
            stdout(),
            Show,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .ok();
        disable_raw_mode().ok();
    }
}

mod clap_config {
    use clap::{Args, Parser};
    use miette::IntoDiagnostic;
    use r3bl_slider_switch::{CommonResult, FocusMode, OptionValue, SliderSwitchProps,
                             SwitchOption, SwitchOptions, ok};

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "slider_switch_demo")]
    #[command(about = "🎚️ Try out the slider switch in your terminal")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(false))]
    pub struct CLIArg {
        /// First option, as `NAME=VALUE`. A VALUE that parses as a finite number is a
        /// number, otherwise it is text.
        #[arg(long, default_value = "On=1", value_parser = parse_switch_option)]
        pub first: SwitchOption,

        /// Second option, as `NAME=VALUE`.
        #[arg(long, default_value = "Off=0", value_parser = parse_switch_option)]
        pub second: SwitchOption,

        /// Control the switch from outside: it always shows the option with this value.
        #[arg(long)]
        pub active_value: Option<String>,

        /// Form field name shown with the hidden input.
        #[arg(long, default_value = "switch")]
        pub name: String,

        /// How terminal focus gained / lost events change tab focus.
        #[arg(long, default_value_t = FocusMode::Flip)]
        pub focus_mode: FocusMode,

        /// Load props from a JSON file instead. Overrides the flags above.
        #[arg(long)]
        pub props_json: Option<String>,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            short = 'l',
            help = "Log app output to a file named `log.txt` for debugging."
        )]
        pub enable_logging: bool,
    }

    impl CLIArg {
        pub fn try_into_props(&self) -> CommonResult<SliderSwitchProps> {
            if let Some(path) = &self.props_json {
                let json = std::fs::read_to_string(path).into_diagnostic()?;
                return SliderSwitchProps::try_from_json(&json);
            }

            let options = SwitchOptions::new(self.first.clone(), self.second.clone());
            let mut props = SliderSwitchProps::new(options)
                .with_name(self.name.clone())
                .with_focus_mode(self.focus_mode);
            if let Some(active_value) = &self.active_value {
                props = props.with_active_value(parse_option_value(active_value));
            }
            ok!(props)
        }
    }

    fn parse_option_value(text: &str) -> OptionValue {
        if let Ok(int) = text.parse::<i64>() {
            return OptionValue::from(int);
        }
        text.parse::<f64>()
            .ok()
            .and_then(OptionValue::from_f64)
            .unwrap_or_else(|| OptionValue::from(text))
    }

    fn parse_switch_option(arg: &str) -> Result<SwitchOption, String> {
        let Some((name, value)) = arg.split_once('=') else {
            return Err(format!("expected NAME=VALUE, got `{arg}`"));
        };
        if name.is_empty() {
            return Err(format!("option name is empty in `{arg}`"));
        }
        Ok(SwitchOption::new(name, parse_option_value(value)))
    }

}
