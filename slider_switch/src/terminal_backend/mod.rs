// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Glue between `crossterm` and the slider switch. Nothing outside this module knows
//! about crossterm types, except [`crate::SliderSwitch::handle_input_event`].

// Attach sources.
pub mod crossterm_surface;
pub mod switch_input;

// Re-export.
pub use crossterm_surface::*;
pub use switch_input::*;
