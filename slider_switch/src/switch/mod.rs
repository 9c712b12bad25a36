// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod focus_state;
pub mod focus_tracker;
pub mod input_dispatcher;
pub mod interaction_surface;
pub mod prop_sync;
pub mod selection_state;
pub mod slider_switch_component;
pub mod switch_option;

// Re-export.
pub use focus_state::*;
pub use focus_tracker::*;
pub use input_dispatcher::*;
pub use interaction_surface::*;
pub use prop_sync::ActiveValue;
pub use selection_state::*;
pub use slider_switch_component::*;
pub use switch_option::*;

// Tests.
#[cfg(test)]
mod test_slider_switch_component;
