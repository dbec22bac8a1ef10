//! Reusable UI components
//!
//! - `keybindings` - key registry shared by the event loop, nav bar and help
//! - `nav_bar` - bottom line of key hints
//! - `help_overlay` - floating help window

pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
