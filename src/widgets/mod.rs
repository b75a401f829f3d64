//! Widget state structs (rendering-agnostic)
//!
//! These structs hold data and provide methods for state manipulation,
//! but contain no rendering logic. The TUI frontend renders them with ratatui.

pub mod theme_toggle;
pub mod value_slider;

pub use theme_toggle::ThemeToggle;
pub use value_slider::{BoundingBox, MoveListeners, PointerEvent, SliderSurface, ValueSlider};
