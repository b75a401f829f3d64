//! Console healthbar
//!
//! A plain ANSI bar drawn at the top of the terminal and refreshed on an
//! interval, for watching a value change without the mouse-driven UI.

pub mod bar;
pub mod cursor;
pub mod draw_loop;

pub use bar::{BarModel, ConsoleBar};
pub use draw_loop::DrawLoop;
