//! Input routing for the host screen
//!
//! Turns terminal mouse events into slider pointer events and switch clicks.
//! Terminals report raw positions only, so pointer-leave is derived here by
//! remembering whether the last position was over the bar.

use crate::core::layout::{hit_test, HostLayout};
use crate::widgets::PointerEvent;
use crossterm::event::{MouseButton, MouseEventKind};

/// What a mouse event means for the host screen
#[derive(Debug, Clone, PartialEq)]
pub enum MouseRoute {
    Slider(PointerEvent),
    ToggleTheme,
}

/// Tracks hover over the bar so leaving it can be reported
#[derive(Debug, Clone, Default)]
pub struct PointerRouter {
    hovering: bool,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one mouse event. A single event can both leave the bar and
    /// click the switch, so several routes may come back, in delivery order.
    pub fn route(&mut self, kind: MouseEventKind, x: u16, y: u16, layout: &HostLayout) -> Vec<MouseRoute> {
        let mut routes = Vec::new();
        let inside = hit_test(x, y, layout.bar_inner).is_some();
        let page_x = x as f64;

        if self.hovering && !inside {
            routes.push(MouseRoute::Slider(PointerEvent::Leave));
        }
        self.hovering = inside;

        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if inside {
                    routes.push(MouseRoute::Slider(PointerEvent::Press { page_x }));
                } else if hit_test(x, y, layout.switch).is_some() {
                    routes.push(MouseRoute::ToggleTheme);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                if inside {
                    routes.push(MouseRoute::Slider(PointerEvent::Move { page_x }));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if inside {
                    routes.push(MouseRoute::Slider(PointerEvent::Release { page_x }));
                }
            }
            _ => {}
        }

        routes
    }
}
