//! Draggable value slider (the healthbar) - rendering-agnostic state
//!
//! Holds a bounded value in `[0, MAX_VALUE]` that follows the pointer while a
//! drag session is active. The slider never stores geometry: every pointer
//! event asks the surface it is mounted on for a fresh bounding box, since the
//! layout can change between interactions (terminal resize, etc.).

use std::cell::Cell;
use std::rc::Rc;

/// Value of a full bar
pub const MAX_VALUE: u8 = 100;

/// Left offset and width of the slider's root element, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub width: f64,
}

impl BoundingBox {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Zero-size or unmeasurable boxes can't be mapped to a value
    pub fn is_degenerate(&self) -> bool {
        !(self.left.is_finite() && self.width.is_finite()) || self.width <= 0.0
    }
}

/// Pointer input delivered to the slider
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed on the element
    Press { page_x: f64 },
    /// Pointer moved over the element
    Move { page_x: f64 },
    /// Primary button released on the element
    Release { page_x: f64 },
    /// Pointer left the element
    Leave,
    /// Touch points moved; only the first changed touch is used
    TouchMove { touches: Vec<f64> },
}

/// Registry of move listeners attached to an element
///
/// Cloning shares the registry, so a surface can hand out subscriptions while
/// tests (or the surface itself) observe how many are attached.
#[derive(Debug, Clone, Default)]
pub struct MoveListeners {
    attached: Rc<Cell<usize>>,
}

impl MoveListeners {
    /// Attach a listener; it stays attached until the subscription is dropped
    pub fn attach(&self) -> MoveSubscription {
        self.attached.set(self.attached.get() + 1);
        tracing::trace!(attached = self.attached.get(), "move listener attached");
        MoveSubscription {
            attached: Rc::clone(&self.attached),
        }
    }

    /// Number of currently attached listeners
    #[cfg(test)]
    pub fn attached(&self) -> usize {
        self.attached.get()
    }
}

/// Attached move listener. Detaches on drop.
#[derive(Debug)]
pub struct MoveSubscription {
    attached: Rc<Cell<usize>>,
}

impl Drop for MoveSubscription {
    fn drop(&mut self) {
        self.attached.set(self.attached.get().saturating_sub(1));
        tracing::trace!(attached = self.attached.get(), "move listener detached");
    }
}

/// The element a slider is mounted on
pub trait SliderSurface {
    /// Current geometry of the root element
    fn bounding_box(&self) -> BoundingBox;

    /// Move listener registry of the root element
    fn move_listeners(&self) -> &MoveListeners;
}

/// Drag tracking state. The subscription only exists while dragging.
#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(MoveSubscription),
}

/// Map an absolute pointer x coordinate to a value in `[0, MAX_VALUE]`
///
/// Positions outside the box are clamped. Returns `None` for degenerate
/// geometry or a non-finite pointer position.
pub fn map_position_to_value(page_x: f64, bbox: BoundingBox) -> Option<u8> {
    if bbox.is_degenerate() || !page_x.is_finite() {
        return None;
    }

    let relative = (page_x - bbox.left).clamp(0.0, bbox.width);
    let value = (relative / bbox.width * MAX_VALUE as f64).round();

    Some(value.clamp(0.0, MAX_VALUE as f64) as u8)
}

/// Healthbar state: current value plus drag session
#[derive(Debug)]
pub struct ValueSlider {
    value: u8,
    drag: DragState,
}

impl ValueSlider {
    /// Mount a slider; it starts full
    pub fn new() -> Self {
        Self {
            value: MAX_VALUE,
            drag: DragState::Idle,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// Fill ratio (0.0 to 1.0)
    pub fn fill_ratio(&self) -> f64 {
        self.value as f64 / MAX_VALUE as f64
    }

    /// CSS-style fill width, e.g. `"42%"`
    pub fn fill_width(&self) -> String {
        format!("{}%", self.value)
    }

    /// Feed one pointer event. Returns true if the value changed.
    pub fn handle(&mut self, event: PointerEvent, surface: &dyn SliderSurface) -> bool {
        match event {
            PointerEvent::Press { page_x } => {
                let changed = self.update_from_position(page_x, surface);
                if !self.is_dragging() {
                    self.drag = DragState::Dragging(surface.move_listeners().attach());
                    tracing::debug!(value = self.value, "drag session started");
                }
                changed
            }
            PointerEvent::Move { page_x } => {
                if self.is_dragging() {
                    self.update_from_position(page_x, surface)
                } else {
                    false
                }
            }
            PointerEvent::Release { page_x } => {
                self.end_drag("release");
                self.update_from_position(page_x, surface)
            }
            PointerEvent::Leave => {
                self.end_drag("leave");
                false
            }
            PointerEvent::TouchMove { touches } => match touches.first() {
                Some(&page_x) => self.update_from_position(page_x, surface),
                None => false,
            },
        }
    }

    fn end_drag(&mut self, reason: &str) {
        if let DragState::Dragging(_) = std::mem::take(&mut self.drag) {
            tracing::debug!(value = self.value, reason, "drag session ended");
        }
    }

    fn update_from_position(&mut self, page_x: f64, surface: &dyn SliderSurface) -> bool {
        let bbox = surface.bounding_box();
        match map_position_to_value(page_x, bbox) {
            Some(value) => {
                let changed = value != self.value;
                self.value = value;
                changed
            }
            None => {
                tracing::debug!(
                    page_x,
                    left = bbox.left,
                    width = bbox.width,
                    "ignoring pointer on degenerate slider geometry"
                );
                false
            }
        }
    }
}

impl Default for ValueSlider {
    fn default() -> Self {
        Self::new()
    }
}
