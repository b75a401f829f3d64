//! Host screen layout
//!
//! Pure function of the terminal area: a heading, the bordered healthbar and
//! the theme switch below it, centered horizontally.

use ratatui::layout::Rect;

/// Widest the bar grows on large terminals
const MAX_BAR_WIDTH: u16 = 80;
/// Horizontal margin kept on each side
const SIDE_MARGIN: u16 = 2;
/// Cells taken by the switch track
pub const SWITCH_WIDTH: u16 = 4;

/// Screen rects of every host element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostLayout {
    /// Screen area the layout was computed for
    pub area: Rect,
    pub title: Rect,
    /// Bar including its border
    pub bar_outer: Rect,
    /// Bar content; this is the slider's root element
    pub bar_inner: Rect,
    pub switch: Rect,
    pub switch_label: Rect,
    pub hint: Rect,
}

impl HostLayout {
    pub fn compute(area: Rect, show_border: bool) -> Self {
        let width = area
            .width
            .saturating_sub(SIDE_MARGIN * 2)
            .min(MAX_BAR_WIDTH);
        let x = area.x + (area.width - width) / 2;

        let bar_height = if show_border { 3 } else { 1 };
        // title + bar + gap + switch
        let total_height = 1 + bar_height + 1 + 1;
        let y = area.y + area.height.saturating_sub(total_height) / 2;

        let title = Rect::new(x, y, width, 1);
        let bar_outer = Rect::new(x, y + 1, width, bar_height);
        let bar_inner = if show_border {
            Rect::new(x + 1, y + 2, width.saturating_sub(2), 1)
        } else {
            bar_outer
        };

        let switch_y = bar_outer.y + bar_height + 1;
        let switch = Rect::new(x, switch_y, SWITCH_WIDTH.min(width), 1);
        let switch_label = Rect::new(
            x + switch.width + 1,
            switch_y,
            width.saturating_sub(switch.width + 1),
            1,
        );

        let hint = Rect::new(
            area.x,
            area.y + area.height.saturating_sub(1),
            area.width,
            area.height.min(1),
        );

        Self {
            area,
            title: title.intersection(area),
            bar_outer: bar_outer.intersection(area),
            bar_inner: bar_inner.intersection(area),
            switch: switch.intersection(area),
            switch_label: switch_label.intersection(area),
            hint,
        }
    }
}

/// Convert screen coordinates (x, y) to rect-relative coordinates
/// Returns None if the point is outside the rect
pub fn hit_test(screen_x: u16, screen_y: u16, rect: Rect) -> Option<(u16, u16)> {
    if screen_x < rect.x
        || screen_x >= rect.x + rect.width
        || screen_y < rect.y
        || screen_y >= rect.y + rect.height
    {
        return None;
    }

    Some((screen_x - rect.x, screen_y - rect.y))
}
