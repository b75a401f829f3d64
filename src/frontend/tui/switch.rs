//! Theme switch renderer: a small track with a knob on the left (light) or
//! right (dark).

use crate::core::layout::SWITCH_WIDTH;
use crate::theme::AppTheme;
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

const KNOB: char = '●';

pub struct SwitchView {
    on: bool,
    track_on: Color,
    track_off: Color,
    knob: Color,
}

impl SwitchView {
    pub fn new(on: bool, theme: &AppTheme) -> Self {
        Self {
            on,
            track_on: theme.switch_on,
            track_off: theme.switch_off,
            knob: theme.switch_knob,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width.min(SWITCH_WIDTH);
        let track = if self.on { self.track_on } else { self.track_off };
        let knob_x = if self.on {
            area.x + width - 1
        } else {
            area.x
        };

        for i in 0..width {
            let x = area.x + i;
            let cell = &mut buf[(x, area.y)];
            cell.set_bg(track);
            if x == knob_x {
                cell.set_char(KNOB).set_fg(self.knob);
            } else {
                cell.set_char(' ');
            }
        }
    }
}
