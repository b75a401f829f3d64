//! Healthbar renderer.
//!
//! Draws the slider value as a filled bar with an optional border, using the
//! active theme unless the config overrides the fill/background colors.

use crate::config::HealthbarConfig;
use crate::theme::{parse_hex_color, AppTheme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

/// Number of filled cells for a fill ratio on a bar `width` cells wide
pub fn fill_cells(width: u16, ratio: f64) -> u16 {
    (width as f64 * ratio.clamp(0.0, 1.0)).round() as u16
}

pub struct HealthbarView {
    ratio: f64,
    label: String,
    show_border: bool,
    border_type: BorderType,
    border_color: Color,
    bar_fill: Color,
    bar_background: Color,
    text_color: Color,
    show_value: bool,
    dragging: bool,
}

impl HealthbarView {
    pub fn new(config: &HealthbarConfig, theme: &AppTheme) -> Self {
        let border_type = match config.border_style.as_str() {
            "double" => BorderType::Double,
            "rounded" => BorderType::Rounded,
            "thick" => BorderType::Thick,
            _ => BorderType::Plain,
        };

        Self {
            ratio: 1.0,
            label: String::from("100%"),
            show_border: config.show_border,
            border_type,
            border_color: theme.window_border,
            bar_fill: config
                .fill_color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(theme.bar_fill),
            bar_background: config
                .background_color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(theme.bar_background),
            text_color: theme.bar_text,
            show_value: config.show_value,
            dragging: false,
        }
    }

    /// Fill ratio (0.0 to 1.0) and the value text shown on the bar
    pub fn fill(mut self, ratio: f64, label: impl Into<String>) -> Self {
        self.ratio = ratio;
        self.label = label.into();
        self
    }

    /// Highlight the border while a drag session is active
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    /// Render into `area` (the bar including its border)
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        // Only draw inside the buffer
        let area = area.intersection(buf.area);
        if (self.show_border && area.width < 3) || area.height < 1 || area.width == 0 {
            return;
        }

        let inner_area = if self.show_border {
            let border_color = if self.dragging {
                self.bar_fill
            } else {
                self.border_color
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(self.border_type)
                .border_style(Style::default().fg(border_color));

            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        let available_width = inner_area.width;
        let split_position = fill_cells(available_width, self.ratio);

        let y = inner_area.y;
        for i in 0..available_width {
            let x = inner_area.x + i;
            let cell = &mut buf[(x, y)];
            cell.set_char(' ');
            if i < split_position {
                cell.set_bg(self.bar_fill);
            } else {
                cell.set_bg(self.bar_background);
            }
        }

        if !self.show_value {
            return;
        }

        // Value centered on the bar
        let display_text = self.label.as_str();
        let text_width = display_text.chars().count() as u16;
        if text_width <= available_width {
            let text_start_x = inner_area.x + (available_width - text_width) / 2;
            for (i, c) in display_text.chars().enumerate() {
                let x = text_start_x + i as u16;
                buf[(x, y)].set_char(c).set_fg(self.text_color);
            }
        }
    }
}
