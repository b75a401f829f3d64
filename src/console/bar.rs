//! Console healthbar: value model plus ANSI frame rendering.

use crate::config::{ConsoleConfig, ConsoleGlyphs};
use crate::console::cursor::HiddenCursor;
use anyhow::{bail, Result};
use crossterm::{cursor, queue, style::Print};
use std::io::{self, Write};

/// Bounded value shown by a console bar
#[derive(Debug, Clone, PartialEq)]
pub struct BarModel {
    length: u16,
    max_value: f64,
    value: f64,
}

impl BarModel {
    /// `length` segments representing `max_value`; starts at `start_at` or full
    pub fn new(length: u16, max_value: f64, start_at: Option<f64>) -> Result<Self> {
        if length == 0 {
            bail!("Bar length must be at least 1 segment");
        }
        if !(max_value.is_finite() && max_value > 0.0) {
            bail!("Bar max value must be a positive number (was {})", max_value);
        }

        let mut model = Self {
            length,
            max_value,
            value: max_value,
        };
        if let Some(start) = start_at {
            model.set_value(start);
        }
        Ok(model)
    }

    pub fn from_config(config: &ConsoleConfig, start_at: Option<f64>) -> Result<Self> {
        Self::new(config.length, config.max_value, start_at)
    }

    pub fn length(&self) -> u16 {
        self.length
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value, clamped to `[0, max_value]`. NaN is ignored.
    pub fn set_value(&mut self, value: f64) {
        if value.is_nan() {
            tracing::warn!("Ignoring NaN bar value");
            return;
        }
        self.value = value.clamp(0.0, self.max_value);
    }

    /// Number of filled segments
    pub fn fill_amount(&self) -> u16 {
        let filled = (self.length as f64 * self.value / self.max_value).round();
        (filled as u16).min(self.length)
    }
}

/// Console bar renderer with resolved border glyphs
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleBar {
    fill: String,
    empty: String,
    top_left: String,
    top: String,
    top_right: String,
    left: String,
    right: String,
    bottom_left: String,
    bottom: String,
    bottom_right: String,
}

impl ConsoleBar {
    pub fn new(glyphs: &ConsoleGlyphs) -> Self {
        let pick = |specific: &Option<String>, shared: &String| {
            specific.clone().unwrap_or_else(|| shared.clone())
        };

        Self {
            fill: glyphs.fill.clone(),
            empty: glyphs.empty.clone(),
            top_left: pick(&glyphs.top_left, &glyphs.corner),
            top: pick(&glyphs.top, &glyphs.horizontal),
            top_right: pick(&glyphs.top_right, &glyphs.corner),
            left: pick(&glyphs.left, &glyphs.vertical),
            right: pick(&glyphs.right, &glyphs.vertical),
            bottom_left: pick(&glyphs.bottom_left, &glyphs.corner),
            bottom: pick(&glyphs.bottom, &glyphs.horizontal),
            bottom_right: pick(&glyphs.bottom_right, &glyphs.corner),
        }
    }

    /// The three lines of the bar for the model's current value
    pub fn frame(&self, model: &BarModel) -> [String; 3] {
        let length = model.length() as usize;
        let filled = model.fill_amount() as usize;

        [
            format!("{}{}{}", self.top_left, self.top.repeat(length), self.top_right),
            format!(
                "{}{}{}{}",
                self.left,
                self.fill.repeat(filled),
                self.empty.repeat(length - filled),
                self.right
            ),
            format!(
                "{}{}{}",
                self.bottom_left,
                self.bottom.repeat(length),
                self.bottom_right
            ),
        ]
    }

    /// Draw the bar at the top-left of the screen, leaving the cursor where it was
    pub fn draw<W: Write>(&self, model: &BarModel, out: &mut W) -> io::Result<()> {
        let mut out = HiddenCursor::new(out)?;
        queue!(out, cursor::SavePosition)?;
        for (row, line) in self.frame(model).iter().enumerate() {
            queue!(out, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        queue!(out, cursor::RestorePosition)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_starts_full_and_clamps() {
        let mut model = BarModel::new(10, 100.0, None).expect("valid bar");
        assert_eq!(model.value(), 100.0);

        model.set_value(150.0);
        assert_eq!(model.value(), 100.0);
        model.set_value(-3.0);
        assert_eq!(model.value(), 0.0);
        model.set_value(f64::NAN);
        assert_eq!(model.value(), 0.0);

        let model = BarModel::new(10, 100.0, Some(250.0)).expect("valid bar");
        assert_eq!(model.value(), 100.0);
    }

    #[test]
    fn test_model_rejects_bad_geometry() {
        assert!(BarModel::new(0, 100.0, None).is_err());
        assert!(BarModel::new(10, 0.0, None).is_err());
        assert!(BarModel::new(10, f64::INFINITY, None).is_err());
    }

    #[test]
    fn test_fill_amount_rounds() {
        let mut model = BarModel::new(10, 100.0, None).expect("valid bar");
        model.set_value(45.0);
        assert_eq!(model.fill_amount(), 5);
        model.set_value(44.0);
        assert_eq!(model.fill_amount(), 4);
        model.set_value(100.0);
        assert_eq!(model.fill_amount(), 10);

        let mut model = BarModel::new(60, 20.0, Some(5.0)).expect("valid bar");
        assert_eq!(model.fill_amount(), 15);
        model.set_value(0.0);
        assert_eq!(model.fill_amount(), 0);
    }

    #[test]
    fn test_frame_with_default_glyphs() {
        let bar = ConsoleBar::new(&ConsoleGlyphs::default());
        let model = BarModel::new(10, 100.0, Some(50.0)).expect("valid bar");

        assert_eq!(
            bar.frame(&model),
            [
                "+----------+".to_string(),
                "|#####     |".to_string(),
                "+----------+".to_string(),
            ]
        );
    }

    #[test]
    fn test_frame_with_glyph_overrides() {
        let glyphs = ConsoleGlyphs {
            fill: "█".to_string(),
            empty: "░".to_string(),
            horizontal: String::new(),
            corner: String::new(),
            top_left: Some("┌".to_string()),
            left: Some("[".to_string()),
            right: Some("]".to_string()),
            ..ConsoleGlyphs::default()
        };
        let bar = ConsoleBar::new(&glyphs);
        let model = BarModel::new(4, 4.0, Some(1.0)).expect("valid bar");

        let [top, middle, bottom] = bar.frame(&model);
        assert_eq!(top, "┌");
        assert_eq!(middle, "[█░░░]");
        assert_eq!(bottom, "");
    }

    #[test]
    fn test_draw_writes_frame() {
        let bar = ConsoleBar::new(&ConsoleGlyphs::default());
        let model = BarModel::new(4, 100.0, Some(25.0)).expect("valid bar");
        let mut out = Vec::new();

        bar.draw(&model, &mut out).expect("write to vec");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("\x1b[?25l"));
        assert!(text.contains("|#   |"));
        assert!(text.ends_with("\x1b[?25h"));
    }
}
