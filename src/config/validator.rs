//! Config validator
//!
//! Checks the values the renderers divide by or draw with, and flags
//! settings that will silently fall back to theme defaults.

use crate::config::{Config, ConsoleConfig};
use crate::theme::parse_hex_color;

const THEMES: &[&str] = &["dark", "light"];
const BORDER_STYLES: &[&str] = &["plain", "rounded", "double", "thick"];

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// A numeric setting that must be positive isn't
    NonPositive { field: String, value: String },
    /// A glyph the console bar draws with is empty
    EmptyGlyph { field: String },
    /// Color string that isn't #rrggbb
    InvalidColor { field: String, value: String },
    /// Value outside a fixed set of names
    UnknownName {
        field: String,
        value: String,
        expected: Vec<String>,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> ValidationSeverity {
        match self {
            ValidationIssue::NonPositive { .. } => ValidationSeverity::Error,
            ValidationIssue::EmptyGlyph { .. }
            | ValidationIssue::InvalidColor { .. }
            | ValidationIssue::UnknownName { .. } => ValidationSeverity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::NonPositive { field, value } => {
                format!("'{}' must be greater than zero (was {})", field, value)
            }
            ValidationIssue::EmptyGlyph { field } => {
                format!("Glyph '{}' is empty; the bar will draw nothing there", field)
            }
            ValidationIssue::InvalidColor { field, value } => {
                format!(
                    "'{}' is not a #rrggbb color ('{}'); using the theme color",
                    field, value
                )
            }
            ValidationIssue::UnknownName {
                field,
                value,
                expected,
            } => {
                format!(
                    "'{}' has unknown value '{}' (expected one of: {})",
                    field,
                    value,
                    expected.join(", ")
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// Issues found in one config, in check order
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    fn with_severity(&self, severity: ValidationSeverity) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity() == severity)
            .collect()
    }

    /// No errors; warnings are allowed
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.with_severity(ValidationSeverity::Error)
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.with_severity(ValidationSeverity::Warning)
    }
}

/// Validate a loaded configuration
pub fn validate_config(config: &Config) -> ValidationResult {
    let mut issues = Vec::new();

    check_name(&mut issues, "ui.theme", &config.ui.theme, THEMES);
    if config.ui.poll_timeout_ms == 0 {
        issues.push(ValidationIssue::NonPositive {
            field: "ui.poll_timeout_ms".to_string(),
            value: "0".to_string(),
        });
    }

    check_name(
        &mut issues,
        "healthbar.border_style",
        &config.healthbar.border_style,
        BORDER_STYLES,
    );
    check_color(&mut issues, "healthbar.fill_color", &config.healthbar.fill_color);
    check_color(
        &mut issues,
        "healthbar.background_color",
        &config.healthbar.background_color,
    );

    check_console(&mut issues, &config.console);

    ValidationResult { issues }
}

fn check_console(issues: &mut Vec<ValidationIssue>, console: &ConsoleConfig) {
    if console.length == 0 {
        issues.push(ValidationIssue::NonPositive {
            field: "console.length".to_string(),
            value: console.length.to_string(),
        });
    }
    if !(console.max_value.is_finite() && console.max_value > 0.0) {
        issues.push(ValidationIssue::NonPositive {
            field: "console.max_value".to_string(),
            value: console.max_value.to_string(),
        });
    }
    if console.interval_ms == 0 {
        issues.push(ValidationIssue::NonPositive {
            field: "console.interval_ms".to_string(),
            value: "0".to_string(),
        });
    }

    let glyphs = &console.glyphs;
    for (field, glyph) in [
        ("console.glyphs.fill", &glyphs.fill),
        ("console.glyphs.empty", &glyphs.empty),
    ] {
        if glyph.is_empty() {
            issues.push(ValidationIssue::EmptyGlyph {
                field: field.to_string(),
            });
        }
    }
}

fn check_name(issues: &mut Vec<ValidationIssue>, field: &str, value: &str, expected: &[&str]) {
    let normalized = value.trim().to_ascii_lowercase();
    if !expected.contains(&normalized.as_str()) {
        issues.push(ValidationIssue::UnknownName {
            field: field.to_string(),
            value: value.to_string(),
            expected: expected.iter().map(|s| s.to_string()).collect(),
        });
    }
}

fn check_color(issues: &mut Vec<ValidationIssue>, field: &str, value: &Option<String>) {
    if let Some(color) = value {
        if parse_hex_color(color).is_none() {
            issues.push(ValidationIssue::InvalidColor {
                field: field.to_string(),
                value: color.clone(),
            });
        }
    }
}

/// Auto-fix validation errors by restoring defaults. Returns the number fixed.
pub fn auto_fix_config(config: &mut Config, issues: &[ValidationIssue]) -> usize {
    let defaults = Config::default();
    let mut fixed_count = 0;

    for issue in issues {
        if let ValidationIssue::NonPositive { field, .. } = issue {
            match field.as_str() {
                "ui.poll_timeout_ms" => {
                    config.ui.poll_timeout_ms = defaults.ui.poll_timeout_ms;
                    fixed_count += 1;
                }
                "console.length" => {
                    config.console.length = defaults.console.length;
                    fixed_count += 1;
                }
                "console.max_value" => {
                    config.console.max_value = defaults.console.max_value;
                    fixed_count += 1;
                }
                "console.interval_ms" => {
                    config.console.interval_ms = defaults.console.interval_ms;
                    fixed_count += 1;
                }
                _ => {}
            }
        }
    }

    fixed_count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let result = validate_config(&Config::default());
        assert!(result.is_valid());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_zero_sizes_are_errors() {
        let mut config = Config::default();
        config.console.length = 0;
        config.console.max_value = 0.0;

        let result = validate_config(&config);
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_bad_names_and_colors_are_warnings() {
        let mut config = Config::default();
        config.ui.theme = "sepia".to_string();
        config.healthbar.border_style = "wavy".to_string();
        config.healthbar.fill_color = Some("red".to_string());
        config.console.glyphs.fill = String::new();

        let result = validate_config(&config);
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 4);
        assert!(result.warnings()[0].message().contains("sepia"));
    }

    #[test]
    fn test_theme_name_is_case_insensitive() {
        let mut config = Config::default();
        config.ui.theme = "Light".to_string();
        assert!(validate_config(&config).warnings().is_empty());
    }

    #[test]
    fn test_auto_fix() {
        let mut config = Config::default();
        config.console.length = 0;
        config.console.interval_ms = 0;
        config.ui.poll_timeout_ms = 0;

        let result = validate_config(&config);
        assert_eq!(result.errors().len(), 3);

        let fixed = auto_fix_config(&mut config, &result.issues);
        assert_eq!(fixed, 3);
        assert_eq!(config, Config::default());

        let result2 = validate_config(&config);
        assert!(result2.is_valid());
    }
}
