//! Terminal output utilities.

use colored::Colorize;

/// Format a label and value as `   label: value`, right-aligning the label.
///
/// # Arguments
/// * `label` - The field name
/// * `value` - The value to print after the colon
/// * `width` - The minimum width of the label column
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    format!("{label:>width$}: {}", value.to_string())
}

/// `yes` in green or `no` in red.
pub fn yes_no(flag: bool) -> String {
    if flag {
        "yes".green().to_string()
    } else {
        "no".red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("cidr", "10.0.0.0/8", 8), "    cidr: 10.0.0.0/8");
    }

    #[test]
    fn test_format_field_long_label() {
        assert_eq!(format_field("host capacity", 255, 4), "host capacity: 255");
    }

    #[test]
    fn test_yes_no() {
        assert!(yes_no(true).contains("yes"));
        assert!(yes_no(false).contains("no"));
    }
}
