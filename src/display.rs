//! Display formatting for evaluation results
//!
//! The library hands back plain `f64` values; this module renders them for
//! terminal display.

/// Format a numeric result - no trailing `.0` for integral values
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
