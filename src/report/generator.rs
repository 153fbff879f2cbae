//! Plain-text report generation.
//!
//! This module renders per-worker summaries into the block format printed
//! on standard output.

use crate::models::WorkerSummary;

/// Generate the complete text report.
///
/// Each worker count gets one block followed by a blank line. No summaries
/// produce an empty string.
pub fn generate_text_report(summaries: &[WorkerSummary]) -> String {
    let mut output = String::new();

    for summary in summaries {
        output.push_str(&generate_worker_block(summary));
        output.push('\n');
    }

    output
}

/// Generate the block for one worker count.
fn generate_worker_block(s: &WorkerSummary) -> String {
    let mut block = String::new();

    block.push_str(&format!("- Workers: {}\n", s.workers));
    block.push_str(&format!("  Qty: {}\n", s.count));
    block.push_str(&format!("  Min: {}\n", format_float(s.min)));
    block.push_str(&format!("  Q1:  {}\n", format_float(s.q1)));
    block.push_str(&format!("  Med: {}\n", format_float(s.median)));
    block.push_str(&format!("  Q3:  {}\n", format_float(s.q3)));
    block.push_str(&format!("  Max: {}\n", format_float(s.max)));
    block.push_str(&format!("  Avg: {}\n", format_float(s.mean)));
    block.push_str(&format!("  StdDev: {}\n", format_float(s.stddev)));

    block
}

/// Format a float in shortest round-trip form, always marked as a float.
///
/// Decimal exponents in `[-4, 16)` print positionally (`1.0`, `0.00025`),
/// anything else in scientific form with a signed two-digit exponent
/// (`1e-05`, `1.5e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sci = format!("{:e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if (-4..16).contains(&exp) {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(workers: usize) -> WorkerSummary {
        WorkerSummary {
            workers,
            count: 2,
            min: 1.0,
            q1: 1.0,
            median: 1.5,
            q3: 2.0,
            max: 2.0,
            mean: 1.5,
            stddev: 0.7071067811865476,
        }
    }

    #[test]
    fn test_generate_worker_block() {
        let block = generate_worker_block(&summary(4));
        let expected = "\
- Workers: 4
  Qty: 2
  Min: 1.0
  Q1:  1.0
  Med: 1.5
  Q3:  2.0
  Max: 2.0
  Avg: 1.5
  StdDev: 0.7071067811865476
";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let report = generate_text_report(&[summary(2), summary(8)]);
        let blocks: Vec<&str> = report.split("\n\n").filter(|b| !b.is_empty()).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("- Workers: 2"));
        assert!(blocks[1].starts_with("- Workers: 8"));
        assert!(report.ends_with("StdDev: 0.7071067811865476\n\n"));
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(generate_text_report(&[]), "");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(0.000123), "0.000123");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(0.0000125), "1.25e-05");
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(-2.0), "-2.0");
        assert_eq!(format_float(f64::NAN), "nan");
    }
}
