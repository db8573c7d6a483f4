const UNITS: [&str; 4] = ["B", "kB", "MB", "GB"];

/// Formats a byte count with decimal units, e.g. `1536` -> `1.54 kB`.
pub fn human_size(bytes: u64) -> String {
  if bytes < 1000 {
    return format!("{bytes} B");
  }

  #[allow(clippy::cast_precision_loss)]
  let mut value = bytes as f64;
  let mut unit = 0;
  while value >= 1000.0 && unit < UNITS.len() - 1 {
    value /= 1000.0;
    unit += 1;
  }
  format!("{value:.2} {}", UNITS[unit])
}

#[test]
fn test_human_size() {
  assert_eq!(human_size(0), "0 B");
  assert_eq!(human_size(999), "999 B");
  assert_eq!(human_size(1000), "1.00 kB");
  assert_eq!(human_size(1536), "1.54 kB");
  assert_eq!(human_size(2_500_000), "2.50 MB");
  assert_eq!(human_size(7_000_000_000_000), "7000.00 GB");
}
