//! This module implements utility functions without much need for defining
//! context or not enough of it to warrant them having their own modules.

/// The exponent marker used in the output.
pub const EXPONENT_MARKER: char = 'E';

/// The Fortran-style double precision exponent marker some cards use.
pub const ALT_EXPONENT_MARKER: char = 'D';

/// Replaces the alternate exponent marker with the canonical one, so "2.68D-09"
/// becomes "2.68E-09".
pub fn normalize_exponent(s: &str) -> String {
  return s.replace(ALT_EXPONENT_MARKER, &EXPONENT_MARKER.to_string());
}

/// Finds the leftmost decimal number in a line and returns it with its exponent
/// marker normalized. A number here is digits, a dot, digits, and optionally an
/// exponent (E or D, optional sign, digits). Signs in front of the mantissa
/// are not picked up, and neither are bare integers. Hand-rolled so we don't
/// need to pull a whole regex library.
pub fn scan_decimal(line: &str) -> Option<String> {
  let bytes = line.as_bytes();
  // length of the run of ascii digits starting at some index
  let digits = |i: usize| {
    bytes[i.min(bytes.len())..]
      .iter()
      .take_while(|b| b.is_ascii_digit())
      .count()
  };
  for start in 0..bytes.len() {
    let int_len = digits(start);
    if int_len == 0 {
      continue;
    }
    let dot = start + int_len;
    if bytes.get(dot) != Some(&b'.') {
      continue;
    }
    let frac_len = digits(dot + 1);
    if frac_len == 0 {
      continue;
    }
    let mut end = dot + 1 + frac_len;
    // the exponent only counts if it has digits of its own
    if matches!(bytes.get(end), Some(b'E') | Some(b'D')) {
      let mut exp = end + 1;
      if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
        exp += 1;
      }
      let exp_len = digits(exp);
      if exp_len > 0 {
        end = exp + exp_len;
      }
    }
    return Some(normalize_exponent(&line[start..end]));
  }
  return None;
}

/// Decodes bytes as UTF-8, dropping whatever isn't valid.
pub fn decode_lossy(bytes: &[u8]) -> String {
  return bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
}

/// Truncates a string to a number of characters, appending an ellipsis if
/// anything was cut.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
  if s.chars().count() > max_chars {
    let mut cut: String = s.chars().take(max_chars).collect();
    cut.push_str("...");
    return cut;
  }
  return s.to_string();
}
