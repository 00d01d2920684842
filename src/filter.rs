use crate::error::{BitscarfError, BitscarfResult};

/// Normalize raw input text and repeat it `repeat` times.
///
/// Carriage returns are dropped, line feeds and tabs become single spaces,
/// and runs of two spaces collapse to one in a single left-to-right pass.
/// The single pass is intentional: three consecutive whitespace characters
/// come out as two spaces, not one (see the regression test below).
pub fn filter_text(v: &[u8], repeat: u32) -> BitscarfResult<Vec<u8>> {
    let mapped: Vec<u8> = v
        .iter()
        .filter(|&&b| b != b'\r')
        .map(|&b| if b == b'\n' || b == b'\t' { b' ' } else { b })
        .collect();

    let collapsed = collapse_double_spaces(&mapped);

    let start = collapsed
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .ok_or(BitscarfError::EmptyInput)?;
    let end = collapsed
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .unwrap_or(start);
    let trimmed = &collapsed[start..=end];

    Ok(trimmed.repeat(repeat as usize))
}

/// Replace each non-overlapping occurrence of two consecutive spaces with
/// one space, scanning once from the left.
fn collapse_double_spaces(v: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(v.len());
    let mut i = 0;
    while i < v.len() {
        if v[i] == b' ' && v.get(i + 1) == Some(&b' ') {
            out.push(b' ');
            i += 2;
        } else {
            out.push(v[i]);
            i += 1;
        }
    }
    out
}
