use crate::error::DecodeError;

fn nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        _ => None,
    }
}

/// Parses a record listing back into the bytes it was produced from.
///
/// Each line must hold exactly two lowercase hex digits. The final
/// newline is optional; an empty listing decodes to no bytes.
///
/// ```
/// use bin2hex::{decode_records, DecodeError};
///
/// assert_eq!(decode_records("00\n41\nff\n0a\n"), Ok(vec![0x00, 0x41, 0xff, 0x0a]));
/// assert_eq!(
///     decode_records("00\nA1\n"),
///     Err(DecodeError::InvalidDigit { line: 2, found: 'A' })
/// );
/// ```
pub fn decode_records(text: &str) -> Result<Vec<u8>, DecodeError> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    if body.is_empty() {
        return Ok(Vec::new());
    }

    body.split('\n')
        .enumerate()
        .map(|(i, line)| {
            let line_no = i + 1;
            let mut chars = line.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some(high), Some(low), None) => {
                    let high = nibble(high).ok_or(DecodeError::InvalidDigit { line: line_no, found: high })?;
                    let low = nibble(low).ok_or(DecodeError::InvalidDigit { line: line_no, found: low })?;
                    Ok(high << 4 | low)
                }
                _ => Err(DecodeError::InvalidLength { line: line_no, len: line.chars().count() }),
            }
        })
        .collect()
}
