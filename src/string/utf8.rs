//! UTF-8 decoding primitives
//!
//! A single-step decoder that never fails: malformed input decodes to
//! [`REPLACEMENT`] with a width of one byte, so callers always make progress.

/// Code point substituted for malformed input (U+FFFD)
pub const REPLACEMENT: char = '\u{FFFD}';

/// Encoded width implied by a lead byte, or 0 if `lead` cannot start a sequence
///
/// Continuation bytes, the overlong leads `0xC0`/`0xC1` and leads above `0xF4`
/// all map to 0.
#[inline(always)]
pub fn sequence_len(lead: u8) -> usize {
    static SEQUENCE_LEN_LUT: [u8; 256] = {
        let mut table = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            let byte = i as u8;
            table[i] = if byte < 0x80 {
                1
            } else if byte < 0xC2 {
                0
            } else if byte < 0xE0 {
                2
            } else if byte < 0xF0 {
                3
            } else if byte < 0xF5 {
                4
            } else {
                0
            };
            i += 1;
        }
        table
    };

    SEQUENCE_LEN_LUT[lead as usize] as usize
}

/// Check for a `10xxxxxx` byte
#[inline(always)]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Allowed range of the second byte after `lead`
///
/// Narrowed for the leads that would otherwise admit overlong forms,
/// surrogates or code points past U+10FFFF.
#[inline]
fn second_byte_range(lead: u8) -> (u8, u8) {
    match lead {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}

/// Decode the code point at the front of `bytes`
///
/// Returns the code point and the number of bytes it occupies. Malformed or
/// truncated input yields `(REPLACEMENT, 1)`; empty input yields
/// `(REPLACEMENT, 0)`.
pub fn decode_first(bytes: &[u8]) -> (char, usize) {
    let Some(&lead) = bytes.first() else {
        return (REPLACEMENT, 0);
    };

    let width = sequence_len(lead);
    match width {
        0 => return (REPLACEMENT, 1),
        1 => return (lead as char, 1),
        _ => {}
    }
    if bytes.len() < width {
        return (REPLACEMENT, 1);
    }

    let (lo, hi) = second_byte_range(lead);
    if !(lo..=hi).contains(&bytes[1]) {
        return (REPLACEMENT, 1);
    }
    if !bytes[2..width].iter().all(|&b| is_continuation(b)) {
        return (REPLACEMENT, 1);
    }

    let mut code = (lead & (0x7F >> width)) as u32;
    for &b in &bytes[1..width] {
        code = (code << 6) | (b & 0x3F) as u32;
    }

    match char::from_u32(code) {
        Some(c) => (c, width),
        None => (REPLACEMENT, 1),
    }
}
