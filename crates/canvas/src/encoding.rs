//! WinAnsi (CP1252) text encoding.
//!
//! The built-in Type1 fonts are declared with `WinAnsiEncoding` in the font
//! dictionaries, so every string shown on a page has to be encoded to the
//! matching single-byte code points.

/// Encodes a string to WinAnsi bytes. Characters without a WinAnsi code
/// point are replaced with `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

pub(crate) fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{0000}'..='\u{007e}' => c as u8,
        // Latin-1 block maps 1:1 onto 0xA0..=0xFF.
        '\u{00a0}'..='\u{00ff}' => c as u8,
        '\u{20ac}' => 0x80, // €
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85, // …
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96, // –
        '\u{2014}' => 0x97, // —
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode_win_ansi("Recibo N. 1"), b"Recibo N. 1".to_vec());
    }

    #[test]
    fn latin1_and_cp1252_specials() {
        assert_eq!(win_ansi_byte('é'), 0xe9);
        assert_eq!(win_ansi_byte('ç'), 0xe7);
        assert_eq!(win_ansi_byte('ã'), 0xe3);
        assert_eq!(win_ansi_byte('º'), 0xba);
        assert_eq!(win_ansi_byte('€'), 0x80);
    }

    #[test]
    fn unmappable_becomes_question_mark() {
        assert_eq!(win_ansi_byte('\u{4e2d}'), b'?');
    }
}
