//! Glyph advance widths for the built-in Helvetica faces.
//!
//! The widths come from the Adobe core font AFM files, expressed in
//! thousandths of the font size. Only the two upright faces have their own
//! tables; the oblique faces share the metrics of their upright
//! counterparts, as in the AFMs.

use findoc_types::FontWeight;

/// Helvetica advances for code points 0x20..=0x7E.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70
];

/// Helvetica-Bold advances for code points 0x20..=0x7E.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 0x70
];

/// Advance of one WinAnsi code point, in thousandths of the font size.
pub(crate) fn advance(byte: u8, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    match byte {
        0x20..=0x7e => table[(byte - 0x20) as usize],
        other => table[(fold_win_ansi(other) - 0x20) as usize],
    }
}

/// Maps accented Latin-1 letters and a few CP1252 specials onto a base
/// glyph with the same advance. Accented letters keep the width of their
/// base letter in the core fonts.
fn fold_win_ansi(byte: u8) -> u8 {
    match byte {
        0x80 => b'0',                // € has the tabular-figure width
        0xa0 => b' ',                // non-breaking space
        0xc0..=0xc5 => b'A',
        0xc7 => b'C',
        0xc8..=0xcb => b'E',
        0xcc..=0xcf => b'I',
        0xd1 => b'N',
        0xd2..=0xd6 | 0xd8 => b'O',
        0xd9..=0xdc => b'U',
        0xdd => b'Y',
        0xe0..=0xe5 => b'a',
        0xe7 => b'c',
        0xe8..=0xeb => b'e',
        0xec..=0xef => b'i',
        0xf1 => b'n',
        0xf2..=0xf6 | 0xf8 => b'o',
        0xf9..=0xfc => b'u',
        0xfd | 0xff => b'y',
        0xaa | 0xba | 0xb0 => b'o', // ordinal indicators, degree sign
        _ => b'o',
    }
}

/// Summed advance of a WinAnsi-encoded string, in thousandths of the font
/// size. Multiply by the size in points and divide by 1000 for points.
pub fn text_advance(bytes: &[u8], weight: FontWeight) -> u32 {
    bytes.iter().map(|&b| u32::from(advance(b, weight))).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ascii_advances() {
        assert_eq!(advance(b' ', FontWeight::Regular), 278);
        assert_eq!(advance(b'W', FontWeight::Regular), 944);
        assert_eq!(advance(b'i', FontWeight::Regular), 222);
        assert_eq!(advance(b'i', FontWeight::Bold), 278);
    }

    #[test]
    fn accented_letters_match_base() {
        assert_eq!(
            advance(0xe9, FontWeight::Regular),
            advance(b'e', FontWeight::Regular)
        );
        assert_eq!(
            advance(0xc3, FontWeight::Bold),
            advance(b'A', FontWeight::Bold)
        );
    }

    #[test]
    fn bold_is_wider() {
        let text = b"Fininvest";
        assert!(text_advance(text, FontWeight::Bold) > text_advance(text, FontWeight::Regular));
    }
}
