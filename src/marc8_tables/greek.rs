//! Basic Greek, final byte `S`.

use crate::charset::Row;

/// Basic Greek. Accents and breathings 0x21-0x27 are combining.
pub(crate) const BASIC_GREEK: &[Row] = &[
    (0x21, '\u{0300}', "COMBINING GRAVE ACCENT", true),
    (0x22, '\u{0301}', "COMBINING ACUTE ACCENT", true),
    (0x23, '\u{0308}', "COMBINING DIAERESIS", true),
    (0x24, '\u{0342}', "COMBINING GREEK PERISPOMENI", true),
    (0x25, '\u{0313}', "COMBINING COMMA ABOVE", true),
    (0x26, '\u{0314}', "COMBINING REVERSED COMMA ABOVE", true),
    (0x27, '\u{0345}', "COMBINING GREEK YPOGEGRAMMENI", true),
    (0x28, '\u{0028}', "LEFT PARENTHESIS", false),
    (0x29, '\u{0029}', "RIGHT PARENTHESIS", false),
    (0x2A, '\u{002A}', "ASTERISK", false),
    (0x2B, '\u{002B}', "PLUS SIGN", false),
    (0x2C, '\u{002C}', "COMMA", false),
    (0x2D, '\u{002D}', "HYPHEN-MINUS", false),
    (0x2E, '\u{002E}', "FULL STOP", false),
    (0x2F, '\u{002F}', "SOLIDUS", false),
    (0x30, '\u{00AB}', "LEFT-POINTING DOUBLE ANGLE QUOTATION MARK", false),
    (0x31, '\u{00BB}', "RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK", false),
    (0x32, '\u{201C}', "LEFT DOUBLE QUOTATION MARK", false),
    (0x33, '\u{201D}', "RIGHT DOUBLE QUOTATION MARK", false),
    (0x34, '\u{0374}', "GREEK NUMERAL SIGN", false),
    (0x35, '\u{0375}', "GREEK LOWER NUMERAL SIGN", false),
    (0x3A, '\u{003A}', "COLON", false),
    (0x3B, '\u{0387}', "GREEK ANO TELEIA", false),
    (0x3F, '\u{037E}', "GREEK QUESTION MARK", false),
    (0x41, '\u{0391}', "GREEK CAPITAL LETTER ALPHA", false),
    (0x42, '\u{0392}', "GREEK CAPITAL LETTER BETA", false),
    (0x44, '\u{0393}', "GREEK CAPITAL LETTER GAMMA", false),
    (0x45, '\u{0394}', "GREEK CAPITAL LETTER DELTA", false),
    (0x46, '\u{0395}', "GREEK CAPITAL LETTER EPSILON", false),
    (0x47, '\u{03DA}', "GREEK LETTER STIGMA", false),
    (0x48, '\u{03DC}', "GREEK LETTER DIGAMMA", false),
    (0x49, '\u{0396}', "GREEK CAPITAL LETTER ZETA", false),
    (0x4A, '\u{0397}', "GREEK CAPITAL LETTER ETA", false),
    (0x4B, '\u{0398}', "GREEK CAPITAL LETTER THETA", false),
    (0x4C, '\u{0399}', "GREEK CAPITAL LETTER IOTA", false),
    (0x4D, '\u{039A}', "GREEK CAPITAL LETTER KAPPA", false),
    (0x4E, '\u{039B}', "GREEK CAPITAL LETTER LAMDA", false),
    (0x4F, '\u{039C}', "GREEK CAPITAL LETTER MU", false),
    (0x50, '\u{039D}', "GREEK CAPITAL LETTER NU", false),
    (0x51, '\u{039E}', "GREEK CAPITAL LETTER XI", false),
    (0x52, '\u{039F}', "GREEK CAPITAL LETTER OMICRON", false),
    (0x53, '\u{03A0}', "GREEK CAPITAL LETTER PI", false),
    (0x54, '\u{03DE}', "GREEK LETTER KOPPA", false),
    (0x55, '\u{03A1}', "GREEK CAPITAL LETTER RHO", false),
    (0x56, '\u{03A3}', "GREEK CAPITAL LETTER SIGMA", false),
    (0x58, '\u{03A4}', "GREEK CAPITAL LETTER TAU", false),
    (0x59, '\u{03A5}', "GREEK CAPITAL LETTER UPSILON", false),
    (0x5A, '\u{03A6}', "GREEK CAPITAL LETTER PHI", false),
    (0x5B, '\u{03A7}', "GREEK CAPITAL LETTER CHI", false),
    (0x5C, '\u{03A8}', "GREEK CAPITAL LETTER PSI", false),
    (0x5D, '\u{03A9}', "GREEK CAPITAL LETTER OMEGA", false),
    (0x5E, '\u{03E0}', "GREEK LETTER SAMPI", false),
    (0x61, '\u{03B1}', "GREEK SMALL LETTER ALPHA", false),
    (0x62, '\u{03B2}', "GREEK SMALL LETTER BETA", false),
    (0x63, '\u{03D0}', "GREEK BETA SYMBOL", false),
    (0x64, '\u{03B3}', "GREEK SMALL LETTER GAMMA", false),
    (0x65, '\u{03B4}', "GREEK SMALL LETTER DELTA", false),
    (0x66, '\u{03B5}', "GREEK SMALL LETTER EPSILON", false),
    (0x67, '\u{03DB}', "GREEK SMALL LETTER STIGMA", false),
    (0x68, '\u{03DD}', "GREEK SMALL LETTER DIGAMMA", false),
    (0x69, '\u{03B6}', "GREEK SMALL LETTER ZETA", false),
    (0x6A, '\u{03B7}', "GREEK SMALL LETTER ETA", false),
    (0x6B, '\u{03B8}', "GREEK SMALL LETTER THETA", false),
    (0x6C, '\u{03B9}', "GREEK SMALL LETTER IOTA", false),
    (0x6D, '\u{03BA}', "GREEK SMALL LETTER KAPPA", false),
    (0x6E, '\u{03BB}', "GREEK SMALL LETTER LAMDA", false),
    (0x6F, '\u{03BC}', "GREEK SMALL LETTER MU", false),
    (0x70, '\u{03BD}', "GREEK SMALL LETTER NU", false),
    (0x71, '\u{03BE}', "GREEK SMALL LETTER XI", false),
    (0x72, '\u{03BF}', "GREEK SMALL LETTER OMICRON", false),
    (0x73, '\u{03C0}', "GREEK SMALL LETTER PI", false),
    (0x74, '\u{03DF}', "GREEK SMALL LETTER KOPPA", false),
    (0x75, '\u{03C1}', "GREEK SMALL LETTER RHO", false),
    (0x76, '\u{03C3}', "GREEK SMALL LETTER SIGMA", false),
    (0x77, '\u{03C2}', "GREEK SMALL LETTER FINAL SIGMA", false),
    (0x78, '\u{03C4}', "GREEK SMALL LETTER TAU", false),
    (0x79, '\u{03C5}', "GREEK SMALL LETTER UPSILON", false),
    (0x7A, '\u{03C6}', "GREEK SMALL LETTER PHI", false),
    (0x7B, '\u{03C7}', "GREEK SMALL LETTER CHI", false),
    (0x7C, '\u{03C8}', "GREEK SMALL LETTER PSI", false),
    (0x7D, '\u{03C9}', "GREEK SMALL LETTER OMEGA", false),
    (0x7E, '\u{03E1}', "GREEK SMALL LETTER SAMPI", false),
];
