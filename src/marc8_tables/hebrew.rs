//! Basic Hebrew, final byte `2`.

use crate::charset::Row;

/// Basic Hebrew. Vowel points 0x40-0x4E are combining.
pub(crate) const BASIC_HEBREW: &[Row] = &[
    (0x21, '\u{0021}', "EXCLAMATION MARK", false),
    (0x22, '\u{0022}', "QUOTATION MARK", false),
    (0x23, '\u{0023}', "NUMBER SIGN", false),
    (0x24, '\u{0024}', "DOLLAR SIGN", false),
    (0x25, '\u{0025}', "PERCENT SIGN", false),
    (0x26, '\u{0026}', "AMPERSAND", false),
    (0x27, '\u{0027}', "APOSTROPHE", false),
    (0x28, '\u{0028}', "LEFT PARENTHESIS", false),
    (0x29, '\u{0029}', "RIGHT PARENTHESIS", false),
    (0x2A, '\u{002A}', "ASTERISK", false),
    (0x2B, '\u{002B}', "PLUS SIGN", false),
    (0x2C, '\u{002C}', "COMMA", false),
    (0x2D, '\u{05BE}', "HEBREW PUNCTUATION MAQAF", false),
    (0x2E, '\u{002E}', "FULL STOP", false),
    (0x2F, '\u{002F}', "SOLIDUS", false),
    (0x30, '\u{0030}', "DIGIT ZERO", false),
    (0x31, '\u{0031}', "DIGIT ONE", false),
    (0x32, '\u{0032}', "DIGIT TWO", false),
    (0x33, '\u{0033}', "DIGIT THREE", false),
    (0x34, '\u{0034}', "DIGIT FOUR", false),
    (0x35, '\u{0035}', "DIGIT FIVE", false),
    (0x36, '\u{0036}', "DIGIT SIX", false),
    (0x37, '\u{0037}', "DIGIT SEVEN", false),
    (0x38, '\u{0038}', "DIGIT EIGHT", false),
    (0x39, '\u{0039}', "DIGIT NINE", false),
    (0x3A, '\u{003A}', "COLON", false),
    (0x3B, '\u{003B}', "SEMICOLON", false),
    (0x3C, '\u{003C}', "LESS-THAN SIGN", false),
    (0x3D, '\u{003D}', "EQUALS SIGN", false),
    (0x3E, '\u{003E}', "GREATER-THAN SIGN", false),
    (0x3F, '\u{003F}', "QUESTION MARK", false),
    (0x40, '\u{05B7}', "HEBREW POINT PATAH", true),
    (0x41, '\u{05B8}', "HEBREW POINT QAMATS", true),
    (0x42, '\u{05B6}', "HEBREW POINT SEGOL", true),
    (0x43, '\u{05B5}', "HEBREW POINT TSERE", true),
    (0x44, '\u{05B4}', "HEBREW POINT HIRIQ", true),
    (0x45, '\u{05B9}', "HEBREW POINT HOLAM", true),
    (0x46, '\u{05BB}', "HEBREW POINT QUBUTS", true),
    (0x47, '\u{05B0}', "HEBREW POINT SHEVA", true),
    (0x48, '\u{05B2}', "HEBREW POINT HATAF PATAH", true),
    (0x49, '\u{05B3}', "HEBREW POINT HATAF QAMATS", true),
    (0x4A, '\u{05B1}', "HEBREW POINT HATAF SEGOL", true),
    (0x4B, '\u{05BC}', "HEBREW POINT DAGESH OR MAPIQ", true),
    (0x4C, '\u{05BF}', "HEBREW POINT RAFE", true),
    (0x4D, '\u{05C1}', "HEBREW POINT SHIN DOT", true),
    (0x4E, '\u{FB1E}', "HEBREW POINT JUDEO-SPANISH VARIKA", true),
    (0x5B, '\u{005B}', "LEFT SQUARE BRACKET", false),
    (0x5D, '\u{005D}', "RIGHT SQUARE BRACKET", false),
    (0x60, '\u{05D0}', "HEBREW LETTER ALEF", false),
    (0x61, '\u{05D1}', "HEBREW LETTER BET", false),
    (0x62, '\u{05D2}', "HEBREW LETTER GIMEL", false),
    (0x63, '\u{05D3}', "HEBREW LETTER DALET", false),
    (0x64, '\u{05D4}', "HEBREW LETTER HE", false),
    (0x65, '\u{05D5}', "HEBREW LETTER VAV", false),
    (0x66, '\u{05D6}', "HEBREW LETTER ZAYIN", false),
    (0x67, '\u{05D7}', "HEBREW LETTER HET", false),
    (0x68, '\u{05D8}', "HEBREW LETTER TET", false),
    (0x69, '\u{05D9}', "HEBREW LETTER YOD", false),
    (0x6A, '\u{05DA}', "HEBREW LETTER FINAL KAF", false),
    (0x6B, '\u{05DB}', "HEBREW LETTER KAF", false),
    (0x6C, '\u{05DC}', "HEBREW LETTER LAMED", false),
    (0x6D, '\u{05DD}', "HEBREW LETTER FINAL MEM", false),
    (0x6E, '\u{05DE}', "HEBREW LETTER MEM", false),
    (0x6F, '\u{05DF}', "HEBREW LETTER FINAL NUN", false),
    (0x70, '\u{05E0}', "HEBREW LETTER NUN", false),
    (0x71, '\u{05E1}', "HEBREW LETTER SAMEKH", false),
    (0x72, '\u{05E2}', "HEBREW LETTER AYIN", false),
    (0x73, '\u{05E3}', "HEBREW LETTER FINAL PE", false),
    (0x74, '\u{05E4}', "HEBREW LETTER PE", false),
    (0x75, '\u{05E5}', "HEBREW LETTER FINAL TSADI", false),
    (0x76, '\u{05E6}', "HEBREW LETTER TSADI", false),
    (0x77, '\u{05E7}', "HEBREW LETTER QOF", false),
    (0x78, '\u{05E8}', "HEBREW LETTER RESH", false),
    (0x79, '\u{05E9}', "HEBREW LETTER SHIN", false),
    (0x7A, '\u{05EA}', "HEBREW LETTER TAV", false),
    (0x7B, '\u{05F0}', "HEBREW LIGATURE YIDDISH DOUBLE VAV", false),
    (0x7C, '\u{05F1}', "HEBREW LIGATURE YIDDISH VAV YOD", false),
    (0x7D, '\u{05F2}', "HEBREW LIGATURE YIDDISH DOUBLE YOD", false),
];
