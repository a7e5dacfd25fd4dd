//! Latin and special-purpose sets that are always loaded.

use crate::charset::Row;

/// Basic Latin (ASCII), final byte `B`.
pub(crate) const BASIC_LATIN: &[Row] = &[
    (0x20, '\u{0020}', "SPACE", false),
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
    (0x2D, '\u{002D}', "HYPHEN-MINUS", false),
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
    (0x40, '\u{0040}', "COMMERCIAL AT", false),
    (0x41, '\u{0041}', "LATIN CAPITAL LETTER A", false),
    (0x42, '\u{0042}', "LATIN CAPITAL LETTER B", false),
    (0x43, '\u{0043}', "LATIN CAPITAL LETTER C", false),
    (0x44, '\u{0044}', "LATIN CAPITAL LETTER D", false),
    (0x45, '\u{0045}', "LATIN CAPITAL LETTER E", false),
    (0x46, '\u{0046}', "LATIN CAPITAL LETTER F", false),
    (0x47, '\u{0047}', "LATIN CAPITAL LETTER G", false),
    (0x48, '\u{0048}', "LATIN CAPITAL LETTER H", false),
    (0x49, '\u{0049}', "LATIN CAPITAL LETTER I", false),
    (0x4A, '\u{004A}', "LATIN CAPITAL LETTER J", false),
    (0x4B, '\u{004B}', "LATIN CAPITAL LETTER K", false),
    (0x4C, '\u{004C}', "LATIN CAPITAL LETTER L", false),
    (0x4D, '\u{004D}', "LATIN CAPITAL LETTER M", false),
    (0x4E, '\u{004E}', "LATIN CAPITAL LETTER N", false),
    (0x4F, '\u{004F}', "LATIN CAPITAL LETTER O", false),
    (0x50, '\u{0050}', "LATIN CAPITAL LETTER P", false),
    (0x51, '\u{0051}', "LATIN CAPITAL LETTER Q", false),
    (0x52, '\u{0052}', "LATIN CAPITAL LETTER R", false),
    (0x53, '\u{0053}', "LATIN CAPITAL LETTER S", false),
    (0x54, '\u{0054}', "LATIN CAPITAL LETTER T", false),
    (0x55, '\u{0055}', "LATIN CAPITAL LETTER U", false),
    (0x56, '\u{0056}', "LATIN CAPITAL LETTER V", false),
    (0x57, '\u{0057}', "LATIN CAPITAL LETTER W", false),
    (0x58, '\u{0058}', "LATIN CAPITAL LETTER X", false),
    (0x59, '\u{0059}', "LATIN CAPITAL LETTER Y", false),
    (0x5A, '\u{005A}', "LATIN CAPITAL LETTER Z", false),
    (0x5B, '\u{005B}', "LEFT SQUARE BRACKET", false),
    (0x5C, '\u{005C}', "REVERSE SOLIDUS", false),
    (0x5D, '\u{005D}', "RIGHT SQUARE BRACKET", false),
    (0x5E, '\u{005E}', "CIRCUMFLEX ACCENT", false),
    (0x5F, '\u{005F}', "LOW LINE", false),
    (0x60, '\u{0060}', "GRAVE ACCENT", false),
    (0x61, '\u{0061}', "LATIN SMALL LETTER A", false),
    (0x62, '\u{0062}', "LATIN SMALL LETTER B", false),
    (0x63, '\u{0063}', "LATIN SMALL LETTER C", false),
    (0x64, '\u{0064}', "LATIN SMALL LETTER D", false),
    (0x65, '\u{0065}', "LATIN SMALL LETTER E", false),
    (0x66, '\u{0066}', "LATIN SMALL LETTER F", false),
    (0x67, '\u{0067}', "LATIN SMALL LETTER G", false),
    (0x68, '\u{0068}', "LATIN SMALL LETTER H", false),
    (0x69, '\u{0069}', "LATIN SMALL LETTER I", false),
    (0x6A, '\u{006A}', "LATIN SMALL LETTER J", false),
    (0x6B, '\u{006B}', "LATIN SMALL LETTER K", false),
    (0x6C, '\u{006C}', "LATIN SMALL LETTER L", false),
    (0x6D, '\u{006D}', "LATIN SMALL LETTER M", false),
    (0x6E, '\u{006E}', "LATIN SMALL LETTER N", false),
    (0x6F, '\u{006F}', "LATIN SMALL LETTER O", false),
    (0x70, '\u{0070}', "LATIN SMALL LETTER P", false),
    (0x71, '\u{0071}', "LATIN SMALL LETTER Q", false),
    (0x72, '\u{0072}', "LATIN SMALL LETTER R", false),
    (0x73, '\u{0073}', "LATIN SMALL LETTER S", false),
    (0x74, '\u{0074}', "LATIN SMALL LETTER T", false),
    (0x75, '\u{0075}', "LATIN SMALL LETTER U", false),
    (0x76, '\u{0076}', "LATIN SMALL LETTER V", false),
    (0x77, '\u{0077}', "LATIN SMALL LETTER W", false),
    (0x78, '\u{0078}', "LATIN SMALL LETTER X", false),
    (0x79, '\u{0079}', "LATIN SMALL LETTER Y", false),
    (0x7A, '\u{007A}', "LATIN SMALL LETTER Z", false),
    (0x7B, '\u{007B}', "LEFT CURLY BRACKET", false),
    (0x7C, '\u{007C}', "VERTICAL LINE", false),
    (0x7D, '\u{007D}', "RIGHT CURLY BRACKET", false),
    (0x7E, '\u{007E}', "TILDE", false),
];

/// Extended Latin (ANSEL), final byte `E`. Codes 0xE0-0xFE are combining.
pub(crate) const ANSEL: &[Row] = &[
    (0xA1, '\u{0141}', "LATIN CAPITAL LETTER L WITH STROKE", false),
    (0xA2, '\u{00D8}', "LATIN CAPITAL LETTER O WITH STROKE", false),
    (0xA3, '\u{0110}', "LATIN CAPITAL LETTER D WITH STROKE", false),
    (0xA4, '\u{00DE}', "LATIN CAPITAL LETTER THORN", false),
    (0xA5, '\u{00C6}', "LATIN CAPITAL LETTER AE", false),
    (0xA6, '\u{0152}', "LATIN CAPITAL LIGATURE OE", false),
    (0xA7, '\u{02B9}', "MODIFIER LETTER PRIME", false),
    (0xA8, '\u{00B7}', "MIDDLE DOT", false),
    (0xA9, '\u{266D}', "MUSIC FLAT SIGN", false),
    (0xAA, '\u{00AE}', "REGISTERED SIGN", false),
    (0xAB, '\u{00B1}', "PLUS-MINUS SIGN", false),
    (0xAC, '\u{01A0}', "LATIN CAPITAL LETTER O WITH HORN", false),
    (0xAD, '\u{01AF}', "LATIN CAPITAL LETTER U WITH HORN", false),
    (0xAE, '\u{02BC}', "MODIFIER LETTER APOSTROPHE", false),
    (0xB0, '\u{02BB}', "MODIFIER LETTER TURNED COMMA", false),
    (0xB1, '\u{0142}', "LATIN SMALL LETTER L WITH STROKE", false),
    (0xB2, '\u{00F8}', "LATIN SMALL LETTER O WITH STROKE", false),
    (0xB3, '\u{0111}', "LATIN SMALL LETTER D WITH STROKE", false),
    (0xB4, '\u{00FE}', "LATIN SMALL LETTER THORN", false),
    (0xB5, '\u{00E6}', "LATIN SMALL LETTER AE", false),
    (0xB6, '\u{0153}', "LATIN SMALL LIGATURE OE", false),
    (0xB7, '\u{02BA}', "MODIFIER LETTER DOUBLE PRIME", false),
    (0xB8, '\u{0131}', "LATIN SMALL LETTER DOTLESS I", false),
    (0xB9, '\u{00A3}', "POUND SIGN", false),
    (0xBA, '\u{00F0}', "LATIN SMALL LETTER ETH", false),
    (0xBC, '\u{01A1}', "LATIN SMALL LETTER O WITH HORN", false),
    (0xBD, '\u{01B0}', "LATIN SMALL LETTER U WITH HORN", false),
    (0xC0, '\u{00B0}', "DEGREE SIGN", false),
    (0xC1, '\u{2113}', "SCRIPT SMALL L", false),
    (0xC2, '\u{2117}', "SOUND RECORDING COPYRIGHT", false),
    (0xC3, '\u{00A9}', "COPYRIGHT SIGN", false),
    (0xC4, '\u{266F}', "MUSIC SHARP SIGN", false),
    (0xC5, '\u{00BF}', "INVERTED QUESTION MARK", false),
    (0xC6, '\u{00A1}', "INVERTED EXCLAMATION MARK", false),
    (0xC7, '\u{00DF}', "LATIN SMALL LETTER SHARP S", false),
    (0xC8, '\u{20AC}', "EURO SIGN", false),
    (0xE0, '\u{0309}', "COMBINING HOOK ABOVE", true),
    (0xE1, '\u{0300}', "COMBINING GRAVE ACCENT", true),
    (0xE2, '\u{0301}', "COMBINING ACUTE ACCENT", true),
    (0xE3, '\u{0302}', "COMBINING CIRCUMFLEX ACCENT", true),
    (0xE4, '\u{0303}', "COMBINING TILDE", true),
    (0xE5, '\u{0304}', "COMBINING MACRON", true),
    (0xE6, '\u{0306}', "COMBINING BREVE", true),
    (0xE7, '\u{0307}', "COMBINING DOT ABOVE", true),
    (0xE8, '\u{0308}', "COMBINING DIAERESIS", true),
    (0xE9, '\u{030C}', "COMBINING CARON", true),
    (0xEA, '\u{030A}', "COMBINING RING ABOVE", true),
    (0xEB, '\u{FE20}', "COMBINING LIGATURE LEFT HALF", true),
    (0xEC, '\u{FE21}', "COMBINING LIGATURE RIGHT HALF", true),
    (0xED, '\u{0315}', "COMBINING COMMA ABOVE RIGHT", true),
    (0xEE, '\u{030B}', "COMBINING DOUBLE ACUTE ACCENT", true),
    (0xEF, '\u{0310}', "COMBINING CANDRABINDU", true),
    (0xF0, '\u{0327}', "COMBINING CEDILLA", true),
    (0xF1, '\u{0328}', "COMBINING OGONEK", true),
    (0xF2, '\u{0323}', "COMBINING DOT BELOW", true),
    (0xF3, '\u{0324}', "COMBINING DIAERESIS BELOW", true),
    (0xF4, '\u{0325}', "COMBINING RING BELOW", true),
    (0xF5, '\u{0333}', "COMBINING DOUBLE LOW LINE", true),
    (0xF6, '\u{0332}', "COMBINING LOW LINE", true),
    (0xF7, '\u{0326}', "COMBINING COMMA BELOW", true),
    (0xF8, '\u{031C}', "COMBINING LEFT HALF RING BELOW", true),
    (0xF9, '\u{032E}', "COMBINING BREVE BELOW", true),
    (0xFA, '\u{FE22}', "COMBINING DOUBLE TILDE LEFT HALF", true),
    (0xFB, '\u{FE23}', "COMBINING DOUBLE TILDE RIGHT HALF", true),
    (0xFE, '\u{0313}', "COMBINING COMMA ABOVE", true),
];

/// C0 controls and the MARC-specific C1 controls (non-sort markers, joiners).
pub(crate) const CONTROLS: &[Row] = &[
    (0x00, '\u{0000}', "NULL", false),
    (0x01, '\u{0001}', "START OF HEADING", false),
    (0x02, '\u{0002}', "START OF TEXT", false),
    (0x03, '\u{0003}', "END OF TEXT", false),
    (0x04, '\u{0004}', "END OF TRANSMISSION", false),
    (0x05, '\u{0005}', "ENQUIRY", false),
    (0x06, '\u{0006}', "ACKNOWLEDGE", false),
    (0x07, '\u{0007}', "BELL", false),
    (0x08, '\u{0008}', "BACKSPACE", false),
    (0x09, '\u{0009}', "CHARACTER TABULATION", false),
    (0x0A, '\u{000A}', "LINE FEED", false),
    (0x0B, '\u{000B}', "LINE TABULATION", false),
    (0x0C, '\u{000C}', "FORM FEED", false),
    (0x0D, '\u{000D}', "CARRIAGE RETURN", false),
    (0x0E, '\u{000E}', "SHIFT OUT", false),
    (0x0F, '\u{000F}', "SHIFT IN", false),
    (0x10, '\u{0010}', "DATA LINK ESCAPE", false),
    (0x11, '\u{0011}', "DEVICE CONTROL ONE", false),
    (0x12, '\u{0012}', "DEVICE CONTROL TWO", false),
    (0x13, '\u{0013}', "DEVICE CONTROL THREE", false),
    (0x14, '\u{0014}', "DEVICE CONTROL FOUR", false),
    (0x15, '\u{0015}', "NEGATIVE ACKNOWLEDGE", false),
    (0x16, '\u{0016}', "SYNCHRONOUS IDLE", false),
    (0x17, '\u{0017}', "END OF TRANSMISSION BLOCK", false),
    (0x18, '\u{0018}', "CANCEL", false),
    (0x19, '\u{0019}', "END OF MEDIUM", false),
    (0x1A, '\u{001A}', "SUBSTITUTE", false),
    (0x1B, '\u{001B}', "ESCAPE", false),
    (0x1C, '\u{001C}', "INFORMATION SEPARATOR FOUR", false),
    (0x1D, '\u{001D}', "INFORMATION SEPARATOR THREE", false),
    (0x1E, '\u{001E}', "INFORMATION SEPARATOR TWO", false),
    (0x1F, '\u{001F}', "INFORMATION SEPARATOR ONE", false),
    (0x88, '\u{0098}', "NON-SORT BEGIN / START OF STRING", false),
    (0x89, '\u{009C}', "NON-SORT END / STRING TERMINATOR", false),
    (0x8D, '\u{200D}', "ZERO WIDTH JOINER", false),
    (0x8E, '\u{200C}', "ZERO WIDTH NON-JOINER", false),
];

/// Subscripts, selected with `ESC b`.
pub(crate) const SUBSCRIPTS: &[Row] = &[
    (0x28, '\u{208D}', "SUBSCRIPT LEFT PARENTHESIS", false),
    (0x29, '\u{208E}', "SUBSCRIPT RIGHT PARENTHESIS", false),
    (0x2B, '\u{208A}', "SUBSCRIPT PLUS SIGN", false),
    (0x2D, '\u{208B}', "SUBSCRIPT MINUS", false),
    (0x30, '\u{2080}', "SUBSCRIPT ZERO", false),
    (0x31, '\u{2081}', "SUBSCRIPT ONE", false),
    (0x32, '\u{2082}', "SUBSCRIPT TWO", false),
    (0x33, '\u{2083}', "SUBSCRIPT THREE", false),
    (0x34, '\u{2084}', "SUBSCRIPT FOUR", false),
    (0x35, '\u{2085}', "SUBSCRIPT FIVE", false),
    (0x36, '\u{2086}', "SUBSCRIPT SIX", false),
    (0x37, '\u{2087}', "SUBSCRIPT SEVEN", false),
    (0x38, '\u{2088}', "SUBSCRIPT EIGHT", false),
    (0x39, '\u{2089}', "SUBSCRIPT NINE", false),
];

/// Superscripts, selected with `ESC p`.
pub(crate) const SUPERSCRIPTS: &[Row] = &[
    (0x28, '\u{207D}', "SUPERSCRIPT LEFT PARENTHESIS", false),
    (0x29, '\u{207E}', "SUPERSCRIPT RIGHT PARENTHESIS", false),
    (0x2B, '\u{207A}', "SUPERSCRIPT PLUS SIGN", false),
    (0x2D, '\u{207B}', "SUPERSCRIPT MINUS", false),
    (0x30, '\u{2070}', "SUPERSCRIPT ZERO", false),
    (0x31, '\u{00B9}', "SUPERSCRIPT ONE", false),
    (0x32, '\u{00B2}', "SUPERSCRIPT TWO", false),
    (0x33, '\u{00B3}', "SUPERSCRIPT THREE", false),
    (0x34, '\u{2074}', "SUPERSCRIPT FOUR", false),
    (0x35, '\u{2075}', "SUPERSCRIPT FIVE", false),
    (0x36, '\u{2076}', "SUPERSCRIPT SIX", false),
    (0x37, '\u{2077}', "SUPERSCRIPT SEVEN", false),
    (0x38, '\u{2078}', "SUPERSCRIPT EIGHT", false),
    (0x39, '\u{2079}', "SUPERSCRIPT NINE", false),
];

/// Greek symbols, selected with `ESC g`.
pub(crate) const GREEK_SYMBOLS: &[Row] = &[
    (0x61, '\u{03B1}', "GREEK SMALL LETTER ALPHA", false),
    (0x62, '\u{03B2}', "GREEK SMALL LETTER BETA", false),
    (0x63, '\u{03B3}', "GREEK SMALL LETTER GAMMA", false),
];
