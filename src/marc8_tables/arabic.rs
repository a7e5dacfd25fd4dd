//! Basic (`3`) and extended (`4`) Arabic.

use crate::charset::Row;

/// Basic Arabic, final byte `3`. Harakat 0x6B-0x72 and 0x74 are combining.
pub(crate) const BASIC_ARABIC: &[Row] = &[
    (0x21, '\u{0021}', "EXCLAMATION MARK", false),
    (0x22, '\u{0022}', "QUOTATION MARK", false),
    (0x23, '\u{0023}', "NUMBER SIGN", false),
    (0x24, '\u{0024}', "DOLLAR SIGN", false),
    (0x25, '\u{066A}', "ARABIC PERCENT SIGN", false),
    (0x26, '\u{0026}', "AMPERSAND", false),
    (0x27, '\u{0027}', "APOSTROPHE", false),
    (0x28, '\u{0028}', "LEFT PARENTHESIS", false),
    (0x29, '\u{0029}', "RIGHT PARENTHESIS", false),
    (0x2A, '\u{066D}', "ARABIC FIVE POINTED STAR", false),
    (0x2B, '\u{002B}', "PLUS SIGN", false),
    (0x2C, '\u{060C}', "ARABIC COMMA", false),
    (0x2D, '\u{002D}', "HYPHEN-MINUS", false),
    (0x2E, '\u{002E}', "FULL STOP", false),
    (0x2F, '\u{002F}', "SOLIDUS", false),
    (0x30, '\u{0660}', "ARABIC-INDIC DIGIT ZERO", false),
    (0x31, '\u{0661}', "ARABIC-INDIC DIGIT ONE", false),
    (0x32, '\u{0662}', "ARABIC-INDIC DIGIT TWO", false),
    (0x33, '\u{0663}', "ARABIC-INDIC DIGIT THREE", false),
    (0x34, '\u{0664}', "ARABIC-INDIC DIGIT FOUR", false),
    (0x35, '\u{0665}', "ARABIC-INDIC DIGIT FIVE", false),
    (0x36, '\u{0666}', "ARABIC-INDIC DIGIT SIX", false),
    (0x37, '\u{0667}', "ARABIC-INDIC DIGIT SEVEN", false),
    (0x38, '\u{0668}', "ARABIC-INDIC DIGIT EIGHT", false),
    (0x39, '\u{0669}', "ARABIC-INDIC DIGIT NINE", false),
    (0x3A, '\u{003A}', "COLON", false),
    (0x3B, '\u{061B}', "ARABIC SEMICOLON", false),
    (0x3C, '\u{003C}', "LESS-THAN SIGN", false),
    (0x3D, '\u{003D}', "EQUALS SIGN", false),
    (0x3E, '\u{003E}', "GREATER-THAN SIGN", false),
    (0x3F, '\u{061F}', "ARABIC QUESTION MARK", false),
    (0x41, '\u{0621}', "ARABIC LETTER HAMZA", false),
    (0x42, '\u{0622}', "ARABIC LETTER ALEF WITH MADDA ABOVE", false),
    (0x43, '\u{0623}', "ARABIC LETTER ALEF WITH HAMZA ABOVE", false),
    (0x44, '\u{0624}', "ARABIC LETTER WAW WITH HAMZA ABOVE", false),
    (0x45, '\u{0625}', "ARABIC LETTER ALEF WITH HAMZA BELOW", false),
    (0x46, '\u{0626}', "ARABIC LETTER YEH WITH HAMZA ABOVE", false),
    (0x47, '\u{0627}', "ARABIC LETTER ALEF", false),
    (0x48, '\u{0628}', "ARABIC LETTER BEH", false),
    (0x49, '\u{0629}', "ARABIC LETTER TEH MARBUTA", false),
    (0x4A, '\u{062A}', "ARABIC LETTER TEH", false),
    (0x4B, '\u{062B}', "ARABIC LETTER THEH", false),
    (0x4C, '\u{062C}', "ARABIC LETTER JEEM", false),
    (0x4D, '\u{062D}', "ARABIC LETTER HAH", false),
    (0x4E, '\u{062E}', "ARABIC LETTER KHAH", false),
    (0x4F, '\u{062F}', "ARABIC LETTER DAL", false),
    (0x50, '\u{0630}', "ARABIC LETTER THAL", false),
    (0x51, '\u{0631}', "ARABIC LETTER REH", false),
    (0x52, '\u{0632}', "ARABIC LETTER ZAIN", false),
    (0x53, '\u{0633}', "ARABIC LETTER SEEN", false),
    (0x54, '\u{0634}', "ARABIC LETTER SHEEN", false),
    (0x55, '\u{0635}', "ARABIC LETTER SAD", false),
    (0x56, '\u{0636}', "ARABIC LETTER DAD", false),
    (0x57, '\u{0637}', "ARABIC LETTER TAH", false),
    (0x58, '\u{0638}', "ARABIC LETTER ZAH", false),
    (0x59, '\u{0639}', "ARABIC LETTER AIN", false),
    (0x5A, '\u{063A}', "ARABIC LETTER GHAIN", false),
    (0x5B, '\u{005B}', "LEFT SQUARE BRACKET", false),
    (0x5D, '\u{005D}', "RIGHT SQUARE BRACKET", false),
    (0x60, '\u{0640}', "ARABIC TATWEEL", false),
    (0x61, '\u{0641}', "ARABIC LETTER FEH", false),
    (0x62, '\u{0642}', "ARABIC LETTER QAF", false),
    (0x63, '\u{0643}', "ARABIC LETTER KAF", false),
    (0x64, '\u{0644}', "ARABIC LETTER LAM", false),
    (0x65, '\u{0645}', "ARABIC LETTER MEEM", false),
    (0x66, '\u{0646}', "ARABIC LETTER NOON", false),
    (0x67, '\u{0647}', "ARABIC LETTER HEH", false),
    (0x68, '\u{0648}', "ARABIC LETTER WAW", false),
    (0x69, '\u{0649}', "ARABIC LETTER ALEF MAKSURA", false),
    (0x6A, '\u{064A}', "ARABIC LETTER YEH", false),
    (0x6B, '\u{064B}', "ARABIC FATHATAN", true),
    (0x6C, '\u{064C}', "ARABIC DAMMATAN", true),
    (0x6D, '\u{064D}', "ARABIC KASRATAN", true),
    (0x6E, '\u{064E}', "ARABIC FATHA", true),
    (0x6F, '\u{064F}', "ARABIC DAMMA", true),
    (0x70, '\u{0650}', "ARABIC KASRA", true),
    (0x71, '\u{0651}', "ARABIC SHADDA", true),
    (0x72, '\u{0652}', "ARABIC SUKUN", true),
    (0x73, '\u{0671}', "ARABIC LETTER ALEF WASLA", false),
    (0x74, '\u{0670}', "ARABIC LETTER SUPERSCRIPT ALEF", true),
    (0x78, '\u{066C}', "ARABIC THOUSANDS SEPARATOR", false),
    (0x79, '\u{201D}', "RIGHT DOUBLE QUOTATION MARK", false),
    (0x7A, '\u{201C}', "LEFT DOUBLE QUOTATION MARK", false),
];

/// Extended Arabic, final byte `4`.
pub(crate) const EXTENDED_ARABIC: &[Row] = &[
    (0x21, '\u{06FD}', "ARABIC SIGN SINDHI AMPERSAND", false),
    (0x22, '\u{0672}', "ARABIC LETTER ALEF WITH WAVY HAMZA ABOVE", false),
    (0x23, '\u{0673}', "ARABIC LETTER ALEF WITH WAVY HAMZA BELOW", false),
    (0x24, '\u{0679}', "ARABIC LETTER TTEH", false),
    (0x25, '\u{067A}', "ARABIC LETTER TTEHEH", false),
    (0x26, '\u{067B}', "ARABIC LETTER BEEH", false),
    (0x27, '\u{067C}', "ARABIC LETTER TEH WITH RING", false),
    (0x28, '\u{067D}', "ARABIC LETTER TEH WITH THREE DOTS ABOVE DOWNWARDS", false),
    (0x29, '\u{067E}', "ARABIC LETTER PEH", false),
    (0x2A, '\u{067F}', "ARABIC LETTER TEHEH", false),
    (0x2B, '\u{0680}', "ARABIC LETTER BEHEH", false),
    (0x2C, '\u{0681}', "ARABIC LETTER HAH WITH HAMZA ABOVE", false),
    (0x2D, '\u{0682}', "ARABIC LETTER HAH WITH TWO DOTS VERTICAL ABOVE", false),
    (0x2E, '\u{0683}', "ARABIC LETTER NYEH", false),
    (0x2F, '\u{0684}', "ARABIC LETTER DYEH", false),
    (0x30, '\u{0685}', "ARABIC LETTER HAH WITH THREE DOTS ABOVE", false),
    (0x31, '\u{0686}', "ARABIC LETTER TCHEH", false),
    (0x32, '\u{06BF}', "ARABIC LETTER TCHEH WITH DOT ABOVE", false),
    (0x33, '\u{0687}', "ARABIC LETTER TCHEHEH", false),
    (0x34, '\u{0688}', "ARABIC LETTER DDAL", false),
    (0x35, '\u{0689}', "ARABIC LETTER DAL WITH RING", false),
    (0x36, '\u{068A}', "ARABIC LETTER DAL WITH DOT BELOW", false),
    (0x37, '\u{068B}', "ARABIC LETTER DAL WITH DOT BELOW AND SMALL TAH", false),
    (0x38, '\u{068C}', "ARABIC LETTER DAHAL", false),
    (0x39, '\u{068D}', "ARABIC LETTER DDAHAL", false),
    (0x3A, '\u{068E}', "ARABIC LETTER DUL", false),
    (0x3B, '\u{068F}', "ARABIC LETTER DAL WITH THREE DOTS ABOVE DOWNWARDS", false),
    (0x3C, '\u{0690}', "ARABIC LETTER DAL WITH FOUR DOTS ABOVE", false),
    (0x3D, '\u{0691}', "ARABIC LETTER RREH", false),
    (0x3E, '\u{0692}', "ARABIC LETTER REH WITH SMALL V", false),
    (0x3F, '\u{0693}', "ARABIC LETTER REH WITH RING", false),
    (0x40, '\u{0694}', "ARABIC LETTER REH WITH DOT BELOW", false),
    (0x41, '\u{0695}', "ARABIC LETTER REH WITH SMALL V BELOW", false),
    (0x42, '\u{0696}', "ARABIC LETTER REH WITH DOT BELOW AND DOT ABOVE", false),
    (0x43, '\u{0697}', "ARABIC LETTER REH WITH TWO DOTS ABOVE", false),
    (0x44, '\u{0698}', "ARABIC LETTER JEH", false),
    (0x45, '\u{0699}', "ARABIC LETTER REH WITH FOUR DOTS ABOVE", false),
    (0x46, '\u{069A}', "ARABIC LETTER SEEN WITH DOT BELOW AND DOT ABOVE", false),
    (0x47, '\u{069B}', "ARABIC LETTER SEEN WITH THREE DOTS BELOW", false),
    (0x48, '\u{069C}', "ARABIC LETTER SEEN WITH THREE DOTS BELOW AND THREE DOTS ABOVE", false),
    (0x49, '\u{06FA}', "ARABIC LETTER SHEEN WITH DOT BELOW", false),
    (0x4A, '\u{069D}', "ARABIC LETTER SAD WITH TWO DOTS BELOW", false),
    (0x4B, '\u{069E}', "ARABIC LETTER SAD WITH THREE DOTS ABOVE", false),
    (0x4C, '\u{06FB}', "ARABIC LETTER DAD WITH DOT BELOW", false),
    (0x4D, '\u{069F}', "ARABIC LETTER TAH WITH THREE DOTS ABOVE", false),
    (0x4E, '\u{06A0}', "ARABIC LETTER AIN WITH THREE DOTS ABOVE", false),
    (0x4F, '\u{06FC}', "ARABIC LETTER GHAIN WITH DOT BELOW", false),
    (0x50, '\u{06A1}', "ARABIC LETTER DOTLESS FEH", false),
    (0x51, '\u{06A2}', "ARABIC LETTER FEH WITH DOT MOVED BELOW", false),
    (0x52, '\u{06A3}', "ARABIC LETTER FEH WITH DOT BELOW", false),
    (0x53, '\u{06A4}', "ARABIC LETTER VEH", false),
    (0x54, '\u{06A5}', "ARABIC LETTER FEH WITH THREE DOTS BELOW", false),
    (0x55, '\u{06A6}', "ARABIC LETTER PEHEH", false),
    (0x56, '\u{06A7}', "ARABIC LETTER QAF WITH DOT ABOVE", false),
    (0x57, '\u{06A8}', "ARABIC LETTER QAF WITH THREE DOTS ABOVE", false),
    (0x58, '\u{06A9}', "ARABIC LETTER KEHEH", false),
    (0x59, '\u{06AA}', "ARABIC LETTER SWASH KAF", false),
    (0x5A, '\u{06AB}', "ARABIC LETTER KAF WITH RING", false),
    (0x5B, '\u{06AC}', "ARABIC LETTER KAF WITH DOT ABOVE", false),
    (0x5C, '\u{06AD}', "ARABIC LETTER NG", false),
    (0x5D, '\u{06AE}', "ARABIC LETTER KAF WITH THREE DOTS BELOW", false),
    (0x5E, '\u{06AF}', "ARABIC LETTER GAF", false),
    (0x5F, '\u{06B0}', "ARABIC LETTER GAF WITH RING", false),
    (0x60, '\u{06B1}', "ARABIC LETTER NGOEH", false),
    (0x61, '\u{06B2}', "ARABIC LETTER GAF WITH TWO DOTS BELOW", false),
    (0x62, '\u{06B3}', "ARABIC LETTER GUEH", false),
    (0x63, '\u{06B4}', "ARABIC LETTER GAF WITH THREE DOTS ABOVE", false),
    (0x64, '\u{06B5}', "ARABIC LETTER LAM WITH SMALL V", false),
    (0x65, '\u{06B6}', "ARABIC LETTER LAM WITH DOT ABOVE", false),
    (0x66, '\u{06B7}', "ARABIC LETTER LAM WITH THREE DOTS ABOVE", false),
    (0x67, '\u{06B8}', "ARABIC LETTER LAM WITH THREE DOTS BELOW", false),
    (0x68, '\u{06B9}', "ARABIC LETTER NOON WITH DOT BELOW", false),
    (0x69, '\u{06BA}', "ARABIC LETTER NOON GHUNNA", false),
    (0x6A, '\u{06BB}', "ARABIC LETTER RNOON", false),
    (0x6B, '\u{06BC}', "ARABIC LETTER NOON WITH RING", false),
    (0x6C, '\u{06BD}', "ARABIC LETTER NOON WITH THREE DOTS ABOVE", false),
    (0x6D, '\u{06BE}', "ARABIC LETTER HEH DOACHASHMEE", false),
    (0x6E, '\u{06C0}', "ARABIC LETTER HEH WITH YEH ABOVE", false),
    (0x6F, '\u{06C1}', "ARABIC LETTER HEH GOAL", false),
];
