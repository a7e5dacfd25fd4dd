//! Basic (`N`) and extended (`Q`) Cyrillic.

use crate::charset::Row;

/// Basic Cyrillic, final byte `N`.
pub(crate) const BASIC_CYRILLIC: &[Row] = &[
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
    (0x40, '\u{044E}', "CYRILLIC SMALL LETTER YU", false),
    (0x41, '\u{0430}', "CYRILLIC SMALL LETTER A", false),
    (0x42, '\u{0431}', "CYRILLIC SMALL LETTER BE", false),
    (0x43, '\u{0446}', "CYRILLIC SMALL LETTER TSE", false),
    (0x44, '\u{0434}', "CYRILLIC SMALL LETTER DE", false),
    (0x45, '\u{0435}', "CYRILLIC SMALL LETTER IE", false),
    (0x46, '\u{0444}', "CYRILLIC SMALL LETTER EF", false),
    (0x47, '\u{0433}', "CYRILLIC SMALL LETTER GHE", false),
    (0x48, '\u{0445}', "CYRILLIC SMALL LETTER HA", false),
    (0x49, '\u{0438}', "CYRILLIC SMALL LETTER I", false),
    (0x4A, '\u{0439}', "CYRILLIC SMALL LETTER SHORT I", false),
    (0x4B, '\u{043A}', "CYRILLIC SMALL LETTER KA", false),
    (0x4C, '\u{043B}', "CYRILLIC SMALL LETTER EL", false),
    (0x4D, '\u{043C}', "CYRILLIC SMALL LETTER EM", false),
    (0x4E, '\u{043D}', "CYRILLIC SMALL LETTER EN", false),
    (0x4F, '\u{043E}', "CYRILLIC SMALL LETTER O", false),
    (0x50, '\u{043F}', "CYRILLIC SMALL LETTER PE", false),
    (0x51, '\u{044F}', "CYRILLIC SMALL LETTER YA", false),
    (0x52, '\u{0440}', "CYRILLIC SMALL LETTER ER", false),
    (0x53, '\u{0441}', "CYRILLIC SMALL LETTER ES", false),
    (0x54, '\u{0442}', "CYRILLIC SMALL LETTER TE", false),
    (0x55, '\u{0443}', "CYRILLIC SMALL LETTER U", false),
    (0x56, '\u{0436}', "CYRILLIC SMALL LETTER ZHE", false),
    (0x57, '\u{0432}', "CYRILLIC SMALL LETTER VE", false),
    (0x58, '\u{044C}', "CYRILLIC SMALL LETTER SOFT SIGN", false),
    (0x59, '\u{044B}', "CYRILLIC SMALL LETTER YERU", false),
    (0x5A, '\u{0437}', "CYRILLIC SMALL LETTER ZE", false),
    (0x5B, '\u{0448}', "CYRILLIC SMALL LETTER SHA", false),
    (0x5C, '\u{044D}', "CYRILLIC SMALL LETTER E", false),
    (0x5D, '\u{0449}', "CYRILLIC SMALL LETTER SHCHA", false),
    (0x5E, '\u{0447}', "CYRILLIC SMALL LETTER CHE", false),
    (0x5F, '\u{044A}', "CYRILLIC SMALL LETTER HARD SIGN", false),
    (0x60, '\u{042E}', "CYRILLIC CAPITAL LETTER YU", false),
    (0x61, '\u{0410}', "CYRILLIC CAPITAL LETTER A", false),
    (0x62, '\u{0411}', "CYRILLIC CAPITAL LETTER BE", false),
    (0x63, '\u{0426}', "CYRILLIC CAPITAL LETTER TSE", false),
    (0x64, '\u{0414}', "CYRILLIC CAPITAL LETTER DE", false),
    (0x65, '\u{0415}', "CYRILLIC CAPITAL LETTER IE", false),
    (0x66, '\u{0424}', "CYRILLIC CAPITAL LETTER EF", false),
    (0x67, '\u{0413}', "CYRILLIC CAPITAL LETTER GHE", false),
    (0x68, '\u{0425}', "CYRILLIC CAPITAL LETTER HA", false),
    (0x69, '\u{0418}', "CYRILLIC CAPITAL LETTER I", false),
    (0x6A, '\u{0419}', "CYRILLIC CAPITAL LETTER SHORT I", false),
    (0x6B, '\u{041A}', "CYRILLIC CAPITAL LETTER KA", false),
    (0x6C, '\u{041B}', "CYRILLIC CAPITAL LETTER EL", false),
    (0x6D, '\u{041C}', "CYRILLIC CAPITAL LETTER EM", false),
    (0x6E, '\u{041D}', "CYRILLIC CAPITAL LETTER EN", false),
    (0x6F, '\u{041E}', "CYRILLIC CAPITAL LETTER O", false),
    (0x70, '\u{041F}', "CYRILLIC CAPITAL LETTER PE", false),
    (0x71, '\u{042F}', "CYRILLIC CAPITAL LETTER YA", false),
    (0x72, '\u{0420}', "CYRILLIC CAPITAL LETTER ER", false),
    (0x73, '\u{0421}', "CYRILLIC CAPITAL LETTER ES", false),
    (0x74, '\u{0422}', "CYRILLIC CAPITAL LETTER TE", false),
    (0x75, '\u{0423}', "CYRILLIC CAPITAL LETTER U", false),
    (0x76, '\u{0416}', "CYRILLIC CAPITAL LETTER ZHE", false),
    (0x77, '\u{0412}', "CYRILLIC CAPITAL LETTER VE", false),
    (0x78, '\u{042C}', "CYRILLIC CAPITAL LETTER SOFT SIGN", false),
    (0x79, '\u{042B}', "CYRILLIC CAPITAL LETTER YERU", false),
    (0x7A, '\u{0417}', "CYRILLIC CAPITAL LETTER ZE", false),
    (0x7B, '\u{0428}', "CYRILLIC CAPITAL LETTER SHA", false),
    (0x7C, '\u{042D}', "CYRILLIC CAPITAL LETTER E", false),
    (0x7D, '\u{0429}', "CYRILLIC CAPITAL LETTER SHCHA", false),
    (0x7E, '\u{0427}', "CYRILLIC CAPITAL LETTER CHE", false),
];

/// Extended Cyrillic, final byte `Q`.
pub(crate) const EXTENDED_CYRILLIC: &[Row] = &[
    (0x40, '\u{0491}', "CYRILLIC SMALL LETTER GHE WITH UPTURN", false),
    (0x41, '\u{0452}', "CYRILLIC SMALL LETTER DJE", false),
    (0x42, '\u{0453}', "CYRILLIC SMALL LETTER GJE", false),
    (0x43, '\u{0454}', "CYRILLIC SMALL LETTER UKRAINIAN IE", false),
    (0x44, '\u{0451}', "CYRILLIC SMALL LETTER IO", false),
    (0x45, '\u{0455}', "CYRILLIC SMALL LETTER DZE", false),
    (0x46, '\u{0456}', "CYRILLIC SMALL LETTER BYELORUSSIAN-UKRAINIAN I", false),
    (0x47, '\u{0457}', "CYRILLIC SMALL LETTER YI", false),
    (0x48, '\u{0458}', "CYRILLIC SMALL LETTER JE", false),
    (0x49, '\u{0459}', "CYRILLIC SMALL LETTER LJE", false),
    (0x4A, '\u{045A}', "CYRILLIC SMALL LETTER NJE", false),
    (0x4B, '\u{045B}', "CYRILLIC SMALL LETTER TSHE", false),
    (0x4C, '\u{045C}', "CYRILLIC SMALL LETTER KJE", false),
    (0x4D, '\u{045E}', "CYRILLIC SMALL LETTER SHORT U", false),
    (0x4E, '\u{045F}', "CYRILLIC SMALL LETTER DZHE", false),
    (0x50, '\u{0463}', "CYRILLIC SMALL LETTER YAT", false),
    (0x51, '\u{0473}', "CYRILLIC SMALL LETTER FITA", false),
    (0x52, '\u{0475}', "CYRILLIC SMALL LETTER IZHITSA", false),
    (0x53, '\u{046B}', "CYRILLIC SMALL LETTER BIG YUS", false),
    (0x5B, '\u{005B}', "LEFT SQUARE BRACKET", false),
    (0x5D, '\u{005D}', "RIGHT SQUARE BRACKET", false),
    (0x5F, '\u{005F}', "LOW LINE", false),
    (0x60, '\u{0490}', "CYRILLIC CAPITAL LETTER GHE WITH UPTURN", false),
    (0x61, '\u{0402}', "CYRILLIC CAPITAL LETTER DJE", false),
    (0x62, '\u{0403}', "CYRILLIC CAPITAL LETTER GJE", false),
    (0x63, '\u{0404}', "CYRILLIC CAPITAL LETTER UKRAINIAN IE", false),
    (0x64, '\u{0401}', "CYRILLIC CAPITAL LETTER IO", false),
    (0x65, '\u{0405}', "CYRILLIC CAPITAL LETTER DZE", false),
    (0x66, '\u{0406}', "CYRILLIC CAPITAL LETTER BYELORUSSIAN-UKRAINIAN I", false),
    (0x67, '\u{0407}', "CYRILLIC CAPITAL LETTER YI", false),
    (0x68, '\u{0408}', "CYRILLIC CAPITAL LETTER JE", false),
    (0x69, '\u{0409}', "CYRILLIC CAPITAL LETTER LJE", false),
    (0x6A, '\u{040A}', "CYRILLIC CAPITAL LETTER NJE", false),
    (0x6B, '\u{040B}', "CYRILLIC CAPITAL LETTER TSHE", false),
    (0x6C, '\u{040C}', "CYRILLIC CAPITAL LETTER KJE", false),
    (0x6D, '\u{040E}', "CYRILLIC CAPITAL LETTER SHORT U", false),
    (0x6E, '\u{040F}', "CYRILLIC CAPITAL LETTER DZHE", false),
    (0x6F, '\u{042A}', "CYRILLIC CAPITAL LETTER HARD SIGN", false),
    (0x70, '\u{0462}', "CYRILLIC CAPITAL LETTER YAT", false),
    (0x71, '\u{0472}', "CYRILLIC CAPITAL LETTER FITA", false),
    (0x72, '\u{0474}', "CYRILLIC CAPITAL LETTER IZHITSA", false),
    (0x73, '\u{046A}', "CYRILLIC CAPITAL LETTER BIG YUS", false),
];
