//! East Asian Character Code (EACC), final byte `1`.
//!
//! Only a core subset is tabulated: ideographic punctuation, the first
//! stroke-order block of CCCII ideographs and the leading kana.

use crate::charset::Row;

/// EACC three-byte codes.
pub(crate) const EACC: &[Row] = &[
    (0x212320, '\u{3000}', "IDEOGRAPHIC SPACE", false),
    (0x212328, '\u{FF08}', "FULLWIDTH LEFT PARENTHESIS", false),
    (0x212329, '\u{FF09}', "FULLWIDTH RIGHT PARENTHESIS", false),
    (0x213021, '\u{4E00}', "CJK UNIFIED IDEOGRAPH-4E00", false),
    (0x213022, '\u{4E59}', "CJK UNIFIED IDEOGRAPH-4E59", false),
    (0x213023, '\u{4E01}', "CJK UNIFIED IDEOGRAPH-4E01", false),
    (0x213024, '\u{4E03}', "CJK UNIFIED IDEOGRAPH-4E03", false),
    (0x213025, '\u{4E43}', "CJK UNIFIED IDEOGRAPH-4E43", false),
    (0x213026, '\u{4E5D}', "CJK UNIFIED IDEOGRAPH-4E5D", false),
    (0x213027, '\u{4E86}', "CJK UNIFIED IDEOGRAPH-4E86", false),
    (0x213028, '\u{4E8C}', "CJK UNIFIED IDEOGRAPH-4E8C", false),
    (0x213029, '\u{4EBA}', "CJK UNIFIED IDEOGRAPH-4EBA", false),
    (0x21302A, '\u{513F}', "CJK UNIFIED IDEOGRAPH-513F", false),
    (0x21302B, '\u{5165}', "CJK UNIFIED IDEOGRAPH-5165", false),
    (0x21302C, '\u{516B}', "CJK UNIFIED IDEOGRAPH-516B", false),
    (0x21302D, '\u{51E0}', "CJK UNIFIED IDEOGRAPH-51E0", false),
    (0x21302E, '\u{5200}', "CJK UNIFIED IDEOGRAPH-5200", false),
    (0x21302F, '\u{5201}', "CJK UNIFIED IDEOGRAPH-5201", false),
    (0x213030, '\u{529B}', "CJK UNIFIED IDEOGRAPH-529B", false),
    (0x213031, '\u{5315}', "CJK UNIFIED IDEOGRAPH-5315", false),
    (0x213032, '\u{5341}', "CJK UNIFIED IDEOGRAPH-5341", false),
    (0x213033, '\u{535C}', "CJK UNIFIED IDEOGRAPH-535C", false),
    (0x213034, '\u{53C8}', "CJK UNIFIED IDEOGRAPH-53C8", false),
    (0x692421, '\u{3041}', "HIRAGANA LETTER SMALL A", false),
    (0x692422, '\u{3042}', "HIRAGANA LETTER A", false),
    (0x692423, '\u{3043}', "HIRAGANA LETTER SMALL I", false),
    (0x692424, '\u{3044}', "HIRAGANA LETTER I", false),
    (0x692425, '\u{3045}', "HIRAGANA LETTER SMALL U", false),
    (0x692426, '\u{3046}', "HIRAGANA LETTER U", false),
    (0x692427, '\u{3047}', "HIRAGANA LETTER SMALL E", false),
    (0x692428, '\u{3048}', "HIRAGANA LETTER E", false),
    (0x692429, '\u{3049}', "HIRAGANA LETTER SMALL O", false),
    (0x69242A, '\u{304A}', "HIRAGANA LETTER O", false),
    (0x692521, '\u{30A1}', "KATAKANA LETTER SMALL A", false),
    (0x692522, '\u{30A2}', "KATAKANA LETTER A", false),
    (0x692523, '\u{30A3}', "KATAKANA LETTER SMALL I", false),
    (0x692524, '\u{30A4}', "KATAKANA LETTER I", false),
    (0x692525, '\u{30A5}', "KATAKANA LETTER SMALL U", false),
    (0x692526, '\u{30A6}', "KATAKANA LETTER U", false),
    (0x692527, '\u{30A7}', "KATAKANA LETTER SMALL E", false),
    (0x692528, '\u{30A8}', "KATAKANA LETTER E", false),
    (0x692529, '\u{30A9}', "KATAKANA LETTER SMALL O", false),
    (0x69252A, '\u{30AA}', "KATAKANA LETTER O", false),
];
