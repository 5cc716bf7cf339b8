//! Shared constants: label palette, composite-label separator, drag limits
//! and the shade parameters used to render annotation regions.

/// Token joining the label names of a multi-label region.
pub const LABEL_SEPARATOR: &str = "+";

/// Column holding the flat per-sample labels when none is configured.
pub const DEFAULT_LABEL_COLUMN: &str = "Label";

/// Lower drag limit of every region.
pub const REGION_LOWER_BOUND: f64 = 0.0;
/// Upper drag limit of every region; large enough to act as "unbounded".
pub const REGION_UPPER_BOUND: f64 = 1e9;

/// Alpha of a region's fill.
pub const REGION_BASE_ALPHA: u8 = 75;
/// Alpha of a region's edge lines and hover fill.
pub const REGION_HOVER_ALPHA: u8 = 150;
/// Alpha of a region's label text.
pub const REGION_TEXT_ALPHA: u8 = 255;
/// `darker` factor applied to the base color for the hover shade.
pub const REGION_HOVER_DARKER_FACTOR: u32 = 75;
/// `darker` factor applied to the base color for the text shade.
pub const REGION_TEXT_DARKER_FACTOR: u32 = 150;

/// z-order of a region that was never raised.
pub const REGION_Z_DEFAULT: i32 = 0;
/// z-order of a region raised after its create gesture finished.
pub const REGION_Z_RAISED: i32 = 2;

/// Label colors, handed out in order and repeated once exhausted.
pub const LABEL_PALETTE: [u32; 139] = [
    0x4E79A7, 0xF28E2C, 0xE15759, 0x76B7B2, 0x59A14F, 0xEDC949, 0xAF7AA1,
    0xFF9DA7, 0x9C755F, 0xBAB0AC, 0xA9A9A9, 0x6495ED, 0xDC143C, 0x00FFFF,
    0x00008B, 0x008B8B, 0xB8860B, 0xA9A9A9, 0x006400, 0x8B008B, 0x556B2F,
    0x8B0000, 0xFF8C00, 0x9932CC, 0x8B0000, 0xE9967A, 0x8FBC8F, 0x483D8B,
    0x2F4F4F, 0x00CED1, 0x9400D3, 0xFF1493, 0x00BFFF, 0x696969, 0x696969,
    0x1E90FF, 0xB22222, 0xFFFAF0, 0x228B22, 0xFF00FF, 0xDCDCDC, 0xF8F8FF,
    0xFFD700, 0xDAA520, 0x808080, 0x008000, 0xADFF2F, 0x808080, 0xF0FFF0,
    0xFF69B4, 0xCD5C5C, 0x4B0082, 0xFFFFF0, 0xF0E68C, 0xE6E6FA, 0xFFF0F5,
    0x7CFC00, 0xFFFACD, 0xADD8E6, 0xF08080, 0xE0FFFF, 0xFAFAD2, 0xD3D3D3,
    0x90EE90, 0xD3D3D3, 0xFFB6C1, 0xFFA07A, 0x20B2AA, 0x87CEFA, 0x778899,
    0x778899, 0xB0C4DE, 0xFFFFE0, 0x00FF00, 0x32CD32, 0xFAF0E6, 0xFF00FF,
    0x800000, 0x66CDAA, 0x0000CD, 0xBA55D3, 0x9370DB, 0x3CB371, 0x7B68EE,
    0x00FA9A, 0x48D1CC, 0xC71585, 0x191970, 0xF5FFFA, 0xFFE4E1, 0xFFE4B5,
    0xFFDEAD, 0x000080, 0xFDF5E6, 0x808000, 0x6B8E23, 0xFFA500, 0xFF4500,
    0xDA70D6, 0xEEE8AA, 0x98FB98, 0xAFEEEE, 0xDB7093, 0xFFEFD5, 0xFFDAB9,
    0xCD853F, 0xFFC0CB, 0xDDA0DD, 0xB0E0E6, 0x800080, 0x663399, 0xFF0000,
    0xBC8F8F, 0x4169E1, 0x8B4513, 0xFA8072, 0xF4A460, 0x2E8B57, 0xFFF5EE,
    0xA0522D, 0xC0C0C0, 0x87CEEB, 0x6A5ACD, 0x708090, 0x708090, 0xFFFAFA,
    0x00FF7F, 0x4682B4, 0xD2B48C, 0x008080, 0xD8BFD8, 0xFF6347, 0x40E0D0,
    0xEE82EE, 0xF5DEB3, 0xFFFFFF, 0xF5F5F5, 0xFFFF00, 0x9ACD32,
];

/// Cell spellings read as "no label" when no settings override them
/// (the usual NA spellings written by pandas, R and spreadsheets).
pub const DEFAULT_MISSING_VALUES: [&str; 19] = [
    "", "NA", "N/A", "n/a", "<NA>", "#NA", "#N/A", "#N/A N/A", "NaN", "-NaN", "nan", "-nan",
    "null", "NULL", "None", "1.#IND", "-1.#IND", "1.#QNAN", "-1.#QNAN",
];
