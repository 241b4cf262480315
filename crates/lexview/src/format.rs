//! Text format flags.
//!
//! The editor serializes inline styles as a single integer bitmask on each
//! text node. The bit values are the Lexical editor's own constants.

use serde::{Deserialize, Deserializer};

/// Bold
pub const IS_BOLD: u32 = 1;
/// Italic
pub const IS_ITALIC: u32 = 1 << 1;
/// Strikethrough
pub const IS_STRIKETHROUGH: u32 = 1 << 2;
/// Underline
pub const IS_UNDERLINE: u32 = 1 << 3;
/// Inline code
pub const IS_CODE: u32 = 1 << 4;
/// Subscript
pub const IS_SUBSCRIPT: u32 = 1 << 5;
/// Superscript
pub const IS_SUPERSCRIPT: u32 = 1 << 6;

/// Inline text styles, decoded once from the serialized bitmask.
///
/// The flags are independent and cumulative: every set flag is reflected in
/// the rendered wrapping, not just the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub subscript: bool,
    pub superscript: bool,
    pub code: bool,
}

impl TextFormat {
    /// Decode a format bitmask
    pub fn from_bits(bits: u32) -> Self {
        Self {
            bold: bits & IS_BOLD != 0,
            italic: bits & IS_ITALIC != 0,
            underline: bits & IS_UNDERLINE != 0,
            strikethrough: bits & IS_STRIKETHROUGH != 0,
            subscript: bits & IS_SUBSCRIPT != 0,
            superscript: bits & IS_SUPERSCRIPT != 0,
            code: bits & IS_CODE != 0,
        }
    }

    /// Check if no styles are set
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// Lenient `format` field decoder: an absent, non-integer or negative value
/// carries no flags.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<TextFormat, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .map(|bits| TextFormat::from_bits(bits as u32))
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let format = TextFormat::from_bits(0);
        assert!(format.is_plain());
    }

    #[test]
    fn test_single_flags() {
        assert!(TextFormat::from_bits(IS_BOLD).bold);
        assert!(TextFormat::from_bits(IS_ITALIC).italic);
        assert!(TextFormat::from_bits(IS_STRIKETHROUGH).strikethrough);
        assert!(TextFormat::from_bits(IS_UNDERLINE).underline);
        assert!(TextFormat::from_bits(IS_CODE).code);
        assert!(TextFormat::from_bits(IS_SUBSCRIPT).subscript);
        assert!(TextFormat::from_bits(IS_SUPERSCRIPT).superscript);
    }

    #[test]
    fn test_flags_are_cumulative() {
        let format = TextFormat::from_bits(IS_BOLD | IS_ITALIC | IS_CODE);
        assert!(format.bold);
        assert!(format.italic);
        assert!(format.code);
        assert!(!format.underline);
        assert!(!format.is_plain());
    }

    #[test]
    fn test_all_flags() {
        let all = IS_BOLD
            | IS_ITALIC
            | IS_STRIKETHROUGH
            | IS_UNDERLINE
            | IS_CODE
            | IS_SUBSCRIPT
            | IS_SUPERSCRIPT;
        let format = TextFormat::from_bits(all);
        assert_eq!(
            format,
            TextFormat {
                bold: true,
                italic: true,
                underline: true,
                strikethrough: true,
                subscript: true,
                superscript: true,
                code: true,
            }
        );
    }
}
