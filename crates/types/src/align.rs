use serde::{Deserialize, Serialize};

/// Horizontal alignment for cell and paragraph text.
///
/// `Justify` only applies to wrapped paragraphs; a single cell treats it as
/// `Left`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}
