use serde::{Deserialize, Serialize};

/// Weight of one of the built-in faces. The core Helvetica family only
/// distinguishes regular from bold, so there is no numeric scale here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Oblique,
}
