//! Directional edge insets.
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Four-sided directional offsets. Leading/trailing follow the host's
/// layout direction rather than physical left/right.
#[derive(Deserialize, Serialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EdgeInsets {
    pub leading: f32,
    pub top: f32,
    pub trailing: f32,
    pub bottom: f32,
}

impl Hash for EdgeInsets {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.leading.to_bits().hash(state);
        self.top.to_bits().hash(state);
        self.trailing.to_bits().hash(state);
        self.bottom.to_bits().hash(state);
    }
}

impl Eq for EdgeInsets {}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        leading: 0.0,
        top: 0.0,
        trailing: 0.0,
        bottom: 0.0,
    };

    pub fn new(leading: f32, top: f32, trailing: f32, bottom: f32) -> Self {
        Self {
            leading,
            top,
            trailing,
            bottom,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Horizontal-only insets (leading and trailing).
    pub fn x(value: f32) -> Self {
        Self::new(value, 0.0, value, 0.0)
    }

    /// Vertical-only insets (top and bottom).
    pub fn y(value: f32) -> Self {
        Self::new(0.0, value, 0.0, value)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
