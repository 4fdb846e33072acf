//! Semantic width/height values and derived sizes.
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A single-axis measurement, interpreted by the host layout engine.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// A fraction of the container's extent along the same axis.
    Fractional(f32),
    /// An exact value in points.
    Absolute(f32),
    /// An initial estimate in points; the host may re-measure.
    Estimated(f32),
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Fractional(1.0)
    }
}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Dimension::Fractional(v) => {
                0u8.hash(state);
                v.to_bits().hash(state);
            }
            Dimension::Absolute(v) => {
                1u8.hash(state);
                v.to_bits().hash(state);
            }
            Dimension::Estimated(v) => {
                2u8.hash(state);
                v.to_bits().hash(state);
            }
        }
    }
}

impl Eq for Dimension {}

/// A width/height pair of [`Dimension`]s.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutSize {
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }
}

/// Spacing between adjacent elements.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Spacing {
    /// A fixed gap in points.
    Fixed(f32),
    /// A gap of at least the given points, growing with available space.
    Flexible(f32),
}

impl Hash for Spacing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Spacing::Fixed(v) => {
                0u8.hash(state);
                v.to_bits().hash(state);
            }
            Spacing::Flexible(v) => {
                1u8.hash(state);
                v.to_bits().hash(state);
            }
        }
    }
}

impl Eq for Spacing {}

/// Per-edge spacing hints. An unset edge inherits the host default.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct EdgeSpacing {
    pub leading: Option<Spacing>,
    pub top: Option<Spacing>,
    pub trailing: Option<Spacing>,
    pub bottom: Option<Spacing>,
}

impl EdgeSpacing {
    pub fn new(
        leading: Option<Spacing>,
        top: Option<Spacing>,
        trailing: Option<Spacing>,
        bottom: Option<Spacing>,
    ) -> Self {
        Self {
            leading,
            top,
            trailing,
            bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_defaults_to_full_fraction() {
        assert_eq!(Dimension::default(), Dimension::Fractional(1.0));
        assert_eq!(LayoutSize::default().height, Dimension::Fractional(1.0));
    }

    #[test]
    fn unset_edge_spacing_has_no_edges() {
        let spacing = EdgeSpacing::default();
        assert!(spacing.leading.is_none() && spacing.bottom.is_none());
    }
}
