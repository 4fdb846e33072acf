//! Anchoring and alignment for supplementary views.
use crate::geometry::Point;
use std::hash::{Hash, Hasher};

bitflags::bitflags! {
    /// Edges of a container or item a supplementary view can attach to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RectEdge: u8 {
        const TOP = 0b0001;
        const BOTTOM = 0b0010;
        const LEADING = 0b0100;
        const TRAILING = 0b1000;
        const HORIZONTAL = Self::LEADING.bits() | Self::TRAILING.bits();
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

/// Displacement of an anchor from the edges it attaches to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum AnchorOffset {
    /// Flush against the anchored edges.
    #[default]
    None,
    /// Offset by a fixed point value.
    Absolute(Point),
    /// Offset as a fraction of the anchored element's size.
    Fractional(Point),
}

impl Hash for AnchorOffset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            AnchorOffset::None => 0u8.hash(state),
            AnchorOffset::Absolute(p) => {
                1u8.hash(state);
                p.x.to_bits().hash(state);
                p.y.to_bits().hash(state);
            }
            AnchorOffset::Fractional(p) => {
                2u8.hash(state);
                p.x.to_bits().hash(state);
                p.y.to_bits().hash(state);
            }
        }
    }
}

impl Eq for AnchorOffset {}

/// A point of attachment for a supplementary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub edges: RectEdge,
    pub offset: AnchorOffset,
}

impl Anchor {
    pub fn edges(edges: RectEdge) -> Self {
        Self {
            edges,
            offset: AnchorOffset::None,
        }
    }

    pub fn absolute(edges: RectEdge, offset: Point) -> Self {
        Self {
            edges,
            offset: AnchorOffset::Absolute(offset),
        }
    }

    pub fn fractional(edges: RectEdge, offset: Point) -> Self {
        Self {
            edges,
            offset: AnchorOffset::Fractional(offset),
        }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::edges(RectEdge::TOP)
    }
}

/// Alignment of a boundary supplementary view within its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RectAlignment {
    #[default]
    None,
    Top,
    TopLeading,
    Leading,
    BottomLeading,
    Bottom,
    BottomTrailing,
    Trailing,
    TopTrailing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_combinations() {
        assert!(RectEdge::ALL.contains(RectEdge::TOP | RectEdge::TRAILING));
        assert_eq!(RectEdge::HORIZONTAL, RectEdge::LEADING | RectEdge::TRAILING);
    }

    #[test]
    fn default_anchor_is_top_without_offset() {
        let anchor = Anchor::default();
        assert_eq!(anchor.edges, RectEdge::TOP);
        assert_eq!(anchor.offset, AnchorOffset::None);
    }
}
