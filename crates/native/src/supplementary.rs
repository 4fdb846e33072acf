use trellis_types::{Anchor, EdgeInsets, EdgeSpacing, ElementKind, LayoutSize, Point, RectAlignment};

/// A resolved supplementary descriptor anchored to an item or group.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSupplementaryItem {
    pub size: LayoutSize,
    pub element_kind: ElementKind,
    pub container_anchor: Anchor,
    pub item_anchor: Option<Anchor>,
}

impl LayoutSupplementaryItem {
    /// A supplementary view positioned relative to its container only.
    pub fn container_anchored(
        size: LayoutSize,
        element_kind: ElementKind,
        container_anchor: Anchor,
    ) -> Self {
        Self {
            size,
            element_kind,
            container_anchor,
            item_anchor: None,
        }
    }

    /// A supplementary view positioned relative to both its container
    /// and the item it decorates.
    pub fn item_anchored(
        size: LayoutSize,
        element_kind: ElementKind,
        container_anchor: Anchor,
        item_anchor: Anchor,
    ) -> Self {
        Self {
            size,
            element_kind,
            container_anchor,
            item_anchor: Some(item_anchor),
        }
    }
}

/// A resolved supplementary descriptor anchored to a section boundary.
///
/// The optional flags stay `None` when the declaration never set them,
/// so the host applies its own defaults instead of an explicit `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBoundarySupplementaryItem {
    pub size: LayoutSize,
    pub element_kind: ElementKind,
    pub alignment: RectAlignment,
    pub absolute_offset: Option<Point>,
    pub pin_to_visible_bounds: Option<bool>,
    pub extends_boundary: Option<bool>,
    pub z_index: Option<i32>,
}

impl LayoutBoundarySupplementaryItem {
    /// A boundary view placed by alignment alone.
    pub fn aligned(size: LayoutSize, element_kind: ElementKind, alignment: RectAlignment) -> Self {
        Self {
            size,
            element_kind,
            alignment,
            absolute_offset: None,
            pin_to_visible_bounds: None,
            extends_boundary: None,
            z_index: None,
        }
    }

    /// A boundary view displaced from its alignment by an absolute offset.
    pub fn at_offset(
        size: LayoutSize,
        element_kind: ElementKind,
        alignment: RectAlignment,
        offset: Point,
    ) -> Self {
        Self {
            absolute_offset: Some(offset),
            ..Self::aligned(size, element_kind, alignment)
        }
    }
}

/// A resolved background decoration descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDecorationItem {
    pub element_kind: ElementKind,
    pub content_insets: Option<EdgeInsets>,
    pub edge_spacing: Option<EdgeSpacing>,
    pub z_index: Option<i32>,
}

impl LayoutDecorationItem {
    /// The host's background-decoration factory, looked up by element kind.
    pub fn background(element_kind: ElementKind) -> Self {
        Self {
            element_kind,
            content_insets: None,
            edge_spacing: None,
            z_index: None,
        }
    }
}
