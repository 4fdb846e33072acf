//! Supplementary views anchored to items and groups.

use trellis_native::LayoutSupplementaryItem;
use trellis_types::{Anchor, Dimension, ElementKind, LayoutSize};

/// An auxiliary view (badge, label, ...) anchored to the item or group
/// it decorates.
#[derive(Debug, Clone)]
pub struct SupplementaryItem {
    element_kind: ElementKind,
    width: Dimension,
    height: Dimension,
    container_anchor: Anchor,
    item_anchor: Option<Anchor>,
}

impl SupplementaryItem {
    pub fn new(element_kind: impl Into<ElementKind>) -> Self {
        Self {
            element_kind: element_kind.into(),
            width: Dimension::default(),
            height: Dimension::default(),
            container_anchor: Anchor::default(),
            item_anchor: None,
        }
    }

    pub fn width(mut self, value: Dimension) -> Self {
        self.width = value;
        self
    }

    pub fn height(mut self, value: Dimension) -> Self {
        self.height = value;
        self
    }

    pub fn size(mut self, value: LayoutSize) -> Self {
        self.width = value.width;
        self.height = value.height;
        self
    }

    pub fn element_kind(mut self, kind: impl Into<ElementKind>) -> Self {
        self.element_kind = kind.into();
        self
    }

    pub fn container_anchor(mut self, anchor: Anchor) -> Self {
        self.container_anchor = anchor;
        self
    }

    pub fn item_anchor(mut self, anchor: Anchor) -> Self {
        self.item_anchor = Some(anchor);
        self
    }

    /// Resolves to the host descriptor. The two host constructors are
    /// distinct: with an item anchor the view is positioned against
    /// both the container and the item, without one it is positioned
    /// against the container alone.
    pub fn resolve(&self) -> LayoutSupplementaryItem {
        let size = LayoutSize::new(self.width, self.height);
        match self.item_anchor {
            Some(item_anchor) => LayoutSupplementaryItem::item_anchored(
                size,
                self.element_kind.clone(),
                self.container_anchor,
                item_anchor,
            ),
            None => LayoutSupplementaryItem::container_anchored(
                size,
                self.element_kind.clone(),
                self.container_anchor,
            ),
        }
    }
}
