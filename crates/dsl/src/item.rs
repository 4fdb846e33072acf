//! The leaf layout node.

use trellis_native::LayoutItem;
use trellis_types::{Dimension, EdgeInsets, EdgeSpacing, LayoutSize};

use crate::supplementary::SupplementaryItem;

/// A leaf cell declaration: a size, insets, spacing hints, and any
/// supplementary views attached to it.
///
/// Values are passed through to the host uninterpreted; nothing is
/// validated here (a negative size is the host's problem).
#[derive(Debug, Clone, Default)]
pub struct Item {
    width: Dimension,
    height: Dimension,
    content_insets: EdgeInsets,
    edge_spacing: Option<EdgeSpacing>,
    supplementary_items: Vec<SupplementaryItem>,
}

impl Item {
    /// An item filling its container on both axes.
    pub fn new() -> Self {
        Self::default()
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

    pub fn content_insets(mut self, insets: EdgeInsets) -> Self {
        self.content_insets = insets;
        self
    }

    pub fn edge_spacing(mut self, spacing: EdgeSpacing) -> Self {
        self.edge_spacing = Some(spacing);
        self
    }

    /// Appends supplementary views anchored to this item.
    pub fn supplementary_items(mut self, items: Vec<SupplementaryItem>) -> Self {
        self.supplementary_items.extend(items);
        self
    }

    pub fn layout_size(&self) -> LayoutSize {
        LayoutSize::new(self.width, self.height)
    }

    /// Resolves this declaration into the host's item descriptor.
    pub fn resolve(&self) -> LayoutItem {
        let supplementary_items = self
            .supplementary_items
            .iter()
            .map(SupplementaryItem::resolve)
            .collect();
        let mut item = LayoutItem::new(self.layout_size(), supplementary_items);
        item.content_insets = self.content_insets;
        item.edge_spacing = self.edge_spacing;
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_return_modified_copies() {
        let base = Item::new();
        let sized = base.clone().width(Dimension::Absolute(120.0));
        // The original is untouched.
        assert_eq!(base.layout_size().width, Dimension::Fractional(1.0));
        assert_eq!(sized.layout_size().width, Dimension::Absolute(120.0));
    }

    #[test]
    fn resolve_copies_size_insets_and_spacing() {
        let item = Item::new()
            .height(Dimension::Estimated(60.0))
            .content_insets(EdgeInsets::all(2.0))
            .resolve();
        assert_eq!(item.size.height, Dimension::Estimated(60.0));
        assert_eq!(item.content_insets, EdgeInsets::all(2.0));
        assert!(item.edge_spacing.is_none());
        assert!(item.supplementary_items.is_empty());
    }

    #[test]
    fn negative_sizes_pass_through() {
        let item = Item::new().width(Dimension::Absolute(-5.0)).resolve();
        assert_eq!(item.size.width, Dimension::Absolute(-5.0));
    }
}
