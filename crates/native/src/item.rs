use crate::supplementary::LayoutSupplementaryItem;
use trellis_types::{EdgeInsets, EdgeSpacing, LayoutSize};

/// A resolved leaf cell descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutItem {
    pub size: LayoutSize,
    pub content_insets: EdgeInsets,
    pub edge_spacing: Option<EdgeSpacing>,
    pub supplementary_items: Vec<LayoutSupplementaryItem>,
}

impl LayoutItem {
    pub fn new(size: LayoutSize, supplementary_items: Vec<LayoutSupplementaryItem>) -> Self {
        Self {
            size,
            content_insets: EdgeInsets::ZERO,
            edge_spacing: None,
            supplementary_items,
        }
    }
}
