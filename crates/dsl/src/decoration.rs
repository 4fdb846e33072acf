//! Section background decorations.

use trellis_native::LayoutDecorationItem;
use trellis_types::{EdgeInsets, EdgeSpacing, ElementKind};

/// A purely visual background for a section, outside the item flow.
///
/// The element kind must have a renderer registered at the composer
/// level; the declaration itself is just the tag plus placement hints.
#[derive(Debug, Clone)]
pub struct DecorationItem {
    element_kind: ElementKind,
    content_insets: Option<EdgeInsets>,
    edge_spacing: Option<EdgeSpacing>,
    z_index: Option<i32>,
}

impl DecorationItem {
    pub fn new(element_kind: impl Into<ElementKind>) -> Self {
        Self {
            element_kind: element_kind.into(),
            content_insets: None,
            edge_spacing: None,
            z_index: None,
        }
    }

    pub fn content_insets(mut self, insets: EdgeInsets) -> Self {
        self.content_insets = Some(insets);
        self
    }

    pub fn edge_spacing(mut self, spacing: EdgeSpacing) -> Self {
        self.edge_spacing = Some(spacing);
        self
    }

    pub fn z_index(mut self, value: i32) -> Self {
        self.z_index = Some(value);
        self
    }

    pub fn element_kind(&self) -> &ElementKind {
        &self.element_kind
    }

    pub fn resolve(&self) -> LayoutDecorationItem {
        let mut resolved = LayoutDecorationItem::background(self.element_kind.clone());
        resolved.content_insets = self.content_insets;
        resolved.edge_spacing = self.edge_spacing;
        resolved.z_index = self.z_index;
        resolved
    }
}
