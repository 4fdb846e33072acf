//! Supplementary views anchored to section boundaries.

use trellis_native::LayoutBoundarySupplementaryItem;
use trellis_types::{Dimension, ElementKind, LayoutSize, Point, RectAlignment};

/// A header, footer, or other view pinned to an edge of the whole
/// section rather than to an item.
///
/// `pin_to_visible_bounds` and `extends_boundary` are tri-state: a flag
/// the caller never set stays unset and must not override the host
/// default, which is not necessarily `false`.
#[derive(Debug, Clone)]
pub struct BoundarySupplementaryItem {
    element_kind: ElementKind,
    width: Dimension,
    height: Dimension,
    alignment: RectAlignment,
    absolute_offset: Option<Point>,
    pin_to_visible_bounds: Option<bool>,
    extends_boundary: Option<bool>,
    z_index: Option<i32>,
}

impl BoundarySupplementaryItem {
    pub fn new(element_kind: impl Into<ElementKind>) -> Self {
        Self {
            element_kind: element_kind.into(),
            width: Dimension::default(),
            height: Dimension::default(),
            alignment: RectAlignment::None,
            absolute_offset: None,
            pin_to_visible_bounds: None,
            extends_boundary: None,
            z_index: None,
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

    pub fn alignment(mut self, value: RectAlignment) -> Self {
        self.alignment = value;
        self
    }

    /// Displaces the view from its alignment by an absolute offset.
    /// Setting this switches resolution to the offset-based host form.
    pub fn absolute_offset(mut self, value: Point) -> Self {
        self.absolute_offset = Some(value);
        self
    }

    /// Keeps the view on screen while any part of its section is
    /// visible (sticky headers and footers).
    pub fn pin_to_visible_bounds(mut self, value: bool) -> Self {
        self.pin_to_visible_bounds = Some(value);
        self
    }

    pub fn extends_boundary(mut self, value: bool) -> Self {
        self.extends_boundary = Some(value);
        self
    }

    pub fn z_index(mut self, value: i32) -> Self {
        self.z_index = Some(value);
        self
    }

    pub fn resolve(&self) -> LayoutBoundarySupplementaryItem {
        let size = LayoutSize::new(self.width, self.height);
        let mut resolved = match self.absolute_offset {
            Some(offset) => LayoutBoundarySupplementaryItem::at_offset(
                size,
                self.element_kind.clone(),
                self.alignment,
                offset,
            ),
            None => LayoutBoundarySupplementaryItem::aligned(
                size,
                self.element_kind.clone(),
                self.alignment,
            ),
        };
        // Only explicitly set flags make it into the descriptor.
        resolved.pin_to_visible_bounds = self.pin_to_visible_bounds;
        resolved.extends_boundary = self.extends_boundary;
        resolved.z_index = self.z_index;
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flags_stay_unset() {
        let resolved = BoundarySupplementaryItem::new("footer")
            .alignment(RectAlignment::Bottom)
            .resolve();
        assert_eq!(resolved.pin_to_visible_bounds, None);
        assert_eq!(resolved.extends_boundary, None);
        assert_eq!(resolved.z_index, None);
        assert_eq!(resolved.absolute_offset, None);
    }

    #[test]
    fn explicit_false_is_distinct_from_unset() {
        let resolved = BoundarySupplementaryItem::new("header")
            .alignment(RectAlignment::Top)
            .pin_to_visible_bounds(false)
            .resolve();
        assert_eq!(resolved.pin_to_visible_bounds, Some(false));
    }

    #[test]
    fn offset_switches_constructor_form() {
        let resolved = BoundarySupplementaryItem::new("header")
            .alignment(RectAlignment::Top)
            .absolute_offset(Point::new(0.0, -8.0))
            .resolve();
        assert_eq!(resolved.absolute_offset, Some(Point::new(0.0, -8.0)));
    }
}
