//! Host-supplied layout context and visible-item callbacks.

use std::fmt;
use std::rc::Rc;

use trellis_types::{EdgeInsets, ElementKind, Point, Rect, Size};

/// Read-only context the host passes into every layout pass.
///
/// The engine never mutates an environment; it only forwards it to the
/// user's composing closure and to visible-items handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub container: LayoutContainer,
    pub traits: TraitAttributes,
}

impl Environment {
    /// An environment for a container of the given size with no insets,
    /// at 1x display scale.
    pub fn new(content_size: Size) -> Self {
        Self {
            container: LayoutContainer {
                content_size,
                effective_content_size: content_size,
                content_insets: EdgeInsets::ZERO,
                effective_content_insets: EdgeInsets::ZERO,
            },
            traits: TraitAttributes::default(),
        }
    }
}

/// Geometry of the container the layout is being computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContainer {
    pub content_size: Size,
    pub effective_content_size: Size,
    pub content_insets: EdgeInsets,
    pub effective_content_insets: EdgeInsets,
}

/// Appearance attributes of the hosting surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitAttributes {
    pub display_scale: f32,
}

impl Default for TraitAttributes {
    fn default() -> Self {
        Self { display_scale: 1.0 }
    }
}

/// A handle for one currently visible element, forwarded to
/// visible-items handlers during scroll and resize.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleItem {
    pub section_index: usize,
    pub item_index: usize,
    pub frame: Rect,
    /// Set for supplementary and decoration elements; `None` for cells.
    pub element_kind: Option<ElementKind>,
}

/// A section's visible-items invalidation callback.
///
/// The engine stores and forwards the callback unchanged; it never
/// interprets visible-item geometry itself. Equality is by identity,
/// since two closures have no meaningful structural comparison.
#[derive(Clone)]
pub struct VisibleItemsHandler(Rc<dyn Fn(&[VisibleItem], Point, &Environment)>);

impl VisibleItemsHandler {
    pub fn new(handler: impl Fn(&[VisibleItem], Point, &Environment) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    /// Invoked by the host with the visible elements, the current
    /// content offset, and the environment of the pass.
    pub fn call(&self, visible_items: &[VisibleItem], content_offset: Point, environment: &Environment) {
        (self.0)(visible_items, content_offset, environment);
    }
}

impl fmt::Debug for VisibleItemsHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VisibleItemsHandler(..)")
    }
}

impl PartialEq for VisibleItemsHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
