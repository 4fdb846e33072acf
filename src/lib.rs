//! Trellis: a declarative DSL for compositional collection-view layouts.
//!
//! A layout is declared as a tree of sections, groups, and items inside
//! a composing closure. The closure re-declares the entire tree on
//! every layout pass; [`Compose::build`] wraps it in a
//! [`CompositionalLayout`] whose section provider the host calls with a
//! section index and environment whenever it needs a section resolved.
//!
//! ```
//! use trellis::prelude::*;
//!
//! let layout = Compose::with_environment(|_environment| {
//!     LayoutModel::new(one(Section::new(one(Group::horizontal_repeated(
//!         2,
//!         Item::new()
//!             .width(Dimension::Fractional(0.5))
//!             .content_insets(EdgeInsets::all(5.0)),
//!     )
//!     .height(Dimension::Fractional(0.2))))))
//! })
//! .build();
//!
//! let environment = Environment::new(Size::new(390.0, 844.0));
//! let section = layout.layout_section(0, &environment).unwrap();
//! assert_eq!(section.as_group().unwrap().group.child_count(), 2);
//! ```

pub mod compose;

pub use compose::Compose;

pub use trellis_dsl::{
    BoundarySupplementaryItem, DecorationItem, Group, GroupChild, Item, LayoutModel, Section,
    SupplementaryItem,
};
pub use trellis_native::{
    Axis, CompositionalLayout, DecorationRenderer, Environment, GroupChildren, GroupSection,
    LayoutBoundarySupplementaryItem, LayoutConfiguration, LayoutDecorationItem, LayoutGroup,
    LayoutItem, LayoutNode, LayoutSection, LayoutSupplementaryItem, ListAppearance,
    ListConfiguration, RegistryError, TraitAttributes, VisibleItem, VisibleItemsHandler,
};
pub use trellis_types::{
    Anchor, AnchorOffset, Dimension, EdgeInsets, EdgeSpacing, ElementKind, InsetsReference,
    LayoutSize, OrthogonalScrollingBehavior, Point, Rect, RectAlignment, RectEdge,
    ScrollDirection, Size, Spacing,
};

/// One-stop imports for declaring layouts.
pub mod prelude {
    pub use crate::compose::Compose;
    pub use trellis_dsl::compose::{either, for_each, one, sequence, when};
    pub use trellis_dsl::{
        BoundarySupplementaryItem, DecorationItem, Group, GroupChild, Item, LayoutModel, Section,
        SupplementaryItem,
    };
    pub use trellis_native::{Environment, LayoutConfiguration, ListAppearance, ListConfiguration};
    pub use trellis_types::{
        Anchor, Dimension, EdgeInsets, EdgeSpacing, ElementKind, InsetsReference, LayoutSize,
        OrthogonalScrollingBehavior, Point, RectAlignment, RectEdge, ScrollDirection, Size,
        Spacing,
    };
}
