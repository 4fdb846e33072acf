pub mod anchor;
pub mod dimension;
pub mod geometry;
pub mod insets;
pub mod kind;
pub mod scroll;

pub use anchor::{Anchor, AnchorOffset, RectAlignment, RectEdge};
pub use dimension::{Dimension, EdgeSpacing, LayoutSize, Spacing};
pub use geometry::{Point, Rect, Size};
pub use insets::EdgeInsets;
pub use kind::ElementKind;
pub use scroll::{InsetsReference, OrthogonalScrollingBehavior, ScrollDirection};
