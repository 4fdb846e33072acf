//! Declarative layout nodes and their composition algebra.
//!
//! A layout is declared as sections containing groups containing items,
//! written with fluent value-returning setters and composed with the
//! combinators in [`compose`]. Every node is an immutable record: a
//! setter consumes the node and returns a copy with one field replaced,
//! so declarations are cheap to build fresh on every layout pass.
//!
//! ```
//! use trellis_dsl::compose::{for_each, one};
//! use trellis_dsl::{Group, Item, LayoutModel, Section};
//! use trellis_types::{Dimension, EdgeInsets};
//!
//! let columns = 2;
//! let model = LayoutModel::new(one(Section::new(one(
//!     Group::horizontal_repeated(
//!         columns,
//!         Item::new()
//!             .width(Dimension::Fractional(1.0 / columns as f32))
//!             .content_insets(EdgeInsets::all(4.0)),
//!     )
//!     .height(Dimension::Absolute(44.0)),
//! ))));
//! assert_eq!(model.sections().len(), 1);
//! ```

pub mod boundary;
pub mod compose;
pub mod decoration;
pub mod group;
pub mod item;
pub mod model;
pub mod section;
pub mod supplementary;

pub use boundary::BoundarySupplementaryItem;
pub use decoration::DecorationItem;
pub use group::{Group, GroupChild};
pub use item::Item;
pub use model::LayoutModel;
pub use section::Section;
pub use supplementary::SupplementaryItem;
