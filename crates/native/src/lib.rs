//! Resolved layout descriptors.
//!
//! This crate defines the in-memory object graph a host rendering
//! framework consumes: the output of flattening a declarative Trellis
//! description. Descriptors are plain data produced fresh on every
//! layout pass; they carry no state of their own apart from the
//! callbacks a section chooses to forward.

pub mod environment;
pub mod group;
pub mod item;
pub mod layout;
pub mod section;
pub mod supplementary;

pub use environment::{Environment, LayoutContainer, TraitAttributes, VisibleItem, VisibleItemsHandler};
pub use group::{Axis, GroupChildren, LayoutGroup, LayoutNode};
pub use item::LayoutItem;
pub use layout::{CompositionalLayout, DecorationRenderer, LayoutConfiguration, RegistryError};
pub use section::{GroupSection, LayoutSection, ListAppearance, ListConfiguration};
pub use supplementary::{
    LayoutBoundarySupplementaryItem, LayoutDecorationItem, LayoutSupplementaryItem,
};
