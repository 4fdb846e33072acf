use crate::environment::VisibleItemsHandler;
use crate::group::LayoutGroup;
use crate::supplementary::{LayoutBoundarySupplementaryItem, LayoutDecorationItem};
use trellis_types::{EdgeInsets, InsetsReference, OrthogonalScrollingBehavior};

/// A resolved section descriptor, one per declared section per pass.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutSection {
    /// A section laid out from a group tree.
    Group(GroupSection),
    /// A host-owned list section; the engine passes the configuration
    /// through without modeling list internals.
    List(ListConfiguration),
}

impl LayoutSection {
    /// The group payload, when this is not a list passthrough.
    pub fn as_group(&self) -> Option<&GroupSection> {
        match self {
            LayoutSection::Group(section) => Some(section),
            LayoutSection::List(_) => None,
        }
    }
}

/// The resolved configuration of a group-backed section.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSection {
    pub group: LayoutGroup,
    pub orthogonal_scrolling_behavior: OrthogonalScrollingBehavior,
    pub inter_group_spacing: f32,
    pub content_insets: Option<EdgeInsets>,
    pub content_insets_reference: Option<InsetsReference>,
    pub supplementary_content_insets_reference: Option<InsetsReference>,
    pub boundary_supplementary_items: Vec<LayoutBoundarySupplementaryItem>,
    pub decoration_items: Vec<LayoutDecorationItem>,
    pub visible_items_handler: Option<VisibleItemsHandler>,
}

impl GroupSection {
    pub fn new(group: LayoutGroup) -> Self {
        Self {
            group,
            orthogonal_scrolling_behavior: OrthogonalScrollingBehavior::None,
            inter_group_spacing: 0.0,
            content_insets: None,
            content_insets_reference: None,
            supplementary_content_insets_reference: None,
            boundary_supplementary_items: Vec::new(),
            decoration_items: Vec::new(),
            visible_items_handler: None,
        }
    }
}

/// Visual style of a host-owned list section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListAppearance {
    #[default]
    Plain,
    Grouped,
    InsetGrouped,
    Sidebar,
    SidebarPlain,
}

/// Opaque configuration for a host-owned list section.
///
/// The engine does not interpret any of these fields; they exist so a
/// caller can hand the host what it needs for list rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListConfiguration {
    pub appearance: ListAppearance,
    pub shows_separators: bool,
}

impl ListConfiguration {
    pub fn new(appearance: ListAppearance) -> Self {
        Self {
            appearance,
            shows_separators: true,
        }
    }
}

impl Default for ListConfiguration {
    fn default() -> Self {
        Self::new(ListAppearance::Plain)
    }
}
