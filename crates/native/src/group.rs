use crate::item::LayoutItem;
use crate::supplementary::LayoutSupplementaryItem;
use trellis_types::{EdgeInsets, EdgeSpacing, LayoutSize, Spacing};

/// The axis a group arranges its children along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A node in a resolved group tree: either a leaf cell or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Item(LayoutItem),
    Group(LayoutGroup),
}

/// The children of a resolved group.
///
/// The two variants correspond to genuinely different host
/// constructors: an explicit ordered child list, or a single template
/// replicated a fixed number of times along the group's axis.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupChildren {
    Explicit(Vec<LayoutNode>),
    Repeated { template: Box<LayoutNode>, count: usize },
}

/// A resolved composite descriptor arranging children along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGroup {
    pub size: LayoutSize,
    pub axis: Axis,
    pub children: GroupChildren,
    pub inter_item_spacing: Option<Spacing>,
    pub content_insets: EdgeInsets,
    pub edge_spacing: Option<EdgeSpacing>,
    pub supplementary_items: Vec<LayoutSupplementaryItem>,
}

impl LayoutGroup {
    fn new(axis: Axis, size: LayoutSize, children: GroupChildren) -> Self {
        Self {
            size,
            axis,
            children,
            inter_item_spacing: None,
            content_insets: EdgeInsets::ZERO,
            edge_spacing: None,
            supplementary_items: Vec::new(),
        }
    }

    pub fn horizontal(size: LayoutSize, children: Vec<LayoutNode>) -> Self {
        Self::new(Axis::Horizontal, size, GroupChildren::Explicit(children))
    }

    pub fn vertical(size: LayoutSize, children: Vec<LayoutNode>) -> Self {
        Self::new(Axis::Vertical, size, GroupChildren::Explicit(children))
    }

    pub fn horizontal_repeated(size: LayoutSize, template: LayoutNode, count: usize) -> Self {
        Self::new(
            Axis::Horizontal,
            size,
            GroupChildren::Repeated {
                template: Box::new(template),
                count,
            },
        )
    }

    pub fn vertical_repeated(size: LayoutSize, template: LayoutNode, count: usize) -> Self {
        Self::new(
            Axis::Vertical,
            size,
            GroupChildren::Repeated {
                template: Box::new(template),
                count,
            },
        )
    }

    /// Number of children the host will materialize for this group.
    pub fn child_count(&self) -> usize {
        match &self.children {
            GroupChildren::Explicit(children) => children.len(),
            GroupChildren::Repeated { count, .. } => *count,
        }
    }
}
