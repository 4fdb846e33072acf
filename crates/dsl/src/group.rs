//! Composite layout nodes.

use trellis_native::{Axis, LayoutGroup, LayoutNode};
use trellis_types::{Dimension, EdgeInsets, EdgeSpacing, LayoutSize, Spacing};

use crate::item::Item;
use crate::supplementary::SupplementaryItem;

/// A child of a group: a leaf item or a nested group.
#[derive(Debug, Clone)]
pub enum GroupChild {
    Item(Item),
    Group(Group),
}

impl GroupChild {
    pub fn resolve(&self) -> LayoutNode {
        match self {
            GroupChild::Item(item) => LayoutNode::Item(item.resolve()),
            GroupChild::Group(group) => LayoutNode::Group(group.resolve()),
        }
    }
}

impl From<Item> for GroupChild {
    fn from(item: Item) -> Self {
        GroupChild::Item(item)
    }
}

impl From<Group> for GroupChild {
    fn from(group: Group) -> Self {
        GroupChild::Group(group)
    }
}

#[derive(Debug, Clone)]
enum GroupContent {
    Children(Vec<GroupChild>),
    Repeated { template: Box<GroupChild>, count: usize },
}

/// An ordered arrangement of items and nested groups along one axis,
/// optionally repeating a single template.
///
/// The repeated constructors take exactly one template, so a repeat
/// declaration cannot carry extra children that would be silently
/// dropped.
#[derive(Debug, Clone)]
pub struct Group {
    axis: Axis,
    width: Dimension,
    height: Dimension,
    content: GroupContent,
    inter_item_spacing: Option<Spacing>,
    content_insets: EdgeInsets,
    edge_spacing: Option<EdgeSpacing>,
    supplementary_items: Vec<SupplementaryItem>,
}

impl Group {
    fn new(axis: Axis, content: GroupContent) -> Self {
        Self {
            axis,
            width: Dimension::default(),
            height: Dimension::default(),
            content,
            inter_item_spacing: None,
            content_insets: EdgeInsets::ZERO,
            edge_spacing: None,
            supplementary_items: Vec::new(),
        }
    }

    /// A group arranging `children` left to right.
    pub fn horizontal(children: Vec<GroupChild>) -> Self {
        Self::new(Axis::Horizontal, GroupContent::Children(children))
    }

    /// A group arranging `children` top to bottom.
    pub fn vertical(children: Vec<GroupChild>) -> Self {
        Self::new(Axis::Vertical, GroupContent::Children(children))
    }

    /// A horizontal group replicating one template `count` times.
    pub fn horizontal_repeated(count: usize, template: impl Into<GroupChild>) -> Self {
        Self::new(
            Axis::Horizontal,
            GroupContent::Repeated {
                template: Box::new(template.into()),
                count,
            },
        )
    }

    /// A vertical group replicating one template `count` times.
    pub fn vertical_repeated(count: usize, template: impl Into<GroupChild>) -> Self {
        Self::new(
            Axis::Vertical,
            GroupContent::Repeated {
                template: Box::new(template.into()),
                count,
            },
        )
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

    pub fn inter_item_spacing(mut self, spacing: Spacing) -> Self {
        self.inter_item_spacing = Some(spacing);
        self
    }

    pub fn content_insets(mut self, insets: EdgeInsets) -> Self {
        self.content_insets = insets;
        self
    }

    pub fn edge_spacing(mut self, spacing: EdgeSpacing) -> Self {
        self.edge_spacing = Some(spacing);
        self
    }

    /// Appends supplementary views anchored to the group as a whole.
    pub fn supplementary_items(mut self, items: Vec<SupplementaryItem>) -> Self {
        self.supplementary_items.extend(items);
        self
    }

    pub fn layout_size(&self) -> LayoutSize {
        LayoutSize::new(self.width, self.height)
    }

    /// Resolves this declaration into the host's group descriptor.
    ///
    /// A repeat count of zero degenerates to the template as a single
    /// verbatim child rather than a zero-count replication.
    pub fn resolve(&self) -> LayoutGroup {
        let size = self.layout_size();
        let mut group = match (&self.content, self.axis) {
            (GroupContent::Children(children), axis) => {
                let children = children.iter().map(GroupChild::resolve).collect();
                match axis {
                    Axis::Horizontal => LayoutGroup::horizontal(size, children),
                    Axis::Vertical => LayoutGroup::vertical(size, children),
                }
            }
            (GroupContent::Repeated { template, count: 0 }, axis) => {
                let children = vec![template.resolve()];
                match axis {
                    Axis::Horizontal => LayoutGroup::horizontal(size, children),
                    Axis::Vertical => LayoutGroup::vertical(size, children),
                }
            }
            (GroupContent::Repeated { template, count }, axis) => {
                let template = template.resolve();
                match axis {
                    Axis::Horizontal => LayoutGroup::horizontal_repeated(size, template, *count),
                    Axis::Vertical => LayoutGroup::vertical_repeated(size, template, *count),
                }
            }
        };
        group.inter_item_spacing = self.inter_item_spacing;
        group.content_insets = self.content_insets;
        group.edge_spacing = self.edge_spacing;
        group.supplementary_items = self
            .supplementary_items
            .iter()
            .map(SupplementaryItem::resolve)
            .collect();
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_native::GroupChildren;

    #[test]
    fn repeated_group_replicates_the_template() {
        let group = Group::horizontal_repeated(
            5,
            Item::new()
                .width(Dimension::Fractional(0.2))
                .height(Dimension::Absolute(40.0)),
        )
        .resolve();

        assert_eq!(group.axis, Axis::Horizontal);
        assert_eq!(group.child_count(), 5);
        match &group.children {
            GroupChildren::Repeated { template, count } => {
                assert_eq!(*count, 5);
                match template.as_ref() {
                    LayoutNode::Item(item) => {
                        assert_eq!(item.size.width, Dimension::Fractional(0.2));
                        assert_eq!(item.size.height, Dimension::Absolute(40.0));
                    }
                    LayoutNode::Group(_) => panic!("template should be an item"),
                }
            }
            GroupChildren::Explicit(_) => panic!("expected repeated children"),
        }
    }

    #[test]
    fn zero_repeat_degenerates_to_single_child() {
        let group = Group::vertical_repeated(0, Item::new()).resolve();
        match &group.children {
            GroupChildren::Explicit(children) => assert_eq!(children.len(), 1),
            GroupChildren::Repeated { .. } => panic!("count 0 must not produce a repeat"),
        }
    }

    #[test]
    fn explicit_children_keep_declaration_order_and_sizes() {
        let group = Group::vertical(vec![
            Item::new().height(Dimension::Absolute(10.0)).into(),
            Group::horizontal(vec![Item::new().into()])
                .height(Dimension::Absolute(20.0))
                .into(),
            Item::new().height(Dimension::Absolute(30.0)).into(),
        ])
        .resolve();

        match &group.children {
            GroupChildren::Explicit(children) => {
                assert_eq!(children.len(), 3);
                assert!(matches!(children[0], LayoutNode::Item(_)));
                assert!(matches!(children[1], LayoutNode::Group(_)));
                assert!(matches!(children[2], LayoutNode::Item(_)));
            }
            GroupChildren::Repeated { .. } => panic!("expected explicit children"),
        }
    }

    #[test]
    fn empty_group_resolves_to_no_children() {
        let group = Group::horizontal(Vec::new()).resolve();
        assert_eq!(group.child_count(), 0);
    }
}
