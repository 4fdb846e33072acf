//! Section declarations.

use trellis_native::{
    Environment, GroupSection, LayoutSection, ListConfiguration, VisibleItem, VisibleItemsHandler,
};
use trellis_types::{EdgeInsets, InsetsReference, OrthogonalScrollingBehavior, Point};

use crate::boundary::BoundarySupplementaryItem;
use crate::decoration::DecorationItem;
use crate::group::Group;

#[derive(Debug, Clone)]
enum SectionRoot {
    Group(Group),
    List(ListConfiguration),
}

/// A run of layout content sharing scrolling, inset, and decoration
/// configuration, laid out from exactly one root group.
///
/// Sections have positional identity: the engine attaches no identity
/// key, and hosts that diff dynamic section sets key on index.
#[derive(Debug, Clone)]
pub struct Section {
    root: SectionRoot,
    orthogonal_scrolling_behavior: OrthogonalScrollingBehavior,
    inter_group_spacing: f32,
    content_insets: Option<EdgeInsets>,
    content_insets_reference: Option<InsetsReference>,
    supplementary_content_insets_reference: Option<InsetsReference>,
    boundary_supplementary_items: Vec<BoundarySupplementaryItem>,
    decoration_items: Vec<DecorationItem>,
    visible_items_handler: Option<VisibleItemsHandler>,
}

impl Section {
    fn with_root(root: SectionRoot) -> Self {
        Self {
            root,
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

    /// Creates a section from a body of declared groups.
    ///
    /// # Panics
    ///
    /// Panics unless the body declares exactly one root group. A wrong
    /// arity is a bug in the caller's declaration, never a runtime
    /// condition, so it fails construction outright.
    pub fn new(mut body: Vec<Group>) -> Self {
        match body.len() {
            1 => Self::with_root(SectionRoot::Group(body.remove(0))),
            count => panic!("a section must declare exactly one root group, found {count}"),
        }
    }

    /// A host-owned list section. The configuration is passed through
    /// untouched; none of the group-section setters apply to it.
    pub fn list(configuration: ListConfiguration) -> Self {
        Self::with_root(SectionRoot::List(configuration))
    }

    pub fn orthogonal_scrolling_behavior(mut self, value: OrthogonalScrollingBehavior) -> Self {
        self.orthogonal_scrolling_behavior = value;
        self
    }

    pub fn inter_group_spacing(mut self, value: f32) -> Self {
        self.inter_group_spacing = value;
        self
    }

    pub fn content_insets(mut self, insets: EdgeInsets) -> Self {
        self.content_insets = Some(insets);
        self
    }

    /// Chooses the boundary the section's content insets are measured
    /// from. The token is forwarded to the host uninterpreted.
    pub fn content_insets_reference(mut self, reference: InsetsReference) -> Self {
        self.content_insets_reference = Some(reference);
        self
    }

    pub fn supplementary_content_insets_reference(mut self, reference: InsetsReference) -> Self {
        self.supplementary_content_insets_reference = Some(reference);
        self
    }

    /// Replaces the section's boundary supplementary items (headers,
    /// footers, edge views).
    pub fn boundary_supplementary_items(mut self, items: Vec<BoundarySupplementaryItem>) -> Self {
        self.boundary_supplementary_items = items;
        self
    }

    /// Replaces the section's background decorations.
    pub fn decoration_items(mut self, items: Vec<DecorationItem>) -> Self {
        self.decoration_items = items;
        self
    }

    /// Stores a callback the host invokes on scroll and resize with the
    /// currently visible elements. Forwarded unchanged; the engine does
    /// not interpret visible-item geometry.
    pub fn visible_items_invalidation_handler(
        mut self,
        handler: impl Fn(&[VisibleItem], Point, &Environment) + 'static,
    ) -> Self {
        self.visible_items_handler = Some(VisibleItemsHandler::new(handler));
        self
    }

    /// Resolves this declaration into the host's section descriptor.
    pub fn resolve(&self) -> LayoutSection {
        let group = match &self.root {
            SectionRoot::List(configuration) => return LayoutSection::List(*configuration),
            SectionRoot::Group(group) => group,
        };
        let mut section = GroupSection::new(group.resolve());
        section.orthogonal_scrolling_behavior = self.orthogonal_scrolling_behavior;
        section.inter_group_spacing = self.inter_group_spacing;
        section.content_insets = self.content_insets;
        section.content_insets_reference = self.content_insets_reference;
        section.supplementary_content_insets_reference = self.supplementary_content_insets_reference;
        section.boundary_supplementary_items = self
            .boundary_supplementary_items
            .iter()
            .map(BoundarySupplementaryItem::resolve)
            .collect();
        section.decoration_items = self
            .decoration_items
            .iter()
            .map(DecorationItem::resolve)
            .collect();
        section.visible_items_handler = self.visible_items_handler.clone();
        LayoutSection::Group(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{either, one};
    use crate::item::Item;
    use trellis_native::ListAppearance;

    fn full_width_group() -> Group {
        Group::vertical(vec![Item::new().into()])
    }

    #[test]
    fn single_root_group_succeeds() {
        let section = Section::new(one(full_width_group()));
        assert!(section.resolve().as_group().is_some());
    }

    #[test]
    #[should_panic(expected = "exactly one root group")]
    fn two_root_groups_fail_construction() {
        let _ = Section::new(vec![full_width_group(), full_width_group()]);
    }

    #[test]
    #[should_panic(expected = "exactly one root group")]
    fn empty_body_fails_construction() {
        let _ = Section::new(Vec::new());
    }

    #[test]
    fn either_branch_yields_a_valid_body() {
        let section = Section::new(either(
            false,
            || one(full_width_group()),
            || one(Group::horizontal_repeated(2, Item::new())),
        ));
        let resolved = section.resolve();
        assert_eq!(resolved.as_group().unwrap().group.child_count(), 2);
    }

    #[test]
    fn list_section_passes_configuration_through() {
        let section = Section::list(ListConfiguration::new(ListAppearance::InsetGrouped));
        match section.resolve() {
            LayoutSection::List(configuration) => {
                assert_eq!(configuration.appearance, ListAppearance::InsetGrouped);
                assert!(configuration.shows_separators);
            }
            LayoutSection::Group(_) => panic!("expected list passthrough"),
        }
    }

    #[test]
    fn handler_is_forwarded_to_the_descriptor() {
        let section = Section::new(one(full_width_group()))
            .visible_items_invalidation_handler(|_items, _offset, _environment| {});
        let resolved = section.resolve();
        assert!(resolved.as_group().unwrap().visible_items_handler.is_some());
    }
}
