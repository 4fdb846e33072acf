//! The aggregate a composing closure returns.

use trellis_native::LayoutSection;

use crate::section::Section;

/// An ordered list of declared sections, rebuilt from scratch on every
/// layout pass and discarded after flattening.
#[derive(Debug, Clone, Default)]
pub struct LayoutModel {
    sections: Vec<Section>,
}

impl LayoutModel {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Flattens every declared section into its resolved descriptor,
    /// preserving declaration order.
    pub fn to_layout_sections(&self) -> Vec<LayoutSection> {
        self.sections.iter().map(Section::resolve).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{for_each, one, sequence};
    use crate::group::Group;
    use crate::item::Item;
    use trellis_types::Dimension;

    fn section_with_height(height: f32) -> Section {
        Section::new(one(
            Group::vertical(vec![Item::new().into()]).height(Dimension::Absolute(height)),
        ))
    }

    fn root_height(section: &LayoutSection) -> Dimension {
        section.as_group().expect("group section").group.size.height
    }

    #[test]
    fn flattening_preserves_sequence_order() {
        let model = LayoutModel::new(sequence([
            one(section_with_height(1.0)),
            one(section_with_height(2.0)),
            one(section_with_height(3.0)),
        ]));
        let heights: Vec<_> = model.to_layout_sections().iter().map(root_height).collect();
        assert_eq!(
            heights,
            vec![
                Dimension::Absolute(1.0),
                Dimension::Absolute(2.0),
                Dimension::Absolute(3.0)
            ]
        );
    }

    #[test]
    fn flattening_preserves_loop_order() {
        let model = LayoutModel::new(for_each(1..=3, |i| one(section_with_height(i as f32))));
        let heights: Vec<_> = model.to_layout_sections().iter().map(root_height).collect();
        assert_eq!(
            heights,
            vec![
                Dimension::Absolute(1.0),
                Dimension::Absolute(2.0),
                Dimension::Absolute(3.0)
            ]
        );
    }

    #[test]
    fn building_twice_is_deterministic() {
        let build = || {
            LayoutModel::new(for_each(0..4, |i| one(section_with_height(i as f32))))
                .to_layout_sections()
        };
        assert_eq!(build(), build());
    }
}
