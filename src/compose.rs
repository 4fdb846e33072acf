//! The top-level composer that turns a composing closure into a layout.

use std::collections::HashMap;
use std::sync::Arc;

use trellis_dsl::LayoutModel;
use trellis_native::{
    CompositionalLayout, DecorationRenderer, Environment, LayoutConfiguration,
};
use trellis_types::ElementKind;

/// Builds a [`CompositionalLayout`] from a closure that declares the
/// full section tree.
///
/// The closure is not run at build time. It is captured and re-invoked
/// by the host on every layout pass, so conditionals inside it see the
/// environment current at that pass.
pub struct Compose {
    builder: Box<dyn Fn(usize, &Environment) -> LayoutModel>,
    configuration: LayoutConfiguration,
    decoration_renderers: HashMap<ElementKind, Arc<dyn DecorationRenderer>>,
}

impl Compose {
    /// A composer whose closure sees both the requested section index
    /// and the environment.
    pub fn new(builder: impl Fn(usize, &Environment) -> LayoutModel + 'static) -> Self {
        Self {
            builder: Box::new(builder),
            configuration: LayoutConfiguration::default(),
            decoration_renderers: HashMap::new(),
        }
    }

    /// A composer whose closure only depends on the environment. Most
    /// layouts declare every section unconditionally and belong here.
    pub fn with_environment(builder: impl Fn(&Environment) -> LayoutModel + 'static) -> Self {
        Self::new(move |_index, environment| builder(environment))
    }

    /// Applies global scroll direction and inter-section spacing.
    pub fn configuration(mut self, configuration: LayoutConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Registers a host renderer for decoration views of `kind`.
    /// Re-registering a kind replaces the previous renderer.
    pub fn register_decoration_renderer(
        mut self,
        kind: impl Into<ElementKind>,
        renderer: Arc<dyn DecorationRenderer>,
    ) -> Self {
        self.decoration_renderers.insert(kind.into(), renderer);
        self
    }

    /// Finalizes the declaration into the layout object the host drives.
    pub fn build(self) -> CompositionalLayout {
        let builder = self.builder;
        let mut layout = CompositionalLayout::new(move |index, environment| {
            builder(index, environment).to_layout_sections()
        });
        layout.set_configuration(self.configuration);
        for (kind, renderer) in self.decoration_renderers {
            layout.register_decoration_renderer(kind, renderer);
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_dsl::compose::{one, when};
    use trellis_dsl::{Group, Item, Section};
    use trellis_native::LayoutSection;
    use trellis_types::{Dimension, ScrollDirection, Size};

    fn plain_section() -> Section {
        Section::new(one(Group::vertical(vec![Item::new().into()])))
    }

    fn environment() -> Environment {
        Environment::new(Size::new(390.0, 844.0))
    }

    #[test]
    fn build_wires_the_closure_into_the_layout() {
        let layout = Compose::with_environment(|_| LayoutModel::new(one(plain_section()))).build();
        assert!(layout.layout_section(0, &environment()).is_some());
    }

    #[test]
    fn closure_sees_the_environment_on_every_call() {
        let layout = Compose::with_environment(|environment| {
            let wide = environment.container.effective_content_size.width > 600.0;
            LayoutModel::new(one(Section::new(one(Group::horizontal_repeated(
                if wide { 4 } else { 2 },
                Item::new(),
            )))))
        })
        .build();

        let narrow = Environment::new(Size::new(390.0, 844.0));
        let wide = Environment::new(Size::new(1024.0, 768.0));
        let count = |environment: &Environment| match layout.layout_section(0, environment) {
            Some(LayoutSection::Group(section)) => section.group.child_count(),
            _ => panic!("expected a group section"),
        };
        assert_eq!(count(&narrow), 2);
        assert_eq!(count(&wide), 4);
    }

    #[test]
    fn index_aware_closure_receives_the_requested_index() {
        let layout = Compose::new(|index, _| {
            LayoutModel::new(when(index < 3, || {
                one(Section::new(one(
                    Group::vertical(vec![Item::new().into()])
                        .height(Dimension::Absolute(index as f32 + 1.0)),
                )))
            }))
        })
        .build();
        assert!(layout.layout_section(0, &environment()).is_some());
    }

    #[test]
    fn configuration_is_applied_at_build_time() {
        let layout = Compose::with_environment(|_| LayoutModel::new(one(plain_section())))
            .configuration(LayoutConfiguration {
                scroll_direction: ScrollDirection::Horizontal,
                inter_section_spacing: 12.0,
            })
            .build();
        assert_eq!(
            layout.configuration().scroll_direction,
            ScrollDirection::Horizontal
        );
        assert_eq!(layout.configuration().inter_section_spacing, 12.0);
    }

    #[test]
    fn renderers_registered_on_the_composer_reach_the_layout() {
        struct NullRenderer;
        impl DecorationRenderer for NullRenderer {}

        let layout = Compose::with_environment(|_| LayoutModel::new(one(plain_section())))
            .register_decoration_renderer("section-background", Arc::new(NullRenderer))
            .build();
        let kind = ElementKind::from("section-background");
        assert!(layout.decoration_renderer(&kind).is_ok());
    }
}
