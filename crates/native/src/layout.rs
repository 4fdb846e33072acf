//! The built layout object handed to the host.

use std::any::Any;
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use trellis_types::{ElementKind, ScrollDirection};

use crate::environment::Environment;
use crate::section::LayoutSection;

/// Errors raised when the host queries the decoration registry.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no decoration renderer registered for element kind `{0}`")]
    UnknownElementKind(ElementKind),
}

/// A host-side factory for decoration views, registered per element kind.
///
/// The engine never calls into a renderer; it only stores it for the
/// host to look up when a section declares a decoration of that kind.
pub trait DecorationRenderer: Any {}

/// Global layout configuration applied once at build time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutConfiguration {
    pub scroll_direction: ScrollDirection,
    pub inter_section_spacing: f32,
}

type SectionListProvider = Box<dyn Fn(usize, &Environment) -> Vec<LayoutSection>>;

/// The opaque layout object a composer build produces.
///
/// The host calls [`layout_section`](Self::layout_section) once per
/// section per layout pass. Every call re-runs the user's composing
/// closure, so the returned descriptor always reflects the current
/// environment.
///
/// Not `Sync`: the host contract is single-threaded call-and-return.
pub struct CompositionalLayout {
    provider: SectionListProvider,
    configuration: LayoutConfiguration,
    decoration_renderers: HashMap<ElementKind, Arc<dyn DecorationRenderer>>,
    out_of_range_fallbacks: Cell<u64>,
}

impl CompositionalLayout {
    /// Wraps a provider that re-declares the full flattened section list
    /// for a given `(section_index, environment)` invocation.
    pub fn new(provider: impl Fn(usize, &Environment) -> Vec<LayoutSection> + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            configuration: LayoutConfiguration::default(),
            decoration_renderers: HashMap::new(),
            out_of_range_fallbacks: Cell::new(0),
        }
    }

    /// Host entry point: the resolved section at `index` for this pass.
    ///
    /// An out-of-range index degrades to the last declared section
    /// rather than failing the layout pass; the mismatch is logged and
    /// counted so section-count drift stays observable. Returns `None`
    /// only when the model declares no sections at all.
    pub fn layout_section(&self, index: usize, environment: &Environment) -> Option<LayoutSection> {
        let sections = (self.provider)(index, environment);
        if let Some(section) = sections.get(index) {
            return Some(section.clone());
        }
        self.out_of_range_fallbacks
            .set(self.out_of_range_fallbacks.get() + 1);
        log::warn!(
            "section index {index} out of range for {} declared section(s); falling back to the last section",
            sections.len()
        );
        sections.last().cloned()
    }

    /// How many times an out-of-range index fell back to the last section.
    pub fn out_of_range_fallbacks(&self) -> u64 {
        self.out_of_range_fallbacks.get()
    }

    /// Registers a renderer for decoration views of the given kind.
    /// Re-registering a kind replaces the previous renderer.
    pub fn register_decoration_renderer(
        &mut self,
        element_kind: ElementKind,
        renderer: Arc<dyn DecorationRenderer>,
    ) {
        self.decoration_renderers.insert(element_kind, renderer);
    }

    /// Looks up the renderer registered for a decoration kind.
    pub fn decoration_renderer(
        &self,
        element_kind: &ElementKind,
    ) -> Result<Arc<dyn DecorationRenderer>, RegistryError> {
        self.decoration_renderers
            .get(element_kind)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownElementKind(element_kind.clone()))
    }

    /// Element kinds with a registered decoration renderer.
    pub fn registered_decoration_kinds(&self) -> impl Iterator<Item = &ElementKind> {
        self.decoration_renderers.keys()
    }

    pub fn configuration(&self) -> &LayoutConfiguration {
        &self.configuration
    }

    pub fn set_configuration(&mut self, configuration: LayoutConfiguration) {
        self.configuration = configuration;
    }
}

impl fmt::Debug for CompositionalLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionalLayout")
            .field("configuration", &self.configuration)
            .field(
                "decoration_renderers",
                &self.decoration_renderers.keys().collect::<Vec<_>>(),
            )
            .field("out_of_range_fallbacks", &self.out_of_range_fallbacks.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_types::Size;

    struct NullRenderer;
    impl DecorationRenderer for NullRenderer {}

    #[test]
    fn registry_is_last_write_wins() {
        let mut layout = CompositionalLayout::new(|_, _| Vec::new());
        let kind = ElementKind::from("background");
        let first: Arc<dyn DecorationRenderer> = Arc::new(NullRenderer);
        let second: Arc<dyn DecorationRenderer> = Arc::new(NullRenderer);
        layout.register_decoration_renderer(kind.clone(), Arc::clone(&first));
        layout.register_decoration_renderer(kind.clone(), Arc::clone(&second));

        let resolved = layout.decoration_renderer(&kind).unwrap();
        assert!(Arc::ptr_eq(&resolved, &second));
        assert_eq!(layout.registered_decoration_kinds().count(), 1);
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let layout = CompositionalLayout::new(|_, _| Vec::new());
        let missing = ElementKind::from("missing");
        match layout.decoration_renderer(&missing) {
            Err(RegistryError::UnknownElementKind(kind)) => assert_eq!(kind, missing),
            Ok(_) => panic!("expected missing kind to be an error"),
        }
    }

    #[test]
    fn empty_model_yields_no_section() {
        let layout = CompositionalLayout::new(|_, _| Vec::new());
        let environment = Environment::new(Size::new(400.0, 800.0));
        assert!(layout.layout_section(0, &environment).is_none());
    }
}
