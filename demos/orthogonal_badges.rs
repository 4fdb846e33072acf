//! Orthogonally scrolling carousel with item badges, a pinned header,
//! and a background decoration with a registered renderer.

use std::sync::Arc;

use trellis::prelude::*;
use trellis::DecorationRenderer;

struct RoundedBackground;
impl DecorationRenderer for RoundedBackground {}

fn main() {
    env_logger::init();

    let layout = Compose::with_environment(|_environment| {
        let badge = SupplementaryItem::new("badge")
            .width(Dimension::Absolute(20.0))
            .height(Dimension::Absolute(20.0))
            .container_anchor(Anchor::fractional(
                RectEdge::TOP | RectEdge::TRAILING,
                Point::new(0.3, -0.3),
            ));

        let card = Item::new()
            .width(Dimension::Fractional(1.0))
            .height(Dimension::Fractional(1.0))
            .supplementary_items(one(badge));

        let carousel = Group::horizontal(vec![card.into()])
            .width(Dimension::Fractional(0.85))
            .height(Dimension::Absolute(180.0))
            .content_insets(EdgeInsets::all(6.0));

        let header = BoundarySupplementaryItem::new("header")
            .height(Dimension::Absolute(44.0))
            .alignment(RectAlignment::Top)
            .pin_to_visible_bounds(true)
            .z_index(2);

        LayoutModel::new(one(Section::new(one(carousel))
            .orthogonal_scrolling_behavior(OrthogonalScrollingBehavior::GroupPagingCentered)
            .content_insets(EdgeInsets::new(16.0, 8.0, 16.0, 8.0))
            .boundary_supplementary_items(one(header))
            .decoration_items(one(DecorationItem::new("rounded-background")))
            .visible_items_invalidation_handler(|items, offset, _environment| {
                log::debug!("{} visible at offset {:?}", items.len(), offset);
            })))
    })
    .register_decoration_renderer("rounded-background", Arc::new(RoundedBackground))
    .build();

    let environment = Environment::new(Size::new(390.0, 844.0));
    let section = layout
        .layout_section(0, &environment)
        .expect("the model declares one section");
    println!("{section:#?}");
    println!(
        "registered decorations: {:?}",
        layout.registered_decoration_kinds().collect::<Vec<_>>()
    );
}
