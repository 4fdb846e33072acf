//! A two-column grid of square cells with a section header.

use trellis::prelude::*;

fn main() {
    env_logger::init();

    let layout = Compose::with_environment(|_environment| {
        LayoutModel::new(one(Section::new(one(Group::horizontal_repeated(
            2,
            Item::new()
                .width(Dimension::Fractional(0.5))
                .height(Dimension::Fractional(1.0))
                .content_insets(EdgeInsets::all(4.0)),
        )
        .width(Dimension::Fractional(1.0))
        .height(Dimension::Fractional(0.25))))
        .inter_group_spacing(8.0)
        .boundary_supplementary_items(one(BoundarySupplementaryItem::new("header")
            .height(Dimension::Absolute(44.0))
            .alignment(RectAlignment::Top)))))
    })
    .build();

    let environment = Environment::new(Size::new(390.0, 844.0));
    let section = layout
        .layout_section(0, &environment)
        .expect("the model declares one section");
    println!("{section:#?}");
}
