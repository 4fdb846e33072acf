use trellis::LayoutSection;
use trellis::prelude::*;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn environment(width: f32, height: f32) -> Environment {
    Environment::new(Size::new(width, height))
}

/// A section of `columns` equal-width cells in one full-width row.
pub fn grid_section(columns: usize) -> Section {
    Section::new(one(Group::horizontal_repeated(
        columns,
        Item::new()
            .width(Dimension::Fractional(1.0 / columns as f32))
            .content_insets(EdgeInsets::all(2.0)),
    )
    .height(Dimension::Fractional(0.25))))
}

/// A single full-width cell whose fixed height makes it identifiable.
pub fn banner_section(height: f32) -> Section {
    Section::new(one(
        Group::vertical(vec![Item::new().into()]).height(Dimension::Absolute(height)),
    ))
}

pub fn root_child_count(section: &LayoutSection) -> usize {
    section
        .as_group()
        .expect("expected a group section")
        .group
        .child_count()
}

pub fn root_height(section: &LayoutSection) -> Dimension {
    section
        .as_group()
        .expect("expected a group section")
        .group
        .size
        .height
}
