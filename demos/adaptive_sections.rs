//! Column count and section set driven by the container width.
//!
//! The same composing closure produces different trees on different
//! passes because it re-reads the environment every time.

use trellis::prelude::*;

fn gallery(columns: usize) -> Section {
    Section::new(one(Group::horizontal_repeated(
        columns,
        Item::new()
            .width(Dimension::Fractional(1.0 / columns as f32))
            .content_insets(EdgeInsets::all(2.0)),
    )
    .height(Dimension::Fractional(0.3))))
}

fn banner() -> Section {
    Section::new(one(
        Group::vertical(vec![Item::new().into()]).height(Dimension::Absolute(120.0)),
    ))
}

fn main() {
    env_logger::init();

    let layout = Compose::with_environment(|environment| {
        let width = environment.container.effective_content_size.width;
        let columns = if width > 900.0 {
            4
        } else if width > 600.0 {
            3
        } else {
            2
        };
        LayoutModel::new(sequence([
            when(width > 600.0, || one(banner())),
            one(gallery(columns)),
            for_each(0..2, |_| one(gallery(columns * 2))),
        ]))
    })
    .configuration(LayoutConfiguration {
        scroll_direction: ScrollDirection::Vertical,
        inter_section_spacing: 16.0,
    })
    .build();

    for (size, section_count) in [
        (Size::new(390.0, 844.0), 3),
        (Size::new(1024.0, 768.0), 4),
    ] {
        let environment = Environment::new(size);
        println!("container {} x {}", size.width, size.height);
        for index in 0..section_count {
            let section = layout
                .layout_section(index, &environment)
                .expect("declared section");
            if let Some(group_section) = section.as_group() {
                println!(
                    "  section {index}: {} children",
                    group_section.group.child_count()
                );
            }
        }
    }

    // Asking past the declared range degrades to the last section and
    // is counted, so hosts can spot section-count drift.
    let environment = Environment::new(Size::new(390.0, 844.0));
    let _ = layout.layout_section(9, &environment);
    println!("out-of-range fallbacks: {}", layout.out_of_range_fallbacks());
}
