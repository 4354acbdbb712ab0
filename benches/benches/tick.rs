// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use lookout::geometry::{TickOrigin, ViewportSource};
use lookout::{HeadlessPage, Lookout, LookoutConfig};

/// A long page with `sections` sections, each holding a few reveal cards, a
/// sticky aside, and a table-of-contents link.
fn build_page(sections: u32) -> HeadlessPage {
    let section_height = 1_200.0;
    let mut page = HeadlessPage::new(800.0, f64::from(sections) * section_height + 60.0);

    let header = page.insert(Rect::new(0.0, 0.0, 1_200.0, 60.0));
    header.set_attribute("data-fixed-header", "");

    for s in 0..sections {
        let top = 60.0 + f64::from(s) * section_height;
        let section = page.insert(Rect::new(0.0, top, 1_200.0, top + section_height));
        let id = format!("s{s}");
        section.set_attribute("id", &id);

        let aside = page.insert_child(&section, Rect::new(0.0, top, 240.0, top + 300.0));
        aside.set_attribute("data-sticky", "");

        for c in 0..4 {
            let card_top = top + 100.0 + f64::from(c) * 250.0;
            let card = page.insert_child(
                &section,
                Rect::new(300.0, card_top, 900.0, card_top + 200.0),
            );
            card.set_attribute("data-reveal", "");
            if c % 2 == 1 {
                card.set_attribute("data-reveal-repeat", "repeat");
            }
        }

        let link = page.insert(Rect::ZERO);
        link.set_attribute("data-spy", "");
        link.set_attribute("href", &format!("#{id}"));
    }
    page
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookout_tick");
    group.sample_size(50);

    for &sections in &[8_u32, 64, 256] {
        let page = build_page(sections);

        group.bench_function(format!("discover(sections={sections})"), |b| {
            b.iter(|| black_box(Lookout::discover(&page, LookoutConfig::default(), ())));
        });

        group.bench_function(format!("scroll_sweep(sections={sections})"), |b| {
            b.iter_batched(
                || {
                    let mut lookout = Lookout::discover(&page, LookoutConfig::default(), ());
                    lookout.tick(&page, TickOrigin::InitialLoad, 0, ());
                    (page.clone(), lookout)
                },
                |(mut page, mut lookout)| {
                    let max_scroll = page.document_height() - page.viewport_height();
                    let mut now = 0;
                    let mut scroll = 0.0;
                    while scroll <= max_scroll {
                        page.set_scroll_top(scroll);
                        black_box(lookout.tick(&page, TickOrigin::Scroll, now, ()));
                        scroll += 400.0;
                        now += 16;
                    }
                    black_box(lookout);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
