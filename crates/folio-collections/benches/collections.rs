//! Benchmarks for page collection lookups and cache refresh.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use folio_collections::{Page, PageCollections, PageKind};
use folio_config::ContentConfig;

/// Build collections with `sections` sections of `per_section` pages each.
fn create_collections(sections: usize, per_section: usize) -> PageCollections {
    let mut collections = PageCollections::new();
    collections.add_page(Page::new(PageKind::Home, "_index.md").into_ref());

    for s in 0..sections {
        let section = format!("section-{s}");
        collections.add_page(
            Page::new(PageKind::Section, format!("{section}/_index.md"))
                .with_sections([section.as_str()])
                .into_ref(),
        );
        for p in 0..per_section {
            collections.add_page(
                Page::new(PageKind::Page, format!("{section}/page-{p}.md"))
                    .with_sections([section.as_str()])
                    .into_ref(),
            );
        }
    }

    collections.assemble(&ContentConfig::default());
    collections.refresh_page_caches();
    collections
}

fn bench_get_page(c: &mut Criterion) {
    let collections = create_collections(20, 50);

    let mut group = c.benchmark_group("get_page");

    group.bench_function("home", |b| {
        b.iter(|| collections.get_page(PageKind::Home, &[]));
    });

    group.bench_function("section_hit", |b| {
        b.iter(|| collections.get_page(PageKind::Section, &["section-19"]));
    });

    group.bench_function("section_miss", |b| {
        b.iter(|| collections.get_page(PageKind::Section, &["nonexistent"]));
    });

    group.finish();
}

fn bench_refresh_page_caches(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh_page_caches");

    for size in [10, 100, 1000] {
        let mut collections = create_collections(10, size / 10);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| collections.refresh_page_caches());
        });
    }

    group.finish();
}

fn bench_replace_page(c: &mut Criterion) {
    let mut collections = create_collections(10, 100);
    let page = Page::new(PageKind::Page, "section-0/page-0.md")
        .with_sections(["section-0"])
        .into_ref();

    c.bench_function("replace_page", |b| {
        b.iter(|| collections.replace_page(std::sync::Arc::clone(&page)));
    });
}

criterion_group!(
    benches,
    bench_get_page,
    bench_refresh_page_caches,
    bench_replace_page
);
criterion_main!(benches);
