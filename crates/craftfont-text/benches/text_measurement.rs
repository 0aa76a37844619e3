//! Benchmarks for measurement, parsing and run drawing

use craftfont_render::Pixmap;
use craftfont_test_utils::solid_atlas;
use craftfont_text::{FontRenderer, GlyphAtlas, RendererConfig, parse_formatted};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn setup() -> FontRenderer {
    let mut renderer = FontRenderer::new(RendererConfig::default()).expect("valid config");
    renderer
        .set_atlas(GlyphAtlas::from_image(solid_atlas(), 1).expect("valid atlas"))
        .expect("atlas rescales");
    renderer
}

fn bench_measure(c: &mut Criterion) {
    let renderer = setup();
    let mut group = c.benchmark_group("measure");

    let long_text = "Lorem ipsum dolor sit amet. ".repeat(20);
    let texts: Vec<(&str, &str)> = vec![
        ("single_char", "A"),
        ("single_word", "Hello"),
        ("formatted", "§1Red§2stone §l§nDust"),
        ("long_text", &long_text),
    ];

    for (name, content) in texts {
        group.bench_function(name, |b| {
            b.iter(|| black_box(renderer.text_width(black_box(content))));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let text = "§6Golden §lApple §r§7(§oEnchanted§r§7) §zliteral".repeat(8);
    c.bench_function("parse_formatted", |b| {
        b.iter(|| black_box(parse_formatted(black_box(&text), false, 2)));
    });
}

fn bench_draw(c: &mut Criterion) {
    let mut renderer = setup();
    let mut canvas = Pixmap::new(1024, 64);
    let mut group = c.benchmark_group("draw");

    group.bench_function("plain", |b| {
        b.iter(|| {
            renderer
                .draw_formatted(&mut canvas, black_box("The quick brown fox"), 0, 0, false)
                .expect("atlas is ready")
        });
    });
    group.bench_function("shadowed_styled", |b| {
        b.iter(|| {
            let text = black_box("§c§lThe §oquick §nbrown");
            renderer
                .draw_formatted_with_shadow(&mut canvas, text, 0, 0)
                .expect("atlas is ready")
        });
    });

    group.finish();
}

criterion_group!(benches, bench_measure, bench_parse, bench_draw);
criterion_main!(benches);
