//! Width measurement properties.

use craftfont_text::glyph::{SPACE_WIDTH, glyph_width};
use craftfont_text::{FontRenderer, RendererConfig, parse_formatted};

fn renderer(scale: u32) -> FontRenderer {
    FontRenderer::new(RendererConfig::new().with_scale(scale)).unwrap()
}

#[test]
fn plain_width_is_sum_of_glyph_widths() {
    for scale in 1..=4 {
        let renderer = renderer(scale);
        for text in ["Hello", "Redstone", "a b c", "Zz!?", "", "\u{00a0}x"] {
            let expected: u32 = text.chars().map(|c| glyph_width(c, scale)).sum();
            assert_eq!(renderer.measure_plain_width(text, false), expected, "{:?}", text);
        }
    }
}

#[test]
fn bold_adds_one_unit_per_char() {
    for scale in 1..=3 {
        let renderer = renderer(scale);
        for text in ["Hello", "§", "x y", "日本"] {
            let plain = renderer.measure_plain_width(text, false);
            let bold = renderer.measure_plain_width(text, true);
            assert_eq!(bold, plain + scale * text.chars().count() as u32);
        }
    }
}

#[test]
fn known_widths() {
    let renderer = renderer(1);
    assert_eq!(renderer.measure_plain_width("Red", false), 18);
    assert_eq!(renderer.measure_plain_width("Hello", false), 24);
    assert_eq!(renderer.measure_plain_width(" ", false), SPACE_WIDTH);
    assert_eq!(renderer.measure_plain_width("\u{00a0}", false), SPACE_WIDTH);
}

#[test]
fn untabled_chars_are_zero_width() {
    let renderer = renderer(2);
    assert_eq!(renderer.measure_plain_width("日本語", false), 0);
    assert_eq!(
        renderer.measure_plain_width("a日b", false),
        renderer.measure_plain_width("ab", false)
    );
}

#[test]
fn redstone_runs_and_offsets() {
    let runs = parse_formatted("§1Red§2stone", false, 1);
    assert_eq!(runs.len(), 2);
    assert_eq!((runs[0].text.as_str(), runs[0].style.color.as_char()), ("Red", '1'));
    assert_eq!((runs[1].text.as_str(), runs[1].style.color.as_char()), ("stone", '2'));
    assert_eq!(runs[1].offset, renderer(1).measure_plain_width("Red", false));
}

#[test]
fn formatted_text_width_matches_runs() {
    let renderer = renderer(2);
    let text = "§lBold§r and §oitalic";
    let from_runs: u32 = parse_formatted(text, false, 2)
        .iter()
        .map(|run| run.width(2))
        .sum();
    assert_eq!(renderer.text_width(text), from_runs);
    assert_eq!(
        renderer.text_width(text),
        renderer.measure_plain_width("Bold", true)
            + renderer.measure_plain_width(" and italic", false)
    );
}
