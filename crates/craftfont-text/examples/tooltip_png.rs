//! Tooltip PNG Example
//!
//! Renders a few formatted lines and a tooltip into a PNG file:
//! - Loading the glyph atlas from disk
//! - Shadowed formatted text with color and style codes
//! - A tooltip box around a single line
//!
//! Without an atlas path a synthetic block atlas is used, so the output shows glyph boxes
//! instead of letters.
//!
//! ## Usage
//! ```bash
//! cargo run -p craftfont-text --example tooltip_png -- path/to/ascii.png out.png
//! ```

use craftfont_core::logging;
use craftfont_core::profiling::{ProfilingBackend, init_profiling, new_frame};
use craftfont_render::{Color, Pixmap, RasterSurface};
use craftfont_text::{FontRenderer, GlyphAtlas, RendererConfig, TextResult, TooltipRenderer};
use futures_lite::future::block_on;

const LINES: &[&str] = &[
    "§fPlain white text",
    "§cRed §6Gold §eYellow §aGreen §bAqua §9Blue §dPink",
    "§lBold§r, §oitalic§r, §nunderlined§r and §mstruck§r",
    "§7Unknown codes stay put: §zHello",
];

fn main() -> TextResult<()> {
    logging::init();
    init_profiling(ProfilingBackend::PuffinHttp);

    let mut args = std::env::args().skip(1);
    let atlas_path = args.next();
    let output = args.next().unwrap_or_else(|| "tooltip.png".to_string());

    let mut font = FontRenderer::new(RendererConfig::default())?;
    match atlas_path {
        Some(path) => block_on(font.load_atlas(path.as_str()))?,
        None => {
            tracing::info!("No atlas given, using a synthetic block atlas");
            font.set_atlas(GlyphAtlas::from_image(craftfont_test_utils::solid_atlas(), 1)?)?;
        }
    }

    new_frame();
    let mut canvas = Pixmap::new(640, 200);
    canvas.fill_rect(
        craftfont_core::geometry::Rect::new(0, 0, 640, 200),
        Color::from_hex(0x3C3C3C),
    );

    let line_height = font.text_height("") as i32 + 4;
    for (i, line) in LINES.iter().enumerate() {
        font.draw_formatted_with_shadow(&mut canvas, line, 8, 8 + i as i32 * line_height)?;
    }

    let mut tooltip = TooltipRenderer::new(font);
    let text = "§bDiamond Sword";
    let size = tooltip.tooltip_size(text);
    tooltip.render_tooltip(&mut canvas, text, 8, 8 + LINES.len() as i32 * line_height + 8)?;
    tracing::info!("Tooltip box is {}x{}", size.width, size.height);

    match canvas.save_png(&output) {
        Ok(()) => tracing::info!("Wrote {}", output),
        Err(e) => tracing::error!("Failed to write {}: {}", output, e),
    }
    Ok(())
}
