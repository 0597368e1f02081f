// File: crates/graph-render-skia/src/text.rs
// Summary: Text shaper over Skia textlayout; measures and paints single-line labels with alignment.

use graph_core::surface::{FontSpec, FontStyle, TextAlign, TextBaseline};
use graph_core::types::{Color, Pos};
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use skia_safe as skia;

const FALLBACK_FAMILIES: [&str; 6] = ["Helvetica", "Arial", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontSpec, color: Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(to_skia(color));
        ts.set_font_style(match font.style {
            FontStyle::Normal => skia::FontStyle::normal(),
            FontStyle::Bold => skia::FontStyle::bold(),
            FontStyle::Italic => skia::FontStyle::italic(),
        });
        let mut families: Vec<&str> = font.family.split(',').map(str::trim).filter(|f| !f.is_empty()).collect();
        families.extend(FALLBACK_FAMILIES);
        ts.set_font_families(&families[..]);
        ts
    }

    pub fn layout(&self, text: &str, font: &FontSpec, color: Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        self.layout(text, font, Color::TRANSPARENT).longest_line()
    }

    /// Paint `text` so that `pos` is its anchor under `align`/`baseline`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        pos: Pos,
        font: &FontSpec,
        color: Color,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        let p = self.layout(text, font, color);
        let width = p.longest_line();
        let x = match align {
            TextAlign::Left => pos.x,
            TextAlign::Center => pos.x - width / 2.0,
            TextAlign::Right => pos.x - width,
        };
        // Paragraph paints from its top-left corner
        let y = match baseline {
            TextBaseline::Top => pos.y,
            TextBaseline::Middle => pos.y - p.height() / 2.0,
            TextBaseline::Alphabetic => pos.y - p.alphabetic_baseline(),
        };
        p.paint(canvas, (x, y));
    }
}

pub(crate) fn to_skia(color: Color) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}
