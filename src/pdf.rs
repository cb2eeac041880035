//! A [Renderer] that writes single-page PDFs using the built-in Courier font.

use crate::colour::colours;
use crate::error::LayoutError;
use crate::refs::{ObjectReferences, RefType};
use crate::renderer::{Grob, Renderer, TextDetails};
use crate::style::Style;
use crate::units::Pt;
use pdf_writer::{Finish, Name, Pdf, Rect};
use std::io::Write;

/// Font size used when a style has no `font-size`
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

// Courier metrics from the standard 14 font AFM, in 1/1000 em
const COURIER_ADVANCE: f32 = 600.0;
const COURIER_ASCENDER: f32 = 629.0;
const COURIER_DESCENDER: f32 = 157.0;

// control point distance for a quarter circle drawn as a cubic bezier
const KAPPA: f32 = 0.552_284_8;

/// Records drawing calls and writes them out as a PDF page.
///
/// Text is measured and drawn in Courier, which every PDF viewer provides, so
/// no font needs to be embedded. Understood style options are `font-size`,
/// `color` (text colour), and `fill` (rectangle colour); everything else is
/// ignored.
///
/// ```
/// use gridtext_layout::layout::{text_to_nodes, LayoutBox, ParBox};
/// use gridtext_layout::{PdfRenderer, Pt, Style};
///
/// let mut renderer = PdfRenderer::new();
/// let style = Style::new().with("font-size", 10.0);
/// let nodes = text_to_nodes("The quick brown fox", &style, &renderer);
/// let mut par = ParBox::new(nodes, Pt(12.0), Pt(0.0));
/// par.calc_layout(Pt(200.0), Pt(0.0));
/// par.place(Pt(72.0), Pt(700.0));
/// par.render(&mut renderer, Pt(0.0), Pt(0.0));
///
/// let mut pdf = Vec::new();
/// renderer.write((Pt(612.0), Pt(792.0)), &mut pdf).unwrap();
/// assert!(pdf.starts_with(b"%PDF"));
/// ```
#[derive(Debug, Default)]
pub struct PdfRenderer {
    grobs: Vec<Grob>,
}

impl PdfRenderer {
    pub fn new() -> PdfRenderer {
        PdfRenderer::default()
    }

    /// Everything drawn so far, without draining it
    pub fn grobs(&self) -> &[Grob] {
        &self.grobs
    }

    /// Drain the recorded grobs and write them as a one-page PDF of
    /// `page_size` (width, height)
    pub fn write<W: Write>(&mut self, page_size: (Pt, Pt), mut w: W) -> Result<(), LayoutError> {
        let grobs = self.collect_grobs();
        let content = render_grobs(&grobs)?;

        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        let catalog_id = refs.get(RefType::Catalog);
        let page_tree_id = refs.get(RefType::PageTree);
        writer.catalog(catalog_id).pages(page_tree_id);
        writer
            .pages(page_tree_id)
            .kids([refs.get(RefType::Page)])
            .count(1);

        write_page(&mut writer, &mut refs, page_size);
        writer
            .type1_font(refs.get(RefType::Font))
            .base_font(Name(b"Courier"));
        writer.stream(refs.get(RefType::Content), &content);

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

fn write_page(writer: &mut Pdf, refs: &mut ObjectReferences, page_size: (Pt, Pt)) {
    let mut page = writer.page(refs.get(RefType::Page));
    page.media_box(Rect::new(0.0, 0.0, page_size.0 .0, page_size.1 .0));
    page.parent(refs.get(RefType::PageTree));
    page.contents(refs.get(RefType::Content));
    page.resources()
        .fonts()
        .pair(Name(b"F1"), refs.get(RefType::Font));
    page.finish();
}

fn font_size(style: &Style) -> f32 {
    style.number("font-size").unwrap_or(DEFAULT_FONT_SIZE)
}

impl Renderer for PdfRenderer {
    fn text(&mut self, label: &str, x: Pt, y: Pt, style: &Style) {
        self.grobs.push(Grob::Text {
            label: label.to_string(),
            x,
            y,
            style: style.clone(),
        });
    }

    fn text_details(&self, label: &str, style: &Style) -> TextDetails {
        let size = font_size(style);
        let em = |units: f32| Pt(units * size / 1000.0);
        TextDetails {
            width: em(label.chars().count() as f32 * COURIER_ADVANCE),
            ascent: em(COURIER_ASCENDER),
            descent: em(COURIER_DESCENDER),
            space: em(COURIER_ADVANCE),
        }
    }

    fn rect(&mut self, x: Pt, y: Pt, width: Pt, height: Pt, style: &Style, radius: Pt) {
        self.grobs.push(Grob::Rect {
            x,
            y,
            width,
            height,
            style: style.clone(),
            radius,
        });
    }

    fn collect_grobs(&mut self) -> Vec<Grob> {
        std::mem::take(&mut self.grobs)
    }
}

/// Convert grobs into a PDF content stream
#[allow(clippy::write_with_newline)]
pub(crate) fn render_grobs(grobs: &[Grob]) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for grob in grobs {
        write!(&mut content, "q\n")?;
        match grob {
            Grob::Text { label, x, y, style } => {
                style
                    .colour("color")
                    .unwrap_or(colours::BLACK)
                    .write_fill(&mut content)?;
                write!(&mut content, "BT\n")?;
                write!(&mut content, "/F1 {} Tf\n", font_size(style))?;
                write!(&mut content, "{} {} Td\n", x.0, y.0)?;
                write!(&mut content, "({}) Tj\n", escape_text(label))?;
                write!(&mut content, "ET\n")?;
            }
            Grob::Rect {
                x,
                y,
                width,
                height,
                style,
                radius,
            } => {
                style
                    .colour("fill")
                    .unwrap_or(colours::LIGHT_GREY)
                    .write_fill(&mut content)?;
                write_rect_path(&mut content, *x, *y, *width, *height, *radius)?;
                write!(&mut content, "f\n")?;
            }
        }
        write!(&mut content, "Q\n")?;
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn write_rect_path(
    content: &mut Vec<u8>,
    x: Pt,
    y: Pt,
    width: Pt,
    height: Pt,
    radius: Pt,
) -> Result<(), std::io::Error> {
    let (x, y, w, h) = (x.0, y.0, width.0, height.0);
    let r = radius.0.min(w / 2.0).min(h / 2.0);
    if r <= 0.0 {
        return write!(content, "{x} {y} {w} {h} re\n");
    }

    let k = r * KAPPA;
    let (x2, y2) = (x + w, y + h);
    write!(content, "{} {} m\n", x + r, y)?;
    write!(content, "{} {} l\n", x2 - r, y)?;
    write!(content, "{} {} {} {} {} {} c\n", x2 - r + k, y, x2, y + r - k, x2, y + r)?;
    write!(content, "{} {} l\n", x2, y2 - r)?;
    write!(content, "{} {} {} {} {} {} c\n", x2, y2 - r + k, x2 - r + k, y2, x2 - r, y2)?;
    write!(content, "{} {} l\n", x + r, y2)?;
    write!(content, "{} {} {} {} {} {} c\n", x + r - k, y2, x, y2 - r + k, x, y2 - r)?;
    write!(content, "{} {} l\n", x, y + r)?;
    write!(content, "{} {} {} {} {} {} c\n", x, y + r - k, x + r - k, y, x + r, y)?;
    write!(content, "h\n")
}

/// Escape a label for a PDF literal string. Courier only covers ASCII here, so
/// anything else becomes `?`.
fn escape_text(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for ch in label.chars() {
        match ch {
            '(' | ')' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            c if c.is_ascii() && !c.is_ascii_control() => escaped.push(c),
            _ => escaped.push('?'),
        }
    }
    escaped
}
