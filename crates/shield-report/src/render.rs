use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rgb};
use shield_core::entities::Scan;

use crate::error::RenderError;
use crate::layout::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM, Page, TITLE, compose, paginate};

/// A finished PDF document.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Render the forensic report for a persisted scan.
///
/// CPU-bound; async callers should run it on the blocking pool.
///
/// # Errors
///
/// Returns `RenderError::Pdf` if fonts cannot be registered or the document
/// cannot be serialized.
pub fn render_report(scan: &Scan, generated_at: DateTime<Utc>) -> Result<RenderedReport, RenderError> {
    let pages = paginate(&compose(scan, generated_at));

    let (doc, first_page, first_layer) = PdfDocument::new(
        format!("{TITLE} #{}", scan.id),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1".to_string(),
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let fonts = Fonts { regular, bold };

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_ref, layer_ref) = doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                format!("Page {}, Layer 1", index + 1),
            );
            doc.get_page(page_ref).get_layer(layer_ref)
        };
        draw_page(&layer, page, &fonts);
    }

    let page_count = pages.len();
    let bytes = doc
        .save_to_bytes()
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    tracing::debug!(scan_id = scan.id, pages = page_count, size = bytes.len(), "report rendered");
    Ok(RenderedReport {
        bytes,
        pages: page_count,
    })
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn draw_page(layer: &PdfLayerReference, page: &Page, fonts: &Fonts) {
    for line in &page.lines {
        let (r, g, b) = line.style.color();
        layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
        let font = if line.style.is_bold() {
            &fonts.bold
        } else {
            &fonts.regular
        };
        layer.use_text(
            line.text.clone(),
            line.style.font_size(),
            Mm(line.x_mm),
            Mm(line.y_mm),
            font,
        );
    }
}
