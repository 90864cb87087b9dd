use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::info;
use wxagent_core::{AgentError, ReportRenderer};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 10.0;
const LINE_HEIGHT: f32 = 10.0;
const FONT_SIZE: f32 = 12.0;

// Helvetica at 12pt averages a little over 2mm per glyph.
const CHARS_PER_LINE: usize = 85;

fn render_err(e: impl ToString) -> AgentError {
    AgentError::Render(e.to_string())
}

/// Lays plain text out on A4 pages in Helvetica.
pub struct PdfRenderer {
    title: String,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self {
            title: "Weather Report".into(),
        }
    }

    pub fn render(&self, text: &str) -> Result<Vec<u8>, AgentError> {
        let (doc, page, layer) = PdfDocument::new(
            &self.title,
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_err)?;

        let top = PAGE_HEIGHT - MARGIN - LINE_HEIGHT;
        let mut current = doc.get_page(page).get_layer(layer);
        let mut y = top;
        let mut pages = 1;

        for line in wrap_text(text, CHARS_PER_LINE) {
            if y < MARGIN {
                let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                current = doc.get_page(page).get_layer(layer);
                y = top;
                pages += 1;
            }
            if !line.is_empty() {
                current.use_text(line, FONT_SIZE, Mm(MARGIN), Mm(y), &font);
            }
            y -= LINE_HEIGHT;
        }

        let bytes = doc.save_to_bytes().map_err(render_err)?;
        info!("RENDERER: {} page(s), {} bytes", pages, bytes.len());
        Ok(bytes)
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for PdfRenderer {
    fn save_to_pdf(&self, text: &str, path: &Path) -> Result<(), AgentError> {
        let bytes = self.render(text)?;
        std::fs::write(path, bytes)
            .map_err(|e| AgentError::Render(format!("{}: {}", path.display(), e)))
    }
}

/// Greedy word wrap. Newlines start a new paragraph; words longer than
/// `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                let chunk_len = chunk.len();
                let needed = if line_len == 0 { chunk_len } else { line_len + 1 + chunk_len };

                if needed > width && line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                if line_len > 0 {
                    line.push(' ');
                    line_len += 1;
                }
                line.extend(chunk);
                line_len += chunk_len;
            }
        }

        lines.push(line);
    }

    lines
}
