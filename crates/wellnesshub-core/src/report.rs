//! PDF export of the journal.
//!
//! Renders all entries into a paginated A4 document with the built-in
//! Helvetica fonts, so no font files ship with the binary. Layout is a
//! simple top-to-bottom cursor with word wrapping at a fixed column
//! width; a new page starts whenever the cursor would run past the
//! bottom margin.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::error::{CoreError, Result};
use crate::journal::JournalEntry;
use crate::storage::ReportConfig;

const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;
/// Vertical advance per point of font size.
const LINE_SPACING: f32 = 0.55;

/// Render the journal to a PDF file at `path`.
///
/// Entries are rendered in the order given, which for
/// [`Database::list_entries`](crate::storage::Database::list_entries)
/// means newest first.
///
/// # Errors
/// Returns [`CoreError::Report`] when rendering fails and an IO error
/// when the file cannot be written.
pub fn export_journal(
    entries: &[JournalEntry],
    config: &ReportConfig,
    path: &Path,
    generated_on: NaiveDate,
) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(
        "Wellness Hub Report",
        Mm(config.page_width_mm),
        Mm(config.page_height_mm),
        "content",
    );
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| CoreError::Report(e.to_string()))?;
    let bold_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| CoreError::Report(e.to_string()))?;

    {
        let mut writer = PageWriter {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y: config.page_height_mm - config.margin_mm,
            config,
        };

        writer.line("Wellness Hub Report", TITLE_SIZE, &bold_font);
        writer.line(
            &format!("Generated on: {generated_on}"),
            BODY_SIZE,
            &body_font,
        );
        writer.gap(6.0);

        if entries.is_empty() {
            writer.line("No journal entries yet.", BODY_SIZE, &body_font);
        }
        for entry in entries {
            writer.line(&entry.title, HEADING_SIZE, &bold_font);
            writer.line(
                &format!("{} | Mood: {}", entry.date, entry.mood.label()),
                BODY_SIZE,
                &body_font,
            );
            for line in wrap(&entry.content, config.wrap_cols) {
                writer.line(&line, BODY_SIZE, &body_font);
            }
            writer.gap(4.0);
        }
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| CoreError::Report(e.to_string()))?;
    log::info!("exported {} journal entries to {}", entries.len(), path.display());
    Ok(())
}

/// Cursor over the current page; adds pages as the cursor runs out.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    config: &'a ReportConfig,
}

impl PageWriter<'_> {
    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        let advance = size * LINE_SPACING;
        if self.y - advance < self.config.margin_mm {
            self.new_page();
        }
        self.y -= advance;
        self.layer
            .use_text(text, size, Mm(self.config.margin_mm), Mm(self.y), font);
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            Mm(self.config.page_width_mm),
            Mm(self.config.page_height_mm),
            "content",
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = self.config.page_height_mm - self.config.margin_mm;
    }
}

/// Greedy word wrap at `cols` characters. Words longer than a line get a
/// line of their own rather than being split.
fn wrap(text: &str, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.chars().count() + 1 + word.chars().count() <= cols {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
