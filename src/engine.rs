//! The renderer engine.
//!
//! Rendering is one linear pass: open the canvas with the kind's page
//! chrome, walk the template's sections, draw the table and signature
//! block when the template declares them, and serialize. The only branch
//! repeated per row is the page-break check.

use crate::error::RenderError;
use crate::request::{DocumentRequest, FieldMap};
use chrono::{Local, NaiveDateTime};
use findoc_canvas::{CanvasError, Ln, PageChrome, PageConfig, PdfCanvas};
use findoc_templates::{
    Column, DocumentTemplate, FieldListStyle, IntroLine, LayoutMetrics, SectionItem, SectionSpec,
    SignatureSpec, TableSpec, interpolate, template,
};
use findoc_types::{Color, FontStyle, FontWeight, TextAlign};

const AUTHOR: &str = "Fininvest Platform";

/// Height of the centered heading cell on every page.
const HEADING_HEIGHT: f32 = 10.0;

/// Section titles are always 12 pt bold, independent of the body size.
const SECTION_TITLE_SIZE: f32 = 12.0;

const SIGNATURE_RULE: &str = "_____________________________";

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// The encoded PDF.
    pub bytes: Vec<u8>,
    pub title: String,
    pub author: String,
}

/// Renders one document request to an in-memory PDF.
///
/// Missing fields fall back to their template defaults and malformed table
/// rows are skipped with a warning; the only fatal errors are canvas-level
/// failures.
pub fn render(request: &DocumentRequest) -> Result<RenderedDocument, RenderError> {
    let template = template(request.kind);
    let now = request
        .issued_at
        .unwrap_or_else(|| Local::now().naive_local());

    let chrome = DocumentChrome::build(template, &request.fields, now);
    let mut canvas = PdfCanvas::new(PageConfig::default(), Box::new(chrome));
    canvas.add_page()?;

    for section in template.sections {
        render_section(&mut canvas, &template.metrics, section, &request.fields, now)?;
    }
    if let Some(table) = &template.table {
        render_table(&mut canvas, table, &request.rows)?;
    }
    if let Some(signature) = &template.signature {
        render_signature(
            &mut canvas,
            &template.metrics,
            signature,
            &request.fields,
            now,
        )?;
    }

    let title = interpolate(template.title, &request.fields, now);
    let bytes = canvas.finish(&title, AUTHOR)?;
    log::debug!(
        "rendered {} document, {} bytes",
        request.kind,
        bytes.len()
    );
    Ok(RenderedDocument {
        bytes,
        title,
        author: AUTHOR.to_string(),
    })
}

fn render_section(
    canvas: &mut PdfCanvas,
    metrics: &LayoutMetrics,
    section: &SectionSpec,
    fields: &FieldMap,
    now: NaiveDateTime,
) -> Result<(), CanvasError> {
    if let Some(field) = section.present_if
        && fields.get(field).is_none_or(str::is_empty)
    {
        return Ok(());
    }

    if let Some(title) = section.title {
        section_title(canvas, metrics, title)?;
    }

    for item in section.items {
        match *item {
            SectionItem::KeyValue { label, value } => {
                let value = interpolate(value, fields, now);
                key_value(canvas, metrics, label, &value)?;
            }
            SectionItem::Paragraph {
                text,
                align,
                indent,
            } => {
                canvas.set_font(FontWeight::Regular, FontStyle::Normal, metrics.body_size);
                if indent > 0.0 {
                    canvas.set_x(canvas.left_margin() + indent);
                }
                let text = interpolate(text, fields, now);
                canvas.multi_cell(0.0, metrics.line_height, &text, align)?;
                canvas.ln(metrics.line_height / 2.0);
            }
            SectionItem::Line { text, align, size } => {
                let size = size.unwrap_or(metrics.body_size);
                canvas.set_font(FontWeight::Regular, FontStyle::Normal, size);
                let text = interpolate(text, fields, now);
                canvas.cell(0.0, metrics.line_height, &text, false, Ln::NewLine, align, false)?;
            }
            SectionItem::AllFields(style) => {
                all_fields(canvas, metrics, style, fields)?;
            }
            SectionItem::Gap(height) => canvas.ln(height),
        }
    }

    if section.gap_after > 0.0 {
        canvas.ln(section.gap_after);
    }
    Ok(())
}

fn section_title(
    canvas: &mut PdfCanvas,
    metrics: &LayoutMetrics,
    title: &str,
) -> Result<(), CanvasError> {
    canvas.set_font(FontWeight::Bold, FontStyle::Normal, SECTION_TITLE_SIZE);
    canvas.cell(
        0.0,
        metrics.title_height,
        title,
        false,
        Ln::NewLine,
        TextAlign::Left,
        false,
    )?;
    canvas.ln(metrics.title_gap);
    Ok(())
}

/// Bold key in a fixed-width cell, wrapped value in the remaining width.
/// An empty label leaves the key cell blank (continuation line).
fn key_value(
    canvas: &mut PdfCanvas,
    metrics: &LayoutMetrics,
    label: &str,
    value: &str,
) -> Result<(), CanvasError> {
    canvas.set_font(FontWeight::Bold, FontStyle::Normal, metrics.body_size);
    let key_text = if label.is_empty() {
        String::new()
    } else {
        format!("{label}:")
    };
    canvas.cell(
        metrics.key_width,
        metrics.line_height,
        &key_text,
        false,
        Ln::Right,
        TextAlign::Left,
        false,
    )?;
    canvas.set_font(FontWeight::Regular, FontStyle::Normal, metrics.body_size);
    canvas.multi_cell(0.0, metrics.line_height, value, TextAlign::Left)
}

/// Dumps every request field in payload order.
fn all_fields(
    canvas: &mut PdfCanvas,
    metrics: &LayoutMetrics,
    style: FieldListStyle,
    fields: &FieldMap,
) -> Result<(), CanvasError> {
    for (key, value) in fields.iter() {
        match style {
            FieldListStyle::Inline => {
                canvas.set_font(FontWeight::Regular, FontStyle::Normal, metrics.body_size);
                canvas.multi_cell(
                    0.0,
                    metrics.line_height,
                    &format!("{key}: {value}"),
                    TextAlign::Left,
                )?;
            }
            FieldListStyle::KeyCell(width) => {
                canvas.set_font(FontWeight::Bold, FontStyle::Normal, metrics.body_size);
                canvas.cell(
                    width,
                    metrics.line_height,
                    &format!("{key}:"),
                    false,
                    Ln::Right,
                    TextAlign::Left,
                    false,
                )?;
                canvas.set_font(FontWeight::Regular, FontStyle::Normal, metrics.body_size);
                canvas.multi_cell(0.0, metrics.line_height, value, TextAlign::Left)?;
            }
        }
    }
    canvas.ln(metrics.line_height);
    Ok(())
}

fn render_table(
    canvas: &mut PdfCanvas,
    table: &TableSpec,
    rows: &[Vec<String>],
) -> Result<(), CanvasError> {
    for (index, row) in rows.iter().enumerate() {
        if row.len() != table.arity() {
            log::warn!(
                "skipping table row {index}: expected {} cells, got {}",
                table.arity(),
                row.len()
            );
            continue;
        }
        // Break before the row so it never straddles the bottom margin.
        if canvas.will_break(table.row_height) {
            canvas.add_page()?;
        }
        canvas.set_font(FontWeight::Regular, FontStyle::Normal, table.body_size);
        for (column, value) in table.columns.iter().zip(row) {
            canvas.cell(
                column.width,
                table.row_height,
                value,
                true,
                Ln::Right,
                column.align,
                false,
            )?;
        }
        canvas.ln(table.row_height);
    }

    if let Some(summary) = &table.summary
        && let Some(last_row) = rows.iter().rev().find(|row| row.len() == table.arity())
        && let Some(value) = last_row.last()
    {
        canvas.ln(5.0);
        canvas.set_font(FontWeight::Bold, FontStyle::Normal, summary.font_size);
        let label_width: f32 = label_span(table.columns);
        canvas.cell(
            label_width,
            table.row_height,
            summary.label,
            false,
            Ln::Right,
            TextAlign::Right,
            false,
        )?;
        let value_width = table.columns[table.arity() - 1].width;
        canvas.cell(
            value_width,
            table.row_height,
            value,
            true,
            Ln::NewLine,
            TextAlign::Right,
            false,
        )?;
    }
    Ok(())
}

/// Combined width of all but the last column.
fn label_span(columns: &[Column]) -> f32 {
    columns[..columns.len() - 1].iter().map(|c| c.width).sum()
}

/// Two-column signature block sharing one vertical anchor, each column a
/// centered label, a signature rule, and a date line.
fn render_signature(
    canvas: &mut PdfCanvas,
    metrics: &LayoutMetrics,
    signature: &SignatureSpec,
    fields: &FieldMap,
    now: NaiveDateTime,
) -> Result<(), CanvasError> {
    section_title(canvas, metrics, signature.title)?;
    canvas.ln(signature.lead);

    let anchor = canvas.y();
    let column_width = canvas.content_width() / 2.0 - 10.0;
    let left_x = canvas.left_margin();
    let right_x = left_x + column_width + 20.0;

    canvas.set_font(FontWeight::Regular, FontStyle::Normal, metrics.body_size);
    canvas.set_x(left_x);
    canvas.multi_cell(
        column_width,
        metrics.line_height,
        &format!("{}\n\n{SIGNATURE_RULE}", signature.left),
        TextAlign::Center,
    )?;

    canvas.set_y(anchor);
    canvas.set_x(right_x);
    canvas.multi_cell(
        column_width,
        metrics.line_height,
        &format!("{}\n\n{SIGNATURE_RULE}", signature.right),
        TextAlign::Center,
    )?;
    canvas.ln(5.0);

    let date_line = interpolate(signature.date_line, fields, now);
    canvas.set_x(left_x);
    canvas.cell(
        column_width,
        metrics.line_height,
        &date_line,
        false,
        Ln::Right,
        TextAlign::Center,
        false,
    )?;
    canvas.set_x(right_x);
    canvas.cell(
        column_width,
        metrics.line_height,
        &date_line,
        false,
        Ln::NewLine,
        TextAlign::Center,
        false,
    )?;
    Ok(())
}

/// Resolved per-page chrome for one document: the centered heading, the
/// repeated intro lines and table header (statement kinds), and the
/// page-number/entity/timestamp footer.
struct DocumentChrome {
    heading: &'static str,
    heading_size: f32,
    heading_gap: f32,
    intro: Vec<ResolvedIntro>,
    table_header: Option<&'static TableSpec>,
    entity: &'static str,
    timestamp_line: Option<String>,
}

enum ResolvedIntro {
    Text {
        text: String,
        size: f32,
        bold: bool,
        height: f32,
        wrap: bool,
    },
    Gap(f32),
}

impl DocumentChrome {
    fn build(template: &'static DocumentTemplate, fields: &FieldMap, now: NaiveDateTime) -> Self {
        let intro = template
            .intro
            .iter()
            .map(|line| match *line {
                IntroLine::Text {
                    text,
                    size,
                    bold,
                    height,
                    wrap,
                } => ResolvedIntro::Text {
                    text: interpolate(text, fields, now),
                    size,
                    bold,
                    height,
                    wrap,
                },
                IntroLine::Gap(height) => ResolvedIntro::Gap(height),
            })
            .collect();

        let timestamp_line = template.footer.timestamp.then(|| {
            format!("Emitido em: {}", now.format("%Y-%m-%d %H:%M:%S"))
        });

        Self {
            heading: template.heading,
            heading_size: template.heading_size,
            heading_gap: template.metrics.heading_gap,
            intro,
            table_header: template.table.as_ref(),
            entity: template.footer.entity,
            timestamp_line,
        }
    }
}

impl PageChrome for DocumentChrome {
    fn header(&self, canvas: &mut PdfCanvas) -> Result<(), CanvasError> {
        canvas.set_font(FontWeight::Bold, FontStyle::Normal, self.heading_size);
        // Width-based centering keeps the title centered whatever the face.
        let title_width = canvas.string_width(self.heading) + 6.0;
        canvas.set_x((canvas.page_width() - title_width) / 2.0);
        canvas.cell(
            title_width,
            HEADING_HEIGHT,
            self.heading,
            false,
            Ln::NewLine,
            TextAlign::Center,
            false,
        )?;
        canvas.ln(self.heading_gap);

        for line in &self.intro {
            match line {
                ResolvedIntro::Text {
                    text,
                    size,
                    bold,
                    height,
                    wrap,
                } => {
                    let weight = if *bold {
                        FontWeight::Bold
                    } else {
                        FontWeight::Regular
                    };
                    canvas.set_font(weight, FontStyle::Normal, *size);
                    if *wrap {
                        canvas.multi_cell(0.0, *height, text, TextAlign::Left)?;
                    } else {
                        canvas.cell(
                            0.0,
                            *height,
                            text,
                            false,
                            Ln::NewLine,
                            TextAlign::Left,
                            false,
                        )?;
                    }
                }
                ResolvedIntro::Gap(height) => canvas.ln(*height),
            }
        }

        if let Some(table) = self.table_header {
            canvas.set_font(FontWeight::Bold, FontStyle::Normal, table.header_size);
            canvas.set_fill_color(Color::gray(230));
            for column in table.columns {
                canvas.cell(
                    column.width,
                    table.row_height,
                    column.label,
                    true,
                    Ln::Right,
                    TextAlign::Center,
                    true,
                )?;
            }
            canvas.ln(table.row_height);
        }
        Ok(())
    }

    fn footer(&self, canvas: &mut PdfCanvas) -> Result<(), CanvasError> {
        canvas.set_y(-15.0);
        canvas.set_font(FontWeight::Regular, FontStyle::Oblique, 8.0);
        canvas.set_text_color(Color::gray(128));
        canvas.cell(
            0.0,
            10.0,
            &format!("Página {}", canvas.page_no()),
            false,
            Ln::Right,
            TextAlign::Center,
            false,
        )?;
        if let Some(line) = &self.timestamp_line {
            canvas.set_x(canvas.left_margin());
            canvas.cell(0.0, 10.0, line, false, Ln::Right, TextAlign::Left, false)?;
        }
        canvas.set_x(canvas.left_margin());
        canvas.cell(
            0.0,
            10.0,
            self.entity,
            false,
            Ln::Right,
            TextAlign::Right,
            false,
        )?;
        Ok(())
    }
}
