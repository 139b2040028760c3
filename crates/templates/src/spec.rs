use findoc_types::TextAlign;

/// Layout constants of one document kind. Heights and widths are in
/// millimetres, font sizes in points. Contract-like documents use a denser
/// line height than proofs and receipts.
#[derive(Debug, Clone, Copy)]
pub struct LayoutMetrics {
    pub line_height: f32,
    pub body_size: f32,
    /// Width of the bold key cell in key/value rows.
    pub key_width: f32,
    /// Height of a section title cell.
    pub title_height: f32,
    /// Vertical gap after a section title.
    pub title_gap: f32,
    /// Vertical gap after the centered page heading.
    pub heading_gap: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct FooterSpec {
    /// Right-aligned issuing-entity label.
    pub entity: &'static str,
    /// Emit a left-aligned "Emitido em" timestamp (statement kinds).
    pub timestamp: bool,
}

/// A line of the repeated page header, below the heading (statement kinds).
#[derive(Debug, Clone, Copy)]
pub enum IntroLine {
    Text {
        text: &'static str,
        size: f32,
        bold: bool,
        height: f32,
        /// Draw with wrapping instead of a single cell.
        wrap: bool,
    },
    Gap(f32),
}

/// How a field-dump section lays out each request field.
#[derive(Debug, Clone, Copy)]
pub enum FieldListStyle {
    /// One wrapped line per field: "key: value".
    Inline,
    /// Bold key cell of the given width, wrapped value beside it.
    KeyCell(f32),
}

#[derive(Debug, Clone, Copy)]
pub enum SectionItem {
    /// Bold key cell and wrapped value. An empty label renders an empty
    /// key cell, producing an indented continuation line.
    KeyValue {
        label: &'static str,
        value: &'static str,
    },
    Paragraph {
        text: &'static str,
        align: TextAlign,
        /// Extra left margin, e.g. for list clauses.
        indent: f32,
    },
    /// A single full-width cell on its own line.
    Line {
        text: &'static str,
        align: TextAlign,
        /// Font size override; `None` uses the body size.
        size: Option<f32>,
    },
    /// Every request field, in payload order.
    AllFields(FieldListStyle),
    Gap(f32),
}

#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub title: Option<&'static str>,
    /// Skip the whole section when this field is absent or empty.
    pub present_if: Option<&'static str>,
    pub items: &'static [SectionItem],
    pub gap_after: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub width: f32,
    pub align: TextAlign,
}

#[derive(Debug, Clone, Copy)]
pub struct SummarySpec {
    /// Label drawn right-aligned across all but the last column; the value
    /// cell shows the last cell of the last table row.
    pub label: &'static str,
    pub font_size: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub columns: &'static [Column],
    pub header_size: f32,
    pub body_size: f32,
    pub row_height: f32,
    pub summary: Option<SummarySpec>,
}

impl TableSpec {
    pub fn arity(&self) -> usize {
        self.columns.len()
    }
}

/// Two-column signature block with a shared vertical anchor.
#[derive(Debug, Clone, Copy)]
pub struct SignatureSpec {
    pub title: &'static str,
    /// Gap between the title and the signature columns.
    pub lead: f32,
    pub left: &'static str,
    pub right: &'static str,
    /// Date line under each column, e.g. "Data: {data_assinatura|____/____/______}".
    pub date_line: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DocumentTemplate {
    /// Centered bold heading on every page.
    pub heading: &'static str,
    pub heading_size: f32,
    /// Info-dictionary title, with placeholders.
    pub title: &'static str,
    pub metrics: LayoutMetrics,
    pub footer: FooterSpec,
    pub intro: &'static [IntroLine],
    pub sections: &'static [SectionSpec],
    pub table: Option<TableSpec>,
    pub signature: Option<SignatureSpec>,
}
