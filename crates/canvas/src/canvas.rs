use crate::chrome::PageChrome;
use crate::error::CanvasError;
use crate::metrics;
use crate::writer::PdfWriter;
use crate::encoding;
use findoc_types::{Color, FontStyle, FontWeight, Margins, Size, TextAlign};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Points per millimetre. All cursor arithmetic happens in millimetres and
/// is scaled at operator-emission time.
const K: f32 = 72.0 / 25.4;

/// Inner horizontal padding of a cell, in millimetres.
const CELL_PADDING: f32 = 1.0;

/// Border stroke width in millimetres.
const BORDER_WIDTH: f32 = 0.2;

/// Cursor behavior after a cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ln {
    /// Stay on the line; x advances past the cell.
    Right,
    /// Move below the cell and back to the left margin.
    NewLine,
    /// Move below the cell, keeping x at the cell's start.
    Below,
}

#[derive(Debug, Clone, Copy)]
pub struct PageConfig {
    /// Page size in millimetres.
    pub size: Size,
    /// `bottom` is the auto-page-break margin, not a drawing margin.
    pub margins: Margins,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            size: Size::a4(),
            margins: Margins::new(10.0, 10.0, 10.0, 20.0),
        }
    }
}

/// A paginated drawing surface with a top-down cursor.
///
/// The coordinate origin is the top-left page corner with y growing
/// downward; conversion to PDF's bottom-left origin happens when operators
/// are emitted. Drawing past the bottom margin triggers an automatic page
/// break, except while header/footer chrome is running.
pub struct PdfCanvas {
    writer: PdfWriter,
    config: PageConfig,
    chrome: Option<Box<dyn PageChrome>>,
    ops: Vec<Operation>,
    page_open: bool,
    page_no: usize,
    x: f32,
    y: f32,
    font_weight: FontWeight,
    font_style: FontStyle,
    font_size: f32,
    text_color: Color,
    fill_color: Color,
    in_chrome: bool,
}

impl PdfCanvas {
    pub fn new(config: PageConfig, chrome: Box<dyn PageChrome>) -> Self {
        Self {
            writer: PdfWriter::new(),
            config,
            chrome: Some(chrome),
            ops: Vec::new(),
            page_open: false,
            page_no: 0,
            x: config.margins.left,
            y: config.margins.top,
            font_weight: FontWeight::Regular,
            font_style: FontStyle::Normal,
            font_size: 12.0,
            text_color: Color::black(),
            fill_color: Color::black(),
            in_chrome: false,
        }
    }

    // --- geometry accessors ---

    pub fn page_width(&self) -> f32 {
        self.config.size.width
    }

    pub fn page_height(&self) -> f32 {
        self.config.size.height
    }

    pub fn left_margin(&self) -> f32 {
        self.config.margins.left
    }

    pub fn right_margin(&self) -> f32 {
        self.config.margins.right
    }

    /// Usable width between the side margins.
    pub fn content_width(&self) -> f32 {
        self.config.size.width - self.config.margins.left - self.config.margins.right
    }

    /// The y position past which content triggers a page break.
    pub fn page_break_trigger(&self) -> f32 {
        self.config.size.height - self.config.margins.bottom
    }

    /// True if a block of the given height would cross the break trigger.
    pub fn will_break(&self, height: f32) -> bool {
        self.y + height > self.page_break_trigger()
    }

    pub fn page_no(&self) -> usize {
        self.page_no
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Sets y; a negative value positions relative to the bottom edge.
    /// Resets x to the left margin.
    pub fn set_y(&mut self, y: f32) {
        self.y = if y < 0.0 {
            self.config.size.height + y
        } else {
            y
        };
        self.x = self.config.margins.left;
    }

    // --- state ---

    pub fn set_font(&mut self, weight: FontWeight, style: FontStyle, size: f32) {
        self.font_weight = weight;
        self.font_style = style;
        self.font_size = size;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Width of the string in the current font, in millimetres.
    pub fn string_width(&self, text: &str) -> f32 {
        let bytes = encoding::encode_win_ansi(text);
        let units = metrics::text_advance(&bytes, self.font_weight);
        units as f32 * self.font_size / 1000.0 / K
    }

    // --- pagination ---

    /// Closes the current page (if any) and opens a new one, running the
    /// footer and header chrome. Font and colors survive the transition.
    pub fn add_page(&mut self) -> Result<(), CanvasError> {
        let saved = (
            self.font_weight,
            self.font_style,
            self.font_size,
            self.text_color,
            self.fill_color,
        );
        self.close_page()?;

        self.page_no += 1;
        self.page_open = true;
        self.x = self.config.margins.left;
        self.y = self.config.margins.top;
        log::debug!("opened page {}", self.page_no);

        self.run_chrome(|chrome, canvas| chrome.header(canvas))?;

        (
            self.font_weight,
            self.font_style,
            self.font_size,
            self.text_color,
            self.fill_color,
        ) = saved;
        Ok(())
    }

    fn close_page(&mut self) -> Result<(), CanvasError> {
        if !self.page_open {
            return Ok(());
        }
        self.run_chrome(|chrome, canvas| chrome.footer(canvas))?;

        let operations = std::mem::take(&mut self.ops);
        self.writer.add_page(
            Content { operations },
            self.config.size.width * K,
            self.config.size.height * K,
        )?;
        self.page_open = false;
        Ok(())
    }

    fn run_chrome(
        &mut self,
        f: impl FnOnce(&dyn PageChrome, &mut PdfCanvas) -> Result<(), CanvasError>,
    ) -> Result<(), CanvasError> {
        if let Some(chrome) = self.chrome.take() {
            self.in_chrome = true;
            let result = f(chrome.as_ref(), self);
            self.in_chrome = false;
            self.chrome = Some(chrome);
            result
        } else {
            Ok(())
        }
    }

    /// Closes the last page and serializes the document with the given
    /// Info metadata. Nothing is emitted if any step fails.
    pub fn finish(mut self, title: &str, author: &str) -> Result<Vec<u8>, CanvasError> {
        self.close_page()?;
        self.writer.set_metadata(title, author);
        self.writer.finish()
    }

    // --- drawing ---

    /// Draws one cell. A width of `0.0` extends the cell to the right
    /// margin. `TextAlign::Justify` is treated as `Left`.
    pub fn cell(
        &mut self,
        w: f32,
        h: f32,
        text: &str,
        border: bool,
        ln: Ln,
        align: TextAlign,
        fill: bool,
    ) -> Result<(), CanvasError> {
        self.cell_internal(w, h, text, border, ln, align, fill, None)
    }

    /// Moves the cursor to the next line: x back to the left margin, y down
    /// by `h`.
    pub fn ln(&mut self, h: f32) {
        self.x = self.config.margins.left;
        self.y += h;
    }

    /// Draws wrapped text as a stack of cells of height `h`. A width of
    /// `0.0` extends to the right margin. Afterwards the cursor sits below
    /// the block at the left margin.
    pub fn multi_cell(
        &mut self,
        w: f32,
        h: f32,
        text: &str,
        align: TextAlign,
    ) -> Result<(), CanvasError> {
        let x_cell = self.x;
        let w_eff = if w == 0.0 {
            self.config.size.width - self.config.margins.right - x_cell
        } else {
            w
        };
        let inner = w_eff - 2.0 * CELL_PADDING;
        let lines = self.wrap_lines(text, inner);
        let last = lines.len().saturating_sub(1);

        for (i, line) in lines.iter().enumerate() {
            let word_spacing = if align == TextAlign::Justify && i != last {
                let spaces = line.matches(' ').count();
                if spaces > 0 {
                    Some((inner - self.string_width(line)) / spaces as f32)
                } else {
                    None
                }
            } else {
                None
            };
            self.set_x(x_cell);
            self.cell_internal(w_eff, h, line, false, Ln::Below, align, false, word_spacing)?;
        }
        self.x = self.config.margins.left;
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn cell_internal(
        &mut self,
        w: f32,
        h: f32,
        text: &str,
        border: bool,
        ln: Ln,
        align: TextAlign,
        fill: bool,
        word_spacing: Option<f32>,
    ) -> Result<(), CanvasError> {
        if !self.page_open {
            return Err(CanvasError::NoPage);
        }
        if !self.in_chrome && self.y + h > self.page_break_trigger() {
            // Preserve x across the break so wrapped blocks continue in
            // their own column.
            let x = self.x;
            self.add_page()?;
            self.x = x;
        }

        let w_eff = if w == 0.0 {
            self.config.size.width - self.config.margins.right - self.x
        } else {
            w
        };
        let page_h = self.config.size.height;
        let (x, y) = (self.x, self.y);

        if fill {
            let c = self.fill_color;
            self.ops.push(Operation::new("q", vec![]));
            self.ops.push(Operation::new("rg", color_ops(c)));
            self.ops.push(rect_op(x, page_h - y - h, w_eff, h));
            self.ops.push(Operation::new("f", vec![]));
            self.ops.push(Operation::new("Q", vec![]));
        }
        if border {
            self.ops.push(Operation::new("q", vec![]));
            self.ops
                .push(Operation::new("w", vec![(BORDER_WIDTH * K).into()]));
            self.ops.push(rect_op(x, page_h - y - h, w_eff, h));
            self.ops.push(Operation::new("S", vec![]));
            self.ops.push(Operation::new("Q", vec![]));
        }
        if !text.is_empty() {
            let text_w = self.string_width(text);
            let tx = match align {
                TextAlign::Center => x + (w_eff - text_w) / 2.0,
                TextAlign::Right => x + w_eff - CELL_PADDING - text_w,
                TextAlign::Left | TextAlign::Justify => x + CELL_PADDING,
            };
            // Baseline sits at half the cell plus 30% of the font size,
            // measured from the cell top.
            let baseline = y + 0.5 * h + 0.3 * (self.font_size / K);

            let c = self.text_color;
            self.ops.push(Operation::new("BT", vec![]));
            self.ops.push(Operation::new(
                "Tf",
                vec![
                    Object::Name(format!("F{}", self.font_index()).into_bytes()),
                    self.font_size.into(),
                ],
            ));
            self.ops.push(Operation::new("rg", color_ops(c)));
            if let Some(ws) = word_spacing {
                self.ops.push(Operation::new("Tw", vec![(ws * K).into()]));
            }
            self.ops.push(Operation::new(
                "Td",
                vec![(tx * K).into(), ((page_h - baseline) * K).into()],
            ));
            self.ops.push(Operation::new(
                "Tj",
                vec![Object::String(
                    encoding::encode_win_ansi(text),
                    StringFormat::Literal,
                )],
            ));
            if word_spacing.is_some() {
                self.ops.push(Operation::new("Tw", vec![0f32.into()]));
            }
            self.ops.push(Operation::new("ET", vec![]));
        }

        match ln {
            Ln::Right => self.x += w_eff,
            Ln::NewLine => {
                self.y += h;
                self.x = self.config.margins.left;
            }
            Ln::Below => self.y += h,
        }
        Ok(())
    }

    fn font_index(&self) -> usize {
        match (self.font_weight, self.font_style) {
            (FontWeight::Regular, FontStyle::Normal) => 1,
            (FontWeight::Bold, FontStyle::Normal) => 2,
            (FontWeight::Regular, FontStyle::Oblique) => 3,
            (FontWeight::Bold, FontStyle::Oblique) => 4,
        }
    }

    /// Greedy word wrap against the current font. Embedded newlines force
    /// line breaks; an empty segment yields an empty line.
    fn wrap_lines(&self, text: &str, max_width: f32) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            if paragraph.is_empty() {
                lines.push(String::new());
                continue;
            }
            let mut line = String::new();
            for word in paragraph.split(' ') {
                for piece in self.split_long_word(word, max_width) {
                    let candidate = if line.is_empty() {
                        piece.clone()
                    } else {
                        format!("{line} {piece}")
                    };
                    if line.is_empty() || self.string_width(&candidate) <= max_width {
                        line = candidate;
                    } else {
                        lines.push(line);
                        line = piece;
                    }
                }
            }
            lines.push(line);
        }
        lines
    }

    /// Hard-breaks a word that is wider than the wrap width into pieces
    /// that fit; returns the word unchanged otherwise.
    fn split_long_word(&self, word: &str, max_width: f32) -> Vec<String> {
        if self.string_width(word) <= max_width {
            return vec![word.to_string()];
        }
        let mut pieces = Vec::new();
        let mut piece = String::new();
        for ch in word.chars() {
            piece.push(ch);
            if self.string_width(&piece) > max_width && piece.chars().count() > 1 {
                piece.pop();
                pieces.push(std::mem::take(&mut piece));
                piece.push(ch);
            }
        }
        if !piece.is_empty() {
            pieces.push(piece);
        }
        pieces
    }
}

fn color_ops(color: Color) -> Vec<Object> {
    vec![
        (f32::from(color.r) / 255.0).into(),
        (f32::from(color.g) / 255.0).into(),
        (f32::from(color.b) / 255.0).into(),
    ]
}

fn rect_op(x: f32, y: f32, w: f32, h: f32) -> Operation {
    Operation::new(
        "re",
        vec![(x * K).into(), (y * K).into(), (w * K).into(), (h * K).into()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::NoChrome;

    fn test_canvas() -> PdfCanvas {
        PdfCanvas::new(PageConfig::default(), Box::new(NoChrome))
    }

    #[test]
    fn string_width_scales_with_size_and_weight() {
        let mut canvas = test_canvas();
        canvas.set_font(FontWeight::Regular, FontStyle::Normal, 10.0);
        let narrow = canvas.string_width("iiii");
        let wide = canvas.string_width("WWWW");
        assert!(wide > narrow);

        let at_ten = canvas.string_width("Fininvest");
        canvas.set_font(FontWeight::Regular, FontStyle::Normal, 20.0);
        let at_twenty = canvas.string_width("Fininvest");
        assert!((at_twenty - 2.0 * at_ten).abs() < 1e-4);

        canvas.set_font(FontWeight::Bold, FontStyle::Normal, 20.0);
        assert!(canvas.string_width("Fininvest") > at_twenty);
    }

    #[test]
    fn cell_requires_an_open_page() {
        let mut canvas = test_canvas();
        let result = canvas.cell(0.0, 7.0, "x", false, Ln::NewLine, TextAlign::Left, false);
        assert!(matches!(result, Err(CanvasError::NoPage)));
    }

    #[test]
    fn wrap_honors_newlines_and_width() {
        let mut canvas = test_canvas();
        canvas.set_font(FontWeight::Regular, FontStyle::Normal, 10.0);

        let lines = canvas.wrap_lines("a\n\nb", 100.0);
        assert_eq!(lines, vec!["a", "", "b"]);

        let narrow = canvas.wrap_lines("um dois tres quatro", 12.0);
        assert!(narrow.len() > 1);
        for line in &narrow {
            assert!(canvas.string_width(line) <= 12.0);
        }
    }

    #[test]
    fn long_word_is_hard_broken() {
        let mut canvas = test_canvas();
        canvas.set_font(FontWeight::Regular, FontStyle::Normal, 10.0);
        let lines = canvas.wrap_lines("abcdefghijklmnopqrstuvwxyz", 10.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(canvas.string_width(line) <= 10.0);
        }
    }

    #[test]
    fn auto_break_opens_new_pages() {
        let mut canvas = test_canvas();
        canvas.add_page().unwrap();
        canvas.set_font(FontWeight::Regular, FontStyle::Normal, 11.0);
        for _ in 0..80 {
            canvas
                .cell(0.0, 7.0, "linha", false, Ln::NewLine, TextAlign::Left, false)
                .unwrap();
        }
        assert!(canvas.page_no() > 1);

        let bytes = canvas.finish("t", "a").unwrap();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() > 1);
    }

    #[test]
    fn set_y_negative_is_relative_to_bottom(){
        let mut canvas = test_canvas();
        canvas.set_y(-15.0);
        assert!((canvas.y() - (297.0 - 15.0)).abs() < 1e-4);
        assert!((canvas.x() - 10.0).abs() < 1e-4);
    }
}
