use crate::canvas::PdfCanvas;
use crate::error::CanvasError;

/// Per-page decoration hooks.
///
/// The canvas calls `header` right after opening a page and `footer` just
/// before closing it, on every page. Automatic page breaks are suspended
/// while either hook runs, and the caller's font and colors are restored
/// afterwards.
pub trait PageChrome {
    fn header(&self, canvas: &mut PdfCanvas) -> Result<(), CanvasError>;

    fn footer(&self, canvas: &mut PdfCanvas) -> Result<(), CanvasError>;
}

/// Chrome that draws nothing. Useful for tests.
pub(crate) struct NoChrome;

impl PageChrome for NoChrome {
    fn header(&self, _canvas: &mut PdfCanvas) -> Result<(), CanvasError> {
        Ok(())
    }

    fn footer(&self, _canvas: &mut PdfCanvas) -> Result<(), CanvasError> {
        Ok(())
    }
}
