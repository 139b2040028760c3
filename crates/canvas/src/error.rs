use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("no page is open; call add_page first")]
    NoPage,
}

impl From<lopdf::Error> for CanvasError {
    fn from(err: lopdf::Error) -> Self {
        CanvasError::Pdf(err.to_string())
    }
}
