use findoc_canvas::CanvasError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
