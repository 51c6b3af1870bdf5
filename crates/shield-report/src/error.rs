use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The PDF backend failed to build or serialize the document.
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}
