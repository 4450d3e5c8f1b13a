use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),
}
