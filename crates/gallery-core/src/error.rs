use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GalleryError {
    #[error("layout radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
    #[error("camera sits on the orbit origin")]
    DegenerateCamera,
    #[error("non-finite {0}")]
    NonFinite(&'static str),
}
