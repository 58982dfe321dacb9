use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    /// There is no rendered frame to save yet.
    EmptyFrame,
    Encode(image::ImageError),
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFrame => write!(f, "no rendered frame to export"),
            Self::Encode(err) => write!(f, "failed to encode image: {}", err),
            Self::Io(err) => write!(f, "failed to write image: {}", err),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyFrame => None,
            Self::Encode(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<image::ImageError> for ExportError {
    fn from(err: image::ImageError) -> Self {
        Self::Encode(err)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
