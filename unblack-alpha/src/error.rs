use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlphaError {
    #[error("cannot open {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot encode {} as PNG: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AlphaError>;
