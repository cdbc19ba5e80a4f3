//! The fixed set of images to process

use std::path::PathBuf;

/// Directory every entry of [`FILES`] is resolved against
pub const BASE_DIR: &str = ".";

/// Images to process, in order
pub const FILES: [&str; 5] = [
    "public/logo-new.png",
    "public/icon-create.png",
    "public/icon-fund.png",
    "public/icon-generate.png",
    "public/icon-release.png",
];

/// Which images get their black background removed
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(BASE_DIR),
            files: FILES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Config {
    /// Full paths of the images to process, in order
    pub fn targets(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| self.base_dir.join(f)).collect()
    }
}
