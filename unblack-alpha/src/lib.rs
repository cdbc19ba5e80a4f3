//! # unblack-alpha
//!
//! Turn black backgrounds into transparency.
//!
//! Every pixel gets an alpha value equal to its brightest color channel, so
//! glows and neon strokes rendered on black keep their falloff while the
//! black itself disappears. Color channels are left untouched.
//!
//! ## Features
//! - Per-pixel keying with a noise floor for near-black pixels
//! - In-place pass over an RGBA buffer with keying statistics
//! - PNG load/save that never touches the target file before encoding succeeds
//!
//! ## Example
//!
//! ```no_run
//! use unblack_alpha::remove_black_background;
//!
//! fn main() {
//!     match remove_black_background("public/logo.png") {
//!         Ok(stats) => println!("keyed {} pixels", stats.total()),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

mod error;
pub mod key;
mod png;

pub use error::{AlphaError, Result};
pub use key::{brightness, key_image, key_pixel, KeyStats, NOISE_FLOOR};
pub use png::{load_rgba, remove_black_background, save_png};

// Re-export commonly used types
pub use image::{Rgba, RgbaImage};
