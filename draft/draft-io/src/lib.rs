//! Mesh file I/O for DraftForge.
//!
//! Loads and saves triangle meshes in STL (stereolithography) format,
//! binary and ASCII, with automatic format detection on load.
//!
//! # Example
//!
//! ```no_run
//! use draft_io::load_stl;
//!
//! let mesh = load_stl("part.stl").unwrap();
//! println!("loaded {} faces", mesh.face_count());
//! ```
//!
//! The drawing pipeline wants the part centered on its center of mass;
//! [`load_centered_stl`] does both steps:
//!
//! ```no_run
//! use draft_io::load_centered_stl;
//!
//! let mesh = load_centered_stl("part.stl").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{load_centered_stl, load_stl, save_stl};
