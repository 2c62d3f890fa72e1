// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the widget and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (the widget, the Iced app) uses the ports
//!
//! # Example
//!
//! ```ignore
//! use image_preview::application::port::{FileReader, ReadError};
//! use image_preview::domain::selection::FileHandle;
//!
//! struct FixtureReader;
//! impl FileReader for FixtureReader {
//!     fn read(&self, file: &FileHandle) -> Result<Vec<u8>, ReadError> {
//!         Ok(vec![0x89, b'P', b'N', b'G'])
//!     }
//! }
//! ```

pub mod port;
