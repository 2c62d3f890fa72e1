// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping the filesystem, the `image` crate's format
//! detection, and base64 encoding.
//!
//! # Available Adapters
//!
//! - [`data_url`]: Data URL encoding/decoding and MIME type detection
//! - [`reader`]: Filesystem [`FileReader`] and timeout-guarded async reads
//!
//! [`FileReader`]: crate::application::port::FileReader

pub mod data_url;
pub mod reader;

pub use reader::{read_data_url, read_data_url_blocking, FsFileReader};
