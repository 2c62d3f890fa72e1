// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`file_reader`]: Reading the bytes of a selected file
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no tokio types)
//! - Traits are `Send + Sync` so adapters can move onto the blocking pool
//! - No `async fn` - callers wrap calls in Iced's `Task` or tokio tasks
//! - Errors are `Clone` so they can travel inside Iced messages

pub mod file_reader;

pub use file_reader::{FileReader, ReadError, ReadLimits};
