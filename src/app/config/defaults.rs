// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Reads**: file size limit and read timeout bounds
//! - **Form**: the upload form shown when no fields are configured

// ==========================================================================
// Read Defaults
// ==========================================================================

/// Default largest accepted file, in kibibytes (10 MiB).
pub const DEFAULT_MAX_FILE_KB: u64 = 10 * 1024;

/// Smallest accepted size limit, in kibibytes.
pub const MIN_MAX_FILE_KB: u64 = 1;

/// Largest accepted size limit, in kibibytes (1 GiB).
pub const MAX_MAX_FILE_KB: u64 = 1024 * 1024;

/// Default read timeout, in seconds.
pub use crate::ui::image_preview::DEFAULT_READ_TIMEOUT_SECS;

/// Largest configurable read timeout, in seconds. `0` disables the timeout.
pub const MAX_READ_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Default fields of the upload form as `(name, label)` pairs.
///
/// Labels here are Fluent message ids; configured labels are shown as-is.
pub const DEFAULT_FORM_FIELDS: [(&str, &str); 2] = [
    ("avatar", "form-field-avatar"),
    ("banner", "form-field-banner"),
];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_FILE_KB > 0);
    assert!(MAX_MAX_FILE_KB >= MIN_MAX_FILE_KB);
    assert!(DEFAULT_MAX_FILE_KB >= MIN_MAX_FILE_KB);
    assert!(DEFAULT_MAX_FILE_KB <= MAX_MAX_FILE_KB);

    assert!(DEFAULT_READ_TIMEOUT_SECS > 0);
    assert!(DEFAULT_READ_TIMEOUT_SECS <= MAX_READ_TIMEOUT_SECS);

    assert!(!DEFAULT_FORM_FIELDS.is_empty());
};
