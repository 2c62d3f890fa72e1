// SPDX-License-Identifier: MPL-2.0
//! Widget configuration.
//!
//! Callers describe a widget with [`PreviewOptions`], where every field is
//! optional; [`PreviewConfig::merge`] lays them over the defaults and parses
//! the selectors.

use crate::application::port::ReadLimits;
use crate::domain::document::Selector;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Attribute identifying an input when none is configured.
pub const DEFAULT_KEY_ATTRIBUTE: &str = "name";

/// Reads slower than this are reported as timed out.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

/// Caller-supplied widget settings. Unset fields keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Attribute read off an input to build its cache key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_attribute: Option<String>,

    /// Selector for the file input(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// Selector for the reset control(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset: Option<String>,

    /// Selector for the preview container(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,

    /// Largest accepted file, in kibibytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_kb: Option<u64>,

    /// Read timeout in seconds; `0` disables the timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_timeout_secs: Option<u64>,
}

/// Effective configuration of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub key_attribute: String,
    pub input: Option<Selector>,
    pub reset: Option<Selector>,
    pub preview: Option<Selector>,
    pub limits: ReadLimits,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            key_attribute: DEFAULT_KEY_ATTRIBUTE.to_string(),
            input: None,
            reset: None,
            preview: None,
            limits: ReadLimits {
                max_bytes: None,
                timeout: Some(Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS)),
            },
        }
    }
}

impl PreviewConfig {
    /// Builds a configuration from defaults overlaid with `options`.
    ///
    /// A malformed selector is reported as [`Error::Selector`](crate::error::Error::Selector).
    pub fn from_options(options: &PreviewOptions) -> Result<Self> {
        Self::default().merge(options)
    }

    /// Overlays the fields set in `options`; unset fields are left alone.
    pub fn merge(mut self, options: &PreviewOptions) -> Result<Self> {
        if let Some(key_attribute) = options.key_attribute.as_deref().map(str::trim) {
            if !key_attribute.is_empty() {
                self.key_attribute = key_attribute.to_string();
            }
        }
        if let Some(input) = &options.input {
            self.input = Some(Selector::parse(input)?);
        }
        if let Some(reset) = &options.reset {
            self.reset = Some(Selector::parse(reset)?);
        }
        if let Some(preview) = &options.preview {
            self.preview = Some(Selector::parse(preview)?);
        }
        if let Some(kb) = options.max_file_kb {
            self.limits.max_bytes = Some(kb.saturating_mul(1024));
        }
        if let Some(secs) = options.read_timeout_secs {
            self.limits.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        Ok(self)
    }
}
