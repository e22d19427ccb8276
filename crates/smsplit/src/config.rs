//! Configuration for the segmenter.
//!
//! The free function [`segment`](crate::segment) always splits at
//! [`MAX_SEGMENT_CHARS`]. Gateways with a different per-message budget
//! build a [`Segmenter`](crate::Segmenter) from a [`SegmenterConfig`].
//!
//! # Example
//!
//! ```
//! use smsplit::config::{SegmenterConfig, SegmenterConfigBuilder};
//!
//! // Use defaults
//! let config = SegmenterConfig::default();
//! assert_eq!(config.max_segment_chars, 140);
//!
//! // Or use builder for customization
//! let config = SegmenterConfigBuilder::new()
//!     .with_max_segment_chars(70)
//!     .build_validated()
//!     .unwrap();
//! assert_eq!(config.max_segment_chars, 70);
//! ```

use serde::{Deserialize, Serialize};

use crate::limits::{MAX_SEGMENT_CHARS, MIN_SEGMENT_CHARS};

/// Segmenter configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Maximum characters per segment, counter suffix included.
    pub max_segment_chars: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_segment_chars: MAX_SEGMENT_CHARS,
        }
    }
}

impl SegmenterConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_segment_chars < MIN_SEGMENT_CHARS {
            return Err(ConfigError::InvalidValue {
                field: "max_segment_chars".into(),
                reason: format!(
                    "segment limit must be at least {MIN_SEGMENT_CHARS} characters, got {}",
                    self.max_segment_chars
                ),
            });
        }

        Ok(())
    }
}

/// Builder for constructing `SegmenterConfig` with custom values.
#[derive(Clone, Debug, Default)]
pub struct SegmenterConfigBuilder {
    config: SegmenterConfig,
}

impl SegmenterConfigBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: SegmenterConfig::default(),
        }
    }

    /// Build the final configuration.
    pub fn build(self) -> SegmenterConfig {
        self.config
    }

    /// Build and validate the configuration.
    ///
    /// Returns an error if validation fails.
    pub fn build_validated(self) -> Result<SegmenterConfig, ConfigError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }

    /// Set the maximum characters per segment.
    pub fn with_max_segment_chars(mut self, max: usize) -> Self {
        self.config.max_segment_chars = max;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// The field name.
        field: String,
        /// The reason it's invalid.
        reason: String,
    },
}
