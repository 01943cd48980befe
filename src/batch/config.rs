//! Dispatcher configuration attached to a method table.

use crate::error::{BuildError, BuildResult};
use crate::method::KindHierarchy;
use crate::method::mapping::validate_status;

/// Status reported for handler failures no mapping covers.
pub const DEFAULT_UNMAPPED_STATUS: u16 = 500;

/// Settings the dispatcher applies on top of each method's own mappings.
///
/// # Examples
///
/// ```rust
/// use jebatch::{BatchConfig, ErrorKind, KindHierarchy};
///
/// # fn main() -> Result<(), jebatch::BuildError> {
/// let hierarchy = KindHierarchy::new()
///     .with_parent(ErrorKind::new("NotFound"), ErrorKind::new("Runtime"))?;
///
/// let config = BatchConfig::default()
///     .with_unmapped_status(503)
///     .with_hierarchy(hierarchy);
/// config.validate()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Status used when a handler fails and none of its mappings match.
    pub unmapped_status: u16,

    /// Ancestry used when matching a failure against mappings.
    pub hierarchy: KindHierarchy,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            unmapped_status: DEFAULT_UNMAPPED_STATUS,
            hierarchy: KindHierarchy::default(),
        }
    }
}

impl BatchConfig {
    pub fn with_unmapped_status(mut self, status: u16) -> Self {
        self.unmapped_status = status;
        self
    }

    pub fn with_hierarchy(mut self, hierarchy: KindHierarchy) -> Self {
        self.hierarchy = hierarchy;
        self
    }

    /// Validate the configuration.
    ///
    /// The fallback status has to be a real HTTP status code.
    pub fn validate(&self) -> BuildResult<()> {
        validate_status(self.unmapped_status).map_err(|_| {
            BuildError::invalid_configuration(format!(
                "Unmapped error status {} is not a valid HTTP status code",
                self.unmapped_status
            ))
        })
    }
}
