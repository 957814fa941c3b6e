//! JSON persistence for trained models.
//!
//! Documents carry a `format_version`, checked before anything else is read.
//!
//! ```
//! use haarboost::model::{AdaBoostModel, BoostConfig};
//! use haarboost::persist;
//! use haarboost::testing::synthetic_set;
//!
//! let set = synthetic_set(8, 8, 12, 7).unwrap();
//! let model = AdaBoostModel::train(&set, BoostConfig::default(), 1).unwrap();
//!
//! let json = persist::to_json_string(&model).unwrap();
//! assert_eq!(persist::from_json_str(&json).unwrap(), model);
//! ```

mod schema;

pub use schema::{
    AdaBoostModelSchema, BoostConfigSchema, ModelMetaSchema, RoundSchema, FORMAT_VERSION,
};

use std::fs;
use std::path::Path;

use crate::model::{AdaBoostModel, ConfigError};

use schema::VersionHeader;

/// Errors from saving or loading a model.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported format version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Stored config fails validation.
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    /// Structurally valid JSON with inconsistent content.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Serialize as pretty-printed JSON.
pub fn to_json_string(model: &AdaBoostModel) -> Result<String, PersistError> {
    Ok(serde_json::to_string_pretty(&AdaBoostModelSchema::from(model))?)
}

/// Parse and validate a JSON model.
///
/// # Errors
///
/// [`PersistError::UnsupportedVersion`] for any version other than
/// [`FORMAT_VERSION`]; otherwise JSON, config or validation errors.
pub fn from_json_str(json: &str) -> Result<AdaBoostModel, PersistError> {
    let header: VersionHeader = serde_json::from_str(json)?;
    if header.format_version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: header.format_version,
            supported: FORMAT_VERSION,
        });
    }
    let schema: AdaBoostModelSchema = serde_json::from_str(json)?;
    AdaBoostModel::try_from(schema)
}

pub fn save_json(model: &AdaBoostModel, path: impl AsRef<Path>) -> Result<(), PersistError> {
    fs::write(path, to_json_string(model)?)?;
    Ok(())
}

pub fn load_json(path: impl AsRef<Path>) -> Result<AdaBoostModel, PersistError> {
    from_json_str(&fs::read_to_string(path)?)
}
