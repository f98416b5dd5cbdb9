// ---------------------------------------------------------------------------
// Shared error type for the data-pack loaders
// ---------------------------------------------------------------------------

/// Errors raised while loading or validating the YAML data packs.
///
/// The reply pipeline itself never fails — every turn produces a response.
/// These only surface at startup, when a pack is read from disk or an
/// explicit `--rules` file is given.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("rule pack error: {0}")]
    RulePack(String),

    #[error("invalid pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PackError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
