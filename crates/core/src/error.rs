use thiserror::Error;

/// Errors that can occur while converting markup to component code.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// IO error while feeding input to the parser.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The parsed tree exceeds the node-count safety limit.
    ///
    /// Lifted by enabling `huge_tree` on [`crate::ParseOptions`].
    #[error("parsed tree has {nodes} nodes, above the safety limit of {limit} (enable huge_tree to lift it)")]
    TreeTooLarge {
        /// Number of nodes encountered before giving up.
        nodes: usize,
        /// The limit that was exceeded.
        limit: usize,
    },
    /// Document structure could not be resolved to a single content root.
    #[error("structural error during {stage}: {message}")]
    Structure {
        /// Which resolution step failed (e.g. "body lookup", "root resolution").
        stage: String,
        /// What went wrong.
        message: String,
    },
    /// A tag reached code generation without a registry entry.
    ///
    /// Normalization removes every unregistered tag, so this indicates an
    /// internal invariant breach rather than bad input.
    #[error("tag `{0}` has no registry entry")]
    UnsupportedTag(String),
    /// The code-formatting collaborator rejected the generated expression.
    #[error("formatting error: {0}")]
    Format(String),
}

impl ConvertError {
    /// Create a structural error with stage information.
    pub fn structure(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Structure {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Create a formatting error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}

/// Convenience alias for results carrying [`ConvertError`].
pub type ConvertResult<T> = Result<T, ConvertError>;
