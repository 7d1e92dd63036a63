#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed transform `{fragment}`: {reason}")]
    MalformedTransform { fragment: String, reason: String },

    #[error("malformed path data: {reason}")]
    MalformedPath { reason: String },

    #[error("no geometry to measure")]
    EmptyGeometry,

    #[error("reference `#{id}` does not resolve to any element")]
    UnresolvedReference { id: String },

    #[error("reference `#{id}` leads back to itself")]
    CyclicReference { id: String },

    #[error("unknown unit `{unit}`")]
    UnknownUnit { unit: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Document(#[from] svgtree::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
