#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed SVG: {message}")]
    Xml { message: String },

    #[error("document has no root element")]
    MissingRoot,

    #[error("<{element}> is missing required attribute `{attribute}`")]
    MissingAttribute { element: String, attribute: String },

    #[error("<{element}> attribute `{attribute}` is not a number: {value:?}")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
