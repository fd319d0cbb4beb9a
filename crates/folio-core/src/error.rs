use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config value for `{field}`: {message}")]
    ConfigValue { field: &'static str, message: String },

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("PDF renderer unavailable: {0}")]
    RendererUnavailable(String),

    #[error("Failed to load document: {0}")]
    Load(String),

    #[error("Failed to render page {page}: {message}")]
    Render { page: u32, message: String },

    #[error("No document is open")]
    NoDocument,

    #[error("Document has no pages")]
    EmptyDocument,

    #[error("Page {page} out of range (total: {total})")]
    PageOutOfRange { page: u32, total: u32 },

    #[error("Image host not allowed: {0}")]
    ImageHostNotAllowed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, FolioError>;
