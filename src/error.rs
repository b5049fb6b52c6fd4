/// Reasons the player could not be set up on the page.
///
/// A missing metadata attribute is reported apart from unparseable metadata
/// so logs say which one happened; both leave the page without a player.
#[derive(thiserror::Error, Debug)]
pub enum BootstrapError {
    /// No element matched the configured id or selector.
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// The metadata element exists but carries no song attribute.
    #[error("Attribute {attribute} missing on #{element}")]
    MissingAttribute { element: String, attribute: String },

    /// The embedded song metadata is not valid JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON parsed but does not describe a playable song.
    #[error("Invalid song metadata: {0}")]
    InvalidSong(String),

    /// The player library rejected its configuration.
    #[error("Player init failed: {0}")]
    PlayerInit(String),

    /// The progress-bar click listener could not be attached.
    #[error("Listener error: {0}")]
    Listener(String),
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
