use thiserror::Error;

const MAX_ASSET_KEY_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetKeyError {
    #[error("asset key must not be empty")]
    Empty,
    #[error("asset key is longer than {max} characters")]
    TooLong { max: usize },
    #[error("asset key must be relative (no leading or trailing '/')")]
    NotRelative,
    #[error("asset key must not contain '\\\\'")]
    Backslash,
    #[error("asset key must not contain '..'")]
    ParentTraversal,
    #[error("asset key contains invalid character '{character}'")]
    InvalidCharacter { character: char },
}

/// Asset directory names and sheet stems are joined straight into filesystem
/// paths, so they are restricted to `[a-z0-9_/-]` and must stay below the
/// asset root.
pub(crate) fn validate_asset_key(key: &str) -> Result<(), AssetKeyError> {
    if key.is_empty() {
        return Err(AssetKeyError::Empty);
    }
    if key.len() > MAX_ASSET_KEY_LEN {
        return Err(AssetKeyError::TooLong {
            max: MAX_ASSET_KEY_LEN,
        });
    }
    if key.starts_with('/') || key.ends_with('/') {
        return Err(AssetKeyError::NotRelative);
    }
    if key.contains('\\') {
        return Err(AssetKeyError::Backslash);
    }
    if key.contains("..") {
        return Err(AssetKeyError::ParentTraversal);
    }
    match key.chars().find(|&ch| !is_key_char(ch)) {
        Some(character) => Err(AssetKeyError::InvalidCharacter { character }),
        None => Ok(()),
    }
}

fn is_key_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '_' | '/' | '-')
}
