use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpriteKeyError {
    #[error("sprite key must not be empty")]
    Empty,
    #[error("sprite key must be relative, found leading '/'")]
    Absolute,
    #[error("sprite key must not contain '..'")]
    ParentTraversal,
    #[error("sprite key contains invalid character {character:?}")]
    InvalidCharacter { character: char },
}

/// A validated asset-relative sprite name such as `player` or `props/scissors`.
/// Maps to `<sprite_dir>/<key>.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpriteKey(String);

impl SpriteKey {
    pub fn parse(key: &str) -> Result<Self, SpriteKeyError> {
        if key.is_empty() {
            return Err(SpriteKeyError::Empty);
        }
        if key.starts_with('/') {
            return Err(SpriteKeyError::Absolute);
        }
        if key.split('/').any(|segment| segment == ".." || segment.is_empty()) {
            return if key.contains("..") {
                Err(SpriteKeyError::ParentTraversal)
            } else {
                Err(SpriteKeyError::InvalidCharacter { character: '/' })
            };
        }
        let allowed = |ch: &char| {
            ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '_' | '-' | '/')
        };
        if let Some(character) = key.chars().find(|ch| !allowed(ch)) {
            return Err(SpriteKeyError::InvalidCharacter { character });
        }
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn image_path(&self, sprite_dir: &Path) -> PathBuf {
        self.0
            .split('/')
            .fold(sprite_dir.to_path_buf(), |path, segment| path.join(segment))
            .with_extension("png")
    }
}

impl fmt::Display for SpriteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
