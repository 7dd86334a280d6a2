//! Folder model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Slug identifying a folder (e.g. `home`, `deep-work`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(String);

impl FolderId {
    /// Get the slug
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FolderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FolderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive a folder id from its display name.
///
/// Lower-cases the trimmed name and joins whitespace-separated words with `-`.
/// Returns `None` when the name is empty or whitespace only.
///
/// # Examples
///
/// ```
/// use ramble_core::models::derive_folder_id;
///
/// assert_eq!(derive_folder_id("Deep Work").unwrap().as_str(), "deep-work");
/// assert!(derive_folder_id("   ").is_none());
/// ```
#[must_use]
pub fn derive_folder_id(name: &str) -> Option<FolderId> {
    let slug = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        None
    } else {
        Some(FolderId(slug))
    }
}

/// Presentation glyph for a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderGlyph {
    #[default]
    Folder,
    Home,
    Users,
    Building,
    Brain,
    Heart,
    Star,
}

impl FolderGlyph {
    /// Glyphs offered when creating a folder, in display order
    pub const PALETTE: [Self; 7] = [
        Self::Folder,
        Self::Home,
        Self::Users,
        Self::Building,
        Self::Brain,
        Self::Heart,
        Self::Star,
    ];

    /// Stable lowercase tag
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Home => "home",
            Self::Users => "users",
            Self::Building => "building",
            Self::Brain => "brain",
            Self::Heart => "heart",
            Self::Star => "star",
        }
    }

    /// Label shown under the glyph in the picker
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Folder => "Folder",
            Self::Home => "Home",
            Self::Users => "Users",
            Self::Building => "Building",
            Self::Brain => "Brain",
            Self::Heart => "Favorites",
            Self::Star => "Important",
        }
    }

    /// Symbol rendered for the glyph
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Folder => "\u{1F4C1}",
            Self::Home => "\u{1F3E0}",
            Self::Users => "\u{1F465}",
            Self::Building => "\u{1F3E2}",
            Self::Brain => "\u{1F9E0}",
            Self::Heart => "\u{2764}\u{FE0F}",
            Self::Star => "\u{2B50}",
        }
    }
}

impl FromStr for FolderGlyph {
    type Err = std::convert::Infallible;

    /// Unknown tags fall back to [`FolderGlyph::Folder`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Ok(Self::PALETTE
            .into_iter()
            .find(|glyph| glyph.tag() == tag)
            .unwrap_or_default())
    }
}

/// A named bucket grouping notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique slug
    pub id: FolderId,
    /// Display name
    pub name: String,
    /// Presentation glyph
    pub glyph: FolderGlyph,
}

impl Folder {
    /// A folder that ships with the app
    #[must_use]
    pub fn builtin(id: &str, name: &str, glyph: FolderGlyph) -> Self {
        Self {
            id: FolderId::from(id),
            name: name.to_string(),
            glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_folder_id() {
        assert_eq!(derive_folder_id("Deep Work"), Some(FolderId::from("deep-work")));
        assert_eq!(
            derive_folder_id("  Side   Projects\t2 "),
            Some(FolderId::from("side-projects-2"))
        );
        assert_eq!(derive_folder_id(""), None);
        assert_eq!(derive_folder_id(" \n\t "), None);
    }

    #[test]
    fn test_glyph_tag_round_trip() {
        for glyph in FolderGlyph::PALETTE {
            assert_eq!(glyph.tag().parse::<FolderGlyph>().unwrap(), glyph);
        }
    }

    #[test]
    fn test_unknown_glyph_falls_back_to_folder() {
        assert_eq!("shared".parse::<FolderGlyph>().unwrap(), FolderGlyph::Folder);
        assert_eq!("gamepad".parse::<FolderGlyph>().unwrap(), FolderGlyph::Folder);
        assert_eq!(" Brain\n".parse::<FolderGlyph>().unwrap(), FolderGlyph::Brain);
    }

    #[test]
    fn test_glyph_serializes_lowercase() {
        let json = serde_json::to_string(&FolderGlyph::Heart).unwrap();
        assert_eq!(json, "\"heart\"");
    }
}
