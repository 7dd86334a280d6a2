//! Folder registry

use crate::error::{Error, Result};
use crate::models::{derive_folder_id, Folder, FolderGlyph, FolderId};

/// Id of the folder new recordings land in
pub const DEFAULT_FOLDER: &str = "home";

/// Folders in creation order, built-ins first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRegistry {
    folders: Vec<Folder>,
}

impl Default for FolderRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl FolderRegistry {
    /// Registry holding the folders that ship with the app
    #[must_use]
    pub fn with_builtins() -> Self {
        Self {
            folders: vec![
                Folder::builtin(DEFAULT_FOLDER, "Home", FolderGlyph::Home),
                Folder::builtin("walkins", "Walkins", FolderGlyph::Users),
                Folder::builtin("ycp", "YCP", FolderGlyph::Building),
                Folder::builtin("think", "Think", FolderGlyph::Brain),
            ],
        }
    }

    #[must_use]
    pub fn list(&self) -> &[Folder] {
        &self.folders
    }

    #[must_use]
    pub fn get(&self, id: &FolderId) -> Option<&Folder> {
        self.folders.iter().find(|folder| &folder.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &FolderId) -> bool {
        self.get(id).is_some()
    }

    /// The folder new recordings are saved into
    #[must_use]
    pub fn default_folder(&self) -> &Folder {
        // Built-ins are never removed, so the default is always the first entry.
        &self.folders[0]
    }

    /// Append a user folder.
    ///
    /// Rejects blank names and names whose derived id is already taken.
    pub fn create(&mut self, name: &str, glyph: FolderGlyph) -> Result<&Folder> {
        let id = derive_folder_id(name)
            .ok_or_else(|| Error::InvalidInput("Folder name must not be empty".into()))?;
        if self.contains(&id) {
            return Err(Error::DuplicateFolder(id));
        }

        let folder = Folder {
            id,
            name: name.trim().to_string(),
            glyph,
        };
        tracing::debug!("Created folder {} ({})", folder.id, folder.name);
        self.folders.push(folder);
        Ok(&self.folders[self.folders.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(registry: &FolderRegistry) -> Vec<&str> {
        registry.list().iter().map(|folder| folder.id.as_str()).collect()
    }

    #[test]
    fn builtins_come_first() {
        let registry = FolderRegistry::with_builtins();
        assert_eq!(ids(&registry), vec!["home", "walkins", "ycp", "think"]);
        assert_eq!(registry.default_folder().id.as_str(), DEFAULT_FOLDER);
    }

    #[test]
    fn create_derives_slug() {
        let mut registry = FolderRegistry::with_builtins();
        let folder = registry.create("  Deep Work ", FolderGlyph::Star).unwrap();
        assert_eq!(folder.id.as_str(), "deep-work");
        assert_eq!(folder.name, "Deep Work");
        assert_eq!(folder.glyph, FolderGlyph::Star);
        assert_eq!(ids(&registry).last(), Some(&"deep-work"));
    }

    #[test]
    fn create_rejects_blank_name() {
        let mut registry = FolderRegistry::with_builtins();
        let err = registry.create("  ", FolderGlyph::Folder).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(registry.list().len(), 4);
    }

    #[test]
    fn create_rejects_colliding_slug() {
        let mut registry = FolderRegistry::with_builtins();
        registry.create("Deep Work", FolderGlyph::Folder).unwrap();

        let err = registry.create("deep   work", FolderGlyph::Heart).unwrap_err();
        assert!(matches!(err, Error::DuplicateFolder(id) if id.as_str() == "deep-work"));

        let err = registry.create("HOME", FolderGlyph::Home).unwrap_err();
        assert!(matches!(err, Error::DuplicateFolder(_)));
        assert_eq!(registry.list().len(), 5);
    }
}
