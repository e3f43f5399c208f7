use relative_path::{RelativePath, RelativePathBuf};

use crate::title::{TitleParts, decompose_title};

/// File extensions recognised as note files.
pub const NOTE_EXTENSIONS: [&str; 2] = ["md", "txt"];

/// A note file on disk, named after the book it is about.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl NoteFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without its note extension.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The display name split into book title and subtitle.
    pub fn title(&self) -> TitleParts {
        decompose_title(&self.display_name)
    }

    pub fn is_note_path(path: &RelativePath) -> bool {
        path.extension()
            .is_some_and(|ext| NOTE_EXTENSIONS.contains(&ext))
    }

    fn extract_display_name(path: &RelativePath) -> String {
        match (path.file_stem(), path.extension()) {
            (Some(stem), Some(ext)) if NOTE_EXTENSIONS.contains(&ext) => stem.to_string(),
            _ => path.file_name().unwrap_or("Untitled").to_string(),
        }
    }
}

impl From<RelativePathBuf> for NoteFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for NoteFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_name_strips_note_extension() {
        assert_eq!(NoteFile::from("reading/데미안.md").display_name(), "데미안");
        assert_eq!(NoteFile::from("1984.txt").display_name(), "1984");
        assert_eq!(NoteFile::from("cover.png").display_name(), "cover.png");
    }

    #[test]
    fn title_comes_from_file_name() {
        let file = NoteFile::from("동물농장 (A Fairy Story).md");
        let title = file.title();
        assert_eq!(title.main_title, "동물농장");
        assert_eq!(title.subtitle.as_deref(), Some("A Fairy Story"));
    }

    #[test]
    fn note_path_detection() {
        assert!(NoteFile::is_note_path(RelativePath::new("a/b.md")));
        assert!(NoteFile::is_note_path(RelativePath::new("b.txt")));
        assert!(!NoteFile::is_note_path(RelativePath::new("b.json")));
        assert!(!NoteFile::is_note_path(RelativePath::new("README")));
    }
}
