use crate::models::NoteFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Read a note file and return its content
pub fn read_note(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan the notes directory for note files, sorted by relative path
pub fn scan_note_files(notes_root: &Path) -> Result<Vec<NoteFile>, IoError> {
    validate_notes_dir(notes_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, notes_root, &mut files)?;
    files.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
    log::debug!(
        "found {} note files under {}",
        files.len(),
        notes_root.display()
    );
    Ok(files)
}

fn scan_directory_recursive(
    notes_root: &Path,
    dir: &Path,
    files: &mut Vec<NoteFile>,
) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(notes_root, &path, files)?;
            continue;
        }

        let Ok(relative) = path.strip_prefix(notes_root) else {
            continue;
        };
        let Ok(relative) = RelativePathBuf::from_path(relative) else {
            log::warn!("skipping non UTF-8 path {}", path.display());
            continue;
        };
        if NoteFile::is_note_path(&relative) {
            files.push(NoteFile::new(relative));
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "notes directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}
