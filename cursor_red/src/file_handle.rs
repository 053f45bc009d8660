// This file is part of CursorGap.

// CursorGap is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// CursorGap is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::{
    fs::{File, OpenOptions},
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

/// Destination for a buffer's full content. Each call replaces whatever was written before.
pub trait FileWrite {
    fn write_file(&mut self, buf: &[u8]) -> io::Result<()>;
}

/// A file opened for loading into a buffer and rewriting from it.
pub struct FileHandle {
    file: File,
    path: PathBuf,
}

impl FileHandle {
    /// Opens the existing file at `raw_path` after expanding a leading `~`. A missing file is
    /// an error; nothing is created until the buffer is written back.
    pub fn open(raw_path: &str) -> io::Result<Self> {
        let path = PathBuf::from(shellexpand::tilde(raw_path).as_ref());
        let file = File::open(&path)?;

        tracing::debug!(path = %path.display(), "opened file");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for FileHandle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl FileWrite for FileHandle {
    fn write_file(&mut self, buf: &[u8]) -> io::Result<()> {
        self.file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        self.file.write_all(buf)?;
        self.file.flush()
    }
}

impl FileWrite for Vec<u8> {
    fn write_file(&mut self, buf: &[u8]) -> io::Result<()> {
        self.clear();
        self.extend_from_slice(buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_files_are_not_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("typo.txt");

        let error = FileHandle::open(path.to_str().unwrap()).err().unwrap();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
        assert!(!path.exists());
    }

    #[test]
    fn rewrite_replaces_the_whole_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "a much longer original line\n").unwrap();

        let mut handle = FileHandle::open(path.to_str().unwrap()).unwrap();
        let mut loaded = String::new();
        handle.read_to_string(&mut loaded).unwrap();
        assert_eq!(loaded, "a much longer original line\n");
        assert_eq!(handle.path(), path.as_path());

        handle.write_file(b"short\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");

        handle.write_file(b"shorter").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "shorter");
    }

    #[test]
    fn vec_writes_replace_previous_content() {
        let mut written = b"stale".to_vec();
        written.write_file(b"new").unwrap();

        assert_eq!(written, b"new");
    }
}
