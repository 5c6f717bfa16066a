use std::fs;
use std::io;
use std::path::Path;

use bytes::Bytes;

use crate::errors::DeployError;

/// One build artifact flowing through the pipeline.
///
/// Contents are held as cheaply cloneable bytes. The pipeline never touches
/// them; only the file name changes on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name the build produced, without any directory part.
    pub name: String,
    /// Raw file contents.
    pub contents: Bytes,
}

impl Artifact {
    /// Create an artifact from a name and its contents.
    pub fn new(name: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Read an artifact from disk, taking the final path component as its
    /// name.
    pub fn from_path(path: &Path) -> Result<Self, DeployError> {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => {
                return Err(DeployError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("no file name in path {}", path.display()),
                )))
            }
        };

        let contents = fs::read(path)?;
        Ok(Self {
            name,
            contents: Bytes::from(contents),
        })
    }

    /// Size of the artifact in bytes.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}
