use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::FileCounts;
use crate::counter::count_reader;
use crate::error::CountError;

/// The input selected for one counting run: a named file or standard input.
#[derive(Debug)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Source {
    /// Selects the source from an optional CLI path: a file when a path was
    /// given, standard input otherwise.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Stdin,
        }
    }

    /// Returns the file path for file sources, `None` for stdin.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin => None,
        }
    }

    /// Streams the whole source through a counter and returns the tallies.
    ///
    /// # Errors
    ///
    /// Returns `CountError::Open` if a named file cannot be opened and
    /// `CountError::Stream` if reading fails mid-stream.
    pub fn count(&self) -> Result<FileCounts, CountError> {
        match self {
            Self::File(path) => {
                let file = open_file(path)?;
                count_reader(BufReader::new(file))
            }
            Self::Stdin => count_reader(io::stdin().lock()),
        }
    }

    /// Returns the file size in bytes for file sources, `None` for stdin.
    ///
    /// Byte-count reports for files prefer this authoritative size over
    /// re-summing streamed chunk lengths.
    ///
    /// # Errors
    ///
    /// Returns `CountError::Metadata` if the size lookup fails.
    pub fn metadata_len(&self) -> Result<Option<u64>, CountError> {
        match self {
            Self::File(path) => fs::metadata(path)
                .map(|metadata| Some(metadata.len()))
                .map_err(|source| CountError::Metadata {
                    path: path.display().to_string(),
                    source,
                }),
            Self::Stdin => Ok(None),
        }
    }
}

fn open_file(path: &Path) -> Result<File, CountError> {
    File::open(path).map_err(|source| CountError::Open {
        path: path.display().to_string(),
        source,
    })
}
