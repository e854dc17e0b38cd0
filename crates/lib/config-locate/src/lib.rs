//! Locating the configuration file among candidate paths.

use std::path::{Path, PathBuf};

/// A payload together with the file it came from.
#[derive(Debug)]
pub struct Located<T> {
    /// The actual payload.
    pub payload: T,

    /// The file the payload was read from.
    pub path: PathBuf,
}

/// Error returned while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// None of the candidate paths exist.
    #[error("no config file found in paths: {paths:?}")]
    NotFound {
        /// The paths that were tried.
        paths: Vec<PathBuf>,
    },

    /// A candidate exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Read the first candidate path that exists.
///
/// Missing files are skipped; any other I/O error stops the search.
pub async fn read<P>(paths: &[P]) -> Result<Located<String>, ReadError>
where
    P: AsRef<Path>,
{
    for path in paths {
        let path_ref = path.as_ref();
        match tokio::fs::read_to_string(path_ref).await {
            Ok(contents) => {
                return Ok(Located {
                    payload: contents,
                    path: path_ref.to_path_buf(),
                });
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(ReadError::Read {
                    path: path_ref.to_path_buf(),
                    source,
                });
            }
        }
    }

    Err(ReadError::NotFound {
        paths: paths.iter().map(|p| p.as_ref().to_path_buf()).collect(),
    })
}

/// Error returned while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum LoadError<LoaderError> {
    /// Failed to read the configuration file.
    #[error(transparent)]
    Read(ReadError),

    /// Failed to parse the configuration contents.
    #[error("failed to load config file {path}: {source}")]
    Load {
        /// Path to the configuration file.
        path: PathBuf,

        /// Underlying loader error.
        #[source]
        source: LoaderError,
    },
}

impl<LoaderError> LoadError<LoaderError> {
    /// Whether the error only means that no candidate file exists.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read(ReadError::NotFound { .. }))
    }
}

/// Read the first existing candidate and parse it with `loader`.
pub async fn load<P, L, T, E>(paths: &[P], loader: L) -> Result<Located<T>, LoadError<E>>
where
    L: FnOnce(String) -> Result<T, E>,
    P: AsRef<Path>,
{
    let Located { path, payload } = read(paths).await.map_err(LoadError::Read)?;
    match (loader)(payload) {
        Ok(payload) => Ok(Located { payload, path }),
        Err(source) => Err(LoadError::Load { path, source }),
    }
}
