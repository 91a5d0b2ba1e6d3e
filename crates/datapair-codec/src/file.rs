use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use datapair_types::{replace_file, CodecConfig, DataPair};
use tracing::{debug, error};

use crate::error::{CodecError, CodecResult};
use crate::mapping::{from_map, to_map, PairMap};
use crate::text::from_text_with;

/// A line-oriented pair file.
///
/// On-disk format: one encoded pair per line, each followed by the
/// configured line ending. No header and no version marker.
///
/// ```text
/// name=value
/// multi=first<NewLine>second
/// ```
#[derive(Clone, Debug)]
pub struct PairFile {
    path: PathBuf,
    config: CodecConfig,
}

impl PairFile {
    /// A pair file at `path` using the default configuration.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, CodecConfig::default())
    }

    /// A pair file at `path` using `config`.
    pub fn with_config(path: impl Into<PathBuf>, config: CodecConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encoding configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Returns `true` if the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write `pairs`, replacing any previous contents.
    ///
    /// Lines are written to a temporary file next to the target which is
    /// moved over it once complete, so on failure the old file is intact.
    /// Symlinks are followed and an existing file keeps its permissions.
    pub fn write(&self, pairs: &[DataPair]) -> CodecResult<()> {
        self.write_lines(pairs).map_err(|source| {
            error!(path = %self.path.display(), error = %source, "failed to write pairs");
            CodecError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!(path = %self.path.display(), count = pairs.len(), "pairs written");
        Ok(())
    }

    /// Read every pair that decodes; malformed lines are skipped.
    ///
    /// Fails only when the file cannot be opened or read as UTF-8.
    pub fn read(&self) -> CodecResult<Vec<DataPair>> {
        let text = fs::read_to_string(&self.path).map_err(|source| {
            error!(path = %self.path.display(), error = %source, "failed to read pairs");
            CodecError::Read {
                path: self.path.clone(),
                source,
            }
        })?;
        let pairs = from_text_with(&text, &self.config);
        debug!(path = %self.path.display(), count = pairs.len(), "pairs read");
        Ok(pairs)
    }

    /// Write a map, one line per entry in insertion order.
    pub fn write_map(&self, map: &PairMap) -> CodecResult<()> {
        self.write(&from_map(map))
    }

    /// Read the file into a map; later duplicate keys overwrite earlier ones.
    pub fn read_map(&self) -> CodecResult<PairMap> {
        self.read().map(|pairs| to_map(&pairs))
    }

    fn write_lines(&self, pairs: &[DataPair]) -> io::Result<()> {
        let newline = self.config.newline();
        replace_file(&self.path, |writer| {
            for pair in pairs {
                writer.write_all(pair.to_line_with(&self.config).as_bytes())?;
                writer.write_all(newline.as_bytes())?;
            }
            Ok(())
        })
    }
}

/// Write `pairs` to `path` with the default configuration.
pub fn write_pairs(path: impl AsRef<Path>, pairs: &[DataPair]) -> CodecResult<()> {
    PairFile::new(path.as_ref()).write(pairs)
}

/// Read the pairs stored at `path` with the default configuration.
pub fn read_pairs(path: impl AsRef<Path>) -> CodecResult<Vec<DataPair>> {
    PairFile::new(path.as_ref()).read()
}

/// Write a map to `path` with the default configuration.
pub fn write_map(path: impl AsRef<Path>, map: &PairMap) -> CodecResult<()> {
    PairFile::new(path.as_ref()).write_map(map)
}

/// Read the map stored at `path` with the default configuration.
pub fn read_map(path: impl AsRef<Path>) -> CodecResult<PairMap> {
    PairFile::new(path.as_ref()).read_map()
}
