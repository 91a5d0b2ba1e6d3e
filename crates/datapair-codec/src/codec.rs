use std::path::Path;

use datapair_types::{CodecConfig, DataPair};

use crate::error::CodecResult;
use crate::file::PairFile;
use crate::mapping::{self, PairMap};
use crate::text;

/// Batch operations over pairs sharing one [`CodecConfig`].
///
/// A convenience front for the [`text`], [`mapping`] and [`file`](crate::file)
/// modules so callers configure line endings and quoting once.
#[derive(Clone, Debug, Default)]
pub struct DataPairCodec {
    config: CodecConfig,
}

impl DataPairCodec {
    /// Create a codec with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Join encoded lines into one text blob.
    pub fn to_text(&self, pairs: &[DataPair]) -> String {
        text::to_text_with(pairs, &self.config)
    }

    /// Parse a text blob, dropping malformed lines.
    pub fn from_text(&self, text: &str) -> Vec<DataPair> {
        text::from_text_with(text, &self.config)
    }

    /// Collect pairs into a map (last write wins).
    pub fn to_map(&self, pairs: &[DataPair]) -> PairMap {
        mapping::to_map(pairs)
    }

    /// One pair per map entry, in insertion order.
    pub fn from_map(&self, map: &PairMap) -> Vec<DataPair> {
        mapping::from_map(map)
    }

    /// A [`PairFile`] at `path` using this codec's configuration.
    pub fn file(&self, path: impl AsRef<Path>) -> PairFile {
        PairFile::with_config(path.as_ref(), self.config.clone())
    }

    /// Write pairs to `path`.
    pub fn write(&self, path: impl AsRef<Path>, pairs: &[DataPair]) -> CodecResult<()> {
        self.file(path).write(pairs)
    }

    /// Read pairs from `path`.
    pub fn read(&self, path: impl AsRef<Path>) -> CodecResult<Vec<DataPair>> {
        self.file(path).read()
    }

    /// Write a map to `path`.
    pub fn write_map(&self, path: impl AsRef<Path>, map: &PairMap) -> CodecResult<()> {
        self.file(path).write_map(map)
    }

    /// Read a map from `path`.
    pub fn read_map(&self, path: impl AsRef<Path>) -> CodecResult<PairMap> {
        self.file(path).read_map()
    }
}
