use std::path::Path;

use datapair_types::replace_file;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::error::{HolderError, HolderResult};

/// A byte container that remembers which type produced its contents.
///
/// Values go in through [`store`](Self::store) (bincode) and come
/// back out through [`restore`](Self::restore), which refuses to
/// decode into any type other than the recorded one. Type names come from
/// [`std::any::type_name`] and are only stable within one build toolchain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BinaryHolder {
    type_name: String,
    bytes: Vec<u8>,
}

impl BinaryHolder {
    /// Create an empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reassemble a holder from stored parts.
    pub fn from_parts(type_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            type_name: type_name.into(),
            bytes,
        }
    }

    /// Type name recorded by the last successful `store`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The stored bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of stored bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if no bytes are stored.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Drop the stored bytes and type.
    pub fn clear(&mut self) {
        self.type_name.clear();
        self.bytes.clear();
    }

    /// Store the binary encoding of `value`, replacing previous contents.
    ///
    /// On failure the holder is left unchanged.
    pub fn store<T: Serialize>(&mut self, value: &T) -> HolderResult<()> {
        let type_name = std::any::type_name::<T>();
        let bytes = bincode::serialize(value).map_err(|e| {
            error!(type_name, error = %e, "failed to serialize value");
            HolderError::Serialization(e.to_string())
        })?;

        debug!(type_name, len = bytes.len(), "value serialized into holder");
        self.type_name = type_name.to_string();
        self.bytes = bytes;
        Ok(())
    }

    /// Decode the stored bytes as `T`.
    ///
    /// `T` must be exactly the type that was serialized.
    pub fn restore<T: DeserializeOwned>(&self) -> HolderResult<T> {
        if self.type_name.is_empty() {
            error!("restore called on a holder with no recorded type");
            return Err(HolderError::EmptyType);
        }

        let requested = std::any::type_name::<T>();
        if requested != self.type_name {
            error!(requested, stored = %self.type_name, "holder type mismatch");
            return Err(HolderError::TypeMismatch {
                requested: requested.to_string(),
                stored: self.type_name.clone(),
            });
        }

        bincode::deserialize(&self.bytes).map_err(|e| {
            error!(type_name = %self.type_name, error = %e, "failed to deserialize holder bytes");
            HolderError::Serialization(e.to_string())
        })
    }

    /// The stored bytes read as UTF-8, invalid sequences replaced.
    pub fn to_text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Write [`to_text_lossy`](Self::to_text_lossy) to `path`, replacing any
    /// existing file the same way [`save`](Self::save) does.
    pub fn save_as_text(&self, path: impl AsRef<Path>) -> HolderResult<()> {
        let path = path.as_ref();
        let text = self.to_text_lossy();
        replace_file(path, |writer| writer.write_all(text.as_bytes())).map_err(|e| {
            error!(path = %path.display(), error = %e, "failed to save holder as text");
            HolderError::Io(e)
        })
    }
}
