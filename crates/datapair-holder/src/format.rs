//! On-disk format for [`BinaryHolder`].
//!
//! ```text
//! [4 bytes: magic "DPHB"]
//! [1 byte:  format version]
//! [4 bytes: type name length (little-endian u32)]
//! [N bytes: type name (UTF-8)]
//! [4 bytes: CRC32 of payload (little-endian u32)]
//! [8 bytes: payload length (little-endian u64)]
//! [M bytes: payload]
//! ```

use std::fs;
use std::path::Path;

use datapair_types::replace_file;
use tracing::{debug, error, warn};

use crate::error::{HolderError, HolderResult};
use crate::holder::BinaryHolder;

const MAGIC: [u8; 4] = *b"DPHB";
const FORMAT_VERSION: u8 = 1;

impl BinaryHolder {
    /// Encode the holder in the framed file format.
    pub fn to_file_bytes(&self) -> Vec<u8> {
        let name = self.type_name().as_bytes();
        let payload = self.bytes();

        let mut out = Vec::with_capacity(4 + 1 + 4 + name.len() + 4 + 8 + payload.len());
        out.extend_from_slice(&MAGIC);
        out.push(FORMAT_VERSION);
        out.extend_from_slice(&(name.len() as u32).to_le_bytes());
        out.extend_from_slice(name);
        out.extend_from_slice(&crc32fast::hash(payload).to_le_bytes());
        out.extend_from_slice(&(payload.len() as u64).to_le_bytes());
        out.extend_from_slice(payload);
        out
    }

    /// Decode a holder from the framed file format, verifying the checksum.
    pub fn from_file_bytes(data: &[u8]) -> HolderResult<Self> {
        let mut cursor = Cursor { data, offset: 0 };

        let magic: [u8; 4] = cursor.array()?;
        if magic != MAGIC {
            return Err(HolderError::BadMagic(magic));
        }

        let [version] = cursor.array::<1>()?;
        if version != FORMAT_VERSION {
            return Err(HolderError::UnsupportedVersion(version));
        }

        let name_len = u32::from_le_bytes(cursor.array()?) as usize;
        let name = std::str::from_utf8(cursor.take(name_len)?)
            .map_err(|e| HolderError::InvalidTypeName(e.to_string()))?
            .to_string();

        let expected_crc = u32::from_le_bytes(cursor.array()?);
        let payload_len = u64::from_le_bytes(cursor.array()?);
        let payload_len = usize::try_from(payload_len).map_err(|_| HolderError::Truncated {
            offset: cursor.offset,
            needed: usize::MAX,
            available: cursor.remaining(),
        })?;
        let payload = cursor.take(payload_len)?;

        let actual_crc = crc32fast::hash(payload);
        if actual_crc != expected_crc {
            warn!(expected = expected_crc, actual = actual_crc, "holder payload CRC mismatch");
            return Err(HolderError::CrcMismatch {
                expected: expected_crc,
                actual: actual_crc,
            });
        }

        Ok(Self::from_parts(name, payload.to_vec()))
    }

    /// Save the holder to `path`, replacing any existing file.
    ///
    /// The frame is written to a temporary file and moved over `path`, so a
    /// failed save leaves the previous file intact.
    pub fn save(&self, path: impl AsRef<Path>) -> HolderResult<()> {
        let path = path.as_ref();
        let bytes = self.to_file_bytes();
        if let Err(e) = replace_file(path, |writer| writer.write_all(&bytes)) {
            error!(path = %path.display(), error = %e, "failed to save holder");
            return Err(HolderError::Io(e));
        }
        debug!(path = %path.display(), len = self.len(), "holder saved");
        Ok(())
    }

    /// Load a holder previously written by [`save`](Self::save).
    pub fn load(path: impl AsRef<Path>) -> HolderResult<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "failed to read holder");
            HolderError::Io(e)
        })?;

        let holder = Self::from_file_bytes(&data).inspect_err(|e| {
            error!(path = %path.display(), error = %e, "invalid holder file");
        })?;
        debug!(path = %path.display(), len = holder.len(), type_name = holder.type_name(), "holder loaded");
        Ok(holder)
    }
}

/// Bounds-checked reader over a byte slice.
struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    fn take(&mut self, len: usize) -> HolderResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(HolderError::Truncated {
                offset: self.offset,
                needed: len,
                available: self.remaining(),
            });
        }
        let slice = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> HolderResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder() -> BinaryHolder {
        let mut holder = BinaryHolder::new();
        holder.store(&vec!["alpha".to_string(), "beta".to_string()]).unwrap();
        holder
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holder.bin");

        let original = holder();
        original.save(&path).unwrap();
        let loaded = BinaryHolder::load(&path).unwrap();

        assert_eq!(loaded, original);
        assert_eq!(
            loaded.restore::<Vec<String>>().unwrap(),
            vec!["alpha".to_string(), "beta".to_string()]
        );
    }

    #[test]
    fn empty_holder_roundtrip() {
        let empty = BinaryHolder::new();
        assert_eq!(BinaryHolder::from_file_bytes(&empty.to_file_bytes()).unwrap(), empty);
    }

    #[test]
    fn crc_detects_corruption() {
        let mut bytes = holder().to_file_bytes();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;
        assert!(matches!(
            BinaryHolder::from_file_bytes(&bytes),
            Err(HolderError::CrcMismatch { .. })
        ));
    }

    #[test]
    fn bad_magic_rejected() {
        let mut bytes = holder().to_file_bytes();
        bytes[0] = b'X';
        assert!(matches!(
            BinaryHolder::from_file_bytes(&bytes),
            Err(HolderError::BadMagic(_))
        ));
    }

    #[test]
    fn unknown_version_rejected() {
        let mut bytes = holder().to_file_bytes();
        bytes[4] = 9;
        assert!(matches!(
            BinaryHolder::from_file_bytes(&bytes),
            Err(HolderError::UnsupportedVersion(9))
        ));
    }

    #[test]
    fn truncated_file_rejected() {
        let bytes = holder().to_file_bytes();
        for cut in [0, 3, 8, bytes.len() - 1] {
            assert!(
                matches!(
                    BinaryHolder::from_file_bytes(&bytes[..cut]),
                    Err(HolderError::Truncated { .. })
                ),
                "cut at {cut}"
            );
        }
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            BinaryHolder::load(dir.path().join("missing.bin")),
            Err(HolderError::Io(_))
        ));
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holder.bin");
        fs::write(&path, vec![0xAB; 4096]).unwrap();

        let original = holder();
        original.save(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), original.to_file_bytes());
        assert_eq!(BinaryHolder::load(&path).unwrap(), original);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("holder.bin");
        assert!(matches!(holder().save(&path), Err(HolderError::Io(_))));
        assert!(!path.exists());
    }
}
