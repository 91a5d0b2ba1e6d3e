//! Typed binary blob holder.
//!
//! [`BinaryHolder`] stores the bincode encoding of any serde value along with
//! the name of the type that produced it, and refuses to decode the bytes
//! into a different type. Holders persist through explicit
//! [`save`](BinaryHolder::save) / [`load`](BinaryHolder::load) calls using a
//! small checksummed file format (see [`format`]), and can dump their bytes
//! as text for inspection.

pub mod error;
pub mod format;
pub mod holder;

pub use error::{HolderError, HolderResult};
pub use holder::BinaryHolder;
