//! Patient record types
//!
//! - [`RawPatientRecord`]: the loosely-typed shape delivered by the upstream API
//! - [`CanonicalPatientRecord`]: the normalized shape every later stage consumes

mod canonical;
mod raw;

pub use canonical::{CanonicalPatientRecord, UNKNOWN};
pub use raw::{decode_batch, RawNumeric, RawPatientRecord, RawText};
