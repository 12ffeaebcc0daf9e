//! Wire encoding shared by every event family: one discriminant, fixed envelope fields and
//! at most one populated variant.

mod discriminant;
mod envelope;
mod error;

pub(crate) use discriminant::discriminant;
pub use discriminant::Discriminant;
pub(crate) use envelope::envelope_serde;
pub use envelope::{decode, decode_with, encode, from_value, from_value_with, to_value, EmptyContent, Envelope, NoFields, TaggedUnion, Wire};
pub use error::{CodecError, Result};
