//! Binary persistence primitives.
//!
//! The modifier wire format lives with the types it encodes
//! (`DamageModifier::serialize`, `Augment::serialize`); this module
//! provides the stream abstraction and error type they share.

pub mod stream;

pub use stream::{CodecError, ReadStream, WriteStream};
