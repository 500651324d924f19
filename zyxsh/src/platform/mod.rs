//! Device profiles.
//!
//! A profile carries the literal markers of one switch family's CLI:
//! pagination token, prompt prefixes, invalid-port answer and command aliases.

mod definition;
pub mod vendors;

pub use definition::DeviceProfile;
