//! Built-in device profiles.

pub mod zyxel_gs1900;
