//! Helpers shared by the binaries in this crate: color maps for
//! [`Wave::draw`][snewton::wave::Wave::draw] and image output.

pub mod color;
pub mod frames;
