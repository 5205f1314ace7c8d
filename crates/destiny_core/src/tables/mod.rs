//! Static lookup tables consumed by presentation layers.
//!
//! Data only: renderers read `layout`, report generators read `narrative`.

pub mod layout;
pub mod narrative;
