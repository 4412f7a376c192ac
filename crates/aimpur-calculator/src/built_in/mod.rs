//! Built-in calculators provided by the Aimpur tools.

pub mod attendance;
pub mod paint;
pub mod room_size;
pub mod tile;
