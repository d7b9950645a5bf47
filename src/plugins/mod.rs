#[cfg(feature = "dev")]
pub mod debug;
pub mod readout;
pub mod stick;
