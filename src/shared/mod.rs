pub mod coerce;
pub mod errors;
pub mod fs_atomic;
pub mod logging;
