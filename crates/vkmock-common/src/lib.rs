pub mod logging;
pub mod manifest;
pub mod platform;

pub use logging::{init_logging, try_init_driver_logging};
pub use manifest::IcdManifest;
