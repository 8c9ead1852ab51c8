/// console logger setup for binaries and tests consuming the crate
pub mod logger;
