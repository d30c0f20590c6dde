//! Library state an embedder initializes: configuration, logging, handle
//! registry and the injected host capability.

pub mod config;
pub mod host;
pub mod logging;
pub mod registry;

pub use config::BridgeConfig;
pub use host::{Bridge, Host, PrintingHost};
pub use logging::init_tracing;
pub use registry::{AccumulatorHandle, HandleRegistry, NULL_HANDLE};
