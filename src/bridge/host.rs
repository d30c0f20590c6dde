//! Capability the library needs from whoever embeds it.

use super::config::BridgeConfig;
use super::registry::HandleRegistry;
use crate::error::BridgeResult;
use std::io::{self, Write};

/// Code supplied by the embedder and called back from the library.
pub trait Host: Send {
    /// Invoked by [`Bridge::call_host`].
    fn called_from_c(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Host that prints the fixed reverse-call line.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintingHost;

impl Host for PrintingHost {
    fn called_from_c(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Called from C")
    }
}

impl<F> Host for F
where
    F: Fn(&mut dyn Write) -> io::Result<()> + Send,
{
    fn called_from_c(&self, out: &mut dyn Write) -> io::Result<()> {
        self(out)
    }
}

/// Library state bound to one embedder: its host capability and the
/// accumulator handles it owns.
pub struct Bridge<H: Host> {
    host: H,
    config: BridgeConfig,
    registry: HandleRegistry,
}

impl<H: Host> Bridge<H> {
    /// Create a bridge around the embedder's host.
    pub fn new(host: H, config: BridgeConfig) -> Self {
        let registry = HandleRegistry::with_limit(config.max_handles);
        Self {
            host,
            config,
            registry,
        }
    }

    /// Call back into the embedder.
    pub fn call_host(&self, out: &mut dyn Write) -> BridgeResult<()> {
        tracing::trace!("calling host");
        self.host.called_from_c(out)?;
        Ok(())
    }

    /// Get the installed host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Replace the host, keeping live handles.
    pub fn set_host(&mut self, host: H) {
        self.host = host;
    }

    /// Apply a new configuration to the running bridge.
    pub fn reconfigure(&mut self, config: BridgeConfig) {
        self.registry.set_limit(config.max_handles);
        self.config = config;
    }

    /// Get the active configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Get the handle registry.
    pub fn registry(&self) -> &HandleRegistry {
        &self.registry
    }

    /// Get the handle registry mutably.
    pub fn registry_mut(&mut self) -> &mut HandleRegistry {
        &mut self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_printing_host() {
        let bridge = Bridge::new(PrintingHost, BridgeConfig::default());
        let mut out = Vec::new();
        bridge.call_host(&mut out).unwrap();
        assert_eq!(out, b"Called from C\n");
    }

    #[test]
    fn test_closure_host_called_each_time() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let host = move |_: &mut dyn Write| -> io::Result<()> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        };

        let bridge = Bridge::new(host, BridgeConfig::default());
        let mut sink = io::sink();
        bridge.call_host(&mut sink).unwrap();
        bridge.call_host(&mut sink).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reconfigure_applies_limit() {
        let mut bridge = Bridge::new(PrintingHost, BridgeConfig::default());
        bridge.reconfigure(BridgeConfig {
            max_handles: Some(1),
            ..BridgeConfig::default()
        });

        assert_eq!(bridge.config().max_handles, Some(1));
        bridge.registry_mut().create().unwrap();
        assert!(bridge.registry_mut().create().is_err());
        assert_eq!(bridge.registry().len(), 1);
    }
}
