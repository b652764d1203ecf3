//! Scoped keyboard listeners.
//!
//! A focused element only receives key events while it holds a
//! [`ListenerGuard`]. Guards detach themselves when dropped, so a component
//! that re-attaches by replacing its guard never ends up registered twice.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Registry of elements currently listening for key events.
///
/// Cloning shares the same registry.
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    inner: Arc<RwLock<HashMap<String, usize>>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener for `target`. The listener stays attached until the
    /// returned guard is dropped.
    pub fn attach(&self, target: impl Into<String>) -> ListenerGuard {
        let target = target.into();
        if let Ok(mut guard) = self.inner.write() {
            let count = guard.entry(target.clone()).or_insert(0);
            *count += 1;
            if *count > 1 {
                log::warn!("[listener] {} now has {} key listeners attached", target, count);
            } else {
                log::trace!("[listener] attached {}", target);
            }
        }
        ListenerGuard {
            target,
            registry: Arc::clone(&self.inner),
        }
    }

    /// Check whether `target` has at least one listener attached.
    pub fn is_listening(&self, target: &str) -> bool {
        self.count(target) > 0
    }

    /// Number of listeners attached for `target`.
    pub fn count(&self, target: &str) -> usize {
        self.inner
            .read()
            .map(|guard| guard.get(target).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Total number of attached listeners across all targets.
    pub fn total(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.values().sum())
            .unwrap_or(0)
    }
}

/// An attached key listener. Dropping it detaches the listener.
#[derive(Debug)]
pub struct ListenerGuard {
    target: String,
    registry: Arc<RwLock<HashMap<String, usize>>>,
}

impl ListenerGuard {
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.registry.write() {
            if let Some(count) = guard.get_mut(&self.target) {
                *count = count.saturating_sub(1);
                if *count == 0 {
                    guard.remove(&self.target);
                }
            }
        }
        log::trace!("[listener] detached {}", self.target);
    }
}
