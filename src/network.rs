//! Network capability
//!
//! Track selection reads one bit of network state: whether a fast
//! (high-bandwidth, unmetered) link is active. The probe answering that is
//! owned by the caller; selection only takes a point-in-time reading.

use tokio::sync::watch;

/// Source of the "fast link active" signal
///
/// Returns `None` when the state is unknown or the probe is unavailable.
/// Implementations must not block.
pub trait NetworkProbe {
    fn fast_network(&self) -> Option<bool>;
}

impl NetworkProbe for bool {
    fn fast_network(&self) -> Option<bool> {
        Some(*self)
    }
}

impl NetworkProbe for Option<bool> {
    fn fast_network(&self) -> Option<bool> {
        *self
    }
}

impl<F> NetworkProbe for F
where
    F: Fn() -> Option<bool>,
{
    fn fast_network(&self) -> Option<bool> {
        self()
    }
}

/// Latest link state published by an async monitor task.
///
/// Once the sender is gone the last value is stale, so the probe reports
/// itself unavailable.
impl NetworkProbe for watch::Receiver<bool> {
    fn fast_network(&self) -> Option<bool> {
        if self.has_changed().is_err() {
            return None;
        }
        Some(*self.borrow())
    }
}

/// A point-in-time reading of the network capability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkCondition {
    fast: bool,
}

impl NetworkCondition {
    pub fn fast() -> Self {
        Self { fast: true }
    }

    pub fn slow() -> Self {
        Self { fast: false }
    }

    /// Read the probe once; an unavailable probe reads as "not fast"
    pub fn read<P: NetworkProbe + ?Sized>(probe: &P) -> Self {
        match probe.fast_network() {
            Some(fast) => Self { fast },
            None => {
                tracing::debug!("Network probe unavailable, assuming slow network");
                Self::slow()
            }
        }
    }

    pub fn is_fast(&self) -> bool {
        self.fast
    }
}

impl From<bool> for NetworkCondition {
    fn from(fast: bool) -> Self {
        Self { fast }
    }
}
