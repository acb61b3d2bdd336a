//! Single in-flight request guard.
//!
//! A view owns one `FetchGate`. At most one `FetchPermit` exists at a time;
//! requests that find the gate closed are dropped, not queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use scopeguard::ScopeGuard;

#[derive(Clone, Default)]
pub struct FetchGate {
    in_flight: Arc<AtomicBool>,
}

/// Held for the duration of one fetch. Dropping it reopens the gate.
pub struct FetchPermit {
    _release: ScopeGuard<Arc<AtomicBool>, fn(Arc<AtomicBool>)>,
}

fn release(flag: Arc<AtomicBool>) {
    flag.store(false, Ordering::Release);
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a permit unless a fetch is already outstanding.
    pub fn try_acquire(&self) -> Option<FetchPermit> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(FetchPermit {
            _release: scopeguard::guard(
                Arc::clone(&self.in_flight),
                release as fn(Arc<AtomicBool>),
            ),
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}
