//! Pending accounting
//!
//! Pure scans counting unresolved endpoints, split by direction. Counts are
//! recomputed on demand and never cached, so they always reflect the
//! current graph.

use crate::domain::entities::{Bay, Device};

/// Pending endpoint counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct PendingCounts {
    pub in_pending: usize,
    pub out_pending: usize,
}

impl PendingCounts {
    pub fn total(&self) -> usize {
        self.in_pending + self.out_pending
    }

    pub fn is_clear(&self) -> bool {
        self.total() == 0
    }
}

impl std::ops::Add for PendingCounts {
    type Output = PendingCounts;

    fn add(self, other: PendingCounts) -> PendingCounts {
        PendingCounts {
            in_pending: self.in_pending + other.in_pending,
            out_pending: self.out_pending + other.out_pending,
        }
    }
}

/// Count pending endpoints on one device
pub fn count_pending_for_device(device: &Device) -> PendingCounts {
    PendingCounts {
        in_pending: device.inputs.iter().filter(|e| e.is_pending()).count(),
        out_pending: device.outputs.iter().filter(|e| e.is_pending()).count(),
    }
}

/// Count pending endpoints across a bay
pub fn count_pending_for_bay(bay: &Bay) -> PendingCounts {
    bay.devices
        .values()
        .map(count_pending_for_device)
        .fold(PendingCounts::default(), |acc, c| acc + c)
}
