//! Report aggregation
//!
//! Raw violations become counted reports in two stages. Debounced detection
//! types pass through a per-type burst window first: the window opens on the
//! first hit, and only once enough hits land inside the same window is a
//! single lifetime report counted. Sparse, isolated triggers therefore never
//! accumulate. The exempt types (see [`DetectionType::debounced`]) count
//! immediately; they are rare one-shot events where debounce would hide real
//! incidents.
//!
//! Lifetime accounting tracks the total, per-type counts, and a rolling
//! reports-per-second rate anchored at the first-ever report.

use std::time::{Duration, Instant};

use crate::checks::DetectionType;
use crate::config::BurstConfig;

/// Per-(player, detection-type) debounce state.
#[derive(Debug, Clone, Copy, Default)]
pub enum BurstState {
    #[default]
    Idle,
    Bursting { window_start: Instant, hits: u32 },
}

/// Accumulated report counters for one player.
#[derive(Debug, Default)]
pub struct ReportLedger {
    total: u64,
    by_type: [u32; DetectionType::COUNT],
    bursts: [BurstState; DetectionType::COUNT],
    first_report_at: Option<Instant>,
    rate: f32,
}

/// Counter snapshot for the administrative surface.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub total: u64,
    /// Reports per second since the first report.
    pub rate: f32,
    pub by_type: Vec<(DetectionType, u32)>,
}

impl ReportLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one violation through burst suppression. Returns `true` when it
    /// was promoted to a lifetime-counted report.
    pub fn register(&mut self, detection: DetectionType, burst: &BurstConfig) -> bool {
        self.register_at(detection, burst, Instant::now())
    }

    pub(crate) fn register_at(
        &mut self,
        detection: DetectionType,
        burst: &BurstConfig,
        now: Instant,
    ) -> bool {
        if detection.debounced() && !self.pass_burst(detection, burst, now) {
            return false;
        }
        self.tally(detection, now);
        true
    }

    fn pass_burst(&mut self, detection: DetectionType, burst: &BurstConfig, now: Instant) -> bool {
        let window = Duration::from_secs(burst.window_secs);
        let slot = &mut self.bursts[detection.index()];
        match *slot {
            BurstState::Idle => {
                if burst.promote_at <= 1 {
                    return true;
                }
                *slot = BurstState::Bursting { window_start: now, hits: 1 };
                false
            }
            BurstState::Bursting { window_start, hits } => {
                if now.duration_since(window_start) > window {
                    // Window elapsed short of promotion: restart with this hit.
                    *slot = BurstState::Bursting { window_start: now, hits: 1 };
                    false
                } else if hits + 1 >= burst.promote_at {
                    *slot = BurstState::Idle;
                    true
                } else {
                    *slot = BurstState::Bursting { window_start, hits: hits + 1 };
                    false
                }
            }
        }
    }

    fn tally(&mut self, detection: DetectionType, now: Instant) {
        self.total += 1;
        self.by_type[detection.index()] += 1;
        let epoch = *self.first_report_at.get_or_insert(now);
        let elapsed = now.duration_since(epoch).as_secs_f32();
        if elapsed > 0.0 {
            self.rate = self.total as f32 / elapsed;
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self, detection: DetectionType) -> u32 {
        self.by_type[detection.index()]
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total: self.total,
            rate: self.rate,
            by_type: DetectionType::ALL
                .iter()
                .map(|&d| (d, self.by_type[d.index()]))
                .collect(),
        }
    }

    /// Reset every counter and burst window, keeping the ledger itself.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drop burst windows whose time has run out. Purely cosmetic: a stale
    /// window also self-corrects the next time its detection type fires.
    pub fn expire_stale_bursts(&mut self, burst: &BurstConfig, now: Instant) -> usize {
        let window = Duration::from_secs(burst.window_secs);
        let mut expired = 0;
        for slot in &mut self.bursts {
            if let BurstState::Bursting { window_start, .. } = *slot {
                if now.duration_since(window_start) > window {
                    *slot = BurstState::Idle;
                    expired += 1;
                }
            }
        }
        expired
    }
}
