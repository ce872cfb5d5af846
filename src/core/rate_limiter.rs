use crate::adapters::clock::SystemClock;
use crate::domain::model::Identity;
use crate::domain::ports::Clock;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub max_requests: usize,
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allowed { remaining: usize },
    Denied { retry_after: Duration },
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Admission::Allowed { .. })
    }
}

/// 每隔這麼多次檢查就清掉空的視窗
pub const IDLE_SWEEP_INTERVAL: usize = 256;

/// Sliding-window admission control keyed by requester identity.
///
/// All windows live behind one mutex, so pruning, counting and recording a
/// request happen as a single step per call. Identities whose windows have
/// emptied are dropped every [`IDLE_SWEEP_INTERVAL`] checks.
pub struct RateLimiter {
    config: RateLimitConfig,
    clock: Arc<dyn Clock>,
    windows: Mutex<HashMap<Identity, VecDeque<Instant>>>,
    checks: AtomicUsize,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(config: RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            windows: Mutex::new(HashMap::new()),
            checks: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    pub fn admit(&self, identity: &Identity) -> bool {
        self.admit_at(identity, self.clock.now())
    }

    pub fn admit_at(&self, identity: &Identity, now: Instant) -> bool {
        self.check_at(identity, now).is_allowed()
    }

    pub fn check(&self, identity: &Identity) -> Admission {
        self.check_at(identity, self.clock.now())
    }

    /// 先清掉視窗外的時間戳，額度已滿就拒絕且不記錄本次請求
    pub fn check_at(&self, identity: &Identity, now: Instant) -> Admission {
        let mut windows = self.lock_windows();
        if self.checks.fetch_add(1, Ordering::Relaxed) % IDLE_SWEEP_INTERVAL
            == IDLE_SWEEP_INTERVAL - 1
        {
            let dropped = sweep_idle(&mut windows, now, self.config.window);
            if dropped > 0 {
                tracing::debug!("Dropped {} idle rate-limit windows", dropped);
            }
        }

        let window = windows.entry(identity.clone()).or_default();
        prune(window, now, self.config.window);

        if window.len() >= self.config.max_requests {
            let retry_after = window
                .front()
                .and_then(|oldest| oldest.checked_add(self.config.window))
                .map(|expires| expires.saturating_duration_since(now))
                .unwrap_or(self.config.window);
            tracing::info!(
                "⏰ Rate limit exceeded for {} ({} requests in {:?})",
                identity,
                window.len(),
                self.config.window
            );
            return Admission::Denied { retry_after };
        }

        window.push_back(now);
        let remaining = self.config.max_requests - window.len();
        tracing::debug!("Admitted request for {} ({} remaining)", identity, remaining);
        Admission::Allowed { remaining }
    }

    /// 不佔用額度，只回報剩餘次數
    pub fn remaining(&self, identity: &Identity) -> usize {
        let now = self.clock.now();
        let mut windows = self.lock_windows();
        let used = match windows.get_mut(identity) {
            Some(window) => {
                prune(window, now, self.config.window);
                window.len()
            }
            None => 0,
        };
        self.config.max_requests.saturating_sub(used)
    }

    /// Drops identities whose windows are empty. Returns how many were removed.
    pub fn prune_idle(&self) -> usize {
        let now = self.clock.now();
        let mut windows = self.lock_windows();
        sweep_idle(&mut windows, now, self.config.window)
    }

    pub fn tracked_identities(&self) -> usize {
        self.lock_windows().len()
    }

    fn lock_windows(&self) -> MutexGuard<'_, HashMap<Identity, VecDeque<Instant>>> {
        // 持鎖期間不會 panic，中毒時直接沿用內部資料
        self.windows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// 時間戳 <= now - window 的都丟掉
fn prune(window: &mut VecDeque<Instant>, now: Instant, span: Duration) {
    while window
        .front()
        .is_some_and(|oldest| now.saturating_duration_since(*oldest) >= span)
    {
        window.pop_front();
    }
}

fn sweep_idle(
    windows: &mut HashMap<Identity, VecDeque<Instant>>,
    now: Instant,
    span: Duration,
) -> usize {
    let before = windows.len();
    windows.retain(|_, window| {
        prune(window, now, span);
        !window.is_empty()
    });
    before - windows.len()
}
