use std::time::Duration;

use super::CancelToken;
use crate::error::Result;

/// Delay between processed nodes when none is configured
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(2000);

/// How long a run pauses after each processed node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    step_delay: Duration,
}

impl Pacing {
    /// No pause at all
    pub const INSTANT: Pacing = Pacing {
        step_delay: Duration::ZERO,
    };

    pub fn new(step_delay: Duration) -> Self {
        Pacing { step_delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Pacing::new(Duration::from_millis(ms))
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    pub(crate) async fn wait(&self, cancel: &mut CancelToken) -> Result<()> {
        if self.step_delay.is_zero() {
            tokio::task::yield_now().await;
            cancel.check()
        } else {
            cancel.sleep(self.step_delay).await
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::new(DEFAULT_STEP_DELAY)
    }
}
