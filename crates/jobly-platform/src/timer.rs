use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use jobly_core::ports::TimerPort;

/// `setTimeout`-backed sleep for the mock backend's artificial latency.
pub struct GlooTimer;

#[async_trait(?Send)]
impl TimerPort for GlooTimer {
    async fn sleep(&self, ms: u64) {
        if ms == 0 {
            return;
        }
        TimeoutFuture::new(u32::try_from(ms).unwrap_or(u32::MAX)).await;
    }
}
