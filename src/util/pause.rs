//! Timer suspension used by submit cycles.

#![allow(clippy::unused_async)]

use std::time::Duration;

/// Suspend the current task for a fixed duration. Not cancellable.
#[allow(async_fn_in_trait)]
pub trait Pause {
    async fn pause(&self, duration: Duration);
}

/// Browser timer (`setTimeout` via `gloo-timers`). Returns immediately
/// outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerPause;

impl Pause for TimerPause {
    async fn pause(&self, duration: Duration) {
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = duration;
        }
    }
}
