//! Cancellation for paced runs.
//!
//! A [`CancelHandle`] owns the sending side of a `watch` channel; every
//! [`CancelToken`] subscribed to it observes the flag flip to `true`.

use std::time::Duration;

use tokio::sync::watch;

use crate::error::{Result, WaypathError};

#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        CancelHandle { tx }
    }

    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }

    /// Flag every token; works even when no token is alive
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    /// A token with no handle; it is never cancelled
    pub fn never() -> Self {
        let (_tx, rx) = watch::channel(false);
        CancelToken { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(WaypathError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Sleep for `delay`, returning early with `Cancelled` if the handle fires
    pub async fn sleep(&mut self, delay: Duration) -> Result<()> {
        self.check()?;

        let sleep = tokio::time::sleep(delay);
        tokio::pin!(sleep);

        loop {
            tokio::select! {
                _ = &mut sleep => return Ok(()),
                changed = self.rx.changed() => {
                    if changed.is_err() {
                        // Handle dropped: nothing can cancel us any more
                        (&mut sleep).await;
                        return Ok(());
                    }
                    if *self.rx.borrow() {
                        return Err(WaypathError::Cancelled);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_reaches_existing_tokens() {
        let handle = CancelHandle::new();
        let token = handle.token();
        assert!(token.check().is_ok());

        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(matches!(token.check(), Err(WaypathError::Cancelled)));
    }

    #[test]
    fn test_never_token() {
        assert!(!CancelToken::never().is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_completes_without_cancel() {
        let mut token = CancelToken::never();
        assert!(token.sleep(Duration::from_secs(2)).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_interrupted_by_cancel() {
        let handle = CancelHandle::new();
        let mut token = handle.token();

        let sleeper = tokio::spawn(async move { token.sleep(Duration::from_secs(60)).await });
        tokio::time::sleep(Duration::from_secs(1)).await;
        handle.cancel();

        let result = sleeper.await.unwrap();
        assert!(matches!(result, Err(WaypathError::Cancelled)));
    }
}
