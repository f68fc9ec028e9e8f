use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

use crate::types::*;

/// One-shot round countdown. Ticks and the final expiry are posted back
/// into the room's own request channel, tagged with the round number.
pub struct RoundTimer {
    stopper: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl RoundTimer {
    pub fn start(round: u32, secs: u8, loopback: RoomTx) -> Self {
        let (stopper, mut stop_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            for passed in 1..=secs {
                tokio::select! {
                    _ = &mut stop_rx => return,
                    _ = sleep(Duration::from_secs(1)) => {}
                }
                let tick = Request::Tick { round, remaining: secs - passed };
                if loopback.send(tick).await.is_err() {
                    return;
                }
            }
            loopback.send(Request::Expiry { round }).await.unwrap_or_default();
        });
        debug!(round, secs, "round timer started");
        Self {
            stopper: Some(stopper),
            handle: Some(handle),
        }
    }

    pub fn stop(&mut self) {
        if let Some(stopper) = self.stopper.take() {
            stopper.send(()).unwrap_or_default();
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::channel;

    #[tokio::test(start_paused = true)]
    async fn counts_down_then_expires_once() {
        let (tx, mut rx) = channel(128);
        let _timer = RoundTimer::start(3, 5, tx);

        let mut seen = vec![];
        while let Some(req) = rx.recv().await {
            seen.push(req);
        }
        assert_eq!(
            seen,
            vec![
                Request::Tick { round: 3, remaining: 4 },
                Request::Tick { round: 3, remaining: 3 },
                Request::Tick { round: 3, remaining: 2 },
                Request::Tick { round: 3, remaining: 1 },
                Request::Tick { round: 3, remaining: 0 },
                Request::Expiry { round: 3 },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn full_round_is_sixty_ticks() {
        let (tx, mut rx) = channel(128);
        let _timer = RoundTimer::start(1, crate::consts::ROUND_SECS, tx);

        let mut ticks = 0;
        let mut expiries = 0;
        while let Some(req) = rx.recv().await {
            match req {
                Request::Tick { .. } => ticks += 1,
                Request::Expiry { .. } => expiries += 1,
                other => panic!("unexpected {:?}", other),
            }
        }
        assert_eq!((ticks, expiries), (60, 1));
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_after_stop() {
        let (tx, mut rx) = channel(128);
        let mut timer = RoundTimer::start(1, 60, tx);

        sleep(Duration::from_millis(2500)).await;
        timer.stop();
        timer.stop();

        let mut seen = vec![];
        while let Some(req) = rx.recv().await {
            seen.push(req);
        }
        assert_eq!(
            seen,
            vec![
                Request::Tick { round: 1, remaining: 59 },
                Request::Tick { round: 1, remaining: 58 },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn stop_after_expiry_is_harmless() {
        let (tx, mut rx) = channel(128);
        let mut timer = RoundTimer::start(9, 1, tx);
        assert_eq!(rx.recv().await, Some(Request::Tick { round: 9, remaining: 0 }));
        assert_eq!(rx.recv().await, Some(Request::Expiry { round: 9 }));
        timer.stop();
        assert_eq!(rx.recv().await, None);
    }
}
