//! Periodic roster refresh
//!
//! Cross-tab consistency is eventual: each poller re-fetches on its own interval.

use std::future::Future;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, warn};

use crate::api::{ApiClient, ClientError};
use crate::models::ParticipantList;

/// How often the event page refreshes its roster
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Fetches an event's listing on a fixed interval
#[derive(Debug, Clone)]
pub struct RosterPoller {
    client: ApiClient,
    event_id: u64,
    period: Duration,
}

impl RosterPoller {
    pub fn new(client: ApiClient, event_id: u64) -> Self {
        Self {
            client,
            event_id,
            period: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn interval(&self) -> Duration {
        self.period
    }

    /// Fetch once immediately, then every interval, until `shutdown` resolves
    ///
    /// Fetch errors are handed to the callback; polling continues.
    pub async fn run<F, S>(self, mut on_update: F, shutdown: S)
    where
        F: FnMut(Result<ParticipantList, ClientError>),
        S: Future<Output = ()>,
    {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => {
                    debug!(event_id = self.event_id, "Poller stopped");
                    break;
                }
                _ = ticker.tick() => {
                    let result = self.client.list_participants(self.event_id).await;
                    if let Err(e) = &result {
                        warn!(event_id = self.event_id, error = %e, "Roster refresh failed");
                    }
                    on_update(result);
                }
            }
        }
    }
}
