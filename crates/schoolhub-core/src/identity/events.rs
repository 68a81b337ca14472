//! Session-change notification stream.
//!
//! A broadcast hub owned by the provider client. Each UI component that
//! cares about session presence holds its own [`SessionSubscription`];
//! dropping the handle is the cancellation. There is no shared mutable
//! state between subscribers — the stream is the only synchronization
//! mechanism.

use tokio::sync::broadcast;

use crate::identity::AuthUser;

/// Buffered transitions per subscriber before the receiver is considered
/// lagged. Session changes are rare; a small buffer is plenty.
const CHANNEL_CAPACITY: usize = 16;

/// One delivery from the session-change stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSignal {
    /// The session transitioned; payload is the new user projection.
    Changed(Option<AuthUser>),
    /// The subscriber fell behind and transitions were dropped. The current
    /// state must be refetched rather than trusted from the next payload.
    Lagged,
}

/// Fan-out point for session transitions.
#[derive(Debug, Clone)]
pub struct SessionHub {
    tx: broadcast::Sender<Option<AuthUser>>,
}

impl Default for SessionHub {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Registers a new listener. Every transition notified after this call
    /// is delivered, in emission order, until the handle is dropped.
    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Publishes a transition to all live subscribers.
    ///
    /// A send error only means nobody is listening right now; that is fine.
    pub fn notify(&self, user: Option<AuthUser>) {
        let _ = self.tx.send(user);
    }

    /// Number of live subscriptions (used by tests and diagnostics).
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Cancellable handle on the session-change stream.
///
/// Dropping the subscription stops delivery; there is no explicit
/// unsubscribe call to forget.
#[derive(Debug)]
pub struct SessionSubscription {
    rx: broadcast::Receiver<Option<AuthUser>>,
}

impl SessionSubscription {
    /// Non-blocking poll, for event loops that drain per frame.
    pub fn try_next(&mut self) -> Option<SessionSignal> {
        use broadcast::error::TryRecvError;

        match self.rx.try_recv() {
            Ok(user) => Some(SessionSignal::Changed(user)),
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "session subscriber lagged");
                Some(SessionSignal::Lagged)
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => None,
        }
    }

    /// Awaits the next transition. Resolves to `None` once the hub is gone.
    pub async fn next(&mut self) -> Option<SessionSignal> {
        use broadcast::error::RecvError;

        match self.rx.recv().await {
            Ok(user) => Some(SessionSignal::Changed(user)),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "session subscriber lagged");
                Some(SessionSignal::Lagged)
            }
            Err(RecvError::Closed) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_in_emission_order() {
        let hub = SessionHub::new();
        let mut sub = hub.subscribe();

        hub.notify(Some(AuthUser::new("a@b.com")));
        hub.notify(None);

        assert_eq!(
            sub.try_next(),
            Some(SessionSignal::Changed(Some(AuthUser::new("a@b.com"))))
        );
        assert_eq!(sub.try_next(), Some(SessionSignal::Changed(None)));
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn test_all_subscribers_observe_the_same_transition() {
        let hub = SessionHub::new();
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();

        hub.notify(Some(AuthUser::new("a@b.com")));

        let expected = SessionSignal::Changed(Some(AuthUser::new("a@b.com")));
        assert_eq!(first.try_next(), Some(expected.clone()));
        assert_eq!(second.try_next(), Some(expected));
    }

    #[test]
    fn test_drop_cancels_delivery() {
        let hub = SessionHub::new();
        let sub = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 1);

        drop(sub);
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_created_after_notify_misses_it() {
        let hub = SessionHub::new();
        hub.notify(Some(AuthUser::new("a@b.com")));

        let mut late = hub.subscribe();
        assert_eq!(late.try_next(), None);
    }

    #[test]
    fn test_lagged_subscriber_is_told_to_refetch() {
        let hub = SessionHub::new();
        let mut sub = hub.subscribe();

        for i in 0..(CHANNEL_CAPACITY + 4) {
            hub.notify(Some(AuthUser::new(format!("user{i}@school.com"))));
        }

        assert_eq!(sub.try_next(), Some(SessionSignal::Lagged));
    }
}
