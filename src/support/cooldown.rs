use std::collections::HashMap;
use std::sync::Mutex;

use serenity::model::id::UserId;

/// Minimum gap between two automated support replies to the same user.
pub const COOLDOWN_SECS: i64 = 600;

/// Remembers when each user last received the automated support message.
///
/// Timestamps are Unix epoch seconds. Entries are never evicted; the map lives
/// as long as the process.
#[derive(Default)]
pub struct CooldownGate {
    last_sent: Mutex<HashMap<UserId, i64>>,
}

/// A slot taken by [`CooldownGate::claim`]. Hand it back to
/// [`CooldownGate::release`] if the send it was taken for did not go through.
#[derive(Debug)]
pub struct Claim {
    user: UserId,
    previous: Option<i64>,
}

impl CooldownGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_send(&self, user: UserId, now: i64) -> bool {
        let last_sent = self.last_sent.lock().unwrap_or_else(|e| e.into_inner());
        is_open(last_sent.get(&user).copied(), now)
    }

    pub fn record_sent(&self, user: UserId, now: i64) {
        let mut last_sent = self.last_sent.lock().unwrap_or_else(|e| e.into_inner());
        last_sent.insert(user, now);
    }

    /// Checks and records in one step so concurrent messages from the same
    /// user cannot both pass the gate.
    pub fn claim(&self, user: UserId, now: i64) -> Option<Claim> {
        let mut last_sent = self.last_sent.lock().unwrap_or_else(|e| e.into_inner());
        let previous = last_sent.get(&user).copied();
        if !is_open(previous, now) {
            return None;
        }
        last_sent.insert(user, now);
        Some(Claim { user, previous })
    }

    /// Undoes a claim, restoring whatever timestamp was there before it.
    pub fn release(&self, claim: Claim) {
        let mut last_sent = self.last_sent.lock().unwrap_or_else(|e| e.into_inner());
        match claim.previous {
            Some(ts) => last_sent.insert(claim.user, ts),
            None => last_sent.remove(&claim.user),
        };
    }
}

fn is_open(last: Option<i64>, now: i64) -> bool {
    last.map_or(true, |ts| now - ts >= COOLDOWN_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_user_is_open() {
        let gate = CooldownGate::new();
        assert!(gate.should_send(UserId::new(1), 0));
        assert!(gate.should_send(UserId::new(1), 1_700_000_000));
    }

    #[test]
    fn test_window_boundary() {
        let gate = CooldownGate::new();
        let user = UserId::new(7);
        gate.record_sent(user, 1_000);

        assert!(!gate.should_send(user, 1_000));
        assert!(!gate.should_send(user, 1_599));
        assert!(gate.should_send(user, 1_600));
        assert!(gate.should_send(user, 5_000));
    }

    #[test]
    fn test_record_overwrites_previous() {
        let gate = CooldownGate::new();
        let user = UserId::new(7);
        gate.record_sent(user, 0);
        gate.record_sent(user, 900);

        assert!(!gate.should_send(user, 1_000));
        assert!(gate.should_send(user, 1_500));
    }

    #[test]
    fn test_users_are_independent() {
        let gate = CooldownGate::new();
        gate.record_sent(UserId::new(1), 100);

        assert!(!gate.should_send(UserId::new(1), 200));
        assert!(gate.should_send(UserId::new(2), 200));
    }

    #[test]
    fn test_claim_is_exclusive() {
        let gate = CooldownGate::new();
        let user = UserId::new(3);

        assert!(gate.claim(user, 10).is_some());
        assert!(gate.claim(user, 11).is_none());
        assert!(!gate.should_send(user, 11));
    }

    #[test]
    fn test_release_restores_previous_state() {
        let gate = CooldownGate::new();
        let user = UserId::new(3);

        let claim = gate.claim(user, 10).expect("first claim");
        gate.release(claim);
        assert!(gate.should_send(user, 11));

        gate.record_sent(user, 100);
        let claim = gate.claim(user, 800).expect("window elapsed");
        gate.release(claim);
        assert!(!gate.should_send(user, 650));
        assert!(gate.should_send(user, 700));
    }
}
