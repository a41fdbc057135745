use std::collections::HashMap;
use std::sync::Mutex;

use serenity::model::id::{ChannelId, UserId};

/// How long a delete request stays valid.
pub const CONFIRM_WINDOW_SECS: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeletionError {
    #[error("There is no pending delete request for you in this channel.")]
    NoPendingRequest,
    #[error("Your delete request expired. Run `!deletejournal` again to start over.")]
    Expired,
}

#[derive(Debug, Clone, Copy)]
struct PendingDeletion {
    channel: ChannelId,
    requested_at: i64,
}

/// Delete requests waiting for `!confirmdelete`, one per user.
#[derive(Default)]
pub struct DeletionTracker {
    pending: Mutex<HashMap<UserId, PendingDeletion>>,
}

impl DeletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request, replacing any earlier one from the same user.
    pub fn request_deletion(&self, user: UserId, channel: ChannelId, now: i64) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.insert(
            user,
            PendingDeletion {
                channel,
                requested_at: now,
            },
        );
    }

    /// Consumes the request if it was made by `user` for `channel`.
    ///
    /// A request for another channel is left untouched. An expired request is
    /// dropped.
    pub fn confirm_deletion(
        &self,
        user: UserId,
        channel: ChannelId,
        now: i64,
    ) -> Result<(), DeletionError> {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        let entry = match pending.get(&user) {
            Some(p) if p.channel == channel => *p,
            _ => return Err(DeletionError::NoPendingRequest),
        };

        pending.remove(&user);
        if now - entry.requested_at > CONFIRM_WINDOW_SECS {
            return Err(DeletionError::Expired);
        }
        Ok(())
    }

    /// Drops the user's request. Returns false if there was none.
    pub fn cancel_deletion(&self, user: UserId) -> bool {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.remove(&user).is_some()
    }

    #[cfg(test)]
    pub(crate) fn pending_channel(&self, user: UserId) -> Option<ChannelId> {
        let pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.get(&user).map(|p| p.channel)
    }
}
