pub mod cooldown;

pub use cooldown::{Claim, CooldownGate, COOLDOWN_SECS};

use ::serenity::http::HttpError;
use ::serenity::model::ModelError;
use poise::serenity_prelude as serenity;
use tracing::{debug, error, info, warn};

use crate::{Data, Error};

pub const TRIGGER_PHRASES: &[&str] = &[
    "suicidal",
    "hopeless",
    "worthless",
    "don't want to be here",
    "can't go on",
    "ending it",
    "give up",
    "hate myself",
    "kill myself",
    "end it",
    "off myself",
    "no use",
    "no point",
    "no reason",
    "no hope",
    "no future",
];

pub const SUPPORT_MESSAGE: &str = "\
💙 Hey, it sounds like you're going through something really heavy.
Please know you're not alone. If you're in immediate danger, reach out to someone you trust, \
contact a mental health professional, or call a support line:

**📞 Trans Lifeline:** 877-565-8860
**💬 Crisis Chat:** https://chat.988lifeline.org/

You matter. We're glad you're here. 🫂";

/// Case-insensitive substring match against [`TRIGGER_PHRASES`].
pub fn contains_trigger(content: &str) -> bool {
    // Mobile keyboards often send U+2019 instead of an ASCII apostrophe.
    let normalized = content.to_lowercase().replace('\u{2019}', "'");
    TRIGGER_PHRASES
        .iter()
        .any(|phrase| normalized.contains(phrase))
}

/// Decides whether `content` from `user` gets the support reply at `now`.
/// A returned claim has already been recorded in the gate.
pub fn evaluate(
    gate: &CooldownGate,
    user: serenity::UserId,
    content: &str,
    now: i64,
) -> Option<Claim> {
    if !contains_trigger(content) {
        return None;
    }
    gate.claim(user, now)
}

/// Missing channel permissions, whether caught by the cache or by Discord.
pub fn is_permission_denied(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(resp)) => {
            resp.status_code.as_u16() == 403
        }
        serenity::Error::Model(ModelError::InvalidPermissions { .. }) => true,
        _ => false,
    }
}

pub async fn handle(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    data: &Data,
) -> Result<(), Error> {
    if msg.author.id == ctx.cache.current_user().id {
        return Ok(());
    }

    let now = chrono::Utc::now().timestamp();
    let claim = match evaluate(&data.cooldowns, msg.author.id, &msg.content, now) {
        Some(c) => c,
        None => {
            if contains_trigger(&msg.content) {
                debug!("Cooldown active for {}", msg.author.name);
            }
            return Ok(());
        }
    };

    match msg.channel_id.say(&ctx.http, SUPPORT_MESSAGE).await {
        Ok(_) => {
            info!(user = %msg.author.id, channel = %msg.channel_id, "sent support message");
        }
        Err(e) => {
            data.cooldowns.release(claim);
            if is_permission_denied(&e) {
                warn!(channel = %msg.channel_id, "Missing permission to send support message");
            } else {
                error!(channel = %msg.channel_id, "failed to send support message: {e}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_trigger_case_insensitive() {
        assert!(contains_trigger("I feel HOPELESS today"));
        assert!(contains_trigger("honestly i just want to Give Up"));
        assert!(!contains_trigger("had a great day at the park"));
    }

    #[test]
    fn test_contains_trigger_matches_substrings() {
        // Plain substring match, so phrases also fire inside longer words.
        assert!(contains_trigger("we should end it here"));
        assert!(contains_trigger("spending it all at once"));
        assert!(contains_trigger("there is no point anymore"));
    }

    #[test]
    fn test_contains_trigger_typographic_apostrophe() {
        assert!(contains_trigger("I can\u{2019}t go on like this"));
        assert!(contains_trigger("I don't want to be here"));
    }

    #[test]
    fn test_missing_permissions_detected() {
        let err = serenity::Error::Model(ModelError::InvalidPermissions {
            required: serenity::Permissions::SEND_MESSAGES,
            present: serenity::Permissions::empty(),
        });
        assert!(is_permission_denied(&err));
    }

    #[test]
    fn test_other_errors_are_not_permission_denied() {
        assert!(!is_permission_denied(&serenity::Error::Other("gateway hiccup")));
    }

    #[test]
    fn test_evaluate_ignores_untriggered_messages() {
        let gate = CooldownGate::new();
        let user = serenity::UserId::new(9);

        assert!(evaluate(&gate, user, "hello there", 0).is_none());
        // A plain message must not start a cooldown.
        assert!(gate.should_send(user, 1));
    }
}
