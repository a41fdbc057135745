//! Recurring group-meeting reminder.
//!
//! A [`CronRule`] fires when every field matches at once: the day of the
//! month lies in its range *and* the weekday matches. "Days 1-7 on a
//! Wednesday" is therefore the first Wednesday of the month.

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Weekday};
use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};

pub const REMINDER_MESSAGE: &str = "@everyone Reminder: We meet today!";

const REMINDER_HOUR: u32 = 9;
const REMINDER_MINUTE: u32 = 0;

#[derive(Debug, thiserror::Error)]
pub enum ReminderError {
    #[error("could not find channel with ID {0}")]
    ChannelResolution(serenity::ChannelId),
    #[error("failed to send reminder: {0}")]
    Send(#[from] serenity::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CronRule {
    pub days: RangeInclusive<u32>,
    pub weekday: Weekday,
    pub hour: u32,
    pub minute: u32,
}

impl CronRule {
    pub fn matches<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> bool {
        self.days.contains(&dt.day())
            && dt.weekday() == self.weekday
            && dt.hour() == self.hour
            && dt.minute() == self.minute
    }

    /// First matching minute strictly after `now`.
    pub fn next_after<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let mut date = now.date_naive();

        // Any weekday recurs within every 7-day range inside about two months.
        for _ in 0..=62 {
            let candidate = date
                .and_hms_opt(self.hour, self.minute, 0)
                .and_then(|naive| now.timezone().from_local_datetime(&naive).earliest());
            if let Some(candidate) = candidate {
                if candidate > *now && self.matches(&candidate) {
                    return Some(candidate);
                }
            }
            date = date.succ_opt()?;
        }
        None
    }
}

/// First and third Wednesday of every month at 09:00 local time.
pub fn meeting_rules() -> Vec<CronRule> {
    [1..=7, 15..=21]
        .into_iter()
        .map(|days| CronRule {
            days,
            weekday: Weekday::Wed,
            hour: REMINDER_HOUR,
            minute: REMINDER_MINUTE,
        })
        .collect()
}

pub async fn send_reminder(
    http: &serenity::Http,
    channel_id: serenity::ChannelId,
) -> Result<(), ReminderError> {
    let channel = match channel_id.to_channel(http).await {
        Ok(serenity::Channel::Guild(c)) => c,
        Ok(_) => return Err(ReminderError::ChannelResolution(channel_id)),
        Err(e) => {
            warn!("channel lookup for {channel_id} failed: {e}");
            return Err(ReminderError::ChannelResolution(channel_id));
        }
    };
    channel.say(http, REMINDER_MESSAGE).await?;
    Ok(())
}

/// Spawns one background task per rule. Call once the gateway is ready.
pub fn start(http: Arc<serenity::Http>, channel_id: serenity::ChannelId, rules: Vec<CronRule>) {
    info!("Scheduling {} reminder rules for channel {channel_id}", rules.len());
    for rule in rules {
        let http = Arc::clone(&http);
        tokio::spawn(async move {
            run_rule(http, channel_id, rule).await;
        });
    }
}

async fn run_rule(http: Arc<serenity::Http>, channel_id: serenity::ChannelId, rule: CronRule) {
    loop {
        let now = Local::now();
        let Some(next) = rule.next_after(&now) else {
            error!("Reminder rule {rule:?} has no next run (stopping)");
            break;
        };

        let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
        tokio::time::sleep(wait).await;

        match send_reminder(&http, channel_id).await {
            Ok(()) => info!("Sent group reminder to {channel_id}"),
            Err(e) => error!("Failed to send group reminder: {e}"),
        }
    }
}
