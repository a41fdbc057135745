pub mod pending;

pub use pending::{DeletionError, DeletionTracker, CONFIRM_WINDOW_SECS};

use poise::serenity_prelude as serenity;
use serenity::{
    ChannelId, ChannelType, GetMessages, GuildChannel, GuildId, Http, MessageId, PermissionOverwrite,
    PermissionOverwriteType, Permissions, RoleId, UserId,
};

pub const JOURNAL_PREFIX: &str = "journal-";
pub const JOURNAL_TOPIC: &str = "Private journal – only visible to you";

/// How far back `!clearjournal` looks.
pub const CLEAR_SCAN_LIMIT: usize = 1000;

/// Discord refuses bulk deletes for messages older than two weeks.
const BULK_DELETE_MAX_AGE_SECS: i64 = 14 * 24 * 60 * 60;

pub fn channel_name(display_name: &str) -> String {
    format!(
        "{JOURNAL_PREFIX}{}",
        display_name.to_lowercase().replace(' ', "-")
    )
}

pub fn is_journal_channel(name: &str) -> bool {
    name.starts_with(JOURNAL_PREFIX)
}

pub fn welcome_message(mention: &str) -> String {
    format!(
        "Hi {mention}, this is your private journal. \
Everything you write here is only visible to you.\n\n\
You can use `!journalhelp` to see all journal commands including `!clearjournal` \
to wipe your messages and `!deletejournal` to remove the channel.\n\
📓 Want a journal prompt? Type `!prompt`"
    )
}

/// Overwrites that hide the channel from everyone except `owner` and the bot.
pub fn private_overwrites(
    guild_id: GuildId,
    owner: UserId,
    bot: UserId,
) -> Vec<PermissionOverwrite> {
    let member = Permissions::VIEW_CHANNEL
        | Permissions::SEND_MESSAGES
        | Permissions::READ_MESSAGE_HISTORY;

    vec![
        PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::VIEW_CHANNEL,
            // @everyone shares the guild's id
            kind: PermissionOverwriteType::Role(RoleId::new(guild_id.get())),
        },
        PermissionOverwrite {
            allow: member,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(owner),
        },
        PermissionOverwrite {
            allow: member | Permissions::MANAGE_MESSAGES,
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Member(bot),
        },
    ]
}

/// True if the overwrites explicitly let `user` see the channel.
pub fn grants_view(overwrites: &[PermissionOverwrite], user: UserId) -> bool {
    overwrites.iter().any(|o| {
        matches!(o.kind, PermissionOverwriteType::Member(id) if id == user)
            && o.allow.contains(Permissions::VIEW_CHANNEL)
    })
}

/// A text channel called `expected` that `user` was explicitly let into.
pub fn is_owned_journal(
    name: &str,
    kind: ChannelType,
    overwrites: &[PermissionOverwrite],
    expected: &str,
    user: UserId,
) -> bool {
    kind == ChannelType::Text && name == expected && grants_view(overwrites, user)
}

/// Finds the journal channel already set up for `user`, if any.
pub fn find_existing<'a>(
    channels: impl IntoIterator<Item = &'a GuildChannel>,
    name: &str,
    user: UserId,
) -> Option<&'a GuildChannel> {
    channels
        .into_iter()
        .find(|c| is_owned_journal(&c.name, c.kind, &c.permission_overwrites, name, user))
}

pub fn is_bulk_deletable(sent_at: i64, now: i64) -> bool {
    now - sent_at < BULK_DELETE_MAX_AGE_SECS
}

/// Deletes `user`'s messages among the latest [`CLEAR_SCAN_LIMIT`] in
/// `channel`. Returns how many were removed.
pub async fn clear_user_messages(
    http: &Http,
    channel: ChannelId,
    user: UserId,
) -> Result<usize, serenity::Error> {
    let now = chrono::Utc::now().timestamp();
    let mut recent: Vec<MessageId> = Vec::new();
    let mut old: Vec<MessageId> = Vec::new();
    let mut before: Option<MessageId> = None;
    let mut scanned = 0;

    while scanned < CLEAR_SCAN_LIMIT {
        let limit = (CLEAR_SCAN_LIMIT - scanned).min(100) as u8;
        let mut request = GetMessages::new().limit(limit);
        if let Some(id) = before {
            request = request.before(id);
        }

        let batch = channel.messages(http, request).await?;
        scanned += batch.len();
        before = batch.last().map(|m| m.id);

        for msg in batch.iter().filter(|m| m.author.id == user) {
            if is_bulk_deletable(msg.timestamp.unix_timestamp(), now) {
                recent.push(msg.id);
            } else {
                old.push(msg.id);
            }
        }

        if batch.len() < limit as usize {
            break;
        }
    }

    for chunk in recent.chunks(100) {
        match chunk {
            [single] => channel.delete_message(http, *single).await?,
            _ => channel.delete_messages(http, chunk.iter().copied()).await?,
        }
    }
    for id in &old {
        channel.delete_message(http, *id).await?;
    }

    Ok(recent.len() + old.len())
}
