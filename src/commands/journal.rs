use std::time::Duration;

use poise::serenity_prelude::{ChannelType, CreateChannel, Mentionable};
use tracing::info;

use crate::journal::{self, CONFIRM_WINDOW_SECS};
use crate::{Context, Error};

const WRONG_CHANNEL: &str = "This command can only be used in your journal channel.";

/// Creates your private journaling channel
#[poise::command(prefix_command, guild_only)]
pub async fn journal(ctx: Context<'_>) -> Result<(), Error> {
    let guild_id = ctx.guild_id().ok_or("This command only works in a server")?;
    let user = ctx.author();
    let name = journal::channel_name(&user.name);

    let channels = guild_id.channels(ctx.http()).await?;
    if let Some(existing) = journal::find_existing(channels.values(), &name, user.id) {
        ctx.say(format!(
            "{} you already have a journal: {}",
            user.mention(),
            existing.mention()
        ))
        .await?;
        return Ok(());
    }

    let bot_id = ctx.serenity_context().cache.current_user().id;
    let builder = CreateChannel::new(name.as_str())
        .kind(ChannelType::Text)
        .topic(journal::JOURNAL_TOPIC)
        .permissions(journal::private_overwrites(guild_id, user.id, bot_id));
    let channel = guild_id.create_channel(ctx.http(), builder).await?;
    info!(guild = %guild_id, channel = %channel.id, "created journal {name}");

    ctx.say(format!(
        "{} your private journal has been created: {}",
        user.mention(),
        channel.mention()
    ))
    .await?;
    channel
        .say(ctx.http(), journal::welcome_message(&user.mention().to_string()))
        .await?;

    Ok(())
}

/// Deletes your messages from this journal
#[poise::command(prefix_command, guild_only)]
pub async fn clearjournal(ctx: Context<'_>) -> Result<(), Error> {
    if !super::in_journal(ctx).await {
        ctx.say(WRONG_CHANNEL).await?;
        return Ok(());
    }

    let user = ctx.author();
    let deleted = journal::clear_user_messages(ctx.http(), ctx.channel_id(), user.id).await?;
    info!(channel = %ctx.channel_id(), "cleared {deleted} journal messages");

    super::say_temporary(
        ctx,
        format!(
            "{} your journal has been cleared ({deleted} messages deleted).",
            user.mention()
        ),
        Duration::from_secs(10),
    )
    .await
}

/// Starts deleting this journal
#[poise::command(prefix_command, guild_only)]
pub async fn deletejournal(ctx: Context<'_>) -> Result<(), Error> {
    if !super::in_journal(ctx).await {
        ctx.say(WRONG_CHANNEL).await?;
        return Ok(());
    }

    let now = chrono::Utc::now().timestamp();
    ctx.data()
        .deletions
        .request_deletion(ctx.author().id, ctx.channel_id(), now);

    ctx.say(format!(
        "{} are you sure you want to delete this journal? \
Type `!confirmdelete` within {CONFIRM_WINDOW_SECS} seconds to confirm, or `!canceldelete` to keep it.",
        ctx.author().mention()
    ))
    .await?;
    Ok(())
}

/// Permanently deletes this journal
#[poise::command(prefix_command, guild_only)]
pub async fn confirmdelete(ctx: Context<'_>) -> Result<(), Error> {
    let now = chrono::Utc::now().timestamp();
    let channel_id = ctx.channel_id();

    if let Err(e) = ctx
        .data()
        .deletions
        .confirm_deletion(ctx.author().id, channel_id, now)
    {
        ctx.say(e.to_string()).await?;
        return Ok(());
    }

    ctx.say(format!("{} deleting your journal...", ctx.author().mention()))
        .await?;
    channel_id.delete(ctx.http()).await?;
    info!(channel = %channel_id, "deleted journal");
    Ok(())
}

/// Keeps this journal after `!deletejournal`
#[poise::command(prefix_command, guild_only)]
pub async fn canceldelete(ctx: Context<'_>) -> Result<(), Error> {
    let text = if ctx.data().deletions.cancel_deletion(ctx.author().id) {
        format!("{} deletion cancelled, your journal stays.", ctx.author().mention())
    } else {
        journal::DeletionError::NoPendingRequest.to_string()
    };
    ctx.say(text).await?;
    Ok(())
}
