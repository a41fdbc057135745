mod help;
mod journal;
mod lookup;
mod resources;

use std::time::Duration;

use tracing::warn;

use crate::{Context, Data, Error};

pub use lookup::reply_text;

pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        help::help(),
        help::journalhelp(),
        resources::resources(),
        resources::legalhelp(),
        lookup::gender(),
        lookup::prompt(),
        lookup::affirmation(),
        journal::journal(),
        journal::clearjournal(),
        journal::deletejournal(),
        journal::confirmdelete(),
        journal::canceldelete(),
    ]
}

/// True when the command was issued inside a journal channel.
async fn in_journal(ctx: Context<'_>) -> bool {
    ctx.guild_channel()
        .await
        .is_some_and(|c| crate::journal::is_journal_channel(&c.name))
}

/// Sends `text` and removes it again after `after`.
async fn say_temporary(ctx: Context<'_>, text: String, after: Duration) -> Result<(), Error> {
    let reply = ctx.say(text).await?;
    let message = reply.message().await?;
    let (channel_id, message_id) = (message.channel_id, message.id);
    let http = ctx.serenity_context().http.clone();

    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        if let Err(e) = channel_id.delete_message(&http, message_id).await {
            warn!("failed to remove temporary message {message_id}: {e}");
        }
    });
    Ok(())
}
