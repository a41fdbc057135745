use poise::serenity_prelude::Mentionable;

use crate::{Context, Error};

pub const HELP_TEXT: &str = "\
**📌 Available Commands:**

`!resources` – Lists national and local LGBTQ+ support services.
`!legalhelp` – Provides legal help for trans folks in New Jersey.
`!journal` – Creates your own private journaling channel. Only you and the bot can see it.
`!gender` – Get a random gender identity.
`!help` – Shows this list of available commands.

💡 You can use these anytime, in any channel the bot has access to.";

pub const JOURNAL_HELP_TEXT: &str = "\
**📓 Journal Commands:**
`!prompt` – Receive a reflective journaling prompt in this channel.
`!affirmation` – Receive an affirmation in this channel.
`!clearjournal` – Delete all your messages from your journal.
`!deletejournal` – Start the process to delete this journal channel.
`!confirmdelete` – Confirms permanent deletion of this journal.
`!canceldelete` – Keeps the journal after `!deletejournal`.
`!journalhelp` – Shows this list of journal commands.
💡 These commands only work here in your private journal. Take your time, you're safe here.";

/// Lists the bot's commands
#[poise::command(prefix_command)]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(HELP_TEXT).await?;
    Ok(())
}

/// Lists the commands available inside a journal
#[poise::command(prefix_command)]
pub async fn journalhelp(ctx: Context<'_>) -> Result<(), Error> {
    if !super::in_journal(ctx).await {
        ctx.say(format!(
            "{} this command can only be used in your private journal channel.",
            ctx.author().mention()
        ))
        .await?;
        return Ok(());
    }

    ctx.say(JOURNAL_HELP_TEXT).await?;
    Ok(())
}
