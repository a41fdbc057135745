use poise::serenity_prelude::Mentionable;
use tracing::error;

use crate::content::{ContentError, Resource};
use crate::{Context, Error};

/// What the user sees for a pick from `resource`.
pub fn reply_text(resource: Resource, picked: &Result<String, ContentError>) -> String {
    match (resource, picked) {
        (Resource::Prompts, Ok(entry)) => format!("📝 **Journaling Prompt:**\n{entry}"),
        (Resource::Affirmations, Ok(entry)) => format!("💖 **Affirmation:**\n{entry}"),
        (Resource::Genders, Ok(entry)) => format!("🧃 **Your gender today is:** {entry}"),

        (Resource::Prompts, Err(ContentError::Missing(_))) => {
            "Prompt list not found. Please upload `prompts.txt` to use this feature.".to_string()
        }
        (Resource::Affirmations, Err(ContentError::Missing(_))) => {
            "Affirmation list not found. Please upload `affirmations.txt`.".to_string()
        }
        (Resource::Genders, Err(ContentError::Missing(_))) => {
            "⚠️ `gender.txt` file not found! Please upload one to use this command.".to_string()
        }

        (Resource::Prompts, Err(ContentError::Empty(_))) => "The prompt list is empty!".to_string(),
        (Resource::Affirmations, Err(ContentError::Empty(_))) => {
            "The affirmation list is empty!".to_string()
        }
        (Resource::Genders, Err(ContentError::Empty(_))) => "⚠️ The gender list is empty!".to_string(),

        (_, Err(ContentError::Io { .. })) => {
            format!("Couldn't read `{}` right now, please try again later.", resource.file_name())
        }
    }
}

async fn pick_impl(ctx: Context<'_>, resource: Resource) -> Result<(), Error> {
    let picked = ctx.data().library.pick_random(resource).await;
    if let Err(e @ ContentError::Io { .. }) = &picked {
        error!("{e}");
    }
    ctx.say(reply_text(resource, &picked)).await?;
    Ok(())
}

async fn journal_pick_impl(ctx: Context<'_>, resource: Resource) -> Result<(), Error> {
    if !super::in_journal(ctx).await {
        ctx.say(format!(
            "{} this command can only be used in your private journal channel.",
            ctx.author().mention()
        ))
        .await?;
        return Ok(());
    }
    pick_impl(ctx, resource).await
}

/// Get a random gender identity
#[poise::command(prefix_command)]
pub async fn gender(ctx: Context<'_>) -> Result<(), Error> {
    pick_impl(ctx, Resource::Genders).await
}

/// A reflective journaling prompt
#[poise::command(prefix_command)]
pub async fn prompt(ctx: Context<'_>) -> Result<(), Error> {
    journal_pick_impl(ctx, Resource::Prompts).await
}

/// An affirmation
#[poise::command(prefix_command)]
pub async fn affirmation(ctx: Context<'_>) -> Result<(), Error> {
    journal_pick_impl(ctx, Resource::Affirmations).await
}
