use poise::serenity_prelude as serenity;

use crate::{Data, Error};

pub async fn handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    // poise runs any prefix command on this message to completion before this
    // handler sees it, so the support reply follows the command's reply.
    if let serenity::FullEvent::Message { new_message } = event {
        crate::support::handle(ctx, new_message, data).await?;
    }
    Ok(())
}
