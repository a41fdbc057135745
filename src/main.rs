use haven_bot::{commands, config, content, events, journal, liveness, reminder, support, Data};
use poise::serenity_prelude as serenity;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    liveness::spawn(config.liveness_port);

    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let reminder_channel = serenity::ChannelId::new(config.reminder_channel_id);
    let resource_dir = config.resource_dir.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("!".into()),
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(events::handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        // Runs once, on the first Ready, so reconnects don't stack reminder jobs.
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                tracing::info!("Logged in as {}", ready.user.name);

                reminder::start(ctx.http.clone(), reminder_channel, reminder::meeting_rules());

                Ok(Data {
                    cooldowns: support::CooldownGate::new(),
                    deletions: journal::DeletionTracker::new(),
                    library: content::ContentLibrary::new(resource_dir),
                })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .expect("failed to build Discord client");

    if let Err(e) = client.start().await {
        tracing::error!("Client error: {e}");
    }
}
