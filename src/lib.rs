pub mod commands;
pub mod config;
pub mod content;
pub mod events;
pub mod journal;
pub mod liveness;
pub mod reminder;
pub mod support;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub struct Data {
    pub cooldowns: support::CooldownGate,
    pub deletions: journal::DeletionTracker,
    pub library: content::ContentLibrary,
}
