use std::path::PathBuf;

pub const DEFAULT_REMINDER_CHANNEL_ID: u64 = 1375060747754668138;
pub const DEFAULT_LIVENESS_PORT: u16 = 8080;

pub struct Config {
    pub discord_token: String,
    pub reminder_channel_id: u64,
    pub resource_dir: PathBuf,
    pub liveness_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            discord_token: std::env::var("TOKEN").expect("TOKEN environment variable is required"),
            reminder_channel_id: std::env::var("REMINDER_CHANNEL_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REMINDER_CHANNEL_ID),
            resource_dir: std::env::var("RESOURCE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            liveness_port: std::env::var("LIVENESS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LIVENESS_PORT),
        }
    }
}
