//! Application configuration. Bot token, admin identifier, paths.
//!
//! Read once at startup and immutable thereafter.

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Bot API token. Read from ATM_WATCH_BOT_TOKEN.
    pub bot_token: Option<String>,

    /// The single privileged user. Read from ATM_WATCH_ADMIN_ID.
    pub admin_id: Option<i64>,

    /// Directory holding reports.db. Read from ATM_WATCH_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Alert the admin on each new report (default true). Read from
    /// ATM_WATCH_NOTIFY_ON_NEW_REPORT.
    #[serde(default)]
    pub notify_on_new_report: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ATM_WATCH"));
        if let Ok(path) = std::env::var("ATM_WATCH_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Bot token from config or ATM_WATCH_BOT_TOKEN env.
    pub fn bot_token(&self) -> Option<String> {
        self.bot_token
            .clone()
            .or_else(|| std::env::var("ATM_WATCH_BOT_TOKEN").ok())
    }

    /// Admin id from config or ATM_WATCH_ADMIN_ID env.
    pub fn admin_id(&self) -> Option<i64> {
        self.admin_id.or_else(|| {
            std::env::var("ATM_WATCH_ADMIN_ID")
                .ok()
                .and_then(|s| s.parse().ok())
        })
    }

    /// Data directory. Defaults to ./data if unset.
    pub fn data_dir_or_default(&self) -> String {
        self.data_dir
            .clone()
            .unwrap_or_else(|| "./data".to_string())
    }

    /// Whether new-report alerts fire. Defaults to true if unset.
    pub fn notify_on_new_report_or_default(&self) -> bool {
        self.notify_on_new_report.unwrap_or(true)
    }
}
