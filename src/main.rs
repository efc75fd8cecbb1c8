//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run
//! the dispatcher. No business logic here.

use atm_watch::adapters::persistence::SqliteReportStore;
use atm_watch::adapters::telegram::{AdminGuard, BotContext, TelegramNotifier, run_dispatcher};
use atm_watch::ports::{ReportNotifier, ReportStore};
use atm_watch::shared::config::AppConfig;
use atm_watch::usecases::{AdminPanel, IntakeService};
use dotenv::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_default();
    let Some(token) = cfg.bot_token() else {
        anyhow::bail!("Set ATM_WATCH_BOT_TOKEN (env or .env). Get one from @BotFather");
    };
    let Some(admin_id) = cfg.admin_id() else {
        anyhow::bail!("Set ATM_WATCH_ADMIN_ID (env or .env)");
    };

    let data_dir = cfg.data_dir_or_default();
    let store: Arc<dyn ReportStore> = Arc::new(
        SqliteReportStore::connect(&data_dir)
            .await
            .map_err(|e| anyhow::anyhow!("SQLite connect failed: {e}"))?,
    );

    let bot = Bot::new(token);
    let notifier: Arc<dyn ReportNotifier> =
        Arc::new(TelegramNotifier::new(bot.clone(), ChatId(admin_id)));

    let notify = cfg.notify_on_new_report_or_default();
    let ctx = Arc::new(BotContext {
        intake: IntakeService::new(Arc::clone(&store), notifier, notify),
        panel: AdminPanel::new(store),
        guard: AdminGuard::new(admin_id),
    });

    info!(admin_id, data_dir = %data_dir, notify, "atm-watch starting");
    run_dispatcher(bot, ctx).await;

    Ok(())
}
