//! Dispatcher wiring and handlers. No business logic here: group messages
//! go to the intake use case, admin events to the panel, and replies are
//! rendered by the presenter.

use crate::adapters::export::{EXPORT_FILE_NAME, reports_to_csv};
use crate::adapters::telegram::auth::AdminGuard;
use crate::adapters::telegram::keyboards::{self, main_menu};
use crate::adapters::telegram::presenter::render_report_list;
use crate::domain::{DomainError, InboundMessage, Report};
use crate::usecases::{AdminPanel, FilterOutcome, IntakeService, ListTitle};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile, ParseMode};
use tracing::{debug, error, info};

const WELCOME: &str = "👋 Welcome to the ATM report panel!\n\nPick an action:";
const PROMPT_ATM: &str = "Enter the ATM number (6 digits):";
const PROMPT_CHAT: &str = "Enter the chat title (or part of it):";

/// Everything the handlers need, injected via dptree dependencies.
pub struct BotContext {
    pub intake: IntakeService,
    pub panel: AdminPanel,
    pub guard: AdminGuard,
}

/// Run the long-polling dispatcher until shutdown.
pub async fn run_dispatcher(bot: Bot, ctx: Arc<BotContext>) {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter(|msg: Message| msg.chat.is_group() || msg.chat.is_supergroup())
                .endpoint(on_group_message),
        )
        .branch(
            Update::filter_message()
                .filter(|msg: Message| msg.chat.is_private())
                .endpoint(on_admin_message),
        )
        .branch(Update::filter_callback_query().endpoint(on_admin_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

/// Map a Telegram group message to the domain inbound type. Non-text
/// messages and messages without a sender are skipped.
fn map_group_message(msg: &Message) -> Option<InboundMessage> {
    let text = msg.text()?;
    let from = msg.from.as_ref()?;
    Some(InboundMessage {
        text: text.to_string(),
        user_id: from.id.0 as i64,
        username: from.username.clone(),
        chat_id: msg.chat.id.0,
        chat_title: msg.chat.title().map(str::to_string),
        message_id: msg.id.0,
        date: msg.date,
    })
}

async fn on_group_message(msg: Message, ctx: Arc<BotContext>) -> ResponseResult<()> {
    let Some(inbound) = map_group_message(&msg) else {
        return Ok(());
    };
    match ctx.intake.process(inbound).await {
        Ok(Some(report)) => debug!(report_id = report.id, "group message produced a report"),
        Ok(None) => {}
        // No reply channel for the group; the write-path error must not be
        // silently dropped, so it lands in the log at error level.
        Err(e) => error!(chat_id = msg.chat.id.0, error = %e, "failed to store report"),
    }
    Ok(())
}

async fn on_admin_message(bot: Bot, msg: Message, ctx: Arc<BotContext>) -> ResponseResult<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    if !ctx.guard.permits_user(user.id.0 as i64) {
        return ctx.guard.reject_message(&bot, &msg).await;
    }
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if text.trim() == "/start" {
        bot.send_message(msg.chat.id, WELCOME)
            .reply_markup(main_menu())
            .await?;
        return Ok(());
    }

    match ctx.panel.submit_text(msg.chat.id.0, text).await {
        Ok(FilterOutcome::Results { title, reports }) => {
            bot.send_message(msg.chat.id, render_report_list(&title, &reports))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Ok(FilterOutcome::InvalidAtm) => {
            bot.send_message(msg.chat.id, "❌ Invalid ATM number format (6 digits expected).")
                .await?;
        }
        Ok(FilterOutcome::Idle) => {
            bot.send_message(msg.chat.id, "Pick an action from the menu:")
                .reply_markup(main_menu())
                .await?;
        }
        Err(e) => {
            error!(error = %e, "filter query failed");
            bot.send_message(msg.chat.id, describe_error(&e)).await?;
        }
    }
    Ok(())
}

async fn on_admin_callback(bot: Bot, q: CallbackQuery, ctx: Arc<BotContext>) -> ResponseResult<()> {
    if !ctx.guard.permits_user(q.from.id.0 as i64) {
        return ctx.guard.reject_callback(&bot, &q).await;
    }
    // The panel lives in the admin's private chat.
    let chat = ChatId(q.from.id.0 as i64);

    match q.data.as_deref().unwrap_or("") {
        keyboards::CB_TODAY => send_list(&bot, chat, ctx.panel.select_today().await).await?,
        keyboards::CB_WEEK => send_list(&bot, chat, ctx.panel.select_week().await).await?,
        keyboards::CB_BY_ATM => {
            ctx.panel.begin_atm_filter(chat.0).await;
            bot.send_message(chat, PROMPT_ATM).await?;
        }
        keyboards::CB_BY_CHAT => {
            ctx.panel.begin_chat_filter(chat.0).await;
            bot.send_message(chat, PROMPT_CHAT).await?;
        }
        keyboards::CB_EXPORT => send_export(&bot, chat, &ctx).await?,
        other => debug!(data = other, "unknown callback data"),
    }

    bot.answer_callback_query(q.id.clone()).await?;
    Ok(())
}

async fn send_list(
    bot: &Bot,
    chat: ChatId,
    result: Result<(ListTitle, Vec<Report>), DomainError>,
) -> ResponseResult<()> {
    match result {
        Ok((title, reports)) => {
            bot.send_message(chat, render_report_list(&title, &reports))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Err(e) => {
            error!(error = %e, "report query failed");
            bot.send_message(chat, describe_error(&e)).await?;
        }
    }
    Ok(())
}

async fn send_export(bot: &Bot, chat: ChatId, ctx: &BotContext) -> ResponseResult<()> {
    let outcome: Result<Option<(usize, Vec<u8>)>, DomainError> = async {
        let reports = ctx.panel.all_reports().await?;
        if reports.is_empty() {
            return Ok(None);
        }
        let bytes = reports_to_csv(&reports)?;
        Ok(Some((reports.len(), bytes)))
    }
    .await;

    match outcome {
        Ok(None) => {
            bot.send_message(chat, "No data to export.").await?;
        }
        Ok(Some((count, bytes))) => {
            let document = InputFile::memory(bytes).file_name(EXPORT_FILE_NAME);
            // Upload failures are reported with the underlying error text
            // for operator diagnosis; the data itself is still in the store.
            if let Err(e) = bot.send_document(chat, document).await {
                error!(error = %e, "export upload failed");
                bot.send_message(chat, format!("❌ Export failed: {e}")).await?;
            } else {
                info!(count, "exported reports to CSV");
            }
        }
        Err(e) => {
            error!(error = %e, "export failed");
            bot.send_message(chat, describe_error(&e)).await?;
        }
    }
    Ok(())
}

/// Translate an internal error into a plain user-facing reply. Only the
/// export path exposes the underlying error text.
fn describe_error(e: &DomainError) -> String {
    match e {
        DomainError::Validation(_) => {
            "❌ Invalid ATM number format (6 digits expected).".to_string()
        }
        DomainError::Repo(_) => "❌ Failed to read reports, try again later.".to_string(),
        DomainError::Export(msg) => format!("❌ Export failed: {msg}"),
        DomainError::Notify(_) | DomainError::Transport(_) => {
            "❌ Something went wrong, try again later.".to_string()
        }
    }
}
