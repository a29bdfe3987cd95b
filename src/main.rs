//! ContestBot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use tracing::{info, warn, error};

use contest_bot::{
    config::Settings,
    utils::logging,
    database::{DatabaseService, ParticipantStore, connection::{create_pool, DatabaseConfig}},
    services::ServiceFactory,
    handlers::{
        commands::{handle_command, Command},
        messages::{handle_web_app_data, handle_other_message},
    },
    web,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", contest_bot::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = create_pool(&DatabaseConfig::from_settings(&settings.database)).await?;
    let database_service = DatabaseService::new(db_pool);
    database_service.migrate().await?;

    match database_service.get_system_stats().await {
        Ok(stats) => info!(stats = %stats, "Database ready"),
        Err(e) => warn!(error = %e, "Failed to read database statistics"),
    }

    let store: Arc<dyn ParticipantStore> = Arc::new(database_service.participants.clone());
    let services = ServiceFactory::new(settings.clone(), store);

    let listener = if settings.features.web_enabled {
        Some(web::bind(&settings.web).await?)
    } else {
        None
    };

    let web_front = async {
        match listener {
            Some(listener) => web::serve(listener, services.clone()).await.map_err(anyhow::Error::from),
            None => Ok(()),
        }
    };

    let bot_front = async {
        if settings.features.bot_enabled {
            run_bot(&settings, services.clone()).await
        } else {
            Ok(())
        }
    };

    // Either front end failing stops the process
    tokio::try_join!(web_front, bot_front)?;

    info!("ContestBot has been shut down.");

    Ok(())
}

/// Prepare the bot and run long polling until Ctrl+C
async fn run_bot(settings: &Settings, services: ServiceFactory) -> anyhow::Result<()> {
    let bot = Bot::new(&settings.bot.token);

    // Polling gets no updates while a webhook is still registered
    if let Err(e) = bot.delete_webhook().drop_pending_updates(false).await {
        warn!(error = %e, "delete_webhook failed");
    }

    let me = bot.get_me().await?;
    info!(username = ?me.username, "Bot started");

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![services])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .branch(Update::filter_message()
            .branch(
                // Handle commands
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(handle_commands)
            )
            .branch(
                // Handle Mini App submissions
                dptree::filter(|msg: Message| msg.web_app_data().is_some())
                    .endpoint(handle_web_app_messages)
            )
            .branch(
                dptree::endpoint(handle_other_messages)
            )
        )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, services).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle Mini App data messages
async fn handle_web_app_messages(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
) -> HandlerResult {
    if let Err(e) = handle_web_app_data(bot, msg, services).await {
        error!(error = %e, "Error handling Mini App data");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_other_messages(msg: Message) -> HandlerResult {
    handle_other_message(msg).await?;
    Ok(())
}
