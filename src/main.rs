use std::sync::Arc;

use serenity::async_trait;
use serenity::model::application::Interaction;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tokio::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod models;
mod services;
mod store;
mod utils;

use store::EscrowStore;

struct Handler;

/// Shared in-memory deal/session state, inserted at client construction
struct EscrowData;

impl TypeMapKey for EscrowData {
    type Value = Arc<Mutex<EscrowStore>>;
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Component(component) = interaction {
            commands::handle_component(&ctx, &component).await;
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("winzer_escrow=debug".parse().unwrap())
            .add_directive("serenity=warn".parse().unwrap()))
        .with_target(true)
        .init();

    info!("🤝 Starting Winzer Escrow bot...");

    // A missing token is fatal; the process must not start without it
    let token = std::env::var("DISCORD_TOKEN").expect("DISCORD_TOKEN not set");
    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler)
        .await
        .expect("Failed to create client");

    // Deal registry and dialogue sessions live in client data for the
    // process lifetime; durability across restarts is not guaranteed
    {
        let mut data = client.data.write().await;
        data.insert::<EscrowData>(Arc::new(Mutex::new(EscrowStore::new())));
    }

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }
}
