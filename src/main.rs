use roomy::assistant::{Assistant, GeminiClient};
use roomy::catalog::rating_label;
use roomy::config::AssistantConfig;
use roomy::{App, AppState, ChatTarget, Command};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Roomy - alquiler de habitaciones");
    info!("==================================");

    let config = AssistantConfig::from_env()?;
    let assistant = Assistant::new(Arc::new(GeminiClient::new(&config)?));
    let mut app = App::new(AppState::seeded(), assistant);

    // Display catalog
    let results = app.state().visible_listings();
    info!("{} listings available\n", results.listings.len());

    for (i, listing) in results.listings.iter().enumerate() {
        println!("{}. {} ({} €/mes)", i + 1, listing.title, listing.price);
        println!("   {}", listing.location);
        println!("   Valoración: {}", rating_label(&listing.reviews));
        println!("   Servicios: {}", listing.amenities.join(", "));
        println!("   Contacto: {} ({})", listing.owner_name, listing.phone);
        println!();
    }

    // Relay stdin to the help assistant until EOF
    app.handle(Command::OpenChat(ChatTarget::Help)).await?;
    if let Some(greeting) = app
        .state()
        .chat(ChatTarget::Help)
        .and_then(|chat| chat.messages().last())
    {
        println!("🤖 {}", greeting.text);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        app.handle(Command::SendChat {
            target: ChatTarget::Help,
            text: line,
        })
        .await?;

        if let Some(reply) = app
            .state()
            .chat(ChatTarget::Help)
            .and_then(|chat| chat.messages().last())
        {
            println!("🤖 {}", reply.text);
        }
    }

    app.handle(Command::CloseChat(ChatTarget::Help)).await?;
    info!("👋 Bye");

    Ok(())
}
