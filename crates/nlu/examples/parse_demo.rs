//! Run a handful of messages through the engine and print the results

use dukaan_nlu::CommandEngine;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let engine = CommandEngine::with_defaults()?;

    let messages = [
        "Add new product Rice 50rs 20qty",
        "चावल का स्टॉक 100 करो",
        "Get report from 1 June to 20 June",
        "मुझे साबुन नहीं चाहिए",
        "Show low stock items below 15",
        "pichhle hafte ka report dikhao",
        "चाय का stock update करो to 20",
        "show me top 3 selling products this month",
    ];

    for message in messages {
        let command = engine.parse(message);
        println!("{}", message);
        println!("  language:   {} (mixed: {})", command.language.primary, command.language.is_mixed);
        println!("  normalized: {}", command.normalized_text);
        println!("  intent:     {} ({:.2})", command.intent, command.confidence);
        println!("  entities:   {}", serde_json::to_string(&command.entities)?);
        println!("  status:     {}\n", serde_json::to_string(&command.status)?);
    }

    Ok(())
}
