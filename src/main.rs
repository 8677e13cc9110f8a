use clap::Parser;
use std::io::Read;
use warbler_ui::config::cli::Command;
use warbler_ui::core::{LikeClient, MessageId};
use warbler_ui::utils::{logger, validation::Validate};
use warbler_ui::{CharCounter, CliConfig, MemoryElement, PageConfig, ReqwestLikeClient, Result};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}

async fn run(cli: &CliConfig) -> Result<()> {
    let config = cli.page_config()?;
    config.validate()?;

    match &cli.command {
        Command::Like { message_id } => send_like(&config, message_id).await,
        Command::Count { text } => {
            let text = match text {
                Some(text) => text.clone(),
                None => read_stdin()?,
            };
            println!("{}", count(&config, &text));
            Ok(())
        }
        Command::CheckConfig { json } => {
            let rendered = if *json {
                serde_json::to_string_pretty(&config).map_err(|e| {
                    warbler_ui::UiError::ConfigError {
                        message: e.to_string(),
                    }
                })?
            } else {
                config.to_toml_string()?
            };
            println!("✅ Configuration is valid");
            println!("{}", rendered);
            Ok(())
        }
    }
}

async fn send_like(config: &PageConfig, message_id: &str) -> Result<()> {
    let client = ReqwestLikeClient::from_config(config)?;
    let message_id = MessageId::new(message_id)?;

    tracing::info!("Sending like to {}", client.like_url(&message_id)?);
    client.add_like(&message_id).await?;

    println!("✅ Like sent for message {}", message_id);
    Ok(())
}

fn count(config: &PageConfig, text: &str) -> String {
    let input = MemoryElement::new(&config.input_id);
    let label = MemoryElement::new(&config.label_id);
    input.set_value(text);

    let counter = CharCounter::new(input, label, config);
    counter.on_key_up()
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    // A piped message usually ends with the shell's newline.
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
