use anyhow::Result;
use clap::Parser;
use slidedraft::app::App;
use slidedraft::input;
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "slidedraft")]
#[command(about = "Draft a new slide presentation from a template and a prompt")]
struct CliArgs {
    /// Identifier of the template presentation to copy.
    #[arg(value_name = "TEMPLATE_ID")]
    template_id: String,

    /// Content prompt. Read interactively when omitted.
    #[arg(value_name = "PROMPT")]
    prompt: Option<String>,
}

fn read_prompt_interactive() -> Result<Option<String>> {
    print!("Enter a prompt for the new presentation (e.g., \"I am so and so and my project entails such and such\"): ");
    io::stdout().flush()?;

    let mut stdin = io::stdin().lock();
    Ok(input::collect_prompt(&mut stdin)?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slidedraft=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let prompt = match args.prompt.map(|p| p.trim().to_string()) {
        Some(p) if !p.is_empty() => p,
        _ => match read_prompt_interactive()? {
            Some(p) => p,
            // Cancelled or empty input: abort silently, nothing was called.
            None => return Ok(()),
        },
    };

    let app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            eprintln!("Configuration needed: {}", e);
            std::process::exit(1);
        }
    };

    info!("Processing your request... This may take a moment.");

    match app.run(&args.template_id, &prompt).await {
        Ok(copy) => {
            info!("Generation completed successfully");
            println!("Success! Your new presentation is ready: {}", copy.url);
            Ok(())
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            eprintln!("An error occurred during the process: {}", e);
            std::process::exit(1);
        }
    }
}
