use chatbot_hub::client::{ChatBotApi, DEFAULT_BASE_URL};
use chatbot_hub::ui::dashboard::ChatBotDashboard;
use chatbot_hub::ui::form::{DEFAULT_PLATFORM, PLATFORM_OPTIONS};
use chatbot_hub::ui::list::DeleteOutcome;
use chatbot_hub::ui::TerminalPrompt;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Manage chatbot integrations from the terminal", long_about = None)]
struct Args {
    /// Chatbot collection URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show chatbots, optionally only those of one platform
    List {
        #[arg(short, long)]
        platform: Option<String>,
    },
    /// Add a chatbot
    Add {
        #[arg(long)]
        bot_name: String,
        #[arg(long, default_value = DEFAULT_PLATFORM, value_parser = PLATFORM_OPTIONS)]
        platform: String,
        #[arg(long)]
        intent: String,
        #[arg(long)]
        response: String,
    },
    /// Delete a chatbot by id
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let api = Arc::new(ChatBotApi::new(args.base_url));
    let mut dashboard = ChatBotDashboard::new(api);
    dashboard.mount().await;

    let succeeded = match args.command {
        Command::List { platform } => {
            if let Some(platform) = platform {
                dashboard.set_platform_filter(platform).await;
            }
            true
        }
        Command::Add { bot_name, platform, intent, response } => {
            dashboard.form.bot_name = bot_name;
            dashboard.form.platform = platform;
            dashboard.form.intent = intent;
            dashboard.form.response = response;
            dashboard.submit_form(&TerminalPrompt::default()).await.is_some()
        }
        Command::Delete { id, yes } => {
            let prompt = TerminalPrompt { assume_yes: yes };
            dashboard.delete(&id, &prompt).await != DeleteOutcome::Failed
        }
    };

    println!("{}", dashboard.render());

    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
