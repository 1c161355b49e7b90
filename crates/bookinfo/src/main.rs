use anyhow::{bail, Result};
use bookinfo_common::{logger, AppConfig};
use bookinfo_llm::{
    render_markdown, BookLookup, LookupOutcome, OllamaBackend, OllamaClient, RequestContext,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
            return;
        }
    }

    dotenv::dotenv().ok();
}

#[derive(Parser)]
#[command(name = "bookinfo")]
#[command(about = "Book Information Assistant - book details from a local Ollama model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web page server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Look up one book and print the result as Markdown
    Lookup {
        /// Book title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Check that Ollama is running and the model is pulled
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();
    let mut config = AppConfig::from_env()?;

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server_host = host;
            }
            if let Some(port) = port {
                config.server_port = port;
            }
            config.validate()?;
            serve(config).await
        }
        None => serve(config).await,
        Some(Commands::Lookup { title }) => {
            logger::setup_console_logging(&config.log_level)?;
            lookup(&config, title.join(" ")).await
        }
        Some(Commands::Check) => {
            logger::setup_console_logging(&config.log_level)?;
            check(&config).await
        }
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("Book Information Assistant starting...");
    tracing::info!("  Ollama: {}", config.ollama_base_url);
    tracing::info!("  Model: {}", config.llm_model);

    let client = OllamaClient::new(config.ollama_base_url.clone())?;
    if !client.test_connection().await {
        tracing::warn!(
            "Ollama is not reachable at {}; lookups will fail until it is started",
            config.ollama_base_url
        );
    }

    println!("Server listening on http://{}", config.server_bind_address());

    bookinfo_server::start_server(config).await?;
    Ok(())
}

async fn lookup(config: &AppConfig, title: String) -> Result<()> {
    let client = OllamaClient::new(config.ollama_base_url.clone())?;
    let backend = OllamaBackend::new(client, config.llm_model.clone());
    let lookup = BookLookup::new(Arc::new(backend), config.llm_model.clone());

    match lookup.submit(&RequestContext::new(title)).await {
        LookupOutcome::Info { title, lines } => {
            println!("# {}\n", title);
            println!("{}", render_markdown(&lines));
            Ok(())
        }
        LookupOutcome::Warning { message } | LookupOutcome::Error { message } => bail!(message),
    }
}

async fn check(config: &AppConfig) -> Result<()> {
    let client = OllamaClient::new(config.ollama_base_url.clone())?;

    if !client.test_connection().await {
        bail!("Ollama is not reachable at {}", config.ollama_base_url);
    }
    if !client.has_model(&config.llm_model).await? {
        bail!(
            "Model '{}' is not available (run: 'ollama pull {}')",
            config.llm_model,
            config.llm_model
        );
    }

    println!("Ollama is running at {} and '{}' is available", config.ollama_base_url, config.llm_model);
    Ok(())
}
