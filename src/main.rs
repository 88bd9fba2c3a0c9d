use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use msfs_docs::api::create_router;
use msfs_docs::config::CONFIG;
use msfs_docs::DocsService;

#[derive(Parser, Debug)]
#[command(name = "msfs-docs", about = "Search and read the MSFS SDK documentation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API
    Serve {
        /// Overrides DOCS_LISTEN_ADDR
        #[arg(long)]
        addr: Option<String>,
    },
    /// Search the documentation
    Search {
        query: String,
        /// contents, index, glossary or all
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the readable content of one page
    Content {
        url: String,
        #[arg(short, long)]
        section: Option<String>,
    },
    /// List the search categories
    Categories,
    /// List the embedded entries of index, contents or glossary
    Items { category: String },
    /// Run a free-text command, e.g. "Search livery op msfs sdk"
    Ask {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let service: DocsService = DocsService::from_config(&CONFIG)?;

    let output = match cli.command {
        Command::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| CONFIG.listen_addr.clone());
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            log::info!("listening on {addr}");
            axum::serve(listener, create_router(Arc::new(service))).await?;
            return Ok(());
        }
        Command::Search {
            query,
            category,
            limit,
        } => service.search(&query, category.as_deref(), limit).await,
        Command::Content { url, section } => service.get_content(&url, section.as_deref()).await,
        Command::Categories => Ok(service.list_categories()),
        Command::Items { category } => service.list_category_items(&category),
        Command::Ask { words } => service.run_command(&words.join(" ")).await,
    };

    match output {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}
