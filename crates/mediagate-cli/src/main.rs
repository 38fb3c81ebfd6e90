//! Mediagate CLI — inspect and rewrite storage URLs from the command line.
//!
//! Reads API_BASE_URL and STORAGE_CONTAINER_NAME (or S3_BUCKET) from the
//! environment or a `.env` file.

use anyhow::Context;
use clap::{Parser, Subcommand};
use mediagate_api_client::ApiClient;
use mediagate_cli::{describe_url, init_tracing, read_json_input};
use mediagate_core::ProxyConfig;
use mediagate_rewrite::{ConvertOptions, UrlConverter};

#[derive(Parser)]
#[command(name = "mediagate", about = "Storage URL proxy rewriting tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print whether a URL must be routed through the proxy
    Classify {
        /// URL to classify
        url: String,
    },
    /// Rewrite a single URL into a proxy URL
    Convert {
        /// URL to rewrite
        url: String,
        /// Build the signed-url request form
        #[arg(long)]
        signed: bool,
        /// Apply contact card rules
        #[arg(long)]
        vcard: bool,
    },
    /// Explain how a URL is classified and rewritten
    Explain {
        /// URL to explain
        url: String,
        /// Build the signed-url request form
        #[arg(long)]
        signed: bool,
        /// Apply contact card rules
        #[arg(long)]
        vcard: bool,
    },
    /// Rewrite every storage URL in a JSON document
    ConvertJson {
        /// JSON file to read; stdin when omitted or `-`
        file: Option<std::path::PathBuf>,
        /// Build the signed-url request form
        #[arg(long)]
        signed: bool,
    },
    /// Request a signed URL from the backend (falls back to the input)
    SignedUrl {
        /// Source storage URLs
        #[arg(required = true)]
        urls: Vec<String>,
        /// Fail instead of falling back to the source URL
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = ProxyConfig::from_env().context("Invalid configuration")?;
    let converter = UrlConverter::new(config.clone());

    match cli.command {
        Commands::Classify { url } => {
            println!("{}", converter.needs_conversion(&url));
        }
        Commands::Convert { url, signed, vcard } => {
            let options = ConvertOptions {
                use_signed_url: signed,
                is_vcard: vcard,
            };
            println!("{}", converter.convert(&url, options));
        }
        Commands::Explain { url, signed, vcard } => {
            let options = ConvertOptions {
                use_signed_url: signed,
                is_vcard: vcard,
            };
            for line in describe_url(&converter, &url, options) {
                println!("{}", line);
            }
        }
        Commands::ConvertJson { file, signed } => {
            let input = read_json_input(file.as_deref())?;
            let options = ConvertOptions {
                use_signed_url: signed,
                is_vcard: false,
            };
            let output = converter.convert_graph(&input, options);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::SignedUrl { urls, strict } => {
            let client = ApiClient::new(&config)?;
            if strict {
                for url in &urls {
                    let signed = client
                        .try_fetch_signed_url(url)
                        .await
                        .with_context(|| format!("Signed URL request failed for {}", url))?;
                    println!("{}", signed);
                }
            } else {
                for signed in client.fetch_signed_urls(&urls).await {
                    println!("{}", signed);
                }
            }
        }
    }

    Ok(())
}
