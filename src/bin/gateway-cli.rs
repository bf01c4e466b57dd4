use std::path::PathBuf;

use base64::{engine::general_purpose, Engine as _};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Management CLI for the image generation gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a generation request and print the result
    Generate {
        /// Prompt text
        prompt: String,

        /// Model name ("flux", or anything else for SDXL)
        #[arg(short, long, default_value = "flux")]
        model: String,

        /// Style prefix prepended to the prompt
        #[arg(short, long)]
        style: Option<String>,

        /// Path to a JPEG to attach as the source image
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Send a CORS preflight and print the response headers
    Preflight,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Generate {
            prompt,
            model,
            style,
            image,
        } => {
            let mut body = json!({
                "prompt": prompt,
                "model": model,
            });
            if let Some(style) = style {
                body["style"] = json!(style);
            }
            if let Some(path) = image {
                let bytes = std::fs::read(&path)?;
                body["image"] = json!(general_purpose::STANDARD.encode(bytes));
            }

            let res = client.post(&cli.url).json(&body).send().await?;
            print_response(res).await?;
        }
        Commands::Preflight => {
            let res = client
                .request(reqwest::Method::OPTIONS, &cli.url)
                .send()
                .await?;
            println!("{}", res.status());
            for (name, value) in res.headers() {
                println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
