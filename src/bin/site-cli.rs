use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use agent_site::config::{load_config, SiteConfig};
use agent_site::http::SiteSnapshot;
use agent_site::routing::{LegacyRedirectRule, Rewrite};

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Build and inspection tool for the marketing site", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long, env = "SITE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what the legacy URL interceptor does with a path
    Resolve { path: String },
    /// Print the generated sitemap.xml
    Sitemap,
    /// Print the generated robots.txt
    Robots,
    /// Write sitemap.xml and robots.txt into a directory
    Generate {
        #[arg(short, long, default_value = "public")]
        out: PathBuf,
    },
    /// Query a running server's health endpoint
    Status {
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };

    match cli.command {
        Commands::Resolve { path } => {
            let rule = LegacyRedirectRule::from_config(&config.interceptor);
            match rule.evaluate(&path) {
                Rewrite::Bypass => println!("{path} -> bypass (excluded from interceptor)"),
                Rewrite::PassThrough => println!("{path} -> pass through"),
                Rewrite::Redirect { location, status } => {
                    println!("{path} -> {} {location}", status.as_u16())
                }
            }
        }
        Commands::Sitemap => {
            print!("{}", SiteSnapshot::build_now(config)?.sitemap_xml);
        }
        Commands::Robots => {
            print!("{}", SiteSnapshot::build_now(config)?.robots_txt);
        }
        Commands::Generate { out } => {
            let snapshot = SiteSnapshot::build_now(config)?;
            fs::create_dir_all(&out)?;
            fs::write(out.join("sitemap.xml"), &snapshot.sitemap_xml)?;
            fs::write(out.join("robots.txt"), &snapshot.robots_txt)?;
            println!("Wrote sitemap.xml and robots.txt to {}", out.display());
        }
        Commands::Status { url } => {
            let res = reqwest::Client::new()
                .get(format!("{}/api/health", url.trim_end_matches('/')))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
