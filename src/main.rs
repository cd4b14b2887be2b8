//! Binary entrypoint: generates AI trend posts for the Hugo site.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trendpress::cli::Cli;
use trendpress::{chain, post, topic, ContentAcquirer, ImageAcquirer};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let removed = post::clean_old_posts(&cli.content_dir, cli.keep)?;
    if removed > 0 {
        info!(removed, "cleaned up old posts");
    }

    let acquirer = ContentAcquirer::new(chain::text_chain_from_env());
    let images = ImageAcquirer::new(chain::image_chain_from_env(), cli.static_dir.clone());
    info!(
        text_providers = acquirer.provider_count(),
        "provider chain assembled"
    );

    let mut rng = rand::rng();
    for i in 0..cli.count {
        let topic = topic::random_topic(&mut rng);
        info!(article = i + 1, total = cli.count, topic = %topic, "generating article");

        let article = acquirer.acquire(&topic).await;
        let slug = post::slugify(&topic);
        let image_path = images.acquire(&topic, &slug).await;

        let front = post::FrontMatter::for_topic(&topic, image_path, Utc::now());
        let path = post::write_post(&cli.content_dir, &slug, &front, &article.content)?;
        info!(path = %path.display(), provider = %article.provider, "article saved");

        if i + 1 < cli.count {
            tokio::time::sleep(Duration::from_secs(3)).await;
        }
    }

    Ok(())
}
