use anyhow::{Context, Result};
use clap::Parser;
use reo_speech::SpeechProvider;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reo", about = "Pronunciation practice with speech recognition")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Skip speaking each target phrase before listening
    #[arg(long)]
    no_tts: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = reo_core::AppConfig::load_from_file(&cli.config)
        .with_context(|| format!("failed to load config from {:?}", cli.config))?;

    let env_filter = EnvFilter::try_new(&config.general.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("reo starting");

    let registry = reo_speech::ProviderRegistry::new();
    let mut provider = registry
        .create(&config.speech.provider)
        .with_context(|| format!("unknown speech provider: {}", config.speech.provider))?;

    let provider_config = config
        .speech
        .scripted
        .clone()
        .unwrap_or_else(|| toml::Value::Table(Default::default()));
    provider
        .initialize(provider_config)
        .await
        .with_context(|| format!("failed to initialize provider '{}'", provider.name()))?;

    let adapter = reo_speech::SpeechAdapter::new(Arc::from(provider));

    if config.phrase.is_empty() {
        tracing::warn!("no phrases configured, nothing to practice");
    }

    for phrase in &config.phrase {
        let mut options = config.speech.recognition.clone();
        if let Some(ref language) = phrase.language {
            options.language = language.clone();
        }

        if !cli.no_tts {
            if let Err(e) = adapter.speak(&phrase.target, &config.speech.synthesis).await {
                tracing::warn!("could not speak target phrase: {e}");
            }
        }

        println!("Say: {}", phrase.target);
        match adapter.start_listening(&phrase.target, &options).await {
            Ok(result) => {
                println!("  heard: {:?} (confidence {:.2})", result.transcript, result.confidence);
                println!("  accuracy: {}%", result.accuracy);
                println!("  {}", result.feedback);
                for suggestion in &result.suggestions {
                    println!("  - {suggestion}");
                }
            }
            Err(e) => {
                println!("  {e}");
            }
        }
    }

    adapter.cleanup();
    tracing::info!("reo done");
    Ok(())
}
