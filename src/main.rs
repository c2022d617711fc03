use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tunnel_bot::{
    pipeline::yesterday, IdentityPolicy, PairingScope, Pipeline, PlayerRegister, ScoreScale,
    StatcastCsv, TunnelConfig,
};

#[derive(Parser)]
#[command(name = "tunnel_bot")]
#[command(about = "Find the day's best tunneled pitch from Statcast data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one day and print the winning pitch as JSON
    Run {
        #[command(flatten)]
        inputs: Inputs,

        /// Game date (YYYY-MM-DD); defaults to yesterday
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Serve GET /top-tunnel?date=YYYY-MM-DD over HTTP (BIND_ADDR, default 0.0.0.0:8080)
    Serve {
        #[command(flatten)]
        inputs: Inputs,
    },
}

#[derive(Args)]
struct Inputs {
    /// Statcast CSV export containing the day's pitches
    #[arg(long)]
    pitches: PathBuf,

    /// Player register CSV (key_mlbam, name_first, name_last)
    #[arg(long)]
    players: PathBuf,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the pairing scope from the config
    #[arg(long, value_enum)]
    pairing: Option<Pairing>,

    /// Report the raw score instead of its log2
    #[arg(long)]
    raw_score: bool,

    /// Fail when a player name cannot be resolved
    #[arg(long)]
    strict_identity: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Pairing {
    Pitcher,
    AtBat,
}

impl Inputs {
    fn config(&self) -> anyhow::Result<TunnelConfig> {
        let mut cfg = match &self.config {
            Some(path) => TunnelConfig::load(path)?,
            None => TunnelConfig::default(),
        };
        if let Some(pairing) = self.pairing {
            cfg.pairing = match pairing {
                Pairing::Pitcher => PairingScope::Pitcher,
                Pairing::AtBat => PairingScope::AtBat,
            };
        }
        if self.raw_score {
            cfg.score_scale = ScoreScale::Raw;
        }
        if self.strict_identity {
            cfg.identity = IdentityPolicy::Strict;
        }
        Ok(cfg)
    }

    fn pipeline(&self) -> anyhow::Result<Pipeline<StatcastCsv, PlayerRegister>> {
        let cfg = self.config()?;
        let players = PlayerRegister::from_path(&self.players).with_context(|| {
            format!("failed to load player register {}", self.players.display())
        })?;
        tracing::info!(players = players.len(), ?cfg, "loaded configuration");
        Ok(Pipeline::new(StatcastCsv::new(&self.pitches), players, cfg))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { inputs, date } => {
            let pipeline = inputs.pipeline()?;
            let date = date.unwrap_or_else(yesterday);

            match tokio::task::spawn_blocking(move || pipeline.run(date)).await? {
                Ok(result) => {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
                Err(err) if err.is_routine() => {
                    tracing::info!(%date, kind = err.kind(), "nothing to report: {}", err);
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("tunnel run for {} failed", date));
                }
            }
        }

        Commands::Serve { inputs } => {
            let pipeline = Arc::new(inputs.pipeline()?);
            let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
            tunnel_bot::server::serve(&bind_addr, pipeline).await?;
        }
    }

    Ok(())
}
