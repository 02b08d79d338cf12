use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use songprompt::config::{AppConfig, CliConfig, FileConfig, DEFAULT_REQUEST_TIMEOUT_SEC};
use songprompt::prompt::coarse_decade;
use songprompt::{GeneratedPrompt, PromptError, PromptGenerator, SpotifyClient, WikipediaClient};

fn version() -> &'static str {
    concat!(env!("APP_VERSION"), "-", env!("GIT_HASH"))
}

#[derive(Parser, Debug)]
#[clap(version = version(), about = "Describe a song as a text-to-music prompt")]
struct CliArgs {
    /// Free-text query, e.g. song title and artist.
    #[clap(required = true)]
    pub query: Vec<String>,

    /// Path to a TOML config file. Values there override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Spotify client id.
    #[clap(long, env = "SPOTIFY_CLIENT_ID", hide_env_values = true)]
    pub spotify_client_id: Option<String>,

    /// Spotify client secret.
    #[clap(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    pub spotify_client_secret: Option<String>,

    /// Timeout in seconds for each outbound request.
    #[clap(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SEC)]
    pub request_timeout_sec: u64,

    /// Seed for descriptive term selection. Same seed, same prompt.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Skip the encyclopedia lookup and describe from catalog data only.
    #[clap(long)]
    pub no_encyclopedia: bool,

    /// Print the result as JSON instead of plain text.
    #[clap(long)]
    pub json: bool,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            spotify_client_id: self.spotify_client_id.clone(),
            spotify_client_secret: self.spotify_client_secret.clone(),
            request_timeout_sec: self.request_timeout_sec,
            seed: self.seed,
            no_encyclopedia: self.no_encyclopedia,
        }
    }
}

fn print_plain(generated: &GeneratedPrompt) {
    let track = &generated.track;
    println!("Track: {}", track.name);
    println!("Artist: {}", track.artist_name);
    println!("Album: {}", track.album.name);
    match generated.release_year {
        Some(year) => println!("Release Date: {} ({})", track.release_date, coarse_decade(year)),
        None => println!("Release Date: {}", track.release_date),
    }
    if let Some(cover) = track.album.cover_url() {
        println!("Album cover: {}", cover);
    }
    println!();
    println!("{}", generated.prompt);
}

fn run(cli_args: CliArgs) -> Result<ExitCode> {
    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let catalog = SpotifyClient::new(
        &config.spotify.client_id,
        &config.spotify.client_secret,
        config.request_timeout_sec,
    )?
    .with_endpoints(&config.spotify.api_url, &config.spotify.token_url);

    let encyclopedia = if config.wikipedia.enabled {
        Some(
            WikipediaClient::new(
                &config.wikipedia.api_url,
                &config.wikipedia.user_agent,
                config.request_timeout_sec,
            )
            .context("Failed to create encyclopedia client")?,
        )
    } else {
        info!("Encyclopedia lookup disabled");
        None
    };

    let generator = match &encyclopedia {
        Some(wikipedia) => PromptGenerator::new(&catalog, wikipedia),
        None => PromptGenerator::catalog_only(&catalog),
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let query = cli_args.query.join(" ");
    match generator.generate(&query, &mut rng) {
        Ok(generated) => {
            if cli_args.json {
                println!("{}", serde_json::to_string_pretty(&generated)?);
            } else {
                print_plain(&generated);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(PromptError::NotFound(_)) => {
            eprintln!(
                "Could not find the specified track. Check the song title and artist and try again."
            );
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn main() -> ExitCode {
    let cli_args = CliArgs::parse();

    if let Err(err) = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
    {
        eprintln!("Failed to initialize logging: {}", err);
    }

    match run(cli_args) {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
