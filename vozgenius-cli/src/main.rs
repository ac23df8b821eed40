use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "vozgenius")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "VozGenius - Spanish text-to-speech from the terminal")]
pub struct Args {
    /// Text to speak. May contain [pausa], [risa], [grito] and [llanto]
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Voice profile id (see --list-voices)
    #[arg(long, value_name = "ID")]
    voice: Option<String>,

    /// espana, mexico or argentina
    #[arg(long)]
    accent: Option<String>,

    /// natural, alegre, triste, susurrar or storyteller
    #[arg(long)]
    style: Option<String>,

    /// 0.5 (slow) to 2.0 (fast)
    #[arg(long)]
    speed: Option<f32>,

    /// -10 (deeper) to 10 (higher)
    #[arg(long, allow_hyphen_values = true)]
    pitch: Option<f32>,

    /// Directory for the generated WAV file
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Play the result on the default output device
    #[arg(long)]
    play: bool,

    /// List the available voice profiles and exit
    #[arg(long)]
    list_voices: bool,

    /// List the inline markup tags and exit
    #[arg(long)]
    list_tags: bool,

    /// Load settings from a specific file
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    setup_tracing()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let args = Args::parse();

    info!(
        "CLI startup: voice={:?}, accent={:?}, style={:?}, play={}, settings={:?}",
        args.voice, args.accent, args.style, args.play, args.settings
    );

    if args.list_voices {
        commands::list_voices();
        return Ok(());
    }
    if args.list_tags {
        commands::list_tags();
        return Ok(());
    }

    commands::generate(args).await
}

fn setup_tracing() -> Result<()> {
    use std::fs;
    use tracing_subscriber::fmt;

    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    let trace_dir = PathBuf::from(home).join(".vozgenius").join("trace");
    fs::create_dir_all(&trace_dir)
        .with_context(|| format!("Failed to create trace directory {trace_dir:?}"))?;

    let log_file = trace_dir.join("vozgenius.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();

    info!("Tracing initialized to {:?}", log_file);
    Ok(())
}
