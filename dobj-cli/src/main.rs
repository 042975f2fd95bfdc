use clap::{ArgAction, Parser, Subcommand};
use eyre::{Result, WrapErr};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use dobj_core::config::RendererConfig;
use dobj_core::container::{sample_objects, ObjectContainer};
use dobj_core::count::TypeCounter;
use dobj_core::record::{load_objects, RecordCollector};
use dobj_core::render::render_all;
use dobj_core::visitor::Exhaustive;

#[derive(Parser)]
#[command(name = "dobj")]
#[command(about = "Apply visitors to a collection of typed data objects")]
#[command(version)]
struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Defaults to rendering the built-in sample collection
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render each object as a line of text
    Render {
        /// JSON data file (sample collection if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON renderer configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Count objects by type
    Count {
        /// JSON data file (sample collection if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Write the collection as a JSON data file
    Export {
        /// JSON data file (sample collection if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Create an example data file
    Example {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        None => {
            render(None, None)?;
        }
        Some(Commands::Render { input, config }) => {
            render(input.as_deref(), config.as_deref())?;
        }
        Some(Commands::Count { input }) => {
            count(input.as_deref())?;
        }
        Some(Commands::Export { input, output }) => {
            export(input.as_deref(), output.as_deref())?;
        }
        Some(Commands::Example { output }) => {
            create_example(output)?;
        }
    }

    Ok(())
}

// Logs go to stderr so stdout carries only command output.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_input(input: Option<&Path>) -> Result<ObjectContainer> {
    match input {
        Some(path) => {
            let json = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            let objects = load_objects(&json)
                .wrap_err_with(|| format!("failed to load {}", path.display()))?;
            tracing::info!(path = %path.display(), objects = objects.len(), "loaded input");
            Ok(objects)
        }
        None => Ok(sample_objects()),
    }
}

fn load_config(config: Option<&Path>) -> Result<RendererConfig> {
    match config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            let config = RendererConfig::from_json(&json)
                .wrap_err_with(|| format!("invalid configuration in {}", path.display()))?;
            tracing::info!(?config, "using renderer configuration");
            Ok(config)
        }
        None => Ok(RendererConfig::default()),
    }
}

fn render(input: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let objects = load_input(input)?;
    let config = load_config(config)?;

    let stdout = io::stdout();
    drop(render_all(&objects, stdout.lock(), config)?);
    Ok(())
}

fn count(input: Option<&Path>) -> Result<()> {
    let objects = load_input(input)?;

    let mut counter = Exhaustive(TypeCounter::new());
    objects.accept_all(&mut counter);
    println!("{}", counter.into_inner());
    Ok(())
}

fn export(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let objects = load_input(input)?;

    let mut collector = RecordCollector::new();
    objects.accept_all(&mut collector);
    if collector.skipped() > 0 {
        tracing::warn!(
            skipped = collector.skipped(),
            "objects without a record form were skipped"
        );
    }
    let json = collector.to_json()?;

    match output {
        Some(path) => {
            fs::write(path, json)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "exported collection");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}

fn create_example(output_dir: &Path) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    let mut collector = RecordCollector::new();
    sample_objects().accept_all(&mut collector);

    let example_file = output_dir.join("objects.json");
    fs::write(&example_file, collector.to_json()?)?;
    println!("Created: {}", example_file.display());

    println!("\nExample usage:");
    println!("  dobj render --input {}", example_file.display());
    println!("  dobj count --input {}", example_file.display());

    Ok(())
}
