use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jexpr_types::{ExecuteOptions, TemplateOptions};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "jexpr", about = "Evaluate jexpr scripts against JSON inputs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a script and zero or more inputs, evaluate, and print the result.
    Run {
        script: PathBuf,

        #[arg(long = "input")]
        inputs: Vec<PathBuf>,

        #[arg(long = "array-key", default_value = "array")]
        array_key: String,

        #[arg(long = "enable-interpolation")]
        enable_interpolation: bool,
    },
    /// Print the available operator names, one per line, sorted.
    Operators,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Run { script, inputs, array_key, enable_interpolation } => run(&script, &inputs, array_key, enable_interpolation),
        Command::Operators => {
            for name in jexpr_engine::available_operators() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_max_level(Level::TRACE).try_init();
}

fn run(script_path: &PathBuf, input_paths: &[PathBuf], array_key: String, enable_interpolation: bool) -> Result<()> {
    let script = load_json(script_path)?;
    let inputs = input_paths.iter().map(load_json).collect::<Result<Vec<_>>>()?;

    let options = ExecuteOptions { array_key, template_options: TemplateOptions { enable_interpolation } };

    let result = jexpr_engine::execute(script, inputs, options).map_err(|err| anyhow::anyhow!("{err}"))?;

    println!("{}", serde_json::to_string_pretty(&result).context("failed to serialize evaluation result")?);
    Ok(())
}

fn load_json(path: &PathBuf) -> Result<serde_json::Value> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {} as JSON", path.display()))
}
