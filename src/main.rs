use anyhow::Context as _;
use clap::{Parser, Subcommand};
use declarative_factory::{Context, DocumentLoader, Resolvable, Selector};
use dotenv::dotenv;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Environment variable naming a default context file for `eval`
const CONTEXT_ENV: &str = "DECLARATIVE_FACTORY_CONTEXT";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in example selection
    Demo,
    /// Evaluate a selection document
    Eval {
        /// Path to the document (JSON or YAML)
        #[arg(short, long)]
        file: String,

        /// Inline JSON object merged over the context file
        #[arg(short, long)]
        context: Option<String>,

        /// Path to a context file (JSON or YAML)
        #[arg(long)]
        context_file: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Demo => {
            let picked = Selector::<i32>::new()
                .when(false, Resolvable::lazy(|| 1))
                .when(Resolvable::lazy(|| true), 2)
                .otherwise(3)
                .select();

            println!();
            println!("{}", to_pretty_json(&[picked])?);
            println!();
        }
        Commands::Eval {
            file,
            context,
            context_file,
        } => {
            let loader = DocumentLoader::new();
            let document = loader
                .load(&file)
                .with_context(|| format!("Failed to load document {}", file))?;

            let context_file = context_file.or_else(|| std::env::var(CONTEXT_ENV).ok());
            let mut ctx = match &context_file {
                Some(path) => {
                    log::info!("Using context file: {}", path);
                    loader
                        .load_context(path)
                        .with_context(|| format!("Failed to load context {}", path))?
                }
                None => Context::empty(),
            };

            if let Some(inline) = context {
                let value: serde_json::Value =
                    serde_json::from_str(&inline).context("Inline context is not valid JSON")?;
                ctx.merge(Context::from_json(value)?);
            }

            let report = document
                .report(&ctx)
                .with_context(|| format!("Failed to evaluate {}", file))?;
            if !report.matched {
                log::warn!("No entry matched in {}", file);
            }
            println!("{}", to_pretty_json(&report)?);
        }
    }

    Ok(())
}

/// Pretty-print JSON with four-space indentation
fn to_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}
