use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use m2m_names::{
    build_table, suggest, translate_document, AttributeCategory, AttributeTable, ResolverConfig,
};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "m2m-names")]
#[command(about = "Translate oneM2M attribute short names")]
struct Args {
    /// Overlay file with extra attributes (or set M2M_NAMES_OVERLAY)
    #[arg(long, global = true)]
    overlay: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the display name for each short code
    Translate {
        codes: Vec<String>,

        /// Keep short names regardless of M2M_NAMES_DISPLAY_LONG
        #[arg(long)]
        short: bool,
    },
    /// Print the category of each short code
    Classify { codes: Vec<String> },
    /// Find the short code for a long name
    Lookup { long_name: String },
    /// List table entries
    List {
        /// universal, common, custom or unspecified
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Translate the keys of a JSON resource representation ("-" for stdin)
    Document {
        path: PathBuf,

        /// Keep short names regardless of M2M_NAMES_DISPLAY_LONG
        #[arg(long)]
        short: bool,
    },
}

impl Commands {
    fn short(&self) -> bool {
        match self {
            Commands::Translate { short, .. } | Commands::Document { short, .. } => *short,
            _ => false,
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = ResolverConfig::from_env()?;

    let stdout = std::io::stdout();
    run(args, config, &mut stdout.lock())
}

fn run(args: Args, config: ResolverConfig, out: &mut dyn Write) -> Result<()> {
    let config = config.with_cli_overrides(args.overlay, args.command.short());

    let table = build_table(config.overlay_path.as_deref()).with_context(|| {
        format!(
            "Failed to build attribute table (overlay: {:?})",
            config.overlay_path
        )
    })?;
    info!("Attribute table ready with {} entries", table.len());

    match args.command {
        Commands::Translate { codes, .. } => {
            for code in &codes {
                writeln!(out, "{}", table.translate(code, config.display_long_names))?;
            }
        }
        Commands::Classify { codes } => {
            for code in &codes {
                writeln!(out, "{}\t{}", code, table.classify(code))?;
            }
        }
        Commands::Lookup { long_name } => {
            let short_code = lookup(&table, &long_name)?;
            writeln!(out, "{}", short_code)?;
        }
        Commands::List { category } => {
            let entries = match category {
                Some(tag) => {
                    let category: AttributeCategory = tag.parse()?;
                    table.entries_in(category)
                }
                None => table.entries(),
            };
            for entry in entries {
                writeln!(out, "{}\t{}\t{}", entry.short_code, entry.long_name, entry.category)?;
            }
        }
        Commands::Document { path, .. } => {
            let raw = read_input(&path)?;
            let document: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid JSON in {}", path.display()))?;
            let translated = translate_document(&table, &document, config.display_long_names);
            writeln!(out, "{}", serde_json::to_string_pretty(&translated)?)?;
        }
    }

    Ok(())
}

fn lookup<'a>(table: &'a AttributeTable, long_name: &str) -> Result<&'a str> {
    if let Some(short_code) = table.short_code_for(long_name) {
        return Ok(short_code);
    }

    let hits = suggest(table, long_name, 5);
    debug!("{} suggestions for '{}'", hits.len(), long_name);
    if hits.is_empty() {
        bail!("Unknown attribute '{}'", long_name);
    }
    let names: Vec<String> = hits
        .iter()
        .map(|entry| format!("{} ({})", entry.long_name, entry.short_code))
        .collect();
    bail!("Unknown attribute '{}'. Did you mean: {}", long_name, names.join(", "));
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        return Ok(raw);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
