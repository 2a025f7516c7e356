use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use schemaforge::config::{CONFIG_FILE, Config};
use schemaforge::{ParseOutcome, Schema, generate_sql_with, parse_sql_with};

/// schemaforge - parse CREATE TABLE DDL and regenerate it for another dialect
#[derive(Parser)]
#[command(name = "schemaforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: schemaforge.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Fail on malformed statements and unmodeled constraints
    #[arg(long, global = true)]
    strict: bool,

    /// Do not link `<table>_id` columns to matching tables
    #[arg(long, global = true)]
    no_infer: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the parsed schema and diagnostics as JSON
    Parse {
        /// SQL file, or `-` for stdin
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Regenerate CREATE TABLE statements for a dialect
    Generate {
        /// SQL file (or schema JSON with --from-json), `-` for stdin
        input: PathBuf,

        /// postgres, mysql, sqlite (or a host alias), `auto` to detect
        #[arg(short, long)]
        dialect: Option<String>,

        /// Read a schema JSON document instead of SQL
        #[arg(long)]
        from_json: bool,

        /// Emit captured DEFAULT values
        #[arg(long)]
        with_defaults: bool,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report diagnostics; exits non-zero when errors are found
    Check {
        /// SQL file, or `-` for stdin
        input: PathBuf,
    },

    /// Write a default schemaforge.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if let Commands::Init { force } = &cli.command {
        return init_command(cli.config.as_deref(), *force);
    }

    let mut config = load_config(cli.config.as_deref())?;
    if cli.strict {
        config.strict = true;
    }
    if cli.no_infer {
        config.infer_relationships = false;
    }
    tracing::debug!(?config, "using config");

    match cli.command {
        Commands::Parse { input, output } => parse_command(&config, &input, output.as_deref()),
        Commands::Generate {
            input,
            dialect,
            from_json,
            with_defaults,
            output,
        } => {
            if let Some(dialect) = dialect {
                config.dialect = dialect;
            }
            if with_defaults {
                config.with_defaults = true;
            }
            generate_command(&config, &input, from_json, output.as_deref())
        }
        Commands::Check { input } => check_command(&config, &input),
        Commands::Init { .. } => Ok(()),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }
    let default_path = Path::new(CONFIG_FILE);
    if default_path.exists() {
        return Config::from_file(default_path)
            .with_context(|| format!("failed to load config {}", CONFIG_FILE));
    }
    tracing::debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

fn parse(config: &Config, sql: &str) -> Result<ParseOutcome> {
    parse_sql_with(sql, &config.parse_options()).context("strict parse failed")
}

fn parse_command(config: &Config, input: &Path, output: Option<&Path>) -> Result<()> {
    let sql = read_input(input)?;
    let outcome = parse(config, &sql)?;
    let json = serde_json::to_string_pretty(&outcome)?;
    write_output(output, &json)
}

fn generate_command(
    config: &Config,
    input: &Path,
    from_json: bool,
    output: Option<&Path>,
) -> Result<()> {
    let content = read_input(input)?;

    let schema = if from_json {
        let schema = Schema::from_json(&content).context("invalid schema JSON")?;
        for problem in schema.check_links() {
            tracing::warn!(%problem, "inconsistent schema");
        }
        schema
    } else {
        let outcome = parse(config, &content)?;
        for diagnostic in &outcome.diagnostics {
            eprintln!("{}", diagnostic);
        }
        outcome.schema
    };

    let dialect = config.dialect_for(&content);
    let sql = generate_sql_with(&schema, dialect, &config.generate_options());
    write_output(output, &sql)
}

fn check_command(config: &Config, input: &Path) -> Result<()> {
    let sql = read_input(input)?;
    let outcome = parse(config, &sql)?;

    for diagnostic in &outcome.diagnostics {
        eprintln!("{}\n", diagnostic.render(&sql));
    }

    let tables = outcome.schema.tables.len();
    let relationships = outcome.schema.relationships.len();
    eprintln!(
        "{} tables, {} relationships, {} diagnostics",
        tables,
        relationships,
        outcome.diagnostics.len()
    );

    if outcome.has_errors() {
        bail!("{} contains malformed statements", input.display());
    }
    if config.strict && !outcome.diagnostics.is_empty() {
        bail!("{} has diagnostics in strict mode", input.display());
    }
    Ok(())
}

fn init_command(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path.unwrap_or(Path::new(CONFIG_FILE));
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default()
        .save_to_file(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
