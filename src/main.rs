//! CLI binary for lumira.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use lumira::calculator::{clipboard_text, copy_to_clipboard, parse_keys};
use lumira::converter::Category;
use lumira::render::{RecordingSurface, TerminalSurface};
use lumira::{LumiraConfig, ToolId, ToolManager};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Lumira: keypad calculator and unit converter.
#[derive(Parser)]
#[command(name = "lumira", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a keypad script, e.g. `lumira calc "3 + 4 × ="`.
    Calc {
        /// Keys to press. Several arguments are joined with spaces.
        #[arg(required = true)]
        keys: Vec<String>,

        /// Print the display after every key instead of only the last one.
        #[arg(long)]
        steps: bool,

        /// Print the calculator state as JSON.
        #[arg(long, conflicts_with = "steps")]
        json: bool,

        /// Copy the result to the clipboard.
        #[arg(long)]
        copy: bool,
    },

    /// Interactive calculator, one keypad script per line.
    Repl,

    /// Convert a value between units, e.g. `lumira convert 5 km mi`.
    Convert {
        value: String,
        from: String,
        to: String,

        /// Unit category (length, weight, temperature). Inferred from the
        /// units when omitted.
        #[arg(long)]
        category: Option<Category>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lumira=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = LumiraConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Command::Calc {
            keys,
            steps,
            json,
            copy,
        } => run_calc(&config, &keys.join(" "), steps, json, copy),
        Command::Repl => run_repl(&config),
        Command::Convert {
            value,
            from,
            to,
            category,
        } => run_convert(&config, &value, &from, &to, category),
    }
}

fn run_calc(
    config: &LumiraConfig,
    script: &str,
    steps: bool,
    json: bool,
    copy: bool,
) -> anyhow::Result<()> {
    let keys = parse_keys(script)?;

    let mut tools = ToolManager::new(config, RecordingSurface::new());
    tools.open_tool(ToolId::Calculator);
    tools.press_all(keys);

    let Some(calc) = tools.calculator() else {
        bail!("calculator tool is not registered");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(calc)?);
    } else if steps {
        for frame in tools.surface().frames() {
            println!("{}{}", config.calculator.display_prefix, frame);
        }
    } else {
        println!("{}{}", config.calculator.display_prefix, calc.display());
    }

    if copy {
        match clipboard_text(calc.display()) {
            Some(text) => {
                copy_to_clipboard(&text)?;
                info!("Copied {} to clipboard", text);
            }
            None => warn!("Nothing to copy, calculator shows an error"),
        }
    }

    Ok(())
}

fn run_repl(config: &LumiraConfig) -> anyhow::Result<()> {
    let surface = TerminalSurface::new(std::io::stdout())
        .with_prefix(config.calculator.display_prefix.clone());
    let mut tools = ToolManager::new(config, surface);
    tools.open_tool(ToolId::Calculator);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("exit");
            break;
        };
        let line = line?;
        let line = line.trim();

        match line {
            "" => continue,
            "exit" | "quit" => break,
            _ => {}
        }

        match parse_keys(line) {
            Ok(keys) => {
                tools.press_all(keys);
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    tools.close();
    Ok(())
}

fn run_convert(
    config: &LumiraConfig,
    value: &str,
    from: &str,
    to: &str,
    category: Option<Category>,
) -> anyhow::Result<()> {
    let category = match category {
        Some(category) => category,
        None => Category::of_unit(from)
            .with_context(|| format!("Unknown unit {:?}", from))?,
    };

    let mut tools = ToolManager::new(config, RecordingSurface::new());
    tools.open_tool(ToolId::Converter);
    tools.convert(category, from, to, value)?;

    let result = tools.surface().last().unwrap_or("0");
    println!("{} {} = {} {}", value, from, result, to);
    Ok(())
}
