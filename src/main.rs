//! iconfont-codegen CLI
//!
//! Usage:
//!   iconfont-codegen [OPTIONS] <SPRITE>
//!
//! Options:
//!   -c, --config <FILE>      Configuration file (TOML, default: iconfont.toml if present)
//!   -o, --out-dir <DIR>      Output directory
//!       --trim-prefix <P>    Prefix removed from icon ids
//!       --size <SIZE>        Default icon size
//!       --unit <UNIT>        CSS unit for numeric sizes
//!       --aggregate <MODE>   barrel | single-component
//!       --no-collapse        Keep the literal color of single-color icons
//!       --no-types           Do not write index.d.ts
//!   -t, --templates <DIR>    Template override directory
//!       --log-level <LEVEL>  off, error, warn, info, debug, trace
//!   -h, --help               Print help

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, LevelFilter};

use iconfont_codegen::{generate, AggregateMode, Config, FsSink, IconSize, RunError};

const DEFAULT_CONFIG: &str = "iconfont.toml";

#[derive(Parser, Debug)]
#[command(name = "iconfont-codegen", version)]
#[command(about = "Generate Vue icon components from an iconfont sprite sheet")]
struct Cli {
    /// Sprite sheet: an SVG file or the iconfont.js loader script
    sprite: PathBuf,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory; its files are replaced
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Prefix removed from icon ids before naming components
    #[arg(long)]
    trim_prefix: Option<String>,

    /// Default icon size
    #[arg(long)]
    size: Option<String>,

    /// CSS unit appended to numeric sizes
    #[arg(long)]
    unit: Option<String>,

    /// Shape of the aggregate file
    #[arg(long, value_enum)]
    aggregate: Option<AggregateMode>,

    /// Keep the literal color of single-color icons instead of currentColor
    #[arg(long)]
    no_collapse: bool,

    /// Do not write the index.d.ts type declaration
    #[arg(long)]
    no_types: bool,

    /// Directory with template overrides
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Layer command-line flags over the file configuration
    fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.out_dir {
            config = config.with_save_dir(dir);
        }
        if let Some(prefix) = &self.trim_prefix {
            config = config.with_trim_icon_prefix(prefix);
        }
        if let Some(size) = &self.size {
            config = config.with_default_icon_size(IconSize::from(size.as_str()));
        }
        if let Some(unit) = &self.unit {
            config = config.with_unit(unit);
        }
        if let Some(mode) = self.aggregate {
            config = config.with_aggregate(mode);
        }
        if self.no_collapse {
            config = config.with_collapse_single_color(false);
        }
        if self.no_types {
            config = config.with_emit_types(false);
        }
        if let Some(dir) = &self.templates {
            config = config.with_template_dir(dir);
        }
        config
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "Parsed arguments");

    // Load configuration, falling back to ./iconfont.toml when present
    let config_path = cli
        .config
        .clone()
        .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG)).filter(|p| p.is_file()));
    let config = match &config_path {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    let config = cli.apply(config);

    let source = match fs::read_to_string(&cli.sprite) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", cli.sprite.display(), e);
            process::exit(1);
        }
    };

    match generate(&source, &config, &mut FsSink) {
        Ok(summary) => {
            for icon in summary.written_icons() {
                println!("√ Generated icon \"{}\"", icon.id);
            }
            println!(
                "\n√ All icons have been written to dir: {}\n",
                summary.save_dir.display()
            );
        }
        Err(RunError::Sprite(e)) => {
            eprint!("{}", e.format(&source, &display_name(&cli.sprite)));
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}
