use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use package_version::PackageVersion;
use package_version::config::{Config, OutputFormat, config_path};
use package_version::logging::init_logging;
use package_version::report::{Classification, Comparison};
use package_version::version::compare::latest;

#[derive(Parser)]
#[command(name = "package-version")]
#[command(version, about = "Classify and compare package version strings")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/package-version/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the scheme and components of each version
    Classify {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Compare two versions
    Compare { left: String, right: String },
    /// Print the newest of the given versions
    Latest {
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_file = cli.config.unwrap_or_else(config_path);
    let config = Config::load(&config_file)?;
    let _guard = init_logging(&config.log)?;
    debug!("Loaded config from {:?}", config_file);

    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    match cli.command {
        Command::Classify { versions } => {
            let parsed = versions
                .iter()
                .map(|v| PackageVersion::new(v))
                .collect::<Result<Vec<_>, _>>()?;
            let classifications: Vec<Classification> =
                parsed.iter().map(Classification::from).collect();

            match output {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&classifications)?)
                }
                OutputFormat::Text => {
                    for classification in &classifications {
                        println!("{}", classification.to_text());
                    }
                }
            }
        }
        Command::Compare { left, right } => {
            let left = PackageVersion::new(&left)?;
            let right = PackageVersion::new(&right)?;
            let comparison = Comparison::new(&left, &right);

            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
                OutputFormat::Text => println!("{}", comparison.to_text()),
            }
        }
        Command::Latest { versions } => {
            let newest = latest(versions.iter().map(String::as_str))
                .ok_or_else(|| anyhow::anyhow!("No non-blank versions given"))?;

            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string(&newest)?),
                OutputFormat::Text => println!("{}", newest),
            }
        }
    }

    Ok(())
}
