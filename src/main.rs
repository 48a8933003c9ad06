use std::path::PathBuf;

use clap::Parser;
use steamspark::config::DEFAULT_CONFIG_PATH;
use steamspark::{Config, Language, Spark, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON settings file; defaults are used when it does not exist
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory holding the module CSV files
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Display name for this session
    #[arg(short, long)]
    name: Option<String>,

    /// English, Yoruba, Hausa or Igbo
    #[arg(short, long)]
    language: Option<String>,

    /// Subject of interest, e.g. Science or Tech
    #[arg(short, long)]
    interest: Option<String>,

    /// Reject datasets whose columns need a fallback
    #[arg(long)]
    strict_schema: bool,

    /// File the log is appended to
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Load every dataset, print row counts and exit
    #[arg(long)]
    check: bool,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if let Some(name) = self.name {
            config.profile.name = name;
        }
        if let Some(language) = self.language {
            config.profile.language = Language::from_name(&language);
        }
        if let Some(interest) = self.interest {
            config.profile.interest = interest;
        }
        if let Some(log_file) = self.log_file {
            config.log_file = log_file;
        }
        config.strict_schema |= self.strict_schema;
    }
}

fn main() {
    let args = Args::parse();
    let verbose = args.verbose;
    let check = args.check;

    let mut config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            std::process::exit(1);
        }
    };
    args.apply(&mut config);

    if let Err(e) = logging::init(&config.log_file, verbose) {
        eprintln!(
            "Error opening log file {}: {}",
            config.log_file.display(),
            e
        );
        std::process::exit(1);
    }
    log::info!(
        "starting session for {} ({}, {})",
        config.profile.name,
        config.profile.language,
        config.profile.interest
    );

    let mut spark = Spark::new(&config);

    if check {
        match spark.check() {
            Ok(counts) => {
                for (module, rows) in counts {
                    println!("{:<22}{} rows", module.title(), rows);
                }
            }
            Err(e) => {
                eprintln!("Error checking datasets: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = spark.run() {
        eprintln!("Error running session: {}", e);
        std::process::exit(1);
    }
}
