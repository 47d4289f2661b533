//! Implementation of the `confgen` command.

use crate::cmd::completions::ShellType;
use anyhow::{Context, Result};
use clap::Parser;
use confgen_core::{
    generate, write_fixture, AllocationMode, GenerateError, GeneratorConfig, TreeLimits,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Generate a random bracket-notation fixture file.
#[derive(Parser, Debug)]
#[command(name = "confgen")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Total number of nodes
    #[arg(
        value_name = "NUM_NODES",
        allow_negative_numbers = true,
        required_unless_present = "generate_completions"
    )]
    pub num_nodes: Option<i64>,

    /// Maximum depth of the tree
    #[arg(
        value_name = "MAX_DEPTH",
        allow_negative_numbers = true,
        required_unless_present = "generate_completions"
    )]
    pub max_depth: Option<i64>,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub generate_completions: Option<ShellType>,

    /// Directory to number and write fixtures in
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Seed for reproducible output (default: random)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON file overriding generator limits and charsets
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Claim the file name atomically instead of scanning then writing
    #[arg(long)]
    pub exclusive: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

fn run(args: &Args, limits: TreeLimits) -> Result<()> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mode = if args.exclusive {
        AllocationMode::Exclusive
    } else {
        AllocationMode::Scan
    };

    let doc = generate(&mut rng, &config, limits);
    debug!(
        nodes = doc.nodes,
        attributes = doc.attributes,
        deepest = doc.deepest,
        "document ready"
    );

    let path = write_fixture(&args.output_dir, &doc.text, mode)
        .with_context(|| format!("failed to write fixture in {}", args.output_dir.display()))?;

    let shown = if args.output_dir == Path::new(".") {
        path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    } else {
        path.display().to_string()
    };
    println!("File generated as {shown}");
    Ok(())
}

fn init_logging(verbose: bool) {
    let builder = tracing_subscriber::fmt().with_writer(std::io::stderr);
    if verbose {
        builder.with_max_level(Level::DEBUG).init();
    } else {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        builder.with_env_filter(filter).init();
    }
}

/// Main entry point for the generate command.
pub fn main() -> ExitCode {
    main_with_name("confgen")
}

/// Main entry point with custom binary name.
pub fn main_with_name(bin_name: &str) -> ExitCode {
    let args = Args::parse();

    // Handle shell completion generation
    if let Some(shell) = args.generate_completions {
        crate::cmd::completions::generate_completions::<Args>(shell, bin_name);
        return ExitCode::SUCCESS;
    }

    init_logging(args.verbose);

    // Both are required by clap unless completions were requested.
    let num_nodes = args.num_nodes.unwrap_or_default();
    let max_depth = args.max_depth.unwrap_or_default();

    let limits = match TreeLimits::new(num_nodes, max_depth) {
        Ok(limits) => limits,
        Err(e @ GenerateError::InvalidArguments) => {
            println!("{e}");
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match run(&args, limits) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_negative_numbers_parse() {
        let args = Args::try_parse_from(["confgen", "-3", "2"]).unwrap();
        assert_eq!(args.num_nodes, Some(-3));
        assert_eq!(args.max_depth, Some(2));
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["confgen", "10", "3"]).unwrap();
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.seed, None);
        assert!(!args.exclusive);
    }

    #[test]
    fn test_non_integer_rejected() {
        assert!(Args::try_parse_from(["confgen", "ten", "3"]).is_err());
    }

    #[test]
    fn test_missing_depth_rejected() {
        assert!(Args::try_parse_from(["confgen", "10"]).is_err());
    }

    #[test]
    fn test_limits_required_unless_completions() {
        assert!(Args::try_parse_from(["confgen"]).is_err());
        let args = Args::try_parse_from(["confgen", "--generate-completions", "bash"]).unwrap();
        assert!(args.generate_completions.is_some());
        assert_eq!(args.num_nodes, None);
        assert_eq!(args.max_depth, None);
    }
}
