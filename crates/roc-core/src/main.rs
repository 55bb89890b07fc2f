//! roclab - binary classifier evaluation from the command line.
//!
//! The main entry point, handling:
//! - Synthetic sample generation from presets or explicit counts
//! - Confusion matrix, rates and AUC at one threshold
//! - Full ROC sweeps
//! - Configuration inspection and validation

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roc_common::{
    EvaluationConfig, GenerationSpec, OutputFormat, SweepStrategy, ThresholdRule,
    DEFAULT_GRID_STEPS, SCHEMA_VERSION,
};
use roc_config::{get_preset, load_config, validate_config, LabConfig, LoadedConfig, PresetName};
use roc_core::eval::{self, evaluate, SampleSet};
use roc_core::exit_codes::ExitCode;
use roc_core::logging::{generate_run_id, init_logging, LogConfig, LogFormat, LogLevel};
use roc_core::output::{self, RocReport, SampleReport};
use std::path::{Path, PathBuf};

/// ROC Lab - confusion matrices, ROC curves and AUC for scored samples
#[derive(Parser)]
#[command(name = "roclab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Path to roclab.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log level (overrides -v/-q, ROCLAB_LOG and RUST_LOG)
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    /// Log format (overrides ROCLAB_LOG_FORMAT)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a synthetic sample set
    Generate(GenerateArgs),

    /// Confusion matrix, rates and AUC at one threshold
    Evaluate(EvaluateArgs),

    /// ROC curve and AUC
    Roc(RocArgs),

    /// Show or validate configuration
    Config(ConfigArgs),
}

/// Where samples come from: a file, or a generator.
#[derive(Args, Debug, Default)]
struct SampleSourceArgs {
    /// Read samples from a JSON file instead of generating them
    #[arg(long, conflicts_with_all = ["preset", "positives", "negatives", "seed"])]
    samples: Option<PathBuf>,

    #[command(flatten)]
    generation: GenerationArgs,
}

#[derive(Args, Debug, Default)]
struct GenerationArgs {
    /// Named generation preset
    #[arg(long, value_parser = parse_preset)]
    preset: Option<PresetName>,

    /// RNG seed (default: config, else fresh entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of positive samples
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    positives: Option<u64>,

    /// Override the number of negative samples
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    negatives: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SweepKind {
    /// Evenly spaced thresholds in [0, 1]
    Grid,
    /// Every distinct score plus a sentinel
    Exact,
}

#[derive(Args, Debug, Default)]
struct SweepArgs {
    /// Threshold sweep (default: config)
    #[arg(long, value_enum)]
    sweep: Option<SweepKind>,

    /// Grid steps; implies --sweep grid when --sweep is absent
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    steps: Option<u64>,

    /// Classify positive only when score > threshold
    #[arg(long)]
    exclusive: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    generation: GenerationArgs,

    /// Write the samples to FILE instead of stdout
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    #[command(flatten)]
    source: SampleSourceArgs,

    #[command(flatten)]
    sweep: SweepArgs,

    /// Decision threshold (default: config default_threshold)
    #[arg(long, short = 't', allow_negative_numbers = true, value_parser = parse_threshold)]
    threshold: Option<f64>,
}

#[derive(Args, Debug)]
struct RocArgs {
    #[command(flatten)]
    source: SampleSourceArgs,

    #[command(flatten)]
    sweep: SweepArgs,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Validate a configuration file (default: the resolved one)
    Validate {
        /// File to validate
        path: Option<PathBuf>,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Clean
            };
            let _ = err.print();
            std::process::exit(code.as_i32());
        }
    };

    let log_level = cli.global.log_level.or_else(|| {
        if cli.global.quiet {
            Some(LogLevel::Error)
        } else if cli.global.verbose > 0 {
            Some(LogLevel::Warn.more_verbose(cli.global.verbose))
        } else {
            None
        }
    });
    init_logging(&LogConfig::from_env(log_level, cli.global.log_format));

    let run_id = generate_run_id();
    tracing::debug!(run_id = %run_id, version = env!("CARGO_PKG_VERSION"), "roclab started");

    let result = match &cli.command {
        Commands::Generate(args) => run_generate(&cli.global, &run_id, args),
        Commands::Evaluate(args) => run_evaluate(&cli.global, &run_id, args),
        Commands::Roc(args) => run_roc(&cli.global, &run_id, args),
        Commands::Config(args) => run_config(&cli.global, &run_id, args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(code = err.code(), category = %err.category(), "command failed");
            eprintln!("{}", output::render_error(&err, cli.global.format, &run_id));
            ExitCode::from_error(&err)
        }
    };

    std::process::exit(exit_code.as_i32());
}

type CmdResult = roc_common::Result<ExitCode>;

fn load(global: &GlobalOpts) -> roc_common::Result<LoadedConfig> {
    let loaded = load_config(global.config.as_deref())?;
    tracing::debug!(
        source = %loaded.source,
        path = ?loaded.path,
        "configuration loaded"
    );
    Ok(loaded)
}

fn parse_preset(name: &str) -> Result<PresetName, String> {
    PresetName::parse(name).ok_or_else(|| {
        format!(
            "unknown preset '{}' (expected one of: {})",
            name,
            PresetName::ALL
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err("must be a finite number".to_string())
    }
}

/// The generation spec after applying CLI overrides to the configured one.
fn generation_spec(config: &LabConfig, args: &GenerationArgs) -> (GenerationSpec, Option<PresetName>) {
    let (mut spec, preset) = match args.preset {
        Some(preset) => (get_preset(preset), Some(preset)),
        None => {
            let preset = match config.samples.spec {
                Some(_) => None,
                None => Some(config.samples.preset.unwrap_or_default()),
            };
            (config.samples.generation_spec(), preset)
        }
    };
    if let Some(n) = args.positives {
        spec.positive_count = n as usize;
    }
    if let Some(n) = args.negatives {
        spec.negative_count = n as usize;
    }
    (spec, preset)
}

/// Seed to use: CLI, then config, then fresh entropy (reported back).
fn resolve_seed(config: &LabConfig, args: &GenerationArgs) -> u64 {
    args.seed
        .or(config.samples.seed)
        .unwrap_or_else(rand::random::<u64>)
}

fn generate(
    config: &LabConfig,
    args: &GenerationArgs,
) -> roc_common::Result<(SampleSet, Option<PresetName>, u64)> {
    let (spec, preset) = generation_spec(config, args);
    roc_config::validate::validate_generation_spec("samples", &spec)?;
    let seed = resolve_seed(config, args);
    let mut rng = StdRng::seed_from_u64(seed);
    let samples = eval::generate_samples(&spec, &mut rng);
    tracing::info!(
        seed,
        preset = preset.map(|p| p.as_str()),
        samples = samples.len(),
        "generated samples"
    );
    Ok((samples, preset, seed))
}

fn obtain_samples(config: &LabConfig, args: &SampleSourceArgs) -> roc_common::Result<SampleSet> {
    let samples = match &args.samples {
        Some(path) => read_samples(path)?,
        None => generate(config, &args.generation)?.0,
    };
    samples.check_evaluable()?;
    Ok(samples)
}

fn read_samples(path: &Path) -> roc_common::Result<SampleSet> {
    let samples = eval::load_samples(path)?;
    tracing::info!(path = %path.display(), samples = samples.len(), "loaded samples");
    Ok(samples)
}

fn evaluation_config(config: &LabConfig, args: &SweepArgs) -> EvaluationConfig {
    let mut eval_config = config.evaluation;
    if args.exclusive {
        eval_config.rule = ThresholdRule::Exclusive;
    }
    let grid_steps = |current: SweepStrategy| match (args.steps, current) {
        (Some(steps), _) => steps as usize,
        (None, SweepStrategy::CoarseGrid { steps }) => steps,
        (None, SweepStrategy::ExactScores) => DEFAULT_GRID_STEPS,
    };
    eval_config.sweep = match (args.sweep, args.steps) {
        (Some(SweepKind::Exact), _) => SweepStrategy::ExactScores,
        (Some(SweepKind::Grid), _) | (None, Some(_)) => SweepStrategy::CoarseGrid {
            steps: grid_steps(eval_config.sweep),
        },
        (None, None) => eval_config.sweep,
    };
    eval_config
}

fn emit(text: serde_json::Result<String>) -> CmdResult {
    println!("{}", text?);
    Ok(ExitCode::Clean)
}

fn run_generate(global: &GlobalOpts, run_id: &str, args: &GenerateArgs) -> CmdResult {
    let loaded = load(global)?;
    let (samples, preset, seed) = generate(&loaded.config, &args.generation)?;

    if let Some(path) = &args.out {
        eval::save_samples(path, &samples)?;
    }

    let report = SampleReport {
        preset: preset.map(|p| p.as_str()),
        seed,
        sample_count: samples.len(),
        positive_count: samples.positive_count(),
        negative_count: samples.negative_count(),
        path: args.out.as_ref().map(|p| p.display().to_string()),
        samples: args.out.is_none().then_some(&samples),
    };
    emit(output::render_samples(&report, global.format, run_id))
}

fn run_evaluate(global: &GlobalOpts, run_id: &str, args: &EvaluateArgs) -> CmdResult {
    let loaded = load(global)?;
    let samples = obtain_samples(&loaded.config, &args.source)?;
    let eval_config = evaluation_config(&loaded.config, &args.sweep);
    let threshold = args.threshold.unwrap_or(loaded.config.default_threshold);

    let evaluation = evaluate(&samples, threshold, &eval_config);
    emit(output::render_evaluation(&evaluation, global.format, run_id))
}

fn run_roc(global: &GlobalOpts, run_id: &str, args: &RocArgs) -> CmdResult {
    let loaded = load(global)?;
    let samples = obtain_samples(&loaded.config, &args.source)?;
    let eval_config = evaluation_config(&loaded.config, &args.sweep);

    let curve = eval::roc_sweep(&samples, &eval_config);
    let report = RocReport {
        config: eval_config,
        sample_count: samples.len(),
        positive_count: samples.positive_count(),
        negative_count: samples.negative_count(),
        auc: eval::auc(&curve),
        points: curve,
    };
    emit(output::render_roc(&report, global.format, run_id))
}

fn run_config(global: &GlobalOpts, run_id: &str, args: &ConfigArgs) -> CmdResult {
    match &args.command {
        ConfigCommands::Show => run_config_show(global, run_id),
        ConfigCommands::Validate { path } => run_config_validate(global, run_id, path.as_deref()),
    }
}

fn run_config_show(global: &GlobalOpts, run_id: &str) -> CmdResult {
    let loaded = load(global)?;
    match global.format {
        OutputFormat::Json => {
            println!("{}", loaded.config.to_json_pretty()?);
        }
        OutputFormat::Summary => {
            println!(
                "[{}] config: source={} threshold={} sweep={}",
                run_id, loaded.source, loaded.config.default_threshold, loaded.config.evaluation.sweep
            );
        }
        OutputFormat::Md => {
            println!("# Current Configuration");
            println!();
            match &loaded.path {
                Some(path) => println!("Source: {} ({})", path.display(), loaded.source),
                None => println!("Source: **built-in defaults** (no roclab.json found)"),
            }
            println!("Schema version: {}", loaded.config.schema_version);
            println!("Default threshold: {}", loaded.config.default_threshold);
            println!("Rule: {}", loaded.config.evaluation.rule);
            println!("Sweep: {}", loaded.config.evaluation.sweep);
        }
    }
    Ok(ExitCode::Clean)
}

fn run_config_validate(global: &GlobalOpts, run_id: &str, path: Option<&Path>) -> CmdResult {
    let (config, shown_path) = match path {
        Some(p) => {
            let config = LabConfig::from_file(p)?;
            validate_config(&config)?;
            (config, Some(p.to_path_buf()))
        }
        None => {
            let config_path = global.config.as_deref();
            let loaded = load_config(config_path)?;
            (loaded.config, loaded.path)
        }
    };

    match global.format {
        OutputFormat::Json => {
            let response = serde_json::json!({
                "schema_version": SCHEMA_VERSION,
                "run_id": run_id,
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "status": "valid",
                "path": shown_path.as_ref().map(|p| p.display().to_string()),
                "using_defaults": shown_path.is_none(),
                "config_schema_version": config.schema_version,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Summary => {
            println!("[{}] config validate: OK", run_id);
        }
        OutputFormat::Md => {
            println!("# Configuration Validation");
            println!();
            println!("Status: ✓ Valid");
            match shown_path {
                Some(p) => println!("File: {}", p.display()),
                None => println!("File: using built-in defaults"),
            }
        }
    }
    Ok(ExitCode::Clean)
}
