//! # fts-bench
//!
//! Command-line interface for sliding-window benchmarks of fuzzy time series
//! models.

use benchmark_facade::prelude::*;
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "fts-bench")]
#[command(about = "Sliding-window benchmarks for fuzzy time series models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One-step point accuracy (RMSE, SMAPE, Theil's U)
    Point {
        #[command(flatten)]
        run: RunArgs,
    },

    /// One-step interval quality (sharpness, resolution, coverage)
    Interval {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Multi-step distribution quality (CRPS)
    Ahead {
        #[command(flatten)]
        run: RunArgs,

        /// Steps forecast ahead in each window
        #[arg(long, default_value = "10")]
        steps: usize,

        /// Spacing of the probability grid (default: universe width / 100)
        #[arg(long)]
        resolution: Option<f64>,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct RunArgs {
    /// Input file (CSV or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Column name or index for time series values (default: first column)
    #[arg(short, long)]
    column: Option<String>,

    /// Benchmark configuration file (JSON); flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Observations per window
    #[arg(short, long)]
    window_size: Option<usize>,

    /// Share of each window used for training
    #[arg(long)]
    train_ratio: Option<f64>,

    /// Trailing partial window handling (shorten, drop)
    #[arg(long)]
    edge_policy: Option<String>,

    /// Comma-separated models (chen, yu, ismail_efendi, hofts, ifts, pwfts)
    #[arg(short, long, value_delimiter = ',')]
    models: Vec<String>,

    /// Comma-separated partitioners (grid, huarng)
    #[arg(long, value_delimiter = ',')]
    partitioners: Vec<String>,

    /// Comma-separated partition counts
    #[arg(short, long, value_delimiter = ',')]
    partitions: Vec<usize>,

    /// Highest order tried for high order models
    #[arg(long)]
    max_order: Option<usize>,

    /// Apply a differential transformation with this lag
    #[arg(long)]
    differential: Option<usize>,

    /// Worker threads (default: available parallelism)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Record tasks slower than this as timed out
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log every window at info level
    #[arg(long)]
    dump: bool,

    /// Write mean/std summaries instead of per-window histories
    #[arg(long)]
    synthetic: bool,

    /// Output file, format from its extension (.json or .csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Load time series data from a CSV file
fn load_csv_data(path: &PathBuf, column: Option<&str>) -> CliResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    let col_idx = match column {
        Some(col) => match col.parse::<usize>() {
            Ok(idx) => idx,
            Err(_) => headers
                .iter()
                .position(|h| h == col)
                .ok_or_else(|| format!("Column '{}' not found", col))?,
        },
        None => 0,
    };

    let mut data = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        if let Some(num) = record.get(col_idx).and_then(|v| v.trim().parse::<f64>().ok()) {
            data.push(num);
        }
    }

    if data.is_empty() {
        return Err("No numeric data found in the specified column".to_string());
    }

    Ok(data)
}

/// Load time series data from a JSON file
fn load_json_data(path: &PathBuf, column: Option<&str>) -> CliResult<Vec<f64>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse JSON: {}", e))?;

    // Array of numbers, or of objects holding the value under `column`
    if let Some(arr) = json.as_array() {
        if arr.iter().all(|v| v.is_number()) {
            return Ok(arr.iter().filter_map(|v| v.as_f64()).collect());
        }

        let keys: Vec<&str> = match column {
            Some(col) => vec![col],
            None => vec!["value", "values", "data", "y"],
        };
        for key in keys {
            let data: Vec<f64> = arr
                .iter()
                .filter_map(|obj| obj.get(key).and_then(|v| v.as_f64()))
                .collect();
            if !data.is_empty() {
                return Ok(data);
            }
        }
    }

    // Object with a data array
    if let Some(obj) = json.as_object() {
        for key in &["data", "values", "series", "y"] {
            if let Some(arr) = obj.get(*key).and_then(|v| v.as_array()) {
                let data: Vec<f64> = arr.iter().filter_map(|v| v.as_f64()).collect();
                if !data.is_empty() {
                    return Ok(data);
                }
            }
        }
    }

    Err("Could not extract numeric data from JSON".to_string())
}

/// Load data from file (auto-detect format)
fn load_data(path: &PathBuf, column: Option<&str>) -> CliResult<Vec<f64>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => load_csv_data(path, column),
        "json" => load_json_data(path, column),
        _ => load_csv_data(path, column).or_else(|_| load_json_data(path, column)),
    }
}

/// Configuration file, if any, with command-line overrides applied
fn build_config(args: &RunArgs) -> CliResult<BenchmarkConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path).map_err(|e| format!("Failed to open config: {}", e))?;
            serde_json::from_reader(BufReader::new(file))
                .map_err(|e| format!("Failed to parse config: {}", e))?
        }
        None => BenchmarkConfig::default(),
    };

    if let Some(window_size) = args.window_size {
        config.window.window_size = window_size;
    }
    if let Some(train_ratio) = args.train_ratio {
        config.window.train_ratio = train_ratio;
    }
    if let Some(policy) = &args.edge_policy {
        config.window.edge_policy = policy.parse().map_err(|e: BenchmarkError| e.to_string())?;
    }
    if !args.models.is_empty() {
        config.models = args
            .models
            .iter()
            .map(|m| m.parse::<ModelKind>().map_err(|e| e.to_string()))
            .collect::<CliResult<_>>()?;
    }
    if !args.partitioners.is_empty() {
        config.partitioners = args
            .partitioners
            .iter()
            .map(|p| p.parse::<PartitionerKind>().map_err(|e| e.to_string()))
            .collect::<CliResult<_>>()?;
    }
    if !args.partitions.is_empty() {
        config.partitions = args.partitions.clone();
    }
    if let Some(max_order) = args.max_order {
        config.max_order = max_order;
    }
    if let Some(lag) = args.differential {
        config.transformation = Some(TransformationKind::Differential { lag });
    }
    if let Some(jobs) = args.jobs {
        config.dispatch.parallelism = Some(jobs);
    }
    if let Some(timeout_ms) = args.timeout_ms {
        config.dispatch.task_timeout_ms = Some(timeout_ms);
    }
    config.dump |= args.dump;
    config.synthetic |= args.synthetic;

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Mean and standard deviation of every measure, one line per key
fn print_summary(table: &ReportTable) {
    println!(
        "{} benchmark: {} windows, {} keys, {:.2}s",
        table.family,
        table.experiments,
        table.rows.len(),
        table.elapsed_secs
    );

    let header: Vec<String> = table.fields.iter().map(|f| format!("{:>20}", f)).collect();
    println!("{:<32}{}", "Key", header.join(""));
    for row in &table.rows {
        let cells: Vec<String> = row
            .summary()
            .iter()
            .map(|s| format!("{:>20}", format!("{:.4} ± {:.4}", s.mean, s.std)))
            .collect();
        println!("{:<32}{}", row.key, cells.join(""));
        if !row.failures.is_empty() {
            println!("  {} failed window(s), first: {}", row.failures.len(), row.failures[0]);
        }
    }
}

/// Run one benchmark family, print its summary and save it when asked
fn run_family<F: MetricFamily>(args: &RunArgs, family: &F) -> CliResult<()> {
    let config = build_config(args)?;
    let data = load_data(&args.input, args.column.as_deref())?;
    info!(
        "Loaded {} data points from {:?}",
        data.len(),
        args.input.file_name().unwrap_or_default()
    );

    let bench = SlidingWindowBenchmark::new(config).map_err(|e| e.to_string())?;
    let report = bench.run(&data, family).map_err(|e| e.to_string())?;
    let table = report.to_table();
    print_summary(&table);

    if let Some(path) = &args.output {
        let mut sink = create_sink(OutputFormat::from_path(path), path);
        sink.save(&table).map_err(|e| e.to_string())?;
        println!("Results written to {:?}", path);
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Point { run } => run_family(&run, &PointFamily),
        Commands::Interval { run } => run_family(&run, &IntervalFamily),
        Commands::Ahead {
            run,
            steps,
            resolution,
        } => {
            let mut ahead = AheadConfig::new(steps);
            if let Some(resolution) = resolution {
                ahead = ahead.with_resolution(resolution);
            }
            ahead
                .validate()
                .map_err(|e| e.to_string())
                .and_then(|_| run_family(&run, &AheadFamily::new(ahead)))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
