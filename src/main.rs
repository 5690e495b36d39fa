/// Square-sum tuple search — CLI
///
/// Usage:
///   square-sum-search [--max=N] [--len=N] [--json=PATH] [--quiet]
///
/// Options:
///   --max=N      inclusive per-entry bound (default 100)
///   --len=N      tuple length (default 4)
///   --json=PATH  also write the run report as pretty JSON
///   --quiet      suppress per-match lines, print the summary only

use square_sum_search::{search, Match, SearchConfig, SearchStats};
use std::collections::HashMap;
use std::time::Instant;

#[derive(serde::Serialize)]
struct RunReport {
    config: SearchConfig,
    stats: SearchStats,
    wall_seconds: f64,
    tuples_per_second: f64,
    matches: Vec<Match>,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args);

    let config = SearchConfig {
        max_entry: parse_or_exit(&opts, "max", 100),
        tuple_len: parse_or_exit(&opts, "len", 4),
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }
    let quiet = opts.contains_key("quiet");

    println!(
        "Square-sum search: tuples of length {} over [0, {}]",
        config.tuple_len, config.max_entry
    );

    let start = Instant::now();
    let mut matches = Vec::new();
    let stats = search(&config, |m| {
        if !quiet {
            println!("{m}");
        }
        matches.push(m.clone());
    });
    let elapsed = start.elapsed().as_secs_f64();

    println!("\n{}", "-".repeat(48));
    println!("Tuples visited: {}", stats.tuples_visited);
    println!("Matches:        {}", stats.matches);
    println!("Wall time:      {:.3}s", elapsed);
    println!(
        "Throughput:     {:.0} tuples/s",
        stats.tuples_visited as f64 / elapsed.max(1e-9)
    );

    if let Some(path) = opts.get("json") {
        let report = RunReport {
            config,
            stats,
            wall_seconds: elapsed,
            tuples_per_second: stats.tuples_visited as f64 / elapsed.max(1e-9),
            matches,
        };
        write_json(&report, path);
    }
}

// ---------------------------------------------------------------------------
// Argument parsing helpers
// ---------------------------------------------------------------------------

fn parse_args(args: &[String]) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for arg in args {
        if let Some(kv) = arg.strip_prefix("--") {
            if let Some((k, v)) = kv.split_once('=') {
                map.insert(k.to_string(), v.to_string());
            } else {
                map.insert(kv.to_string(), "true".to_string());
            }
        } else {
            eprintln!("Unexpected argument: {arg}. Use --max=N --len=N [--json=PATH] [--quiet]");
            std::process::exit(1);
        }
    }
    map
}

/// Parse `--key=value` as T; absent keys take the default, a present but
/// unparsable value is an error rather than a silent fallback.
fn parse_value<T: std::str::FromStr>(
    opts: &HashMap<String, String>,
    key: &str,
    default: T,
) -> Result<T, String> {
    match opts.get(key) {
        None => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|_| format!("Invalid value for --{key}: {v}")),
    }
}

fn parse_or_exit<T: std::str::FromStr>(
    opts: &HashMap<String, String>,
    key: &str,
    default: T,
) -> T {
    parse_value(opts, key, default).unwrap_or_else(|msg| {
        eprintln!("{msg}");
        std::process::exit(1);
    })
}

fn write_json<T: serde::Serialize>(value: &T, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Warning: could not create directory {parent:?}: {e}");
                return;
            }
        }
    }
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                eprintln!("Warning: could not write {path}: {e}");
            } else {
                println!("\nReport written to {path}");
            }
        }
        Err(e) => eprintln!("Warning: could not serialize report: {e}"),
    }
}
