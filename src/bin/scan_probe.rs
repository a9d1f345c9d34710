use std::env;
use std::time::Instant;

use scanfold::{count_anagrams, fold_series_sum, max_window_cost, series_sum};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scan_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] Quota-window scans...");
    measurements.extend(run_quota_window(&options, &mut sys));
    eprintln!("[2/3] Anagram index builds and queries...");
    measurements.extend(run_anagram(&options, &mut sys));
    eprintln!("[3/3] Series sums...");
    measurements.extend(run_series(&options, &mut sys));

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scan_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 100_000usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = value
                    .parse::<usize>()
                    .map_err(|_| "verify limit must be a positive integer".to_string())?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scan_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum input size to verify against a reference (default: 100000)
  -h, --help                    Print this help message

Examples:
  cargo run --bin scan_probe
  cargo run --bin scan_probe -- --format table --verify-limit 10000
"
        );
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn run_quota_window(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[1_000, 10_000, 100_000, 1_000_000];
    const QUOTA: usize = 4;

    SIZES
        .iter()
        .map(|&len| {
            measure("quota_window", format!("len={len}"), sys, || {
                let costs = probe_costs(len);
                let labels = probe_labels(len);
                let best = max_window_cost(&costs, &labels, QUOTA);

                if len <= options.verify_limit {
                    let baseline = segmented_max_cost(&costs, &labels, QUOTA);
                    if baseline == best {
                        (VerificationStatus::Passed, None)
                    } else {
                        (
                            VerificationStatus::Failed,
                            Some(format!("expected {baseline}, got {best}")),
                        )
                    }
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            })
        })
        .collect()
}

fn run_anagram(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[1_000, 10_000, 100_000];
    const QUERIES: usize = 200;

    SIZES
        .iter()
        .map(|&len| {
            measure("anagram", format!("dict={len},queries={QUERIES}"), sys, || {
                let dictionary = probe_words(len, 0);
                let queries = probe_words(QUERIES, 7);
                let counts = count_anagrams(&dictionary, &queries);

                if len <= options.verify_limit {
                    let baseline = naive_anagram_counts(&dictionary, &queries);
                    if baseline == counts {
                        (VerificationStatus::Passed, None)
                    } else {
                        (
                            VerificationStatus::Failed,
                            Some("counts diverge from naive reference".to_string()),
                        )
                    }
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            })
        })
        .collect()
}

fn run_series(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[i32] = &[1_000, 100_000, 10_000_000, 2_000_000_000];

    SIZES
        .iter()
        .map(|&n| {
            measure("series_sum", format!("n={n}"), sys, || {
                let closed = series_sum(n);

                if n as usize <= options.verify_limit {
                    let baseline = fold_series_sum(n);
                    if baseline == closed {
                        (VerificationStatus::Passed, None)
                    } else {
                        (
                            VerificationStatus::Failed,
                            Some(format!("expected {baseline}, got {closed}")),
                        )
                    }
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            })
        })
        .collect()
}

/// Independent quota-window reference: locate day boundaries first, then sum
/// each completed segment.
fn segmented_max_cost(costs: &[i64], labels: &[String], quota: usize) -> i64 {
    let mut boundaries = Vec::new();
    let mut legal = 0usize;
    for (i, label) in labels.iter().enumerate() {
        if label == "legal" {
            legal += 1;
        }
        if legal == quota {
            boundaries.push(i);
            legal = 0;
        }
    }

    let mut best = 0i64;
    let mut start = 0usize;
    for &end in &boundaries {
        let day: i64 = costs[start..=end].iter().sum();
        best = best.max(day);
        start = end + 1;
    }
    best
}

/// Per-query O(dictionary) reference that never builds a table.
fn naive_anagram_counts(dictionary: &[String], queries: &[String]) -> Vec<u32> {
    fn sorted(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }
    queries
        .iter()
        .map(|q| {
            let key = sorted(q);
            dictionary.iter().filter(|w| sorted(w) == key).count() as u32
        })
        .collect()
}

fn probe_costs(len: usize) -> Vec<i64> {
    (0..len).map(|i| (i % 23 + 1) as i64).collect()
}

fn probe_labels(len: usize) -> Vec<String> {
    (0..len)
        .map(|i| {
            if i % 3 == 2 {
                "legal".to_string()
            } else {
                "illegal".to_string()
            }
        })
        .collect()
}

fn probe_words(len: usize, offset: usize) -> Vec<String> {
    const LETTERS: &[u8] = b"anagrmk";
    (0..len)
        .map(|i| {
            let mut v = i * 31 + offset;
            let word_len = v % 6 + 1;
            (0..word_len)
                .map(|_| {
                    let ch = LETTERS[v % LETTERS.len()] as char;
                    v /= LETTERS.len();
                    ch
                })
                .collect()
        })
        .collect()
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    eprintln!(
        "      {scenario} ({size_desc}): {:.3}s, status={}",
        duration.as_secs_f64(),
        status.label()
    );

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    eprintln!();
    eprintln!(
        "Summary: {} passed, {} failed, {} above --verify-limit {}",
        passed, failed, not_checked, options.verify_limit
    );
    for m in measurements {
        if matches!(m.verification_status, VerificationStatus::Failed) {
            eprintln!(
                "  failed: {} ({}): {}",
                m.scenario,
                m.size_desc,
                m.verification_detail.as_deref().unwrap_or("")
            );
        }
    }
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}",
        "scenario",
        "size",
        "wall_s",
        "rss_delta_kib",
        "status",
        col1 = col1,
        col2 = col2
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            col1 = col1,
            col2 = col2
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
