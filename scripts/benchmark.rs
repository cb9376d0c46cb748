// scripts/benchmark.rs
use option_lattice::lattice::{BinomialPricer, LatticeConfig};
use option_lattice::market::create_asset;
use option_lattice::math_utils::{lattice_node_count, Timer};
use option_lattice::options::{create_option, OptionKind};
use std::env;
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    rust_version: String,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        let rust_version = Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string());

        Self {
            os: env::consts::OS.to_string(),
            rust_version,
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    steps: usize,
    nodes: usize,
    time_ms: f64,
    throughput_nodes_per_sec: f64,
    top_payoff: f64,
    closed_form_error: f64,
}

fn run_lattice_benchmarks() -> Vec<BenchmarkResult> {
    let asset = create_asset("BENCH", 100.0).expect("Valid asset");
    let call = create_option(OptionKind::Call, &asset.view(), 100.0, 365, None)
        .expect("Valid option");

    let mut results = Vec::new();
    for &steps in &[10, 100, 500, 1_000, 5_000] {
        println!("Running lattice benchmark with {} steps...", steps);

        let pricer = BinomialPricer::new(LatticeConfig {
            risk_free_rate: 0.05,
            volatility: 0.2,
            steps,
            step_size: 1.0 / steps as f64,
            ..Default::default()
        })
        .expect("Valid configuration");

        let mut timer = Timer::new();
        timer.start();
        let valuation = pricer.price(&call).expect("Valid lattice");
        let time_ms = timer.elapsed_ms();

        let nodes = lattice_node_count(steps);
        let params = pricer.parameters();
        results.push(BenchmarkResult {
            steps,
            nodes,
            time_ms,
            throughput_nodes_per_sec: nodes as f64 / (time_ms / 1000.0),
            top_payoff: valuation.terminal_payoffs[0],
            closed_form_error: valuation
                .price_lattice
                .max_closed_form_error(params.up, params.down),
        });
    }
    results
}

fn main() {
    println!("option-lattice Benchmark Suite");
    println!("==============================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!();

    let results = run_lattice_benchmarks();

    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:>8} {:>12} {:>12} {:>16} {:>14} {:>12}",
        "Steps", "Nodes", "Time (ms)", "Nodes/sec", "Top payoff", "Max rel err"
    );
    println!("{:-<80}", "");

    for result in &results {
        println!(
            "{:>8} {:>12} {:>12.3} {:>16.0} {:>14.4} {:>12.2e}",
            result.steps,
            result.nodes,
            result.time_ms,
            result.throughput_nodes_per_sec,
            result.top_payoff,
            result.closed_form_error
        );
    }

    println!("{:=<80}", "");
    println!("\nTo reproduce: cargo run --bin benchmark --release");
}
