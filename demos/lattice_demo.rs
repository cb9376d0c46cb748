// demos/lattice_demo.rs
use option_lattice::error::LatticeError;
use option_lattice::lattice::{self, BinomialPricer, LatticeConfig, PathDependencePolicy};
use option_lattice::market::create_asset;
use option_lattice::options::{create_option, BarrierDirection, OptionKind};
use option_lattice::simulation::{simulate_into, SimulationConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("option-lattice Demo");
    println!("===================\n");

    // 1. Asset with a simulated month of daily prices
    let mut asset = create_asset("ACME", 100.0).expect("Valid asset");
    let sim = SimulationConfig {
        steps: 21,
        volatility: 0.3,
        seed: 42,
        ..Default::default()
    };
    let updates = simulate_into(&mut asset, &sim).expect("Valid simulation");
    println!("1. Simulated {} daily prices", updates);
    println!("{}\n", asset);

    // 2. One option of every kind, barriers set around the initial price
    println!("2. Live payoffs on the observed history");
    let view = asset.view();
    let mut options = Vec::new();
    for kind in OptionKind::ALL {
        let barrier = kind.barrier().map(|spec| match spec.direction {
            BarrierDirection::Up => 110.0,
            BarrierDirection::Down => 90.0,
        });
        match create_option(kind, &view, 100.0, 30, barrier) {
            Ok(option) => {
                println!("   {:<18} payoff = {:>8.4}", kind.label(), option.payoff());
                options.push(option);
            }
            Err(e) => println!("   {:<18} rejected: {}", kind.label(), e),
        }
    }
    println!();

    // 3. Rejected construction
    println!("3. Invalid terms are reported, not panicked on");
    match create_option(OptionKind::UpAndInPut, &view, 100.0, 30, None) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }
    match create_option(OptionKind::Call, &view, -5.0, 30, None) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }
    println!();

    // 4. Lattice for a vanilla call
    println!("4. Binomial lattice (r = 0, σ = 20%, 4 quarterly steps)");
    match lattice::price(&options[0], 0.0, 0.2, 4, 0.25) {
        Ok(valuation) => println!("{}\n", valuation),
        Err(e) => println!("   Error: {}\n", e),
    }

    // 5. Path-dependent options under both policies
    println!("5. Path-dependent kinds");
    let strict = BinomialPricer::new(LatticeConfig {
        path_dependence: PathDependencePolicy::Reject,
        ..Default::default()
    })
    .expect("Valid configuration");
    let lenient = BinomialPricer::new(LatticeConfig::default()).expect("Valid configuration");

    for option in options.iter().filter(|o| o.kind().is_path_dependent()).take(3) {
        match strict.price(option) {
            Err(LatticeError::ModelingLimitation { option_kind, .. }) => {
                println!("   strict:  {} refused", option_kind)
            }
            other => println!("   strict:  unexpected {:?}", other.map(|v| v.warnings)),
        }
        if let Ok(valuation) = lenient.price(option) {
            println!(
                "   lenient: {} terminal payoffs {:?} (warnings: {:?})",
                option.kind(),
                valuation.terminal_payoffs,
                valuation.warnings
            );
        }
    }

    // 6. Degenerate lattice parameters
    println!("\n6. Degenerate parameters");
    match lattice::price(&options[0], 0.5, 0.01, 4, 1.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\n✓ Demo complete!");
}
