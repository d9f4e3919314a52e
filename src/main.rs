use gravsim::{bench_step, Display, Scenario, ScenarioConfig, AU, DAY};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Number of steps to run, overrides the scenario's `steps`
    #[arg(short, long)]
    steps: Option<u64>,

    /// Log a frame summary every this many steps (0 = only the last)
    #[arg(long, default_value_t = 30)]
    report_every: u64,

    /// Time serial against parallel stepping instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn report(scenario: &Scenario, display: &Display) {
    let sys = scenario.system();
    info!(step = sys.steps(), days = sys.time() / DAY, "frame");
    for (body, frame) in sys.bodies().iter().zip(display.frame(sys)) {
        let p = body.position() / AU;
        info!(
            "  {:<8} x = {:+8.3} AU  y = {:+8.3} AU  r = {:7.3} AU  px = ({:6.1}, {:6.1})",
            frame.name,
            p.x,
            p.y,
            body.distance_to_anchor() / AU,
            frame.center.x,
            frame.center.y,
        );
    }
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let args = Args::parse();

    if args.bench {
        bench_step().context("benchmark aborted")?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let display = Display::from_config(&scenario_cfg);
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let steps = args.steps.unwrap_or(scenario.parameters().steps);
    info!(bodies = scenario.system().len(), steps, "running {}", args.file_name);

    for _ in 0..steps {
        scenario.step().context("simulation aborted")?;
        let n = scenario.system().steps();
        if args.report_every > 0 && n % args.report_every == 0 {
            report(&scenario, &display);
        }
    }

    if args.report_every == 0 || steps % args.report_every != 0 {
        report(&scenario, &display);
    }

    Ok(())
}
