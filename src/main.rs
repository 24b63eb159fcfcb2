use planetsim::{Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let Scenario {
        t_end,
        mut simulation,
    } = Scenario::build_scenario(scenario_cfg);

    info!(
        "running {} bodies to t = {} with h0 = {}",
        simulation.len(),
        t_end,
        simulation.parameters().h0
    );

    while simulation.time() < t_end {
        simulation.step();
    }

    println!("t = {:.6}, {} bodies", simulation.time(), simulation.len());
    for (handle, body) in simulation.bodies() {
        println!(
            "  #{} {:10} x = ({:+.6e}, {:+.6e})  v = ({:+.6e}, {:+.6e})  trail = {}",
            handle.0,
            body.name,
            body.x.x,
            body.x.y,
            body.v.x,
            body.v.y,
            body.trail.len()
        );
    }

    Ok(())
}
