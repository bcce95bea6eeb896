use ant_clustering::prelude::*;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut sim = match Simulation::new(args.to_config()) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    let simulation_time = if args.quiet {
        sim.run(&mut NullRenderer)
    } else {
        sim.run(&mut ConsoleRenderer::stdout(args.render_every))
    };

    sim.print_summary(simulation_time);

    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
