//! Pipeline simulator CLI.
//!
//! This binary is the wall-clock driver and rendering surface for the
//! simulation engine. It performs:
//! 1. **Input:** Instruction tokens from the command line or a file.
//! 2. **Driving:** One `tick` per configured interval until the run ends.
//! 3. **Rendering:** A per-cycle table of slot stage occupancy, with
//!    stalls and forwarding paths marked.

use std::path::PathBuf;
use std::time::Duration;
use std::{fs, process, thread};

use clap::Parser;

use mipspipe_core::pipeline::Slot;
use mipspipe_core::sim::Controller;
use mipspipe_core::{SimConfig, SimState};

#[derive(Parser, Debug)]
#[command(
    name = "mipspipe",
    version,
    about = "Five-stage pipeline timing simulator",
    long_about = "Simulate a program through a five-stage in-order pipeline, one \
wall-clock tick per cycle, showing stage occupancy, inserted stalls, and \
forwarding paths.\n\nInstructions are 8-hex-digit MIPS words; the literal token \
STALL inserts a bubble by hand.\n\nExamples:\n  mipspipe 8C230004 00641820\n  \
mipspipe -f program.txt --no-delay --stats"
)]
struct Cli {
    /// Instruction tokens: 8 hex digits each, or STALL.
    tokens: Vec<String>,

    /// File with one instruction token per line (# starts a comment).
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Milliseconds between cycles (overrides the config file).
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Run at full speed, ignoring the tick interval.
    #[arg(long)]
    no_delay: bool,

    /// Print run statistics on completion.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref());
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_millis = tick_ms;
    }

    let tokens = collect_tokens(&cli);
    if tokens.is_empty() {
        eprintln!("Error: no instructions given");
        eprintln!("  mipspipe 8C230004 00641820");
        eprintln!("  mipspipe -f program.txt");
        process::exit(1);
    }

    let program = match Slot::parse_program(&tokens) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut controller = Controller::new();
    controller.start(program);
    render(controller.state(), &config);

    while !controller.state().finished {
        if !cli.no_delay {
            thread::sleep(Duration::from_millis(config.tick_millis));
        }
        controller.tick();
        render(controller.state(), &config);
    }

    if cli.stats {
        controller.stats().print();
    }
}

/// Loads the JSON config, or defaults when no path is given.
fn load_config(path: Option<&std::path::Path>) -> SimConfig {
    let Some(path) = path else {
        return SimConfig::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {e}", path.display());
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {}: {e}", path.display());
        process::exit(1);
    })
}

/// Gathers tokens from the file (if any), then the command line, in order.
fn collect_tokens(cli: &Cli) -> Vec<String> {
    let mut tokens = Vec::new();
    if let Some(path) = &cli.file {
        let text = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading program {}: {e}", path.display());
            process::exit(1);
        });
        for line in text.lines() {
            let line = line.split('#').next().unwrap_or("").trim();
            if !line.is_empty() {
                tokens.push(line.to_string());
            }
        }
    }
    tokens.extend(cli.tokens.iter().cloned());
    tokens
}

/// Prints the stage table for one cycle.
///
/// One row per slot: index, token, occupied stage, and a `>fwd` marker on
/// slots participating in a forwarding path this cycle.
fn render(state: &SimState, config: &SimConfig) {
    println!("cycle {:>2}/{}", state.cycle, state.max_cycles);
    for (index, slot) in state.slots.iter().enumerate() {
        let status = state.stage_of.get(index).copied().unwrap_or_default();
        let token = slot.to_string();
        let stage = status.stage.map_or("", |s| s.abbrev());
        let forwarding = if status.forwarding { "  >fwd" } else { "" };
        println!("  [{index}] {token:<9} {stage:<3}{forwarding}");
        if config.trace {
            if let Some(decoded) = slot.decode() {
                eprintln!(
                    "      {:?} opcode={:#04x} rs={} rt={} rd={}",
                    decoded.kind,
                    decoded.opcode,
                    decoded.rs,
                    decoded.rt,
                    decoded.rd.map_or_else(|| "-".to_string(), |r| r.to_string()),
                );
            }
        }
    }
    if state.finished {
        println!("finished in {} cycles", state.max_cycles);
    }
    println!();
}
