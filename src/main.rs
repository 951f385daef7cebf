/*!
 * schedsim - Simulation Driver
 *
 * Usage: schedsim [PROCESSES.json|-] [POLICY]
 *
 * Reads a JSON array of processes (`{"pid", "arrival", "burst", "priority"?}`)
 * from a file or stdin, runs one policy or compares all of them, and prints
 * the outcome as JSON on stdout.
 */

use cpu_sched_sim::{compare_with, init_tracing, run, CompareConfig, Process, SimOptions};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::io::Read;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let config = CompareConfig::from_env();
    let mut args = std::env::args().skip(1);

    let processes = match args.next() {
        Some(path) => load_processes(&path)?,
        None => {
            info!("no input given, using built-in workload");
            demo_processes()
        }
    };

    let output = match args.next() {
        Some(key) => {
            let options = SimOptions::new()
                .with_quantum(i64::try_from(config.quantum).unwrap_or(i64::MAX))
                .with_aging_rate(config.aging_rate);
            let outcome = run(&key, &processes, &options)?;
            serde_json::to_string_pretty(&outcome)
        }
        None => serde_json::to_string_pretty(&compare_with(&processes, &config)),
    }
    .into_diagnostic()
    .wrap_err("Failed to encode outcome")?;

    println!("{output}");
    Ok(())
}

fn load_processes(path: &str) -> Result<Vec<Process>> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .into_diagnostic()
            .wrap_err("Failed to read processes from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {path}"))?
    };

    serde_json::from_str(&raw)
        .into_diagnostic()
        .wrap_err("Expected a JSON array of {pid, arrival, burst, priority?}")
}

fn demo_processes() -> Vec<Process> {
    vec![
        Process::new(1, 0, 3).with_priority(3),
        Process::new(2, 2, 6).with_priority(1),
        Process::new(3, 4, 4).with_priority(4),
        Process::new(4, 6, 5).with_priority(2),
        Process::new(5, 8, 2).with_priority(5),
    ]
}
