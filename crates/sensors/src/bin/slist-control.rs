//! Sensor list control CLI
//!
//! Loads a sensor bank from a TOML configuration file, classifies it into
//! skipped, fault and ok lists, and prints the outcome.

use anyhow::Context;
use serde::Serialize;
use slist_core::{logging, Config, ControlConfig, Error};
use slist_sensors::{classify, Partition, PartitionSummary, Sensor, SensorList};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// JSON output for a classification run
#[derive(Debug, Serialize)]
struct ControlOutput<'a> {
    check_faults: bool,
    summary: PartitionSummary,
    partition: &'a Partition,
}

#[derive(Debug, PartialEq)]
struct Options {
    bank: PathBuf,
    json: bool,
    no_fault_check: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut bank = None;
    let mut json = false;
    let mut no_fault_check = false;

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "--no-fault-check" => no_fault_check = true,
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {}", flag)),
            path if bank.is_none() => bank = Some(PathBuf::from(path)),
            extra => return Err(format!("Unexpected argument: {}", extra)),
        }
    }

    let bank = bank.ok_or_else(|| "Missing sensor bank file".to_string())?;
    Ok(Options {
        bank,
        json,
        no_fault_check,
    })
}

fn print_usage() {
    println!("slist-control - Classify a sensor bank into skipped, fault and ok lists");
    println!();
    println!("USAGE:");
    println!("    slist-control <bank.toml> [--json] [--no-fault-check]");
    println!();
    println!("OPTIONS:");
    println!("    --json              Print the full partition as JSON");
    println!("    --no-fault-check    Route every active sensor to ok");
}

fn run<W: Write>(options: &Options, out: &mut W) -> anyhow::Result<()> {
    let config = Config::from_file(&options.bank)
        .with_context(|| format!("Failed to load {}", options.bank.display()))?;
    logging::init_with(&config.logging);

    let control = if options.no_fault_check {
        ControlConfig::without_fault_check()
    } else {
        config.control
    };

    let list: SensorList = config.sensors.iter().map(Sensor::from_spec).collect();
    tracing::info!(
        bank = %options.bank.display(),
        sensors = list.len(),
        check_faults = control.check_faults,
        "Classifying sensor bank"
    );

    let partition = classify(list, &control);
    let summary = partition.summary();

    if options.json {
        let output = ControlOutput {
            check_faults: control.check_faults,
            summary,
            partition: &partition,
        };
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        writeln!(out, "{}", rendered)?;
    } else {
        writeln!(out, "skipped: {}", summary.skipped)?;
        writeln!(out, "fault:   {}", summary.fault)?;
        writeln!(out, "ok:      {}", summary.ok)?;
        writeln!(out, "digest:  {}", summary.digest)?;
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = run(&options, &mut io::stdout().lock()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
