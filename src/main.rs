use anyhow::Context;
use clap::Parser;
use edi_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match run(args) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Run the selected command; `Ok(false)` means some document failed
fn run(args: Args) -> anyhow::Result<bool> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    runtime.block_on(run_until_interrupted(args))
}

async fn run_until_interrupted(args: Args) -> anyhow::Result<bool> {
    tokio::select! {
        result = commands::run(args) => {
            let report = result?;
            Ok(report.all_succeeded())
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to install CTRL+C signal handler")?;
            eprintln!("\nReceived CTRL+C, shutting down...");
            anyhow::bail!("Processing interrupted by user")
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("EDI Processor - X12 EDI to JSON Converter");
    println!("=========================================");
    println!();
    println!("Convert raw X12 EDI documents (850, 855, 856, 214, 940, 810, 997,");
    println!("837, 835, 270, 271) into structured JSON.");
    println!();
    println!("USAGE:");
    println!("    edi-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse EDI files, directories, globs or stdin into JSON");
    println!("    analyze     Parse and attach a summarizer analysis");
    println!("    bridge      Answer one JSON request on stdin with JSON on stdout");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a single document to stdout:");
    println!("    edi-processor parse po-1001.edi");
    println!();
    println!("    # Parse a directory into per-file JSON plus batch_results.json:");
    println!("    edi-processor parse inbound/ --output parsed/ --workers 8");
    println!();
    println!("    # Pipe a request through the bridge:");
    println!("    echo '{{\"command\":\"parse\",\"content\":\"ST*997*0001~AK5*A~\"}}' | edi-processor bridge");
    println!();
    println!("For detailed help on any command, use:");
    println!("    edi-processor <COMMAND> --help");
}
