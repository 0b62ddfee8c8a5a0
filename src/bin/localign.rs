//! localign CLI - local alignment and read-file analysis
//!
//! Command-line front end for the localign library: Smith-Waterman local
//! alignment with exhaustive co-optimal traceback, plus descriptive
//! statistics and k-mer spectra over FASTQ read files.
//!
//! # Usage
//!
//! ```bash
//! # Align two sequences and print every co-optimal alignment
//! localign align GGGGTTTAAAA TGGGTGAAAA
//!
//! # Read-length statistics over a FASTQ file
//! localign read-stats reads_1.fq
//!
//! # K-mer occurrence spectrum
//! localign kmer-spectrum --kmer 20 reads_1.fq
//!
//! # Full genome/read-file analysis
//! localign analyze lambda_virus.fa reads_1.fq
//! ```

use std::env;
use std::process;

mod cli;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];
    let command_args = &args[2..];

    match command.as_str() {
        "align" => cli::align::align(command_args),
        "read-stats" => cli::stats::read_stats(command_args),
        "kmer-spectrum" => cli::kmer::kmer_spectrum(command_args),
        "analyze" => cli::analyze::analyze(command_args),
        "--help" | "-h" | "help" => print_usage(),
        unknown => {
            eprintln!("Error: Unknown command '{}'", unknown);
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("localign - local alignment and read-file analysis");
    println!();
    println!("USAGE:");
    println!("    localign <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    align          Align two sequences (Smith-Waterman, all co-optimal paths)");
    println!("    read-stats     Read count and length statistics for a FASTQ file");
    println!("    kmer-spectrum  K-mer occurrence spectrum for a FASTQ file");
    println!("    analyze        Full genome/read-file analysis");
    println!();
    println!("Run 'localign <COMMAND> --help' for command-specific options.");
}
