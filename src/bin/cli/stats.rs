//! Read statistics command

use std::io::{self, BufReader};
use std::process;

use localign::{FastqStream, ReadStats};

/// Read count and length statistics for a FASTQ file
///
/// Usage: localign read-stats [INPUT]
///
/// INPUT:
///     FASTQ file path (plain or .gz), or stdin if not specified
pub fn read_stats(args: &[String]) {
    let mut input_file = None;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_read_stats_help();
                return;
            }
            arg if !arg.starts_with('-') => {
                if input_file.is_none() {
                    input_file = Some(arg);
                    i += 1;
                } else {
                    eprintln!("Error: Multiple input files specified");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Error: Unknown option '{}'", args[i]);
                process::exit(1);
            }
        }
    }

    let stats = match input_file {
        Some(path) => match FastqStream::from_path(path) {
            Ok(stream) => ReadStats::from_records(stream),
            Err(e) => {
                eprintln!("Error opening FASTQ file '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            let reader = BufReader::new(stdin.lock());
            ReadStats::from_records(FastqStream::new(reader))
        }
    };

    let stats = match stats {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Error reading FASTQ records: {}", e);
            process::exit(1);
        }
    };

    println!("There are {} reads in this read file.", stats.reads);
    println!("The minimum length of reads is: {}.", stats.min_len);
    println!("The maximum length of reads is: {}.", stats.max_len);
    println!("The average length of reads is: {:.2}.", stats.mean_len());
}

fn print_read_stats_help() {
    println!("localign read-stats - Read count and length statistics");
    println!();
    println!("USAGE:");
    println!("    localign read-stats [INPUT]");
    println!();
    println!("INPUT:");
    println!("    FASTQ file path (plain or .gz), or stdin if not specified");
    println!();
    println!("EXAMPLES:");
    println!("    localign read-stats reads_1.fq");
    println!("    cat reads_1.fq | localign read-stats");
}
