//! K-mer spectrum command

use std::io::{self, BufReader};
use std::process;

use localign::{plotly_histogram_payload, CountHistogram, FastqStream, KmerCounts, DEFAULT_K};

/// K-mer occurrence spectrum for a FASTQ file
///
/// Usage: localign kmer-spectrum [OPTIONS] [INPUT]
///
/// OPTIONS:
///     --kmer K           K-mer size (default: 20, range: 1-64)
///     --bin-width W      Histogram bin width (default: 1)
///     --format FORMAT    Output format: text (default), json
///     --help             Show help message
///
/// INPUT:
///     FASTQ file path (plain or .gz), or stdin if not specified
pub fn kmer_spectrum(args: &[String]) {
    let mut input_file = None;
    let mut kmer_size = DEFAULT_K;
    let mut bin_width = 1;
    let mut output_format = "text";
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--kmer" | "-k" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<usize>() {
                        Ok(k) => {
                            if k == 0 || k > 64 {
                                eprintln!("Error: K-mer size must be between 1 and 64");
                                process::exit(1);
                            }
                            kmer_size = k;
                        }
                        Err(_) => {
                            eprintln!("Error: Invalid k-mer size");
                            process::exit(1);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --kmer requires a value");
                    process::exit(1);
                }
            }
            "--bin-width" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<u64>() {
                        Ok(w) if w > 0 => bin_width = w,
                        _ => {
                            eprintln!("Error: Invalid bin width");
                            process::exit(1);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --bin-width requires a value");
                    process::exit(1);
                }
            }
            "--format" => {
                if i + 1 < args.len() {
                    output_format = &args[i + 1];
                    i += 2;
                } else {
                    eprintln!("Error: --format requires a value");
                    process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_kmer_spectrum_help();
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

    match output_format {
        "text" | "json" => {}
        _ => {
            eprintln!(
                "Error: Invalid format '{}'. Supported: text, json",
                output_format
            );
            process::exit(1);
        }
    }

    let mut counts = KmerCounts::new(kmer_size);
    let added = match input_file {
        Some(path) => match FastqStream::from_path(path) {
            Ok(stream) => counts.add_records(stream),
            Err(e) => {
                eprintln!("Error opening FASTQ file '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            let reader = BufReader::new(stdin.lock());
            counts.add_records(FastqStream::new(reader))
        }
    };

    if let Err(e) = added {
        eprintln!("Error reading FASTQ records: {}", e);
        process::exit(1);
    }

    let occurrences = counts.occurrence_counts();

    match output_format {
        "text" => {
            println!(
                "{} distinct {}-mers ({} occurrences total)",
                counts.distinct(),
                counts.k(),
                occurrences.iter().sum::<u64>()
            );
            let histogram = CountHistogram::from_values(&occurrences, bin_width);
            print!("{}", histogram.render_text());
        }
        "json" => {
            println!("{}", plotly_histogram_payload(&occurrences, "kmer-spectrum"));
        }
        _ => unreachable!(), // Already validated above
    }
}

fn print_kmer_spectrum_help() {
    println!("localign kmer-spectrum - K-mer occurrence spectrum");
    println!();
    println!("USAGE:");
    println!("    localign kmer-spectrum [OPTIONS] [INPUT]");
    println!();
    println!("OPTIONS:");
    println!("    --kmer K, -k       K-mer size (default: 20, range: 1-64)");
    println!("    --bin-width W      Histogram bin width (default: 1)");
    println!("    --format FORMAT    Output format: text (default), json");
    println!("    --help, -h         Show this help message");
    println!();
    println!("INPUT:");
    println!("    FASTQ file path (plain or .gz), or stdin if not specified");
    println!();
    println!("USE CASES:");
    println!("    - Contamination detection (unusual k-mer frequency patterns)");
    println!("    - Repeat content estimation");
    println!();
    println!("EXAMPLES:");
    println!("    localign kmer-spectrum --kmer 20 reads_1.fq");
    println!("    localign kmer-spectrum -k 17 --format json reads_1.fq");
}
