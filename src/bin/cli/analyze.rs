//! Full genome/read-file analysis command

use std::process;

use localign::io::read_first_sequence;
use localign::{plotly_histogram_payload, FastqStream, KmerCounts, ReadStats, DEFAULT_K};

/// Reference genome plus read-file analysis in one pass
///
/// Usage: localign analyze [OPTIONS] GENOME READS
///
/// OPTIONS:
///     --kmer K          K-mer size for the spectrum (default: 20)
///     --publish URL     POST the spectrum histogram to a plotting service
///                       (requires the 'network' build feature)
///     --help            Show help message
///
/// GENOME: FASTA file (plain or .gz); READS: FASTQ file (plain or .gz)
pub fn analyze(args: &[String]) {
    let mut inputs: Vec<&String> = Vec::new();
    let mut kmer_size = DEFAULT_K;
    let mut publish_url: Option<&String> = None;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--kmer" | "-k" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<usize>() {
                        Ok(k) if k > 0 && k <= 64 => kmer_size = k,
                        _ => {
                            eprintln!("Error: K-mer size must be between 1 and 64");
                            process::exit(1);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --kmer requires a value");
                    process::exit(1);
                }
            }
            "--publish" => {
                if i + 1 < args.len() {
                    publish_url = Some(&args[i + 1]);
                    i += 2;
                } else {
                    eprintln!("Error: --publish requires a URL");
                    process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_analyze_help();
                return;
            }
            arg if !arg.starts_with('-') => {
                inputs.push(&args[i]);
                i += 1;
            }
            _ => {
                eprintln!("Error: Unknown option '{}'", args[i]);
                process::exit(1);
            }
        }
    }

    if inputs.len() != 2 {
        eprintln!("Error: Expected GENOME and READS files, got {} paths", inputs.len());
        process::exit(1);
    }
    let (genome_path, reads_path) = (inputs[0], inputs[1]);

    let genome = match read_first_sequence(genome_path) {
        Ok(genome) => genome,
        Err(e) => {
            eprintln!("Error reading genome '{}': {}", genome_path, e);
            process::exit(1);
        }
    };
    println!(
        "The length of the reference genome is: {} bases.",
        genome.len()
    );

    // One pass over the read file feeds both the statistics and the k-mer
    // table.
    let mut stats = ReadStats::default();
    let mut counts = KmerCounts::new(kmer_size);
    let stream = match FastqStream::from_path(reads_path) {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("Error opening read file '{}': {}", reads_path, e);
            process::exit(1);
        }
    };
    for record in stream {
        match record {
            Ok(record) => {
                stats.record(record.sequence.len());
                counts.add_sequence(&record.sequence);
            }
            Err(e) => {
                eprintln!("Error reading FASTQ records: {}", e);
                process::exit(1);
            }
        }
    }

    println!("There are {} reads in this read file.", stats.reads);
    println!("The minimum length of reads is: {}.", stats.min_len);
    println!("The maximum length of reads is: {}.", stats.max_len);
    println!("The average length of reads is: {:.2}.", stats.mean_len());
    println!(
        "There are {} distinct {}-mers across the reads.",
        counts.distinct(),
        counts.k()
    );

    let payload = plotly_histogram_payload(&counts.occurrence_counts(), "basic-histogram");

    match publish_url {
        Some(url) => publish(url, &payload),
        None => println!("{}", payload),
    }
}

#[cfg(feature = "network")]
fn publish(url: &str, payload: &str) {
    match localign::analysis::publish_histogram(url, payload) {
        Ok(reply) => println!("{}", reply),
        Err(e) => {
            eprintln!("Error publishing histogram: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(not(feature = "network"))]
fn publish(_url: &str, _payload: &str) {
    eprintln!("Error: --publish requires a build with the 'network' feature");
    process::exit(1);
}

fn print_analyze_help() {
    println!("localign analyze - Reference genome and read-file analysis");
    println!();
    println!("USAGE:");
    println!("    localign analyze [OPTIONS] GENOME READS");
    println!();
    println!("OPTIONS:");
    println!("    --kmer K, -k      K-mer size for the spectrum (default: 20)");
    println!("    --publish URL     POST the spectrum histogram to a plotting service");
    println!("                      (requires the 'network' build feature)");
    println!("    --help, -h        Show this help message");
    println!();
    println!("INPUT:");
    println!("    GENOME: FASTA file (plain or .gz)");
    println!("    READS:  FASTQ file (plain or .gz)");
    println!();
    println!("OUTPUT:");
    println!("    Genome length, read count and length statistics, distinct k-mer");
    println!("    count, and the k-mer spectrum as a histogram payload.");
    println!();
    println!("EXAMPLES:");
    println!("    localign analyze lambda_virus.fa reads_1.fq");
    println!("    localign analyze --kmer 17 lambda_virus.fa.gz reads_1.fq.gz");
}
