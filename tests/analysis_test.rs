//! Read-file analysis against on-disk fixtures

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use localign::io::read_first_sequence;
use localign::{
    align_reads, AlignConfig, CountHistogram, FastaStream, FastqStream, KmerCounts, ReadStats,
    Scoring,
};

const READS: &str = "@r1\n\
GATTACAGATTACA\n\
+\n\
IIIIIIIIIIIIII\n\
@r2\n\
GGGCGGCG\n\
+\n\
IIIIIIII\n\
@r3\n\
GATTACAGATTACAGGCCTT\n\
+\n\
IIIIIIIIIIIIIIIIIIII\n";

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn write_gzip_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let file = File::create(&path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

#[test]
fn test_fasta_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "genome.fa",
        ">phage test genome\nGGGCGGCGACCT\nCGCGGGTTTT\n",
    );

    let records: Vec<_> = FastaStream::from_path(&path)
        .unwrap()
        .collect::<localign::Result<_>>()
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "phage");
    assert_eq!(records[0].sequence, b"GGGCGGCGACCTCGCGGGTTTT");

    let genome = read_first_sequence(&path).unwrap();
    assert_eq!(genome.len(), 22);
}

#[test]
fn test_gzipped_fastq_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gzip_fixture(&dir, "reads.fq.gz", READS);

    let records: Vec<_> = FastqStream::from_path(&path)
        .unwrap()
        .collect::<localign::Result<_>>()
        .unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "r1");
    assert_eq!(records[1].sequence, b"GGGCGGCG");
    assert_eq!(records[2].sequence.len(), 20);
}

#[test]
fn test_read_stats_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "reads.fq", READS);

    let stats = ReadStats::from_records(FastqStream::from_path(&path).unwrap()).unwrap();

    assert_eq!(stats.reads, 3);
    assert_eq!(stats.min_len, 8);
    assert_eq!(stats.max_len, 20);
    assert_eq!(stats.total_bases, 42);
    assert_eq!(stats.mean_len(), 14.0);
}

#[test]
fn test_kmer_spectrum_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "reads.fq", READS);

    let mut counts = KmerCounts::new(7);
    counts
        .add_records(FastqStream::from_path(&path).unwrap())
        .unwrap();

    // GATTACA appears twice in r1 and twice in r3.
    assert_eq!(counts.get(b"GATTACA"), 4);
    // r2 contributes exactly two windows: GGGCGGC and GGCGGCG.
    assert_eq!(counts.get(b"GGGCGGC"), 1);
    assert_eq!(counts.get(b"GGCGGCG"), 1);

    let occurrences = counts.occurrence_counts();
    let histogram = CountHistogram::from_values(&occurrences, 1);
    assert_eq!(histogram.total() as usize, counts.distinct());
}

#[test]
fn test_malformed_fastq_reports_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "bad.fq", "@r1\nACGT\nIIII\nIIII\n");

    let err = FastqStream::from_path(&path)
        .unwrap()
        .collect::<localign::Result<Vec<_>>>()
        .unwrap_err();

    match err {
        localign::LocalignError::InvalidFastqFormat { line, .. } => assert_eq!(line, 3),
        other => panic!("expected InvalidFastqFormat, got {:?}", other),
    }
}

#[test]
fn test_align_parsed_reads_against_parsed_genome() {
    let dir = tempfile::tempdir().unwrap();
    let genome_path = write_fixture(
        &dir,
        "genome.fa",
        ">ref\nGGGCGGCGACCTCGCGGGTTTTGATTACAGATTACAGGCCTT\n",
    );
    let reads_path = write_fixture(&dir, "reads.fq", READS);

    let genome = read_first_sequence(&genome_path).unwrap();
    let reads: Vec<_> = FastqStream::from_path(&reads_path)
        .unwrap()
        .collect::<localign::Result<_>>()
        .unwrap();

    let config = AlignConfig {
        max_alignments: Some(64),
        ..AlignConfig::default()
    };
    let mapped = align_reads(&genome, &reads, &Scoring::default(), &config).unwrap();

    assert_eq!(mapped.len(), 3);
    // Every read is an exact substring of the reference.
    assert_eq!(mapped[0].result.score, 28);
    assert_eq!(mapped[1].result.score, 16);
    assert_eq!(mapped[2].result.score, 40);
    for mapping in &mapped {
        assert!(!mapping.result.alignments.is_empty());
    }
}
