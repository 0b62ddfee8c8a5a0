//! End-to-end alignment scenarios with literal score and position
//! expectations

use localign::{
    align_local, smith_waterman, smith_waterman_with, AlignConfig, LocalignError, Scoring,
};

#[test]
fn test_gapped_alignment_with_three_cooptimal_paths() {
    let result = align_local(b"GGGGTTTAAAA", b"TGGGTGAAAA", 2, -2, -3).unwrap();

    println!("Score: {}", result.score);
    for alignment in &result.alignments {
        println!("{}\n", alignment);
    }

    assert_eq!(result.score, 11);
    assert_eq!(result.end, (11, 10));

    // Three gap placements are co-optimal; every path terminates at (1,1).
    assert_eq!(result.alignments.len(), 3);
    for alignment in &result.alignments {
        assert_eq!(alignment.start, (1, 1));
        assert_eq!(alignment.seq1_fragment, b"GGGTTTAAAA");
        assert_eq!(alignment.seq1_fragment.len(), alignment.seq2_fragment.len());
    }

    let mut variants: Vec<&[u8]> = result
        .alignments
        .iter()
        .map(|a| a.seq2_fragment.as_slice())
        .collect();
    variants.sort();
    assert_eq!(
        variants,
        vec![
            b"GGG-TGAAAA".as_slice(),
            b"GGGT-GAAAA".as_slice(),
            b"GGGTG-AAAA".as_slice(),
        ]
    );
}

#[test]
fn test_alignment_starting_at_column_zero() {
    let result = align_local(b"TGGGGAAAA", b"GGGGTTAAAA", 2, -2, -3).unwrap();

    assert_eq!(result.score, 10);
    assert_eq!(result.alignments.len(), 1);
    assert_eq!(result.alignments[0].start, (1, 0));
    assert_eq!(result.alignments[0].seq1_fragment, b"GGGG--AAAA");
    assert_eq!(result.alignments[0].seq2_fragment, b"GGGGTTAAAA");
}

#[test]
fn test_mismatch_masking_variant() {
    let config = AlignConfig {
        mismatch_marker: Some(b'-'),
        ..AlignConfig::default()
    };
    let result =
        smith_waterman_with(b"AATCGCGTGTAA", b"GAAGTCTAA", &Scoring::default(), &config)
            .unwrap();

    assert_eq!(result.score, 8);
    assert_eq!(result.alignments.len(), 1);
    assert_eq!(result.alignments[0].start, (6, 3));
    assert_eq!(result.alignments[0].seq2_fragment, b"GT-TAA");
}

#[test]
fn test_swapping_inputs_swaps_positions() {
    let forward = align_local(b"AATCGCGTGTAA", b"GAAGTCTAA", 2, -2, -3).unwrap();
    let swapped = align_local(b"GAAGTCTAA", b"AATCGCGTGTAA", 2, -2, -3).unwrap();

    assert_eq!(forward.score, swapped.score);
    assert_eq!(forward.end, (swapped.end.1, swapped.end.0));
    assert_eq!(forward.alignments.len(), swapped.alignments.len());
    assert_eq!(forward.alignments[0].start, (6, 3));
    assert_eq!(swapped.alignments[0].start, (3, 6));
    assert_eq!(
        forward.alignments[0].seq1_fragment,
        swapped.alignments[0].seq2_fragment
    );
    assert_eq!(
        forward.alignments[0].seq2_fragment,
        swapped.alignments[0].seq1_fragment
    );
}

#[test]
fn test_empty_inputs_give_empty_alignment() {
    for (seq1, seq2) in [
        (b"".as_slice(), b"ACGT".as_slice()),
        (b"ACGT".as_slice(), b"".as_slice()),
    ] {
        let result = smith_waterman(seq1, seq2, &Scoring::default()).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.end, (0, 0));
        assert_eq!(result.alignments.len(), 1);
        assert_eq!(result.alignments[0].start, (0, 0));
        assert!(result.alignments[0].seq1_fragment.is_empty());
        assert!(result.alignments[0].seq2_fragment.is_empty());
    }
}

#[test]
fn test_matrix_cell_budget_is_enforced() {
    let config = AlignConfig {
        max_matrix_cells: Some(10),
        ..AlignConfig::default()
    };
    let err = smith_waterman_with(b"ACGT", b"CGT", &Scoring::default(), &config).unwrap_err();
    match err {
        LocalignError::MatrixLimit { rows, cols, limit } => {
            assert_eq!((rows, cols, limit), (5, 4, 10));
        }
        other => panic!("expected MatrixLimit, got {:?}", other),
    }
}

#[test]
fn test_alignment_budget_is_enforced() {
    let config = AlignConfig {
        max_alignments: Some(2),
        ..AlignConfig::default()
    };
    let err = smith_waterman_with(b"GGGGTTTAAAA", b"TGGGTGAAAA", &Scoring::default(), &config)
        .unwrap_err();
    assert!(matches!(err, LocalignError::AlignmentLimit { limit: 2 }));
}

#[test]
fn test_read_against_long_reference() {
    // A read-sized query embedded in a reference-sized sequence, with the
    // rest of the reference unrelated to the read.
    let mut reference = Vec::new();
    for _ in 0..500 {
        reference.extend_from_slice(b"GATTACAGATTACAGGCCTT");
    }
    let read = b"CAGATTACAGGC";
    let insert_at = 7013;
    reference.splice(insert_at..insert_at, read.iter().copied());

    let result = smith_waterman(read, &reference, &Scoring::default()).unwrap();
    assert_eq!(result.score, (read.len() * 2) as i32);

    // The read also occurs naturally inside every repeat unit, so the
    // maximum value appears many times; the row-major tie-break must anchor
    // the traceback at the FIRST occurrence, not the inserted copy.
    assert_eq!(result.end, (12, 17));
    assert_eq!(result.alignments.len(), 1);
    assert_eq!(result.alignments[0].start, (0, 5));
    assert_eq!(result.alignments[0].seq1_fragment, read.to_vec());
    assert_eq!(result.alignments[0].seq2_fragment, read.to_vec());
}
