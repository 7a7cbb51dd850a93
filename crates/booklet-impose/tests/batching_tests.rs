use booklet_impose::*;

#[test]
fn test_no_options_for_single_signature() {
    let configs = get_batch_configs(16, 1).unwrap();
    assert!(configs.is_empty());
}

#[test]
fn test_medium_document_offers_two_options() {
    let configs = get_batch_configs(16, 32).unwrap();

    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].signatures_per_batch, 1);
    assert_eq!(configs[1].signatures_per_batch, 6);

    // Descriptions carry the derived page counts
    assert!(configs[0].description.contains("16 pages"));
    assert!(configs[1].description.contains("96 pages"));
}

#[test]
fn test_target_dividing_evenly() {
    let configs = get_batch_configs(20, 10).unwrap();

    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0].signatures_per_batch, 1);
    assert_eq!(configs[1].signatures_per_batch, 5);
    assert!(configs[1].description.contains("100 pages"));
}

#[test]
fn test_huge_signature_collapses_to_one_option() {
    // 100 / 120 rounds to 1, which duplicates the one-signature option
    let configs = get_batch_configs(120, 5).unwrap();

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].signatures_per_batch, 1);
}

#[test]
fn test_target_option_dropped_when_it_cannot_split() {
    // 100 / 16 rounds to 6, but only 4 signatures exist
    let configs = get_batch_configs(16, 4).unwrap();

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].signatures_per_batch, 1);
}

#[test]
fn test_options_sorted_ascending() {
    let configs = get_batch_configs_with_target(8, 100, 200).unwrap();

    let sizes: Vec<usize> = configs.iter().map(|c| c.signatures_per_batch).collect();
    let mut sorted = sizes.clone();
    sorted.sort_unstable();
    assert_eq!(sizes, sorted);
}

#[test]
fn test_invalid_planner_inputs() {
    match get_batch_configs(0, 10) {
        Err(ImposeError::InvalidArgument(_)) => {}
        _ => panic!("Expected InvalidArgument for zero signature size"),
    }

    match get_batch_configs(16, 0) {
        Err(ImposeError::InvalidArgument(_)) => {}
        _ => panic!("Expected InvalidArgument for zero total signatures"),
    }
}

#[test]
fn test_chunks_reassemble_imposition_map() {
    let map = generate_imposition_map(100, 16).unwrap();

    for batch in [None, Some(0), Some(1), Some(2), Some(3), Some(7), Some(50)] {
        let chunks = chunk_imposition_map(map.indices(), 16, batch);
        assert_eq!(chunks.concat(), map.indices());
    }
}

#[test]
fn test_chunking_a_two_signature_map() {
    let map = generate_imposition_map(32, 16).unwrap();

    let chunks = chunk_imposition_map(map.indices(), 16, Some(1));
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].len(), 16);
    assert_eq!(chunks[1].len(), 16);

    let chunks = chunk_imposition_map(map.indices(), 16, Some(2));
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0], map.indices());

    let chunks = chunk_imposition_map(map.indices(), 16, Some(0));
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0], map.indices());
}

#[test]
fn test_planner_options_feed_the_splitter() {
    // 500 pages in 16-page signatures: 32 signatures
    let map = generate_imposition_map(500, 16).unwrap();
    let configs = get_batch_configs(16, map.total_signatures()).unwrap();
    assert_eq!(configs.len(), 2);

    for config in &configs {
        let chunks =
            chunk_imposition_map(map.indices(), 16, Some(config.signatures_per_batch));
        assert!(!chunks.is_empty());
        assert_eq!(chunks.concat(), map.indices());

        // Every chunk except possibly the last is a full batch
        let full = config.signatures_per_batch * 16;
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.len(), full);
        }
        assert!(chunks.last().unwrap().len() <= full);
    }
}
