//! Batch planning for multi-file output
//!
//! Large imposed documents are often printed from several smaller files.
//! The planner proposes a short list of ways to split the signatures of a
//! document across output files; the operator picks one and hands it to
//! the chunk splitter.

use std::collections::BTreeMap;

use crate::constants::BATCH_TARGET_PAGES;
use crate::types::{BatchConfig, ImposeError, Result};

/// Propose batch configurations for a document of `total_signatures`
/// signatures, targeting roughly [`BATCH_TARGET_PAGES`] pages per file.
///
/// Returns configurations sorted ascending by signatures per batch, with
/// duplicates removed. A single-signature document is never worth
/// splitting and yields an empty list.
pub fn get_batch_configs(signature_size: usize, total_signatures: usize) -> Result<Vec<BatchConfig>> {
    get_batch_configs_with_target(signature_size, total_signatures, BATCH_TARGET_PAGES)
}

/// Same as [`get_batch_configs`] with an explicit pages-per-file target.
pub fn get_batch_configs_with_target(
    signature_size: usize,
    total_signatures: usize,
    target_pages: usize,
) -> Result<Vec<BatchConfig>> {
    if signature_size == 0 {
        return Err(ImposeError::InvalidArgument(
            "Signature size must be positive".to_string(),
        ));
    }
    if total_signatures < 1 {
        return Err(ImposeError::InvalidArgument(
            "Total signatures must be at least 1".to_string(),
        ));
    }

    // Keyed by signatures-per-batch: later inserts win and iteration order
    // is already ascending.
    let mut candidates: BTreeMap<usize, String> = BTreeMap::new();

    if total_signatures > 1 {
        candidates.insert(1, format!("1 signature ({signature_size} pages) per file"));
    }

    // Round half up on the exact quotient, never below one signature.
    let sigs_for_target = ((2 * target_pages + signature_size) / (2 * signature_size)).max(1);

    // Skip when it duplicates the one-signature option or would not
    // actually split the output.
    if sigs_for_target != 1 && sigs_for_target < total_signatures {
        let pages = sigs_for_target * signature_size;
        candidates.insert(
            sigs_for_target,
            format!("~{pages} pages ({sigs_for_target} signatures) per file"),
        );
    }

    Ok(candidates
        .into_iter()
        .map(|(signatures_per_batch, description)| BatchConfig {
            signatures_per_batch,
            description,
        })
        .collect())
}

// =============================================================================
// Tests
// =============================================================================
