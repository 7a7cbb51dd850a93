use crate::constants::{
    PAGES_PER_SHEET, RECOMMENDED_MAX_SIGNATURE_SIZE, RECOMMENDED_MIN_SIGNATURE_SIZE,
    SIDES_PER_SHEET, SIGNATURE_SIZE_CHOICES,
};
use crate::imposition::validate_signature_size;
use crate::types::{ImpositionStatistics, Result};

/// Calculate statistics for imposing `page_count` pages into signatures of
/// `signature_size` pages
pub fn calculate_statistics(page_count: usize, signature_size: usize) -> Result<ImpositionStatistics> {
    validate_signature_size(signature_size)?;

    // Pad to a multiple of the signature size
    let padded_count = ((page_count + signature_size - 1) / signature_size) * signature_size;
    let blank_pages_added = padded_count - page_count;

    let signatures = padded_count / signature_size;
    let sheets_per_sig = signature_size / PAGES_PER_SHEET;
    let output_sheets = signatures * sheets_per_sig;

    // Each sheet prints a front and a back face
    let output_pages = output_sheets * SIDES_PER_SHEET;

    Ok(ImpositionStatistics {
        source_pages: page_count,
        signatures,
        output_sheets,
        output_pages,
        blank_pages_added,
    })
}

/// Pick the signature size that wastes the fewest pages on padding.
///
/// Candidates come from [`SIGNATURE_SIZE_CHOICES`]; only sizes between
/// [`RECOMMENDED_MIN_SIGNATURE_SIZE`] and [`RECOMMENDED_MAX_SIGNATURE_SIZE`]
/// compete, and ties go to the smaller size.
pub fn recommend_signature_size(page_count: usize) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None; // (blanks, size)

    for &size in &SIGNATURE_SIZE_CHOICES {
        if !(RECOMMENDED_MIN_SIGNATURE_SIZE..=RECOMMENDED_MAX_SIGNATURE_SIZE).contains(&size) {
            continue;
        }

        let padded = ((page_count + size - 1) / size) * size;
        let blanks = padded - page_count;

        match best {
            Some((fewest, _)) if blanks >= fewest => {}
            _ => best = Some((blanks, size)),
        }
    }

    best.map(|(_, size)| size)
}
