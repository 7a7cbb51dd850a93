//! Splitting an imposition map into per-file chunks

/// Partition `map` into consecutive batches of `signatures_per_batch`
/// signatures, one chunk per output file.
///
/// `None` or `Some(0)` disables splitting: the whole map comes back as a
/// single chunk, even when the map is empty. A positive batch size over an
/// empty map instead yields no chunks at all; callers distinguish "no
/// output files" from "one empty file" through that difference, so both
/// behaviors are kept as-is.
///
/// The final chunk is shorter than the rest only when the batch size does
/// not evenly divide the signature count. Concatenating the chunks in
/// order always reproduces `map` exactly.
pub fn chunk_imposition_map(
    map: &[usize],
    signature_size: usize,
    signatures_per_batch: Option<usize>,
) -> Vec<Vec<usize>> {
    let chunk_size = match signatures_per_batch {
        Some(n) if n > 0 => n * signature_size,
        _ => return vec![map.to_vec()],
    };

    // A zero-width chunk cannot split anything; treat it like unset.
    if chunk_size == 0 {
        return vec![map.to_vec()];
    }

    map.chunks(chunk_size).map(<[usize]>::to_vec).collect()
}

// =============================================================================
// Tests
// =============================================================================
