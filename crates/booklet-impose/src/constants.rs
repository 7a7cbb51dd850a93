//! Shared constants for booklet imposition
//!
//! This module centralizes magic numbers used throughout the imposition
//! and batching calculations.

// =============================================================================
// Signatures and Sheets
// =============================================================================

/// Page faces contributed by one physical sheet (front-left, front-right,
/// back-left, back-right)
pub const PAGES_PER_SHEET: usize = 4;

/// Sides per physical sheet
pub const SIDES_PER_SHEET: usize = 2;

/// Signature sizes offered to an operator, in pages
pub const SIGNATURE_SIZE_CHOICES: [usize; 4] = [8, 16, 24, 32];

/// Smallest signature size the auto-selection will recommend
pub const RECOMMENDED_MIN_SIGNATURE_SIZE: usize = 16;

/// Largest signature size the auto-selection will recommend
pub const RECOMMENDED_MAX_SIGNATURE_SIZE: usize = 32;

// =============================================================================
// Batching
// =============================================================================

/// Default pages-per-file target used by the batch planner
pub const BATCH_TARGET_PAGES: usize = 100;

// =============================================================================
// Flyleaves
// =============================================================================

/// Pages added by the separate-cover option (one blank behind the front
/// cover, one before the back cover)
pub const FLYLEAF_PAGES: usize = 2;
