//! Search constants.

// ============================================================================
// SCORES
// ============================================================================

/// Score of being checkmated at the root; a mate `ply` plies away scores
/// `MATE_SCORE - ply` for the winner
pub const MATE_SCORE: i32 = 1_000_000;

/// Scores with absolute value >= this are considered checkmate scores
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

/// Bound wider than any reachable score
pub const INFINITY: i32 = MATE_SCORE + 1;

// ============================================================================
// LIMITS
// ============================================================================

/// The stop flag and deadline are polled once per this many nodes
pub const NODE_POLL_INTERVAL: u64 = 1024;
