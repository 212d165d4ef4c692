//! Core recitation tracking shared by the platform's client applications.
//!
//! Provides:
//! - Waqf (pause mark) classification
//! - Muqatta'at letter-name matching for compound-letter openings
//! - Greedy lookahead alignment of a live transcript against an ayah
//! - Aggregate progress, accuracy, and streak metrics
//!
//! The engine is a pure function over its inputs: the caller re-invokes
//! [`track_recitation`] with the accumulated transcript on every speech
//! update and treats each [`TrackingResult`] as a full replacement
//! snapshot. Speech recognition, text normalization, the word-by-word
//! reference dataset, and rendering all live in the host application.

pub mod metrics;
pub mod muqattaat;
pub mod text;
pub mod tracker;
pub mod types;
pub mod waqf;

pub use metrics::aggregate;
pub use muqattaat::matches_letter_names;
pub use text::TextNormalizer;
pub use tracker::track_recitation;
pub use types::{Mistake, TrackerSettings, TrackingResult, WordState, WordStatus};
pub use waqf::is_waqf_mark;
