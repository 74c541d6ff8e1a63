//! The outfit recommender.
//!
//! A pure, synchronous rule evaluator: it borrows the caller's inventory,
//! keeps no state between calls and performs no I/O. The only source of
//! nondeterminism is the injected [`Picker`].

mod bucket;
mod engine;
mod error;
mod picker;

pub use bucket::{BUCKET_RULES, BucketRule, StyleBucket};
pub use engine::{
    CandidatePool, Candidates, EXTREME_COLD_CELSIUS, EXTREME_HEAT_CELSIUS, MIN_BUCKET_MATCHES,
    OUTERWEAR_BELOW_CELSIUS, Recommendation, filter_candidates, recommend_outfit,
};
pub use error::InsufficientInventory;
pub use picker::{Picker, RngPicker};
