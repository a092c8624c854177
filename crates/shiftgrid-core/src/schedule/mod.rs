//! Schedule transform pipeline.
//!
//! raw `TaskRecord` batch → [`normalize`] + [`crate::domain::Category::classify`]
//! + round-robin assignment (inside [`builder::transform`]) → ordered
//! `ScheduleBlock` sequence → consumed by the layout engine and by
//! [`roster::extract_roster`].
//!
//! Everything here is a pure function: same input, same output, no I/O.

pub mod builder;
pub mod normalize;
pub mod roster;

pub use builder::transform;
pub use normalize::{GridSlot, normalize};
pub use roster::{SYNTHESIZED_ROSTER_CAP, extract_roster, synthesize_roster};
