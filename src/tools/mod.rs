//! Local tools — deterministic answers computed without the upstream model.
//!
//! Each tool exposes a `try_answer`-style probe that returns `Some(text)`
//! when its trigger matches the (normalized) message. The shield consults
//! them in a fixed order; a tool answer short-circuits the upstream call
//! while preserving the normal response shape.

pub mod arithmetic;
pub mod briefing;
pub mod clock;
pub mod random;
