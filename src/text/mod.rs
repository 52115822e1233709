//! Text preparation primitives shared by the shield and the armor.
//!
//! Two matching surfaces are derived from every message:
//! - **spaced** ([`normalize::normalize`]) — folded text with word boundaries
//!   intact, used for phrase and word-boundary matching;
//! - **spaceless** ([`normalize::super_normalize`]) — folded text with all
//!   punctuation, whitespace, and digits removed, used to defeat
//!   character-insertion evasion ("g e m i n i", "g.e.m.i.n.i").

pub mod decode;
pub mod normalize;

pub use decode::decode_probe;
pub use normalize::{normalize, super_normalize};
