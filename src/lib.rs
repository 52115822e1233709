//! Bilio — mediation layer between the chat client and the upstream
//! generative-language API.
//!
//! Every inbound message passes through a layered pipeline: the shield
//! (input-side rule engine) may answer locally without touching the upstream
//! model; otherwise the message is enriched with session memory and live
//! search context, wrapped in a persona instruction, sent upstream, and the
//! answer is scrubbed by the armor (output-side filter) before delivery.
//!
//! See `DESIGN.md` for full architecture documentation.

pub mod config;
pub mod logging;

pub mod text;

pub mod session;
pub mod shield;
pub mod tools;

pub mod ocr;
pub mod search;
pub mod upstream;

pub mod armor;
pub mod persona;

pub mod pipeline;
pub mod server;
