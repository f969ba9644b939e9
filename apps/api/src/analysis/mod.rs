// Readiness analysis engine.
// Pure, synchronous pipeline: JD text in, one Analysis record out.
// Only handlers.rs touches AppState or the store.

pub mod assembler;
pub mod checklist;
pub mod company;
pub mod export;
pub mod handlers;
pub mod normalize;
pub mod plan;
pub mod questions;
pub mod readiness;
pub mod rounds;
pub mod skills;
