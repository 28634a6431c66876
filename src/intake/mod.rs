//! Form-submission intake pipeline: variant payloads, validation, bot
//! filtering support, rate limiting, and normalization into the canonical
//! stored record. Orchestration lives in `handlers::submit_handlers`.

pub mod forms;
pub mod normalize;
pub mod rate_limit;
pub mod validate;
