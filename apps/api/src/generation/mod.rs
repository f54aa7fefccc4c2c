// Response generation: prompt classification, the canned response bank,
// the mock engine, and the pluggable provider seam used by the HTTP layer.

pub mod classifier;
pub mod engine;
pub mod handlers;
pub mod prompts;
pub mod provider;
pub mod response_bank;
pub mod style;
