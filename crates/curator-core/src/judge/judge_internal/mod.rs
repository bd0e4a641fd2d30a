//! Judge split.
//!
//! - run.rs: validation, orchestration and the single commit point
//! - prompt.rs: rubric text and prompt builder only
//! - client.rs: oracle call + response parse boundary

pub(crate) mod client;
pub(crate) mod prompt;
pub(crate) mod run;

#[cfg(test)]
mod tests;
