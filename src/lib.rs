pub mod app;
pub mod config;
pub mod error;
pub mod explain;
pub mod gemini;
pub mod prompts;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
