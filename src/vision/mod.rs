pub(crate) mod client;
mod models;
pub(crate) mod prompt;

pub use client::{OpenAiVisionClient, VisionService};
