// Content generation: request validation, prompt building, provider call, response parsing.
// All provider calls go through llm_client — no direct HTTP calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
