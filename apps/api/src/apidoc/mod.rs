// API Documentation Generator tool
// Implements: prompt assembly, Groq call, section extraction into APIDocResponse.
// All LLM calls go through llm_client — no direct Groq calls here.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod prompts;
