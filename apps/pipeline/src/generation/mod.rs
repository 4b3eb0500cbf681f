// Derived-artifact builders: resume bullet suggestions, the cover-letter
// prompt payload, and the per-job tailoring record. Text assembly only;
// the LLM call itself belongs to a downstream collaborator.

pub mod bullets;
pub mod cover_letter;
pub mod prompts;
pub mod recommend;
