// Match-scoring pipeline: one LLM analysis call, defensive parsing, and the
// rule-based preference boost. All LLM calls go through llm_client.

pub mod handlers;
pub mod match_scorer;
pub mod parser;
pub mod preference_boost;
pub mod prompts;
