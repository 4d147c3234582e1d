// Cross-cutting prompt fragments shared by every backend.
// The match prompt itself lives in matching/prompts.rs.

/// Fixed system message sent with every model call.
pub const RECRUITER_SYSTEM: &str = "You are an expert HR recruiter and resume screener.";

/// Prompt used to probe a backend at startup.
pub const CONNECTION_TEST_PROMPT: &str = "Say 'Connection successful' if you can read this.";
