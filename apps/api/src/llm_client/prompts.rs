// Cross-cutting prompt fragments. Task-specific prompts live next to the code that uses them.

/// System prompt sent with every completion request.
pub const ASSISTANT_SYSTEM: &str = "You are a helpful assistant.";

/// Reply a model gives when it cannot answer an extraction prompt.
pub const UNSURE_MARKER: &str = "not sure";
