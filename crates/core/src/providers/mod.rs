pub mod traits;

// Text-generation provider implementations
pub mod gemini;
