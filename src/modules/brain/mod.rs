pub mod llm;
pub mod prompts;
pub mod composer;

pub use llm::DeepSeekClient;
pub use composer::ContentComposer;
