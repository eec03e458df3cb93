pub mod catalog;
pub mod generate;
pub mod prompts;
pub mod webhooks;
