pub mod prompts;
pub mod request;
