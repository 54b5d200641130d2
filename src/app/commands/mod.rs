pub mod generate;
pub mod intro;
pub mod prompt;
