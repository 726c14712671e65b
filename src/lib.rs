pub mod api;
pub mod client;
pub mod config;
pub mod divider;
pub mod handlers;
pub mod metrics;
pub mod prompt;
pub mod strategy;
pub use divider::{DivideError, ParagraphDivider};
pub use metrics::{count_paragraphs, count_sentences, count_words, TextStats};
