pub mod content;
pub mod faq;
pub mod meta;
