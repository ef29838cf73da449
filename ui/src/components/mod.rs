pub mod accordion;
pub mod app;
pub mod faq_view;
pub mod layout;
