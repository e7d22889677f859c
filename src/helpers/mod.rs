//! Helper functions used by the content pipeline and page templates

mod date;
mod html;

pub use date::*;
pub use html::*;
