//! Rendering of the described hierarchy to user-facing output.

pub mod html;

pub use html::{render_page, write_page, HtmlTheme};
