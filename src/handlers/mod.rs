//! View handlers that redraw the component

pub mod composite;
pub mod console;
pub mod html;

// Re-export for convenience
pub use composite::CompositeEventHandler;
pub use console::ConsoleEventHandler;
pub use html::{render_html, render_page, HtmlRenderer};
