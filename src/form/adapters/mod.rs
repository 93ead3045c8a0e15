//! Adapters presenting form output to concrete UIs.

mod html;

pub use html::{HtmlCardRenderer, RenderError};
