//! Result rendering
//!
//! - `view` - the `View` surface trait plus in-memory and terminal views
//! - `renderer` - `ResultRenderer`, the single writer of a view

pub mod renderer;
pub mod view;

pub use renderer::ResultRenderer;
pub use view::{MemoryView, TerminalView, View};
