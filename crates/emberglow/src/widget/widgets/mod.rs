//! Widget implementations.

mod abstract_button;
mod hover_button;

pub use abstract_button::AbstractButton;
pub use hover_button::HoverButton;
