pub mod code_fence;
pub mod heading;
pub mod html_heading;

pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use heading::AtxHeading;
pub use html_heading::HtmlHeading;
