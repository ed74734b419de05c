mod boxes;
mod frame;
mod guide;
mod padding;
mod text;

pub use boxes::{Fill, FixedBox};
pub use frame::{FixedSize, Frame, FrameSize};
pub use guide::AlignmentGuide;
pub use padding::Padding;
pub use text::Text;
