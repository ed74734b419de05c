pub mod math;
mod proposal;
mod style;
mod error;
mod environment;
mod element;
mod flex;
mod layout;
mod stack;
mod grid;
mod overlay;
mod guide;
mod fitting;
mod builder;
pub mod widgets;

pub use crate::proposal::{Dimension, SizeProposal};
pub use crate::style::{Align, Alignment, StackStyle, GridColumns, GridStyle, LayoutDefaults};
pub use crate::error::{LayoutError, Result};
pub use crate::environment::Environment;
pub use crate::element::{Widget, Element, Placement, Branch};
pub use crate::flex::distribute_leftover;
pub use crate::layout::{Layout, Container, AnyLayout, AnyLayoutCache, Root};
pub use crate::stack::{StackLayout, StackCache};
pub use crate::grid::{GridLayout, GridCache};
pub use crate::overlay::{OverlayLayout, OverlayCache};
pub use crate::fitting::{FitAxes, ViewThatFits, select_fitting, select_fitting_in};
pub use crate::builder::ViewBuilder;
pub use crate::widgets::{AlignmentGuide, Fill, FixedBox, FixedSize, Frame, FrameSize, Padding, Text};
