use crate::element::{Element, Widget};
use crate::math::{Axis, Point, Rect, Size};
use crate::proposal::{Dimension, SizeProposal};
use crate::style::Alignment;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum FrameSize {
    #[default]
    Auto,
    Fixed(f32),
    /// The proposal, pulled into `[min, max]` where those are given.
    Flexible { min: Option<f32>, max: Option<f32> },
}

impl FrameSize {
    pub fn fill() -> FrameSize {
        FrameSize::Flexible { min: None, max: Some(f32::INFINITY) }
    }

    fn child_proposal(&self, proposal: Dimension) -> Dimension {
        match *self {
            FrameSize::Auto => proposal,
            FrameSize::Fixed(extent) => Dimension::from(extent),
            FrameSize::Flexible { min, max } => {
                let (min, max) = (min.unwrap_or(0.0), max.unwrap_or(f32::INFINITY));
                match proposal {
                    Dimension::Finite(value) => Dimension::from(value.min(max).max(min)),
                    Dimension::Infinite if max.is_finite() => Dimension::from(max),
                    other => other
                }
            }
        }
    }

    fn extent(&self, proposal: Dimension, child: f32) -> f32 {
        match *self {
            FrameSize::Auto => child,
            FrameSize::Fixed(extent) => extent.max(0.0),
            FrameSize::Flexible { min, max } => {
                let proposed = match proposal {
                    Dimension::Finite(value) => Some(value),
                    Dimension::Infinite => Some(f32::INFINITY),
                    Dimension::Unspecified => None
                };
                let mut extent = child;
                if let Some(min) = min {
                    extent = min.max(proposed.map_or(extent, |proposed| extent.min(proposed)));
                }
                if let Some(max) = max {
                    extent = max.min(proposed.map_or(extent, |proposed| extent.max(proposed)));
                }
                extent
            }
        }
    }

    fn is_flexible(&self) -> Option<bool> {
        match *self {
            FrameSize::Auto => None,
            FrameSize::Fixed(_) => Some(false),
            FrameSize::Flexible { min, max } => Some(max.unwrap_or(0.0) > min.unwrap_or(0.0))
        }
    }
}


pub struct Frame {
    width: FrameSize,
    height: FrameSize,
    alignment: Alignment,
    child: [Element; 1],
}

impl Frame {
    pub fn new(child: impl Into<Element>) -> Frame {
        Frame {
            width: FrameSize::Auto,
            height: FrameSize::Auto,
            alignment: Alignment::CENTER,
            child: [child.into()]
        }
    }

    pub fn fixed(width: f32, height: f32, child: impl Into<Element>) -> Frame {
        Frame::new(child)
            .with_width(FrameSize::Fixed(width))
            .with_height(FrameSize::Fixed(height))
    }

    pub fn with_width(self, width: FrameSize) -> Frame {
        Frame { width, ..self }
    }

    pub fn with_height(self, height: FrameSize) -> Frame {
        Frame { height, ..self }
    }

    pub fn with_alignment(self, alignment: Alignment) -> Frame {
        Frame { alignment, ..self }
    }

    fn axis(&self, axis: Axis) -> FrameSize {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height
        }
    }

    fn child_proposal(&self, proposal: SizeProposal) -> SizeProposal {
        SizeProposal::new(self.width.child_proposal(proposal.width), self.height.child_proposal(proposal.height))
    }
}

impl Widget for Frame {
    fn measure(&self, proposal: SizeProposal) -> Size {
        let child = self.child[0].measure(self.child_proposal(proposal));
        Size::new(self.width.extent(proposal.width, child.width), self.height.extent(proposal.height, child.height))
    }

    fn place(&mut self, bounds: Rect, proposal: SizeProposal) {
        let child_proposal = self.child_proposal(proposal);
        let size = self.child[0].measure(child_proposal);
        let origin = Point::new(
            bounds.x() + self.alignment.axis(Axis::Horizontal).offset(bounds.width(), size.width),
            bounds.y() + self.alignment.axis(Axis::Vertical).offset(bounds.height(), size.height)
        );
        self.child[0].place(Rect::new(origin, size), SizeProposal::exact(size));
    }

    fn is_flexible(&self, axis: Axis) -> bool {
        self.axis(axis).is_flexible().unwrap_or_else(|| self.child[0].is_flexible(axis))
    }

    fn children(&self) -> &[Element] {
        &self.child
    }
}


/// Proposes nothing along the fixed axes, so the child keeps its ideal size there.
pub struct FixedSize {
    horizontal: bool,
    vertical: bool,
    child: [Element; 1],
}

impl FixedSize {
    pub fn new(horizontal: bool, vertical: bool, child: impl Into<Element>) -> FixedSize {
        FixedSize { horizontal, vertical, child: [child.into()] }
    }

    pub fn both(child: impl Into<Element>) -> FixedSize {
        FixedSize::new(true, true, child)
    }

    fn is_fixed(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical
        }
    }

    fn child_proposal(&self, proposal: SizeProposal) -> SizeProposal {
        let axis = |axis: Axis| if self.is_fixed(axis) { Dimension::Unspecified } else { proposal.axis(axis) };
        SizeProposal::new(axis(Axis::Horizontal), axis(Axis::Vertical))
    }
}

impl Widget for FixedSize {
    fn measure(&self, proposal: SizeProposal) -> Size {
        self.child[0].measure(self.child_proposal(proposal))
    }

    fn place(&mut self, bounds: Rect, proposal: SizeProposal) {
        let size = self.child[0].measure(self.child_proposal(proposal));
        self.child[0].place(Rect::new(bounds.origin, size), SizeProposal::exact(size));
    }

    fn is_flexible(&self, axis: Axis) -> bool {
        !self.is_fixed(axis) && self.child[0].is_flexible(axis)
    }

    fn children(&self) -> &[Element] {
        &self.child
    }
}
