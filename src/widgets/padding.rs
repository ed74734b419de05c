use crate::element::{Element, Widget};
use crate::math::{Axis, Rect, Size, SizeRect};
use crate::proposal::{Dimension, SizeProposal};

pub struct Padding {
    insets: SizeRect,
    child: [Element; 1],
}

impl Padding {
    pub fn new(insets: impl Into<SizeRect>, child: impl Into<Element>) -> Padding {
        let insets = insets.into();
        Padding {
            insets: SizeRect::new(insets.left.max(0.0), insets.right.max(0.0), insets.top.max(0.0), insets.bottom.max(0.0)),
            child: [child.into()]
        }
    }

    fn inner_proposal(&self, proposal: SizeProposal) -> SizeProposal {
        let shrink = |dimension: Dimension, amount: f32| match dimension {
            Dimension::Finite(value) => Dimension::Finite((value - amount).max(0.0)),
            other => other
        };
        SizeProposal::new(
            shrink(proposal.width, self.insets.sum_axis(Axis::Horizontal)),
            shrink(proposal.height, self.insets.sum_axis(Axis::Vertical))
        )
    }
}

impl Widget for Padding {
    fn measure(&self, proposal: SizeProposal) -> Size {
        self.child[0].measure(self.inner_proposal(proposal)) + self.insets.sum_axes()
    }

    fn place(&mut self, bounds: Rect, _proposal: SizeProposal) {
        let inner = bounds.shrink_by(self.insets);
        self.child[0].place(inner, SizeProposal::exact(inner.size()));
    }

    fn is_flexible(&self, axis: Axis) -> bool {
        self.child[0].is_flexible(axis)
    }

    fn children(&self) -> &[Element] {
        &self.child
    }
}
