use crate::math::{Axis, Rect, Size};
use crate::proposal::SizeProposal;
use crate::style::Align;

/// Containers implement this too, so negotiation composes recursively.
pub trait Widget {
    /// Must be a pure function of `proposal`.
    fn measure(&self, proposal: SizeProposal) -> Size;

    fn place(&mut self, bounds: Rect, proposal: SizeProposal);

    fn is_flexible(&self, _axis: Axis) -> bool {
        false
    }

    /// Overrides where the `align` line along `axis` sits inside this widget at `size`.
    fn alignment_guide(&self, _axis: Axis, _align: Align, _size: Size) -> Option<f32> {
        None
    }

    fn children(&self) -> &[Element] {
        &[]
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Placement {
    pub bounds: Rect,
    pub proposal: SizeProposal,
}

pub struct Element {
    widget: Box<dyn Widget>,
    placement: Option<Placement>,
}

impl Element {
    pub fn new(widget: impl Widget + 'static) -> Element {
        Element {
            widget: Box::new(widget),
            placement: None
        }
    }

    pub fn measure(&self, proposal: SizeProposal) -> Size {
        self.widget.measure(proposal.sanitized()).clamp_positive()
    }

    pub fn place(&mut self, bounds: Rect, proposal: SizeProposal) {
        let proposal = proposal.sanitized();
        self.placement = Some(Placement { bounds, proposal });
        self.widget.place(bounds, proposal);
    }

    pub fn is_flexible(&self, axis: Axis) -> bool {
        self.widget.is_flexible(axis)
    }

    pub fn children(&self) -> &[Element] {
        self.widget.children()
    }

    pub fn alignment_guide(&self, axis: Axis, align: Align, size: Size) -> f32 {
        self.widget.alignment_guide(axis, align, size)
            .filter(|guide| guide.is_finite())
            .unwrap_or_else(|| align.guide(size.axis(axis)))
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn clear_placement(&mut self) {
        self.placement = None;
    }
}

impl<W: Widget + 'static> From<W> for Element {
    fn from(value: W) -> Self {
        Element::new(value)
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("placement", &self.placement)
            .field("children", &self.children())
            .finish()
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum Branch<A, B> {
    First(A),
    Second(B),
}

impl<A, B> Branch<A, B> {
    pub fn select(condition: bool, first: impl FnOnce() -> A, second: impl FnOnce() -> B) -> Branch<A, B> {
        if condition {
            Branch::First(first())
        } else {
            Branch::Second(second())
        }
    }
}

impl<A: Widget, B: Widget> Widget for Branch<A, B> {
    fn measure(&self, proposal: SizeProposal) -> Size {
        match self {
            Branch::First(first) => first.measure(proposal),
            Branch::Second(second) => second.measure(proposal)
        }
    }

    fn place(&mut self, bounds: Rect, proposal: SizeProposal) {
        match self {
            Branch::First(first) => first.place(bounds, proposal),
            Branch::Second(second) => second.place(bounds, proposal)
        }
    }

    fn is_flexible(&self, axis: Axis) -> bool {
        match self {
            Branch::First(first) => first.is_flexible(axis),
            Branch::Second(second) => second.is_flexible(axis)
        }
    }

    fn alignment_guide(&self, axis: Axis, align: Align, size: Size) -> Option<f32> {
        match self {
            Branch::First(first) => first.alignment_guide(axis, align, size),
            Branch::Second(second) => second.alignment_guide(axis, align, size)
        }
    }

    fn children(&self) -> &[Element] {
        match self {
            Branch::First(first) => first.children(),
            Branch::Second(second) => second.children()
        }
    }
}

impl<W: Widget> Widget for Option<W> {
    fn measure(&self, proposal: SizeProposal) -> Size {
        match self {
            Some(widget) => widget.measure(proposal),
            None => Size::ZERO
        }
    }

    fn place(&mut self, bounds: Rect, proposal: SizeProposal) {
        if let Some(widget) = self {
            widget.place(bounds, proposal);
        }
    }

    fn is_flexible(&self, axis: Axis) -> bool {
        self.as_ref().is_some_and(|widget| widget.is_flexible(axis))
    }

    fn alignment_guide(&self, axis: Axis, align: Align, size: Size) -> Option<f32> {
        self.as_ref().and_then(|widget| widget.alignment_guide(axis, align, size))
    }

    fn children(&self) -> &[Element] {
        match self {
            Some(widget) => widget.children(),
            None => &[]
        }
    }
}
