use crate::element::{Element, Widget};
use crate::math::{Axis, Rect, Size};
use crate::proposal::SizeProposal;
use crate::style::Align;

/// Moves where one alignment line sits inside its child.
///
/// `guide` gets the child's size and returns the line's position measured from the
/// child's leading edge. Stacks aligned on other lines ignore it.
pub struct AlignmentGuide {
    axis: Axis,
    align: Align,
    guide: Box<dyn Fn(Size) -> f32>,
    child: [Element; 1],
}

impl AlignmentGuide {
    pub fn new(axis: Axis, align: Align, child: impl Into<Element>, guide: impl Fn(Size) -> f32 + 'static) -> AlignmentGuide {
        AlignmentGuide {
            axis,
            align,
            guide: Box::new(guide),
            child: [child.into()]
        }
    }
}

impl Widget for AlignmentGuide {
    fn measure(&self, proposal: SizeProposal) -> Size {
        self.child[0].measure(proposal)
    }

    fn place(&mut self, bounds: Rect, proposal: SizeProposal) {
        self.child[0].place(bounds, proposal);
    }

    fn is_flexible(&self, axis: Axis) -> bool {
        self.child[0].is_flexible(axis)
    }

    fn alignment_guide(&self, axis: Axis, align: Align, size: Size) -> Option<f32> {
        if axis == self.axis && align == self.align {
            Some((self.guide)(size))
        } else {
            Some(self.child[0].alignment_guide(axis, align, size))
        }
    }

    fn children(&self) -> &[Element] {
        &self.child
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::FixedBox;

    #[test]
    fn overrides_only_the_matching_line() {
        let shifted = Element::from(AlignmentGuide::new(Axis::Horizontal, Align::Trailing, FixedBox::new(40.0, 10.0), |size| size.width - 10.0));
        let size = Size::new(40.0, 10.0);

        assert_eq!(shifted.alignment_guide(Axis::Horizontal, Align::Trailing, size), 30.0);
        assert_eq!(shifted.alignment_guide(Axis::Horizontal, Align::Center, size), 20.0);
        assert_eq!(shifted.alignment_guide(Axis::Vertical, Align::Trailing, size), 10.0);
    }

    #[test]
    fn nested_guides_keep_the_inner_override() {
        let inner = AlignmentGuide::new(Axis::Vertical, Align::Leading, FixedBox::new(10.0, 10.0), |_| 3.0);
        let outer = Element::from(AlignmentGuide::new(Axis::Horizontal, Align::Leading, inner, |_| 5.0));
        let size = Size::new(10.0, 10.0);

        assert_eq!(outer.alignment_guide(Axis::Vertical, Align::Leading, size), 3.0);
        assert_eq!(outer.alignment_guide(Axis::Horizontal, Align::Leading, size), 5.0);
    }

    #[test]
    fn non_finite_guides_fall_back_to_the_edge() {
        let broken = Element::from(AlignmentGuide::new(Axis::Horizontal, Align::Center, FixedBox::new(40.0, 10.0), |_| f32::NAN));
        assert_eq!(broken.alignment_guide(Axis::Horizontal, Align::Center, Size::new(40.0, 10.0)), 20.0);
    }
}
