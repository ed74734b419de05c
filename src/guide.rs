use crate::element::Element;
use crate::math::{Axis, Size};
use crate::style::Align;

/// Children lined up on one shared alignment line along `axis`.
///
/// `lead` is the distance from the leading edge of the span to the line; each child
/// sits at `lead - guide` so that its own guide lands on the line.
pub(crate) struct GuideSpan {
    lead: f32,
    extent: f32,
    guides: Vec<f32>,
}

impl GuideSpan {
    pub(crate) fn new(axis: Axis, align: Align, children: &[Element], sizes: &[Size]) -> GuideSpan {
        let guides: Vec<f32> = children.iter().zip(sizes)
            .map(|(child, &size)| child.alignment_guide(axis, align, size))
            .collect();
        if guides.is_empty() {
            return GuideSpan { lead: 0.0, extent: 0.0, guides };
        }

        let lead = guides.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let trail = guides.iter().zip(sizes)
            .map(|(guide, size)| size.axis(axis) - guide)
            .fold(f32::NEG_INFINITY, f32::max);
        GuideSpan { lead, extent: (lead + trail).max(0.0), guides }
    }

    pub(crate) fn extent(&self) -> f32 {
        self.extent
    }

    pub(crate) fn offset(&self, index: usize) -> f32 {
        self.guides.get(index).map_or(0.0, |guide| self.lead - guide)
    }
}
