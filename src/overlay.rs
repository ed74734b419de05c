use crate::element::Element;
use crate::guide::GuideSpan;
use crate::layout::Layout;
use crate::math::{Axis, Point, Rect, Size};
use crate::proposal::SizeProposal;
use crate::style::Alignment;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct OverlayLayout {
    pub alignment: Alignment
}

impl OverlayLayout {
    pub fn new(alignment: Alignment) -> OverlayLayout {
        OverlayLayout { alignment }
    }

    fn spans(&self, children: &[Element], sizes: &[Size]) -> (GuideSpan, GuideSpan) {
        let span = |axis: Axis| GuideSpan::new(axis, self.alignment.axis(axis), children, sizes);
        (span(Axis::Horizontal), span(Axis::Vertical))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayCache {
    proposal: Option<SizeProposal>,
    sizes: Vec<Size>,
}

impl OverlayCache {
    fn is_warm_for(&self, proposal: SizeProposal, child_count: usize) -> bool {
        self.proposal == Some(proposal) && self.sizes.len() == child_count
    }

    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }
}

impl Layout for OverlayLayout {
    type Cache = OverlayCache;

    fn measure(&self, proposal: SizeProposal, children: &[Element], cache: &mut OverlayCache) -> Size {
        let proposal = proposal.sanitized();
        let sizes: Vec<Size> = children.iter().map(|child| child.measure(proposal)).collect();
        let (horizontal, vertical) = self.spans(children, &sizes);
        let size = proposal.clamp(Size::new(horizontal.extent(), vertical.extent()));

        log::trace!("overlay measured {} children for {:?}: {:?}", children.len(), proposal, size);
        *cache = OverlayCache { proposal: Some(proposal), sizes };
        size
    }

    fn place(&self, bounds: Rect, proposal: SizeProposal, children: &mut [Element], cache: &mut OverlayCache) {
        let proposal = proposal.sanitized();
        if !cache.is_warm_for(proposal, children.len()) {
            log::trace!("overlay cache is cold for {:?}, measuring inline", proposal);
            self.measure(proposal, children, cache);
        }

        let (horizontal, vertical) = self.spans(children, &cache.sizes);
        let x = bounds.x() + self.alignment.horizontal.offset(bounds.width(), horizontal.extent());
        let y = bounds.y() + self.alignment.vertical.offset(bounds.height(), vertical.extent());

        log::trace!("overlay placing {} children in {:?}", children.len(), bounds);
        for (index, (child, &size)) in children.iter_mut().zip(&cache.sizes).enumerate() {
            let origin = Point::new(x + horizontal.offset(index), y + vertical.offset(index));
            child.place(Rect::new(origin, size), SizeProposal::exact(size));
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Align;
    use crate::widgets::{AlignmentGuide, Fill, FixedBox};

    fn layered() -> Vec<Element> {
        vec![FixedBox::new(100.0, 40.0).into(), FixedBox::new(30.0, 20.0).into()]
    }

    fn origins(children: &[Element]) -> Vec<(f32, f32)> {
        children.iter()
            .filter_map(|child| child.placement().map(|p| (p.bounds.x(), p.bounds.y())))
            .collect()
    }

    #[test]
    fn size_is_the_largest_child() {
        let mut cache = OverlayCache::default();
        let size = OverlayLayout::new(Alignment::CENTER).measure(SizeProposal::UNSPECIFIED, &layered(), &mut cache);
        assert_eq!(size, Size::new(100.0, 40.0));
        assert_eq!(cache.sizes().len(), 2);
    }

    #[test]
    fn children_share_the_alignment_point() {
        let bounds = Rect::from_xywh(0.0, 0.0, 100.0, 40.0);
        let cases = [
            (Alignment::TOP_LEADING, (0.0, 0.0)),
            (Alignment::CENTER, (35.0, 10.0)),
            (Alignment::BOTTOM_TRAILING, (70.0, 20.0)),
        ];
        for (alignment, expected) in cases {
            let mut children = layered();
            OverlayLayout::new(alignment).place(bounds, SizeProposal::exact(bounds.size()), &mut children, &mut OverlayCache::default());
            assert_eq!(origins(&children), vec![(0.0, 0.0), expected], "{alignment:?}");
        }
    }

    #[test]
    fn flexible_background_takes_the_proposal() {
        let layout = OverlayLayout::new(Alignment::CENTER);
        let mut children: Vec<Element> = vec![Fill::new().into(), FixedBox::new(30.0, 20.0).into()];
        let mut cache = OverlayCache::default();
        let proposal = SizeProposal::new(200.0, 100.0);

        let size = layout.measure(proposal, &children, &mut cache);
        assert_eq!(size, Size::new(200.0, 100.0));
        assert!(layout.is_flexible(Axis::Horizontal, &children));

        layout.place(Rect::new(Point::new(0.0, 0.0), size), proposal, &mut children, &mut cache);
        assert_eq!(origins(&children), vec![(0.0, 0.0), (85.0, 40.0)]);
    }

    #[test]
    fn guides_offset_a_badge() {
        let layout = OverlayLayout::new(Alignment::TOP_LEADING);
        let badge = AlignmentGuide::new(Axis::Vertical, Align::Leading, FixedBox::new(10.0, 10.0), |size| size.height / 2.0);
        let mut children: Vec<Element> = vec![FixedBox::new(50.0, 50.0).into(), badge.into()];
        let mut cache = OverlayCache::default();

        let size = layout.measure(SizeProposal::UNSPECIFIED, &children, &mut cache);
        assert_eq!(size, Size::new(50.0, 55.0));

        layout.place(Rect::new(Point::new(0.0, 0.0), size), SizeProposal::UNSPECIFIED, &mut children, &mut cache);
        assert_eq!(origins(&children), vec![(0.0, 5.0), (0.0, 0.0)]);
    }

    #[test]
    fn empty_overlay_is_zero_sized() {
        let mut cache = OverlayCache::default();
        assert_eq!(OverlayLayout::default().measure(SizeProposal::new(10.0, 10.0), &[], &mut cache), Size::ZERO);
    }
}
