use crate::element::Element;
use crate::flex::{distribute_leftover, total_spacing};
use crate::guide::GuideSpan;
use crate::layout::Layout;
use crate::math::{Point, Rect, Size};
use crate::proposal::{Dimension, SizeProposal};
use crate::style::{Align, StackStyle};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct StackLayout {
    pub style: StackStyle
}

impl StackLayout {
    pub fn new(style: StackStyle) -> StackLayout {
        StackLayout { style }
    }

    pub fn horizontal(spacing: f32) -> StackLayout {
        StackLayout::new(StackStyle::horizontal(spacing))
    }

    pub fn vertical(spacing: f32) -> StackLayout {
        StackLayout::new(StackStyle::vertical(spacing))
    }

    pub fn with_alignment(self, alignment: Align) -> StackLayout {
        StackLayout::new(self.style.with_alignment(alignment))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackCache {
    proposal: Option<SizeProposal>,
    sizes: Vec<Size>,
    size: Size,
}

impl StackCache {
    fn is_warm_for(&self, proposal: SizeProposal, child_count: usize) -> bool {
        self.proposal == Some(proposal) && self.sizes.len() == child_count
    }

    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }
}

impl Layout for StackLayout {
    type Cache = StackCache;

    fn measure(&self, proposal: SizeProposal, children: &[Element], cache: &mut StackCache) -> Size {
        let proposal = proposal.sanitized();
        let main_axis = self.style.axis;
        let cross_axis = main_axis.cross();
        let main_proposal = proposal.axis(main_axis);
        let cross_proposal = proposal.axis(cross_axis);
        let spacing = total_spacing(self.style.spacing, children.len());

        let mut sizes = vec![Size::ZERO; children.len()];
        let mut flexible = Vec::new();
        let mut fixed_main: f32 = 0.0;
        for (index, child) in children.iter().enumerate() {
            if child.is_flexible(main_axis) {
                flexible.push(index);
                continue;
            }
            let size = child.measure(SizeProposal::from_axes(main_axis, Dimension::Unspecified, cross_proposal));
            fixed_main += size.axis(main_axis);
            sizes[index] = size;
        }

        match main_proposal.finite() {
            Some(extent) => {
                let leftover = extent - fixed_main - spacing;
                let shares = distribute_leftover(leftover, flexible.len());
                for (&index, share) in flexible.iter().zip(shares) {
                    sizes[index] = children[index].measure(SizeProposal::from_axes(main_axis, Dimension::Finite(share), cross_proposal));
                }
            }
            None => {
                for &index in &flexible {
                    sizes[index] = children[index].measure(SizeProposal::from_axes(main_axis, Dimension::Unspecified, cross_proposal));
                }
            }
        }

        let main_total = sizes.iter().map(|size| size.axis(main_axis)).sum::<f32>() + spacing;
        let cross_span = GuideSpan::new(cross_axis, self.style.alignment, children, &sizes).extent();
        let size = Size::from_axes(main_axis, main_proposal.clamp(main_total), cross_proposal.clamp(cross_span));

        log::trace!("stack {:?} measured {} children ({} flexible) for {:?}: {:?}", main_axis, children.len(), flexible.len(), proposal, size);
        *cache = StackCache { proposal: Some(proposal), sizes, size };
        size
    }

    fn place(&self, bounds: Rect, proposal: SizeProposal, children: &mut [Element], cache: &mut StackCache) {
        let proposal = proposal.sanitized();
        if !cache.is_warm_for(proposal, children.len()) {
            log::trace!("stack cache is cold for {:?}, measuring inline", proposal);
            self.measure(proposal, children, cache);
        }

        let main_axis = self.style.axis;
        let cross_axis = main_axis.cross();
        let spacing = self.style.spacing.max(0.0);
        let cross_start = bounds.origin.axis(cross_axis);
        let cross_extent = bounds.size.axis(cross_axis);

        let span = GuideSpan::new(cross_axis, self.style.alignment, children, &cache.sizes);
        let content_start = cross_start + self.style.alignment.offset(cross_extent, span.extent());

        log::trace!("stack {:?} placing {} children in {:?}", main_axis, children.len(), bounds);
        let mut curr = bounds.origin.axis(main_axis);
        for (index, (child, &size)) in children.iter_mut().zip(&cache.sizes).enumerate() {
            let cross = content_start + span.offset(index);
            let child_bounds = Rect::new(Point::from_axes(main_axis, curr, cross), size);
            child.place(child_bounds, SizeProposal::exact(size));
            curr += size.axis(main_axis) + spacing;
        }
    }
}
