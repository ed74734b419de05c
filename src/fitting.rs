use std::cell::Cell;

use crate::element::{Element, Widget};
use crate::math::{Axis, Rect, Size};
use crate::proposal::SizeProposal;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Hash)]
pub enum FitAxes {
    Horizontal,
    Vertical,
    #[default]
    Both,
}

impl FitAxes {
    pub fn fits(&self, proposal: SizeProposal, size: Size) -> bool {
        match self {
            FitAxes::Horizontal => proposal.fits_axis(Axis::Horizontal, size),
            FitAxes::Vertical => proposal.fits_axis(Axis::Vertical, size),
            FitAxes::Both => proposal.fits(size)
        }
    }
}

/// Index of the first candidate whose measured size fits `proposal` on every finite axis.
///
/// When nothing fits the last candidate is returned anyway. `None` only for an empty list.
pub fn select_fitting(proposal: SizeProposal, candidates: &[Element]) -> Option<usize> {
    select_fitting_in(FitAxes::Both, proposal, candidates)
}

pub fn select_fitting_in(axes: FitAxes, proposal: SizeProposal, candidates: &[Element]) -> Option<usize> {
    let proposal = proposal.sanitized();
    let last = candidates.len().checked_sub(1)?;
    for (index, candidate) in candidates.iter().enumerate() {
        let size = candidate.measure(proposal);
        if axes.fits(proposal, size) {
            log::debug!("candidate {index} fits {:?} at {:?}", proposal, size);
            return Some(index);
        }
    }
    log::debug!("no candidate fits {:?}, falling back to the last of {}", proposal, candidates.len());
    Some(last)
}


pub struct ViewThatFits {
    axes: FitAxes,
    candidates: Vec<Element>,
    selected: Cell<Option<Selection>>,
}

#[derive(Copy, Clone, PartialEq, Debug)]
struct Selection {
    proposal: SizeProposal,
    index: usize,
    size: Size,
}

impl ViewThatFits {
    pub fn new(candidates: Vec<Element>) -> ViewThatFits {
        ViewThatFits::in_axes(FitAxes::Both, candidates)
    }

    pub fn in_axes(axes: FitAxes, candidates: Vec<Element>) -> ViewThatFits {
        ViewThatFits {
            axes,
            candidates,
            selected: Cell::new(None)
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected.get().map(|selection| selection.index)
    }

    fn select(&self, proposal: SizeProposal) -> Option<Selection> {
        let index = select_fitting_in(self.axes, proposal, &self.candidates)?;
        let size = self.candidates[index].measure(proposal);
        let selection = Selection { proposal, index, size };
        self.selected.set(Some(selection));
        Some(selection)
    }
}

impl Widget for ViewThatFits {
    fn measure(&self, proposal: SizeProposal) -> Size {
        self.select(proposal.sanitized()).map_or(Size::ZERO, |selection| selection.size)
    }

    fn place(&mut self, bounds: Rect, proposal: SizeProposal) {
        let proposal = proposal.sanitized();
        // parents place with the measured size, which must not trigger a new choice
        let selection = match self.selected.get() {
            Some(selection) if selection.proposal == proposal || SizeProposal::exact(selection.size) == proposal => Some(selection),
            _ => self.select(proposal)
        };

        for (index, candidate) in self.candidates.iter_mut().enumerate() {
            match selection {
                Some(selection) if selection.index == index => {
                    candidate.place(Rect::new(bounds.origin, selection.size), SizeProposal::exact(selection.size));
                }
                _ => candidate.clear_placement()
            }
        }
    }

    fn is_flexible(&self, axis: Axis) -> bool {
        self.candidates.iter().any(|candidate| candidate.is_flexible(axis))
    }

    fn children(&self) -> &[Element] {
        &self.candidates
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;
    use crate::proposal::Dimension;
    use crate::widgets::{Fill, FixedBox, Text};

    fn candidates(sizes: &[(f32, f32)]) -> Vec<Element> {
        sizes.iter().map(|&(w, h)| FixedBox::new(w, h).into()).collect()
    }

    #[test]
    fn first_fitting_candidate_wins() {
        let list = candidates(&[(100.0, 50.0), (200.0, 50.0), (300.0, 50.0)]);
        assert_eq!(select_fitting(SizeProposal::new(150.0, 100.0), &list), Some(0));
        assert_eq!(select_fitting(SizeProposal::new(250.0, 40.0), &list), Some(2));
    }

    #[test]
    fn later_candidate_when_earlier_ones_overflow() {
        let list = candidates(&[(300.0, 50.0), (200.0, 50.0), (100.0, 50.0)]);
        assert_eq!(select_fitting(SizeProposal::new(250.0, 100.0), &list), Some(1));
    }

    #[test]
    fn falls_back_to_last() {
        let list = candidates(&[(100.0, 50.0), (200.0, 50.0), (300.0, 50.0)]);
        assert_eq!(select_fitting(SizeProposal::new(10.0, 10.0), &list), Some(2));
        assert_eq!(select_fitting(SizeProposal::UNSPECIFIED, &[]), None);
    }

    #[test]
    fn unbounded_axes_accept_anything() {
        let list = candidates(&[(1000.0, 1000.0), (1.0, 1.0)]);
        assert_eq!(select_fitting(SizeProposal::new(Dimension::Infinite, Dimension::Unspecified), &list), Some(0));
    }

    #[test]
    fn fit_axes_restrict_the_check() {
        let list = candidates(&[(100.0, 500.0), (300.0, 10.0)]);
        let proposal = SizeProposal::new(150.0, 100.0);
        assert_eq!(select_fitting_in(FitAxes::Horizontal, proposal, &list), Some(0));
        assert_eq!(select_fitting_in(FitAxes::Vertical, proposal, &list), Some(1));
        assert_eq!(select_fitting_in(FitAxes::Both, proposal, &list), Some(1));
    }

    #[test]
    fn only_the_selected_candidate_is_placed() {
        let full = Text::new("one two three").with_metrics(1.0, 10.0);
        let clipped = full.clone().with_line_limit(1);
        let mut view = ViewThatFits::new(vec![full.into(), clipped.into()]);
        let proposal = SizeProposal::new(7.0, 10.0);

        let size = view.measure(proposal);
        assert_eq!(view.selected(), Some(1));
        assert_eq!(size, Size::new(7.0, 10.0));

        view.place(Rect::new(Point::new(0.0, 0.0), size), proposal);
        assert!(view.children()[0].placement().is_none());
        assert!(view.children()[1].placement().is_some());
    }

    #[test]
    fn placing_at_the_measured_size_keeps_the_choice() {
        let mut view = ViewThatFits::new(candidates(&[(100.0, 50.0), (200.0, 50.0), (300.0, 50.0)]));
        let size = view.measure(SizeProposal::new(10.0, 10.0));
        assert_eq!(size, Size::new(300.0, 50.0));

        view.place(Rect::new(Point::new(4.0, 0.0), size), SizeProposal::exact(size));
        assert_eq!(view.selected(), Some(2));
        let placed: Vec<_> = view.children().iter().map(|c| c.placement().map(|p| p.bounds)).collect();
        assert_eq!(placed, vec![None, None, Some(Rect::from_xywh(4.0, 0.0, 300.0, 50.0))]);
    }

    #[test]
    fn placing_with_a_new_proposal_chooses_again() {
        let mut view = ViewThatFits::new(candidates(&[(100.0, 50.0), (300.0, 50.0)]));
        view.measure(SizeProposal::new(10.0, 10.0));
        assert_eq!(view.selected(), Some(1));

        view.place(Rect::from_xywh(0.0, 0.0, 150.0, 60.0), SizeProposal::new(150.0, 60.0));
        assert_eq!(view.selected(), Some(0));
        assert_eq!(view.children()[0].placement().map(|p| p.bounds.size()), Some(Size::new(100.0, 50.0)));
    }

    #[test]
    fn flexible_when_any_candidate_is() {
        let view = ViewThatFits::new(vec![FixedBox::new(10.0, 10.0).into(), Fill::min(5.0, 5.0).into()]);
        assert!(view.is_flexible(Axis::Horizontal));

        let rigid = ViewThatFits::new(candidates(&[(1.0, 1.0)]));
        assert!(!rigid.is_flexible(Axis::Vertical));
    }
}
