use crate::element::Widget;
use crate::math::{Axis, Rect, Size};
use crate::proposal::SizeProposal;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedBox {
    size: Size
}

impl FixedBox {
    pub fn new(width: f32, height: f32) -> FixedBox {
        FixedBox { size: Size::new(width, height).clamp_positive() }
    }
}

impl Widget for FixedBox {
    fn measure(&self, _proposal: SizeProposal) -> Size {
        self.size
    }

    fn place(&mut self, _bounds: Rect, _proposal: SizeProposal) {}
}


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fill {
    min: Size,
    max: Size
}

impl Fill {
    pub fn new() -> Fill {
        Fill::min(0.0, 0.0)
    }

    pub fn min(width: f32, height: f32) -> Fill {
        Fill {
            min: Size::new(width, height).clamp_positive(),
            max: Size::new(f32::INFINITY, f32::INFINITY)
        }
    }

    pub fn with_max(self, width: f32, height: f32) -> Fill {
        let max = Size::new(width.max(self.min.width), height.max(self.min.height));
        Fill { max, ..self }
    }
}

impl Default for Fill {
    fn default() -> Self {
        Fill::new()
    }
}

impl Widget for Fill {
    fn measure(&self, proposal: SizeProposal) -> Size {
        Size::new(
            proposal.width.resolve(self.min.width, self.max.width),
            proposal.height.resolve(self.min.height, self.max.height)
        )
    }

    fn place(&mut self, _bounds: Rect, _proposal: SizeProposal) {}

    fn is_flexible(&self, axis: Axis) -> bool {
        self.max.axis(axis) > self.min.axis(axis)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::Dimension;

    #[test]
    fn fixed_box_ignores_proposal() {
        let fixed = FixedBox::new(80.0, 40.0);
        assert_eq!(fixed.measure(SizeProposal::ZERO), Size::new(80.0, 40.0));
        assert_eq!(fixed.measure(SizeProposal::INFINITE), Size::new(80.0, 40.0));
        assert!(!fixed.is_flexible(Axis::Horizontal));
    }

    #[test]
    fn fill_resolves_each_axis() {
        let fill = Fill::min(10.0, 20.0).with_max(100.0, 20.0);
        let size = fill.measure(SizeProposal::new(Dimension::Infinite, 500.0));
        assert_eq!(size, Size::new(100.0, 20.0));
        assert_eq!(fill.measure(SizeProposal::UNSPECIFIED), Size::new(10.0, 20.0));
        assert_eq!(fill.measure(SizeProposal::new(50.0, 0.0)), Size::new(50.0, 20.0));

        assert!(fill.is_flexible(Axis::Horizontal));
        assert!(!fill.is_flexible(Axis::Vertical));
    }
}
