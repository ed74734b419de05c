use crate::element::Element;
use crate::flex::total_spacing;
use crate::layout::Layout;
use crate::math::{Point, Rect, Size};
use crate::proposal::{Dimension, SizeProposal};
use crate::style::{Alignment, GridColumns, GridStyle};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridLayout {
    pub style: GridStyle
}

impl GridLayout {
    pub fn new(style: GridStyle) -> GridLayout {
        GridLayout { style }
    }

    pub fn fixed(columns: usize) -> GridLayout {
        GridLayout::new(GridStyle::fixed(columns))
    }

    pub fn adaptive(minimum: f32, maximum: f32) -> GridLayout {
        GridLayout::new(GridStyle::adaptive(minimum, maximum))
    }

    pub fn with_spacing(self, horizontal: f32, vertical: f32) -> GridLayout {
        GridLayout::new(self.style.with_spacing(horizontal, vertical))
    }

    pub fn with_alignment(self, alignment: Alignment) -> GridLayout {
        GridLayout::new(self.style.with_alignment(alignment))
    }

    fn columns_for(&self, width: Dimension, child_count: usize) -> (usize, Option<f32>) {
        let spacing = self.style.horizontal_spacing.max(0.0);
        let (count, column_width) = match self.style.columns {
            GridColumns::Fixed(count) => (count.max(1), None),
            GridColumns::Adaptive { minimum, maximum } => {
                let minimum = minimum.max(0.0);
                let maximum = maximum.max(minimum);
                match width.finite() {
                    Some(width) if minimum + spacing > 0.0 => {
                        let count = (((width + spacing) / (minimum + spacing)).floor() as usize).max(1);
                        let share = (width - spacing * (count - 1) as f32) / count as f32;
                        (count, Some(share.clamp(minimum, maximum)))
                    }
                    _ => (child_count.max(1), Some(minimum))
                }
            }
        };
        (count.min(child_count.max(1)), column_width)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridCache {
    proposal: Option<SizeProposal>,
    column_count: usize,
    column_widths: Vec<f32>,
    row_heights: Vec<f32>,
    cells: Vec<Size>,
}

impl GridCache {
    fn is_warm_for(&self, proposal: SizeProposal, child_count: usize) -> bool {
        self.proposal == Some(proposal) && self.cells.len() == child_count
    }

    pub fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    pub fn row_heights(&self) -> &[f32] {
        &self.row_heights
    }
}

fn offsets(start: f32, extents: &[f32], spacing: f32) -> Vec<f32> {
    let mut curr = start;
    extents.iter()
        .map(|extent| {
            let offset = curr;
            curr += extent + spacing;
            offset
        })
        .collect()
}

impl Layout for GridLayout {
    type Cache = GridCache;

    fn measure(&self, proposal: SizeProposal, children: &[Element], cache: &mut GridCache) -> Size {
        let proposal = proposal.sanitized();
        let (column_count, column_width) = self.columns_for(proposal.width, children.len());
        let row_count = children.len().div_ceil(column_count);

        let cell_proposal = SizeProposal::new(Dimension::from(column_width), Dimension::Unspecified);
        let cells: Vec<Size> = children.iter().map(|child| child.measure(cell_proposal)).collect();

        let mut column_widths = vec![column_width.unwrap_or(0.0); column_count];
        let mut row_heights = vec![0.0f32; row_count];
        for (index, cell) in cells.iter().enumerate() {
            let (row, column) = (index / column_count, index % column_count);
            if column_width.is_none() {
                column_widths[column] = column_widths[column].max(cell.width);
            }
            row_heights[row] = row_heights[row].max(cell.height);
        }

        let width = column_widths.iter().sum::<f32>() + total_spacing(self.style.horizontal_spacing, column_widths.len());
        let height = row_heights.iter().sum::<f32>() + total_spacing(self.style.vertical_spacing, row_heights.len());
        let size = if children.is_empty() {
            Size::ZERO
        } else {
            proposal.clamp(Size::new(width, height))
        };

        log::trace!("grid measured {} cells in {} columns x {} rows for {:?}: {:?}", cells.len(), column_count, row_count, proposal, size);
        *cache = GridCache { proposal: Some(proposal), column_count, column_widths, row_heights, cells };
        size
    }

    fn place(&self, bounds: Rect, proposal: SizeProposal, children: &mut [Element], cache: &mut GridCache) {
        let proposal = proposal.sanitized();
        if !cache.is_warm_for(proposal, children.len()) {
            log::trace!("grid cache is cold for {:?}, measuring inline", proposal);
            self.measure(proposal, children, cache);
        }

        let xs = offsets(bounds.x(), &cache.column_widths, self.style.horizontal_spacing.max(0.0));
        let ys = offsets(bounds.y(), &cache.row_heights, self.style.vertical_spacing.max(0.0));
        let alignment = self.style.alignment;
        log::trace!("grid placing {} cells in {:?}", children.len(), bounds);

        for (index, (child, &cell)) in children.iter_mut().zip(&cache.cells).enumerate() {
            let (row, column) = (index / cache.column_count, index % cache.column_count);
            let x = xs[column] + alignment.horizontal.offset(cache.column_widths[column], cell.width);
            let y = ys[row] + alignment.vertical.offset(cache.row_heights[row], cell.height);
            child.place(Rect::new(Point::new(x, y), cell), SizeProposal::exact(cell));
        }
    }
}
