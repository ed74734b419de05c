use crate::math::Axis;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Hash)]
pub enum Align {
    #[default]
    Leading,
    Center,
    Trailing
}

impl Align {
    pub fn offset(&self, extent: f32, item: f32) -> f32 {
        let leftover = extent - item;
        if !leftover.is_finite() {
            return 0.0;
        }
        match self {
            Align::Leading => 0.0,
            Align::Center => leftover / 2.0,
            Align::Trailing => leftover
        }
    }

    pub fn guide(&self, extent: f32) -> f32 {
        if !extent.is_finite() {
            return 0.0;
        }
        match self {
            Align::Leading => 0.0,
            Align::Center => extent / 2.0,
            Align::Trailing => extent
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Hash)]
pub struct Alignment {
    pub horizontal: Align,
    pub vertical: Align
}

impl Alignment {
    pub const TOP_LEADING: Alignment = Alignment { horizontal: Align::Leading, vertical: Align::Leading };
    pub const CENTER: Alignment = Alignment { horizontal: Align::Center, vertical: Align::Center };
    pub const BOTTOM_TRAILING: Alignment = Alignment { horizontal: Align::Trailing, vertical: Align::Trailing };

    pub fn new(horizontal: Align, vertical: Align) -> Alignment {
        Alignment { horizontal, vertical }
    }

    pub fn axis(&self, axis: Axis) -> Align {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StackStyle {
    pub axis: Axis,
    pub spacing: f32,
    pub alignment: Align
}

impl StackStyle {
    pub fn horizontal(spacing: f32) -> StackStyle {
        StackStyle { axis: Axis::Horizontal, spacing, alignment: Align::Leading }
    }

    pub fn vertical(spacing: f32) -> StackStyle {
        StackStyle { axis: Axis::Vertical, spacing, alignment: Align::Leading }
    }

    pub fn with_alignment(self, alignment: Align) -> StackStyle {
        StackStyle { alignment, ..self }
    }
}

impl Default for StackStyle {
    fn default() -> Self {
        StackStyle::vertical(0.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GridColumns {
    Fixed(usize),
    Adaptive { minimum: f32, maximum: f32 }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridStyle {
    pub columns: GridColumns,
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    pub alignment: Alignment
}

impl GridStyle {
    pub fn fixed(columns: usize) -> GridStyle {
        GridStyle {
            columns: GridColumns::Fixed(columns),
            horizontal_spacing: 0.0,
            vertical_spacing: 0.0,
            alignment: Alignment::CENTER
        }
    }

    pub fn adaptive(minimum: f32, maximum: f32) -> GridStyle {
        GridStyle {
            columns: GridColumns::Adaptive { minimum, maximum },
            ..GridStyle::fixed(1)
        }
    }

    pub fn with_spacing(self, horizontal_spacing: f32, vertical_spacing: f32) -> GridStyle {
        GridStyle { horizontal_spacing, vertical_spacing, ..self }
    }

    pub fn with_alignment(self, alignment: Alignment) -> GridStyle {
        GridStyle { alignment, ..self }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutDefaults {
    pub spacing: f32,
    pub stack_alignment: Align,
    pub grid_alignment: Alignment,
    pub overlay_alignment: Alignment
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        LayoutDefaults {
            spacing: 8.0,
            stack_alignment: Align::Center,
            grid_alignment: Alignment::CENTER,
            overlay_alignment: Alignment::CENTER
        }
    }
}
