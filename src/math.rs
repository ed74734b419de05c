use std::ops::Add;
use bytemuck::{Pod, Zeroable};


#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    pub fn cross(&self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    pub fn from_axes(main_axis: Axis, main: f32, cross: f32) -> Point {
        match main_axis {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main)
        }
    }

    pub fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from(value: (f32, f32)) -> Self {
        Point { x: value.0, y: value.1 }
    }
}


#[derive(Copy, Clone, PartialEq, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct Size {
    pub width: f32,
    pub height: f32
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub fn new(width: f32, height: f32) -> Size {
        Size { width, height }
    }

    pub fn from_axes(main_axis: Axis, main_size: f32, cross_size: f32) -> Size {
        match main_axis {
            Axis::Horizontal => Size::new(main_size, cross_size),
            Axis::Vertical => Size::new(cross_size, main_size)
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height
        }
    }

    pub fn clamp_positive(&self) -> Size {
        fn clamp(value: f32) -> f32 {
            if value.is_nan() { 0.0 } else { value.max(0.0) }
        }
        Size {
            width: clamp(self.width),
            height: clamp(self.height)
        }
    }
}

impl From<(f32, f32)> for Size {
    fn from(value: (f32, f32)) -> Self {
        Size::new(value.0, value.1)
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Self) -> Self::Output {
        Size {
            width: self.width + rhs.width,
            height: self.height + rhs.height
        }
    }
}


#[derive(Copy, Clone, PartialEq, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Rect {
        Rect { origin, size }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Point::new(x, y), Size::new(w, h))
    }

    pub fn from_lrtb(left: f32, right: f32, top: f32, bottom: f32) -> Rect {
        Rect::from_xywh(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn top_left(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn clamp_positive(&self) -> Rect {
        Rect::new(self.origin, self.size.clamp_positive())
    }

    pub fn shrink_by(&self, insets: SizeRect) -> Rect {
        Rect::from_lrtb(self.left() + insets.left, self.right() - insets.right, self.top() + insets.top, self.bottom() - insets.bottom)
            .clamp_positive()
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Default, Zeroable, Pod)]
#[repr(C)]
pub struct SizeRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32
}


impl SizeRect {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> SizeRect {
        SizeRect { left, right, top, bottom }
    }

    pub fn from_axes(horizontal: f32, vertical: f32) -> SizeRect {
        SizeRect::new(horizontal, horizontal, vertical, vertical)
    }

    pub fn sum_axis(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left + self.right,
            Axis::Vertical => self.top + self.bottom
        }
    }

    pub fn sum_axes(&self) -> Size {
        Size {
            width: self.left + self.right,
            height: self.top + self.bottom
        }
    }
}

impl From<f32> for SizeRect {
    fn from(value: f32) -> Self {
        SizeRect::new(value, value, value, value)
    }
}

impl From<(f32, f32)> for SizeRect {
    fn from(value: (f32, f32)) -> Self {
        SizeRect::from_axes(value.0, value.1)
    }
}

impl From<(f32, f32, f32, f32)> for SizeRect {
    fn from(value: (f32, f32, f32, f32)) -> Self {
        SizeRect::new(value.0, value.1, value.2, value.3)
    }
}
