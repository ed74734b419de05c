use std::cell::RefCell;

use crate::element::{Element, Widget};
use crate::grid::{GridCache, GridLayout};
use crate::math::{Axis, Point, Rect, Size};
use crate::overlay::{OverlayCache, OverlayLayout};
use crate::proposal::SizeProposal;
use crate::stack::{StackCache, StackLayout};


/// A container's negotiation strategy.
///
/// `measure` and `place` may be called independently and in any order. The cache
/// only saves work: `place` with a cold cache, or one computed for a different
/// proposal, recomputes what it needs.
pub trait Layout {
    type Cache: Default;

    fn measure(&self, proposal: SizeProposal, children: &[Element], cache: &mut Self::Cache) -> Size;

    /// Pass 2: assigns every child a rectangle inside `bounds` and places it with a
    /// proposal equal to the size it was measured at.
    fn place(&self, bounds: Rect, proposal: SizeProposal, children: &mut [Element], cache: &mut Self::Cache);

    fn is_flexible(&self, axis: Axis, children: &[Element]) -> bool {
        children.iter().any(|child| child.is_flexible(axis))
    }
}


pub struct Container<L: Layout> {
    layout: L,
    children: Vec<Element>,
    cache: RefCell<L::Cache>,
}

impl<L: Layout> Container<L> {
    pub fn new(layout: L) -> Container<L> {
        Container::with_children(layout, Vec::new())
    }

    pub fn with_children(layout: L, children: Vec<Element>) -> Container<L> {
        Container {
            layout,
            children,
            cache: RefCell::new(L::Cache::default())
        }
    }

    pub fn add_child(&mut self, element: impl Into<Element>) {
        self.invalidate();
        self.children.push(element.into());
    }

    pub fn child(mut self, element: impl Into<Element>) -> Container<L> {
        self.add_child(element);
        self
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: L) {
        self.invalidate();
        self.layout = layout;
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        self.invalidate();
        &mut self.children
    }

    pub fn invalidate(&mut self) {
        *self.cache.get_mut() = L::Cache::default();
    }
}

impl<L: Layout> Widget for Container<L> {
    fn measure(&self, proposal: SizeProposal) -> Size {
        let mut cache = self.cache.borrow_mut();
        self.layout.measure(proposal, &self.children, &mut cache)
    }

    fn place(&mut self, bounds: Rect, proposal: SizeProposal) {
        // the cache only lives for one negotiation pass
        let mut cache = std::mem::take(self.cache.get_mut());
        self.layout.place(bounds, proposal, &mut self.children, &mut cache);
    }

    fn is_flexible(&self, axis: Axis) -> bool {
        self.layout.is_flexible(axis, &self.children)
    }

    fn children(&self) -> &[Element] {
        &self.children
    }
}


#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AnyLayout {
    Stack(StackLayout),
    Grid(GridLayout),
    Overlay(OverlayLayout),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnyLayoutCache {
    #[default]
    Cold,
    Stack(StackCache),
    Grid(GridCache),
    Overlay(OverlayCache),
}

impl AnyLayoutCache {
    fn stack(&mut self) -> &mut StackCache {
        if !matches!(self, AnyLayoutCache::Stack(_)) {
            *self = AnyLayoutCache::Stack(StackCache::default());
        }
        match self {
            AnyLayoutCache::Stack(cache) => cache,
            _ => unreachable!("cache was just reset to a stack cache"),
        }
    }

    fn grid(&mut self) -> &mut GridCache {
        if !matches!(self, AnyLayoutCache::Grid(_)) {
            *self = AnyLayoutCache::Grid(GridCache::default());
        }
        match self {
            AnyLayoutCache::Grid(cache) => cache,
            _ => unreachable!("cache was just reset to a grid cache"),
        }
    }

    fn overlay(&mut self) -> &mut OverlayCache {
        if !matches!(self, AnyLayoutCache::Overlay(_)) {
            *self = AnyLayoutCache::Overlay(OverlayCache::default());
        }
        match self {
            AnyLayoutCache::Overlay(cache) => cache,
            _ => unreachable!("cache was just reset to an overlay cache"),
        }
    }
}

impl From<StackLayout> for AnyLayout {
    fn from(value: StackLayout) -> Self {
        AnyLayout::Stack(value)
    }
}

impl From<GridLayout> for AnyLayout {
    fn from(value: GridLayout) -> Self {
        AnyLayout::Grid(value)
    }
}

impl From<OverlayLayout> for AnyLayout {
    fn from(value: OverlayLayout) -> Self {
        AnyLayout::Overlay(value)
    }
}

impl Layout for AnyLayout {
    type Cache = AnyLayoutCache;

    fn measure(&self, proposal: SizeProposal, children: &[Element], cache: &mut AnyLayoutCache) -> Size {
        match self {
            AnyLayout::Stack(layout) => layout.measure(proposal, children, cache.stack()),
            AnyLayout::Grid(layout) => layout.measure(proposal, children, cache.grid()),
            AnyLayout::Overlay(layout) => layout.measure(proposal, children, cache.overlay())
        }
    }

    fn place(&self, bounds: Rect, proposal: SizeProposal, children: &mut [Element], cache: &mut AnyLayoutCache) {
        match self {
            AnyLayout::Stack(layout) => layout.place(bounds, proposal, children, cache.stack()),
            AnyLayout::Grid(layout) => layout.place(bounds, proposal, children, cache.grid()),
            AnyLayout::Overlay(layout) => layout.place(bounds, proposal, children, cache.overlay())
        }
    }
}


pub struct Root {
    element: Element,
}

impl Root {
    pub fn new(element: impl Into<Element>) -> Root {
        Root { element: element.into() }
    }

    /// Measures the tree for `proposal`, then places it at the origin with the same proposal.
    pub fn negotiate(&mut self, proposal: impl Into<SizeProposal>) -> Rect {
        let proposal = proposal.into().sanitized();
        let size = self.element.measure(proposal);
        let bounds = Rect::new(Point::new(0.0, 0.0), size);
        log::debug!("root negotiated {:?} for {:?}", size, proposal);
        self.element.place(bounds, proposal);
        bounds
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}
