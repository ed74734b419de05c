use crate::element::{Branch, Element, Widget};
use crate::environment::Environment;
use crate::error::Result;
use crate::fitting::{FitAxes, ViewThatFits};
use crate::grid::GridLayout;
use crate::layout::{Container, Layout};
use crate::overlay::OverlayLayout;
use crate::stack::StackLayout;
use crate::style::{GridColumns, GridStyle, LayoutDefaults};

pub struct ViewBuilder<'env> {
    env: &'env Environment,
    nodes: Vec<Element>,
}

impl<'env> ViewBuilder<'env> {
    pub fn new(env: &'env Environment) -> ViewBuilder<'env> {
        ViewBuilder { env, nodes: Vec::new() }
    }

    pub fn build(env: &Environment, build: impl FnOnce(&mut ViewBuilder<'_>) -> Result<()>) -> Result<Vec<Element>> {
        let mut builder = ViewBuilder::new(env);
        build(&mut builder)?;
        Ok(builder.finish())
    }

    pub fn env(&self) -> &'env Environment {
        self.env
    }

    pub fn push(&mut self, node: impl Into<Element>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    pub fn push_optional<W: Widget + 'static>(&mut self, node: Option<W>) -> &mut Self {
        if let Some(node) = node {
            self.push(node);
        }
        self
    }

    pub fn push_if(&mut self, condition: bool, build: impl FnOnce(&mut Self) -> Result<()>) -> Result<&mut Self> {
        if condition {
            build(self)?;
        }
        Ok(self)
    }

    pub fn push_either<A, B>(&mut self, condition: bool, first: impl FnOnce() -> A, second: impl FnOnce() -> B) -> &mut Self
    where A: Widget + 'static, B: Widget + 'static
    {
        self.push(Branch::select(condition, first, second))
    }

    pub fn for_each<I: IntoIterator>(&mut self, items: I, mut build: impl FnMut(&mut Self, I::Item) -> Result<()>) -> Result<&mut Self> {
        for item in items {
            build(self, item)?;
        }
        Ok(self)
    }

    pub fn with_environment<T: 'static>(&mut self, value: T, children: impl FnOnce(&mut ViewBuilder<'_>) -> Result<()>) -> Result<&mut Self> {
        let scoped = self.env.with(value);
        let nodes = ViewBuilder::build(&scoped, children)?;
        self.nodes.extend(nodes);
        Ok(self)
    }

    pub fn container<L: Layout + 'static>(&mut self, layout: L, children: impl FnOnce(&mut ViewBuilder<'_>) -> Result<()>) -> Result<&mut Self> {
        let nodes = ViewBuilder::build(self.env, children)?;
        Ok(self.push(Container::with_children(layout, nodes)))
    }

    pub fn hstack(&mut self, children: impl FnOnce(&mut ViewBuilder<'_>) -> Result<()>) -> Result<&mut Self> {
        let defaults = *self.env.get::<LayoutDefaults>()?;
        self.container(StackLayout::horizontal(defaults.spacing).with_alignment(defaults.stack_alignment), children)
    }

    pub fn vstack(&mut self, children: impl FnOnce(&mut ViewBuilder<'_>) -> Result<()>) -> Result<&mut Self> {
        let defaults = *self.env.get::<LayoutDefaults>()?;
        self.container(StackLayout::vertical(defaults.spacing).with_alignment(defaults.stack_alignment), children)
    }

    pub fn grid(&mut self, columns: GridColumns, children: impl FnOnce(&mut ViewBuilder<'_>) -> Result<()>) -> Result<&mut Self> {
        let defaults = *self.env.get::<LayoutDefaults>()?;
        let style = GridStyle { columns, ..GridStyle::fixed(1) }
            .with_spacing(defaults.spacing, defaults.spacing)
            .with_alignment(defaults.grid_alignment);
        self.container(GridLayout::new(style), children)
    }

    pub fn zstack(&mut self, children: impl FnOnce(&mut ViewBuilder<'_>) -> Result<()>) -> Result<&mut Self> {
        let defaults = *self.env.get::<LayoutDefaults>()?;
        self.container(OverlayLayout::new(defaults.overlay_alignment), children)
    }

    pub fn fitting(&mut self, axes: FitAxes, candidates: impl FnOnce(&mut ViewBuilder<'_>) -> Result<()>) -> Result<&mut Self> {
        let nodes = ViewBuilder::build(self.env, candidates)?;
        Ok(self.push(ViewThatFits::in_axes(axes, nodes)))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn finish(self) -> Vec<Element> {
        self.nodes
    }
}


#[macro_export]
macro_rules! hstack {
    (spacing=$e:expr $(, $($rest:tt)*)?) => {{
        let mut stack = $crate::hstack!($( $($rest)* )?);
        let style = stack.layout().style;
        stack.set_layout($crate::StackLayout::new($crate::StackStyle { spacing: $e, ..style }));
        stack
    }};
    (alignment=$e:expr $(, $($rest:tt)*)?) => {{
        let mut stack = $crate::hstack!($( $($rest)* )?);
        let layout = stack.layout().with_alignment($e);
        stack.set_layout(layout);
        stack
    }};
    ([$($item:expr),* $(,)?]) => {{
        let mut stack = $crate::Container::new($crate::StackLayout::horizontal(0.0));
        $(
            stack.add_child($item);
        )*
        stack
    }};
    () => {{ $crate::Container::new($crate::StackLayout::horizontal(0.0)) }};
}

#[macro_export]
macro_rules! vstack {
    (spacing=$e:expr $(, $($rest:tt)*)?) => {{
        let mut stack = $crate::vstack!($( $($rest)* )?);
        let style = stack.layout().style;
        stack.set_layout($crate::StackLayout::new($crate::StackStyle { spacing: $e, ..style }));
        stack
    }};
    (alignment=$e:expr $(, $($rest:tt)*)?) => {{
        let mut stack = $crate::vstack!($( $($rest)* )?);
        let layout = stack.layout().with_alignment($e);
        stack.set_layout(layout);
        stack
    }};
    ([$($item:expr),* $(,)?]) => {{
        let mut stack = $crate::Container::new($crate::StackLayout::vertical(0.0));
        $(
            stack.add_child($item);
        )*
        stack
    }};
    () => {{ $crate::Container::new($crate::StackLayout::vertical(0.0)) }};
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::math::{Axis, Size};
    use crate::proposal::SizeProposal;
    use crate::style::Align;
    use crate::widgets::{Fill, FixedBox, Text};

    #[test]
    fn finish_keeps_statement_order() {
        let env = Environment::new();
        let mut builder = ViewBuilder::new(&env);
        builder.push(FixedBox::new(1.0, 1.0))
            .push(FixedBox::new(2.0, 2.0))
            .push_optional(None::<FixedBox>)
            .push_optional(Some(FixedBox::new(3.0, 3.0)));
        assert_eq!(builder.len(), 3);

        let widths: Vec<f32> = builder.finish().iter()
            .map(|node| node.measure(SizeProposal::UNSPECIFIED).width)
            .collect();
        assert_eq!(widths, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn conditionals_and_loops() -> Result<()> {
        let env = Environment::new();
        let show_header = false;
        let nodes = ViewBuilder::build(&env, |b| {
            b.push_if(show_header, |b| {
                b.push(Text::new("header"));
                Ok(())
            })?;
            b.for_each(1..=3, |b, n| {
                b.push(FixedBox::new(n as f32, 1.0));
                Ok(())
            })?;
            b.push_either(show_header, || FixedBox::new(9.0, 9.0), Fill::new);
            Ok(())
        })?;

        assert_eq!(nodes.len(), 4);
        assert!(nodes[3].is_flexible(Axis::Horizontal));
        Ok(())
    }

    #[test]
    fn stacks_read_defaults_from_environment() -> Result<()> {
        let env = Environment::new().with(LayoutDefaults { spacing: 5.0, ..LayoutDefaults::default() });
        let nodes = ViewBuilder::build(&env, |b| {
            b.hstack(|b| {
                b.push(FixedBox::new(10.0, 10.0)).push(FixedBox::new(10.0, 10.0));
                Ok(())
            })?;
            Ok(())
        })?;

        assert_eq!(nodes[0].measure(SizeProposal::UNSPECIFIED), Size::new(25.0, 10.0));
        Ok(())
    }

    #[test]
    fn missing_defaults_fail_loudly() {
        let env = Environment::new();
        let result = ViewBuilder::build(&env, |b| {
            b.vstack(|_| Ok(()))?;
            Ok(())
        });
        assert!(matches!(result, Err(LayoutError::MissingBinding { .. })));
    }

    #[test]
    fn scoped_environment_applies_to_subtree_only() -> Result<()> {
        let env = Environment::standard();
        let nodes = ViewBuilder::build(&env, |b| {
            b.with_environment(LayoutDefaults { spacing: 0.0, ..LayoutDefaults::default() }, |b| {
                b.hstack(|b| {
                    b.push(FixedBox::new(10.0, 10.0)).push(FixedBox::new(10.0, 10.0));
                    Ok(())
                })?;
                Ok(())
            })?;
            b.hstack(|b| {
                b.push(FixedBox::new(10.0, 10.0)).push(FixedBox::new(10.0, 10.0));
                Ok(())
            })?;
            Ok(())
        })?;

        assert_eq!(nodes[0].measure(SizeProposal::UNSPECIFIED).width, 20.0);
        assert_eq!(nodes[1].measure(SizeProposal::UNSPECIFIED).width, 28.0);
        Ok(())
    }

    #[test]
    fn zstack_layers_children() -> Result<()> {
        let env = Environment::standard();
        let nodes = ViewBuilder::build(&env, |b| {
            b.zstack(|b| {
                b.push(FixedBox::new(40.0, 40.0)).push(FixedBox::new(10.0, 10.0));
                Ok(())
            })?;
            Ok(())
        })?;

        assert_eq!(nodes[0].measure(SizeProposal::UNSPECIFIED), Size::new(40.0, 40.0));
        Ok(())
    }

    #[test]
    fn stack_macros() {
        let row = crate::hstack!(spacing=4.0, alignment=Align::Center, [FixedBox::new(10.0, 10.0), FixedBox::new(10.0, 20.0)]);
        assert_eq!(row.layout().style.spacing, 4.0);
        assert_eq!(row.layout().style.alignment, Align::Center);
        assert_eq!(row.measure(SizeProposal::UNSPECIFIED), Size::new(24.0, 20.0));

        let column = crate::vstack!([FixedBox::new(10.0, 10.0), row]);
        assert_eq!(column.measure(SizeProposal::UNSPECIFIED), Size::new(24.0, 30.0));
    }
}
