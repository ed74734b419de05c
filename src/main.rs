use negotiator::{hstack, vstack};
use negotiator::{Align, Alignment, Element, Environment, FitAxes, Fill, FixedBox, FixedSize, Frame, FrameSize, GridColumns, LayoutDefaults, Padding, Root, SizeProposal, Text, ViewBuilder};


fn dump(element: &Element, depth: usize) {
    match element.placement() {
        Some(placement) => log::info!("{:indent$}{:?} <- {:?}", "", placement.bounds, placement.proposal, indent = depth * 2),
        None => log::info!("{:indent$}(not placed)", "", indent = depth * 2)
    }
    for child in element.children() {
        dump(child, depth + 1);
    }
}

fn negotiate(name: &str, element: impl Into<Element>, proposal: impl Into<SizeProposal>) {
    let mut root = Root::new(element);
    let bounds = root.negotiate(proposal);
    log::info!("{name}: {:?}", bounds.size());
    dump(root.element(), 1);
}

fn main() -> negotiator::Result<()> {
    env_logger::init();

    let toolbar = hstack!(spacing=10.0, alignment=Align::Center, [
        FixedBox::new(80.0, 40.0),
        FixedBox::new(80.0, 20.0),
        FixedBox::new(80.0, 30.0)
    ]);
    negotiate("toolbar", toolbar, (300.0, 100.0));

    let sidebar = vstack!(spacing=4.0, [
        Padding::new(8.0, Text::new("Inbox")),
        Fill::min(0.0, 20.0),
        Padding::new(8.0, Text::new("Settings"))
    ]);
    negotiate("sidebar", sidebar, (120.0, 400.0));

    let env = Environment::standard().with(LayoutDefaults { spacing: 6.0, ..LayoutDefaults::default() });
    let gallery = ViewBuilder::build(&env, |b| {
        b.grid(GridColumns::Adaptive { minimum: 60.0, maximum: 120.0 }, |b| {
            b.for_each(0..7, |b, n| {
                b.push(FixedBox::new(40.0 + 5.0 * n as f32, 30.0));
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })?;
    for (index, grid) in gallery.into_iter().enumerate() {
        negotiate(&format!("gallery {index}"), grid, (260.0, 300.0));
    }

    let headline = "Negotiated layout in two passes";
    let banner = ViewBuilder::build(&env, |b| {
        b.fitting(FitAxes::Horizontal, |b| {
            b.push(Text::new(headline));
            b.push(Text::new(headline).with_line_limit(1));
            b.push(Text::new("Layout"));
            Ok(())
        })?;
        Ok(())
    })?;
    for banner in banner {
        negotiate("banner", banner, (160.0, 40.0));
    }

    let badge_env = env.with(LayoutDefaults { overlay_alignment: Alignment::new(Align::Trailing, Align::Leading), ..LayoutDefaults::default() });
    let avatar = ViewBuilder::build(&badge_env, |b| {
        b.zstack(|b| {
            b.push(Frame::new(Fill::new()).with_width(FrameSize::Fixed(64.0)).with_height(FrameSize::Fixed(64.0)));
            b.push(FixedSize::both(Padding::new(2.0, Text::new("12"))));
            Ok(())
        })?;
        Ok(())
    })?;
    for avatar in avatar {
        negotiate("avatar", avatar, (200.0, 200.0));
    }

    Ok(())
}
