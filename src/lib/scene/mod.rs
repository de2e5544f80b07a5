pub mod camera;

use crate::{geom, leaf, wire};

pub const AXIS_LABELS: [&str; 3] = ["X", "Y", "Z"];

// Every edge in a scene is drawn the same way
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct LineStyle {
    pub colour: [f32; 3],
}

impl Default for LineStyle {
    fn default() -> Self { Self::new() }
}

impl LineStyle {
    pub const fn new() -> Self {
        Self { colour: [0.; 3] }
    }

    // Hex string as plotlib expects it
    pub fn hex(&self) -> String {
        let [r, g, b] = self.colour.map(|c| (c.clamp(0., 1.) * 255.).round() as u8);

        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

/// Wherever the scene ends up being drawn.
///
/// Lines arrive first, then the axis configuration,
/// then a single call to `show` which owns the sink from there on.
pub trait Sink {
    fn line(&mut self, edge: wire::Edge, style: LineStyle);
    fn label_axes(&mut self, labels: [&str; 3]);
    fn equal_aspect(&mut self);
    fn show(self) -> anyhow::Result<()>;
}

// Every wireframe edge of the leaf boxes, held until presented
#[derive(Clone)]
#[derive(Debug, Default)]
pub struct Scene {
    edges: Vec<wire::Edge>,
    style: LineStyle,
}

impl Scene {
    pub fn new(style: LineStyle) -> Self {
        Self { edges: Vec::new(), style }
    }

    pub fn from_leaves<I>(leaves: I, style: LineStyle) -> Self
        where I: IntoIterator<Item = leaf::LeafBox> {

        let mut scene = Self::new(style);

        scene.extend(leaves);
        scene
    }

    pub fn push(&mut self, leaf: leaf::LeafBox) {
        if leaf.is_inverted() {
            log::debug!("Leaf box {:?} has max below min", leaf);
        }

        self.edges.extend(leaf.edges());
    }

    pub fn edges(&self) -> &[wire::Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn bounds(&self) -> geom::Bounds {
        geom::Bounds::new(self.edges.iter().flat_map(|edge| [edge.a, edge.b]))
    }

    // Hands everything to `sink` and blocks for as long as it shows
    pub fn present<S: Sink>(self, mut sink: S) -> anyhow::Result<()> {
        let Self { edges, style } = self;

        if edges.is_empty() {
            log::warn!("No populated leaves to draw, presenting empty axes");
        }

        log::info!("Presenting {} edges", edges.len());

        for edge in edges {
            sink.line(edge, style);
        }

        sink.label_axes(AXIS_LABELS);
        sink.equal_aspect();
        sink.show()
    }
}

impl Extend<leaf::LeafBox> for Scene {
    fn extend<I: IntoIterator<Item = leaf::LeafBox>>(&mut self, leaves: I) {
        for leaf in leaves {
            self.push(leaf);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell, rc};

    use super::*;

    use leaf::LeafBox;

    #[derive(Debug, PartialEq)]
    enum Call {
        Line(wire::Edge, LineStyle),
        Labels([String; 3]),
        EqualAspect,
        Show,
    }

    // Shared so the calls outlive the sink consumed by `show`
    #[derive(Default)]
    struct Recorder(rc::Rc<cell::RefCell<Vec<Call>>>);

    impl Sink for Recorder {
        fn line(&mut self, edge: wire::Edge, style: LineStyle) {
            self.0.borrow_mut().push(Call::Line(edge, style));
        }

        fn label_axes(&mut self, labels: [&str; 3]) {
            self.0.borrow_mut().push(Call::Labels(labels.map(String::from)));
        }

        fn equal_aspect(&mut self) {
            self.0.borrow_mut().push(Call::EqualAspect);
        }

        fn show(self) -> anyhow::Result<()> {
            self.0.borrow_mut().push(Call::Show);

            Ok(())
        }
    }

    #[test]
    fn all_lines_precede_configuration_and_show() {
        let leaves = [
            LeafBox::new([0.; 3], [1.; 3]),
            LeafBox::new([1.; 3], [2.; 3]),
        ];

        let scene = Scene::from_leaves(leaves, LineStyle::default());
        let calls = rc::Rc::default();

        scene.present(Recorder(rc::Rc::clone(&calls))).unwrap();

        let calls = calls.take();

        assert_eq!(calls.len(), 24 + 3);
        assert!(calls[..24].iter().all(|call| matches!(
            call,
            Call::Line(_, style) if *style == LineStyle::default()
        )));

        assert_eq!(calls[0], Call::Line(leaves[0].edges()[0], LineStyle::default()));
        assert_eq!(calls[24], Call::Labels(["X", "Y", "Z"].map(String::from)));
        assert_eq!(calls[25], Call::EqualAspect);
        assert_eq!(calls[26], Call::Show);
    }

    #[test]
    fn empty_scene_still_shows() {
        let calls = rc::Rc::default();

        Scene::default().present(Recorder(rc::Rc::clone(&calls))).unwrap();

        assert_eq!(calls.take().last(), Some(&Call::Show));
    }

    #[test]
    fn bounds_cover_every_box() {
        let scene = Scene::from_leaves([
            LeafBox::new([0.; 3], [1.; 3]),
            LeafBox::new([-2., 0.5, 0.], [0., 3., 0.5]),
        ], LineStyle::default());

        let bounds = scene.bounds();

        assert_eq!(bounds.min, [-2., 0., 0.]);
        assert_eq!(bounds.max, [1., 3., 1.]);
    }

    #[test]
    fn inverted_boxes_keep_all_edges() {
        let inverted = LeafBox::new([1., 0., 0.], [0., 1., 1.]);

        let scene = Scene::from_leaves([inverted, inverted], LineStyle::default());

        assert_eq!(scene.edges().len(), 24);
        assert_eq!(&scene.edges()[..12], &inverted.edges()[..]);
    }

    #[test]
    fn style_formats_as_hex() {
        assert_eq!(LineStyle::default().hex(), "#000000");
        assert_eq!(LineStyle { colour: [1., 0.5, 0.] }.hex(), "#FF8000");
    }
}
