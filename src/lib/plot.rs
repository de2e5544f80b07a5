use std::{fmt, path, str};

use crate::{geom, scene, wire};

// Which two axes end up on the page, horizontal first
#[derive(Clone, Copy)]
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Plane {
    #[default]
    Xy,
    Xz,
    Zy,
}

impl Plane {
    pub const fn axes(self) -> (usize, usize) {
        match self {
            Self::Xy => (0, 1),
            Self::Xz => (0, 2),
            Self::Zy => (2, 1),
        }
    }

    pub fn project(self, point: geom::V3<f32>) -> (f64, f64) {
        let (h, v) = self.axes();

        (f64::from(point[h]), f64::from(point[v]))
    }
}

impl str::FromStr for Plane {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xy" => Ok(Self::Xy),
            "xz" => Ok(Self::Xz),
            "zy" => Ok(Self::Zy),
            other => Err(format!("Unknown plane '{other}', expected xy, xz or zy")),
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Xy => "xy",
            Self::Xz => "xz",
            Self::Zy => "zy",
        };

        f.write_str(name)
    }
}

// Horizontal and vertical ranges of the page.
// With `equal` both span the same distance so boxes keep their shape
pub fn ranges(
    plane: Plane,
    bounds: geom::Bounds,
    equal: bool,
) -> ((f64, f64), (f64, f64)) {
    let bounds = bounds.or_unit();

    let (h_min, v_min) = plane.project(bounds.min);
    let (h_max, v_max) = plane.project(bounds.max);

    if !equal {
        return ((h_min, h_max), (v_min, v_max));
    }

    let half = 0.5 * (h_max - h_min).max(v_max - v_min);

    let h_mid = 0.5 * (h_min + h_max);
    let v_mid = 0.5 * (v_min + v_max);

    ((h_mid - half, h_mid + half), (v_mid - half, v_mid + half))
}

/// Orthographic projection of the scene written out as an SVG page.
pub struct Snapshot {
    out: path::PathBuf,
    plane: Plane,
    lines: Vec<(wire::Edge, String)>,
    bounds: geom::Bounds,
    labels: [String; 3],
    equal: bool,
}

impl Snapshot {
    const SIZE: u32 = 600;

    pub fn new<P: AsRef<path::Path>>(out: P, plane: Plane) -> Self {
        Self {
            out: out.as_ref().to_path_buf(),
            plane,
            lines: Vec::new(),
            bounds: geom::Bounds::empty(),
            labels: scene::AXIS_LABELS.map(String::from),
            equal: false,
        }
    }
}

impl scene::Sink for Snapshot {
    fn line(&mut self, edge: wire::Edge, style: scene::LineStyle) {
        self.bounds.extend(edge.a);
        self.bounds.extend(edge.b);

        self.lines.push((edge, style.hex()));
    }

    fn label_axes(&mut self, labels: [&str; 3]) {
        self.labels = labels.map(String::from);
    }

    fn equal_aspect(&mut self) {
        self.equal = true;
    }

    // Writes the page instead of blocking, there is nothing to interact with
    fn show(self) -> anyhow::Result<()> {
        use plotlib::{page, repr, style, view};

        let Self {
            out,
            plane,
            lines,
            bounds,
            labels,
            equal,
        } = self;

        let (h, v) = plane.axes();

        let mut chart_view = view::ContinuousView::new();

        // The two in-plane axes go down first so the boxes draw over them
        let frame = bounds.or_unit();

        for (axis, colour) in [(h, "#E61A1A"), (v, "#1AB21A")] {
            let (origin, mut tip) = (frame.min, frame.min);
            tip[axis] = frame.max[axis];

            chart_view = chart_view.add(
                repr::Plot::new(vec![plane.project(origin), plane.project(tip)])
                    .line_style(style::LineStyle::new().colour(colour))
            );
        }

        for (wire::Edge { a, b }, colour) in lines {
            let (a, b) = (plane.project(a), plane.project(b));

            // Edges along the hidden axis collapse to a point
            if a == b { continue; }

            chart_view = chart_view.add(
                repr::Plot::new(vec![a, b])
                    .line_style(style::LineStyle::new().colour(colour))
            );
        }

        let ((h_min, h_max), (v_min, v_max)) = ranges(plane, bounds, equal);

        let chart_view = chart_view
            .x_range(h_min, h_max)
            .y_range(v_min, v_max)
            .x_label(labels[h].as_str())
            .y_label(labels[v].as_str());

        page::Page::single(&chart_view)
            .dimensions(Self::SIZE, Self::SIZE)
            .save(&out)
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", out.display(), e))?;

        log::info!("Wrote {} projection to {}", plane, out.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planes_parse_case_insensitively() {
        assert_eq!("XZ".parse::<Plane>(), Ok(Plane::Xz));
        assert_eq!("zy".parse::<Plane>(), Ok(Plane::Zy));
        assert!("yx".parse::<Plane>().is_err());
    }

    #[test]
    fn projection_drops_hidden_axis() {
        let point = [1., 2., 3.];

        assert_eq!(Plane::Xy.project(point), (1., 2.));
        assert_eq!(Plane::Xz.project(point), (1., 3.));
        assert_eq!(Plane::Zy.project(point), (3., 2.));
    }

    #[test]
    fn equal_ranges_share_span() {
        let bounds = geom::Bounds::new([[0., 0., 0.], [4., 2., 9.]]);

        let ((h_min, h_max), (v_min, v_max)) = ranges(Plane::Xy, bounds, true);

        assert_eq!(h_max - h_min, 4.);
        assert_eq!(v_max - v_min, 4.);
        assert_eq!((v_min, v_max), (-1., 3.));
    }

    #[test]
    fn unequal_ranges_follow_bounds() {
        let bounds = geom::Bounds::new([[0., 0., 0.], [4., 2., 9.]]);

        assert_eq!(ranges(Plane::Zy, bounds, false), ((0., 9.), (0., 2.)));
    }

    #[test]
    fn snapshot_writes_svg() {
        use scene::Sink as _;

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("leaves.svg");

        let scene = scene::Scene::from_leaves(
            [crate::leaf::LeafBox::new([0.; 3], [1., 2., 3.])],
            scene::LineStyle::default(),
        );

        let mut snapshot = Snapshot::new(&out, Plane::Xz);

        for &edge in scene.edges() {
            snapshot.line(edge, scene::LineStyle::default());
        }

        snapshot.label_axes(scene::AXIS_LABELS);
        snapshot.equal_aspect();
        snapshot.show().unwrap();

        let svg = std::fs::read_to_string(&out).unwrap();

        assert!(svg.contains("<svg"));
    }
}
