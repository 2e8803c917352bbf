use super::{VisOptions, Visualizer};
use crate::spatial::Point;

#[test]
fn dots_only() {
    let vis: Visualizer = vec![
        Point::new(1.0, 2.0),
        Point::new(-25.0, 37.0),
        Point::new(12.0, -5.0),
    ]
    .into();
    vis.draw("test_generated/dots.png", ());
}

#[test]
fn nested_rings() {
    let outer = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let inner = vec![
        Point::new(3.0, 3.0),
        Point::new(7.0, 4.0),
        Point::new(5.0, 7.0),
    ];

    let mut points = outer.clone();
    points.extend(inner.clone());

    let mut vis: Visualizer = points.into();
    vis.set_rings(vec![outer, inner]);
    vis.draw("test_generated/nested.png", VisOptions::new().im_size(128));
}

#[test]
fn single_point() {
    // a lone point has no usable range; the frame falls back to unit scale
    let vis: Visualizer = vec![Point::new(4.0, 4.0)].into();
    vis.draw("test_generated/single.png", ());
}
