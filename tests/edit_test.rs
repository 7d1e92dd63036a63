use inkgeom::{
    element_points, point, rotate_about_center, rotate_node, scale_node, translate_node, Document,
    Error, Node, Point, Tag,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn assert_points(points: &[Point], expected: &[(f64, f64)]) {
    assert_eq!(points.len(), expected.len(), "got {:?}", points);
    for (p, &(x, y)) in points.iter().zip(expected) {
        assert!(
            close(p.x, x) && close(p.y, y),
            "got ({}, {}), expected ({}, {})",
            p.x,
            p.y,
            x,
            y
        );
    }
}

fn path(data: &str) -> Node {
    Node::new(Tag::Path {
        data: data.to_string(),
    })
}

fn placed(node: &Node) -> Vec<Point> {
    let doc = Document::new(Node::new(Tag::Group));
    element_points(&doc, node).unwrap()
}

#[test]
fn translate_prepends_to_the_chain() {
    let mut node = path("M 0 0");
    translate_node(&mut node, 3.0, 4.0);
    assert_eq!(node.transform.as_deref(), Some("translate(3 4)"));

    let mut node = path("M 1 1").with_transform("scale(2)");
    translate_node(&mut node, 3.0, 4.0);
    assert_eq!(node.transform.as_deref(), Some("translate(3 4) scale(2)"));
    assert_points(&placed(&node), &[(5.0, 6.0)]);
}

#[test]
fn zero_translation_is_a_no_op() {
    let mut node = path("M 0 0");
    translate_node(&mut node, 0.0, 0.0);
    assert!(node.transform.is_none());
}

#[test]
fn rotation_is_counter_clockwise_on_screen() {
    let mut node = path("M 2 1");
    rotate_node(&mut node, point(1.0, 1.0), 90.0);
    assert_eq!(node.transform.as_deref(), Some("rotate(-90 1 1)"));
    assert_points(&placed(&node), &[(1.0, 0.0)]);
}

#[test]
fn zero_rotation_is_a_no_op() {
    let mut node = path("M 2 1").with_transform("scale(3)");
    rotate_node(&mut node, point(1.0, 1.0), 0.0);
    assert_eq!(node.transform.as_deref(), Some("scale(3)"));
}

#[test]
fn scale_defaults_to_uniform() {
    let mut node = path("M 1 1");
    scale_node(&mut node, 2.0, None, None);
    assert_eq!(node.transform.as_deref(), Some("scale(2)"));

    let mut node = path("M 1 1");
    scale_node(&mut node, 2.0, Some(3.0), None);
    assert_eq!(node.transform.as_deref(), Some("scale(2 3)"));
    assert_points(&placed(&node), &[(2.0, 3.0)]);
}

#[test]
fn scale_about_a_center_keeps_it_fixed() {
    let mut node = path("M 1 1 L 2 2");
    scale_node(&mut node, 2.0, None, Some(point(1.0, 1.0)));
    assert_eq!(
        node.transform.as_deref(),
        Some("translate(1 1) scale(2) translate(-1 -1)")
    );
    assert_points(&placed(&node), &[(1.0, 1.0), (3.0, 3.0)]);
}

#[test]
fn rotate_about_own_center() {
    let mut doc = Document::parse(
        r#"<svg><path id="sq" d="M 0 0 L 2 0 L 2 2 L 0 2" transform="translate(4,0)"/></svg>"#,
    )
    .unwrap();

    rotate_about_center(&mut doc, "sq", 90.0).unwrap();
    let node = doc.find("sq").unwrap();
    assert_eq!(
        node.transform.as_deref(),
        Some("rotate(-90 5 1) translate(4,0)")
    );
    assert_points(
        &element_points(&doc, node).unwrap(),
        &[(4.0, 2.0), (4.0, 0.0), (6.0, 0.0), (6.0, 2.0)],
    );
}

#[test]
fn rotate_about_center_needs_geometry() {
    let mut doc =
        Document::parse(r#"<svg><rect id="r" width="1" height="1"/></svg>"#).unwrap();
    assert!(matches!(
        rotate_about_center(&mut doc, "r", 45.0),
        Err(Error::EmptyGeometry)
    ));
    assert!(matches!(
        rotate_about_center(&mut doc, "missing", 45.0),
        Err(Error::UnresolvedReference { .. })
    ));
    assert!(doc.find("r").unwrap().transform.is_none());
}
