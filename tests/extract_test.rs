use inkgeom::{element_points, points_by_id, Document, Error, Point};

const SCENE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" id="root">
  <defs id="defs">
    <path id="dot" d="M 0,0 L 1,1"/>
    <path id="big-dot" d="M 0,0 L 1,1" transform="scale(2)"/>
  </defs>
  <g id="pair">
    <path id="a" d="M 0 0 L 1 1" transform="translate(1,0)"/>
    <path id="b" d="M 1 1 L 2 0" transform="scale(2)"/>
  </g>
  <g id="moved" transform="translate(100,0)">
    <defs><path id="hidden" d="M 50 50"/></defs>
    <text id="label" x="3" y="4" transform="scale(2)">hi</text>
    <rect id="box" x="0" y="0" width="10" height="10"/>
  </g>
  <use id="copy" xlink:href="#dot" x="2" y="3" transform="translate(10,20)"/>
  <use id="big-copy" href="#big-dot" x="1" y="1"/>
  <use id="dangling" xlink:href="#nothing"/>
  <g id="loop"><use id="back" xlink:href="#loop"/></g>
  <rect id="odd" transform="wobble(1)"/>
  <path id="bad" d="M 0 0" transform="wobble(1)"/>
</svg>
"##;

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

fn scene() -> Document {
    Document::parse(SCENE).unwrap()
}

#[test]
fn group_concatenates_children_with_their_own_transforms() {
    let doc = scene();
    let group = points_by_id(&doc, "pair").unwrap();
    assert_points(&group, &[(1.0, 0.0), (2.0, 1.0), (2.0, 2.0), (4.0, 0.0)]);

    let mut separately = points_by_id(&doc, "a").unwrap();
    separately.extend(points_by_id(&doc, "b").unwrap());
    assert_eq!(group, separately);
}

#[test]
fn group_transform_applies_after_children_and_skips_definitions() {
    let doc = scene();
    assert_points(&points_by_id(&doc, "moved").unwrap(), &[(106.0, 8.0)]);
}

#[test]
fn text_contributes_its_anchor() {
    let doc = scene();
    assert_points(&points_by_id(&doc, "label").unwrap(), &[(6.0, 8.0)]);
}

#[test]
fn use_offsets_before_its_own_transform() {
    let doc = scene();
    assert_points(
        &points_by_id(&doc, "copy").unwrap(),
        &[(12.0, 23.0), (13.0, 24.0)],
    );
}

#[test]
fn use_keeps_the_referenced_transform() {
    let doc = scene();
    assert_points(
        &points_by_id(&doc, "big-copy").unwrap(),
        &[(1.0, 1.0), (3.0, 3.0)],
    );
}

#[test]
fn unsupported_elements_are_empty() {
    let doc = scene();
    assert!(points_by_id(&doc, "box").unwrap().is_empty());
    assert!(points_by_id(&doc, "defs").unwrap().is_empty());
    // never parsed when there is nothing to move
    assert!(points_by_id(&doc, "odd").unwrap().is_empty());
}

#[test]
fn dangling_reference_is_an_error() {
    let doc = scene();
    match points_by_id(&doc, "dangling") {
        Err(Error::UnresolvedReference { id }) => assert_eq!(id, "nothing"),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(matches!(
        points_by_id(&doc, "no-such-id"),
        Err(Error::UnresolvedReference { .. })
    ));
}

#[test]
fn reference_cycles_are_detected() {
    let doc = scene();
    assert!(matches!(
        points_by_id(&doc, "loop"),
        Err(Error::CyclicReference { .. })
    ));
    assert!(matches!(
        points_by_id(&doc, "back"),
        Err(Error::CyclicReference { .. })
    ));
}

#[test]
fn malformed_transform_propagates() {
    let doc = scene();
    assert!(matches!(
        points_by_id(&doc, "bad"),
        Err(Error::MalformedTransform { .. })
    ));
}

#[test]
fn element_points_accepts_detached_nodes() {
    let doc = scene();
    let node = doc.find("a").unwrap().clone();
    assert_points(&element_points(&doc, &node).unwrap(), &[(1.0, 0.0), (2.0, 1.0)]);
}
