use inkgeom::{Document, DocumentUnits, Error, Unit, UnitConverter};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn units_parse_case_insensitively() {
    assert_eq!("mm".parse::<Unit>().unwrap(), Unit::Mm);
    assert_eq!(" IN ".parse::<Unit>().unwrap(), Unit::In);
    assert_eq!("Pc".parse::<Unit>().unwrap(), Unit::Pc);
    match "furlong".parse::<Unit>() {
        Err(Error::UnknownUnit { unit }) => assert_eq!(unit, "furlong"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn units_round_trip_through_their_names() {
    for unit in Unit::ALL.iter() {
        assert_eq!(unit.to_string().parse::<Unit>().unwrap(), *unit);
    }
    assert_eq!(serde_json::to_string(&Unit::Km).unwrap(), "\"km\"");
    assert_eq!(serde_json::from_str::<Unit>("\"pt\"").unwrap(), Unit::Pt);
}

#[test]
fn conversion_factors_at_96_dpi() {
    let units = UnitConverter::default();
    assert!(close(units.to_user_units(1.0, Unit::In), 96.0));
    assert!(close(units.to_user_units(25.4, Unit::Mm), 96.0));
    assert!(close(units.to_user_units(2.54, Unit::Cm), 96.0));
    assert!(close(units.to_user_units(72.0, Unit::Pt), 96.0));
    assert!(close(units.to_user_units(6.0, Unit::Pc), 96.0));
    assert!(close(units.to_user_units(17.0, Unit::Px), 17.0));
    assert!(close(units.to_user_units(0.0254, Unit::M), 96.0));
    assert!(close(units.to_user_units(1.0, Unit::Km), 96.0 / 25.4 * 1.0e6));
    assert!(close(units.from_user_units(96.0, Unit::Cm), 2.54));
}

#[test]
fn convert_between_units() {
    let units = UnitConverter::default();
    assert!(close(units.convert(1.0, Unit::Ft, Unit::In), 12.0));
    assert!(close(units.convert(1.0, Unit::Yd, Unit::Ft), 3.0));
    assert!(close(units.convert(1.0, Unit::In, Unit::Mm), 25.4));
    assert!(close(units.convert(3.0, Unit::Px, Unit::Px), 3.0));
}

#[test]
fn dpi_changes_physical_units_only() {
    let units = UnitConverter::new(300.0);
    assert!(close(units.to_user_units(1.0, Unit::In), 300.0));
    assert!(close(units.to_user_units(1.0, Unit::Px), 1.0));
    assert!(close(units.convert(1.0, Unit::In, Unit::Pt), 72.0));
}

#[test]
fn document_units_from_named_view_and_view_box() {
    let doc = Document::parse(
        r#"<svg xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="210mm" height="297mm" viewBox="0 0 793.70081 1122.5197">
            <sodipodi:namedview id="base" inkscape:document-units="mm"/>
        </svg>"#,
    )
    .unwrap();

    let units = DocumentUnits::from_document(&doc);
    assert_eq!(units.unit, Unit::Mm);
    assert!(close(units.scale, 793.70081 / 210.0));
}

#[test]
fn document_units_fall_back_to_pixels() {
    let doc = Document::parse(r#"<svg width="100"><g/></svg>"#).unwrap();
    let units = DocumentUnits::from_document(&doc);
    assert_eq!(units.unit, Unit::Px);
    assert!(close(units.scale, 1.0));
}
