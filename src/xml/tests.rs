use super::*;
use crate::dataset::{Dataset, DatasetError, Dimensions, PointColumns};

fn render(dataset: &Dataset, layout: &XmlLayout) -> String {
    let mut out = Vec::new();
    dataset.write_xml(&mut out, layout).unwrap();
    String::from_utf8(out).unwrap()
}

fn read_all(xml: &str) -> Result<Vec<Dataset>, XmlError> {
    DatasetReader::new(xml.as_bytes()).datasets().collect()
}

// ==================== Writing ====================

#[test]
fn test_write_two_d_shape() {
    let mut dataset = Dataset::new_2d("ID", 44100.0).unwrap();
    dataset
        .set_data_from_iterable(PointColumns::new([5]).values([1.25]).labels(["x"]))
        .unwrap();

    let xml = render(&dataset, &XmlLayout::new("", "  ", "\n"));
    assert_eq!(
        xml,
        "<dataset id=\"ID\" dimensions=\"2\">\n  <point label=\"x\" frame=\"5\" value=\"1.250000\"/>\n</dataset>\n"
    );
}

#[test]
fn test_write_one_d_shape() {
    let mut dataset = Dataset::new_1d("4", 44100.0).unwrap();
    dataset
        .set_data_from_iterable(PointColumns::new([0, 1024]))
        .unwrap();

    let xml = render(&dataset, &XmlLayout::default());
    assert_eq!(
        xml,
        "<dataset id=\"4\" dimensions=\"1\">\n  <point frame=\"0\" label=\"\"/>\n  <point frame=\"1024\" label=\"\"/>\n</dataset>\n"
    );
}

#[test]
fn test_write_three_d_truncates_duration() {
    let mut dataset = Dataset::new_3d("n", 44100.0).unwrap();
    dataset
        .set_data_from_iterable(
            PointColumns::new([10, 20])
                .values([60.0, -0.5])
                .durations([2205.9, -3.7])
                .labels(["C4", "rest"]),
        )
        .unwrap();

    let xml = render(&dataset, &XmlLayout::default());
    let lines: Vec<&str> = xml.lines().collect();
    assert_eq!(
        lines[1],
        "  <point label=\"C4\" frame=\"10\" value=\"60.000000\" duration=\"2205\"/>"
    );
    assert_eq!(
        lines[2],
        "  <point label=\"rest\" frame=\"20\" value=\"-0.500000\" duration=\"-3\"/>"
    );
}

#[test]
fn test_write_indentation() {
    let mut dataset = Dataset::new_1d("1", 100.0).unwrap();
    dataset.set_data_from_iterable(PointColumns::new([7])).unwrap();

    let xml = render(&dataset, &XmlLayout::new("    ", "\t", "\r\n"));
    assert_eq!(
        xml,
        "    <dataset id=\"1\" dimensions=\"1\">\r\n    \t<point frame=\"7\" label=\"\"/>\r\n    </dataset>\r\n"
    );
}

#[test]
fn test_write_compact() {
    let mut dataset = Dataset::new_1d("1", 100.0).unwrap();
    dataset.set_data_from_iterable(PointColumns::new([7])).unwrap();

    assert_eq!(
        render(&dataset, &XmlLayout::compact()),
        "<dataset id=\"1\" dimensions=\"1\"><point frame=\"7\" label=\"\"/></dataset>"
    );
}

#[test]
fn test_write_empty_dataset() {
    let dataset = Dataset::new_2d("0", 100.0).unwrap();
    assert_eq!(
        render(&dataset, &XmlLayout::default()),
        "<dataset id=\"0\" dimensions=\"2\">\n</dataset>\n"
    );
}

#[test]
fn test_label_escaping() {
    let mut dataset = Dataset::new_1d("1", 100.0).unwrap();
    dataset
        .set_data_from_iterable(PointColumns::new([1]).labels(["a<b & \"c\""]))
        .unwrap();

    let escaped = render(&dataset, &XmlLayout::compact());
    assert!(escaped.contains("label=\"a&lt;b &amp; &quot;c&quot;\""));

    let verbatim = render(
        &dataset,
        &XmlLayout::compact().with_label_escaping(LabelEscaping::Verbatim),
    );
    assert!(verbatim.contains("label=\"a<b & \"c\"\""));
}

#[test]
fn test_legacy_layout_is_verbatim() {
    assert_eq!(XmlLayout::legacy().label_escaping, LabelEscaping::Verbatim);
    assert_eq!(XmlLayout::legacy().child_indent, "  ");
}

#[test]
fn test_non_finite_values() {
    let mut dataset = Dataset::new_2d("1", 100.0).unwrap();
    dataset
        .set_data_from_iterable(
            PointColumns::new([1, 2, 3]).values([f64::NAN, f64::INFINITY, f64::NEG_INFINITY]),
        )
        .unwrap();

    let xml = render(&dataset, &XmlLayout::default());
    assert!(xml.contains("value=\"nan\""));
    assert!(xml.contains("value=\"inf\""));
    assert!(xml.contains("value=\"-inf\""));
}

// ==================== Reading ====================

#[test]
fn test_read_session_with_models() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE sonic-visualiser>
<sv>
  <data>
    <model id="1" name="Beats" sampleRate="48000" start="0" end="96000" type="sparse" dimensions="1" resolution="1" dataset="0"/>
    <model id="2" name="Notes" sampleRate="22050" type="sparse" dimensions="3" dataset="5"/>
    <dataset id="0" dimensions="1">
      <point frame="0" label="1"/>
      <point frame="24000" label="2"/>
    </dataset>
    <dataset id="5" dimensions="3">
      <point label="A" frame="10" value="57.000000" duration="441"/>
    </dataset>
  </data>
</sv>"#;

    let datasets = read_all(xml).unwrap();
    assert_eq!(datasets.len(), 2);

    let beats = &datasets[0];
    assert_eq!(beats.id(), "0");
    assert_eq!(beats.dimensions(), Dimensions::One);
    assert_eq!(beats.sample_rate(), 48000.0);
    assert_eq!(beats.instants().collect::<Vec<_>>(), vec![0.0, 0.5]);
    assert_eq!(beats.labels().collect::<Vec<_>>(), vec!["1", "2"]);

    let notes = &datasets[1];
    assert_eq!(notes.sample_rate(), 22050.0);
    assert_eq!(notes.values(), Some(&[57.0][..]));
    assert_eq!(notes.durations(), Some(&[441.0][..]));
}

#[test]
fn test_read_default_sample_rate() {
    let xml = r#"<dataset id="3" dimensions="2"><point label="" frame="8000" value="1"/></dataset>"#;

    let dataset = DatasetReader::new(xml.as_bytes())
        .with_default_sample_rate(16000.0)
        .next_dataset()
        .unwrap()
        .unwrap();
    assert_eq!(dataset.sample_rate(), 16000.0);
    assert_eq!(dataset.instants().next(), Some(0.5));
}

#[test]
fn test_read_unescapes_labels() {
    let xml = r#"<dataset id="1" dimensions="1"><point frame="1" label="a&lt;b &amp; c"/></dataset>"#;
    let datasets = read_all(xml).unwrap();
    assert_eq!(datasets[0].labels().next(), Some("a<b & c"));
}

#[test]
fn test_read_self_closing_dataset() {
    let datasets = read_all(r#"<data><dataset id="9" dimensions="2"/></data>"#).unwrap();
    assert_eq!(datasets.len(), 1);
    assert!(datasets[0].is_empty());
}

#[test]
fn test_read_counts_datasets() {
    let xml = r#"<dataset id="1" dimensions="1"/><dataset id="2" dimensions="1"/>"#;
    let mut reader = DatasetReader::new(xml.as_bytes());
    while reader.next_dataset().unwrap().is_some() {}
    assert_eq!(reader.datasets_read(), 2);
}

#[test]
fn test_read_missing_dimensions() {
    let err = read_all(r#"<dataset id="1"></dataset>"#).unwrap_err();
    assert!(matches!(err, XmlError::MissingAttribute(_)));
}

#[test]
fn test_read_invalid_dimensions() {
    let err = read_all(r#"<dataset id="1" dimensions="4"></dataset>"#).unwrap_err();
    assert!(matches!(err, XmlError::InvalidAttributeValue(_)));
}

#[test]
fn test_read_invalid_model_sample_rate() {
    let err = read_all(r#"<model id="1" sampleRate="fast" dataset="0"/>"#).unwrap_err();
    assert!(matches!(err, XmlError::InvalidAttributeValue(_)));
}

#[test]
fn test_read_truncated_dataset() {
    let err = read_all(r#"<dataset id="1" dimensions="1"><point frame="1" label=""/>"#)
        .unwrap_err();
    // quick-xml may flag the unclosed tag itself before we see Eof
    assert!(matches!(
        err,
        XmlError::InvalidStructure(_) | XmlError::Xml(_)
    ));
}

#[test]
fn test_read_bad_point_reports_record() {
    let xml = r#"<dataset id="1" dimensions="2">
  <point label="" frame="1" value="1.0"/>
  <point label="" frame="2"/>
</dataset>"#;

    match read_all(xml).unwrap_err() {
        XmlError::Dataset(DatasetError::MissingField { record, field }) => {
            assert_eq!(record, 1);
            assert_eq!(field, "value");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_no_datasets() {
    assert!(read_all("<sv><data/></sv>").unwrap().is_empty());
}
