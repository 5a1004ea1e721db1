//! End-to-end extraction over realistic catalogue records.

use serde_json::json;
use sherd_core::RawItem;
use sherd_extract::MetadataMapper;

fn ming_vase() -> RawItem {
    RawItem::from_value(json!({
        "id": "/2048128/object_ming_vase",
        "description": [
            "A blue and white Ming dynasty vase decorated with dragons, Jingdezhen, 17th century"
        ],
    }))
    .unwrap()
}

#[test]
fn test_ming_vase_scenario() {
    let mapper = MetadataMapper::default();
    let result = mapper.process_item(&ming_vase(), None, None);
    assert!(!result.is_degraded());
    assert_eq!(result.id, "/2048128/object_ming_vase");

    let descriptive = result.descriptive.as_ref().unwrap();
    assert!(descriptive.colored_drawing.contains(&"blue and white".to_string()));
    assert!(descriptive.shape.contains(&"vase".to_string()));
    assert!(descriptive.decorations.contains(&"animal:dragon".to_string()));
    assert!(descriptive.production_place.contains(&"jingdezhen".to_string()));
    assert_eq!(descriptive.production_place, descriptive.production_place_location);

    let management = result.management.as_ref().unwrap();
    assert!(management.period.contains(&"Ming".to_string()));
    assert!(management.years.contains(&1650));
    assert_eq!(
        management.period_summary.dynasty_mapping.get(&1650).map(String::as_str),
        Some("Qing")
    );
    assert_eq!(management.period_summary.century.as_deref(), Some("17th century"));
}

#[test]
fn test_serialized_bundle_field_names() {
    let mapper = MetadataMapper::default();
    let value = serde_json::to_value(mapper.process_item(&ming_vase(), None, None)).unwrap();

    let descriptive = &value["DescriptiveMetadata"];
    assert!(descriptive["ColoredDrawing"].is_array());
    assert!(descriptive["ProductionPlaceLocation"].is_array());
    assert!(descriptive["extraction_quality"]["has_color"].as_bool().unwrap());
    assert!(descriptive.get("lda_topics").is_none());

    let management = &value["Metadata_for_Management"];
    assert_eq!(management["Identifier"], "/2048128/object_ming_vase");
    assert!(management["Used_Titles"].is_array());
    assert!(management["PeriodSummary"]["dynasty_mapping"].is_object());
    assert_eq!(management["CompletenessLevel"], 0);
    assert_eq!(management["PreservationRecords"]["quality_score"], 0.0);

    let extended = &value["ExtendedMetadata"];
    assert!(extended["Digitalization"].get("edmIsShownAt").is_some());
    assert_eq!(extended["OriginalData"]["language"], json!([]));
    assert!(extended.get("DocumentationsAPI").is_some());

    let processing = &value["ProcessingMetadata"];
    assert!(processing["processed_date"].is_string());
    assert_eq!(processing["preprocessing_metadata"], json!({}));
}

#[test]
fn test_extraction_is_deterministic() {
    let mapper = MetadataMapper::default();
    let item = ming_vase();
    let first = mapper.process_item(&item, None, None);
    let second = mapper.process_item(&item, None, None);
    assert_eq!(first.descriptive, second.descriptive);
    assert_eq!(first.management, second.management);
    assert_eq!(first.extended, second.extended);
}

#[test]
fn test_delft_record_with_place_fields() {
    let mapper = MetadataMapper::default();
    let item = RawItem::from_value(json!({
        "id": "delft-1",
        "dcTitle": {"def": ["Tile with windmill"]},
        "dcDescription": ["Tin-glazed earthenware tile painted with a windmill and a canal."],
        "edmPlaceLabel": [{"def": "Delft"}, "Rijksmuseum Amsterdam"],
        "edmTimespanLabel": "1700 - 1750",
        "dataProvider": "Rijksmuseum",
        "country": "Netherlands",
        "edmIsShownBy": "https://example.org/tile.jpg",
    }))
    .unwrap();

    let result = mapper.process_item(&item, None, None);
    let descriptive = result.descriptive.unwrap();
    assert_eq!(descriptive.production_place.first().map(String::as_str), Some("delft"));
    assert!(descriptive.shape.contains(&"tile".to_string()));
    assert!(descriptive.glaze.contains(&"tin glaze".to_string()));
    assert!(descriptive.decorations.contains(&"painted:a windmill".to_string()));

    let management = result.management.unwrap();
    assert_eq!(management.title, vec!["Tile with windmill"]);
    assert_eq!(management.years, vec![1700, 1750]);
    assert_eq!(management.period_summary.date_range.as_deref(), Some("1700-1750"));
    assert_eq!(management.providing_institution, json!("Rijksmuseum"));

    let extended = result.extended.unwrap();
    assert_eq!(
        extended.digitalization.edm_is_shown_by,
        json!("https://example.org/tile.jpg")
    );
}

#[test]
fn test_sparse_record_never_degrades() {
    let mapper = MetadataMapper::default();
    for record in [
        json!({}),
        json!({"id": null, "description": null}),
        json!({"id": "x", "edmPlaceLabel": [], "dcDescription": [""]}),
        json!({"id": "y", "Metadata_for_Management": {"Period": "http://example.org/period"}}),
    ] {
        let result = mapper.process_value(record, None, None);
        assert!(!result.is_degraded(), "{:?}", result.error());
        assert_eq!(result.quality_score(), Some(0.0));
    }
}
