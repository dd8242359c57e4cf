//! Wire-format coverage: field descriptor lists as a host application
//! stores them in JSON config.

use formkit::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn full_form_config_round_trips() {
    let original = json!([
        {
            "type": "text",
            "name": "title",
            "label": "Title",
            "required": true,
            "placeholder": "Enter a title",
            "minLength": 1,
            "maxLength": 80
        },
        {
            "type": "textarea",
            "name": "body",
            "label": "Body",
            "rows": 6
        },
        {
            "type": "multiSelect",
            "name": "tags",
            "label": "Tags",
            "options": [
                {"label": "Bug", "value": "bug"},
                {"label": "Feature", "value": "feature"}
            ],
            "maxSelect": 5
        },
        {
            "type": "radio",
            "name": "priority",
            "label": "Priority",
            "direction": "horizontal",
            "options": [
                {"label": "Low", "value": 1},
                {"label": "High", "value": 2}
            ]
        },
        {
            "type": "timePicker",
            "name": "due",
            "label": "Due Time"
        }
    ]);

    let list: FieldList = serde_json::from_value(original.clone()).unwrap();
    assert_eq!(list.len(), 5);

    let names: Vec<&str> = list.names().collect();
    assert_eq!(names, vec!["title", "body", "tags", "priority", "due"]);

    let reserialized = serde_json::to_value(&list).unwrap();
    let back: FieldList = serde_json::from_value(reserialized).unwrap();
    assert_eq!(list, back);
}

#[test]
fn camel_case_attributes_on_the_wire() {
    let def = FieldDef::Text(TextField {
        metadata: FieldMetadata::new("username", "Username").required(),
        default: Some("guest".into()),
        min_length: Some(3),
        max_length: Some(20),
    });

    let value = serde_json::to_value(&def).unwrap();
    assert_eq!(value["type"], "text");
    assert_eq!(value["minLength"], 3);
    assert_eq!(value["maxLength"], 20);
    assert_eq!(value["defaultValue"], "guest");
    assert_eq!(value["required"], true);
}

#[test]
fn class_name_attribute_uses_react_spelling() {
    let mut meta = FieldMetadata::new("x", "X");
    meta.class_name = Some("wide".into());
    let def = FieldDef::Text(TextField {
        metadata: meta,
        ..TextField::default()
    });

    let value = serde_json::to_value(&def).unwrap();
    assert_eq!(value["className"], "wide");
}

#[test]
fn validation_spec_round_trips() {
    let json = json!({
        "type": "text",
        "name": "code",
        "label": "Code",
        "validation": {
            "pattern": "^[A-Z]{3}$",
            "message": "Three capital letters"
        }
    });

    let def: FieldDef = serde_json::from_value(json).unwrap();
    let spec = def.validation().unwrap();
    assert_eq!(spec.pattern.as_deref(), Some("^[A-Z]{3}$"));
    assert_eq!(spec.message.as_deref(), Some("Three capital letters"));

    let back = serde_json::to_value(&def).unwrap();
    assert_eq!(back["validation"]["pattern"], "^[A-Z]{3}$");
}

#[test]
fn file_info_uses_type_key_for_mime() {
    let file = FileInfo::new("cv.pdf", 1024, "application/pdf");
    let value = serde_json::to_value(&file).unwrap();
    assert_eq!(
        value,
        json!({"name": "cv.pdf", "size": 1024, "type": "application/pdf"})
    );

    let back: FileInfo = serde_json::from_value(value).unwrap();
    assert_eq!(back, file);
}

#[test]
fn field_values_accept_mixed_json() {
    let values: FormValues = serde_json::from_value(json!({
        "name": "Ada",
        "age": 36,
        "subscribed": true,
        "tags": ["math", "computing"],
        "avatar": {"name": "ada.png", "size": 2048, "type": "image/png"},
        "notes": null
    }))
    .unwrap();

    assert_eq!(values.get_str("name"), Some("Ada"));
    assert_eq!(values.get_f64("age"), Some(36.0));
    assert_eq!(values.get_bool("subscribed"), Some(true));
    assert_eq!(
        values.get("tags").unwrap().as_array().unwrap().len(),
        2
    );
    assert!(values.get("avatar").unwrap().as_file().is_some());
    assert_eq!(values.get("notes"), Some(&FieldValue::Null));
}

#[test]
fn unknown_descriptor_survives_a_round_trip() {
    let json = json!({
        "type": "starRating",
        "name": "score",
        "label": "Score",
        "required": true
    });

    let def: FieldDef = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(def.raw_kind(), "starRating");

    let back = serde_json::to_value(&def).unwrap();
    assert_eq!(back["type"], "starRating");
    assert_eq!(back["name"], "score");
}
