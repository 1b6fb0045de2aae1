mod support;

use model_behaviors::{
    Behavior, FieldValue, ModelEvent, Sluggable, SluggableOptions, Sortable, SortableOptions,
};
use support::{InMemoryModel, init_tracing};

// Drives both behaviors through `dyn Behavior`, the way a model manager
// fans out lifecycle notifications.
#[test]
fn create_flow_runs_both_behaviors() {
    init_tracing();
    let behaviors: Vec<Box<dyn Behavior>> = vec![
        Box::new(Sluggable::new(SluggableOptions::new("title")).unwrap()),
        Box::new(Sortable::new(SortableOptions::new("position")).unwrap()),
    ];
    let mut model = InMemoryModel::new("Page", ["id", "title", "slug", "position"])
        .with_row(&[("position", FieldValue::Integer(2))])
        .with_attribute("title", "Über uns");

    for event in [ModelEvent::BeforeValidationOnCreate, ModelEvent::BeforeCreate] {
        for behavior in &behaviors {
            behavior.notify(event, &mut model).unwrap();
        }
    }

    assert_eq!(
        model.attribute("slug"),
        Some(&FieldValue::Text("uber-uns".into()))
    );
    assert_eq!(model.attribute("position"), Some(&FieldValue::Integer(3)));
}

#[test]
fn update_flow_leaves_position_alone() {
    init_tracing();
    let behaviors: Vec<Box<dyn Behavior>> = vec![
        Box::new(Sluggable::new(SluggableOptions::new("title")).unwrap()),
        Box::new(Sortable::new(SortableOptions::new("position")).unwrap()),
    ];
    let mut model = InMemoryModel::new("Page", ["id", "title", "slug", "position"])
        .with_attribute("title", "Renamed Page")
        .with_attribute("slug", FieldValue::Null);

    for behavior in &behaviors {
        behavior
            .notify(ModelEvent::BeforeValidationOnUpdate, &mut model)
            .unwrap();
    }

    assert_eq!(
        model.attribute("slug"),
        Some(&FieldValue::Text("renamed-page".into()))
    );
    assert_eq!(model.attribute("position"), None);
}
