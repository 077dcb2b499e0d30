//! Queries over Thing Descriptions expanded from compact JSON-LD.

mod fixtures;

use fixtures::{
    iot, LAMP_ON_HREF, LAMP_SET_ON_HREF, LIGHT_ONE, LIGHT_ONE_COMPACT, LIGHT_ONE_ID, WALL_SWITCH,
};
use wot_affordances::{
    processing, ActionConstraint, DataPropertyConstraint, Error, InputConstraint, JsonLdExpander,
    PreExpanded, PropertyConstraint, StaticLoader, ThingConstraint, ThingDescription,
    ThingDescriptionSet,
};

fn compact_lamp() -> ThingDescription {
    processing::from_bytes(LIGHT_ONE_COMPACT.as_bytes(), &JsonLdExpander::new())
        .expect("compact lamp expands")
}

fn expanded_lamp() -> ThingDescription {
    processing::from_bytes(LIGHT_ONE.as_bytes(), &PreExpanded).expect("expanded lamp decodes")
}

fn types(locals: &[&str]) -> Option<Vec<String>> {
    Some(locals.iter().map(|l| iot(l)).collect())
}

#[test]
fn compact_lamp_finds_switch_status_property() {
    let set: ThingDescriptionSet = [compact_lamp()].into_iter().collect();
    let constraint = ThingConstraint {
        types: types(&["BinarySwitchControl", "ColourControl"]),
        property: Some(PropertyConstraint {
            types: types(&["SwitchStatus"]),
            data_property: Some(DataPropertyConstraint {
                types: types(&["StatusData"]),
                ..DataPropertyConstraint::default()
            }),
            ..PropertyConstraint::default()
        }),
        ..ThingConstraint::default()
    };

    let result = set.property_affordances(&constraint);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].index, "lamp-on");
    assert_eq!(result[0].form().href.value(), LAMP_ON_HREF);
}

#[test]
fn compact_lamp_finds_turn_on_action() {
    let mut set = ThingDescriptionSet::new();
    set.append(compact_lamp());
    set.append(processing::from_bytes(WALL_SWITCH.as_bytes(), &PreExpanded).expect("decodes"));

    let constraint = ThingConstraint {
        action: Some(ActionConstraint {
            types: types(&["TurnOn"]),
            is_safe: Some(false),
            input: Some(InputConstraint {
                data_property: Some(DataPropertyConstraint {
                    types: types(&["StatusData"]),
                    ..DataPropertyConstraint::default()
                }),
                ..InputConstraint::default()
            }),
            ..ActionConstraint::default()
        }),
        types: types(&["ColourControl"]),
        ..ThingConstraint::default()
    };

    let result = set.action_affordances(&constraint);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].index, "lamp-setOn");
    assert_eq!(result[0].form().href.value(), LAMP_SET_ON_HREF);
    assert!(result[0].is_idempotent.value());
}

#[test]
fn compact_and_expanded_lamp_decode_alike() {
    let compact = compact_lamp();
    let expanded = expanded_lamp();

    assert_eq!(compact.id, LIGHT_ONE_ID);
    assert_eq!(compact.id, expanded.id);
    assert_eq!(compact.types, expanded.types);
    assert_eq!(compact.name, expanded.name);
    assert_eq!(compact.properties.len(), expanded.properties.len());
    assert_eq!(compact.actions.len(), expanded.actions.len());

    let property = |thing: &ThingDescription| {
        thing
            .properties
            .iter()
            .find(|p| p.index == "lamp-on")
            .cloned()
            .expect("lamp-on present")
    };
    assert_eq!(property(&compact), property(&expanded));

    let action = |thing: &ThingDescription| {
        thing
            .actions
            .iter()
            .find(|a| a.index == "lamp-setOn")
            .cloned()
            .expect("lamp-setOn present")
    };
    assert_eq!(action(&compact), action(&expanded));
}

#[test]
fn inline_context_is_expanded() {
    let document = br#"{
        "@context": { "td": "https://www.w3.org/2019/wot/td#", "name": "td:name" },
        "@id": "urn:lamp",
        "name": "LightOne"
    }"#;

    assert!(matches!(
        processing::from_bytes(document, &PreExpanded),
        Err(Error::Expansion(_))
    ));

    let thing = processing::from_bytes(document, &JsonLdExpander::new()).expect("expands");
    assert_eq!(thing.id, "urn:lamp");
    assert_eq!(thing.name.value(), "LightOne");
}

#[test]
fn td_context_is_never_fetched_when_not_bundled() {
    let offline = JsonLdExpander::with_loader(StaticLoader::empty());
    let result = processing::from_bytes(LIGHT_ONE_COMPACT.as_bytes(), &offline);
    assert!(matches!(
        result,
        Err(Error::ContextNotBundled(ref iri)) if iri == "https://www.w3.org/2019/wot/td/v1"
    ));
}

#[test]
fn expanded_documents_pass_through_unchanged() {
    let through_processor =
        processing::from_bytes(LIGHT_ONE.as_bytes(), &JsonLdExpander::new()).expect("decodes");
    assert_eq!(through_processor, expanded_lamp());
}
