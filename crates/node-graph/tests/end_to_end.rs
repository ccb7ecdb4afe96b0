//! Whole-session scenarios through the public API

use std::sync::Arc;

use node_graph::{
    audit_graph, synthesize, synthesize_json, ConnectionGraph, Direction, GraphError, GraphEvent,
    NodeTypeBuilder, PortDescriptor, VecEventSink, WidgetDescriptor, WrapTarget,
};

fn shape_session(events: Arc<VecEventSink>) -> ConnectionGraph {
    let mut graph = ConnectionGraph::with_event_sink(events);
    let emitter = NodeTypeBuilder::new("shape.emitter", "Emitter")
        .output(PortDescriptor::output("o").single())
        .build();
    let receiver = synthesize_json(
        r#"{
            "qualifiedId": "shape.receiver",
            "displayName": "Receiver",
            "ports": [{"name": "i", "direction": "in", "cardinality": "multi"}]
        }"#,
    )
    .unwrap();
    graph.register(synthesize(emitter).unwrap()).unwrap();
    graph.register(receiver).unwrap();
    graph
}

#[test]
fn test_emitter_receiver_scenario() {
    let events = Arc::new(VecEventSink::new());
    let mut graph = shape_session(events.clone());

    let emitter = graph.create_node("shape.emitter").unwrap();
    let first = graph.create_node("shape.receiver").unwrap();

    graph.connect(&emitter, "o", &first, "i").unwrap();
    graph.connect(&emitter, "o", &first, "i").unwrap();
    assert_eq!(graph.edge_count(), 1);

    let second = graph.create_node("shape.receiver").unwrap();
    let edge = graph.connect(&emitter, "o", &second, "i").unwrap();

    let out = graph.edges_of_port(&emitter, "o", Direction::Out).unwrap();
    assert_eq!(out, vec![&edge]);
    assert_eq!(edge.to.node_id, second);
    assert!(graph
        .edges_of_port(&first, "i", Direction::In)
        .unwrap()
        .is_empty());
    assert!(audit_graph(&graph).is_empty());

    let edge_events: Vec<&'static str> = events
        .events()
        .iter()
        .filter_map(|e| match e {
            GraphEvent::EdgeCreated { .. } => Some("created"),
            GraphEvent::EdgeRemoved { .. } => Some("removed"),
            _ => None,
        })
        .collect();
    assert_eq!(edge_events, vec!["created", "removed", "created"]);
}

#[test]
fn test_registry_round_trip() {
    let name = WidgetDescriptor::text_input("name", "Name")
        .with_placeholder("type here");
    let descriptor = NodeTypeBuilder::new("nodes.widget.Form", "form")
        .input(PortDescriptor::input("in"))
        .output(PortDescriptor::output("out 1"))
        .output(PortDescriptor::output("out 2"))
        .widget(name)
        .widget(WidgetDescriptor::checkbox("flag", "", "Flag", false))
        .build();

    let mut graph = ConnectionGraph::new();
    let first = synthesize(descriptor.clone()).unwrap();
    graph.register(first).unwrap();
    let again = synthesize(descriptor.clone()).unwrap();
    let err = graph.register(again).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateTypeId(_)));

    let form = graph.lookup("nodes.widget.Form").unwrap();
    let node = form.instantiate("form-1");
    let outputs: Vec<&str> = node.outputs().iter().map(|p| p.name()).collect();
    assert_eq!(outputs, vec!["out 1", "out 2"]);
    let widgets: Vec<&str> = node.widgets().iter().map(|w| w.name()).collect();
    assert_eq!(widgets, vec!["name", "flag"]);

    // The JSON authoring form describes the same type
    let reparsed = synthesize_json(&descriptor.to_json().unwrap()).unwrap();
    assert_eq!(reparsed.descriptor(), &descriptor);
}

#[test]
fn test_failed_operations_leave_graph_unchanged() {
    let events = Arc::new(VecEventSink::new());
    let mut graph = shape_session(events.clone());
    let emitter = graph.create_node("shape.emitter").unwrap();
    let receiver = graph.create_node("shape.receiver").unwrap();
    graph.connect(&emitter, "o", &receiver, "i").unwrap();
    graph.wrap(WrapTarget::NewGroup, [emitter.clone()]).unwrap();
    events.clear();

    assert!(graph.connect(&receiver, "i", &emitter, "o").is_err());
    assert!(graph.create_node("shape.unknown").is_err());
    assert!(graph.disconnect("edge-99").is_err());
    let members = [receiver.clone(), "node-99".to_string()];
    assert!(graph.wrap(WrapTarget::NewGroup, members).is_err());

    assert!(events.events().is_empty());
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.group_count(), 1);
    assert!(graph.group_of(&receiver).is_none());
    assert!(audit_graph(&graph).is_empty());
}
