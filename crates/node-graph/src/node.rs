//! Live nodes, ports and widget bindings
//!
//! A `Node` is built by a [`NodeType`](crate::synthesis::NodeType) and then
//! owned by a [`ConnectionGraph`](crate::graph::ConnectionGraph). Ports and
//! widget bindings belong to exactly one node. Edge bookkeeping on ports is
//! only mutated by the graph, so the accessors here are read-only.

use serde::{Deserialize, Serialize};

use crate::descriptor::{
    BaseShape, Cardinality, Direction, PortDescriptor, Rgb, WidgetDescriptor, WidgetKind,
};
use crate::error::{GraphError, Result};
use crate::types::{EdgeId, GroupId, NodeId};

/// Current value of an embedded widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum WidgetValue {
    /// Text input contents
    Text(String),
    /// Selected combo menu index
    Choice(usize),
    /// Checkbox state
    Checked(bool),
}

/// A widget descriptor paired with its current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetBinding {
    pub descriptor: WidgetDescriptor,
    pub value: WidgetValue,
}

impl WidgetBinding {
    /// Bind a widget at its default value
    pub fn new(descriptor: WidgetDescriptor) -> Self {
        let value = descriptor.default_value();
        Self { descriptor, value }
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Check that a value fits this widget's kind and options
    pub fn check(&self, value: &WidgetValue) -> Result<()> {
        let invalid = |reason: String| GraphError::InvalidWidgetValue {
            widget: self.descriptor.name.clone(),
            reason,
        };
        match (&self.descriptor.kind, value) {
            (WidgetKind::TextInput { .. }, WidgetValue::Text(_)) => Ok(()),
            (WidgetKind::Checkbox { .. }, WidgetValue::Checked(_)) => Ok(()),
            (WidgetKind::ComboMenu { items, .. }, WidgetValue::Choice(index)) => {
                if *index < items.len() {
                    Ok(())
                } else {
                    Err(invalid(format!(
                        "index {} out of range for {} items",
                        index,
                        items.len()
                    )))
                }
            }
            (kind, value) => Err(invalid(format!(
                "{} does not fit a {} widget",
                value_kind(value),
                widget_kind(kind)
            ))),
        }
    }

    /// The selected item text of a combo menu
    pub fn selected_item(&self) -> Option<&str> {
        match (&self.descriptor.kind, &self.value) {
            (WidgetKind::ComboMenu { items, .. }, WidgetValue::Choice(index)) => {
                items.get(*index).map(String::as_str)
            }
            _ => None,
        }
    }
}

fn value_kind(value: &WidgetValue) -> &'static str {
    match value {
        WidgetValue::Text(_) => "text",
        WidgetValue::Choice(_) => "choice",
        WidgetValue::Checked(_) => "checked state",
    }
}

fn widget_kind(kind: &WidgetKind) -> &'static str {
    match kind {
        WidgetKind::TextInput { .. } => "text input",
        WidgetKind::ComboMenu { .. } => "combo menu",
        WidgetKind::Checkbox { .. } => "checkbox",
    }
}

/// A live port owned by one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    node_id: NodeId,
    descriptor: PortDescriptor,
    /// Attached edges in the order they were connected
    edges: Vec<EdgeId>,
}

impl Port {
    pub(crate) fn new(node_id: NodeId, descriptor: PortDescriptor) -> Self {
        Self {
            node_id,
            descriptor,
            edges: Vec::new(),
        }
    }

    /// Id of the owning node
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn direction(&self) -> Direction {
        self.descriptor.direction
    }

    pub fn cardinality(&self) -> Cardinality {
        self.descriptor.cardinality
    }

    pub fn is_locked(&self) -> bool {
        self.descriptor.locked
    }

    pub fn descriptor(&self) -> &PortDescriptor {
        &self.descriptor
    }

    /// Ids of attached edges, oldest first
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn is_connected(&self) -> bool {
        !self.edges.is_empty()
    }

    pub(crate) fn attach(&mut self, edge_id: EdgeId) {
        if !self.edges.contains(&edge_id) {
            self.edges.push(edge_id);
        }
    }

    pub(crate) fn detach(&mut self, edge_id: &str) {
        self.edges.retain(|e| e != edge_id);
    }

    pub(crate) fn set_locked(&mut self, locked: bool) {
        self.descriptor.locked = locked;
    }
}

/// A live instance of a node type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    id: NodeId,
    type_id: String,
    /// Display name shown by the renderer
    pub name: String,
    pub base_shape: BaseShape,
    pub color: Option<Rgb>,
    inputs: Vec<Port>,
    outputs: Vec<Port>,
    widgets: Vec<WidgetBinding>,
    group_id: Option<GroupId>,
    pub disabled: bool,
}

impl Node {
    pub(crate) fn new(
        id: NodeId,
        type_id: String,
        name: String,
        base_shape: BaseShape,
        color: Option<Rgb>,
    ) -> Self {
        Self {
            id,
            type_id,
            name,
            base_shape,
            color,
            inputs: Vec::new(),
            outputs: Vec::new(),
            widgets: Vec::new(),
            group_id: None,
            disabled: false,
        }
    }

    pub(crate) fn add_port(&mut self, descriptor: PortDescriptor) {
        let port = Port::new(self.id.clone(), descriptor);
        match port.direction() {
            Direction::In => self.inputs.push(port),
            Direction::Out => self.outputs.push(port),
        }
    }

    pub(crate) fn add_widget(&mut self, descriptor: WidgetDescriptor) {
        self.widgets.push(WidgetBinding::new(descriptor));
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Qualified id of the node type this node was built from
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Group or backdrop containing this node
    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub(crate) fn set_group(&mut self, group_id: Option<GroupId>) {
        self.group_id = group_id;
    }

    /// Input ports in declared order
    pub fn inputs(&self) -> &[Port] {
        &self.inputs
    }

    /// Output ports in declared order
    pub fn outputs(&self) -> &[Port] {
        &self.outputs
    }

    /// Ports of one direction in declared order
    pub fn ports(&self, direction: Direction) -> &[Port] {
        match direction {
            Direction::In => &self.inputs,
            Direction::Out => &self.outputs,
        }
    }

    /// Input port by name
    pub fn input(&self, name: &str) -> Option<&Port> {
        self.inputs.iter().find(|p| p.name() == name)
    }

    /// Output port by name
    pub fn output(&self, name: &str) -> Option<&Port> {
        self.outputs.iter().find(|p| p.name() == name)
    }

    /// Input port by declared position
    pub fn input_at(&self, index: usize) -> Option<&Port> {
        self.inputs.get(index)
    }

    /// Output port by declared position
    pub fn output_at(&self, index: usize) -> Option<&Port> {
        self.outputs.get(index)
    }

    /// Find a port by name, looking at the given direction first
    ///
    /// Inputs and outputs may share a name, so callers that know the
    /// direction they want get that port when both exist.
    pub fn find_port(&self, name: &str, preferred: Direction) -> Option<&Port> {
        let (first, second) = match preferred {
            Direction::In => (&self.inputs, &self.outputs),
            Direction::Out => (&self.outputs, &self.inputs),
        };
        first.iter().chain(second.iter()).find(|p| p.name() == name)
    }

    pub(crate) fn port_mut(&mut self, name: &str, direction: Direction) -> Option<&mut Port> {
        let ports = match direction {
            Direction::In => &mut self.inputs,
            Direction::Out => &mut self.outputs,
        };
        ports.iter_mut().find(|p| p.name() == name)
    }

    /// All edge ids touching any port of this node
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        let mut ids: Vec<EdgeId> = Vec::new();
        for port in self.inputs.iter().chain(self.outputs.iter()) {
            for edge in port.edges() {
                if !ids.contains(edge) {
                    ids.push(edge.clone());
                }
            }
        }
        ids
    }

    /// Widget bindings in declared order
    pub fn widgets(&self) -> &[WidgetBinding] {
        &self.widgets
    }

    pub fn widget(&self, name: &str) -> Option<&WidgetBinding> {
        self.widgets.iter().find(|w| w.name() == name)
    }

    /// Current value of a widget
    pub fn widget_value(&self, name: &str) -> Option<&WidgetValue> {
        self.widget(name).map(|w| &w.value)
    }

    /// Replace a widget value after checking it fits the widget
    ///
    /// Returns the previous value.
    pub(crate) fn set_widget_value(
        &mut self,
        name: &str,
        value: WidgetValue,
    ) -> Result<WidgetValue> {
        let node_id = self.id.clone();
        let binding = self
            .widgets
            .iter_mut()
            .find(|w| w.descriptor.name == name)
            .ok_or_else(|| GraphError::UnknownWidget {
                node_id,
                widget: name.to_string(),
            })?;
        binding.check(&value)?;
        Ok(std::mem::replace(&mut binding.value, value))
    }
}
