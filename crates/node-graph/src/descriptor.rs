//! Declarative node type descriptors
//!
//! A `NodeTypeDescriptor` is plain data: it lists the ports and embedded
//! widgets of a node type together with identity metadata. Descriptors are
//! either written in Rust (see [`crate::builder::NodeTypeBuilder`]) or
//! deserialized from a JSON document; in both cases the synthesizer is the
//! only consumer and no code is generated or executed.
//!
//! # Example document
//!
//! ```json
//! {
//!   "qualifiedId": "shape.emitter",
//!   "displayName": "Emitter",
//!   "ports": [
//!     { "name": "o", "direction": "out", "cardinality": "single" }
//!   ],
//!   "widgets": [
//!     { "type": "checkbox", "name": "enabled", "label": "Enabled", "text": "On", "state": true }
//!   ]
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::node::WidgetValue;

/// Which side of a node a port sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Receives edges
    In,
    /// Emits edges
    Out,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::In => write!(f, "in"),
            Direction::Out => write!(f, "out"),
        }
    }
}

/// How many simultaneous edges a port may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// At most one edge; connecting again replaces the existing edge
    Single,
    /// Any number of edges
    Multi,
}

impl Cardinality {
    /// Default cardinality for a freshly declared port
    ///
    /// Inputs take a single pipe and outputs fan out.
    pub fn default_for(direction: Direction) -> Self {
        match direction {
            Direction::In => Cardinality::Single,
            Direction::Out => Cardinality::Multi,
        }
    }
}

/// An RGB color triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Name of a paint routine owned by the rendering layer
///
/// The core stores it and hands it back, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderHook(pub String);

impl RenderHook {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// One entry of a port's allow-list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptRule {
    /// Qualified id of the remote node type
    pub node_type: String,
    /// Name of the remote port
    pub port_name: String,
    /// Direction of the remote port
    pub direction: Direction,
}

impl AcceptRule {
    pub fn new(
        node_type: impl Into<String>,
        port_name: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            node_type: node_type.into(),
            port_name: port_name.into(),
            direction,
        }
    }

    /// Check whether a remote port matches this rule
    pub fn matches(&self, node_type: &str, port_name: &str, direction: Direction) -> bool {
        self.node_type == node_type && self.port_name == port_name && self.direction == direction
    }
}

/// Immutable description of one port
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PortDocument")]
pub struct PortDescriptor {
    /// Port name, unique among sibling ports of the same direction
    pub name: String,
    pub direction: Direction,
    pub cardinality: Cardinality,
    /// Whether the renderer shows the port name
    pub display_label: bool,
    pub color: Option<Rgb>,
    /// Initial lock state; locked ports neither gain nor lose connections
    pub locked: bool,
    pub render_hook: Option<RenderHook>,
    /// If non-empty, the only peers this port accepts
    pub accept_rules: Vec<AcceptRule>,
}

impl PortDescriptor {
    /// Create a port with the defaults for its direction
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
            cardinality: Cardinality::default_for(direction),
            display_label: true,
            color: None,
            locked: false,
            render_hook: None,
            accept_rules: Vec::new(),
        }
    }

    /// Create an input port (single connection by default)
    pub fn input(name: impl Into<String>) -> Self {
        Self::new(name, Direction::In)
    }

    /// Create an output port (multiple connections by default)
    pub fn output(name: impl Into<String>) -> Self {
        Self::new(name, Direction::Out)
    }

    /// Allow any number of connections
    pub fn multi(mut self) -> Self {
        self.cardinality = Cardinality::Multi;
        self
    }

    /// Allow at most one connection
    pub fn single(mut self) -> Self {
        self.cardinality = Cardinality::Single;
        self
    }

    /// Hide the port name in the rendered node
    pub fn hide_label(mut self) -> Self {
        self.display_label = false;
        self
    }

    pub fn with_color(mut self, r: u8, g: u8, b: u8) -> Self {
        self.color = Some(Rgb(r, g, b));
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn with_render_hook(mut self, name: impl Into<String>) -> Self {
        self.render_hook = Some(RenderHook::new(name));
        self
    }

    /// Restrict accepted peers; may be called repeatedly
    pub fn accept(mut self, rule: AcceptRule) -> Self {
        self.accept_rules.push(rule);
        self
    }

    /// Check whether this port accepts the given remote port
    ///
    /// An empty allow-list accepts every peer.
    pub fn accepts(&self, node_type: &str, port_name: &str, direction: Direction) -> bool {
        self.accept_rules.is_empty()
            || self
                .accept_rules
                .iter()
                .any(|rule| rule.matches(node_type, port_name, direction))
    }
}

/// Wire form of a port; lets documents omit fields that default per direction
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PortDocument {
    name: String,
    direction: Direction,
    #[serde(default)]
    cardinality: Option<Cardinality>,
    #[serde(default = "default_true")]
    display_label: bool,
    #[serde(default)]
    color: Option<Rgb>,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    render_hook: Option<RenderHook>,
    #[serde(default)]
    accept_rules: Vec<AcceptRule>,
}

fn default_true() -> bool {
    true
}

impl From<PortDocument> for PortDescriptor {
    fn from(doc: PortDocument) -> Self {
        Self {
            cardinality: doc
                .cardinality
                .unwrap_or_else(|| Cardinality::default_for(doc.direction)),
            name: doc.name,
            direction: doc.direction,
            display_label: doc.display_label,
            color: doc.color,
            locked: doc.locked,
            render_hook: doc.render_hook,
            accept_rules: doc.accept_rules,
        }
    }
}

/// Kind-specific payload of an embedded widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetKind {
    /// Single-line text field
    #[serde(rename_all = "camelCase")]
    TextInput {
        #[serde(default)]
        placeholder_text: Option<String>,
        #[serde(default)]
        text: String,
    },
    /// Single-choice drop-down menu
    ComboMenu {
        items: Vec<String>,
        #[serde(default)]
        selected: usize,
    },
    /// Boolean toggle
    Checkbox {
        #[serde(default)]
        text: String,
        #[serde(default)]
        state: bool,
    },
}

/// Immutable description of one embedded control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDescriptor {
    /// Widget name, unique within the node
    pub name: String,
    pub label: String,
    /// Properties-panel tab the widget is listed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(flatten)]
    pub kind: WidgetKind,
}

impl WidgetDescriptor {
    fn with_kind(name: impl Into<String>, label: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            tab: None,
            tooltip: None,
            kind,
        }
    }

    /// Create a text input widget
    pub fn text_input(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            label,
            WidgetKind::TextInput {
                placeholder_text: None,
                text: String::new(),
            },
        )
    }

    /// Create a combo menu with the first item selected
    pub fn combo_menu<I, S>(name: impl Into<String>, label: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(
            name,
            label,
            WidgetKind::ComboMenu {
                items: items.into_iter().map(Into::into).collect(),
                selected: 0,
            },
        )
    }

    /// Create a checkbox
    pub fn checkbox(
        name: impl Into<String>,
        label: impl Into<String>,
        text: impl Into<String>,
        state: bool,
    ) -> Self {
        Self::with_kind(
            name,
            label,
            WidgetKind::Checkbox {
                text: text.into(),
                state,
            },
        )
    }

    pub fn with_tab(mut self, tab: impl Into<String>) -> Self {
        self.tab = Some(tab.into());
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set the placeholder of a text input; ignored for other kinds
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        if let WidgetKind::TextInput {
            placeholder_text, ..
        } = &mut self.kind
        {
            *placeholder_text = Some(placeholder.into());
        }
        self
    }

    /// Select a combo menu entry; ignored for other kinds
    pub fn with_selected(mut self, index: usize) -> Self {
        if let WidgetKind::ComboMenu { selected, .. } = &mut self.kind {
            *selected = index;
        }
        self
    }

    /// Value a fresh node starts with
    pub fn default_value(&self) -> WidgetValue {
        match &self.kind {
            WidgetKind::TextInput { text, .. } => WidgetValue::Text(text.clone()),
            WidgetKind::ComboMenu { selected, .. } => WidgetValue::Choice(*selected),
            WidgetKind::Checkbox { state, .. } => WidgetValue::Checked(*state),
        }
    }
}

/// Base drawing shape of a node, a hint for the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseShape {
    #[default]
    Rectangular,
    Circular,
}

/// Complete declarative description of a node type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTypeDescriptor {
    /// Globally unique id of the form `namespace.identifier`
    pub qualified_id: String,
    /// Default display name of new nodes
    pub display_name: String,
    #[serde(default)]
    pub ports: Vec<PortDescriptor>,
    #[serde(default)]
    pub widgets: Vec<WidgetDescriptor>,
    #[serde(default)]
    pub base_shape: BaseShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

impl NodeTypeDescriptor {
    /// Create a descriptor with no ports or widgets
    pub fn new(qualified_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            qualified_id: qualified_id.into(),
            display_name: display_name.into(),
            ports: Vec::new(),
            widgets: Vec::new(),
            base_shape: BaseShape::Rectangular,
            color: None,
        }
    }

    /// Parse a descriptor from a JSON authoring document
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Serialize the descriptor as a JSON authoring document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Input ports in declared order
    pub fn inputs(&self) -> impl Iterator<Item = &PortDescriptor> {
        self.ports.iter().filter(|p| p.direction == Direction::In)
    }

    /// Output ports in declared order
    pub fn outputs(&self) -> impl Iterator<Item = &PortDescriptor> {
        self.ports.iter().filter(|p| p.direction == Direction::Out)
    }

    /// The namespace part of the qualified id (everything before the last `.`)
    pub fn namespace(&self) -> &str {
        namespace_of(&self.qualified_id)
    }
}

/// Everything before the last `.` of a qualified id
pub fn namespace_of(qualified_id: &str) -> &str {
    qualified_id
        .rsplit_once('.')
        .map(|(namespace, _)| namespace)
        .unwrap_or("")
}

/// Trait for node types defined in Rust code
///
/// ```ignore
/// impl NodeDescriptor for Emitter {
///     fn descriptor() -> NodeTypeDescriptor {
///         NodeTypeBuilder::new("shape.emitter", "Emitter")
///             .output(PortDescriptor::output("o").single())
///             .build()
///     }
/// }
///
/// inventory::submit!(node_graph::DescriptorFn(Emitter::descriptor));
/// ```
pub trait NodeDescriptor {
    /// Get the static descriptor for this node type
    fn descriptor() -> NodeTypeDescriptor
    where
        Self: Sized;
}

/// Link-time registration of a built-in node type
///
/// Collected by [`crate::registry::NodeTypeRegistry::register_builtins`].
pub struct DescriptorFn(pub fn() -> NodeTypeDescriptor);

inventory::collect!(DescriptorFn);
