//! Structural class model consumed by the metric algorithms
//!
//! A [`ClassStructure`] is a frozen snapshot of one class: its attributes, its
//! methods, and the method → attribute / method → method relations. The
//! upstream parser builds it once per class; every metric reads it without
//! mutation, so a single instance can be shared across threads freely.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{MetricError, MetricResult};

/// An attribute (field) declared by the class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// Declared type category (e.g. `int`, `java.util.List`)
    #[serde(default)]
    pub type_name: String,
    #[serde(default)]
    pub is_static: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            is_static: false,
        }
    }

    pub fn static_field(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A method declared by the class, with the attributes it touches and the
/// sibling methods it invokes.
///
/// Overloads must be given distinct names by the parser (e.g. by appending the
/// signature), since the name is the method's identity within the class.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub parameter_types: Vec<String>,
    #[serde(default)]
    pub reads: BTreeSet<String>,
    #[serde(default)]
    pub writes: BTreeSet<String>,
    #[serde(default)]
    pub calls: BTreeSet<String>,
    #[serde(default)]
    pub is_constructor: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_private: bool,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add attributes this method reads
    pub fn reading<I, S>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reads.extend(attrs.into_iter().map(Into::into));
        self
    }

    /// Add attributes this method writes
    pub fn writing<I, S>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.writes.extend(attrs.into_iter().map(Into::into));
        self
    }

    /// Add attributes this method both reads and writes
    pub fn using<I, S>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for attr in attrs {
            let attr = attr.into();
            self.reads.insert(attr.clone());
            self.writes.insert(attr);
        }
        self
    }

    /// Add sibling methods this method calls
    pub fn calling<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.calls.extend(methods.into_iter().map(Into::into));
        self
    }

    pub fn with_parameters<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameter_types.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn constructor(mut self) -> Self {
        self.is_constructor = true;
        self
    }

    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    /// Attributes read or written by this method
    pub fn uses(&self) -> BTreeSet<&str> {
        self.reads
            .iter()
            .chain(self.writes.iter())
            .map(String::as_str)
            .collect()
    }
}

/// Immutable structural snapshot of one class.
///
/// Only obtainable through [`ClassStructureBuilder::build`] or deserialization,
/// both of which validate that every relation stays inside the class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClassStructureData")]
pub struct ClassStructure {
    name: String,
    attributes: Vec<Attribute>,
    methods: Vec<Method>,
}

impl ClassStructure {
    pub fn builder(name: impl Into<String>) -> ClassStructureBuilder {
        ClassStructureBuilder::new(name)
    }

    /// Fully qualified class name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Attributes used (read or written) by the named method
    pub fn uses_of(&self, method: &str) -> Option<BTreeSet<&str>> {
        self.method(method).map(Method::uses)
    }

    /// Sibling methods called by the named method
    pub fn calls_of(&self, method: &str) -> Option<&BTreeSet<String>> {
        self.method(method).map(|m| &m.calls)
    }

    fn validate(&self) -> MetricResult<()> {
        if self.name.trim().is_empty() {
            return Err(MetricError::malformed(&self.name, "class name is empty"));
        }

        let mut attributes = FxHashSet::default();
        for attr in &self.attributes {
            if !attributes.insert(attr.name.as_str()) {
                return Err(MetricError::malformed(
                    &self.name,
                    format!("duplicate attribute '{}'", attr.name),
                ));
            }
        }

        let mut methods = FxHashSet::default();
        for method in &self.methods {
            if !methods.insert(method.name.as_str()) {
                return Err(MetricError::malformed(
                    &self.name,
                    format!("duplicate method '{}'", method.name),
                ));
            }
        }

        for method in &self.methods {
            if let Some(attr) = method
                .reads
                .iter()
                .chain(method.writes.iter())
                .find(|a| !attributes.contains(a.as_str()))
            {
                return Err(MetricError::malformed(
                    &self.name,
                    format!(
                        "method '{}' uses attribute '{}' not declared in the class",
                        method.name, attr
                    ),
                ));
            }
            if let Some(callee) = method.calls.iter().find(|c| !methods.contains(c.as_str())) {
                return Err(MetricError::malformed(
                    &self.name,
                    format!(
                        "method '{}' calls '{}' which is not a method of the class",
                        method.name, callee
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// Incremental constructor for [`ClassStructure`]
#[derive(Debug, Clone, Default)]
pub struct ClassStructureBuilder {
    name: String,
    attributes: Vec<Attribute>,
    methods: Vec<Method>,
}

impl ClassStructureBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Validate and freeze the structure
    pub fn build(self) -> MetricResult<ClassStructure> {
        let class = ClassStructure {
            name: self.name,
            attributes: self.attributes,
            methods: self.methods,
        };
        class.validate()?;
        Ok(class)
    }
}

/// Unvalidated wire form; converted through the builder's checks
#[derive(Deserialize)]
struct ClassStructureData {
    name: String,
    #[serde(default)]
    attributes: Vec<Attribute>,
    #[serde(default)]
    methods: Vec<Method>,
}

impl TryFrom<ClassStructureData> for ClassStructure {
    type Error = MetricError;

    fn try_from(data: ClassStructureData) -> MetricResult<Self> {
        ClassStructureBuilder {
            name: data.name,
            attributes: data.attributes,
            methods: data.methods,
        }
        .build()
    }
}
