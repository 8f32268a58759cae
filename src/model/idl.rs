//! Interface description model
//!
//! Parsing IDL text is outside this crate. Interface definitions arrive already
//! structured (see [`IdlLibrary`]) and are resolved into an [`IdlInterface`] by
//! repository id, including the inherited operations and attributes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::model::IdlError;

static REPID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^IDL:([A-Za-z_][\w.]*(?:/[A-Za-z_][\w.]*)+):(\d+\.\d+)$")
        .expect("repository id pattern is valid")
});

/// A parsed `IDL:<modules>/<Name>:<version>` repository id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    modules: Vec<String>,
    name: String,
    version: String,
}

impl RepositoryId {
    /// Slash-joined module path, e.g. `omg.org/CosEventComm`
    pub fn namespace(&self) -> String {
        self.modules.join("/")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl FromStr for RepositoryId {
    type Err = IdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = REPID_PATTERN
            .captures(s.trim())
            .ok_or_else(|| IdlError::MalformedRepositoryId(s.to_string()))?;

        let mut segments: Vec<String> = caps[1].split('/').map(str::to_string).collect();
        // The pattern guarantees at least two segments
        let name = segments.pop().unwrap_or_default();

        Ok(Self {
            modules: segments,
            name,
            version: caps[2].to_string(),
        })
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IDL:{}/{}:{}", self.namespace(), self.name, self.version)
    }
}

/// Abstract IDL type descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IdlType {
    Void,
    Boolean,
    Char,
    WChar,
    Octet,
    Short,
    UShort,
    Long,
    ULong,
    LongLong,
    ULongLong,
    Float,
    Double,
    String,
    WString,
    Any,
    Object,
    Sequence(Box<IdlType>),
    /// Scoped name such as `CF::Properties`
    Named(String),
}

impl IdlType {
    /// Scoped name segments for named types
    pub fn scoped_name(&self) -> Option<Vec<&str>> {
        match self {
            IdlType::Named(name) => Some(name.split("::").filter(|s| !s.is_empty()).collect()),
            _ => None,
        }
    }
}

/// Element part of a sequence body, dropping a bound that sits outside any nested `<...>`
fn strip_sequence_bound(inner: &str) -> &str {
    let mut depth = 0usize;
    let mut bound_at = None;
    for (idx, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => bound_at = Some(idx),
            _ => {}
        }
    }
    match bound_at {
        Some(idx) => &inner[..idx],
        None => inner,
    }
}

impl FromStr for IdlType {
    type Err = IdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");

        if let Some(inner) = normalized
            .strip_prefix("sequence")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('<'))
            .and_then(|rest| rest.strip_suffix('>'))
        {
            // Bounded sequences (`sequence<octet, 16>`) keep only the element type
            let element = strip_sequence_bound(inner);
            return Ok(IdlType::Sequence(Box::new(element.parse()?)));
        }

        let ty = match normalized.as_str() {
            "void" => IdlType::Void,
            "boolean" => IdlType::Boolean,
            "char" => IdlType::Char,
            "wchar" => IdlType::WChar,
            "octet" => IdlType::Octet,
            "short" => IdlType::Short,
            "unsigned short" => IdlType::UShort,
            "long" => IdlType::Long,
            "unsigned long" => IdlType::ULong,
            "long long" => IdlType::LongLong,
            "unsigned long long" => IdlType::ULongLong,
            "float" => IdlType::Float,
            "double" => IdlType::Double,
            "string" => IdlType::String,
            "wstring" => IdlType::WString,
            "any" => IdlType::Any,
            "Object" => IdlType::Object,
            other if other.contains("::") && !other.contains(' ') => {
                IdlType::Named(other.trim_start_matches("::").to_string())
            }
            _ => return Err(IdlError::UnrecognizedType(s.to_string())),
        };
        Ok(ty)
    }
}

impl TryFrom<String> for IdlType {
    type Error = IdlError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for IdlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdlType::Void => write!(f, "void"),
            IdlType::Boolean => write!(f, "boolean"),
            IdlType::Char => write!(f, "char"),
            IdlType::WChar => write!(f, "wchar"),
            IdlType::Octet => write!(f, "octet"),
            IdlType::Short => write!(f, "short"),
            IdlType::UShort => write!(f, "unsigned short"),
            IdlType::Long => write!(f, "long"),
            IdlType::ULong => write!(f, "unsigned long"),
            IdlType::LongLong => write!(f, "long long"),
            IdlType::ULongLong => write!(f, "unsigned long long"),
            IdlType::Float => write!(f, "float"),
            IdlType::Double => write!(f, "double"),
            IdlType::String => write!(f, "string"),
            IdlType::WString => write!(f, "wstring"),
            IdlType::Any => write!(f, "any"),
            IdlType::Object => write!(f, "Object"),
            IdlType::Sequence(inner) => write!(f, "sequence<{inner}>"),
            IdlType::Named(name) => write!(f, "{name}"),
        }
    }
}

impl From<IdlType> for String {
    fn from(value: IdlType) -> Self {
        value.to_string()
    }
}

/// Parameter passing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamDirection {
    #[default]
    In,
    Out,
    InOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: IdlType,
    #[serde(default)]
    pub direction: ParamDirection,
}

impl Parameter {
    pub fn new(ty: IdlType, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            direction: ParamDirection::In,
        }
    }

    pub fn with_direction(mut self, direction: ParamDirection) -> Self {
        self.direction = direction;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default = "void_type")]
    pub returns: IdlType,
    #[serde(default)]
    pub raises: Vec<IdlType>,
}

fn void_type() -> IdlType {
    IdlType::Void
}

impl Operation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: IdlType::Void,
            raises: Vec::new(),
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: IdlType) -> Self {
        self.returns = ty;
        self
    }

    pub fn raises(mut self, fault: IdlType) -> Self {
        self.raises.push(fault);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub readonly: bool,
    #[serde(rename = "type")]
    pub ty: IdlType,
}

/// Structured interface definition as produced by an external IDL parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDefinition {
    pub repid: String,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub inherits: Vec<String>,
}

impl InterfaceDefinition {
    pub fn new(repid: impl Into<String>) -> Self {
        Self {
            repid: repid.into(),
            operations: Vec::new(),
            attributes: Vec::new(),
            inherits: Vec::new(),
        }
    }

    pub fn operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn inherits(mut self, base: impl Into<String>) -> Self {
        self.inherits.push(base.into());
        self
    }
}

/// Interface definitions keyed by repository id
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<InterfaceDefinition>")]
pub struct IdlLibrary {
    interfaces: HashMap<String, InterfaceDefinition>,
}

impl IdlLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, definition: InterfaceDefinition) {
        self.interfaces
            .insert(definition.repid.trim().to_string(), definition);
    }

    pub fn with(mut self, definition: InterfaceDefinition) -> Self {
        self.insert(definition);
        self
    }

    pub fn get(&self, repid: &str) -> Option<&InterfaceDefinition> {
        self.interfaces.get(repid.trim())
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

impl From<Vec<InterfaceDefinition>> for IdlLibrary {
    fn from(definitions: Vec<InterfaceDefinition>) -> Self {
        let mut library = Self::new();
        for definition in definitions {
            library.insert(definition);
        }
        library
    }
}

/// A fully resolved interface: own members first, then inherited ones in
/// depth-first inheritance order, each base contributing once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdlInterface {
    repid: RepositoryId,
    operations: Vec<Operation>,
    attributes: Vec<Attribute>,
    inherited: Vec<RepositoryId>,
}

impl IdlInterface {
    /// Derive an interface from its repository id
    pub fn from_repid(repid: &str, library: &IdlLibrary) -> Result<Self, IdlError> {
        let repid = repid.trim();
        let parsed: RepositoryId = repid.parse()?;
        let root = library
            .get(repid)
            .ok_or_else(|| IdlError::UnknownInterface(repid.to_string()))?;

        let mut interface = Self {
            repid: parsed,
            operations: root.operations.clone(),
            attributes: root.attributes.clone(),
            inherited: Vec::new(),
        };

        let mut visited = HashSet::from([repid.to_string()]);
        let mut stack = vec![repid.to_string()];
        interface.collect_bases(root, library, &mut visited, &mut stack)?;
        Ok(interface)
    }

    fn collect_bases(
        &mut self,
        definition: &InterfaceDefinition,
        library: &IdlLibrary,
        visited: &mut HashSet<String>,
        stack: &mut Vec<String>,
    ) -> Result<(), IdlError> {
        for base in &definition.inherits {
            if stack.contains(base) {
                return Err(IdlError::InheritanceCycle(base.clone()));
            }
            if !visited.insert(base.clone()) {
                continue;
            }

            let base_definition = library
                .get(base)
                .ok_or_else(|| IdlError::UnknownInterface(base.clone()))?;
            self.inherited.push(base.parse()?);
            self.operations
                .extend(base_definition.operations.iter().cloned());
            self.attributes
                .extend(base_definition.attributes.iter().cloned());

            stack.push(base.clone());
            self.collect_bases(base_definition, library, visited, stack)?;
            stack.pop();
        }
        Ok(())
    }

    pub fn repid(&self) -> &RepositoryId {
        &self.repid
    }

    /// Unqualified interface name
    pub fn name(&self) -> &str {
        self.repid.name()
    }

    pub fn namespace(&self) -> String {
        self.repid.namespace()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Transitively inherited interfaces in first-encountered order
    pub fn inherited(&self) -> &[RepositoryId] {
        &self.inherited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_id_parse() {
        let repid: RepositoryId = "IDL:omg.org/CosEventComm/PushConsumer:1.0".parse().unwrap();
        assert_eq!(repid.namespace(), "omg.org/CosEventComm");
        assert_eq!(repid.name(), "PushConsumer");
        assert_eq!(repid.version(), "1.0");
        assert_eq!(
            repid.to_string(),
            "IDL:omg.org/CosEventComm/PushConsumer:1.0"
        );
    }

    #[test]
    fn test_repository_id_malformed() {
        for bad in ["", "BULKIO/dataFloat", "IDL:dataFloat:1.0", "IDL:BULKIO/dataFloat"] {
            assert_eq!(
                bad.parse::<RepositoryId>(),
                Err(IdlError::MalformedRepositoryId(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_idl_type_parse() {
        assert_eq!("long".parse::<IdlType>().unwrap(), IdlType::Long);
        assert_eq!(
            "unsigned  long long".parse::<IdlType>().unwrap(),
            IdlType::ULongLong
        );
        assert_eq!(
            "sequence<octet>".parse::<IdlType>().unwrap(),
            IdlType::Sequence(Box::new(IdlType::Octet))
        );
        assert_eq!(
            "sequence <CF::DataType, 4>".parse::<IdlType>().unwrap(),
            IdlType::Sequence(Box::new(IdlType::Named("CF::DataType".to_string())))
        );
        assert_eq!(
            "::CF::Properties".parse::<IdlType>().unwrap(),
            IdlType::Named("CF::Properties".to_string())
        );
        assert_eq!(
            "sequence<sequence<octet, 4>>".parse::<IdlType>().unwrap(),
            IdlType::Sequence(Box::new(IdlType::Sequence(Box::new(IdlType::Octet))))
        );
        assert_eq!(
            "sequence<sequence<octet>, 4>".parse::<IdlType>().unwrap(),
            IdlType::Sequence(Box::new(IdlType::Sequence(Box::new(IdlType::Octet))))
        );
        assert_eq!(
            "sequence<sequence<octet, 4>, 8>".parse::<IdlType>().unwrap(),
            IdlType::Sequence(Box::new(IdlType::Sequence(Box::new(IdlType::Octet))))
        );
        assert!(matches!(
            "quaternion".parse::<IdlType>(),
            Err(IdlError::UnrecognizedType(_))
        ));
    }

    #[test]
    fn test_idl_type_display_round_trips_spelling() {
        assert_eq!(IdlType::UShort.to_string(), "unsigned short");
        assert_eq!(
            IdlType::Sequence(Box::new(IdlType::String)).to_string(),
            "sequence<string>"
        );
    }

    fn library() -> IdlLibrary {
        IdlLibrary::new()
            .with(InterfaceDefinition {
                repid: "IDL:CF/LifeCycle:1.0".to_string(),
                operations: vec![Operation::new("initialize"), Operation::new("releaseObject")],
                attributes: vec![],
                inherits: vec![],
            })
            .with(InterfaceDefinition {
                repid: "IDL:CF/PortSupplier:1.0".to_string(),
                operations: vec![Operation::new("getPort")],
                attributes: vec![],
                inherits: vec![],
            })
            .with(InterfaceDefinition {
                repid: "IDL:CF/Resource:1.0".to_string(),
                operations: vec![Operation::new("start"), Operation::new("stop")],
                attributes: vec![Attribute {
                    name: "identifier".to_string(),
                    readonly: true,
                    ty: IdlType::String,
                }],
                inherits: vec![
                    "IDL:CF/LifeCycle:1.0".to_string(),
                    "IDL:CF/PortSupplier:1.0".to_string(),
                    "IDL:CF/LifeCycle:1.0".to_string(),
                ],
            })
    }

    #[test]
    fn test_interface_collects_inherited_members_once() {
        let interface = IdlInterface::from_repid("IDL:CF/Resource:1.0", &library()).unwrap();
        assert_eq!(interface.name(), "Resource");
        assert_eq!(interface.namespace(), "CF");

        let names: Vec<_> = interface.operations().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["start", "stop", "initialize", "releaseObject", "getPort"]
        );
        assert_eq!(interface.attributes().len(), 1);
        assert_eq!(interface.inherited().len(), 2);
    }

    #[test]
    fn test_padded_repid_resolves() {
        let interface = IdlInterface::from_repid(" IDL:CF/Resource:1.0 ", &library()).unwrap();
        assert_eq!(interface.name(), "Resource");
        assert_eq!(interface.inherited().len(), 2);
    }

    #[test]
    fn test_interface_unknown_and_cycle() {
        let err = IdlInterface::from_repid("IDL:CF/Device:1.0", &library()).unwrap_err();
        assert_eq!(err, IdlError::UnknownInterface("IDL:CF/Device:1.0".to_string()));

        let mut a = InterfaceDefinition::new("IDL:X/A:1.0");
        a.inherits.push("IDL:X/B:1.0".to_string());
        let mut b = InterfaceDefinition::new("IDL:X/B:1.0");
        b.inherits.push("IDL:X/A:1.0".to_string());
        let cyclic = IdlLibrary::new().with(a).with(b);

        assert_eq!(
            IdlInterface::from_repid("IDL:X/A:1.0", &cyclic).unwrap_err(),
            IdlError::InheritanceCycle("IDL:X/A:1.0".to_string())
        );
    }

    #[test]
    fn test_library_from_yaml() {
        let yaml = r#"
- repid: "IDL:Demo/Echo:1.0"
  operations:
    - name: echo
      params:
        - { name: text, type: string }
        - { name: count, type: long, direction: out }
      returns: string
      raises: ["Demo::Failure"]
"#;
        let library: IdlLibrary = serde_yaml::from_str(yaml).unwrap();
        let def = library.get("IDL:Demo/Echo:1.0").unwrap();
        let op = &def.operations[0];
        assert_eq!(op.returns, IdlType::String);
        assert_eq!(op.params[1].direction, ParamDirection::Out);
        assert_eq!(op.raises, vec![IdlType::Named("Demo::Failure".to_string())]);
    }
}
