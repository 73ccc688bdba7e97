//! Normalized intermediate representation (IR) of analyzed source code.
//!
//! Every extraction pass produces these entities; the enrichment stage only
//! attaches [`Embedding`] values and never touches identity fields. All types
//! serialize to JSON losslessly so the IR can be handed to downstream
//! consumers (diagram generation, graph stores) or persisted to disk.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Location of a code element in its source file.
///
/// An element without position metadata gets the zero location from
/// [`SourceLocation::empty`], never a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SourceLocation {
    pub file_path: String,
    pub start_line: usize,
    pub end_line: usize,
    pub start_column: usize,
    pub end_column: usize,
}

impl SourceLocation {
    /// Zero location used when position metadata is absent
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Kind of a type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassKind {
    Class,
    Interface,
}

/// Kind of element an annotation is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    Class,
    Method,
    Field,
}

/// Phase during which an annotation takes effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnotationPhase {
    CompileTime,
    Runtime,
    StaticAnalysis,
}

/// A raw annotation as it appears in source, before classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationEntity {
    /// Annotation name as written, best-effort qualified
    pub name: String,
    /// Attribute key/value pairs with values coerced to string form
    pub attributes: BTreeMap<String, String>,
    /// Textual form of the annotated declaration
    pub target_element: String,
    pub target_type: TargetType,
    /// Reserved, currently always absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Reserved, currently always absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    pub phase: AnnotationPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<SourceLocation>,
}

/// Whether a feature describes functional or non-functional behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    Functional,
    NonFunctional,
}

impl FeatureType {
    /// Parse a feature type from its wire name, defaulting to Functional
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "NON_FUNCTIONAL" | "NonFunctional" => FeatureType::NonFunctional,
            _ => FeatureType::Functional,
        }
    }
}

/// A domain feature declared through a recognized marker annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureEntity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_features: Option<Vec<FeatureEntity>>,
}

/// Granularity of a concept mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MappingType {
    Concept,
    Module,
    Component,
    Data,
}

impl MappingType {
    /// Parse a mapping type from its wire name, defaulting to Concept
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "MODULE" | "Module" => MappingType::Module,
            "COMPONENT" | "Component" => MappingType::Component,
            "DATA" | "Data" => MappingType::Data,
            _ => MappingType::Concept,
        }
    }
}

/// A mapping from a code element to a higher-level design concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntity {
    pub to_concept: String,
    #[serde(rename = "type")]
    pub mapping_type: MappingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_mappings: Option<Vec<MappingEntity>>,
}

/// An inheritance or implementation relationship between classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRelationEntity {
    /// "extends" or "implements"
    pub relation_type: String,
    pub target_class: String,
}

/// A parameter in a method signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticParameterEntity {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub source_location: SourceLocation,
}

/// A method invocation found inside a method body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCallEntity {
    pub method_name: String,
    pub arguments: Vec<String>,
    pub source_location: SourceLocation,
}

/// A shallow, simplified statement: block statements recurse into
/// sub-statements, every other kind is a leaf carrying its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticStatementEntity {
    /// Statement kind tag from the native AST
    #[serde(rename = "type")]
    pub statement_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_statements: Option<Vec<StaticStatementEntity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<SourceLocation>,
}

/// Simplified statement tree of one method body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowLevelAst {
    pub statements: Vec<StaticStatementEntity>,
}

/// Complexity metrics computed per class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    pub cyclomatic_complexity: u32,
    pub nesting_depth: u32,
    pub branch_count: u32,
}

/// Vector representation of an entity's textual summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Embedding {
    pub values: Vec<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A field declaration in the IR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IRFieldEntity {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    /// Modifiers joined by single spaces, e.g. "private static final"
    pub modifiers: String,
    /// Residual annotations after classification
    pub annotations: Vec<AnnotationEntity>,
    pub features: Vec<FeatureEntity>,
    pub mappings: Vec<MappingEntity>,
    pub source_location: SourceLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Embedding>,
}

/// A method declaration in the IR
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IRMethodEntity {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<StaticParameterEntity>,
    pub modifiers: String,
    pub annotations: Vec<AnnotationEntity>,
    pub features: Vec<FeatureEntity>,
    pub mappings: Vec<MappingEntity>,
    pub called_methods: Vec<StaticCallEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_level_ast: Option<LowLevelAst>,
    pub source_location: SourceLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Embedding>,
}

/// A class or interface declaration in the IR.
///
/// The name is unique within a single-file parse result but not guaranteed
/// unique project-wide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IRClassEntity {
    pub name: String,
    pub kind: ClassKind,
    /// Package name, empty string when the file has no package declaration
    pub package: String,
    pub file_path: String,
    pub modifiers: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_class: Option<String>,
    pub interfaces: Vec<String>,
    pub annotations: Vec<AnnotationEntity>,
    pub features: Vec<FeatureEntity>,
    pub mappings: Vec<MappingEntity>,
    pub fields: Vec<IRFieldEntity>,
    pub methods: Vec<IRMethodEntity>,
    /// One "extends" entry if a superclass exists, then one "implements"
    /// entry per interface, in declaration order
    pub relations: Vec<StaticRelationEntity>,
    pub source_location: SourceLocation,
    pub complexity_metrics: ComplexityMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Embedding>,
}
