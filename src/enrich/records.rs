//! Entity record construction for the embedding service
//!
//! Every class, field, and method becomes one text record with a
//! deterministic, globally unique id; the id is the sole correlation key
//! when batched responses come back.

use crate::ir::{AnnotationEntity, FeatureEntity, IRClassEntity, IRMethodEntity, MappingEntity};
use serde::{Deserialize, Serialize};

/// One entity snippet submitted for embedding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    pub code_snippet: String,
}

pub fn class_id(class_name: &str) -> String {
    format!("class_{}", class_name)
}

pub fn field_id(class_name: &str, field_name: &str) -> String {
    format!("field_{}_{}", class_name, field_name)
}

pub fn method_id(class_name: &str, method_name: &str) -> String {
    format!("method_{}_{}", class_name, method_name)
}

/// Build the pooled record list for a set of classes: one class-level
/// record, one per field, one per method, in that order per class.
pub fn build_records(classes: &[IRClassEntity]) -> Vec<EntityRecord> {
    let mut records = Vec::new();

    for class in classes {
        let context = entity_context(&class.annotations, &class.features, &class.mappings);
        records.push(EntityRecord {
            id: class_id(&class.name),
            code_snippet: merge_with_context(&class_text(class), &context),
        });

        for field in &class.fields {
            let context = entity_context(&field.annotations, &field.features, &field.mappings);
            let snippet = format!("{}: {}", field.name, field.field_type);
            records.push(EntityRecord {
                id: field_id(&class.name, &field.name),
                code_snippet: merge_with_context(&snippet, &context),
            });
        }

        for method in &class.methods {
            let context = entity_context(&method.annotations, &method.features, &method.mappings);
            records.push(EntityRecord {
                id: method_id(&class.name, &method.name),
                code_snippet: merge_with_context(&method_text(method), &context),
            });
        }
    }

    records
}

/// Serialized class summary used as the class-level snippet
fn class_text(class: &IRClassEntity) -> String {
    let fields = class
        .fields
        .iter()
        .map(|f| format!("{}: {}", f.name, f.field_type))
        .collect::<Vec<_>>()
        .join(", ");
    let methods = class
        .methods
        .iter()
        .map(method_text)
        .collect::<Vec<_>>()
        .join(", ");
    let features = class
        .features
        .iter()
        .map(|f| {
            format!(
                "{}: {}",
                f.name,
                f.description.as_deref().unwrap_or("No description")
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    let mappings = class
        .mappings
        .iter()
        .map(|m| format!("{} ({:?})", m.to_concept, m.mapping_type))
        .collect::<Vec<_>>()
        .join(", ");
    let annotations = class
        .annotations
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Class: {}\nType: {:?}\nPackage: {}\nSuperclass: {}\nInterfaces: {}\nAnnotations: {}\nFeatures: {}\nMappings: {}\nFields: {}\nMethods: {}",
        class.name,
        class.kind,
        class.package,
        class.super_class.as_deref().unwrap_or("None"),
        class.interfaces.join(", "),
        annotations,
        features,
        mappings,
        fields,
        methods,
    )
}

fn method_text(method: &IRMethodEntity) -> String {
    let params = method
        .parameters
        .iter()
        .map(|p| format!("{}: {}", p.name, p.param_type))
        .collect::<Vec<_>>()
        .join(", ");
    let annotations = method
        .annotations
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let features = method
        .features
        .iter()
        .map(|f| {
            format!(
                "{}: {}",
                f.name,
                f.description.as_deref().unwrap_or("No description")
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    let mappings = method
        .mappings
        .iter()
        .map(|m| format!("{} ({:?})", m.to_concept, m.mapping_type))
        .collect::<Vec<_>>()
        .join(", ");
    let called = method
        .called_methods
        .iter()
        .map(|c| c.method_name.clone())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Method: {}\nReturnType: {}\nParameters: {}\nAnnotations: {}\nFeatures: {}\nMappings: {}\nCalledMethods: {}",
        method.name, method.return_type, params, annotations, features, mappings, called,
    )
}

fn entity_context(
    annotations: &[AnnotationEntity],
    features: &[FeatureEntity],
    mappings: &[MappingEntity],
) -> String {
    let annotations = annotations
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let features = features
        .iter()
        .map(|f| f.name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    let mappings = mappings
        .iter()
        .map(|m| m.to_concept.clone())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Annotations: {}\nFeatures: {}\nMappings: {}",
        annotations, features, mappings
    )
}

fn merge_with_context(snippet: &str, context: &str) -> String {
    format!("// Context Information:\n{}\n\n{}", context, snippet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::*;

    fn class_with_members() -> IRClassEntity {
        IRClassEntity {
            name: "Foo".to_string(),
            kind: ClassKind::Class,
            package: "com.example".to_string(),
            file_path: "Foo.java".to_string(),
            modifiers: "public".to_string(),
            super_class: Some("Base".to_string()),
            interfaces: vec!["I1".to_string()],
            annotations: vec![],
            features: vec![],
            mappings: vec![],
            fields: vec![IRFieldEntity {
                name: "bar".to_string(),
                field_type: "int".to_string(),
                modifiers: String::new(),
                annotations: vec![],
                features: vec![],
                mappings: vec![],
                source_location: SourceLocation::empty(),
                embedding: None,
            }],
            methods: vec![IRMethodEntity {
                name: "baz".to_string(),
                return_type: "void".to_string(),
                parameters: vec![],
                modifiers: String::new(),
                annotations: vec![],
                features: vec![],
                mappings: vec![],
                called_methods: vec![],
                low_level_ast: None,
                source_location: SourceLocation::empty(),
                embedding: None,
            }],
            relations: vec![],
            source_location: SourceLocation::empty(),
            complexity_metrics: ComplexityMetrics {
                cyclomatic_complexity: 1,
                nesting_depth: 0,
                branch_count: 0,
            },
            embedding: None,
        }
    }

    #[test]
    fn test_id_derivation_is_stable() {
        assert_eq!(class_id("Foo"), "class_Foo");
        assert_eq!(field_id("Foo", "bar"), "field_Foo_bar");
        assert_eq!(method_id("Foo", "baz"), "method_Foo_baz");
    }

    #[test]
    fn test_one_record_per_entity() {
        let records = build_records(&[class_with_members()]);
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["class_Foo", "field_Foo_bar", "method_Foo_baz"]);
    }

    #[test]
    fn test_records_pooled_across_classes() {
        let mut other = class_with_members();
        other.name = "Other".to_string();
        let records = build_records(&[class_with_members(), other]);
        assert_eq!(records.len(), 6);
        assert!(records.iter().any(|r| r.id == "class_Other"));
    }

    #[test]
    fn test_class_snippet_summarizes_shape() {
        let records = build_records(&[class_with_members()]);
        let snippet = &records[0].code_snippet;
        assert!(snippet.starts_with("// Context Information:"));
        assert!(snippet.contains("Class: Foo"));
        assert!(snippet.contains("Package: com.example"));
        assert!(snippet.contains("Superclass: Base"));
        assert!(snippet.contains("Fields: bar: int"));
        assert!(snippet.contains("Method: baz"));
    }

    #[test]
    fn test_method_snippet_carries_markers_in_body() {
        let mut class = class_with_members();
        class.methods[0].features = vec![FeatureEntity {
            name: "auth".to_string(),
            description: None,
            feature_type: FeatureType::Functional,
            sub_features: None,
        }];
        class.methods[0].mappings = vec![MappingEntity {
            to_concept: "Login".to_string(),
            mapping_type: MappingType::Concept,
            sub_mappings: None,
        }];

        let records = build_records(&[class]);
        let snippet = &records[2].code_snippet;
        assert!(snippet.contains("Method: baz"));
        assert!(snippet.contains("ReturnType: void"));
        assert!(snippet.contains("Features: auth: No description"));
        assert!(snippet.contains("Mappings: Login (Concept)"));
        assert!(snippet.contains("CalledMethods:"));
    }

    #[test]
    fn test_field_snippet_is_name_and_type() {
        let records = build_records(&[class_with_members()]);
        assert!(records[1].code_snippet.ends_with("bar: int"));
    }

    #[test]
    fn test_wire_shape_of_record() {
        let record = EntityRecord {
            id: "class_Foo".to_string(),
            code_snippet: "Class: Foo".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "class_Foo");
        assert_eq!(json["code_snippet"], "Class: Foo");
    }
}
