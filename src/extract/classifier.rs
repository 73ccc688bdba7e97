//! Annotation classification into features, mappings, and residual annotations

use crate::ir::{AnnotationEntity, FeatureEntity, FeatureType, MappingEntity, MappingType};

/// Marker annotation declaring a domain feature
pub const FEATURE_MARKER: &str = "FathomFeature";

/// Marker annotation mapping an element to a design concept
pub const MAPPING_MARKER: &str = "FathomMapping";

/// Result of partitioning a list of annotations.
///
/// Classification is total and disjoint: every input annotation lands in
/// exactly one of the three lists, and re-classifying the residual list
/// reproduces the same residual.
#[derive(Debug, Default)]
pub struct Classified {
    pub features: Vec<FeatureEntity>,
    pub mappings: Vec<MappingEntity>,
    pub residual: Vec<AnnotationEntity>,
}

/// Partition annotations on the two recognized marker names.
///
/// Marker names are matched by the trailing segment of the annotation name,
/// so `@FathomFeature` and `@com.example.FathomFeature` classify alike —
/// the adapter runs without classpath resolution, so names are best-effort.
pub fn classify(annotations: Vec<AnnotationEntity>) -> Classified {
    let mut classified = Classified::default();

    for annotation in annotations {
        match simple_name(&annotation.name) {
            FEATURE_MARKER => classified.features.push(FeatureEntity {
                name: annotation
                    .attributes
                    .get("name")
                    .cloned()
                    .unwrap_or_else(|| "Unnamed Feature".to_string()),
                description: annotation.attributes.get("description").cloned(),
                feature_type: annotation
                    .attributes
                    .get("type")
                    .map(|t| FeatureType::parse_or_default(t))
                    .unwrap_or(FeatureType::Functional),
                sub_features: None,
            }),
            MAPPING_MARKER => classified.mappings.push(MappingEntity {
                to_concept: annotation
                    .attributes
                    .get("toConcept")
                    .cloned()
                    .unwrap_or_else(|| "Unnamed Mapping".to_string()),
                mapping_type: annotation
                    .attributes
                    .get("type")
                    .map(|t| MappingType::parse_or_default(t))
                    .unwrap_or(MappingType::Concept),
                sub_mappings: None,
            }),
            _ => classified.residual.push(annotation),
        }
    }

    classified
}

fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}
