//! Annotation normalisation
//!
//! Runs once per declaration before any resolution pass. Raw `(tag, text)`
//! pairs become a structured [`Annotations`] record; later passes never look
//! at raw annotation text again.
//!
//! Recognised forms (tag names come from [`AnnotationTags`]):
//!
//! | Raw tag | Effect |
//! |---------|--------|
//! | `@service` | single-cardinality service |
//! | `@service multi` | multi-cardinality service |
//! | `@injectable` | factory, optional lifecycle payload |
//! | `@lifecycle singleton` | explicit lifecycle |
//! | `@singleton`, `@scoped`, `@transient` | lifecycle shorthand |
//! | `@module web` | module partition |

use diwire_domain::value_objects::{
    Annotation, AnnotationKind, AnnotationTags, Annotations, Cardinality, Declaration, Lifecycle,
    RawAnnotation,
};

/// Normalise the raw annotations of one declaration
pub fn normalize(declaration: &Declaration, tags: &AnnotationTags) -> Annotations {
    let mut annotations = Annotations::default();
    for raw in &declaration.annotations {
        apply(&mut annotations, raw, tags);
    }
    annotations
}

fn apply(annotations: &mut Annotations, raw: &RawAnnotation, tags: &AnnotationTags) {
    let tag = raw.tag.trim().trim_start_matches('@');
    let payload = raw.payload();

    let kind = if tag == tags.service {
        let multi = payload
            .and_then(|p| p.split_whitespace().next())
            .is_some_and(|word| word.eq_ignore_ascii_case(&tags.multi_keyword));
        annotations.service.get_or_insert(if multi {
            Cardinality::Multi
        } else {
            Cardinality::Single
        });
        AnnotationKind::Service
    } else if tag == tags.injectable {
        annotations.injectable = true;
        if let Some(lifecycle) = payload.and_then(Lifecycle::parse) {
            annotations.lifecycle.get_or_insert(lifecycle);
        }
        AnnotationKind::Injectable
    } else if tag == tags.lifecycle {
        match payload.and_then(Lifecycle::parse) {
            Some(lifecycle) => {
                annotations.lifecycle.get_or_insert(lifecycle);
            }
            None => {
                annotations
                    .invalid_lifecycle
                    .get_or_insert_with(|| payload.unwrap_or_default().to_string());
            }
        }
        AnnotationKind::Lifecycle
    } else if let Some(lifecycle) = Lifecycle::parse(tag) {
        annotations.lifecycle.get_or_insert(lifecycle);
        AnnotationKind::Lifecycle
    } else if tag == tags.module {
        match payload {
            Some(module) => {
                annotations.module.get_or_insert_with(|| module.to_string());
            }
            None => return,
        }
        AnnotationKind::Module
    } else {
        return;
    };

    annotations.entries.push(Annotation {
        kind,
        payload: payload.map(str::to_string),
    });
}
