//! Static per-resource configuration.
//!
//! An [`EntityDescriptor`] declares everything the generic handler factory
//! and the query pipeline need to know about a resource type: whether it is
//! text-searchable (and with which weighted index), which relations to
//! expand on reads, the typed field table driving filter-value coercion, and
//! the store-level validation constraints. Capabilities are declared here
//! once per resource instead of being probed at runtime.

use serde_json::{Value, json};

/// The declared type of a filterable field.
///
/// Filter values arrive as strings; the field table decides how each one is
/// coerced before it reaches the store, identically for the list query and
/// the count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Opaque string (also covers reference IDs and enums).
    String,
    /// Numeric, compared as `f64`.
    Number,
    /// Boolean, equality only.
    Boolean,
    /// RFC 3339 timestamp.
    Date,
}

/// A field participating in the weighted full-text index.
#[derive(Debug, Clone, Copy)]
pub struct TextIndexField {
    /// Indexed field name.
    pub field: &'static str,
    /// Relative weight for relevance ranking.
    pub weight: u32,
}

/// A reference field expanded into the referenced document on reads.
#[derive(Debug, Clone, Copy)]
pub struct Relation {
    /// The field holding the reference (an ID or array of IDs).
    pub field: &'static str,
    /// The target resource name (descriptor `name`).
    pub target: &'static str,
}

/// A typed entry in the filterable-field table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Field name.
    pub name: &'static str,
    /// Declared type.
    pub kind: FieldType,
}

/// An enum constraint enforced at the store layer.
#[derive(Debug, Clone, Copy)]
pub struct EnumConstraint {
    /// Constrained field.
    pub field: &'static str,
    /// Accepted values.
    pub allowed: &'static [&'static str],
}

/// A default applied when the field is absent on create.
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    /// String default.
    Str(&'static str),
    /// Numeric default.
    Num(f64),
    /// Boolean default.
    Bool(bool),
}

impl DefaultValue {
    /// Materializes the default as JSON.
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Str(s) => json!(s),
            DefaultValue::Num(n) => json!(n),
            DefaultValue::Bool(b) => json!(b),
        }
    }
}

/// Static configuration for one resource type.
#[derive(Debug, Clone, Copy)]
pub struct EntityDescriptor {
    /// Singular resource name, also the collection key (e.g. "product").
    pub name: &'static str,
    /// URL path segment (e.g. "products").
    pub path: &'static str,
    /// Whether the `search` parameter is honored for this resource.
    pub text_searchable: bool,
    /// Weighted full-text index, empty unless `text_searchable`.
    pub text_index: &'static [TextIndexField],
    /// Relations expanded on detail and list reads.
    pub relations: &'static [Relation],
    /// Typed field table for filter coercion.
    pub fields: &'static [FieldSpec],
    /// Fields that must be present on create.
    pub required: &'static [&'static str],
    /// Enum-valued fields and their accepted values.
    pub enums: &'static [EnumConstraint],
    /// Defaults applied on create.
    pub defaults: &'static [(&'static str, DefaultValue)],
    /// Field from which a `slug` is derived, if any.
    pub slug_source: Option<&'static str>,
}

impl EntityDescriptor {
    /// Looks up the declared type of a filterable field.
    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.fields
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec {
            name: "price",
            kind: FieldType::Number,
        },
        FieldSpec {
            name: "status",
            kind: FieldType::String,
        },
    ];

    const DESC: EntityDescriptor = EntityDescriptor {
        name: "widget",
        path: "widgets",
        text_searchable: false,
        text_index: &[],
        relations: &[],
        fields: FIELDS,
        required: &[],
        enums: &[],
        defaults: &[],
        slug_source: None,
    };

    #[test]
    fn test_field_type_lookup() {
        assert_eq!(DESC.field_type("price"), Some(FieldType::Number));
        assert_eq!(DESC.field_type("status"), Some(FieldType::String));
        assert_eq!(DESC.field_type("unknown"), None);
    }
}
