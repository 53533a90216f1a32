//! The resource catalog.
//!
//! One [`EntityDescriptor`] per resource type served by the API. The product
//! descriptor is the only text-searchable one; its index weighs `name` over
//! `brand` over `description` for relevance ranking.

use crate::descriptor::{
    DefaultValue, EntityDescriptor, EnumConstraint, FieldSpec, FieldType, Relation, TextIndexField,
};

const PRODUCT: EntityDescriptor = EntityDescriptor {
    name: "product",
    path: "products",
    text_searchable: true,
    text_index: &[
        TextIndexField {
            field: "name",
            weight: 10,
        },
        TextIndexField {
            field: "brand",
            weight: 5,
        },
        TextIndexField {
            field: "description",
            weight: 1,
        },
    ],
    relations: &[
        Relation {
            field: "category",
            target: "category",
        },
        Relation {
            field: "tags",
            target: "tag",
        },
    ],
    fields: &[
        FieldSpec {
            name: "name",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "sku",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "status",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "category",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "brand",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "price",
            kind: FieldType::Number,
        },
        FieldSpec {
            name: "offerPrice",
            kind: FieldType::Number,
        },
        FieldSpec {
            name: "stock",
            kind: FieldType::Number,
        },
        FieldSpec {
            name: "isCampaignProduct",
            kind: FieldType::Boolean,
        },
        FieldSpec {
            name: "createdAt",
            kind: FieldType::Date,
        },
        FieldSpec {
            name: "updatedAt",
            kind: FieldType::Date,
        },
    ],
    required: &["name", "sku", "description", "category", "price"],
    enums: &[EnumConstraint {
        field: "status",
        allowed: &["active", "draft", "archived"],
    }],
    defaults: &[
        ("status", DefaultValue::Str("draft")),
        ("stock", DefaultValue::Num(0.0)),
        ("isCampaignProduct", DefaultValue::Bool(false)),
    ],
    slug_source: None,
};

const CATEGORY: EntityDescriptor = EntityDescriptor {
    name: "category",
    path: "categories",
    text_searchable: false,
    text_index: &[],
    relations: &[Relation {
        field: "parent",
        target: "category",
    }],
    fields: &[
        FieldSpec {
            name: "name",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "slug",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "parent",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "createdAt",
            kind: FieldType::Date,
        },
    ],
    required: &["name"],
    enums: &[],
    defaults: &[],
    slug_source: Some("name"),
};

const TAG: EntityDescriptor = EntityDescriptor {
    name: "tag",
    path: "tags",
    text_searchable: false,
    text_index: &[],
    relations: &[],
    fields: &[
        FieldSpec {
            name: "name",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "slug",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "createdAt",
            kind: FieldType::Date,
        },
    ],
    required: &["name"],
    enums: &[],
    defaults: &[],
    slug_source: Some("name"),
};

const ORDER: EntityDescriptor = EntityDescriptor {
    name: "order",
    path: "orders",
    text_searchable: false,
    text_index: &[],
    relations: &[Relation {
        field: "user",
        target: "user",
    }],
    fields: &[
        FieldSpec {
            name: "user",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "status",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "totalPrice",
            kind: FieldType::Number,
        },
        FieldSpec {
            name: "isPaid",
            kind: FieldType::Boolean,
        },
        FieldSpec {
            name: "paidAt",
            kind: FieldType::Date,
        },
        FieldSpec {
            name: "createdAt",
            kind: FieldType::Date,
        },
    ],
    required: &["user"],
    enums: &[EnumConstraint {
        field: "status",
        allowed: &["Pending", "Processing", "Shipped", "Delivered", "Cancelled"],
    }],
    defaults: &[
        ("status", DefaultValue::Str("Pending")),
        ("totalPrice", DefaultValue::Num(0.0)),
        ("isPaid", DefaultValue::Bool(false)),
    ],
    slug_source: None,
};

const USER: EntityDescriptor = EntityDescriptor {
    name: "user",
    path: "users",
    text_searchable: false,
    text_index: &[],
    relations: &[],
    fields: &[
        FieldSpec {
            name: "name",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "email",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "role",
            kind: FieldType::String,
        },
        FieldSpec {
            name: "createdAt",
            kind: FieldType::Date,
        },
    ],
    required: &["name", "email"],
    enums: &[EnumConstraint {
        field: "role",
        allowed: &["user", "admin"],
    }],
    defaults: &[("role", DefaultValue::Str("user"))],
    slug_source: None,
};

const CATALOG: &[EntityDescriptor] = &[PRODUCT, CATEGORY, TAG, ORDER, USER];

/// Returns every descriptor in the catalog.
pub fn all() -> &'static [EntityDescriptor] {
    CATALOG
}

/// Resolves a descriptor by its URL path segment.
pub fn find(path: &str) -> Option<&'static EntityDescriptor> {
    CATALOG.iter().find(|desc| desc.path == path)
}

/// Returns the product descriptor, used by the storefront routes.
pub fn product() -> &'static EntityDescriptor {
    &CATALOG[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_path() {
        assert_eq!(find("products").map(|d| d.name), Some("product"));
        assert_eq!(find("categories").map(|d| d.name), Some("category"));
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_only_products_are_text_searchable() {
        for desc in all() {
            assert_eq!(desc.text_searchable, desc.name == "product");
        }
    }

    #[test]
    fn test_product_index_weights() {
        let weights: Vec<_> = product()
            .text_index
            .iter()
            .map(|f| (f.field, f.weight))
            .collect();
        assert_eq!(
            weights,
            vec![("name", 10), ("brand", 5), ("description", 1)]
        );
    }
}
