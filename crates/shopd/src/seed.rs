//! Demo data seeding.
//!
//! Populates an empty store with a small demo catalog so the API is
//! explorable immediately after startup. Only runs when `--seed` is given.

use anyhow::Context;
use serde_json::json;
use shopd_store::{DocumentStore, MemoryStore, catalog};
use tracing::info;

/// Seeds categories, tags and a handful of products.
pub async fn run(store: &MemoryStore) -> anyhow::Result<()> {
    let categories = catalog::find("categories").context("categories missing from catalog")?;
    let tags = catalog::find("tags").context("tags missing from catalog")?;
    let products = catalog::product();

    let mut category_ids = Vec::new();
    for (name, description) in [
        ("Électronique", "Gadgets et appareils électroniques."),
        ("Vêtements", "Vêtements pour hommes, femmes et enfants."),
        ("Livres", "Livres de fiction, non-fiction et éducatifs."),
        ("Maison & Jardin", "Articles pour la maison et le jardinage."),
    ] {
        let doc = store
            .create(categories, json!({"name": name, "description": description}))
            .await?;
        category_ids.push(doc.id().to_string());
    }

    let mut tag_ids = Vec::new();
    for name in [
        "Nouveauté",
        "En Promotion",
        "Éco-responsable",
        "Meilleure Vente",
    ] {
        let doc = store.create(tags, json!({"name": name})).await?;
        tag_ids.push(doc.id().to_string());
    }

    let demo = [
        json!({
            "name": "Smartphone Pro X",
            "sku": "SP-PRO-X",
            "status": "active",
            "description": "Le dernier smartphone avec une caméra 48MP et un écran OLED.",
            "category": category_ids[0],
            "brand": "TechCorp",
            "images": ["https://example.com/images/phone-1.jpg"],
            "price": 899.99,
            "offerPrice": 849.99,
            "stock": 150,
            "tags": [tag_ids[0], tag_ids[3]],
        }),
        json!({
            "name": "Casque Audio sans fil",
            "sku": "HDPH-BT-500",
            "status": "active",
            "description": "Casque avec réduction de bruit active et 30h d'autonomie.",
            "category": category_ids[0],
            "brand": "AudioBrand",
            "images": ["https://example.com/images/headphones-1.jpg"],
            "price": 199.99,
            "stock": 200,
            "tags": [tag_ids[1]],
        }),
        json!({
            "name": "T-Shirt en Coton Bio",
            "sku": "TS-COT-BIO-M",
            "status": "active",
            "description": "T-shirt confortable et durable, 100% coton biologique.",
            "category": category_ids[1],
            "brand": "EcoWear",
            "images": ["https://example.com/images/tshirt-1.jpg"],
            "price": 29.99,
            "stock": 500,
            "tags": [tag_ids[2]],
        }),
        json!({
            "name": "Le Labyrinthe des Esprits",
            "sku": "BOOK-LAB-ESP",
            "status": "draft",
            "description": "Un thriller captivant par un auteur de renom.",
            "category": category_ids[2],
            "brand": "Éditions Plume",
            "images": ["https://example.com/images/book-1.jpg"],
            "price": 22.5,
            "stock": 80,
            "tags": [tag_ids[0]],
        }),
        json!({
            "name": "Jean Slim Fit",
            "sku": "JEAN-SLIM-32",
            "status": "archived",
            "description": "Un jean moderne et confortable pour toutes les occasions.",
            "category": category_ids[1],
            "brand": "DenimCo",
            "images": ["https://example.com/images/jean-1.jpg"],
            "price": 79.99,
            "stock": 0,
            "tags": [],
        }),
    ];

    for payload in demo {
        store.create(products, payload).await?;
    }

    info!(
        categories = category_ids.len(),
        tags = tag_ids.len(),
        products = store.len(products),
        "Seeded demo data"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_populates_all_collections() {
        let store = MemoryStore::new();
        run(&store).await.unwrap();

        assert_eq!(store.len(catalog::product()), 5);
        assert_eq!(store.len(catalog::find("categories").unwrap()), 4);
        assert_eq!(store.len(catalog::find("tags").unwrap()), 4);
    }
}
