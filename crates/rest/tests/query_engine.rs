//! List endpoint query tests.
//!
//! Exercises the full query pipeline over HTTP: text search, bracket
//! filters, sorting, projection and pagination, plus the interplay between
//! the page of results and the total count.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use shopd_rest::ServerConfig;
use shopd_store::DocumentStore;

use common::{create_test_server, create_test_server_with_config, seed_product};

mod search {
    use super::*;

    #[tokio::test]
    async fn test_search_with_filter_counts_the_narrowed_set() {
        let (server, store) = create_test_server().await;
        seed_product(&store, "Red Shirt", "active", 25.0).await;
        seed_product(&store, "Red Scarf", "active", 15.0).await;
        seed_product(&store, "Red Hat", "draft", 30.0).await;
        seed_product(&store, "Blue Shirt", "active", 25.0).await;

        let response = server
            .get("/api/v1/admin/products")
            .add_query_param("search", "red")
            .add_query_param("status", "active")
            .add_query_param("limit", "5")
            .await;
        response.assert_status(StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body["data"]["results"], 2);
        assert_eq!(body["meta"]["pagination"]["totalDocuments"], 2);
        for item in body["data"]["data"].as_array().unwrap() {
            assert_eq!(item["status"], "active");
        }
    }

    #[tokio::test]
    async fn test_search_results_carry_relevance_and_rank_by_it() {
        let (server, store) = create_test_server().await;
        seed_product(&store, "Shirt", "active", 10.0).await; // "red" nowhere
        store
            .create(
                shopd_store::catalog::product(),
                json!({
                    "name": "Scarf",
                    "sku": "s-1",
                    "description": "A red scarf",
                    "category": "c",
                    "price": 5,
                }),
            )
            .await
            .unwrap();
        seed_product(&store, "Red Shirt", "active", 10.0).await;

        let response = server
            .get("/api/v1/admin/products")
            .add_query_param("search", "red")
            .await;
        let body: Value = response.json();

        let items = body["data"]["data"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        // Name matches (weight 10) outrank description matches (weight 1).
        assert_eq!(items[0]["name"], "Red Shirt");
        assert!(items[0]["relevanceScore"].as_f64().unwrap() > items[1]["relevanceScore"].as_f64().unwrap());
    }
}

mod filters {
    use super::*;

    #[tokio::test]
    async fn test_bracket_range_operators() {
        let (server, store) = create_test_server().await;
        for price in [10.0, 20.0, 30.0, 40.0, 50.0] {
            seed_product(&store, &format!("P{}", price), "active", price).await;
        }

        let response = server
            .get("/api/v1/admin/products")
            .add_query_param("price[gte]", "20")
            .add_query_param("price[lt]", "50")
            .await;
        let body: Value = response.json();

        assert_eq!(body["data"]["results"], 3);
        for item in body["data"]["data"].as_array().unwrap() {
            let price = item["price"].as_f64().unwrap();
            assert!((20.0..50.0).contains(&price));
        }
    }

    #[tokio::test]
    async fn test_unknown_field_and_malformed_brackets_are_ignored() {
        let (server, store) = create_test_server().await;
        seed_product(&store, "Red Shirt", "active", 25.0).await;

        let response = server
            .get("/api/v1/admin/products")
            .add_query_param("nosuchfield", "x")
            .add_query_param("price[approximately]", "25")
            .add_query_param("price[gte", "9000")
            .await;
        response.assert_status(StatusCode::OK);

        // None of the malformed predicates narrowed the result.
        let body: Value = response.json();
        assert_eq!(body["data"]["results"], 1);
    }

    #[tokio::test]
    async fn test_uncoercible_value_is_dropped_not_matched() {
        let (server, store) = create_test_server().await;
        seed_product(&store, "Red Shirt", "active", 25.0).await;

        // "price" is numeric; a value that cannot coerce yields no
        // predicate at all, so the listing is unnarrowed.
        let response = server
            .get("/api/v1/admin/products")
            .add_query_param("price", "cheap")
            .await;
        let body: Value = response.json();
        assert_eq!(body["data"]["results"], 1);
    }
}

mod sorting {
    use super::*;

    #[tokio::test]
    async fn test_descending_sort_prefix() {
        let (server, store) = create_test_server().await;
        seed_product(&store, "Cheap", "active", 10.0).await;
        seed_product(&store, "Dear", "active", 90.0).await;
        seed_product(&store, "Middling", "active", 50.0).await;

        let response = server
            .get("/api/v1/admin/products")
            .add_query_param("sort", "-price")
            .await;
        let body: Value = response.json();

        let prices: Vec<f64> = body["data"]["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["price"].as_f64().unwrap())
            .collect();
        assert_eq!(prices, vec![90.0, 50.0, 10.0]);
    }

    #[tokio::test]
    async fn test_multi_key_sort_breaks_ties() {
        let (server, store) = create_test_server().await;
        seed_product(&store, "B", "active", 10.0).await;
        seed_product(&store, "A", "active", 10.0).await;
        seed_product(&store, "C", "active", 5.0).await;

        let response = server
            .get("/api/v1/admin/products")
            .add_query_param("sort", "price,name")
            .await;
        let body: Value = response.json();

        let names: Vec<&str> = body["data"]["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}

mod projection {
    use super::*;

    #[tokio::test]
    async fn test_fields_allow_list() {
        let (server, store) = create_test_server().await;
        seed_product(&store, "Red Shirt", "active", 25.0).await;

        let response = server
            .get("/api/v1/admin/products")
            .add_query_param("fields", "name,price")
            .await;
        let body: Value = response.json();

        let item = &body["data"]["data"][0];
        let keys: Vec<&String> = item.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert!(item.get("_id").is_some());
        assert!(item.get("name").is_some());
        assert!(item.get("price").is_some());
    }

    #[tokio::test]
    async fn test_version_marker_hidden_by_default() {
        let (server, store) = create_test_server().await;
        seed_product(&store, "Red Shirt", "active", 25.0).await;

        let response = server.get("/api/v1/admin/products").await;
        let body: Value = response.json();
        assert!(body["data"]["data"][0].get("__v").is_none());
    }
}

mod pagination {
    use super::*;

    #[tokio::test]
    async fn test_price_range_pagination_scenario() {
        let (server, store) = create_test_server().await;
        // 25 products priced 1..=25 all inside the requested range.
        for i in 1..=25 {
            seed_product(&store, &format!("Item {:02}", i), "active", i as f64).await;
        }

        let response = server
            .get("/api/v1/admin/products")
            .add_query_param("price[gte]", "1")
            .add_query_param("price[lte]", "25")
            .add_query_param("sort", "price")
            .add_query_param("page", "2")
            .add_query_param("limit", "10")
            .await;
        response.assert_status(StatusCode::OK);

        let body: Value = response.json();
        let items = body["data"]["data"].as_array().unwrap();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0]["price"], json!(11.0));
        assert_eq!(items[9]["price"], json!(20.0));

        let pagination = &body["meta"]["pagination"];
        assert_eq!(pagination["currentPage"], 2);
        assert_eq!(pagination["limit"], 10);
        assert_eq!(pagination["totalPages"], 3);
        assert_eq!(pagination["totalDocuments"], 25);
    }

    #[tokio::test]
    async fn test_invalid_page_and_limit_fall_back_to_defaults() {
        let (server, store) = create_test_server().await;
        seed_product(&store, "Only", "active", 1.0).await;

        let response = server
            .get("/api/v1/admin/products")
            .add_query_param("page", "0")
            .add_query_param("limit", "weird")
            .await;
        response.assert_status(StatusCode::OK);

        let pagination = &response.json::<Value>()["meta"]["pagination"];
        assert_eq!(pagination["currentPage"], 1);
        assert_eq!(pagination["limit"], 100);
    }

    #[tokio::test]
    async fn test_limit_clamped_to_configured_maximum() {
        let config = ServerConfig {
            default_limit: 10,
            max_limit: 20,
            ..ServerConfig::for_testing()
        };
        let (server, store) = create_test_server_with_config(config).await;
        seed_product(&store, "Only", "active", 1.0).await;

        let response = server
            .get("/api/v1/admin/products")
            .add_query_param("limit", "9999")
            .await;
        let pagination = &response.json::<Value>()["meta"]["pagination"];
        assert_eq!(pagination["limit"], 20);
    }

    #[tokio::test]
    async fn test_empty_result_has_zero_pages() {
        let (server, _store) = create_test_server().await;

        let response = server.get("/api/v1/admin/products").await;
        let body: Value = response.json();
        assert_eq!(body["data"]["results"], 0);
        assert_eq!(body["meta"]["pagination"]["totalPages"], 0);
        assert_eq!(body["meta"]["pagination"]["totalDocuments"], 0);
    }
}
