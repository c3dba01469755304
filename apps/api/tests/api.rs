//! Black-box tests for the HTTP API.
//!
//! Each test builds the full router over a fresh in-memory database and
//! drives it through tower's `oneshot`, so the whole stack short of the
//! TCP listener is exercised: routing, extraction, validation,
//! repositories, and JSON shapes.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use inventario_api::build_app;
use inventario_db::{Database, DbConfig};

async fn app() -> Router {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    build_app(db)
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(json_body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body was not JSON")
    };
    (status, value)
}

fn sample_product() -> Value {
    json!({
        "sku": "CAM-001",
        "nombre": "Camiseta",
        "categoria": "Ropa",
        "subcategoria": "Camisetas",
        "precioCompra": 5.0,
        "precioVenta": 12.5,
        "cantidad": 10,
        "color": "Azul",
        "marca": "Acme",
        "descripcion": "Algodón"
    })
}

fn sale_body(product_id: i64, quantity: i64, unit_price: f64, fecha: Option<&str>) -> Value {
    let mut body = json!({
        "cliente": {
            "nombre": "Ana",
            "apellidos": "Gómez",
            "cedula": "123456",
            "direccion": "Calle 1"
        },
        "detalles": [{
            "id": product_id,
            "cantidad": quantity,
            "precio": unit_price,
            "subtotal": unit_price * quantity as f64
        }],
        "total": unit_price * quantity as f64
    });
    if let Some(f) = fecha {
        body["fecha"] = json!(f);
    }
    body
}

#[tokio::test]
async fn health_endpoint_answers() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_product_then_list_round_trips() {
    let app = app().await;

    let (status, created) = send(&app, "POST", "/api/productos", Some(sample_product())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], true);
    let id = created["id"].as_i64().unwrap();

    let (status, listed) = send(&app, "GET", "/api/productos", None).await;
    assert_eq!(status, StatusCode::OK);
    let products = listed.as_array().unwrap();
    assert_eq!(products.len(), 1);

    let p = &products[0];
    assert_eq!(p["id"], id);
    assert_eq!(p["sku"], "CAM-001");
    assert_eq!(p["nombre"], "Camiseta");
    assert_eq!(p["subcategoria"], "Camisetas");
    assert_eq!(p["precioCompra"], 5.0);
    assert_eq!(p["precioVenta"], 12.5);
    assert_eq!(p["cantidad"], 10);
    assert_eq!(p["marca"], "Acme");
}

#[tokio::test]
async fn listing_twice_without_writes_is_idempotent() {
    let app = app().await;
    send(&app, "POST", "/api/productos", Some(sample_product())).await;

    let (_, first) = send(&app, "GET", "/api/productos", None).await;
    let (_, second) = send(&app, "GET", "/api/productos", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn inventario_is_an_alias_of_productos() {
    let app = app().await;
    send(&app, "POST", "/api/productos", Some(sample_product())).await;

    let (status, inventory) = send(&app, "GET", "/api/inventario", None).await;
    let (_, products) = send(&app, "GET", "/api/productos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inventory, products);
}

#[tokio::test]
async fn update_changes_pricing_and_ignores_missing_ids() {
    let app = app().await;
    let (_, created) = send(&app, "POST", "/api/productos", Some(sample_product())).await;
    let id = created["id"].as_i64().unwrap();

    let update = json!({"precioCompra": 6.0, "precioVenta": 14.0, "cantidad": 25});
    let (status, body) = send(&app, "PUT", &format!("/api/productos/{id}"), Some(update.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, listed) = send(&app, "GET", "/api/productos", None).await;
    assert_eq!(listed[0]["precioVenta"], 14.0);
    assert_eq!(listed[0]["cantidad"], 25);
    // Identity fields stay put.
    assert_eq!(listed[0]["nombre"], "Camiseta");

    // Updating an id that matches nothing is still a success.
    let (status, body) = send(&app, "PUT", "/api/productos/9999", Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn deleting_missing_product_succeeds_with_zero_count() {
    let app = app().await;

    let (status, body) = send(&app, "DELETE", "/api/productos/424242", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], 0);
}

#[tokio::test]
async fn register_sale_decrements_stock_and_exposes_detail() {
    let app = app().await;
    let (_, created) = send(&app, "POST", "/api/productos", Some(sample_product())).await;
    let product_id = created["id"].as_i64().unwrap();

    let (status, sale) =
        send(&app, "POST", "/api/ventas", Some(sale_body(product_id, 3, 10.0, None))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sale["mensaje"], "Venta registrada");
    let sale_id = sale["ventaId"].as_i64().unwrap();

    // Stock 10 - 3 = 7.
    let (_, products) = send(&app, "GET", "/api/productos", None).await;
    assert_eq!(products[0]["cantidad"], 7);

    let (status, detail) =
        send(&app, "GET", &format!("/api/ventas-detalle/{sale_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let lines = detail.as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["productoId"], product_id);
    assert_eq!(lines[0]["nombreProducto"], "Camiseta");
    assert_eq!(lines[0]["sku"], "CAM-001");
    assert_eq!(lines[0]["precio"], 10.0);
    assert_eq!(lines[0]["cantidad"], 3);
    assert_eq!(lines[0]["subtotal"], 30.0);
}

#[tokio::test]
async fn register_sale_with_empty_items_writes_nothing() {
    let app = app().await;
    send(&app, "POST", "/api/productos", Some(sample_product())).await;

    let body = json!({
        "cliente": {"nombre": "Ana", "apellidos": "Gómez"},
        "detalles": [],
        "total": 0.0
    });
    let (status, response) = send(&app, "POST", "/api/ventas", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Datos incompletos");

    let (_, sales) = send(&app, "GET", "/api/ventas", None).await;
    assert_eq!(sales.as_array().unwrap().len(), 0);

    // Stock untouched.
    let (_, products) = send(&app, "GET", "/api/productos", None).await;
    assert_eq!(products[0]["cantidad"], 10);
}

#[tokio::test]
async fn register_sale_without_customer_is_rejected() {
    let app = app().await;

    let body = json!({
        "detalles": [{"id": 1, "cantidad": 1, "precio": 5.0, "subtotal": 5.0}],
        "total": 5.0
    });
    let (status, response) = send(&app, "POST", "/api/ventas", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Datos incompletos");
}

#[tokio::test]
async fn sales_listings_are_newest_first() {
    let app = app().await;
    let (_, created) = send(&app, "POST", "/api/productos", Some(sample_product())).await;
    let product_id = created["id"].as_i64().unwrap();

    let mut ids = Vec::new();
    for _ in 0..3 {
        let (_, sale) =
            send(&app, "POST", "/api/ventas", Some(sale_body(product_id, 1, 12.5, None))).await;
        ids.push(sale["ventaId"].as_i64().unwrap());
    }

    let (_, sales) = send(&app, "GET", "/api/ventas", None).await;
    let listed: Vec<i64> = sales.as_array().unwrap().iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(listed, vec![ids[2], ids[1], ids[0]]);

    let (_, summary) = send(&app, "GET", "/api/ventas-resumen", None).await;
    let rows = summary.as_array().unwrap();
    let summarized: Vec<i64> = rows.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(summarized, vec![ids[2], ids[1], ids[0]]);
    assert_eq!(rows[0]["cliente"], "Ana Gómez");
    assert_eq!(rows[0]["total"], 12.5);
}

#[tokio::test]
async fn dashboard_aggregates_subcategory_by_month() {
    let app = app().await;
    let (_, created) = send(&app, "POST", "/api/productos", Some(sample_product())).await;
    let product_id = created["id"].as_i64().unwrap();

    // Two line items in the same month: unit prices 10 and 20, purchase
    // price 5, quantity 1 each.
    send(
        &app,
        "POST",
        "/api/ventas",
        Some(sale_body(product_id, 1, 10.0, Some("2025-03-01 10:00:00"))),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/ventas",
        Some(sale_body(product_id, 1, 20.0, Some("2025-03-20 10:00:00"))),
    )
    .await;

    let (status, report) = send(&app, "GET", "/api/dashboard-subcategorias", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = report.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["producto"], "Camisetas");
    assert_eq!(rows[0]["mes"], "Marzo");
    assert_eq!(rows[0]["ventas"], 2);
    assert_eq!(rows[0]["precio"], 15.0);
    assert_eq!(rows[0]["ingresos"], 20.0); // (15 - 5) * 2
}

#[tokio::test]
async fn supplier_lifecycle_and_not_found_delete() {
    let app = app().await;

    // Missing name is rejected.
    let (status, body) =
        send(&app, "POST", "/api/proveedores", Some(json!({"telefono": "555-0101"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "El nombre del proveedor es obligatorio");

    let (status, created) = send(
        &app,
        "POST",
        "/api/proveedores",
        Some(json!({"nombre": "Distribuidora Sur", "telefono": "555-0101", "email": "ventas@sur.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();

    let (_, listed) = send(&app, "GET", "/api/proveedores", None).await;
    assert_eq!(listed[0]["nombre"], "Distribuidora Sur");
    assert_eq!(listed[0]["telefono"], "555-0101");

    // Deleting it works once...
    let (status, body) = send(&app, "DELETE", &format!("/api/proveedores/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    // ...and 404s the second time, unlike product delete.
    let (status, body) = send(&app, "DELETE", &format!("/api/proveedores/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Proveedor no encontrado");
}

#[tokio::test]
async fn purchase_order_requires_refs_and_never_moves_stock() {
    let app = app().await;
    let (_, created) = send(&app, "POST", "/api/productos", Some(sample_product())).await;
    let product_id = created["id"].as_i64().unwrap();
    let (_, supplier) = send(
        &app,
        "POST",
        "/api/proveedores",
        Some(json!({"nombre": "Distribuidora Sur"})),
    )
    .await;
    let supplier_id = supplier["id"].as_i64().unwrap();

    // Incomplete payloads are rejected.
    for bad in [
        json!({"proveedorId": supplier_id, "cantidad": 5}),
        json!({"productoId": product_id, "cantidad": 5}),
        json!({"productoId": product_id, "proveedorId": supplier_id}),
        json!({"productoId": product_id, "proveedorId": supplier_id, "cantidad": 0}),
    ] {
        let (status, body) = send(&app, "POST", "/api/pedidos", Some(bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Datos incompletos del pedido");
    }

    let (status, order) = send(
        &app,
        "POST",
        "/api/pedidos",
        Some(json!({
            "productoId": product_id,
            "proveedorId": supplier_id,
            "cantidad": 20,
            "precioCompra": 4.5,
            "precioVenta": 9.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["success"], true);

    let (status, detail) = send(&app, "GET", "/api/pedidos-detalle", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = detail.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["producto"], "Camiseta");
    assert_eq!(rows[0]["proveedor"], "Distribuidora Sur");
    assert_eq!(rows[0]["cantidad"], 20);
    assert_eq!(rows[0]["precioCompra"], 4.5);

    // Product stock is a sales concern only.
    let (_, products) = send(&app, "GET", "/api/productos", None).await;
    assert_eq!(products[0]["cantidad"], 10);
}

#[tokio::test]
async fn stock_may_go_negative_through_the_api() {
    let app = app().await;
    let mut product = sample_product();
    product["cantidad"] = json!(2);
    let (_, created) = send(&app, "POST", "/api/productos", Some(product)).await;
    let product_id = created["id"].as_i64().unwrap();

    let (status, _) =
        send(&app, "POST", "/api/ventas", Some(sale_body(product_id, 5, 12.5, None))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, products) = send(&app, "GET", "/api/productos", None).await;
    assert_eq!(products[0]["cantidad"], -3);
}
