use actix_web::{web, HttpResponse};

use crate::domain::order::{CreateOrderRequest, CustomerId, OrderError, OrderService, PageRequest};
use crate::metrics::{health_handler, metrics_handler};

use super::error::{json_error_handler, path_error_handler, query_error_handler};

pub const BASE_ORDER_PATH: &str = "/api/order";

/// Register every route on an actix `App`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope(BASE_ORDER_PATH)
                .route("", web::post().to(create_order))
                // Literal segments before the {customer_id} catch-all
                .route("/queue", web::get().to(view_queue))
                .route("/next_delivery", web::get().to(view_next_delivery))
                .route("/{customer_id}", web::get().to(view_order))
                .route("/{customer_id}", web::delete().to(cancel_order)),
        )
        .route("/metrics", web::get().to(metrics_handler))
        .route("/health", web::get().to(health_handler));
}

async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, OrderError> {
    let status = service.create_order(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(status))
}

async fn cancel_order(
    service: web::Data<OrderService>,
    path: web::Path<u32>,
) -> Result<HttpResponse, OrderError> {
    service.cancel_order(CustomerId(path.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn view_order(
    service: web::Data<OrderService>,
    path: web::Path<u32>,
) -> Result<HttpResponse, OrderError> {
    let status = service.view_order(CustomerId(path.into_inner())).await?;
    Ok(HttpResponse::Ok().json(status))
}

async fn view_queue(service: web::Data<OrderService>, query: web::Query<PageRequest>) -> HttpResponse {
    HttpResponse::Ok().json(service.view_queue(query.into_inner()).await)
}

async fn view_next_delivery(service: web::Data<OrderService>) -> HttpResponse {
    HttpResponse::Ok().json(service.next_delivery().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorResponse;
    use crate::config::IntakeLimits;
    use crate::domain::order::{DeliveryBatch, QueuePage, QueueStatus};
    use crate::domain::queue::QueuePolicy;
    use crate::metrics::Metrics;
    use crate::store::InMemoryOrderStore;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn app_state() -> (web::Data<OrderService>, web::Data<Arc<Metrics>>) {
        let metrics = Arc::new(Metrics::new().unwrap());
        let service = OrderService::new(
            Arc::new(InMemoryOrderStore::new()),
            QueuePolicy::default(),
            IntakeLimits::default(),
            metrics.clone(),
        );
        (web::Data::new(service), web::Data::new(metrics))
    }

    macro_rules! init_app {
        () => {{
            let (service, metrics) = app_state();
            test::init_service(App::new().app_data(service).app_data(metrics).configure(configure)).await
        }};
    }

    fn create(customer_id: u32, quantity: u32) -> test::TestRequest {
        test::TestRequest::post()
            .uri(BASE_ORDER_PATH)
            .set_json(serde_json::json!({ "customerId": customer_id, "quantity": quantity }))
    }

    #[actix_web::test]
    async fn test_create_order() {
        let app = init_app!();

        let resp = test::call_service(&app, create(1, 10).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let status: QueueStatus = test::read_body_json(resp).await;
        assert_eq!(status.customer_id, CustomerId(1));
        assert_eq!(status.position, 1);
        assert_eq!(status.wait_time, 5);
    }

    #[actix_web::test]
    async fn test_create_duplicate_order() {
        let app = init_app!();
        test::call_service(&app, create(1, 10).to_request()).await;

        let resp = test::call_service(&app, create(1, 10).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, 409);
        assert_eq!(body.message, "Customer 1 has an existing order");
    }

    #[actix_web::test]
    async fn test_create_order_exceeding_capacity() {
        let app = init_app!();

        let resp = test::call_service(&app, create(1, 60).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_body_uses_error_shape() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri(BASE_ORDER_PATH)
            .set_json(serde_json::json!({ "customerId": -4, "quantity": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.status, 400);
        assert!(body.message.starts_with("Malformed request"));
    }

    #[actix_web::test]
    async fn test_cancel_order() {
        let app = init_app!();
        test::call_service(&app, create(1, 10).to_request()).await;

        let req = test::TestRequest::delete().uri("/api/order/1").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::delete().uri("/api/order/1").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_view_order() {
        let app = init_app!();
        test::call_service(&app, create(2000, 5).to_request()).await;
        test::call_service(&app, create(5, 10).to_request()).await;

        let req = test::TestRequest::get().uri("/api/order/2000").to_request();
        let status: QueueStatus = test::call_and_read_body_json(&app, req).await;
        assert_eq!(status.position, 2);

        let req = test::TestRequest::get().uri("/api/order/77").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_non_numeric_customer_id() {
        let app = init_app!();

        let req = test::TestRequest::get().uri("/api/order/abc").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_view_queue() {
        let app = init_app!();
        test::call_service(&app, create(10000, 20).to_request()).await;
        test::call_service(&app, create(20, 25).to_request()).await;
        test::call_service(&app, create(300, 15).to_request()).await;

        let req = test::TestRequest::get().uri("/api/order/queue?page=0&size=3").to_request();
        let page: QueuePage = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<u32> = page.content.iter().map(|s| s.customer_id.value()).collect();
        assert_eq!(ids, vec![20, 300, 10000]);
        assert_eq!(page.total_elements, 3);
    }

    #[actix_web::test]
    async fn test_view_queue_defaults() {
        let app = init_app!();

        let req = test::TestRequest::get().uri("/api/order/queue").to_request();
        let page: QueuePage = test::call_and_read_body_json(&app, req).await;
        assert!(page.content.is_empty());
        assert_eq!(page.size, 20);
    }

    #[actix_web::test]
    async fn test_view_next_delivery() {
        let app = init_app!();
        test::call_service(&app, create(1, 20).to_request()).await;
        test::call_service(&app, create(2, 25).to_request()).await;
        test::call_service(&app, create(3, 15).to_request()).await;

        let req = test::TestRequest::get().uri("/api/order/next_delivery").to_request();
        let batch: DeliveryBatch = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<u32> = batch.entries.iter().map(|e| e.customer_id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[actix_web::test]
    async fn test_metrics_and_health() {
        let app = init_app!();
        test::call_service(&app, create(1, 20).to_request()).await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("orders_created_total 1"));

        let req = test::TestRequest::get().uri("/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
