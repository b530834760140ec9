use axum::{
    body::Body,
    http::{Response, StatusCode},
    routing::post,
};
use quizfunnel::{
    clients::{BeehiivClient, WebhookIntakeClient},
    router,
    services::{intake::IntakeService, newsletter::NewsletterService},
    AppState,
};

/// App with every outbound collaborator unconfigured, so nothing leaves the process.
pub fn app() -> axum::Router {
    router(AppState {
        intake: IntakeService::new(WebhookIntakeClient::new(None)),
        newsletter: NewsletterService::new(BeehiivClient::new(None, None)),
        secure_cookies: false,
    })
}

/// App whose newsletter client talks to a local stand-in answering 201 Created.
#[allow(dead_code)]
pub async fn app_with_newsletter() -> axum::Router {
    let upstream = axum::Router::new().route(
        "/publications/{publication_id}/subscriptions",
        post(|| async { (StatusCode::CREATED, "{}") }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stand-in should bind");
    let addr = listener.local_addr().expect("stand-in should have an address");
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.expect("stand-in should serve");
    });

    let client = BeehiivClient::new(Some("key".to_string()), Some("pub_1".to_string()))
        .with_api_base(format!("http://{addr}"));
    router(AppState {
        intake: IntakeService::new(WebhookIntakeClient::new(None)),
        newsletter: NewsletterService::new(client),
        secure_cookies: false,
    })
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
