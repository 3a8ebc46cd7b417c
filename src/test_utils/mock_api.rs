use axum::Router;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return the base URL of the
/// API, e.g. "http://127.0.0.1:41234/api".
///
/// Routes in `router` must include the "/api" prefix.
pub(crate) async fn spawn_mock_api(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind mock API listener");
    let address = listener
        .local_addr()
        .expect("Could not get mock API address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock API server failed");
    });

    format!("http://{address}/api")
}

/// A base URL that refuses connections.
pub(crate) async fn unreachable_api_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind listener");
    let address = listener.local_addr().expect("Could not get address");
    drop(listener);

    format!("http://{address}/api")
}
