//! HTTP identity client tests against a mock admin API

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{self, SAMPLE_USER_ID};
    use crate::{assert_err, assert_ok};
    use realm_admin::{FetchErrorKind, IdentityApi, KeycloakClient};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const USER_PATH: &str = "/admin/realms/cdim/users/user-test001";

    async fn client_for(server: &MockServer) -> KeycloakClient {
        assert_ok!(KeycloakClient::new(&fixtures::test_config(&server.uri())))
    }

    // ==================== Request Tests ====================

    #[tokio::test]
    async fn test_fetch_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(USER_PATH))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": SAMPLE_USER_ID,
                "username": "test001",
                "enabled": false,
                "createdTimestamp": 1706060023219i64,
                "disableableCredentialTypes": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let user = assert_ok!(client.user(SAMPLE_USER_ID).await);

        assert_eq!(user.username, "test001");
        assert_eq!(user.created_timestamp, Some(1706060023219));
    }

    #[tokio::test]
    async fn test_bearer_token_is_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/realms/cdim/roles/cdim-operator/users"))
            .and(header("authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = fixtures::test_config(&server.uri());
        config.idp.access_token = Some("secret-token".to_string());
        let client = assert_ok!(KeycloakClient::new(&config));

        let users = assert_ok!(client.role_users("cdim-operator").await);
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_role_mappings_without_realm_mappings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/admin/realms/cdim/users/u1/role-mappings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let mappings = assert_ok!(client.role_mappings("u1").await);
        assert!(mappings.realm_mappings.is_empty());
    }

    // ==================== Retry Tests ====================

    #[tokio::test]
    async fn test_not_found_is_requested_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(USER_PATH))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "User not found"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = assert_err!(client.user(SAMPLE_USER_ID).await);

        assert_eq!(err.kind(), FetchErrorKind::NotFound);
        assert_eq!(err.message(), "Request failed with status code 404");
        assert_eq!(err.detail(), Some("User not found"));
    }

    #[tokio::test]
    async fn test_server_error_is_retried_then_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(USER_PATH))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(USER_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": SAMPLE_USER_ID, "username": "test001"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let started = Instant::now();
        let user = assert_ok!(client.user(SAMPLE_USER_ID).await);

        assert_eq!(user.username, "test001");
        assert!(started.elapsed() >= Duration::from_millis(10));
    }

    #[tokio::test]
    async fn test_retries_exhausted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(USER_PATH))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(json!({"error": "maintenance"})),
            )
            .expect(4)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = assert_err!(client.user(SAMPLE_USER_ID).await);

        assert_eq!(err.kind(), FetchErrorKind::Transient);
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.detail(), Some("maintenance"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_transient() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(USER_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .expect(4)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = assert_err!(client.user(SAMPLE_USER_ID).await);

        assert_eq!(err.kind(), FetchErrorKind::Transient);
        assert_eq!(err.status(), Some(200));
    }

    // ==================== Cache Tests ====================

    #[tokio::test]
    async fn test_responses_are_cached_until_invalidated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(USER_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": SAMPLE_USER_ID, "username": "test001"})),
            )
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_ok!(client.user(SAMPLE_USER_ID).await);
        assert_ok!(client.user(SAMPLE_USER_ID).await);

        client.invalidate().await;
        assert_ok!(client.user(SAMPLE_USER_ID).await);
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(USER_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": SAMPLE_USER_ID, "username": "test001"}))
                    .set_delay(Duration::from_millis(50)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = Arc::new(client_for(&server).await);
        let (a, b) = tokio::join!(client.user(SAMPLE_USER_ID), client.user(SAMPLE_USER_ID));

        assert_eq!(assert_ok!(a), assert_ok!(b));
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(USER_PATH))
            .respond_with(ResponseTemplate::new(404))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        assert_err!(client.user(SAMPLE_USER_ID).await);
        assert_err!(client.user(SAMPLE_USER_ID).await);
    }
}
