//! User detail service tests

#[cfg(test)]
mod tests {
    use crate::common::InMemoryIdentity;
    use crate::common::fixtures::{self, EXPECTED_INHERITED, SAMPLE_USER_ID};
    use crate::{assert_ok, role_names};
    use realm_admin::{ErrorBanner, FetchError, IdentityApi, KeycloakClient, UserDetailService};
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(api: Arc<InMemoryIdentity>) -> UserDetailService {
        UserDetailService::new(api, &fixtures::test_config("http://localhost:8080"))
    }

    // ==================== In-memory Provider ====================

    #[tokio::test]
    async fn test_sample_user_detail() {
        let api = Arc::new(InMemoryIdentity::sample());
        let resolved = service(api.clone()).load(SAMPLE_USER_ID).await;

        assert_eq!(resolved.data.user, Some(fixtures::sample_user()));
        assert_eq!(
            role_names!(resolved.data.assigned_roles),
            vec!["cdim-administrator", "cdim-operator"]
        );
        assert_eq!(role_names!(resolved.data.inherited_roles), EXPECTED_INHERITED.to_vec());
        assert_eq!(resolved.errors, vec![None, None, None]);
        assert!(!resolved.is_validating);

        assert_eq!(api.call_count("composites:"), 4);
        assert_eq!(api.call_count("user:"), 1);
        assert_eq!(api.call_count("role-mappings:"), 1);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let api = Arc::new(InMemoryIdentity::sample());
        let resolved = service(api.clone()).load("missing").await;

        assert!(resolved.data.user.is_none());
        assert!(resolved.data.assigned_roles.is_empty());
        assert!(resolved.data.inherited_roles.is_empty());
        assert!(resolved.errors[0].as_ref().is_some_and(FetchError::is_not_found));
        assert!(resolved.errors[1].as_ref().is_some_and(FetchError::is_not_found));
        assert!(resolved.errors[2].is_none());
        assert_eq!(api.call_count("composites:"), 0);
    }

    #[tokio::test]
    async fn test_failed_composite_page_keeps_other_roles() {
        let api = Arc::new(InMemoryIdentity::sample().failing(
            "composites:d737ed2d-5671-432c-9972-280c3792967f",
            FetchError::from_status(500, Some("boom".to_string())),
        ));
        let resolved = service(api).load(SAMPLE_USER_ID).await;

        assert_eq!(
            role_names!(resolved.data.inherited_roles),
            vec!["cdim-manage-layout", "cdim-manage-user", "cdim-manage-resource"]
        );
        assert_eq!(
            resolved.banners(),
            vec![ErrorBanner {
                title: "Request failed with status code 500".to_string(),
                message: "boom".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_reload_invalidates_cache() {
        let api = Arc::new(InMemoryIdentity::sample());
        let service = service(api.clone());

        service.load(SAMPLE_USER_ID).await;
        service.reload(SAMPLE_USER_ID).await;

        assert_eq!(api.invalidations(), 1);
        assert_eq!(api.call_count("user:"), 2);
    }

    // ==================== HTTP Client ====================

    async fn mount_json(server: &MockServer, route: String, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_sample_user_detail_over_http() {
        let server = MockServer::start().await;
        let realm = "/admin/realms/cdim";

        mount_json(
            &server,
            format!("{}/users/{}", realm, SAMPLE_USER_ID),
            json!(fixtures::sample_user()),
        )
        .await;
        mount_json(
            &server,
            format!("{}/users/{}/role-mappings", realm, SAMPLE_USER_ID),
            json!(fixtures::attached_roles()),
        )
        .await;
        for (role_id, page) in fixtures::composite_pages() {
            mount_json(
                &server,
                format!("{}/roles-by-id/{}/composites", realm, role_id),
                json!(page),
            )
            .await;
        }

        let config = fixtures::test_config(&server.uri());
        let client: Arc<dyn IdentityApi> = Arc::new(assert_ok!(KeycloakClient::new(&config)));
        let resolved = UserDetailService::new(client, &config)
            .load(SAMPLE_USER_ID)
            .await;

        assert!(!resolved.has_errors());
        assert_eq!(resolved.data.user, Some(fixtures::sample_user()));
        assert_eq!(role_names!(resolved.data.inherited_roles), EXPECTED_INHERITED.to_vec());
    }
}
