//! User list service tests

#[cfg(test)]
mod tests {
    use crate::common::InMemoryIdentity;
    use crate::common::fixtures::{self, ASSIGNABLE_ROLES};
    use realm_admin::{FetchError, UserFilter, UserListService};
    use std::sync::Arc;

    fn service(api: Arc<InMemoryIdentity>) -> UserListService {
        UserListService::new(api, &fixtures::test_config("http://localhost:8080"))
    }

    #[tokio::test]
    async fn test_sample_user_list() {
        let api = Arc::new(InMemoryIdentity::sample());
        let resolved = service(api.clone()).load().await;

        let usernames: Vec<_> = resolved.data.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(
            usernames,
            vec![
                "user01", "user02", "user07", "user03", "user05", "user06", "user08", "user10",
                "user12"
            ]
        );

        let user02 = &resolved.data[1];
        assert_eq!(user02.roles, vec!["cdim-administrator", "cdim-operator"]);
        assert!(!user02.enabled);

        assert_eq!(resolved.errors, vec![None]);
        for role in ASSIGNABLE_ROLES {
            assert_eq!(api.call_count(&format!("role-users:{}", role)), 1);
        }
    }

    #[tokio::test]
    async fn test_role_options_follow_allow_list_order() {
        let api = Arc::new(InMemoryIdentity::sample());
        let resolved = service(api).load().await;

        let options = UserFilter::select_options(&resolved.data);
        assert_eq!(options.role, ASSIGNABLE_ROLES.to_vec());
    }

    #[tokio::test]
    async fn test_failed_role_page() {
        let api = Arc::new(InMemoryIdentity::sample().failing(
            "role-users:cdim-operator",
            FetchError::from_status(502, None),
        ));
        let resolved = service(api).load().await;

        assert_eq!(resolved.errors.len(), 1);
        assert_eq!(resolved.errors[0].as_ref().and_then(|e| e.status()), Some(502));
        assert!(resolved.data.iter().all(|r| !r.roles.iter().any(|x| x == "cdim-operator")));
        assert_eq!(resolved.data.len(), 8);
    }

    #[tokio::test]
    async fn test_reload() {
        let api = Arc::new(InMemoryIdentity::sample());
        let service = service(api.clone());

        let first = service.load().await;
        let second = service.reload().await;

        assert_eq!(first.data, second.data);
        assert_eq!(api.invalidations(), 1);
    }
}
