//! Filter tests over the sample data

#[cfg(test)]
mod tests {
    use crate::common::fixtures;
    use realm_admin::{RoleFilter, UserEnabled, UserFilter};
    use std::time::Duration;

    const DEBOUNCE: Duration = Duration::from_millis(200);

    async fn settle() {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_username_queries() {
        let records = fixtures::user_records();
        let mut filter = UserFilter::new(DEBOUNCE);

        filter.set_username("1");
        settle().await;
        assert_eq!(filter.apply(&records).len(), 4);

        filter.set_username("user0");
        settle().await;
        assert_eq!(filter.apply(&records).len(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_name_queries() {
        let records = fixtures::user_records();
        let mut filter = UserFilter::new(DEBOUNCE);

        filter.set_last_name("Kikin");
        settle().await;
        assert_eq!(filter.apply(&records).len(), 4);

        filter.set_last_name("");
        filter.set_first_name("Hanako");
        settle().await;
        assert_eq!(filter.apply(&records).len(), 2);

        filter.set_last_name("InfrastructureDynamic");
        settle().await;
        assert_eq!(filter.apply(&records).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_not_applied_before_quiet_period() {
        let records = fixtures::user_records();
        let mut filter = UserFilter::new(DEBOUNCE);

        filter.set_last_name("Kikin");
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(filter.query().last_name, "Kikin");
        assert_eq!(filter.apply(&records).len(), 12);
    }

    #[tokio::test]
    async fn test_combined_text_and_select() {
        let records = fixtures::user_records();
        let mut filter = UserFilter::new(DEBOUNCE);

        filter.set_last_name("kikin");
        filter.set_enabled(vec![UserEnabled::Enabled]);
        filter.set_roles(vec!["cdim-operator".to_string()]);
        filter.flush();

        let matched = filter.apply(&records);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].username, "user07");
    }

    #[tokio::test(start_paused = true)]
    async fn test_role_description_query() {
        let roles = fixtures::api_roles();
        let mut filter = RoleFilter::new(DEBOUNCE);

        filter.set_description("role_view-realm");
        settle().await;
        assert_eq!(filter.apply(&roles).len(), 6);
    }
}
