//! In-memory identity provider

use super::fixtures;
use async_trait::async_trait;
use parking_lot::Mutex;
use realm_admin::utils::error::FetchResult;
use realm_admin::{FetchError, IdentityApi, RoleMappings, RoleSet, User};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Identity provider serving fixed data
///
/// Unknown keys answer 404. Every call is recorded as `"{kind}:{key}"`.
#[derive(Default)]
pub struct InMemoryIdentity {
    users: HashMap<String, User>,
    mappings: HashMap<String, RoleMappings>,
    composites: HashMap<String, RoleSet>,
    role_users: HashMap<String, Vec<User>>,
    failures: HashMap<String, FetchError>,
    calls: Mutex<Vec<String>>,
    invalidations: AtomicUsize,
}

impl InMemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample realm
    pub fn sample() -> Self {
        let mut api = Self::new()
            .with_user(fixtures::sample_user())
            .with_mappings(fixtures::SAMPLE_USER_ID, fixtures::attached_roles());
        for (role_id, page) in fixtures::composite_pages() {
            api = api.with_composites(role_id, page);
        }
        for role in fixtures::ASSIGNABLE_ROLES {
            api = api.with_role_users(role, fixtures::role_members(role));
        }
        api
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id.clone(), user);
        self
    }

    pub fn with_mappings(mut self, user_id: &str, mappings: RoleMappings) -> Self {
        self.mappings.insert(user_id.to_string(), mappings);
        self
    }

    pub fn with_composites(mut self, role_id: &str, page: RoleSet) -> Self {
        self.composites.insert(role_id.to_string(), page);
        self
    }

    pub fn with_role_users(mut self, role: &str, users: Vec<User>) -> Self {
        self.role_users.insert(role.to_string(), users);
        self
    }

    /// Make the call recorded as `call` fail with `error`
    pub fn failing(mut self, call: &str, error: FetchError) -> Self {
        self.failures.insert(call.to_string(), error);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }

    fn lookup<T: Clone>(&self, kind: &str, key: &str, data: &HashMap<String, T>) -> FetchResult<T> {
        let call = format!("{}:{}", kind, key);
        self.calls.lock().push(call.clone());

        if let Some(error) = self.failures.get(&call) {
            return Err(error.clone());
        }
        data.get(key)
            .cloned()
            .ok_or_else(|| FetchError::from_status(404, Some(format!("{} not found", call))))
    }
}

#[async_trait]
impl IdentityApi for InMemoryIdentity {
    async fn user(&self, user_id: &str) -> FetchResult<User> {
        self.lookup("user", user_id, &self.users)
    }

    async fn role_mappings(&self, user_id: &str) -> FetchResult<RoleMappings> {
        self.lookup("role-mappings", user_id, &self.mappings)
    }

    async fn composites(&self, role_id: &str) -> FetchResult<RoleSet> {
        self.lookup("composites", role_id, &self.composites)
    }

    async fn role_users(&self, role_name: &str) -> FetchResult<Vec<User>> {
        self.lookup("role-users", role_name, &self.role_users)
    }

    async fn invalidate(&self) {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
    }
}
