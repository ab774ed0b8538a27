//! Composite role expansion
//!
//! Composite realm roles are expanded round by round. Every round fetches
//! the children of all frontier entries added by the previous round, in
//! parallel, then scans the new pages for further composites. Expansion ends
//! with the first round that discovers nothing new.

use super::{AssignableRoles, flatten_inherited_roles};
use crate::core::identity::IdentityApi;
use crate::core::models::{Role, RoleSet};
use crate::utils::error::FetchError;
use futures::future::join_all;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Ids of composite realm roles whose children are, or will be, fetched
///
/// Append-only. An id enters at most once.
#[derive(Debug, Clone, Default)]
pub struct CompositeFrontier {
    ids: Vec<String>,
    seen: HashSet<String>,
    limit: Option<usize>,
    truncated: bool,
}

impl CompositeFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frontier that stops growing at `limit` entries
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Append every expandable role not seen yet, in encounter order
    ///
    /// Returns the number of ids appended.
    pub fn discover<'a, I>(&mut self, roles: I) -> usize
    where
        I: IntoIterator<Item = &'a Role>,
    {
        let before = self.ids.len();

        for role in roles.into_iter().filter(|role| role.is_expandable()) {
            if self.seen.contains(&role.id) {
                continue;
            }
            if self.limit.is_some_and(|limit| self.ids.len() >= limit) {
                self.truncated = true;
                break;
            }
            self.seen.insert(role.id.clone());
            self.ids.push(role.id.clone());
        }

        self.ids.len() - before
    }

    /// Role id whose composites make up page `index`
    ///
    /// `None` past the end of the frontier.
    pub fn page_key(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    pub fn contains(&self, role_id: &str) -> bool {
        self.seen.contains(role_id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether a composite was skipped because of the limit
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Outcome of one expansion
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    /// Final frontier
    pub frontier: CompositeFrontier,
    /// One page per frontier entry, `None` where the fetch failed
    pub pages: Vec<Option<RoleSet>>,
    /// First page fetch failure
    pub error: Option<FetchError>,
    /// Number of fetch rounds
    pub rounds: usize,
}

impl Expansion {
    /// The displayed inherited roles
    pub fn inherited(&self, allow: &AssignableRoles) -> RoleSet {
        flatten_inherited_roles(&self.pages, allow)
    }
}

/// Expands composite roles against an identity API
pub struct CompositeExpander<'a> {
    api: &'a dyn IdentityApi,
    max_composites: usize,
}

impl<'a> CompositeExpander<'a> {
    pub fn new(api: &'a dyn IdentityApi, max_composites: usize) -> Self {
        Self {
            api,
            max_composites,
        }
    }

    /// Expand the composites reachable from `assigned`
    pub async fn expand(&self, assigned: &[Role]) -> Expansion {
        let mut frontier = CompositeFrontier::with_limit(self.max_composites);
        let mut pages: Vec<Option<RoleSet>> = Vec::new();
        let mut error: Option<FetchError> = None;
        let mut rounds = 0;

        frontier.discover(assigned);
        let mut cursor = 0;

        while cursor < frontier.len() {
            rounds += 1;
            let start = cursor;
            let pending: Vec<String> = frontier.ids()[start..].to_vec();
            debug!(round = rounds, pending = pending.len(), "Fetching composite pages");

            let results = join_all(pending.iter().map(|id| self.api.composites(id))).await;

            cursor = frontier.len();
            pages.resize(cursor, None);

            for (offset, (role_id, result)) in pending.iter().zip(results).enumerate() {
                match result {
                    Ok(page) => pages[start + offset] = Some(page),
                    Err(e) => {
                        warn!(role_id = %role_id, "Failed to fetch composites: {}", e);
                        if error.is_none() {
                            error = Some(e);
                        }
                    }
                }
            }

            let discovered: usize = pages[start..cursor]
                .iter()
                .flatten()
                .map(|page| frontier.discover(page))
                .sum();
            debug!(round = rounds, discovered, "Scanned composite pages");
        }

        if frontier.is_truncated() {
            warn!(
                limit = self.max_composites,
                "Composite expansion stopped at the configured limit"
            );
        }

        Expansion {
            frontier,
            pages,
            error,
            rounds,
        }
    }
}
