//! ListPlatformsHandler - Query handler for the storefront's platform list.

use std::sync::Arc;

use crate::domain::catalog::Platform;
use crate::domain::foundation::DomainError;
use crate::ports::CatalogRepository;

/// Query for all active platforms.
#[derive(Debug, Clone, Default)]
pub struct ListPlatformsQuery;

pub struct ListPlatformsHandler {
    catalog: Arc<dyn CatalogRepository>,
}

impl ListPlatformsHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListPlatformsQuery) -> Result<Vec<Platform>, DomainError> {
        self.catalog.list_platforms().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalogRepository;
    use crate::application::handlers::fixtures::platform;

    #[tokio::test]
    async fn returns_active_platforms_sorted_by_name() {
        let mut hidden = platform("p-3", "snap", "Snapchat");
        hidden.is_active = false;
        let repo = InMemoryCatalogRepository::new()
            .with_platform(platform("p-1", "tiktok", "TikTok"))
            .with_platform(platform("p-2", "instagram", "Instagram"))
            .with_platform(hidden);
        let handler = ListPlatformsHandler::new(Arc::new(repo));

        let platforms = handler.handle(ListPlatformsQuery).await.unwrap();

        let names: Vec<_> = platforms.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Instagram", "TikTok"]);
    }
}
