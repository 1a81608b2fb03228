//! ListMasterKras - Query handler for the shared responsibility catalog.

use std::sync::Arc;

use crate::domain::role::MasterKra;
use crate::ports::{ApiError, ProfileApi};

/// Optionally restricted to one profession bucket.
#[derive(Debug, Clone, Default)]
pub struct ListMasterKrasQuery {
    pub bucket: Option<String>,
}

pub struct ListMasterKrasHandler {
    api: Arc<dyn ProfileApi>,
}

impl ListMasterKrasHandler {
    pub fn new(api: Arc<dyn ProfileApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, query: ListMasterKrasQuery) -> Result<Vec<MasterKra>, ApiError> {
        let kras = self.api.list_master_kras().await?;
        Ok(match query.bucket {
            Some(bucket) => kras.into_iter().filter(|k| k.bucket == bucket).collect(),
            None => kras,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::api::InMemoryProfileApi;

    #[tokio::test]
    async fn test_filters_by_bucket() {
        let handler = ListMasterKrasHandler::new(Arc::new(InMemoryProfileApi::seeded()));

        let all = handler.handle(ListMasterKrasQuery::default()).await.unwrap();
        let law = handler
            .handle(ListMasterKrasQuery {
                bucket: Some("Law".to_string()),
            })
            .await
            .unwrap();

        assert!(all.len() > law.len());
        assert!(!law.is_empty());
        assert!(law.iter().all(|k| k.bucket == "Law"));
    }
}
