//! Client asset operations.
use crate::dto::asset::AssetDTO;
use crate::repository::AssetRepository;
use crate::services::{remote, ServiceResult};

/// Provides interaction with asset data through an [`AssetRepository`].
pub struct AssetService<R> {
    repo: R,
}

impl<R: AssetRepository> AssetService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Runs a raw asset query.
    pub fn query_assets(&self, query: &str) -> ServiceResult<Vec<AssetDTO>> {
        self.repo
            .query_assets(query)
            .map_err(remote("query assets", query))
    }

    /// All assets attached to the given account record.
    pub fn get_assets_by_account_id(&self, account_id: &str) -> ServiceResult<Vec<AssetDTO>> {
        let query = self.repo.assets_by_account_id_query(account_id);

        self.repo
            .query_assets(&query)
            .map_err(remote("query assets by account", account_id))
    }
}
