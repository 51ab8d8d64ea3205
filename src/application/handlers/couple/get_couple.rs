//! GetCoupleHandler - resolve the caller's couple.

use std::sync::Arc;

use crate::domain::couple::CoupleError;
use crate::domain::foundation::UserId;
use crate::ports::{CoupleRepository, UserDirectory};

use super::view::{project_couple, CoupleView};

/// Query for the caller's couple.
#[derive(Debug, Clone)]
pub struct GetCoupleQuery {
    pub user_id: UserId,
}

/// Handler for couple lookup by membership.
pub struct GetCoupleHandler {
    couples: Arc<dyn CoupleRepository>,
    directory: Arc<dyn UserDirectory>,
}

impl GetCoupleHandler {
    pub fn new(couples: Arc<dyn CoupleRepository>, directory: Arc<dyn UserDirectory>) -> Self {
        Self { couples, directory }
    }

    pub async fn handle(&self, query: GetCoupleQuery) -> Result<CoupleView, CoupleError> {
        let couple = self
            .couples
            .find_by_member(&query.user_id)
            .await?
            .ok_or(CoupleError::NotFound)?;

        Ok(project_couple(&couple, self.directory.as_ref()).await?)
    }
}
