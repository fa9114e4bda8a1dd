use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, suggestion::entities::RegionSuggestionSet,
};

/// Service trait for regional plant suggestions
#[cfg_attr(test, mockall::automock)]
pub trait SuggestionService: Send + Sync {
    fn suggest_plants(
        &self,
        region: String,
    ) -> impl Future<Output = Result<RegionSuggestionSet, CoreError>> + Send;
}
