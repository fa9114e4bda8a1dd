use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    plant::{
        entities::{Diagnosis, DiseaseDiagnosis, PlantIdentification},
        value_objects::ImagePayload,
    },
};

/// Service trait for plant identification and disease detection
#[cfg_attr(test, mockall::automock)]
pub trait PlantService: Send + Sync {
    fn identify_plant(
        &self,
        image: ImagePayload,
    ) -> impl Future<Output = Result<PlantIdentification, CoreError>> + Send;

    fn detect_disease(
        &self,
        image: ImagePayload,
    ) -> impl Future<Output = Result<DiseaseDiagnosis, CoreError>> + Send;

    /// Runs identification and disease detection concurrently. Either both
    /// succeed within the configured timeout or the whole call fails.
    fn diagnose(
        &self,
        image: ImagePayload,
    ) -> impl Future<Output = Result<Diagnosis, CoreError>> + Send;
}
