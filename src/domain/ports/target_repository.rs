//! Target repository ports

use crate::domain::entities::Target;
use crate::domain::value_objects::{
    ProviderConfig, ProviderConfigRequirement, TargetId, TargetUrlRequirement, Url,
};

use super::StoreResult;

pub trait TargetsReader: Send + Sync {
    fn get_by_id(&self, id: &TargetId) -> StoreResult<Option<Target>>;

    /// Whether no target other than `excluding` uses `url`
    fn check_url_availability(
        &self,
        url: Url,
        excluding: Option<&TargetId>,
    ) -> StoreResult<TargetUrlRequirement>;

    /// Whether no target other than `excluding` manages the same resources
    /// (same fingerprint) as `config`
    fn check_config_availability(
        &self,
        config: ProviderConfig,
        excluding: Option<&TargetId>,
    ) -> StoreResult<ProviderConfigRequirement>;
}

pub trait TargetsWriter: Send + Sync {
    /// Store the target state and dispatch its pending events
    fn write(&self, target: &mut Target) -> StoreResult<()>;
}
