//! App repository ports

use crate::domain::entities::App;
use crate::domain::value_objects::{
    AppId, AppName, EnvironmentConfig, EnvironmentConfigRequirement, TargetId,
};

use super::StoreResult;

pub trait AppsReader: Send + Sync {
    /// Load an app, its deployment numbering restored from stored deployments
    fn get_by_id(&self, id: &AppId) -> StoreResult<Option<App>>;

    /// Load the app registered under `name`
    fn get_by_name(&self, name: &AppName) -> StoreResult<Option<App>>;

    /// Whether `config` points to an existing target and no app other than
    /// `excluding` is named `name`
    fn check_naming_availability(
        &self,
        name: &AppName,
        config: EnvironmentConfig,
        excluding: Option<&AppId>,
    ) -> StoreResult<EnvironmentConfigRequirement>;

    fn has_apps_on_target(&self, target: &TargetId) -> StoreResult<bool>;
}

pub trait AppsWriter: Send + Sync {
    fn write(&self, app: &mut App) -> StoreResult<()>;
}
