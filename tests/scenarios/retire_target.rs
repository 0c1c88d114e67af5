//! Scenario: Retire a target
//!
//! Journey: An operator brings a target up, uses it, then removes it.
//!
//! Steps:
//! 1. Target created, unavailable while configuring
//! 2. Configuration succeeds, target available
//! 3. Apps on the target block the cleanup request
//! 4. Once apps are gone, cleanup is requested and the target is deleted

use crate::common::*;

use shipyard::application::{
    CleanupTarget, ConfigureTarget, CreateTarget, ReconfigureTarget, RequestTargetCleanup,
};
use shipyard::domain::error::DomainError;
use shipyard::domain::value_objects::DockerConfig;

/// SCENARIO: target from creation to deletion
#[test]
fn scenario_target_lifecycle() {
    let env = TestEnv::new();

    // Step 1
    let id = env
        .bus
        .execute(
            &env.ctx,
            CreateTarget {
                name: "edge".to_string(),
                url: "http://edge.example.com/".to_string(),
                provider: DockerConfig::remote("edge.example.com").into(),
            },
        )
        .unwrap();
    let target = env.target(&id).unwrap();
    assert_eq!(target.url().as_str(), "http://edge.example.com");
    assert_eq!(
        target.check_availability(),
        Err(DomainError::TargetConfigurationInProgress)
    );

    // Step 2
    env.bus
        .execute(
            &env.ctx,
            ConfigureTarget {
                id: id.clone(),
                version: target.current_version(),
                error: None,
            },
        )
        .unwrap();
    assert_eq!(env.target(&id).unwrap().check_availability(), Ok(()));

    // Step 3
    let app = env.create_app("shop", &id, &id);
    let err = env
        .bus
        .execute(&env.ctx, RequestTargetCleanup { id: id.clone() })
        .unwrap_err();
    assert_eq!(err.as_domain(), Some(&DomainError::TargetInUse));

    // Step 4
    env.delete_app(&app);
    env.bus
        .execute(&env.ctx, RequestTargetCleanup { id: id.clone() })
        .unwrap();
    assert_eq!(
        env.target(&id).unwrap().check_availability(),
        Err(DomainError::TargetCleanupRequested)
    );

    env.bus
        .execute(&env.ctx, CleanupTarget { id: id.clone() })
        .unwrap();

    assert!(env.target(&id).is_none());
    assert_eq!(
        env.provider.calls(),
        vec![
            "app shop production Skip",
            "app shop staging Skip",
            "target edge Default",
        ]
    );
    assert_eq!(env.events.names().last(), Some(&"target_deleted"));
}

/// SCENARIO: a target that failed after being ready must be fixed before removal
#[test]
fn scenario_failed_target_needs_attention() {
    let env = TestEnv::new();
    let id = env.ready_target("edge", "http://edge.example.com", "edge.example.com");

    env.bus
        .execute(&env.ctx, ReconfigureTarget { id: id.clone() })
        .unwrap();
    let version = env.target(&id).unwrap().current_version();
    env.bus
        .execute(
            &env.ctx,
            ConfigureTarget {
                id: id.clone(),
                version,
                error: Some("ssh: handshake failed".to_string()),
            },
        )
        .unwrap();

    let target = env.target(&id).unwrap();
    assert_eq!(
        target.cleanup_strategy(false),
        Err(DomainError::TargetConfigurationFailed)
    );
}
