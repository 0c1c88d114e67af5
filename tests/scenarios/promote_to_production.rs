//! Scenario: Ship a release from staging to production
//!
//! Journey: A team registers one target, creates an app bound to it for both
//! environments, deploys to staging, then promotes that build.
//!
//! Success Criteria:
//! - Promoting before any deployment exists is a NotFound
//! - Promoted deployments get the next number and target production
//! - Every state change is dispatched as an event, in order

use crate::common::*;

use shipyard::application::{EndDeployment, Promote, QueueDeployment, StartDeployment};
use shipyard::domain::ports::DeploymentsReader;
use shipyard::domain::value_objects::{
    AppId, DeploymentId, DeploymentNumber, Environment, SourceData,
};
use shipyard::{ErrorKind, ShipyardResult};

fn promote(env: &TestEnv, app: &AppId, number: u32) -> ShipyardResult<DeploymentNumber> {
    env.bus.execute(
        &env.ctx,
        Promote {
            app_id: app.clone(),
            deployment_number: DeploymentNumber::new(number),
        },
    )
}

/// SCENARIO: promote a staging deployment
#[test]
fn scenario_promote_staging_build() {
    let env = TestEnv::new();
    let target = env.ready_target("main", "https://apps.example.com", "docker.example.com");
    let app = env.create_app("blog", &target, &target);

    // Step 1: nothing to promote yet
    let err = promote(&env, &app, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // Step 2: deploy to staging and run it
    let staging = env
        .bus
        .execute(
            &env.ctx,
            QueueDeployment {
                app_id: app.clone(),
                environment: Environment::Staging,
                source: SourceData::Git {
                    branch: "main".to_string(),
                    hash: "f3c1a9e".to_string(),
                },
            },
        )
        .unwrap();
    assert_eq!(staging, DeploymentNumber::new(1));

    env.bus
        .execute(
            &env.ctx,
            StartDeployment {
                app_id: app.clone(),
                deployment_number: staging,
            },
        )
        .unwrap();
    env.bus
        .execute(
            &env.ctx,
            EndDeployment {
                app_id: app.clone(),
                deployment_number: staging,
                error: None,
            },
        )
        .unwrap();

    // Step 3: promote it
    env.events.clear();
    let promoted = promote(&env, &app, 1).unwrap();
    assert_eq!(promoted, DeploymentNumber::new(2));

    let deployment = DeploymentsReader::get_by_id(
        env.store.as_ref(),
        &DeploymentId::new(app.clone(), promoted),
    )
    .unwrap()
    .unwrap();
    assert_eq!(deployment.config().environment(), Environment::Production);
    assert_eq!(
        deployment.source(),
        &SourceData::Git {
            branch: "main".to_string(),
            hash: "f3c1a9e".to_string(),
        }
    );
    assert_eq!(env.events.names(), vec!["deployment_created"]);

    // Step 4: a production deployment cannot be promoted again
    let err = promote(&env, &app, 2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTransition);

    // Numbering carries on where it stopped
    assert_eq!(promote(&env, &app, 1).unwrap(), DeploymentNumber::new(3));
}
