//! Property tests for per-app deployment numbering.

use proptest::prelude::*;

use shipyard::domain::entities::{App, Deployment};
use shipyard::domain::value_objects::{
    AppName, Environment, EnvironmentConfig, EnvironmentConfigRequirement, SourceData, UserId,
};

#[derive(Debug, Clone)]
enum Op {
    Queue(Environment),
    /// Promote the n-th deployment created so far (modulo their count)
    Promote(usize),
    Redeploy(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop_oneof![Just(Environment::Production), Just(Environment::Staging)].prop_map(Op::Queue),
        any::<usize>().prop_map(Op::Promote),
        any::<usize>().prop_map(Op::Redeploy),
    ]
}

fn app() -> App {
    let requirement =
        || EnvironmentConfigRequirement::new(EnvironmentConfig::new("t1"), true, true);
    App::new(
        AppName::parse("my-app").unwrap(),
        requirement(),
        requirement(),
        UserId::from("uid"),
    )
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: successful allocations are numbered 1, 2, 3, ... without gaps,
    /// and rejected promotions do not consume a number.
    #[test]
    fn property_numbers_are_consecutive(ops in proptest::collection::vec(op(), 1..40)) {
        let mut app = app();
        let mut created: Vec<Deployment> = Vec::new();
        let by = UserId::from("uid");

        for op in ops {
            let result = match op {
                Op::Queue(env) => app.new_deployment(SourceData::Raw("x".into()), env, by.clone()),
                Op::Promote(i) if !created.is_empty() => {
                    let source = created[i % created.len()].clone();
                    let result = app.promote(&source, by.clone());
                    prop_assert_eq!(
                        result.is_err(),
                        source.config().environment() == Environment::Production
                    );
                    result
                }
                Op::Redeploy(i) if !created.is_empty() => {
                    let source = created[i % created.len()].clone();
                    app.redeploy(&source, by.clone())
                }
                _ => continue,
            };

            if let Ok(deployment) = result {
                created.push(deployment);
            }
        }

        let numbers: Vec<u32> = created
            .iter()
            .map(|d| d.id().deployment_number().value())
            .collect();
        let expected: Vec<u32> = (1..=created.len() as u32).collect();
        prop_assert_eq!(numbers, expected);
        prop_assert_eq!(app.latest_deployment_number().value(), created.len() as u32);
    }

    /// PROPERTY: promotions and redeploys keep the source payload.
    #[test]
    fn property_payload_is_cloned(payload in "[a-z0-9 :{}]{0,32}") {
        let mut app = app();
        let by = UserId::from("uid");
        let staging = app
            .new_deployment(SourceData::Raw(payload.clone()), Environment::Staging, by.clone())
            .unwrap();

        let promoted = app.promote(&staging, by.clone()).unwrap();
        let redeployed = app.redeploy(&promoted, by).unwrap();

        prop_assert_eq!(promoted.source(), &SourceData::Raw(payload.clone()));
        prop_assert_eq!(redeployed.source(), &SourceData::Raw(payload));
        prop_assert_eq!(redeployed.config().environment(), Environment::Production);
    }
}
