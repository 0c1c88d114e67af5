//! Property tests for the target aggregate lifecycle.

use proptest::prelude::*;

use shipyard::domain::entities::{Target, TargetEvent};
use shipyard::domain::error::DomainError;
use shipyard::domain::events::AggregateRoot;
use shipyard::domain::value_objects::{
    DockerConfig, ProviderConfig, ProviderConfigRequirement, TargetUrlRequirement, Url, UserId,
};

#[derive(Debug, Clone)]
enum Op {
    Rename(String),
    HasUrl(String),
    HasProvider(u16),
    Configured(bool),
    Reconfigure,
    RequestCleanup(bool),
    Delete(bool),
}

fn name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn url_string() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_map(|host| format!("http://{}.example.com", host))
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        name().prop_map(Op::Rename),
        url_string().prop_map(Op::HasUrl),
        (1u16..4).prop_map(Op::HasProvider),
        any::<bool>().prop_map(Op::Configured),
        Just(Op::Reconfigure),
        any::<bool>().prop_map(Op::RequestCleanup),
        any::<bool>().prop_map(Op::Delete),
    ]
}

fn uid() -> UserId {
    UserId::from("uid")
}

fn provider(port: u16) -> ProviderConfig {
    DockerConfig::remote("docker.example.com").with_port(port).into()
}

fn target(name: &str, url: &str) -> Target {
    Target::new(
        name,
        TargetUrlRequirement::new(Url::parse(url).unwrap(), true),
        ProviderConfigRequirement::new(provider(1), true),
        uid(),
    )
    .unwrap()
}

/// Apply `op`, returning whether it succeeded
fn apply(target: &mut Target, op: &Op) -> Result<(), DomainError> {
    match op {
        Op::Rename(name) => target.rename(name.clone()),
        Op::HasUrl(url) => {
            target.has_url(TargetUrlRequirement::new(Url::parse(url).unwrap(), true))
        }
        Op::HasProvider(port) => {
            target.has_provider(ProviderConfigRequirement::new(provider(*port), true))
        }
        Op::Configured(ok) => {
            let error = if *ok { None } else { Some("failed") };
            target.configured(target.current_version(), error);
            Ok(())
        }
        Op::Reconfigure => target.reconfigure(),
        Op::RequestCleanup(in_use) => target.request_cleanup(*in_use, uid()),
        Op::Delete(cleaned) => target.delete(*cleaned),
    }
}

fn count(events: &[TargetEvent], name: &str) -> usize {
    events.iter().filter(|e| e.name() == name).count()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: re-applying the value already in effect raises nothing.
    #[test]
    fn property_no_op_mutations_raise_no_event(
        n in name(),
        u in url_string(),
        ok in any::<bool>(),
    ) {
        let mut target = target(&n, &u);
        let error = if ok { None } else { Some("failed") };
        target.configured(target.current_version(), error);
        target.commit();

        target.rename(n.clone()).unwrap();
        target.has_url(TargetUrlRequirement::new(Url::parse(&u).unwrap(), true)).unwrap();
        target.has_provider(ProviderConfigRequirement::new(provider(1), true)).unwrap();
        target.configured(target.current_version(), error);

        prop_assert!(target.pending_events().is_empty());
    }

    /// PROPERTY: changing url and provider together raises a single state change.
    #[test]
    fn property_state_changes_collapse(u in url_string(), port in 2u16..100) {
        let mut target = target("t", "http://initial.example.org");
        target.configured(target.current_version(), None);
        target.commit();

        target.has_url(TargetUrlRequirement::new(Url::parse(&u).unwrap(), true)).unwrap();
        target.has_provider(ProviderConfigRequirement::new(provider(port), true)).unwrap();

        let events = target.pending_events();
        prop_assert_eq!(count(events, "target_state_changed"), 1);
        prop_assert_eq!(events.last().map(TargetEvent::name), Some("target_state_changed"));
    }

    /// PROPERTY: once requested, cleanup blocks every mutation and is raised once.
    #[test]
    fn property_cleanup_request_is_final(ops in proptest::collection::vec(op(), 0..30)) {
        let mut target = target("t", "http://initial.example.org");
        target.configured(target.current_version(), None);
        target.request_cleanup(false, uid()).unwrap();

        for op in &ops {
            let result = apply(&mut target, op);
            match op {
                Op::Rename(_) | Op::HasUrl(_) | Op::HasProvider(_) | Op::Reconfigure => {
                    prop_assert_eq!(result, Err(DomainError::TargetCleanupRequested));
                }
                Op::RequestCleanup(_) => prop_assert_eq!(result, Ok(())),
                _ => {}
            }
        }

        prop_assert!(target.is_cleanup_requested());
        prop_assert_eq!(count(target.pending_events(), "target_cleanup_requested"), 1);
    }

    /// PROPERTY: delete succeeds only after a cleanup request and a cleaned report.
    #[test]
    fn property_deletion_is_gated(ops in proptest::collection::vec(op(), 0..30)) {
        let mut target = target("t", "http://initial.example.org");

        for op in &ops {
            let requested = target.is_cleanup_requested();
            let result = apply(&mut target, op);

            if let Op::Delete(cleaned) = op {
                prop_assert_eq!(result.is_ok(), requested && *cleaned);
                if result.is_err() {
                    prop_assert_eq!(result, Err(DomainError::TargetCleanupNeeded));
                }
            }
        }
    }
}
