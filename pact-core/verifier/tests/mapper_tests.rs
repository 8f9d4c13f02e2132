//! 参数映射属性测试

mod common;

use common::{pact_dir, pact_file};
use pact_verifier::*;

fn base() -> VerifierOptions {
    VerifierOptions::new("http://localhost:8080")
}

#[test]
fn test_same_input_same_output() {
    let options = VerifierOptions {
        provider: Some("svc".into()),
        pact_urls: Some(vec![pact_file(), pact_dir()]),
        pact_broker_url: Some("https://broker.example.com".into()),
        provider_version_tags: Some(Tags::from("main")),
        enable_pending: Some(true),
        include_wip_pacts_since: Some("2020-01-01".into()),
        ..base()
    };

    let first = map_options(&options, &default_table()).unwrap();
    let second = map_options(&options, &default_table()).unwrap();
    let third = ArgumentMapper::default().map(&options).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn test_false_flags_emit_nothing() {
    let options = VerifierOptions {
        publish_verification_result: Some(false),
        enable_pending: Some(false),
        ..base()
    };

    let args = map_options(&options, &default_table()).unwrap();
    assert!(!args.iter().any(|a| a == "--publish" || a == "--enable-pending"));
}

#[test]
fn test_tags_scalar_or_list() {
    for (tags, expected) in [
        (Tags::from("prod"), "prod"),
        (Tags::from(vec!["prod"]), "prod"),
        (Tags::from(vec!["prod", "main", "dev"]), "prod,main,dev"),
    ] {
        let options = VerifierOptions {
            consumer_version_tags: Some(tags.clone()),
            provider_version_tags: Some(tags),
            ..base()
        };

        let args = map_options(&options, &default_table()).unwrap();
        let consumer = args.iter().position(|a| a == "--consumer-version-tags").unwrap();
        let provider = args.iter().position(|a| a == "--provider-version-tags").unwrap();
        assert_eq!(args[consumer + 1], expected);
        assert_eq!(args[provider + 1], expected);
    }
}

#[test]
fn test_source_classification() {
    let options = VerifierOptions {
        pact_urls: Some(vec![
            "http://broker/pacts/a".into(),
            "https://broker/pacts/b".into(),
            pact_dir(),
            pact_file(),
        ]),
        ..base()
    };

    let args = map_options(&options, &default_table()).unwrap();
    assert_eq!(
        &args[4..],
        &[
            "--url".to_string(),
            "http://broker/pacts/a".to_string(),
            "--url".to_string(),
            "https://broker/pacts/b".to_string(),
            "--dir".to_string(),
            pact_dir(),
            "--file".to_string(),
            pact_file(),
        ]
    );
}

#[test]
fn test_missing_source_stops_mapping() {
    let options = VerifierOptions {
        pact_urls: Some(vec![pact_file(), "./no/such/pact.json".into()]),
        ..base()
    };

    let err = map_options(&options, &default_table()).unwrap_err();
    assert_eq!(err, MappingError::SourceNotFound("./no/such/pact.json".into()));
}

#[test]
fn test_broker_credentials() {
    let options = VerifierOptions {
        pact_broker_url: Some("https://broker.example.com".into()),
        pact_broker_token: Some("secret".into()),
        provider_states_setup_url: Some("http://localhost:8080/_state".into()),
        ..base()
    };

    let args = map_options(&options, &default_table()).unwrap();
    assert_eq!(
        &args[4..],
        &[
            "--broker-url",
            "https://broker.example.com",
            "--broker-token",
            "secret",
            "--state-change-url",
            "http://localhost:8080/_state",
        ]
    );
}
