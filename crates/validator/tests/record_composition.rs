//! Integration tests for records built from typed member fields.

use std::collections::{BTreeMap, HashMap, VecDeque};

use pretty_assertions::assert_eq;
use rstest::rstest;
use sift_validator::foundation::codes;
use sift_validator::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

// ============================================================================
// FIXTURES
// ============================================================================

#[derive(Debug, Clone)]
struct Address {
    street: String,
    zip: String,
}

#[derive(Debug, Clone)]
struct Profile {
    email: String,
    username: String,
    age: u8,
    terms: bool,
    website: Option<String>,
    tags: Vec<String>,
    limits: HashMap<String, u32>,
    address: Address,
}

sift_validator::record!(Address, Profile);

fn valid_profile() -> Profile {
    Profile {
        email: "aadi@example.com".into(),
        username: "aadi23".into(),
        age: 30,
        terms: true,
        website: None,
        tags: vec!["rust".into()],
        limits: HashMap::from([("cpu".into(), 2)]),
        address: Address {
            street: "Main St".into(),
            zip: "12345".into(),
        },
    }
}

fn address_fields(address: &mut Address) -> Vec<Box<dyn Evaluate + '_>> {
    vec![
        string(&mut address.street).named("street").min(3).boxed(),
        string(&mut address.zip)
            .named("zip")
            .numeric()
            .length(5)
            .boxed(),
    ]
}

fn profile_fields(profile: &mut Profile) -> Vec<Box<dyn Evaluate + '_>> {
    vec![
        string(&mut profile.email)
            .named("email")
            .trim()
            .to_lowercase()
            .email()
            .boxed(),
        string(&mut profile.username)
            .named("username")
            .min(3)
            .alpha_numeric()
            .boxed(),
        number(&mut profile.age).named("age").min(18).max(120).boxed(),
        boolean(&mut profile.terms).named("terms").is(true).boxed(),
        Field::from_option(profile.website.as_mut())
            .named("website")
            .optional()
            .url()
            .boxed(),
        sequence(&mut profile.tags).named("tags").min(1).max(5).boxed(),
        mapping(&mut profile.limits).named("limits").max(3).boxed(),
        record(&mut profile.address)
            .named("address")
            .fields(address_fields)
            .boxed(),
    ]
}

fn field_code_pairs(errors: &[ValidationError]) -> Vec<(String, String)> {
    errors
        .iter()
        .map(|e| (e.field.to_string(), e.code.to_string()))
        .collect()
}

// ============================================================================
// COMPOSITION
// ============================================================================

#[test]
fn valid_profile_has_no_errors() {
    init_tracing();
    let mut profile = valid_profile();
    let errors = record(&mut profile)
        .named("profile")
        .fields(profile_fields)
        .parse();
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn every_member_failure_is_reported_in_order() {
    init_tracing();
    let mut profile = Profile {
        email: "not-an-email".into(),
        username: "aadi@23".into(),
        age: 12,
        terms: false,
        website: Some("ftp://example.com".into()),
        tags: Vec::new(),
        limits: HashMap::from([
            ("a".into(), 1),
            ("b".into(), 2),
            ("c".into(), 3),
            ("d".into(), 4),
        ]),
        address: Address {
            street: "St".into(),
            zip: "12a".into(),
        },
    };

    let errors = record(&mut profile)
        .named("profile")
        .fields(profile_fields)
        .parse();

    assert_eq!(
        field_code_pairs(&errors),
        [
            ("email", codes::EMAIL),
            ("username", codes::ALPHA_NUMERIC),
            ("age", codes::MIN),
            ("terms", codes::IS),
            ("website", codes::URL),
            ("tags", codes::MIN),
            ("limits", codes::MAX),
            ("street", codes::MIN),
            ("zip", codes::NUMERIC),
            ("zip", codes::LENGTH),
        ]
        .map(|(f, c)| (f.to_owned(), c.to_owned()))
        .to_vec()
    );
}

#[test]
fn transforms_are_visible_after_parse() {
    let mut profile = valid_profile();
    profile.email = "  Aadi@Example.COM  ".into();

    let errors = record(&mut profile).fields(profile_fields).parse();

    assert!(errors.is_empty());
    assert_eq!(profile.email, "aadi@example.com");
}

#[test]
fn record_abort_early_stops_at_first_failing_member() {
    let mut profile = valid_profile();
    profile.username = "x".into();
    profile.age = 5;

    let errors = record(&mut profile)
        .abort_early()
        .fields(profile_fields)
        .parse();

    assert_eq!(field_code_pairs(&errors), [("username".to_owned(), codes::MIN.to_owned())]);
}

#[test]
fn member_abort_early_only_truncates_that_member() {
    let mut username = String::from("@");
    let mut age = 1_u8;

    let errors = evaluate_all([
        string(&mut username)
            .named("username")
            .abort_early()
            .min(3)
            .alpha_numeric()
            .boxed(),
        number(&mut age).named("age").min(18).boxed(),
    ]);

    assert_eq!(
        field_code_pairs(&errors),
        [
            ("username".to_owned(), codes::MIN.to_owned()),
            ("age".to_owned(), codes::MIN.to_owned()),
        ]
    );
}

#[test]
fn record_refinement_runs_after_members() {
    let mut profile = valid_profile();
    profile.age = 17;
    profile.terms = false;

    let errors = record(&mut profile)
        .named("profile")
        .fields(|p| vec![number(&mut p.age).named("age").min(18).boxed()])
        .refine_with(
            |p: &Profile| {
                if p.terms {
                    Ok(())
                } else {
                    Err(format!("{} must accept the terms", p.username))
                }
            },
            RefinementData::new("terms", "terms-not-accepted"),
        )
        .parse();

    assert_eq!(
        field_code_pairs(&errors),
        [
            ("age".to_owned(), codes::MIN.to_owned()),
            ("terms".to_owned(), "terms-not-accepted".to_owned()),
        ]
    );
    assert_eq!(errors[1].message, "aadi23 must accept the terms");
}

#[test]
fn multiple_fields_calls_keep_registration_order() {
    let mut address = Address {
        street: String::new(),
        zip: String::new(),
    };

    let errors = record(&mut address)
        .fields(|a| vec![string(&mut a.zip).named("zip").min(1).boxed()])
        .fields(|a| vec![string(&mut a.street).named("street").min(1).boxed()])
        .parse();

    let fields: Vec<_> = errors.iter().map(|e| e.field.as_ref()).collect();
    assert_eq!(fields, ["zip", "street"]);
}

#[test]
fn deeply_nested_records() {
    #[derive(Debug)]
    struct Company {
        name: String,
        headquarters: Office,
    }

    #[derive(Debug)]
    struct Office {
        address: Address,
    }

    sift_validator::record!(Company, Office);

    let mut company = Company {
        name: "Acme".into(),
        headquarters: Office {
            address: Address {
                street: "Elm".into(),
                zip: "1".into(),
            },
        },
    };

    let errors = record(&mut company)
        .named("company")
        .fields(|c| {
            vec![
                string(&mut c.name).named("name").min(2).boxed(),
                record(&mut c.headquarters)
                    .named("headquarters")
                    .fields(|o| {
                        vec![
                            record(&mut o.address)
                                .named("address")
                                .fields(address_fields)
                                .boxed(),
                        ]
                    })
                    .boxed(),
            ]
        })
        .parse();

    assert_eq!(field_code_pairs(&errors), [("zip".to_owned(), codes::LENGTH.to_owned())]);
}

// ============================================================================
// PRESENCE
// ============================================================================

#[test]
fn absent_required_member_reports_required() {
    let mut website: Option<String> = None;
    let errors = Field::from_option(website.as_mut())
        .named("website")
        .url()
        .parse();

    assert_eq!(errors, vec![ValidationError::required("website", None)]);
    assert_eq!(errors[0].message, "website is required");
}

#[test]
fn required_error_override() {
    let errors = Field::<String>::absent()
        .named("email")
        .required_error("please tell us your email")
        .email()
        .parse();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "please tell us your email");
}

#[test]
fn absent_optional_member_passes() {
    let mut profile = valid_profile();
    profile.website = None;
    let errors = record(&mut profile).fields(profile_fields).parse();
    assert!(errors.is_empty());
}

#[test]
fn field_options_from_config() {
    let options: FieldOptions =
        serde_json::from_str(r#"{ "optional": false, "required_error": "id missing" }"#).unwrap();
    let errors = Field::<u64>::absent().with_options(options).parse();
    assert_eq!(errors[0].message, "id missing");
}

// ============================================================================
// KINDS
// ============================================================================

#[rstest]
#[case(vec![], 1)]
#[case(vec![1], 0)]
#[case(vec![1, 2, 3], 1)]
fn sequence_bounds(#[case] items: Vec<i32>, #[case] expected: usize) {
    let mut items = items;
    assert_eq!(sequence(&mut items).min(1).max(2).parse().len(), expected);
}

#[test]
fn vec_deque_and_btree_map_share_checks() {
    let mut queue = VecDeque::from([1, 2, 3]);
    let mut scores = BTreeMap::from([("a", 1), ("b", 2)]);

    let errors = evaluate_all([
        sequence(&mut queue).named("queue").length(2).boxed(),
        mapping(&mut scores).named("scores").min(3).boxed(),
    ]);

    assert_eq!(
        field_code_pairs(&errors),
        [
            ("queue".to_owned(), codes::LENGTH.to_owned()),
            ("scores".to_owned(), codes::MIN.to_owned()),
        ]
    );
    assert_eq!(errors[1].message, "scores should have at least 3 entries");
}

#[test]
fn custom_messages_replace_defaults() {
    let mut age = 3_i32;
    let mut role = String::from("root");

    let errors = evaluate_all([
        number(&mut age)
            .named("age")
            .min(5)
            .with_message("too young")
            .boxed(),
        string(&mut role)
            .named("role")
            .is_one_of(["admin", "member"])
            .with_message("unknown role")
            .boxed(),
    ]);

    let messages: Vec<_> = errors.iter().map(|e| e.message.as_ref()).collect();
    assert_eq!(messages, ["too young", "unknown role"]);
}

#[test]
fn validate_returns_collected_errors() {
    let mut profile = valid_profile();
    profile.age = 200;

    let result = record(&mut profile).fields(profile_fields).validate();
    let errors = result.unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.for_field("age").count(), 1);
    assert_eq!(errors.to_string(), "validation failed with 1 error(s)");
}

#[test]
fn parse_twice_reapplies_transforms() {
    let mut counter = 1_u32;
    let mut field = number(&mut counter).transform(|n| n * 2).max(3);

    assert!(field.parse().is_empty());
    assert_eq!(field.parse().len(), 1);
    drop(field);
    assert_eq!(counter, 4);
}

#[test]
fn alpha_and_min_members_report_in_registration_order() {
    struct Person {
        name: String,
        age: u32,
    }
    sift_validator::record!(Person);

    let mut person = Person {
        name: "aadi23".into(),
        age: 12,
    };
    let errors = record(&mut person)
        .fields(|p| {
            vec![
                string(&mut p.name).named("name").alpha().boxed(),
                number(&mut p.age).named("age").min(18).boxed(),
            ]
        })
        .parse();

    assert_eq!(
        field_code_pairs(&errors),
        [
            ("name".to_owned(), codes::ALPHA.to_owned()),
            ("age".to_owned(), codes::MIN.to_owned()),
        ]
    );
}
