//! Validator tests: the user form rule table under both rule sets.
//!
//! Covers:
//! - every rule in isolation, with its exact message
//! - all failing fields reported together, one message per field
//! - create-only rules (password, username whitespace) skipped for edit
//! - idempotence and ErrorMap serialization

use userdesk::auth::validate::{validate_user_form, ErrorMap, Field, FormRules};
use userdesk::models::user::FormFields;

fn valid_create() -> FormFields {
    FormFields {
        username: "jdoe".to_string(),
        email: "jdoe@example.com".to_string(),
        password: Some("secret1".to_string()),
        full_name: "Jane Doe".to_string(),
        role_id: "1".to_string(),
    }
}

fn valid_edit() -> FormFields {
    FormFields { password: None, ..valid_create() }
}

#[test]
fn test_valid_forms_have_no_errors() {
    assert!(validate_user_form(&valid_create(), FormRules::CREATE).is_empty());
    assert!(validate_user_form(&valid_edit(), FormRules::EDIT).is_empty());
}

fn with(mutate: impl FnOnce(&mut FormFields)) -> FormFields {
    let mut fields = valid_create();
    mutate(&mut fields);
    fields
}

#[test]
fn test_each_rule_reports_its_message() {
    let cases = vec![
        (with(|f| f.username = "  ".into()), Field::Username, "Username is required"),
        (with(|f| f.username = "jd".into()), Field::Username, "Username must be at least 3 characters"),
        (with(|f| f.username = "j doe".into()), Field::Username, "Username cannot contain spaces"),
        (with(|f| f.email = " ".into()), Field::Email, "Email is required"),
        (with(|f| f.email = "jdoe@example".into()), Field::Email, "Email is invalid"),
        (with(|f| f.password = Some("   ".into())), Field::Password, "Password is required"),
        (with(|f| f.password = Some("12345".into())), Field::Password, "Password must be at least 6 characters"),
        (with(|f| f.full_name = "\t".into()), Field::FullName, "Full name is required"),
    ];

    for (fields, field, message) in cases {
        let errors = validate_user_form(&fields, FormRules::CREATE);
        assert_eq!(errors.len(), 1, "{message}: {errors:?}");
        assert_eq!(errors.get(field), Some(message));
    }
}

#[test]
fn test_all_failing_fields_are_reported_together() {
    let fields = FormFields {
        username: "a".into(),
        email: "nope".into(),
        password: Some(String::new()),
        full_name: String::new(),
        role_id: String::new(),
    };
    let errors = validate_user_form(&fields, FormRules::CREATE);

    let reported: Vec<Field> = errors.fields().collect();
    assert_eq!(
        reported,
        vec![Field::Username, Field::Email, Field::Password, Field::FullName]
    );
}

#[test]
fn test_first_violated_rule_wins_within_a_field() {
    let mut fields = valid_create();
    fields.username = "a b".into();
    let errors = validate_user_form(&fields, FormRules::CREATE);
    assert_eq!(errors.get(Field::Username), Some("Username cannot contain spaces"));

    // Too short and containing whitespace: the length rule comes first.
    fields.username = " a ".into();
    let errors = validate_user_form(&fields, FormRules::CREATE);
    assert_eq!(
        errors.get(Field::Username),
        Some("Username must be at least 3 characters")
    );
}

#[test]
fn test_edit_rules_skip_create_only_checks() {
    let mut fields = valid_edit();
    fields.username = "j doe".into();
    assert!(validate_user_form(&fields, FormRules::EDIT).is_empty());

    // A password value is irrelevant to the edit rule set.
    fields.password = Some(String::new());
    assert!(validate_user_form(&fields, FormRules::EDIT).is_empty());
}

#[test]
fn test_create_rules_require_a_password_field() {
    let mut fields = valid_create();
    fields.password = None;
    let errors = validate_user_form(&fields, FormRules::CREATE);
    assert_eq!(errors.get(Field::Password), Some("Password is required"));
}

#[test]
fn test_role_is_not_validated() {
    let mut fields = valid_create();
    fields.role_id = String::new();
    assert!(validate_user_form(&fields, FormRules::CREATE).is_empty());
}

#[test]
fn test_validation_is_idempotent() {
    let fields = FormFields {
        username: "x y".into(),
        email: "bad@".into(),
        password: Some("123".into()),
        full_name: String::new(),
        role_id: String::new(),
    };
    let first = validate_user_form(&fields, FormRules::CREATE);
    let second = validate_user_form(&fields, FormRules::CREATE);
    assert_eq!(first, second);
    assert_ne!(first, ErrorMap::new());
}

#[test]
fn test_error_map_serializes_by_field_name() {
    let mut fields = valid_create();
    fields.full_name = String::new();
    fields.username = String::new();
    let errors = validate_user_form(&fields, FormRules::CREATE);

    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "username": "Username is required",
            "fullName": "Full name is required",
        })
    );
}
