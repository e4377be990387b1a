use club_core::{Member, MemberStatus, MemberValidationError, NewMember, Plan, RegistrationDate};

#[test]
fn new_member_parse_trims_name_and_types_fields() {
    let draft = NewMember::parse("  Alice ", "Semester", "11/26/2025").unwrap();

    assert_eq!(draft.name, "Alice");
    assert_eq!(draft.plan, Plan::Semester);
    assert_eq!(draft.registration_date.to_string(), "11/26/2025");
}

#[test]
fn new_member_parse_reports_invalid_date() {
    let err = NewMember::parse("Carol", "Year", "02/30/2025").unwrap_err();
    assert_eq!(err, MemberValidationError::InvalidDate("02/30/2025".to_string()));
}

#[test]
fn status_defaults_to_active() {
    assert_eq!(MemberStatus::default(), MemberStatus::Active);
    assert_eq!(MemberStatus::parse("Expired"), Some(MemberStatus::Expired));
    assert_eq!(MemberStatus::parse("active"), None);
}

#[test]
fn member_serialization_uses_storage_spellings() {
    let member = Member {
        id: 7,
        name: "Alice".to_string(),
        plan: Plan::Year,
        status: MemberStatus::Active,
        registration_date: RegistrationDate::parse("4/5/2025").unwrap(),
    };

    let json = serde_json::to_value(&member).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["plan"], "Year");
    assert_eq!(json["status"], "Active");
    assert_eq!(json["registration_date"], "04/05/2025");

    let decoded: Member = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, member);
}

#[test]
fn deserialize_rejects_invalid_registration_date() {
    let value = serde_json::json!({
        "id": 1,
        "name": "Carol",
        "plan": "Year",
        "status": "Active",
        "registration_date": "13/40/2025"
    });

    let err = serde_json::from_value::<Member>(value).unwrap_err();
    assert!(
        err.to_string().contains("13/40/2025"),
        "unexpected error: {err}"
    );
}
