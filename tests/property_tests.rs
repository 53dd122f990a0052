/// Property-based tests using proptest
/// Tests invariants of form decoding and link building for arbitrary input
use chrono::Utc;
use fucsia_leads_api::config::DEFAULT_GREETING;
use fucsia_leads_api::core::contact_link::ContactLinkBuilder;
use fucsia_leads_api::core::models::{LeadForm, LeadGoal, LeadSubmission};
use proptest::prelude::*;
use url::form_urlencoded;

fn encode_form(pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

// Property: submitted values are copied exactly, absent ones become empty
proptest! {
    #[test]
    fn present_fields_are_copied_exactly(
        name in "\\PC*",
        whatsapp in "\\PC*",
        goal in "\\PC*"
    ) {
        let body = encode_form(&[("name", &name), ("whatsapp", &whatsapp), ("goal", &goal)]);
        let form = LeadForm::from_urlencoded(body.as_bytes());
        let lead = LeadSubmission::new(form, String::new(), String::new(), Utc::now());

        prop_assert_eq!(lead.name(), name.as_str());
        prop_assert_eq!(lead.contact_number(), whatsapp.as_str());
        prop_assert_eq!(lead.goal(), goal.as_str());
    }

    #[test]
    fn absent_fields_are_empty(
        include_name in proptest::bool::ANY,
        include_whatsapp in proptest::bool::ANY,
        include_goal in proptest::bool::ANY,
        value in "[a-zA-Z0-9 ]{1,20}"
    ) {
        let mut pairs = Vec::new();
        if include_name { pairs.push(("name", value.as_str())); }
        if include_whatsapp { pairs.push(("whatsapp", value.as_str())); }
        if include_goal { pairs.push(("goal", value.as_str())); }

        let form = LeadForm::from_urlencoded(encode_form(&pairs).as_bytes());

        let expected = |included: bool| if included { value.clone() } else { String::new() };
        prop_assert_eq!(form.name, expected(include_name));
        prop_assert_eq!(form.whatsapp, expected(include_whatsapp));
        prop_assert_eq!(form.goal, expected(include_goal));
    }

    #[test]
    fn form_decoding_never_panics(body in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = LeadForm::from_urlencoded(&body);
    }

    #[test]
    fn goal_resolution_never_panics(goal in "\\PC*") {
        let _ = LeadGoal::from_label(&goal);
    }
}

// Property: the greeting survives encoding, and the link shape is fixed
proptest! {
    #[test]
    fn greeting_round_trips_through_link(number in "[0-9]{10,13}", greeting in "\\PC+") {
        let link = ContactLinkBuilder::new(number.clone(), greeting.clone()).build_contact_link();
        let prefix = format!("https://wa.me/{}?text=", number);

        prop_assert!(link.starts_with(&prefix));
        let encoded = &link[prefix.len()..];
        prop_assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.~%".contains(c)));
        prop_assert_eq!(urlencoding::decode(encoded).unwrap(), greeting);
    }

    #[test]
    fn has_destination_iff_non_empty(number in "\\PC*") {
        let builder = ContactLinkBuilder::new(number.clone(), DEFAULT_GREETING);
        prop_assert_eq!(builder.has_destination(), !number.is_empty());
    }
}

#[test]
fn default_greeting_link_for_known_number() {
    let link = ContactLinkBuilder::new("5511999999999", DEFAULT_GREETING).build_contact_link();
    let prefix = "https://wa.me/5511999999999?text=";
    assert!(link.starts_with(prefix));
    assert_eq!(
        urlencoding::decode(&link[prefix.len()..]).unwrap(),
        DEFAULT_GREETING
    );
}
