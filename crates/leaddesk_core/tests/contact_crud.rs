use leaddesk_core::{ContactPatch, ContactService, ContactStatus, NewContact, RepoError};

fn new_contact(name: &str, company: &str, tags: &[&str]) -> NewContact {
    NewContact {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "+1 555 0100".to_string(),
        company: company.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        status: ContactStatus::Lead,
    }
}

#[test]
fn create_and_get_roundtrip() {
    let mut service = ContactService::new();

    let created = service.create(new_contact("Ann Lee", "Acme", &["startup"]));
    let loaded = service.get(&created.id).unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.created_at, loaded.last_contact);
}

#[test]
fn created_ids_are_unique() {
    let mut service = ContactService::new();
    let first = service.create(new_contact("Ann Lee", "Acme", &[]));
    let second = service.create(new_contact("Ann Lee", "Acme", &[]));
    assert_ne!(first.id, second.id);
}

#[test]
fn update_merges_patch_and_keeps_unpatched_fields() {
    let mut service = ContactService::new();
    let created = service.create(new_contact("Ann Lee", "Acme", &["startup"]));

    let patch = ContactPatch {
        company: Some("Acme Corp".to_string()),
        status: Some(ContactStatus::Active),
        ..ContactPatch::default()
    };
    let updated = service.update(&created.id, &patch).unwrap();

    assert_eq!(updated.company, "Acme Corp");
    assert_eq!(updated.status, ContactStatus::Active);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.tags, created.tags);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn get_update_delete_missing_id_fail_with_not_found() {
    let mut service = ContactService::new();

    assert!(matches!(
        service.get("missing").unwrap_err(),
        RepoError::NotFound { id, .. } if id == "missing"
    ));
    assert!(service.update("missing", &ContactPatch::default()).is_err());
    assert!(service.delete("missing").is_err());
}

#[test]
fn delete_returns_removed_record_and_second_delete_fails() {
    let mut service = ContactService::new();
    let created = service.create(new_contact("Ann Lee", "Acme", &[]));

    let removed = service.delete(&created.id).unwrap();
    assert_eq!(removed.id, created.id);

    assert!(service.get(&created.id).is_err());
    assert!(service.delete(&created.id).is_err());
}

#[test]
fn search_matches_name_email_and_company_case_insensitively() {
    let mut service = ContactService::new();
    service.create(new_contact("Ann Lee", "Acme", &[]));
    service.create(new_contact("Bob Ray", "Globex", &[]));

    assert_eq!(service.search("ACME").len(), 1);
    assert_eq!(service.search("ann.lee").len(), 1);
    assert_eq!(service.search("ray").len(), 1);
    assert_eq!(service.search("zzz").len(), 0);
    // Empty query matches everything.
    assert_eq!(service.search("").len(), 2);
}

#[test]
fn filter_by_tag_requires_exact_membership() {
    let mut service = ContactService::new();
    let ann = service.create(new_contact("Ann Lee", "Acme", &["startup"]));
    service.create(new_contact("Bob Ray", "Globex", &["enterprise"]));

    let startups = service.filter_by_tag("startup");
    assert_eq!(startups.len(), 1);
    assert_eq!(startups[0].id, ann.id);

    assert!(service.filter_by_tag("fintech").is_empty());
}

#[test]
fn list_returns_defensive_copies_in_insertion_order() {
    let mut service = ContactService::new();
    let first = service.create(new_contact("Ann Lee", "Acme", &[]));
    let second = service.create(new_contact("Bob Ray", "Globex", &[]));

    let mut listed = service.list();
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);

    listed[0].name = "mutated".to_string();
    assert_eq!(service.get(&first.id).unwrap().name, "Ann Lee");
}
