use leaddesk_core::{
    Activity, ActivityPatch, ActivityService, ActivityType, Latency, NewActivity,
};

fn seeded_activity(id: &str, timestamp: i64, contact_id: Option<&str>) -> Activity {
    Activity {
        id: id.to_string(),
        kind: ActivityType::Note,
        description: format!("activity {id}"),
        contact_id: contact_id.map(str::to_string),
        deal_id: None,
        timestamp,
    }
}

#[test]
fn create_and_get_roundtrip() {
    let mut service = ActivityService::new();
    let created = service.create(NewActivity {
        kind: ActivityType::Call,
        description: "intro call".to_string(),
        contact_id: Some("1".to_string()),
        deal_id: None,
    });

    assert_eq!(service.get(&created.id).unwrap(), created);
    assert!(created.timestamp > 0);
}

#[test]
fn list_orders_newest_first() {
    let service = ActivityService::seeded(
        vec![
            seeded_activity("t1", 100, None),
            seeded_activity("t3", 300, None),
            seeded_activity("t2", 200, None),
        ],
        Latency::None,
    );

    let listed = service.list();
    let ids: Vec<_> = listed.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["t3", "t2", "t1"]);
}

#[test]
fn get_recent_truncates_the_descending_order() {
    let service = ActivityService::seeded(
        vec![
            seeded_activity("t1", 100, None),
            seeded_activity("t2", 200, None),
            seeded_activity("t3", 300, None),
        ],
        Latency::None,
    );

    let recent = service.get_recent(2);
    let ids: Vec<_> = recent.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["t3", "t2"]);
}

#[test]
fn get_by_contact_and_deal_filter_and_sort() {
    let mut with_deal = seeded_activity("d1", 150, Some("c-1"));
    with_deal.deal_id = Some("deal-1".to_string());
    let service = ActivityService::seeded(
        vec![
            seeded_activity("a1", 100, Some("c-1")),
            seeded_activity("a2", 300, Some("c-1")),
            seeded_activity("b1", 200, Some("c-2")),
            with_deal,
        ],
        Latency::None,
    );

    let for_contact = service.get_by_contact("c-1");
    let ids: Vec<_> = for_contact.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a2", "d1", "a1"]);

    let for_deal = service.get_by_deal("deal-1");
    assert_eq!(for_deal.len(), 1);
    assert_eq!(for_deal[0].id, "d1");
}

#[test]
fn update_cannot_change_the_creation_timestamp() {
    let mut service = ActivityService::new();
    let created = service.create(NewActivity {
        kind: ActivityType::Email,
        description: "sent pricing".to_string(),
        contact_id: None,
        deal_id: None,
    });

    let patch = ActivityPatch {
        kind: Some(ActivityType::Task),
        description: Some("follow up on pricing".to_string()),
        ..ActivityPatch::default()
    };
    let updated = service.update(&created.id, &patch).unwrap();

    assert_eq!(updated.kind, ActivityType::Task);
    assert_eq!(updated.description, "follow up on pricing");
    assert_eq!(updated.timestamp, created.timestamp);
}

#[test]
fn delete_then_get_fails_with_not_found() {
    let mut service = ActivityService::new();
    let created = service.create(NewActivity {
        kind: ActivityType::Note,
        description: "note".to_string(),
        contact_id: None,
        deal_id: None,
    });

    service.delete(&created.id).unwrap();
    assert!(service.get(&created.id).is_err());
}
