use leaddesk_core::{
    DealPatch, DealService, DealStage, KanbanController, NewDeal, RepoError, StageBoard,
};

fn new_deal(title: &str, value: f64, stage: Option<DealStage>) -> NewDeal {
    NewDeal {
        title: title.to_string(),
        value,
        contact_id: Some("1".to_string()),
        probability: 50,
        expected_close: None,
        stage,
    }
}

#[test]
fn create_defaults_stage_to_lead() {
    let mut service = DealService::new();
    let created = service.create(new_deal("Acme Deal", 1000.0, None));
    assert_eq!(created.stage, DealStage::Lead);
}

#[test]
fn create_and_get_roundtrip() {
    let mut service = DealService::new();
    let created = service.create(new_deal("Acme Deal", 1000.0, Some(DealStage::Qualified)));
    assert_eq!(service.get(&created.id).unwrap(), created);
}

#[test]
fn update_stage_moves_deal_between_stage_queries() {
    let mut service = DealService::new();
    let created = service.create(new_deal("Acme Deal", 1000.0, None));

    service.update_stage(&created.id, DealStage::Won).unwrap();

    let won: Vec<_> = service.get_by_stage(DealStage::Won);
    assert!(won.iter().any(|deal| deal.id == created.id));
    assert!(service
        .get_by_stage(DealStage::Lead)
        .iter()
        .all(|deal| deal.id != created.id));
}

#[test]
fn update_stage_on_missing_deal_fails_with_not_found() {
    let mut service = DealService::new();
    assert!(matches!(
        service.update_stage("missing", DealStage::Won).unwrap_err(),
        RepoError::NotFound { id, .. } if id == "missing"
    ));
}

#[test]
fn update_merges_patch_and_keeps_unpatched_fields() {
    let mut service = DealService::new();
    let created = service.create(new_deal("Acme Deal", 1000.0, None));

    let patch = DealPatch {
        value: Some(2500.0),
        contact_id: Some(None),
        ..DealPatch::default()
    };
    let updated = service.update(&created.id, &patch).unwrap();

    assert_eq!(updated.value, 2500.0);
    assert_eq!(updated.contact_id, None);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.stage, created.stage);
    assert_eq!(updated.probability, created.probability);
}

#[test]
fn delete_then_get_fails_with_not_found() {
    let mut service = DealService::new();
    let created = service.create(new_deal("Acme Deal", 1000.0, None));

    let removed = service.delete(&created.id).unwrap();
    assert_eq!(removed.id, created.id);
    assert!(service.get(&created.id).is_err());
}

#[test]
fn get_by_contact_returns_only_linked_deals() {
    let mut service = DealService::new();
    let linked = service.create(new_deal("Linked", 100.0, None));
    let mut other = new_deal("Other", 200.0, None);
    other.contact_id = Some("2".to_string());
    service.create(other);

    let for_contact = service.get_by_contact("1");
    assert_eq!(for_contact.len(), 1);
    assert_eq!(for_contact[0].id, linked.id);
}

#[test]
fn board_partition_covers_every_deal_exactly_once() {
    let mut service = DealService::new();
    for (title, stage) in [
        ("a", DealStage::Lead),
        ("b", DealStage::Lead),
        ("c", DealStage::Proposal),
        ("d", DealStage::Won),
        ("e", DealStage::Lost),
    ] {
        service.create(new_deal(title, 100.0, Some(stage)));
    }

    let deals = service.list();
    let board = StageBoard::group(&deals);

    assert_eq!(board.total(), deals.len());
    for deal in &deals {
        let occurrences: usize = board
            .columns()
            .iter()
            .map(|(_, bucket)| bucket.iter().filter(|d| d.id == deal.id).count())
            .sum();
        assert_eq!(occurrences, 1, "deal {} must appear exactly once", deal.id);
    }
    assert!(board.column(DealStage::Negotiation).is_empty());
}

#[test]
fn drag_and_drop_commits_a_stage_transition() {
    let mut service = DealService::new();
    let created = service.create(new_deal("Acme Deal", 1000.0, None));

    let mut controller = KanbanController::new();
    controller.drag_start(&created);
    let moved = controller
        .drop_onto(DealStage::Negotiation, &mut service)
        .unwrap()
        .expect("cross-stage drop should commit");

    assert_eq!(moved.stage, DealStage::Negotiation);
    assert_eq!(
        service.get(&created.id).unwrap().stage,
        DealStage::Negotiation
    );
    assert!(controller.drag_source().is_none());
}

#[test]
fn drop_on_current_stage_does_not_touch_the_service() {
    let mut service = DealService::new();
    let created = service.create(new_deal("Acme Deal", 1000.0, None));

    let mut controller = KanbanController::new();
    controller.drag_start(&created);
    let outcome = controller.drop_onto(DealStage::Lead, &mut service).unwrap();

    assert!(outcome.is_none());
    assert_eq!(service.get(&created.id).unwrap().stage, DealStage::Lead);
}

#[test]
fn failed_drop_commit_still_clears_the_drag_source() {
    let mut service = DealService::new();
    let created = service.create(new_deal("Acme Deal", 1000.0, None));

    let mut controller = KanbanController::new();
    controller.drag_start(&created);
    service.delete(&created.id).unwrap();

    let err = controller
        .drop_onto(DealStage::Won, &mut service)
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound { .. }));
    assert!(controller.drag_source().is_none());
}
