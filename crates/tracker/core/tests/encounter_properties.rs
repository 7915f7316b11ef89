use tracker_core::{
    ActorKind, Initiative, MoveState, RowId, RowUpdate, SavedActorTemplate, Speed, TemplateUpdate,
    Tracker, reconcile,
};

fn tracker_with(names: &[&str]) -> Tracker {
    let mut tracker = Tracker::new();
    for name in names {
        let id = tracker.add_actor();
        tracker.rename_actor_by_id(id, name).unwrap();
    }
    tracker
}

fn row_id(tracker: &Tracker, name: &str) -> RowId {
    tracker
        .rows()
        .iter()
        .find(|row| row.actor_name == name)
        .map(|row| row.id)
        .unwrap()
}

#[test]
fn row_count_matches_distinct_active_names() {
    let tracker = tracker_with(&["Alice", "", "Bob", " Alice", "  ", "Cara"]);
    assert_eq!(tracker.roster().len(), 6);
    assert_eq!(tracker.rows().len(), 3);
}

#[test]
fn reconcile_is_idempotent_over_tracker_rows() {
    let tracker = tracker_with(&["Alice", "Bob", "Bob", ""]);
    let mut next = 1_000;
    let mut mint = || {
        next += 1;
        RowId(next)
    };

    let once = reconcile(tracker.roster(), tracker.rows().to_vec(), &mut mint);
    let twice = reconcile(tracker.roster(), once.clone(), &mut mint);

    assert_eq!(once, tracker.rows());
    assert_eq!(once, twice);
}

#[test]
fn rename_keeps_row_id_and_planning_fields() {
    let mut tracker = tracker_with(&["Alice"]);
    let id = row_id(&tracker, "Alice");
    tracker
        .update_row(id, RowUpdate::Action("Stab".into()))
        .unwrap();
    tracker
        .update_row(id, RowUpdate::Target("Goblin".into()))
        .unwrap();
    tracker
        .update_row(id, RowUpdate::Initiative(Initiative::try_from(2).unwrap()))
        .unwrap();

    tracker.rename_actor("Alice", "Alicia").unwrap();

    let row = tracker.row(id).unwrap();
    assert_eq!(row.actor_name, "Alicia");
    assert_eq!(row.action, "Stab");
    assert_eq!(row.target, "Goblin");
    assert_eq!(row.speed, Speed::Normal);
    assert_eq!(row.move_state, MoveState::Standstill);
    assert_eq!(row.initiative.value(), 2);
}

#[test]
fn sort_orders_speed_move_state_initiative_and_kind() {
    let mut tracker = tracker_with(&["A", "B", "C"]);
    tracker.set_actor_type("B", ActorKind::Npc).unwrap();

    let b = row_id(&tracker, "B");
    tracker.update_row_field(b, "speed", "fast").unwrap();
    tracker.update_row_field(b, "moveState", "moving").unwrap();
    tracker.update_row_field(b, "initiative", "1").unwrap();
    let c = row_id(&tracker, "C");
    tracker.update_row_field(c, "speed", "fast").unwrap();
    tracker.update_row_field(c, "initiative", "1").unwrap();

    tracker.sort_rows();

    let order: Vec<&str> = tracker
        .rows()
        .iter()
        .map(|row| row.actor_name.as_str())
        .collect();
    assert_eq!(order, vec!["C", "B", "A"]);
}

#[test]
fn reconcile_after_sort_keeps_sorted_order_and_appends() {
    let mut tracker = tracker_with(&["Slow", "Fast"]);
    let fast = row_id(&tracker, "Fast");
    tracker.update_row(fast, RowUpdate::Speed(Speed::Fast)).unwrap();
    tracker.sort_rows();

    let late = tracker.add_actor();
    tracker.rename_actor_by_id(late, "Late").unwrap();

    let order: Vec<&str> = tracker
        .rows()
        .iter()
        .map(|row| row.actor_name.as_str())
        .collect();
    assert_eq!(order, vec!["Fast", "Slow", "Late"]);
}

#[test]
fn unique_template_gates_activation_on_live_instance() {
    let mut tracker = Tracker::new();
    tracker.add_template();
    tracker
        .update_template(0, TemplateUpdate::Name("Boss".into()))
        .unwrap();
    tracker
        .update_template(0, TemplateUpdate::Unique(true))
        .unwrap();
    tracker
        .update_template(0, TemplateUpdate::Kind(ActorKind::Npc))
        .unwrap();

    let offered = |tracker: &Tracker| {
        tracker
            .activatable_templates()
            .iter()
            .any(|template| template.name == "Boss")
    };

    assert!(offered(&tracker));
    let boss: SavedActorTemplate = tracker.templates().get(0).unwrap().clone();
    tracker.materialize_template(&boss).unwrap();
    assert!(!offered(&tracker));

    tracker.remove_actor("Boss").unwrap();
    assert!(offered(&tracker));
}
