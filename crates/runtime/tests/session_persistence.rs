use std::sync::Arc;

use tempfile::TempDir;
use tracker_core::{ActorKind, Hostility, SavedActorTemplate, TemplateUpdate};
use tracker_runtime::repository::Result as RepoResult;
use tracker_runtime::{
    FileGateway, InMemoryGateway, PersistenceGateway, RepositoryError, SAVED_ACTORS_KEY, Session,
    TemplateStore,
};

/// Gateway whose writes always fail.
struct FailingGateway;

impl PersistenceGateway for FailingGateway {
    fn load(&self, _key: &str) -> RepoResult<Option<String>> {
        Ok(None)
    }

    fn save(&self, _key: &str, _value: &str) -> RepoResult<()> {
        Err(RepositoryError::LockPoisoned)
    }

    fn clear(&self, _key: &str) -> RepoResult<()> {
        Err(RepositoryError::LockPoisoned)
    }
}

fn named_template(session: &mut Session<impl PersistenceGateway>, name: &str) -> usize {
    session.add_template();
    let index = session.tracker().templates().len() - 1;
    session
        .update_template(index, TemplateUpdate::Name(name.into()))
        .unwrap();
    index
}

#[test]
fn templates_survive_reopening_a_file_store() {
    let temp = TempDir::new().unwrap();

    let mut session = Session::open(FileGateway::new(temp.path()).unwrap());
    let boss = named_template(&mut session, "Boss");
    session
        .update_template_field(boss, "hostility", "Hostile")
        .unwrap();
    session.update_template_field(boss, "unique", "true").unwrap();
    let mentor = named_template(&mut session, "Mentor");
    session
        .update_template(mentor, TemplateUpdate::Kind(ActorKind::Player))
        .unwrap();
    let saved = session.tracker().templates().to_templates();
    drop(session);

    let reopened = Session::open(FileGateway::new(temp.path()).unwrap());
    assert_eq!(reopened.tracker().templates().to_templates(), saved);
    assert_eq!(
        saved[0],
        SavedActorTemplate::new("Boss", ActorKind::Npc)
            .with_hostility(Hostility::Hostile)
            .with_unique(true)
    );
}

#[test]
fn removing_the_last_template_clears_the_key() {
    let gateway = Arc::new(InMemoryGateway::new());
    let mut session = Session::open(Arc::clone(&gateway));

    named_template(&mut session, "Goblin");
    assert!(gateway.exists(SAVED_ACTORS_KEY));

    session.remove_template(0).unwrap();
    assert!(!gateway.exists(SAVED_ACTORS_KEY));

    let reopened = Session::open(Arc::clone(&gateway));
    assert!(reopened.tracker().templates().is_empty());
}

#[test]
fn every_mutation_is_saved_in_order() {
    let gateway = Arc::new(InMemoryGateway::new());
    let mut session = Session::open(Arc::clone(&gateway));

    session.add_template();
    let stored = TemplateStore::new(Arc::clone(&gateway)).load();
    assert_eq!(stored, vec![SavedActorTemplate::default()]);

    session.update_template_field(0, "actor", "Ogre").unwrap();
    session.update_template_field(0, "actor", "Ogre Mage").unwrap();
    let stored = TemplateStore::new(Arc::clone(&gateway)).load();
    assert_eq!(stored[0].name, "Ogre Mage");
}

#[test]
fn failed_mutations_do_not_touch_the_store() {
    let gateway = Arc::new(InMemoryGateway::new());
    let mut session = Session::open(Arc::clone(&gateway));

    assert!(session.update_template_field(0, "actor", "Ghost").is_err());
    assert!(session.remove_template(0).is_err());
    assert!(!gateway.exists(SAVED_ACTORS_KEY));
}

#[test]
fn malformed_store_opens_with_empty_registry() {
    let gateway = InMemoryGateway::with_value(SAVED_ACTORS_KEY, "{ definitely not a list");
    let session = Session::open(gateway);
    assert!(session.tracker().templates().is_empty());
}

#[test]
fn unique_template_round_trip_through_the_encounter() {
    let gateway = Arc::new(InMemoryGateway::new());
    let mut session = Session::open(Arc::clone(&gateway));
    let boss = named_template(&mut session, "Boss");
    session
        .update_template(boss, TemplateUpdate::Unique(true))
        .unwrap();

    session.materialize_template_at(boss).unwrap();
    assert!(session.activatable_templates().is_empty());

    session
        .update_template(boss, TemplateUpdate::Name("Dread Boss".into()))
        .unwrap();
    assert_eq!(session.rows()[0].actor_name, "Dread Boss");
    assert!(
        session
            .tracker()
            .roster()
            .find_by_name("Dread Boss")
            .is_some()
    );
    let stored = TemplateStore::new(Arc::clone(&gateway)).load();
    assert_eq!(stored[0].name, "Dread Boss");

    session.remove_actor("Dread Boss").unwrap();
    let offered: Vec<&str> = session
        .activatable_templates()
        .into_iter()
        .map(|template| template.name.as_str())
        .collect();
    assert_eq!(offered, vec!["Dread Boss"]);
}

#[test]
fn save_failures_leave_the_registry_authoritative() {
    let mut session = Session::open(FailingGateway);

    session.add_template();
    session
        .update_template(0, TemplateUpdate::Name("Lich".into()))
        .unwrap();
    session
        .update_template_field(0, "hostility", "Hostile")
        .unwrap();
    assert_eq!(
        session.tracker().templates().to_templates(),
        vec![SavedActorTemplate::new("Lich", ActorKind::Npc).with_hostility(Hostility::Hostile)]
    );

    let removed = session.remove_template(0).unwrap();
    assert_eq!(removed.name, "Lich");
    assert!(session.tracker().templates().is_empty());
}

#[test]
fn blank_actor_type_is_set_by_id() {
    let mut session = Session::open(InMemoryGateway::new());
    let id = session.add_actor();

    session.set_actor_type_by_id(id, ActorKind::Npc).unwrap();

    let actor = session.tracker().roster().get(id).unwrap();
    assert_eq!(actor.kind, ActorKind::Npc);
    assert!(session.rows().is_empty());
}
