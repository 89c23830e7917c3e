//! End-to-end persistence tests: opportunity store over the SQLite snapshot
//! repository, across simulated process restarts.

use std::sync::Arc;

use tempfile::TempDir;
use warpline_core::{OpportunityStore, SnapshotRepository};
use warpline_domain::{OpportunityDraft, Priority, Stage, StoreConfig, TimelineEvent};
use warpline_infra::{DbManager, SqliteSnapshotRepository};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("warpline=debug").try_init();
}

fn open_repository(temp_dir: &TempDir) -> Arc<SqliteSnapshotRepository> {
    let manager = Arc::new(
        DbManager::new(&temp_dir.path().join("warpline.db"), 2).expect("db manager created"),
    );
    manager.run_migrations().expect("migrations run");
    Arc::new(SqliteSnapshotRepository::new(manager))
}

fn sample_draft(name: &str) -> OpportunityDraft {
    OpportunityDraft {
        id: None,
        name: name.to_string(),
        company: "Harbor Apparel".to_string(),
        contact: "Mia Torres".to_string(),
        brand: "Harborline".to_string(),
        stage: Some(Stage::InboundRequest),
        priority: Some(Priority::High),
        next_step: "Review specs".to_string(),
        source: "Referral".to_string(),
        assigned_rep: "Dana".to_string(),
        missing_specs: true,
        has_samples: false,
        has_quote: false,
        has_po: false,
        has_lab_dips: false,
    }
}

#[test]
fn store_state_survives_a_restart() {
    init_tracing();
    let temp_dir = TempDir::new().expect("tempdir created");
    let config = StoreConfig::default();

    let opportunity = {
        let repo = open_repository(&temp_dir);
        let store = OpportunityStore::new(repo, &config).expect("store created");
        let added = store.add_opportunity(sample_draft("Organic Cotton Tees")).expect("add");
        store.move_stage(&added.id, Stage::SamplesSent).expect("move")
    };

    // Reopen everything from the same database file.
    let repo = open_repository(&temp_dir);
    let store = OpportunityStore::new(repo, &config).expect("store restored");

    let restored = store.get(&opportunity.id).expect("record restored");
    assert_eq!(restored, opportunity);
    assert_eq!(restored.stage, Stage::SamplesSent);

    let last = restored.timeline.last().expect("timeline restored");
    assert_eq!(last.event, TimelineEvent::StageChanged);
    assert_eq!(last.description, "Inbound Request → Samples Sent");
}

#[test]
fn every_mutation_rewrites_the_keyed_snapshot() {
    let temp_dir = TempDir::new().expect("tempdir created");
    let repo = open_repository(&temp_dir);
    let store =
        OpportunityStore::new(Arc::clone(&repo) as Arc<dyn SnapshotRepository>, &StoreConfig::default())
            .expect("store created");

    let added = store.add_opportunity(sample_draft("A")).expect("add");
    let after_add = repo.load_snapshot("opportunities-store").expect("load").expect("snapshot");

    store.move_stage(&added.id, Stage::QuoteSent).expect("move");
    let after_move = repo.load_snapshot("opportunities-store").expect("load").expect("snapshot");

    assert_ne!(after_add, after_move);
    assert!(after_move.contains("Quote Sent"));
}

#[test]
fn autosave_off_skips_snapshot_writes() {
    let temp_dir = TempDir::new().expect("tempdir created");
    let repo = open_repository(&temp_dir);
    let config = StoreConfig { autosave: false, ..StoreConfig::default() };
    let store =
        OpportunityStore::new(Arc::clone(&repo) as Arc<dyn SnapshotRepository>, &config)
            .expect("store created");

    store.add_opportunity(sample_draft("A")).expect("add");
    assert!(repo.load_snapshot("opportunities-store").expect("load").is_none());

    store.save().expect("manual save");
    assert!(repo.load_snapshot("opportunities-store").expect("load").is_some());
}
