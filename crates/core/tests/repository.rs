use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use sarthi_core::model::{PostingDraft, ServiceDraft, SectorPatch};
use sarthi_core::{
    City, DigitalService, Entity, EntityId, GeoRegion, GovJobPost, MemoryStore, Patch,
    Repository, RequiredDocument, SchemePost, Sector, StoreError, Update,
};

fn posting_draft() -> PostingDraft {
    PostingDraft {
        title: "Government Teacher Recruitment 2025".into(),
        start_date: Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap(),
        description: "Recruitment for government school teachers".into(),
        required_documents: vec![
            RequiredDocument::new("Resume")
                .with_kind("Document")
                .with_description("Job application resume"),
            RequiredDocument::new("Photo"),
        ],
        states: vec!["Tamil Nadu".into(), "Kerala".into()],
        cities: vec!["Chennai".into(), "Kochi".into()],
        updates: vec![Update::new(
            Utc.with_ymd_and_hms(2025, 2, 15, 0, 0, 0).unwrap(),
            "Exam schedule released",
        )],
        sector_id: "60d5f7c9b1d5e9b4a8f9a2b6".into(),
    }
}

fn service_draft() -> ServiceDraft {
    ServiceDraft {
        title: "Online Tax Filing Service".into(),
        description: "Digital service for filing taxes online".into(),
        required_documents: vec![RequiredDocument::new("PAN Card").with_kind("ID")],
        updates: vec![],
        states: vec!["All".into()],
        cities: vec![],
    }
}

#[tokio::test]
async fn every_family_roundtrips_through_storage() {
    let store = MemoryStore::new();

    let region = GeoRegion::new(
        "Karnataka",
        vec![City::new("60d5f7c9b1d5e9b4a8f9a2b5", "Bangalore"), City::new("c2", "Mysore")],
    );
    let regions = Repository::<GeoRegion>::open(&store);
    regions.save(&region).await.unwrap();
    assert_eq!(regions.find_by_id(region.id().as_str()).await.unwrap(), Some(region));

    let sector = Sector::new("Healthcare", None);
    let sectors = Repository::<Sector>::open(&store);
    sectors.save(&sector).await.unwrap();
    let found = sectors.find_by_id(sector.id().as_str()).await.unwrap().unwrap();
    assert_eq!(found.description, None);
    assert_eq!(found, sector);

    let scheme = SchemePost::create(posting_draft());
    let schemes = Repository::<SchemePost>::open(&store);
    schemes.save(&scheme).await.unwrap();
    assert_eq!(schemes.find_by_id(scheme.id().as_str()).await.unwrap(), Some(scheme));

    let job = GovJobPost::create(posting_draft());
    let jobs = Repository::<GovJobPost>::open(&store);
    jobs.save(&job).await.unwrap();
    assert_eq!(jobs.find_by_id(job.id().as_str()).await.unwrap(), Some(job));

    let service = DigitalService::create(service_draft());
    let services = Repository::<DigitalService>::open(&store);
    services.save(&service).await.unwrap();
    assert_eq!(services.find_by_id(service.id().as_str()).await.unwrap(), Some(service));
}

#[tokio::test]
async fn families_do_not_share_collections() {
    let store = MemoryStore::new();
    let scheme = Repository::<SchemePost>::open(&store)
        .create(posting_draft())
        .await
        .unwrap();

    let jobs = Repository::<GovJobPost>::open(&store);
    assert!(jobs.find_by_id(scheme.id().as_str()).await.unwrap().is_none());
    assert!(jobs.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_keeps_generated_id() {
    let repo = Repository::<Sector>::open(&MemoryStore::new());
    let sector = Sector::new("Education", Some("Schools and scholarships".into()));
    let id = sector.id().clone();

    repo.save(&sector).await.unwrap();
    repo.save(&sector).await.unwrap();

    let found = repo.find_by_id(id.as_str()).await.unwrap().unwrap();
    assert_eq!(found.id(), &id);
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn save_replaces_instead_of_merging() {
    let repo = Repository::<SchemePost>::open(&MemoryStore::new());
    let mut post = SchemePost::create(posting_draft());
    repo.save(&post).await.unwrap();

    post.updates = vec![Update::new(
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        "Deadline extended",
    )];
    post.required_documents.clear();
    repo.save(&post).await.unwrap();

    let found = repo.find_by_id(post.id().as_str()).await.unwrap().unwrap();
    assert_eq!(found.updates, post.updates);
    assert!(found.required_documents.is_empty());
}

#[tokio::test]
async fn delete_existing_and_missing() {
    let repo = Repository::<DigitalService>::open(&MemoryStore::new());
    let service = repo.create(service_draft()).await.unwrap();
    let id = service.id().as_str();

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.delete(id).await.unwrap());
    assert!(!repo.delete(EntityId::generate().as_str()).await.unwrap());
}

#[tokio::test]
async fn find_all_matches_saved_minus_deleted() {
    let repo = Repository::<Sector>::open(&MemoryStore::new());
    let mut expected = HashSet::new();
    for name in ["Education", "Healthcare", "Agriculture", "Transport"] {
        let sector = repo
            .create(sarthi_core::model::SectorDraft {
                name: name.into(),
                description: None,
            })
            .await
            .unwrap();
        expected.insert(sector.id().clone());
    }
    let removed = expected.iter().next().cloned().unwrap();
    assert!(repo.delete(removed.as_str()).await.unwrap());
    expected.remove(&removed);

    let listed: HashSet<EntityId> = repo
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|sector| sector.id().clone())
        .collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn partial_update_touches_only_named_fields() {
    let repo = Repository::<Sector>::open(&MemoryStore::new());
    let sector = Sector::new("Education", Some("old text".into()));
    repo.save(&sector).await.unwrap();

    let patch = SectorPatch {
        description: Some(Some("new text".into())),
        ..Default::default()
    };
    let updated = repo.update(sector.id().as_str(), patch).await.unwrap();
    assert_eq!(updated.name, "Education");
    assert_eq!(updated.description.as_deref(), Some("new text"));

    let stored = repo.find_by_id(sector.id().as_str()).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn empty_update_is_rejected_and_nothing_is_written() {
    let repo = Repository::<Sector>::open(&MemoryStore::new());
    let sector = Sector::new("Education", None);
    repo.save(&sector).await.unwrap();

    let err = repo
        .update(sector.id().as_str(), SectorPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::EmptyUpdate));
    assert_eq!(repo.find_by_id(sector.id().as_str()).await.unwrap(), Some(sector));
}

#[tokio::test]
async fn updates_sequence_is_replaced_by_patch() {
    let repo = Repository::<GovJobPost>::open(&MemoryStore::new());
    let post = repo.create(posting_draft()).await.unwrap();
    let replacement = Update::new(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap(), "Results out");

    let patch = sarthi_core::model::PostingPatch {
        updates: Some(vec![replacement.clone()]),
        ..Default::default()
    };
    let updated = repo.update(post.id().as_str(), patch).await.unwrap();

    assert_eq!(updated.updates, vec![replacement]);
    assert_eq!(updated.title, post.title);
}

#[tokio::test]
async fn maharashtra_end_to_end() {
    let repo = Repository::<GeoRegion>::open(&MemoryStore::new());
    let region = GeoRegion::new("Maharashtra", vec![City::new("c1", "Mumbai")]);
    let id = region.id().clone();
    assert!(!id.as_str().is_empty());

    repo.save(&region).await.unwrap();
    let found = repo.find_by_id(id.as_str()).await.unwrap().unwrap();
    assert_eq!(found.id(), &id);
    assert_eq!(found.name, "Maharashtra");
    assert_eq!(found.cities, vec![City::new("c1", "Mumbai")]);

    assert!(repo.delete(id.as_str()).await.unwrap());
    assert!(repo.find_by_id(id.as_str()).await.unwrap().is_none());
}

#[tokio::test]
async fn concurrent_saves_from_independent_tasks() {
    let store = MemoryStore::new();
    let mut handles = Vec::new();
    for i in 0..32 {
        let repo = Repository::<Sector>::open(&store);
        handles.push(tokio::spawn(async move {
            let sector = Sector::new(format!("sector-{i}"), None);
            repo.save(&sector).await.unwrap();
            sector.id().clone()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    let repo = Repository::<Sector>::open(&store);
    let listed: HashSet<EntityId> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|sector| sector.id().clone())
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn patch_trait_is_usable_without_repository() {
    let mut region = GeoRegion::new("Goa", vec![]);
    let patch = sarthi_core::model::RegionPatch {
        name: Some("Goa State".into()),
        cities: None,
    };
    patch.apply(&mut region).unwrap();
    assert_eq!(region.name, "Goa State");
}
