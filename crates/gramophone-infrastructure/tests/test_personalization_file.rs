use gramophone_core::personalization::{PersonalizationRepository, PersonalizationState};
use gramophone_core::profile::ProfileType;
use gramophone_infrastructure::{FilePersonalizationRepository, GramophonePaths};
use tempfile::TempDir;

const KEY: &str = "portfolio-profile";

#[tokio::test]
async fn test_first_visit_has_no_record() {
    let temp_dir = TempDir::new().unwrap();
    let paths = GramophonePaths::new(Some(temp_dir.path().to_path_buf()));
    let repo = FilePersonalizationRepository::open(&paths, KEY).unwrap();

    assert_eq!(repo.load().await.unwrap(), None);
    assert!(!paths.state_file().unwrap().exists());
}

#[tokio::test]
async fn test_commit_survives_a_new_session() {
    let temp_dir = TempDir::new().unwrap();
    let paths = GramophonePaths::new(Some(temp_dir.path().to_path_buf()));

    {
        let repo = FilePersonalizationRepository::open(&paths, KEY).unwrap();
        repo.save(PersonalizationState::with_profile(ProfileType::Collaborator))
            .await
            .expect("Should save record");
    }

    let repo = FilePersonalizationRepository::open(&paths, KEY).unwrap();
    let loaded = repo.load().await.unwrap().expect("Record should exist");
    assert_eq!(loaded.selected_profile(), Some(ProfileType::Collaborator));
    assert!(loaded.has_selected_profile());
}

#[tokio::test]
async fn test_record_layout_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let paths = GramophonePaths::new(Some(temp_dir.path().to_path_buf()));
    let repo = FilePersonalizationRepository::open(&paths, KEY).unwrap();
    repo.save(PersonalizationState::with_profile(ProfileType::Recruiter))
        .await
        .unwrap();

    let content = std::fs::read_to_string(paths.state_file().unwrap()).unwrap();
    let document: serde_json::Value = serde_json::from_str(&content).unwrap();
    let record = &document[KEY];
    assert_eq!(record["version"], "1.0.0");
    assert_eq!(record["selectedProfile"], "recruiter");
    assert_eq!(record["hasSelectedProfile"], true);
}

#[tokio::test]
async fn test_clear_is_persisted() {
    let temp_dir = TempDir::new().unwrap();
    let paths = GramophonePaths::new(Some(temp_dir.path().to_path_buf()));
    let repo = FilePersonalizationRepository::open(&paths, KEY).unwrap();

    repo.save(PersonalizationState::with_profile(ProfileType::Business))
        .await
        .unwrap();
    repo.save(PersonalizationState::empty()).await.unwrap();

    let repo = FilePersonalizationRepository::open(&paths, KEY).unwrap();
    assert_eq!(
        repo.load().await.unwrap(),
        Some(PersonalizationState::empty())
    );
}

#[tokio::test]
async fn test_corrupted_document_is_an_error_until_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let paths = GramophonePaths::new(Some(temp_dir.path().to_path_buf()));
    let state_file = paths.state_file().unwrap();
    std::fs::create_dir_all(state_file.parent().unwrap()).unwrap();
    std::fs::write(&state_file, "{ not json").unwrap();

    let repo = FilePersonalizationRepository::open(&paths, KEY).unwrap();
    assert!(repo.load().await.is_err());

    repo.save(PersonalizationState::with_profile(ProfileType::Explorer))
        .await
        .unwrap();
    assert_eq!(
        repo.load().await.unwrap(),
        Some(PersonalizationState::with_profile(ProfileType::Explorer))
    );
}
