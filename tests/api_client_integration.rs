//! Integration tests for the HTTP client against the reference server.
//!
//! Each test binds the axum router to an ephemeral port and talks to it
//! through `HttpPrismClient`, exercising the full JSON wire format.

use std::sync::Arc;

use prism_profiler::adapters::api::{
    ApiOperation, HttpPrismClient, InMemoryProfileApi, INSERTED_MESSAGE, UPDATED_MESSAGE,
};
use prism_profiler::adapters::http::{prism_router, PrismHandlers};
use prism_profiler::adapters::objective::MockSuggester;
use prism_profiler::application::{ProfileWorkspace, SaveStatus, WorkspaceError};
use prism_profiler::config::ApiConfig;
use prism_profiler::domain::archetype::ARCHETYPES;
use prism_profiler::domain::design::ChecklistKind;
use prism_profiler::domain::foundation::{ProfileId, Rating};
use prism_profiler::domain::profile::Profile;
use prism_profiler::domain::rating::{CompetencyId, CompetencyPath};
use prism_profiler::domain::role::KeyResponsibility;
use prism_profiler::ports::{ApiError, ObjectiveSuggester, ProfileApi, SuggestionError};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestServer {
    store: Arc<InMemoryProfileApi>,
    client: HttpPrismClient,
}

async fn spawn_server(suggester: MockSuggester) -> TestServer {
    let store = Arc::new(InMemoryProfileApi::seeded());
    let handlers = PrismHandlers::new(store.clone(), Arc::new(suggester));
    let app = prism_router(handlers, &[]);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = HttpPrismClient::new(ApiConfig::new(format!("http://{}", addr))).unwrap();
    TestServer { store, client }
}

fn path(dotted: &str) -> CompetencyPath {
    CompetencyPath::parse(dotted).unwrap()
}

fn edited_profile() -> Profile {
    Profile::new()
        .map_role(|role| {
            role.with_profession("Software Engineering")
                .with_department("Backend Development")
                .with_specific_role("API Developer")
                .with_description("Designs public APIs")
                .with_task("Review schema changes")
                .unwrap()
                .with_responsibility(KeyResponsibility::authored("Versioning policy"))
                .unwrap()
        })
        .with_rating(&path("skills.cognitive.analytical"), Rating::High)
        .unwrap()
        .with_rating(&path("identity.selfEfficacy"), Rating::Medium)
        .unwrap()
        .with_objective(
            CompetencyId::new("skills-cognitive-analytical"),
            "Diagnose two production incidents",
        )
        .with_checklist_item(
            ChecklistKind::AleFeatures,
            "Reflection & Articulation",
            "Action replay or review systems",
            true,
        )
        .unwrap()
        .toggle_archetype(&ARCHETYPES[2])
}

// =============================================================================
// Persistence round trips
// =============================================================================

#[tokio::test]
async fn save_then_load_returns_equal_profile() {
    let server = spawn_server(MockSuggester::new()).await;
    let profile = edited_profile();

    let receipt = server.client.save_profile(&profile).await.unwrap();
    assert_eq!(receipt.message, INSERTED_MESSAGE);

    let loaded = server.client.load_profile(receipt.id).await.unwrap();
    assert_eq!(loaded, profile.with_id(receipt.id));
}

#[tokio::test]
async fn second_save_updates_same_id() {
    let server = spawn_server(MockSuggester::new()).await;
    let first = server.client.save_profile(&Profile::new()).await.unwrap();

    let updated = Profile::new()
        .with_id(first.id)
        .with_rating(&path("ethics.virtue"), Rating::High)
        .unwrap();
    let second = server.client.save_profile(&updated).await.unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.message, UPDATED_MESSAGE);
    assert_eq!(server.store.len(), 1);
}

#[tokio::test]
async fn list_profiles_returns_newest_first() {
    let server = spawn_server(MockSuggester::new()).await;
    let older = server.client.save_profile(&edited_profile()).await.unwrap().id;
    let newer = server.client.save_profile(&Profile::new()).await.unwrap().id;

    let summaries = server.client.list_profiles().await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, newer);
    assert_eq!(summaries[0].title(), "Untitled Role");
    assert_eq!(summaries[1].id, older);
    assert_eq!(summaries[1].specific_role, "API Developer");
    assert_eq!(summaries[1].archetype.as_deref(), Some("Technical Virtuoso"));
}

#[tokio::test]
async fn master_kras_come_back_with_buckets() {
    let server = spawn_server(MockSuggester::new()).await;
    let kras = server.client.list_master_kras().await.unwrap();
    assert!(!kras.is_empty());
    assert!(kras.iter().any(|k| k.bucket == "Software Engineering"));
}

// =============================================================================
// Error mapping
// =============================================================================

#[tokio::test]
async fn missing_profile_maps_to_404() {
    let server = spawn_server(MockSuggester::new()).await;
    let err = server.client.load_profile(ProfileId::new(404)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn server_failure_carries_status_and_detail() {
    let server = spawn_server(MockSuggester::new()).await;
    server
        .store
        .fail(ApiOperation::ListProfiles, ApiError::status_code(500, "Database error"));

    let err = server.client.list_profiles().await.unwrap_err();
    assert_eq!(err, ApiError::status_code(500, "Database error"));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpPrismClient::new(ApiConfig::new(format!("http://{}", addr))).unwrap();
    let err = client.list_profiles().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

// =============================================================================
// Suggestions
// =============================================================================

#[tokio::test]
async fn suggestion_round_trip() {
    let suggester = MockSuggester::new().with_response("  Lead two design reviews  ");
    let server = spawn_server(suggester.clone()).await;

    let text = server.client.suggest("Generate one objective").await.unwrap();

    assert_eq!(text, "Lead two design reviews");
    assert_eq!(suggester.prompts(), vec!["Generate one objective"]);
}

#[tokio::test]
async fn malformed_suggestion_maps_to_502() {
    let suggester = MockSuggester::new().with_error(SuggestionError::Malformed("empty".into()));
    let server = spawn_server(suggester).await;

    let err = server.client.suggest("anything").await.unwrap_err();
    assert_eq!(err, SuggestionError::Status { status: 502 });
}

// =============================================================================
// Workspace over HTTP
// =============================================================================

#[tokio::test]
async fn failed_save_leaves_id_and_edits_intact() {
    let server = spawn_server(MockSuggester::new()).await;
    let client = Arc::new(server.client.clone());
    let workspace = ProfileWorkspace::new(client.clone(), client);

    workspace.set_rating(&path("skills.cognitive.analytical"), Rating::High).unwrap();
    let first = workspace.save().await.unwrap();
    workspace
        .set_rating(&path("knowledge.conditional.whenToApply"), Rating::Medium)
        .unwrap();
    let before = workspace.profile();

    server
        .store
        .fail(ApiOperation::SaveProfile, ApiError::status_code(500, "Database error"));
    let err = workspace.save().await.unwrap_err();

    assert!(matches!(err, WorkspaceError::Api(ref e) if e.status() == Some(500)));
    assert_eq!(workspace.profile(), before);
    assert_eq!(workspace.profile().id(), Some(first.id));
    assert!(matches!(workspace.save_status(), SaveStatus::Failed(_)));

    // the stored copy is still the first save
    let stored = server.store.stored(first.id).unwrap();
    assert_eq!(
        stored.ratings().leaf(&path("knowledge.conditional.whenToApply")),
        Some(Rating::Low)
    );
}
