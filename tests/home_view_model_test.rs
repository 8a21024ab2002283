use home_feed::framework::StateClient;
use home_feed::gateway::MockGateway;
use home_feed::home::{new_store, HomeConfig, HomeViewModel};
use home_feed::model::{HomeUiState, LoadState, Post, UserProfile};
use std::sync::Arc;
use std::time::Duration;

/// Real state actor, scripted gateway.
fn view_model(mock: &MockGateway) -> (HomeViewModel, StateClient<HomeUiState>) {
    let (actor, client) = new_store(32);
    tokio::spawn(actor.run());
    let vm = HomeViewModel::new(Arc::new(mock.clone()), client.clone(), HomeConfig::immediate());
    (vm, client)
}

fn sample_posts() -> Vec<Post> {
    vec![Post::new("natgeo", "aurora", 2), Post::new("alice", "lunch", 1)]
}

#[tokio::test]
async fn test_user_data_success_populates_header() {
    let mock = MockGateway::new();
    mock.expect_user_data().return_ok(UserProfile::new("alice", "a.jpg"));
    let (mut vm, _) = view_model(&mock);

    vm.load_user_data();
    let state = vm.settled().await.unwrap();

    assert!(!state.is_loading());
    assert_eq!(state.error(), "");
    assert_eq!(state.username(), "alice");
    assert_eq!(state.profile_image(), "a.jpg");
    mock.verify();
}

#[tokio::test]
async fn test_user_data_failure_sets_message() {
    let mock = MockGateway::new();
    mock.expect_user_data().return_err("PERMISSION_DENIED: not signed in");
    let (mut vm, _) = view_model(&mock);

    vm.load_user_data();
    let state = vm.settled().await.unwrap();

    assert!(!state.is_loading());
    assert_eq!(state.error(), "PERMISSION_DENIED: not signed in");
    assert_eq!(state.username(), "");
    mock.verify();
}

#[tokio::test]
async fn test_still_loading_response_is_a_failure() {
    let mock = MockGateway::new();
    mock.expect_user_data().return_loading();
    let (mut vm, _) = view_model(&mock);

    vm.load_user_data();
    let state = vm.settled().await.unwrap();

    assert!(!state.is_loading());
    assert!(!state.error().is_empty());
    assert_eq!(state.username(), "");
}

#[tokio::test]
async fn test_empty_post_list() {
    let mock = MockGateway::new();
    mock.expect_all_posts().return_ok(vec![]);
    let (mut vm, _) = view_model(&mock);

    vm.load_all_posts();
    let state = vm.settled().await.unwrap();

    assert_eq!(state.posts, LoadState::Loaded(vec![]));
    assert!(state.posts().is_empty());
    assert!(!state.is_loading());
    assert_eq!(state.error(), "");
}

#[tokio::test]
async fn test_reload_overwrites_previous_result() {
    let mock = MockGateway::new();
    mock.expect_user_data().return_ok(UserProfile::new("alice", "a.jpg"));
    mock.expect_user_data().return_ok(UserProfile::new("alice_2", "b.jpg"));
    mock.expect_user_data().return_ok(UserProfile::new("alice_2", "b.jpg"));
    let (mut vm, _) = view_model(&mock);

    vm.load_user_data();
    assert_eq!(vm.settled().await.unwrap().username(), "alice");

    vm.load_user_data();
    let second = vm.settled().await.unwrap();
    assert_eq!(second.username(), "alice_2");
    assert_eq!(second.profile_image(), "b.jpg");

    vm.load_user_data();
    assert_eq!(vm.settled().await.unwrap(), second);
    mock.verify();
}

#[tokio::test]
async fn test_posts_are_replaced_wholesale() {
    let mock = MockGateway::new();
    mock.expect_all_posts().return_ok(sample_posts());
    mock.expect_all_posts().return_ok(vec![Post::new("bob", "new", 3)]);
    let (mut vm, _) = view_model(&mock);

    vm.load_all_posts();
    assert_eq!(vm.settled().await.unwrap().posts().len(), 2);

    vm.load_all_posts();
    let state = vm.settled().await.unwrap();
    assert_eq!(state.posts(), &[Post::new("bob", "new", 3)]);
}

#[tokio::test]
async fn test_settlement_property_over_mixed_outcomes() {
    let mock = MockGateway::new();
    let outcomes = [true, false, true, true, false];
    for (i, ok) in outcomes.iter().enumerate() {
        if *ok {
            mock.expect_user_data().return_ok(UserProfile::new(format!("user_{i}"), format!("{i}.jpg")));
        } else {
            mock.expect_user_data().return_err(format!("failure {i}"));
        }
    }
    let (mut vm, _) = view_model(&mock);

    for _ in outcomes {
        vm.load_user_data();
        let state = vm.settled().await.unwrap();
        assert!(!state.is_loading());
        if state.error().is_empty() {
            assert!(!state.username().is_empty());
            assert!(!state.profile_image().is_empty());
        } else {
            assert_eq!(state.username(), "");
        }
    }
    mock.verify();
}

#[tokio::test]
async fn test_loading_is_visible_before_the_fetch_completes() {
    let mock = MockGateway::new();
    mock.expect_user_data()
        .after(Duration::from_millis(50))
        .return_ok(UserProfile::new("alice", "a.jpg"));
    let (mut vm, client) = view_model(&mock);

    vm.load_user_data();
    let during = client.get().await.unwrap();
    assert!(during.is_loading());
    assert_eq!(during.profile, LoadState::Loading);

    let after = vm.settled().await.unwrap();
    assert!(!after.is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_loads_both_land_in_either_order() {
    for profile_first in [true, false] {
        let (fast, slow) = (Duration::from_millis(10), Duration::from_millis(200));
        let (user_delay, posts_delay) = if profile_first { (fast, slow) } else { (slow, fast) };

        let mock = MockGateway::new();
        mock.expect_user_data().after(user_delay).return_ok(UserProfile::new("alice", "a.jpg"));
        mock.expect_all_posts().after(posts_delay).return_ok(sample_posts());
        let (mut vm, _) = view_model(&mock);

        vm.start();
        assert_eq!(vm.in_flight(), 2);
        let state = vm.settled().await.unwrap();

        assert_eq!(state.username(), "alice", "profile_first={profile_first}");
        assert_eq!(state.posts(), sample_posts().as_slice(), "profile_first={profile_first}");
        assert!(!state.is_loading());
        assert_eq!(state.error(), "");
        mock.verify();
    }
}

/// Whole-snapshot replacement from a stale base is what the per-section reducers
/// avoid: the profile written in between is lost.
#[tokio::test]
async fn test_whole_snapshot_replace_loses_concurrent_update() {
    let (actor, client) = new_store(8);
    tokio::spawn(actor.run());

    // Posts load reads its base while both sections are loading.
    let stale = client
        .update("both_loading", |s| s.with_profile(LoadState::Loading).with_posts(LoadState::Loading))
        .await
        .unwrap();

    // Profile load completes first.
    client
        .update("profile_settled", |s| s.with_profile(LoadState::Loaded(UserProfile::new("alice", "a.jpg"))))
        .await
        .unwrap();

    // Posts load writes back a copy of its stale base.
    let raced = client.replace(stale.with_posts(LoadState::Loaded(sample_posts()))).await.unwrap();
    assert_eq!(raced.username(), "", "stale replace dropped the profile");
    assert!(raced.is_loading(), "profile is stuck in Loading");

    // The same sequence through a reducer keeps both.
    client.reset().await.unwrap();
    client.update("profile", |s| s.with_profile(LoadState::Loaded(UserProfile::new("alice", "a.jpg")))).await.unwrap();
    let merged = client.update("posts", |s| s.with_posts(LoadState::Loaded(sample_posts()))).await.unwrap();
    assert_eq!(merged.username(), "alice");
    assert_eq!(merged.posts().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_simultaneous_loading_and_error_across_sections() {
    let mock = MockGateway::new();
    mock.expect_user_data().return_err("offline");
    mock.expect_all_posts().after(Duration::from_secs(5)).return_ok(vec![]);
    let (mut vm, client) = view_model(&mock);

    vm.start();
    let mut rx = client.subscribe();
    let both = rx
        .wait_for(|s| s.profile.error().is_some())
        .await
        .unwrap()
        .clone();
    assert!(both.posts.is_loading());
    assert!(both.is_loading());
    assert_eq!(both.error(), "offline");

    let state = vm.settled().await.unwrap();
    assert!(!state.is_loading());
    assert_eq!(state.error(), "offline");
    mock.verify();
}

#[tokio::test(start_paused = true)]
async fn test_loading_mark_survives_a_full_store_queue() {
    let mock = MockGateway::new();
    mock.expect_user_data().return_ok(UserProfile::new("alice", "a.jpg"));
    mock.expect_all_posts().after(Duration::from_secs(5)).return_ok(sample_posts());

    let config = HomeConfig { store_buffer: 1, ..HomeConfig::immediate() };
    config.validate().unwrap();
    let (actor, client) = new_store(config.store_buffer);
    tokio::spawn(actor.run());
    let mut vm = HomeViewModel::new(Arc::new(mock.clone()), client.clone(), config);

    vm.start();
    tokio::time::sleep(Duration::from_millis(100)).await;
    let during = client.get().await.unwrap();
    assert_eq!(during.posts, LoadState::Loading);
    assert_eq!(during.username(), "alice");

    let state = vm.settled().await.unwrap();
    assert_eq!(state.posts(), sample_posts().as_slice());
    mock.verify();
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_reloads_keep_the_newest_answer() {
    let mock = MockGateway::new();
    mock.expect_user_data()
        .after(Duration::from_millis(200))
        .return_ok(UserProfile::new("old", "old.jpg"));
    mock.expect_user_data()
        .after(Duration::from_millis(10))
        .return_ok(UserProfile::new("new", "new.jpg"));
    let (mut vm, client) = view_model(&mock);

    vm.load_user_data();
    vm.load_user_data();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(client.get().await.unwrap().username(), "new");

    let state = vm.settled().await.unwrap();
    assert_eq!(state.username(), "new");
    assert_eq!(state.profile_image(), "new.jpg");
    assert!(!state.is_loading());
    mock.verify();
}

#[tokio::test]
async fn test_clear_abandons_in_flight_loads() {
    let mock = MockGateway::new();
    mock.expect_user_data().after(Duration::from_secs(60)).return_ok(UserProfile::new("alice", "a.jpg"));
    let (mut vm, client) = view_model(&mock);

    vm.load_user_data();
    assert!(client.get().await.unwrap().is_loading());

    vm.clear().await.unwrap();
    assert_eq!(vm.in_flight(), 0);
    assert_eq!(client.get().await.unwrap(), HomeUiState::default());
}

#[tokio::test(start_paused = true)]
async fn test_minimum_loading_time() {
    let mock = MockGateway::new();
    mock.expect_all_posts().return_ok(vec![]);
    let (actor, client) = new_store(8);
    tokio::spawn(actor.run());
    let config = HomeConfig { posts_delay_ms: 500, ..HomeConfig::immediate() };
    let mut vm = HomeViewModel::new(Arc::new(mock.clone()), client.clone(), config);

    let started = tokio::time::Instant::now();
    vm.load_all_posts();
    vm.settled().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(500));
}
