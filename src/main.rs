//! Demo: open the home screen against a fixture backend, then watch one story.

use home_feed::gateway::FixtureGateway;
use home_feed::lifecycle::{setup_tracing, HomeSystem};
use home_feed::model::{Story, UserStory};
use home_feed::story::{format_story_timestamp, StoryActor, StoryConfig};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{info, warn, Instrument};

const FIXTURE: &str = r#"{
    "user": { "username": "pra_sidh_22", "profileImage": "https://cdn.example/pra_sidh_22.jpg" },
    "posts": [
        {
            "username": "natgeo",
            "profileImage": "https://cdn.example/natgeo.jpg",
            "timeStamp": 1719840723950,
            "isVerified": true,
            "images": ["https://cdn.example/p/1.jpg", "https://cdn.example/p/2.jpg"],
            "likes": ["u1", "u2", "u3"],
            "caption": "Northern lights over Tromsø"
        },
        {
            "username": "pra_sidh_22",
            "timeStamp": 1719754323950,
            "images": ["https://cdn.example/p/3.jpg"],
            "caption": "Weekend"
        }
    ]
}"#;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let gateway = FixtureGateway::from_json(FIXTURE)
        .map_err(|e| e.to_string())?
        .with_latency(Duration::from_millis(200));

    let mut system = HomeSystem::from_env(Arc::new(gateway)).map_err(|e| e.to_string())?;

    let mut updates = system.view_model.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            info!(
                loading = state.is_loading(),
                username = state.username(),
                posts = state.posts().len(),
                error = state.error(),
                "Render"
            );
        }
    });

    system.view_model.start();
    let state = system.view_model.settled().await.map_err(|e| e.to_string())?;
    if !state.error().is_empty() {
        warn!(error = state.error(), "Home screen shows an error");
    }

    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default();
    for post in state.posts() {
        info!(
            username = %post.username,
            verified = post.is_verified,
            likes = post.like_count(),
            age = %format_story_timestamp(now_ms, post.time_stamp),
            caption = %post.caption,
            "Post"
        );
    }

    let user_story = UserStory {
        username: state.username().to_string(),
        profile_image: state.profile_image().to_string(),
        stories: vec![
            Story { image: "https://cdn.example/s/1.jpg".into(), time_stamp: now_ms - 90_000 },
            Story { image: "https://cdn.example/s/2.jpg".into(), time_stamp: now_ms - 30_000 },
        ],
    };
    let story_config = StoryConfig {
        story_duration: Duration::from_millis(400),
        ..StoryConfig::default()
    };
    let (story_actor, controller) = StoryActor::new(user_story, story_config);
    let story_handle = tokio::spawn(story_actor.run());

    async {
        let mut progress = controller.subscribe();
        controller.image_loaded().await?;
        let mut shown = 0;
        while !progress.borrow().finished {
            if progress.changed().await.is_err() {
                break;
            }
            let current = progress.borrow_and_update().current_index;
            if current != shown {
                shown = current;
                info!(index = current, "Next story");
                controller.image_loaded().await?;
            }
        }
        info!("Stories finished");
        Ok::<(), home_feed::framework::FrameworkError>(())
    }
    .instrument(tracing::info_span!("stories"))
    .await
    .map_err(|e| e.to_string())?;

    drop(controller);
    story_handle.await.map_err(|e| e.to_string())?;

    system.shutdown().await.map_err(|e| e.to_string())?;
    watcher.await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
