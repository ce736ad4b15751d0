//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;
pub mod scripted_api;

use stackbrowse::api::{Answer, Owner, QueryOptions, Question};
use stackbrowse::connectivity::{ConnectivityProbe, StaticProbe};
use stackbrowse::repository::Repository;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::watch;

pub use scripted_api::{Call, Reply, ScriptedApi};

pub fn question(id: u64, title: &str) -> Question {
    Question {
        question_id: id,
        title: title.to_string(),
        body: Some(format!("<p>Body of {}</p>", title)),
        score: 1,
        answer_count: 0,
        view_count: 10,
        creation_date: 1_600_000_000,
        last_activity_date: 1_600_000_000,
        owner: Owner {
            user_id: Some(1),
            display_name: "tester".to_string(),
            profile_image: None,
            reputation: Some(100),
        },
        tags: vec!["rust".to_string()],
        is_answered: false,
        accepted_answer_id: None,
    }
}

pub fn answer(id: u64, question_id: u64, score: i64, created: i64) -> Answer {
    Answer {
        answer_id: id,
        question_id,
        body: format!("<p>Answer {}</p>", id),
        score,
        creation_date: created,
        owner: Owner::default(),
        is_accepted: false,
    }
}

/// Repository over `api` with a switchable probe.
pub fn repository(api: Arc<ScriptedApi>, online: bool) -> (Arc<Repository>, Arc<StaticProbe>) {
    let probe = Arc::new(StaticProbe::new(online));
    let repository = Repository::new(
        api,
        Arc::clone(&probe) as Arc<dyn ConnectivityProbe>,
        QueryOptions::default(),
    );
    (Arc::new(repository), probe)
}

/// Waits until the watched state satisfies `pred`, panicking after 2s.
pub async fn wait_for<S, F>(rx: &mut watch::Receiver<S>, pred: F) -> S
where
    S: Clone,
    F: Fn(&S) -> bool,
{
    tokio::time::timeout(Duration::from_secs(2), rx.wait_for(|state| pred(state)))
        .await
        .expect("timed out waiting for state")
        .expect("state channel closed")
        .clone()
}

/// Create a temporary config file with `content`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Waits until `api` has received `count` calls, so scripted replies are
/// consumed in a known order.
pub async fn wait_for_calls(api: &ScriptedApi, count: usize) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while api.calls().len() < count {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("timed out waiting for API calls");
}
