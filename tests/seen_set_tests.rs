use std::sync::Arc;

use path_hunter::engine::SeenSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn check_and_mark_returns_true_exactly_once_under_contention() {
    let seen = Arc::new(SeenSet::new());
    let mut handles = Vec::new();
    for _ in 0..32 {
        let seen = seen.clone();
        handles.push(tokio::spawn(async move {
            seen.check_and_mark("http://example.test/admin")
        }));
    }

    let mut newly_marked = 0;
    for handle in handles {
        if handle.await.unwrap() {
            newly_marked += 1;
        }
    }
    assert_eq!(newly_marked, 1);
    assert_eq!(seen.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn distinct_urls_each_mark_once_under_contention() {
    let seen = Arc::new(SeenSet::new());
    let mut handles = Vec::new();
    for i in 0..16 {
        for _ in 0..4 {
            let seen = seen.clone();
            handles.push(tokio::spawn(async move {
                seen.check_and_mark(&format!("http://example.test/path-{i}"))
            }));
        }
    }

    let mut newly_marked = 0;
    for handle in handles {
        if handle.await.unwrap() {
            newly_marked += 1;
        }
    }
    assert_eq!(newly_marked, 16);
    assert_eq!(seen.len(), 16);
}
