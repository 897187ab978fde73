use std::sync::Arc;

use mergington_core::{ActivityRepository, Catalog, RosterError};
use mergington_state_inmemory::InMemoryActivityRepository;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_enrolls_of_same_email_succeed_once() {
    let repo = Arc::new(InMemoryActivityRepository::default());

    let handles: Vec<_> = (0..32)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.enroll("Art Club", "race@mergington.edu").await })
        })
        .collect();

    let mut successes = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.expect("task panicked") {
            Ok(()) => successes += 1,
            Err(RosterError::AlreadyEnrolled { .. }) => duplicates += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 31);

    let art = repo.find_by_name("Art Club").await.unwrap().unwrap();
    assert_eq!(
        art.participants
            .iter()
            .filter(|p| *p == "race@mergington.edu")
            .count(),
        1
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_enrolls_never_exceed_capacity() {
    // Math Club seeds 2 of 10 places
    let repo = Arc::new(InMemoryActivityRepository::from_catalog(Catalog::default_seed()));

    let handles: Vec<_> = (0..50)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.enroll("Math Club", &format!("student{i}@mergington.edu")).await
            })
        })
        .collect();

    let mut successes = 0;
    let mut full = 0;
    for handle in handles {
        match handle.await.expect("task panicked") {
            Ok(()) => successes += 1,
            Err(RosterError::AtCapacity { max_participants, .. }) => {
                assert_eq!(max_participants, 10);
                full += 1;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successes, 8);
    assert_eq!(full, 42);

    let math = repo.find_by_name("Math Club").await.unwrap().unwrap();
    assert_eq!(math.participants.len(), 10);
    assert!(math.is_full());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_interleaved_enroll_and_withdraw_on_distinct_records() {
    let repo = Arc::new(InMemoryActivityRepository::default());

    let mut handles = Vec::new();
    for i in 0..10 {
        let soccer = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let email = format!("player{i}@mergington.edu");
            soccer.enroll("Soccer Team", &email).await?;
            soccer.withdraw("Soccer Team", &email).await
        }));
        let drama = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            drama.enroll("Drama Club", &format!("actor{i}@mergington.edu")).await
        }));
    }

    for handle in handles {
        handle.await.expect("task panicked").expect("operation failed");
    }

    let soccer = repo.find_by_name("Soccer Team").await.unwrap().unwrap();
    assert_eq!(soccer.participants, vec!["liam@mergington.edu", "noah@mergington.edu"]);

    let drama = repo.find_by_name("Drama Club").await.unwrap().unwrap();
    assert_eq!(drama.participants.len(), 12);
}
