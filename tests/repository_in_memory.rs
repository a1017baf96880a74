use std::sync::Arc;
use std::thread;
use url_shortener::domain::entities::ShortenedUrl;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::InMemoryUrlRepository;

fn record(code: &str, url: &str, domain: &str) -> ShortenedUrl {
    ShortenedUrl::new(code.to_string(), url.to_string(), domain.to_string())
}

#[test]
fn test_lookup_in_both_directions_returns_same_record() {
    let repo = InMemoryUrlRepository::new();
    repo.insert(record("abc1234", "https://youtube.com/a", "youtube.com"));

    let by_code = repo.find_by_code("abc1234").unwrap();
    let by_url = repo.find_by_url("https://youtube.com/a").unwrap();

    assert!(Arc::ptr_eq(&by_code, &by_url));
}

#[test]
fn test_missing_keys() {
    let repo = InMemoryUrlRepository::new();

    assert!(repo.find_by_code("abc1234").is_none());
    assert!(repo.find_by_url("https://youtube.com").is_none());
    assert!(!repo.exists_by_code("abc1234"));
    assert!(repo.find_all().is_empty());
    assert_eq!(repo.count(), 0);
}

#[test]
fn test_concurrent_readers_never_see_partial_records() {
    let repo = InMemoryUrlRepository::new();
    repo.insert(record("shared1", "https://v0.example.com", "v0.example.com"));

    thread::scope(|s| {
        s.spawn(|| {
            for i in 1..2000 {
                let url = format!("https://v{i}.example.com");
                let domain = format!("v{i}.example.com");
                repo.insert(record("shared1", &url, &domain));
            }
        });

        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..2000 {
                    let found = repo.find_by_code("shared1").unwrap();
                    assert_eq!(found.original_url, format!("https://{}", found.domain));
                }
            });
        }
    });

    assert_eq!(repo.count(), 1);
}

#[test]
fn test_concurrent_inserts_of_distinct_codes() {
    let repo = InMemoryUrlRepository::new();

    thread::scope(|s| {
        for t in 0..8 {
            let repo = &repo;
            s.spawn(move || {
                for i in 0..250 {
                    let code = format!("c{t}x{i}");
                    repo.insert(record(&code, &format!("https://e.com/{t}/{i}"), "e.com"));
                }
            });
        }
    });

    assert_eq!(repo.count(), 2000);
    assert_eq!(repo.find_all().len(), 2000);
    assert!(repo.exists_by_code("c7x249"));
    assert_eq!(
        repo.find_by_url("https://e.com/3/17").unwrap().short_code,
        "c3x17"
    );
}
