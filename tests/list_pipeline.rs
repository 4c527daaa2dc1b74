// tests/list_pipeline.rs
use feedpress_core::application::error::ApplicationError;
use feedpress_core::application::queries::posts::{
    LoadNextPostsQuery, PostListSettings, PostQueryService,
};
use feedpress_core::domain::document::{DocumentPage, DocumentType, PageCursor};
use feedpress_core::domain::post::PostFeed;
use std::sync::Arc;

mod support;
use support::{DocumentBuilder, MockContentRepo, page};

fn service(repo: Arc<MockContentRepo>) -> PostQueryService {
    PostQueryService::new(
        repo,
        PostListSettings::new(DocumentType::new("post").unwrap(), 2),
    )
}

fn uids(feed: &PostFeed) -> Vec<String> {
    feed.posts().iter().filter_map(|p| p.uid.clone()).collect()
}

#[tokio::test]
async fn initial_then_next_page_ends_the_feed() {
    let repo = Arc::new(
        MockContentRepo::with_first_page(page(&["p1"], Some("cursor-2")))
            .page_at("cursor-2", page(&["p2"], None)),
    );
    let svc = service(Arc::clone(&repo));

    let initial = svc.load_initial().await.unwrap();
    assert_eq!(initial.results.len(), 1);
    assert_eq!(initial.results[0].uid.as_deref(), Some("p1"));
    assert_eq!(initial.next_page.as_ref().map(PageCursor::as_str), Some("cursor-2"));

    let next = svc
        .load_next(LoadNextPostsQuery {
            cursor: "cursor-2".into(),
        })
        .await
        .unwrap();
    assert_eq!(next.new_posts[0].uid.as_deref(), Some("p2"));
    assert!(next.next_page.is_none());

    let feed = PostFeed::from_page(initial).merge(next);
    assert_eq!(uids(&feed), ["p1", "p2"]);
    assert!(!feed.has_more());
}

#[tokio::test]
async fn initial_load_uses_fixed_page_size_and_all_languages() {
    let repo = Arc::new(MockContentRepo::with_first_page(page(&["p1"], None)));
    service(Arc::clone(&repo)).load_initial().await.unwrap();
    assert_eq!(repo.calls(), ["query:post:2:*"]);
}

#[tokio::test]
async fn posts_are_normalized_for_display() {
    let repo = Arc::new(MockContentRepo::with_first_page(page(&["p1"], None)));
    let initial = service(repo).load_initial().await.unwrap();
    let post = &initial.results[0];
    assert_eq!(post.data.title, "Title p1");
    assert_eq!(post.data.subtitle, "Subtitle p1");
    assert_eq!(post.data.author, "Joseph Oliveira");
    assert_eq!(post.first_publication_date.as_deref(), Some("1 mar 2021"));
}

#[tokio::test]
async fn load_more_accumulates_in_fetch_order() {
    let repo = Arc::new(
        MockContentRepo::with_first_page(page(&["p1", "p2"], Some("c2")))
            .page_at("c2", page(&["p3", "p4"], Some("c3")))
            .page_at("c3", page(&["p5"], None)),
    );
    let svc = service(repo);

    let mut feed = PostFeed::from_page(svc.load_initial().await.unwrap());
    while feed.has_more() {
        feed = svc.load_more(&feed).await.unwrap();
    }

    assert_eq!(uids(&feed), ["p1", "p2", "p3", "p4", "p5"]);
}

#[tokio::test]
async fn failed_continuation_leaves_feed_untouched() {
    let repo = Arc::new(
        MockContentRepo::with_first_page(page(&["p1"], Some("c2"))).failing_at("c2"),
    );
    let svc = service(repo);

    let feed = PostFeed::from_page(svc.load_initial().await.unwrap());
    let err = svc.load_more(&feed).await.unwrap_err();

    assert!(matches!(err, ApplicationError::Fetch(_)));
    assert_eq!(uids(&feed), ["p1"]);
    assert_eq!(feed.next_page().map(PageCursor::as_str), Some("c2"));
    assert!(feed.has_more());
}

#[tokio::test]
async fn unknown_cursor_is_a_fetch_error() {
    let repo = Arc::new(MockContentRepo::default());
    let err = service(repo)
        .load_next(LoadNextPostsQuery {
            cursor: "bogus".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Fetch(_)));
}

#[tokio::test]
async fn load_more_after_last_page_does_not_fetch() {
    let repo = Arc::new(MockContentRepo::with_first_page(page(&["p1"], None)));
    let svc = service(Arc::clone(&repo));

    let feed = PostFeed::from_page(svc.load_initial().await.unwrap());
    let err = svc.load_more(&feed).await.unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
    assert_eq!(repo.calls().len(), 1);
}

#[tokio::test]
async fn malformed_document_fails_the_page() {
    let broken = DocumentBuilder::post("p2").without("title").build();
    let repo = Arc::new(MockContentRepo::with_first_page(DocumentPage::new(
        vec![DocumentBuilder::post("p1").build(), broken],
        None,
    )));

    let err = service(repo).load_initial().await.unwrap_err();
    assert!(matches!(err, ApplicationError::Normalization(msg) if msg.contains("title")));
}

#[tokio::test]
async fn repository_outage_surfaces_as_fetch_error() {
    let repo = Arc::new(MockContentRepo::unavailable());
    let err = service(repo).load_initial().await.unwrap_err();
    assert!(matches!(err, ApplicationError::Fetch(_)));
}

#[tokio::test]
async fn unpublished_document_has_no_date() {
    let repo = Arc::new(MockContentRepo::with_first_page(DocumentPage::new(
        vec![DocumentBuilder::post("draft").unpublished().build()],
        None,
    )));
    let initial = service(repo).load_initial().await.unwrap();
    assert!(initial.results[0].first_publication_date.is_none());
}

#[tokio::test]
async fn blank_cursor_is_rejected_before_fetching() {
    let repo = Arc::new(MockContentRepo::default());
    let err = service(Arc::clone(&repo))
        .load_next(LoadNextPostsQuery { cursor: "".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn unparsable_publication_date_is_a_normalization_error() {
    let repo = Arc::new(MockContentRepo::with_first_page(DocumentPage::new(
        vec![DocumentBuilder::post("p1").published("25/03/2021").build()],
        None,
    )));
    let err = service(repo).load_initial().await.unwrap_err();
    assert!(matches!(err, ApplicationError::Normalization(_)));
}
