use wikiproxy_lib::{
    render_page, Client, ContentFetcher, ConversionRequest, FetchResult, HtmdConverter,
    PageSearcher, PipelineOptions, ProxyError, ResponseFormat, RetryConfig, SearchPaging,
    SearchResult,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARSE_TOKYO: &str = include_str!("../../wikipedia_api/tests/fixtures/parse_tokyo.json");
const PARSE_MISSING: &str = include_str!("../../wikipedia_api/tests/fixtures/parse_missing.json");
const PARSE_BAD_TITLE: &str =
    include_str!("../../wikipedia_api/tests/fixtures/parse_bad_title.json");
const SEARCH_RESULTS: &str =
    include_str!("../../wikipedia_api/tests/fixtures/search_results.json");
const SEARCH_EMPTY: &str = include_str!("../../wikipedia_api/tests/fixtures/search_empty.json");
const SEARCH_ERROR: &str = include_str!("../../wikipedia_api/tests/fixtures/search_error.json");

fn client(server: &MockServer) -> Client {
    Client::with_base_url(&format!("{}/w/api.php", server.uri())).unwrap()
}

fn fast_retry(max_retries: usize) -> RetryConfig {
    RetryConfig {
        max_retries,
        base_delay_ms: 1,
        max_delay_ms: 5,
    }
}

// ============================================================================
// Content Fetcher
// ============================================================================

#[tokio::test]
async fn fetch_existing_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "parse"))
        .and(query_param("page", "東京"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PARSE_TOKYO))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = ContentFetcher::new(client(&mock_server), RetryConfig::none());
    match fetcher.fetch("東京").await {
        FetchResult::Success(html) => {
            assert!(!html.is_empty());
            assert!(html.contains("mw-parser-output"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_missing_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PARSE_MISSING))
        .mount(&mock_server)
        .await;

    let fetcher = ContentFetcher::new(client(&mock_server), RetryConfig::none());
    match fetcher.fetch("存在しないページ").await {
        FetchResult::MissingTitle(body) => {
            assert_eq!(body.code, "missingtitle");
            assert_eq!(body.info, "The page you specified doesn't exist.");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_other_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PARSE_BAD_TITLE))
        .mount(&mock_server)
        .await;

    let fetcher = ContentFetcher::new(client(&mock_server), RetryConfig::none());
    let result = fetcher.fetch("x").await;
    assert!(matches!(result, FetchResult::OtherError(ref b) if b.code == "invalidtitle"));

    let err = fetcher.try_fetch("x").await.unwrap_err();
    assert!(matches!(err, ProxyError::Upstream(_)));
}

#[tokio::test]
async fn fetch_service_unavailable_keeps_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let fetcher = ContentFetcher::new(client(&mock_server), RetryConfig::none());
    match fetcher.fetch("東京").await {
        FetchResult::OtherError(body) => {
            assert_eq!(body.code, "http_error");
            assert_eq!(body.detail, "Service Unavailable");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let err = fetcher.try_fetch("東京").await;
    assert!(matches!(err, Err(ProxyError::Transport(_))));
}

#[tokio::test]
async fn fetch_retries_transient_failures_when_enabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PARSE_TOKYO))
        .mount(&mock_server)
        .await;

    let fetcher = ContentFetcher::new(client(&mock_server), fast_retry(2));
    assert!(fetcher.fetch("東京").await.is_success());
}

#[tokio::test]
async fn fetch_does_not_retry_missing_title() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PARSE_MISSING))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = ContentFetcher::new(client(&mock_server), fast_retry(3));
    assert!(matches!(
        fetcher.fetch("nope").await,
        FetchResult::MissingTitle(_)
    ));
}

#[tokio::test]
async fn fetch_then_render_markdown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PARSE_TOKYO))
        .mount(&mock_server)
        .await;

    let fetcher = ContentFetcher::new(client(&mock_server), RetryConfig::none());
    let request = ConversionRequest::new("東京", ResponseFormat::Markdown, false).unwrap();
    let fetched = fetcher.fetch(request.page_title()).await;
    let page = render_page(
        fetched,
        &request,
        &HtmdConverter::default(),
        &PipelineOptions::default(),
    )
    .unwrap();
    assert!(page.body.contains("**東京**"));
    assert!(!page.body.contains("font-style"));
    assert!(page.content_type.starts_with("text/markdown"));
}

// ============================================================================
// Page Searcher
// ============================================================================

#[tokio::test]
async fn search_success_passes_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("list", "search"))
        .and(query_param("srsearch", "不知火"))
        .and(query_param("srlimit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_RESULTS))
        .mount(&mock_server)
        .await;

    let searcher = PageSearcher::new(client(&mock_server), RetryConfig::none());
    let paging = SearchPaging {
        limit: Some(2),
        offset: None,
    };
    match searcher.search("不知火", paging).await {
        SearchResult::Success(payload) => {
            let expected: serde_json::Value = serde_json::from_str(SEARCH_RESULTS).unwrap();
            assert_eq!(payload, expected);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn search_zero_hits_is_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_EMPTY))
        .mount(&mock_server)
        .await;

    let searcher = PageSearcher::new(client(&mock_server), RetryConfig::none());
    match searcher.search("zzzzzzzzzz", SearchPaging::default()).await {
        SearchResult::Success(payload) => {
            assert_eq!(payload["query"]["search"], serde_json::json!([]));
            assert_eq!(payload["query"]["searchinfo"]["totalhits"], 0);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn search_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_ERROR))
        .mount(&mock_server)
        .await;

    let searcher = PageSearcher::new(client(&mock_server), RetryConfig::none());
    match searcher.search("x", SearchPaging::default()).await {
        SearchResult::Error(payload) => assert_eq!(payload["code"], "nosrsearch"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn search_error_without_code_is_passed_through() {
    let mock_server = MockServer::start().await;
    let envelope = serde_json::json!({"error": {"info": "Something went wrong", "trace": 7}});

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&mock_server)
        .await;

    let searcher = PageSearcher::new(client(&mock_server), RetryConfig::none());
    assert_eq!(
        searcher.search("x", SearchPaging::default()).await,
        SearchResult::Error(envelope["error"].clone())
    );
}

#[tokio::test]
async fn search_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let searcher = PageSearcher::new(client(&mock_server), RetryConfig::none());
    assert_eq!(
        searcher.search("x", SearchPaging::default()).await,
        SearchResult::Error(serde_json::Value::String("Bad Gateway".to_string()))
    );
}
