use hh_vacancy_finder::search::SearchRequest;
use hh_vacancy_finder::{ApiError, HhClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HhClient {
    HhClient::new(&server.uri(), "hh-vacancy-finder-tests").expect("client builds")
}

#[tokio::test]
async fn fetches_specializations_with_agent_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/specializations"))
        .and(header("HH-User-Agent", "hh-vacancy-finder-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "1", "name": "IT", "specializations": [
                {"id": "1.221", "name": "Программирование", "laboring": false}
            ]}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let groups = client(&server).specializations().await.expect("specializations");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].specializations[0].id, "1.221");
}

#[tokio::test]
async fn fetches_metro_for_city() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/metro/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "name": "Москва",
            "lines": [{"id": "5", "name": "Кольцевая", "hex_color": "915133", "stations": [
                {"id": "5.1", "name": "Курская", "lat": 55.758, "lng": 37.659, "order": 0}
            ]}]
        })))
        .mount(&server)
        .await;

    let city = client(&server).metro(1).await.expect("metro");
    assert_eq!(city.lines[0].stations[0].name, "Курская");
}

#[tokio::test]
async fn search_sends_area_text_and_metro() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .and(query_param("area", "1"))
        .and(query_param("text", "rust developer"))
        .and(query_param("metro", "5.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "found": 0,
            "page": 0,
            "pages": 0,
            "per_page": 20
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = SearchRequest {
        area: 1,
        text: "rust developer".into(),
        metro: Some("5.1".into()),
    };
    let page = client(&server).vacancies(&request).await.expect("vacancies");
    assert!(page.items.is_empty());
    assert_eq!(page.found, Some(0));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/specializations"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client(&server).specializations().await.unwrap_err();
    match err {
        ApiError::Status { status, url } => {
            assert_eq!(status.as_u16(), 403);
            assert!(url.ends_with("/specializations"), "{url}");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/metro/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client(&server).metro(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }), "{err:?}");
}
