//! HTTP-level tests of the course library API over the in-memory backend.

use axum::http::header::{ACCEPT, ALLOW, CACHE_CONTROL, CONTENT_TYPE, HeaderValue, LOCATION};
use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use course_library::config::AppConfig;
use course_library::core::negotiation::HATEOAS_MEDIA_TYPE;
use course_library::entities::CourseLibraryModule;
use course_library::server::ServerBuilder;
use course_library::storage::InMemoryCourseLibrary;
use course_library::storage::seed::{BERRY_ID, NANCY_ID};
use serde_json::{Value, json};
use uuid::Uuid;

fn make_server() -> TestServer {
    make_server_with(AppConfig::default())
}

fn make_server_with(config: AppConfig) -> TestServer {
    let app = ServerBuilder::new()
        .with_repository(InMemoryCourseLibrary::seeded().unwrap())
        .with_config(config)
        .register_module(CourseLibraryModule)
        .build()
        .unwrap();
    TestServer::new(app).unwrap()
}

fn pagination(response: &axum_test::TestResponse) -> Value {
    let header = response
        .headers()
        .get("x-pagination")
        .expect("X-Pagination header missing");
    serde_json::from_str(header.to_str().unwrap()).unwrap()
}

/// Path and query of a `Location` header, without scheme and host
fn location_path(response: &axum_test::TestResponse) -> String {
    let location = response.headers()[LOCATION].to_str().unwrap();
    let start = location.find("/api/").expect("location outside /api");
    location[start..].to_string()
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|author| author["name"].as_str().unwrap())
        .collect()
}

fn new_author() -> Value {
    json!({
        "firstName": "Jane",
        "lastName": "Skewers",
        "dateOfBirth": "1968-03-04T00:00:00+01:00",
        "mainCategory": "Rum",
        "courses": [
            { "title": "Top Rums", "description": "Tasting the finest rums of the seven seas." }
        ]
    })
}

// ==============================================================
// Health
// ==============================================================

#[tokio::test]
async fn test_health_routes() {
    let server = make_server();

    for path in ["/health", "/healthz"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "course-library");
    }
}

// ==============================================================
// Authors collection
// ==============================================================

#[tokio::test]
async fn test_list_authors_defaults() {
    let server = make_server();

    let response = server.get("/api/authors").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        names(&body),
        vec![
            "Arnold Hunter",
            "Berry Griffin Beak Eldritch",
            "Eli Ivory Bones Sweet",
            "Nancy Rye",
            "Rushford Mour",
            "Seabury Toxic Reyes",
        ]
    );
    let first = body[0].as_object().unwrap();
    let mut keys: Vec<_> = first.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["age", "id", "mainCategory", "name"]);

    let metadata = pagination(&response);
    assert_eq!(metadata["totalCount"], 6);
    assert_eq!(metadata["pageSize"], 10);
    assert_eq!(metadata["currentPage"], 1);
    assert_eq!(metadata["totalPages"], 1);
    assert!(metadata["previousPageLink"].is_null());
    assert!(metadata["nextPageLink"].is_null());
}

#[tokio::test]
async fn test_list_authors_head_carries_pagination() {
    let server = make_server();

    let response = server.method(Method::HEAD, "/api/authors").await;
    response.assert_status_ok();
    assert_eq!(pagination(&response)["totalCount"], 6);
}

#[tokio::test]
async fn test_list_authors_order_by_age_desc() {
    let server = make_server();

    let response = server
        .get("/api/authors")
        .add_query_param("orderBy", "age desc")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    // Oldest first: Berry was born in 1650
    assert_eq!(names(&body)[0], "Berry Griffin Beak Eldritch");
    assert_eq!(names(&body)[5], "Rushford Mour");
}

#[tokio::test]
async fn test_list_authors_compound_order_is_case_insensitive() {
    let server = make_server();

    let response = server
        .get("/api/authors")
        .add_query_param("orderBy", "MainCategory, Name DESC")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        names(&body),
        vec![
            "Rushford Mour",
            "Seabury Toxic Reyes",
            "Nancy Rye",
            "Berry Griffin Beak Eldritch",
            "Eli Ivory Bones Sweet",
            "Arnold Hunter",
        ]
    );
}

#[tokio::test]
async fn test_list_authors_rejects_unmapped_order_by() {
    let server = make_server();

    let response = server
        .get("/api/authors")
        .add_query_param("orderBy", "dateOfBirth")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "UNMAPPED_SORT_FIELD");
    assert_eq!(body["details"]["parameter"], "orderBy");
}

#[tokio::test]
async fn test_list_authors_rejects_bad_direction() {
    let server = make_server();

    let response = server
        .get("/api/authors")
        .add_query_param("orderBy", "name sideways")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_authors_shapes_fields_in_requested_order() {
    let server = make_server();

    let response = server
        .get("/api/authors")
        .add_query_param("fields", "Name, id")
        .add_query_param("pageSize", "1")
        .await;
    response.assert_status_ok();

    let text = response.text();
    assert!(text.starts_with(r#"[{"name":"Arnold Hunter","id":""#), "{text}");
    let body: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body[0].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_authors_rejects_unknown_field() {
    let server = make_server();

    let response = server
        .get("/api/authors")
        .add_query_param("fields", "id,shoeSize")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "UNKNOWN_FIELD");
    assert_eq!(body["details"]["field"], "shoeSize");
}

#[tokio::test]
async fn test_list_authors_pages_with_links() {
    let server = make_server();

    let response = server
        .get("/api/authors")
        .add_query_param("pageSize", "2")
        .add_query_param("pageNumber", "2")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(names(&body), vec!["Eli Ivory Bones Sweet", "Nancy Rye"]);

    let metadata = pagination(&response);
    assert_eq!(metadata["currentPage"], 2);
    assert_eq!(metadata["totalPages"], 3);
    let previous = metadata["previousPageLink"].as_str().unwrap();
    let next = metadata["nextPageLink"].as_str().unwrap();
    assert!(previous.contains("/api/authors?"));
    assert!(previous.contains("pageNumber=1"));
    assert!(previous.contains("pageSize=2"));
    assert!(next.contains("pageNumber=3"));
}

#[tokio::test]
async fn test_list_authors_caps_page_size() {
    let mut config = AppConfig::default();
    config.paging.default_page_size = 2;
    config.paging.max_page_size = 3;
    let server = make_server_with(config);

    let response = server.get("/api/authors").await;
    assert_eq!(pagination(&response)["pageSize"], 2);

    let response = server
        .get("/api/authors")
        .add_query_param("pageSize", "50")
        .await;
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(pagination(&response)["pageSize"], 3);
}

#[tokio::test]
async fn test_list_authors_huge_page_number_is_empty() {
    let server = make_server();

    let response = server
        .get("/api/authors")
        .add_query_param("pageNumber", "18446744073709551615")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body.as_array().unwrap().is_empty());

    let metadata = pagination(&response);
    assert_eq!(metadata["totalCount"], 6);
    assert_eq!(metadata["currentPage"], u64::MAX);
    assert!(metadata["nextPageLink"].is_null());
    assert!(metadata["previousPageLink"].is_string());
}

#[tokio::test]
async fn test_list_authors_filters_and_searches() {
    let server = make_server();

    let response = server
        .get("/api/authors")
        .add_query_param("mainCategory", " singing ")
        .await;
    let body: Value = response.json();
    assert_eq!(names(&body), vec!["Arnold Hunter", "Eli Ivory Bones Sweet"]);

    let response = server
        .get("/api/authors")
        .add_query_param("searchQuery", "rum")
        .await;
    let body: Value = response.json();
    assert_eq!(names(&body), vec!["Nancy Rye"]);
}

#[tokio::test]
async fn test_list_authors_rejects_malformed_query() {
    let server = make_server();

    let response = server.get("/api/authors?pageNumber=first").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_QUERY");
}

// ==============================================================
// Content negotiation
// ==============================================================

#[tokio::test]
async fn test_unsupported_accept_is_not_acceptable() {
    let server = make_server();

    let response = server
        .get("/api/authors")
        .add_header(ACCEPT, HeaderValue::from_static("application/xml"))
        .await;
    response.assert_status(StatusCode::NOT_ACCEPTABLE);

    let response = server
        .get(&format!("/api/authors/{}/courses", BERRY_ID))
        .add_header(ACCEPT, HeaderValue::from_static("text/html"))
        .await;
    response.assert_status(StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn test_hateoas_collection_has_links() {
    let server = make_server();

    let response = server
        .get("/api/authors")
        .add_query_param("pageSize", "2")
        .add_query_param("fields", "name")
        .add_header(ACCEPT, HeaderValue::from_static(HATEOAS_MEDIA_TYPE))
        .await;
    response.assert_status_ok();
    assert_eq!(response.headers()[CONTENT_TYPE], HATEOAS_MEDIA_TYPE);

    let body: Value = response.json();
    let value = body["value"].as_array().unwrap();
    assert_eq!(value.len(), 2);
    assert_eq!(value[0]["name"], "Arnold Hunter");
    assert!(value[0].get("id").is_none());

    let author_links = value[0]["links"].as_array().unwrap();
    let rels: Vec<_> = author_links.iter().map(|link| link["rel"].as_str().unwrap()).collect();
    assert_eq!(
        rels,
        vec!["self", "delete_author", "create_course_for_author", "courses"]
    );

    let rels: Vec<_> = body["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["rel"].as_str().unwrap())
        .collect();
    assert_eq!(rels, vec!["self", "nextPage"]);

    // Page links live in the body for this media type
    let metadata = pagination(&response);
    assert!(metadata["nextPageLink"].is_null());
}

#[tokio::test]
async fn test_hateoas_single_author_has_links() {
    let server = make_server();

    let response = server
        .get(&format!("/api/authors/{}", NANCY_ID))
        .add_header(ACCEPT, HeaderValue::from_static(HATEOAS_MEDIA_TYPE))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["name"], "Nancy Rye");
    assert_eq!(body["links"].as_array().unwrap().len(), 4);
}

// ==============================================================
// Single author
// ==============================================================

#[tokio::test]
async fn test_get_author() {
    let server = make_server();

    let response = server.get(&format!("/api/authors/{}", NANCY_ID)).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["id"], NANCY_ID.to_string());
    assert_eq!(body["name"], "Nancy Rye");
    assert_eq!(body["mainCategory"], "Rum");
    assert!(body["age"].as_i64().unwrap() > 300);
}

#[tokio::test]
async fn test_get_author_shaped() {
    let server = make_server();

    let response = server
        .get(&format!("/api/authors/{}", NANCY_ID))
        .add_query_param("fields", "mainCategory")
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), r#"{"mainCategory":"Rum"}"#);

    let response = server
        .get(&format!("/api/authors/{}", NANCY_ID))
        .add_query_param("fields", "hat")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_author_errors() {
    let server = make_server();

    let response = server.get(&format!("/api/authors/{}", Uuid::new_v4())).await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "RESOURCE_NOT_FOUND");

    let response = server.get("/api/authors/not-a-uuid").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_ID");
}

#[tokio::test]
async fn test_create_author_with_courses() {
    let server = make_server();

    let response = server.post("/api/authors").json(&new_author()).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["name"], "Jane Skewers");
    assert_eq!(body["mainCategory"], "Rum");
    let id = body["id"].as_str().unwrap();
    assert_eq!(location_path(&response), format!("/api/authors/{}", id));

    let courses = server.get(&format!("/api/authors/{}/courses", id)).await;
    courses.assert_status_ok();
    let courses: Value = courses.json();
    assert_eq!(courses[0]["title"], "Top Rums");
    assert_eq!(courses[0]["authorId"], id);

    let listed = server.get("/api/authors").await;
    assert_eq!(pagination(&listed)["totalCount"], 7);
}

#[tokio::test]
async fn test_create_author_validation() {
    let server = make_server();

    let mut author = new_author();
    author["firstName"] = Value::Null;
    author["courses"][0]["description"] = json!("Top Rums");

    let response = server.post("/api/authors").json(&author).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let fields: Vec<_> = body["details"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|error| error["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"firstName"));
    assert!(fields.contains(&"courses[0]"));
}

#[tokio::test]
async fn test_create_author_rejects_malformed_json() {
    let server = make_server();

    let response = server
        .post("/api/authors")
        .text("{ not json")
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_authors_options() {
    let server = make_server();

    let response = server.method(Method::OPTIONS, "/api/authors").await;
    response.assert_status_ok();
    assert_eq!(response.headers()[ALLOW], "GET,OPTIONS,POST");
}

#[tokio::test]
async fn test_delete_author_cascades_to_courses() {
    let server = make_server();

    let response = server.delete(&format!("/api/authors/{}", BERRY_ID)).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/authors/{}", BERRY_ID)).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.get(&format!("/api/authors/{}/courses", BERRY_ID)).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.delete(&format!("/api/authors/{}", BERRY_ID)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

// ==============================================================
// Courses
// ==============================================================

#[tokio::test]
async fn test_list_courses_for_author() {
    let server = make_server();

    let response = server.get(&format!("/api/authors/{}/courses", BERRY_ID)).await;
    response.assert_status_ok();

    let body: Value = response.json();
    let titles: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|course| course["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Commandeering a Ship Without Getting Caught",
            "Overthrowing Mutiny"
        ]
    );

    let response = server
        .get(&format!("/api/authors/{}/courses", Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_course_reads_are_cacheable() {
    let server = make_server();

    let list = server.get(&format!("/api/authors/{}/courses", NANCY_ID)).await;
    assert_eq!(list.headers()[CACHE_CONTROL], "public, max-age=120");

    let course_id = list.json::<Value>()[0]["id"].as_str().unwrap().to_string();
    let response = server
        .get(&format!("/api/authors/{}/courses/{}", NANCY_ID, course_id))
        .await;
    response.assert_status_ok();
    assert_eq!(response.headers()[CACHE_CONTROL], "public, max-age=120");

    // Missing courses and writes are not cached
    let missing = server
        .get(&format!("/api/authors/{}/courses/{}", NANCY_ID, Uuid::new_v4()))
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert!(missing.headers().get(CACHE_CONTROL).is_none());

    let authors = server.get("/api/authors").await;
    assert!(authors.headers().get(CACHE_CONTROL).is_none());
}

#[tokio::test]
async fn test_cache_max_age_comes_from_config() {
    let mut config = AppConfig::default();
    config.cache.max_age_seconds = 60;
    let server = make_server_with(config);

    let response = server.get(&format!("/api/authors/{}/courses", NANCY_ID)).await;
    assert_eq!(response.headers()[CACHE_CONTROL], "public, max-age=60");
}

#[tokio::test]
async fn test_get_course_of_other_author_is_not_found() {
    let server = make_server();

    let list = server.get(&format!("/api/authors/{}/courses", NANCY_ID)).await;
    let course_id = list.json::<Value>()[0]["id"].as_str().unwrap().to_string();

    let response = server
        .get(&format!("/api/authors/{}/courses/{}", BERRY_ID, course_id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_course() {
    let server = make_server();

    let response = server
        .post(&format!("/api/authors/{}/courses", NANCY_ID))
        .json(&json!({ "title": "Rum Cellars", "description": "Keeping a cellar stocked." }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert!(response.headers().get(CACHE_CONTROL).is_none());

    let body: Value = response.json();
    assert_eq!(body["title"], "Rum Cellars");
    assert_eq!(body["authorId"], NANCY_ID.to_string());
    let id = body["id"].as_str().unwrap();
    assert_eq!(
        location_path(&response),
        format!("/api/authors/{}/courses/{}", NANCY_ID, id)
    );

    let fetched = server.get(&location_path(&response)).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["title"], "Rum Cellars");
}

#[tokio::test]
async fn test_create_course_validation() {
    let server = make_server();
    let path = format!("/api/authors/{}/courses", NANCY_ID);

    let response = server
        .post(&path)
        .json(&json!({ "title": "Same", "description": "Same" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(
        body["details"]["fields"][0]["message"],
        "The provided description should be different from the title."
    );

    let response = server
        .post(&path)
        .json(&json!({ "title": "x".repeat(101) }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let response = server
        .post(&format!("/api/authors/{}/courses", Uuid::new_v4()))
        .json(&json!({ "title": "Orphan" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_course_upserts() {
    let server = make_server();
    let course_id = Uuid::new_v4();
    let path = format!("/api/authors/{}/courses/{}", NANCY_ID, course_id);

    let response = server
        .put(&path)
        .json(&json!({ "title": "Rum 101", "description": "The basics." }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"], course_id.to_string());
    assert_eq!(location_path(&response), path);

    let response = server
        .put(&path)
        .json(&json!({ "title": "Rum 102", "description": "Beyond the basics." }))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let fetched: Value = server.get(&path).await.json();
    assert_eq!(fetched["title"], "Rum 102");
    assert_eq!(fetched["description"], "Beyond the basics.");
}

#[tokio::test]
async fn test_put_course_of_other_author_conflicts() {
    let server = make_server();

    let berry_courses: Value = server
        .get(&format!("/api/authors/{}/courses", BERRY_ID))
        .await
        .json();
    let course_id = berry_courses[0]["id"].as_str().unwrap().to_string();

    let response = server
        .put(&format!("/api/authors/{}/courses/{}", NANCY_ID, course_id))
        .json(&json!({ "title": "Rum 101", "description": "The basics." }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["code"], "RESOURCE_CONFLICT");
    assert_eq!(body["details"]["id"], course_id);

    let untouched: Value = server
        .get(&format!("/api/authors/{}/courses/{}", BERRY_ID, course_id))
        .await
        .json();
    assert_eq!(untouched["title"], berry_courses[0]["title"]);
    assert!(
        server
            .get(&format!("/api/authors/{}/courses", NANCY_ID))
            .await
            .json::<Value>()
            .as_array()
            .unwrap()
            .iter()
            .all(|course| course["id"] != course_id.as_str())
    );
}

#[tokio::test]
async fn test_put_course_requires_description() {
    let server = make_server();

    let response = server
        .put(&format!("/api/authors/{}/courses/{}", NANCY_ID, Uuid::new_v4()))
        .json(&json!({ "title": "Rum 101" }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["details"]["fields"][0]["field"], "description");
}

#[tokio::test]
async fn test_delete_course() {
    let server = make_server();

    let list = server.get(&format!("/api/authors/{}/courses", NANCY_ID)).await;
    let course_id = list.json::<Value>()[0]["id"].as_str().unwrap().to_string();
    let path = format!("/api/authors/{}/courses/{}", NANCY_ID, course_id);

    server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
    server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
    server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
}

// ==============================================================
// Author collections
// ==============================================================

#[tokio::test]
async fn test_create_and_fetch_author_collection() {
    let server = make_server();

    let mut second = new_author();
    second["firstName"] = json!("John");
    second["courses"] = json!([]);

    let response = server
        .post("/api/authorcollections")
        .json(&json!([new_author(), second]))
        .await;
    response.assert_status(StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(names(&created), vec!["Jane Skewers", "John Skewers"]);

    let location = location_path(&response);
    assert!(location.starts_with("/api/authorcollections/("));

    let fetched = server.get(&location).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), created);
}

#[tokio::test]
async fn test_author_collection_validation() {
    let server = make_server();

    let mut invalid = new_author();
    invalid["lastName"] = json!("x".repeat(51));

    let response = server
        .post("/api/authorcollections")
        .json(&json!([new_author(), invalid]))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["details"]["fields"][0]["field"], "authors[1].lastName");
}

#[tokio::test]
async fn test_get_author_collection_errors() {
    let server = make_server();

    let response = server
        .get(&format!("/api/authorcollections/({},{})", NANCY_ID, Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "COLLECTION_INCOMPLETE");

    let response = server
        .get(&format!("/api/authorcollections/({},oops)", NANCY_ID))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_ID_LIST");

    let response = server
        .get(&format!("/api/authorcollections/({},{})", NANCY_ID, BERRY_ID))
        .await;
    response.assert_status_ok();
    assert_eq!(
        names(&response.json()),
        vec!["Nancy Rye", "Berry Griffin Beak Eldritch"]
    );
}
