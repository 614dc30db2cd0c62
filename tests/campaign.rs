mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use campaign_dashboard::user::manager::fetch_users;
use campaign_dashboard::{configure, AddedCampaignsBody, Campaign, CampaignListBody};
use serde_json::{json, Value};

use common::{test_state, test_users};

#[actix_web::test]
async fn lists_seeded_campaigns_in_order() {
    let state = test_state(vec![Some(test_users())]);
    fetch_users(&state).await.unwrap();
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/campaigns").to_request();
    let body: CampaignListBody = test::call_and_read_body_json(&app, req).await;

    let names: Vec<_> = body.campaigns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Divavu",
            "Jaxspan",
            "Miboo",
            "Trilith",
            "Layo",
            "Photojam",
            "Blogtag",
            "Rhyzio",
            "Zoomcast",
            "Realbridge"
        ]
    );
    assert_eq!(body.title, "Campaigns");
    assert_eq!(body.subtitle, "Showing 10 campaigns");
    assert_eq!(body.empty_message, None);
    assert_eq!(body.users_error, None);

    let divavu = &body.campaigns[0];
    assert_eq!(divavu.start_date, "Sep 19, 2021");
    assert_eq!(divavu.end_date, "Mar 9, 2023");
    assert_eq!(divavu.budget, "$88,377.00");
    assert_eq!(divavu.user_name, "Clementine Bauch");

    let layo = &body.campaigns[4];
    assert_eq!(layo.user_name, "Unknown User");
}

#[actix_web::test]
async fn filters_by_name_and_start_date() {
    let state = test_state(vec![Some(test_users())]);
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/campaigns?search=O&start_date=1%2F1%2F2021")
        .to_request();
    let body: CampaignListBody = test::call_and_read_body_json(&app, req).await;

    // names containing "o" that start in 2021 or later
    let names: Vec<_> = body.campaigns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Miboo", "Zoomcast"]);
    assert_eq!(body.title, "Campaigns (2 of 10)");
    assert_eq!(body.subtitle, "Showing 2 campaigns");
}

#[actix_web::test]
async fn inverted_range_returns_nothing() {
    let state = test_state(vec![Some(test_users())]);
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/campaigns?start_date=2023-01-01&end_date=2020-01-01")
        .to_request();
    let body: CampaignListBody = test::call_and_read_body_json(&app, req).await;

    assert!(body.campaigns.is_empty());
    assert_eq!(body.title, "Campaigns (0 of 10)");
    assert_eq!(
        body.empty_message.as_deref(),
        Some("No campaigns found matching your criteria.")
    );
}

#[actix_web::test]
async fn unreadable_filter_date_is_rejected() {
    let state = test_state(vec![Some(test_users())]);
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/campaigns?end_date=whenever")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], "E4001004");
    assert_eq!(body["error_meta"]["field"], "end_date");
}

#[actix_web::test]
async fn create_campaign() {
    let state = test_state(vec![Some(test_users())]);
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/campaigns")
        .set_json(json!({
            "name": "The Green Bean Brigade",
            "startDate": "2024-03-01",
            "endDate": "2024-06-30",
            "budget": 5000,
            "userId": 2
        }))
        .to_request();
    let campaign: Campaign = test::call_and_read_body_json(&app, req).await;

    assert_eq!(campaign.id, None);
    assert_eq!(campaign.name, "The Green Bean Brigade");
    assert_eq!(campaign.start_date, "03/01/2024");
    assert_eq!(campaign.end_date, "06/30/2024");

    let req = test::TestRequest::get()
        .uri("/campaigns?search=green")
        .to_request();
    let body: CampaignListBody = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.campaigns.len(), 1);
    assert_eq!(body.campaigns[0].budget, "$5,000.00");
    assert_eq!(body.campaigns[0].start_date, "Mar 1, 2024");
}

#[actix_web::test]
async fn invalid_campaign_reports_violations() {
    let state = test_state(vec![Some(test_users())]);
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/campaigns")
        .set_json(json!({
            "name": "",
            "startDate": "6/1/2024",
            "endDate": "5/1/2024",
            "budget": 0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], "E4001003");
    assert_eq!(
        body["error_meta"]["violations"],
        json!([
            { "field": "name", "message": "Campaign name is required" },
            { "field": "budget", "message": "Budget must be greater than 0" },
            { "field": "endDate", "message": "End date must be after start date" }
        ])
    );
    assert_eq!(state.campaigns.read().await.campaigns().len(), 10);
}

#[actix_web::test]
async fn batch_appends_campaigns_in_order() {
    let state = test_state(vec![Some(test_users())]);
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/campaigns/batch")
        .set_json(json!([
            {
                "id": "test-1",
                "name": "Test Campaign 1",
                "startDate": "2024-01-01",
                "endDate": "2024-12-31",
                "budget": 1000,
                "userId": 1
            },
            {
                "id": "test-2",
                "name": "Test Campaign 2",
                "startDate": "2024-02-01",
                "endDate": "2024-11-30",
                "budget": 2000,
                "userId": 2
            }
        ]))
        .to_request();
    let added: AddedCampaignsBody = test::call_and_read_body_json(&app, req).await;
    assert_eq!(added.added, 2);

    let req = test::TestRequest::get().uri("/campaigns").to_request();
    let body: CampaignListBody = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.campaigns.len(), 12);
    assert_eq!(body.campaigns[10].id.as_deref(), Some("test-1"));
    assert_eq!(body.campaigns[11].id.as_deref(), Some("test-2"));
}

#[actix_web::test]
async fn batch_requires_an_array() {
    let state = test_state(vec![Some(test_users())]);
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/campaigns/batch")
        .set_json(json!({ "name": "Not a list" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], "E4001000");
    assert_eq!(state.campaigns.read().await.campaigns().len(), 10);
}

#[actix_web::test]
async fn unknown_path_is_not_found() {
    let state = test_state(vec![Some(test_users())]);
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error_code"], "E4041000");
}
