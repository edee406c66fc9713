//! End-to-end unit flows through the full router over an in-memory store.

use salvo::{
    http::StatusCode,
    prelude::*,
    test::{ResponseExt, TestClient},
};
use serde_json::{Value, json};
use testresult::TestResult;
use uuid::Uuid;

use units_app::domain::units::types::{UnitStatus, UnitType};

use crate::{
    envelope::Envelope,
    test_helpers::in_memory_service,
    units::responses::{UnitDetailResponse, UnitResponse, UnitsPageResponse},
};

const BASE: &str = "http://example.com/api/unit";

async fn create(service: &Service, body: Value) -> TestResult<(StatusCode, Envelope<UnitResponse>)> {
    let mut res = TestClient::post(BASE).json(&body).send(service).await;
    let envelope = res.take_json().await?;

    Ok((res.status_code.unwrap_or_default(), envelope))
}

async fn create_id(service: &Service, name: &str, unit_type: &str, status: &str) -> TestResult<String> {
    let (_, envelope) = create(
        service,
        json!({ "name": name, "type": unit_type, "status": status }),
    )
    .await?;

    Ok(envelope.data.ok_or("create returned no data")?.id)
}

#[tokio::test]
async fn create_returns_the_stored_unit() -> TestResult {
    let service = in_memory_service();

    let (status, envelope) = create(
        &service,
        json!({ "name": "Capsule A", "type": "capsule", "status": "Available" }),
    )
    .await?;

    let data = envelope.data.ok_or("missing data")?;

    assert_eq!(status, StatusCode::CREATED);
    assert!(envelope.success, "create should succeed");
    assert_eq!(data.name, "Capsule A");
    assert!(Uuid::parse_str(&data.id).is_ok(), "id should be a uuid");

    Ok(())
}

#[tokio::test]
async fn create_without_name_is_rejected() -> TestResult {
    let service = in_memory_service();

    let mut res = TestClient::post(BASE)
        .json(&json!({ "name": "", "type": "capsule", "status": "Available" }))
        .send(&service)
        .await;

    let envelope: Envelope<Value> = res.take_json().await?;

    assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    assert!(!envelope.success, "create should fail");
    assert!(
        envelope.message.contains("unit name is required"),
        "unexpected message {}",
        envelope.message
    );
    assert!(envelope.data.is_none(), "failed response should carry no data");

    Ok(())
}

#[tokio::test]
async fn create_with_unknown_type_is_rejected() -> TestResult {
    let service = in_memory_service();

    let mut res = TestClient::post(BASE)
        .json(&json!({ "name": "X", "type": "x", "status": "Available" }))
        .send(&service)
        .await;

    let envelope: Envelope<Value> = res.take_json().await?;

    assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    assert_eq!(
        envelope.message,
        "invalid unit type, must be 'cabin' or 'capsule'"
    );

    Ok(())
}

#[tokio::test]
async fn occupied_unit_cannot_become_available() -> TestResult {
    let service = in_memory_service();
    let id = create_id(&service, "Lakeside", "cabin", "Occupied").await?;

    let mut res = TestClient::put(format!("{BASE}/{id}"))
        .json(&json!({ "name": "X", "type": "cabin", "status": "Available" }))
        .send(&service)
        .await;

    let envelope: Envelope<Value> = res.take_json().await?;

    assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    assert_eq!(
        envelope.message,
        "unit cannot go directly from occupied to available"
    );

    let mut res = TestClient::get(format!("{BASE}/{id}")).send(&service).await;
    let envelope: Envelope<UnitDetailResponse> = res.take_json().await?;
    let detail = envelope.data.ok_or("missing data")?;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    assert_eq!(detail.status, "Occupied");
    assert_eq!(detail.name, "Lakeside");

    Ok(())
}

#[tokio::test]
async fn occupied_unit_can_go_through_cleaning() -> TestResult {
    let service = in_memory_service();
    let id = create_id(&service, "Lakeside", "cabin", "Occupied").await?;

    for status in ["Cleaning In Progress", "Available"] {
        let res = TestClient::put(format!("{BASE}/{id}"))
            .json(&json!({ "name": "Lakeside", "type": "cabin", "status": status }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK), "update to {status}");
    }

    Ok(())
}

#[tokio::test]
async fn list_pages_in_name_order() -> TestResult {
    let service = in_memory_service();

    for name in ["Echo", "Bravo", "Delta", "Alpha", "Charlie"] {
        create_id(&service, name, "capsule", "Available").await?;
    }

    let mut res = TestClient::get(format!("{BASE}?page=1&size=2"))
        .send(&service)
        .await;

    let envelope: Envelope<UnitsPageResponse> = res.take_json().await?;
    let page = envelope.data.ok_or("missing data")?;
    let names: Vec<_> = page.content.iter().map(|unit| unit.name.as_str()).collect();

    assert_eq!(res.status_code, Some(StatusCode::OK));
    assert_eq!(names, ["Alpha", "Bravo"]);
    assert_eq!(page.pagination.total, 5);
    assert_eq!(page.pagination.total_pages, 3);

    Ok(())
}

#[tokio::test]
async fn list_filters_by_type_and_name() -> TestResult {
    let service = in_memory_service();

    create_id(&service, "Forest Cabin", "cabin", "Available").await?;
    create_id(&service, "Capsule Cabin", "capsule", "Available").await?;
    create_id(&service, "Lakeside", "cabin", "Available").await?;

    let mut res = TestClient::get(format!("{BASE}?type=cabin&name=CABIN"))
        .send(&service)
        .await;

    let envelope: Envelope<UnitsPageResponse> = res.take_json().await?;
    let page = envelope.data.ok_or("missing data")?;

    assert_eq!(page.pagination.total, 1);
    assert_eq!(
        page.content.first().map(|unit| unit.name.as_str()),
        Some("Forest Cabin")
    );

    Ok(())
}

#[tokio::test]
async fn deleted_unit_is_gone() -> TestResult {
    let service = in_memory_service();
    let id = create_id(&service, "Capsule A", "capsule", "Available").await?;

    let res = TestClient::delete(format!("{BASE}/{id}")).send(&service).await;

    assert_eq!(res.status_code, Some(StatusCode::OK));

    let mut res = TestClient::get(format!("{BASE}/{id}")).send(&service).await;
    let envelope: Envelope<Value> = res.take_json().await?;

    assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    assert_eq!(envelope.message, "unit with that id was not found");

    let res = TestClient::delete(format!("{BASE}/{id}")).send(&service).await;

    assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

    Ok(())
}

#[tokio::test]
async fn every_type_and_status_round_trips() -> TestResult {
    let service = in_memory_service();

    for unit_type in UnitType::ALL {
        for status in UnitStatus::ALL {
            let id = create_id(&service, "Round Trip", unit_type.as_str(), status.as_str()).await?;

            let mut res = TestClient::get(format!("{BASE}/{id}")).send(&service).await;
            let envelope: Envelope<UnitDetailResponse> = res.take_json().await?;
            let detail = envelope.data.ok_or("missing data")?;

            assert_eq!(res.status_code, Some(StatusCode::OK));
            assert_eq!(detail.unit_type, unit_type.as_str());
            assert_eq!(detail.status, status.as_str());
        }
    }

    Ok(())
}

#[tokio::test]
async fn null_field_is_reported_as_required() -> TestResult {
    let service = in_memory_service();

    let mut res = TestClient::post(BASE)
        .json(&json!({ "name": null, "type": "capsule", "status": "Available" }))
        .send(&service)
        .await;

    let envelope: Envelope<Value> = res.take_json().await?;

    assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    assert_eq!(envelope.message, "unit name is required");

    Ok(())
}
