use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Map, Value};

use crate::advisor::{advisor_router, CareerAdvisor};
use crate::catalog::{CareerRecord, Catalog};

pub(super) fn career(id: i64, name: &str, attributes: Value) -> CareerRecord {
    let mut body = json!({
        "id": id,
        "name": name,
        "detail": format!("{name} detail"),
    });
    if let (Some(target), Some(extra)) = (body.as_object_mut(), attributes.as_object()) {
        target.extend(extra.clone());
    }
    serde_json::from_value(body).expect("fixture record parses")
}

pub(super) fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        career(
            1,
            "Data Scientist",
            json!({
                "people_person": 0, "tech_comfort": 1, "public_speaking": 0, "artistic": 0,
                "outdoor": 0, "teamwork": 0, "data_skill": 1, "preferred_work_env": 0,
                "creativity_level": 2
            }),
        ),
        career(
            2,
            "Event Planner",
            json!({
                "people_person": 1, "tech_comfort": 0, "public_speaking": 1, "artistic": 1,
                "outdoor": 0, "teamwork": 1, "data_skill": 0, "preferred_work_env": 1,
                "creativity_level": 2
            }),
        ),
        career(
            3,
            "Forest Ranger",
            json!({
                "people_person": 0, "tech_comfort": 0, "public_speaking": 0, "artistic": 0,
                "outdoor": 1, "teamwork": 0, "data_skill": 0, "preferred_work_env": 1,
                "creativity_level": 1
            }),
        ),
        career(
            4,
            "Data Scientist",
            json!({
                "people_person": 0, "tech_comfort": 1, "public_speaking": 0, "artistic": 0,
                "outdoor": 0, "teamwork": 0, "data_skill": 1, "preferred_work_env": 0,
                "creativity_level": 2
            }),
        ),
        career(
            5,
            "Accountant",
            json!({
                "people_person": 0, "tech_comfort": 1, "public_speaking": 0, "artistic": 0,
                "outdoor": 0, "teamwork": 0, "data_skill": 1, "preferred_work_env": 0,
                "creativity_level": 0
            }),
        ),
        career(
            6,
            "Graphic Designer",
            json!({
                "people_person": 0, "tech_comfort": 1, "public_speaking": 0, "artistic": 1,
                "outdoor": 0, "teamwork": 0, "data_skill": 0, "preferred_work_env": 0,
                "creativity_level": 3
            }),
        ),
        career(
            7,
            "Sales Manager",
            json!({
                "people_person": 1, "tech_comfort": 0, "public_speaking": 1, "artistic": 0,
                "outdoor": 0, "teamwork": 1, "data_skill": 1, "preferred_work_env": 1,
                "creativity_level": 1
            }),
        ),
    ])
}

pub(super) fn advisor() -> Arc<CareerAdvisor> {
    Arc::new(CareerAdvisor::standard(Arc::new(sample_catalog())))
}

pub(super) fn router() -> axum::Router {
    advisor_router(advisor())
}

pub(super) fn mbti_answers(pattern: &[&str], total: usize) -> Value {
    let map: Map<String, Value> = pattern
        .iter()
        .cycle()
        .take(total)
        .enumerate()
        .map(|(idx, letter)| (format!("q{}", idx + 1), json!(letter)))
        .collect();
    Value::Object(map)
}

pub(super) fn data_scientist_answers() -> Value {
    json!({
        "people_person": 0, "tech_comfort": 1, "public_speaking": 0, "artistic": 0,
        "outdoor": 0, "teamwork": 0, "data_skill": 1, "preferred_work_env": 0,
        "creativity_level": 2
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}
