use std::sync::Arc;

use serde_json::json;
use warp::http::StatusCode;
use warp::Filter;

use crate::outbound::{ContactForm, Delivery, Mailer, SubmissionError};
use crate::roster::RosterManager;

pub fn api_routes(
    roster: Arc<RosterManager>,
    mailer: Arc<Mailer>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path("api").and(
        health(roster.clone())
            .or(get_roster(roster.clone()))
            .or(get_creator(roster))
            .or(post_contact(mailer)),
    )
}

pub fn with_roster(
    roster: Arc<RosterManager>,
) -> impl Filter<Extract = (Arc<RosterManager>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || roster.clone())
}

pub fn with_mailer(
    mailer: Arc<Mailer>,
) -> impl Filter<Extract = (Arc<Mailer>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || mailer.clone())
}

fn health(
    roster: Arc<RosterManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_roster(roster))
        .and_then(handle_health)
}

fn get_roster(
    roster: Arc<RosterManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path("roster")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_roster(roster))
        .and_then(handle_get_roster)
}

fn get_creator(
    roster: Arc<RosterManager>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("creators" / String)
        .and(warp::get())
        .and(with_roster(roster))
        .and_then(handle_get_creator)
}

fn post_contact(
    mailer: Arc<Mailer>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path("contact")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_mailer(mailer))
        .and_then(handle_post_contact)
}

async fn handle_health(roster: Arc<RosterManager>) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&json!({
        "status": "ok",
        "creators": roster.creators().len(),
    })))
}

async fn handle_get_roster(roster: Arc<RosterManager>) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&roster.visible()))
}

async fn handle_get_creator(
    slug: String,
    roster: Arc<RosterManager>,
) -> Result<impl warp::Reply, warp::Rejection> {
    // Direct lookup resolves hidden entries too.
    match roster.find_by_slug(&slug) {
        Some(creator) => Ok(warp::reply::with_status(
            warp::reply::json(&creator),
            StatusCode::OK,
        )),
        None => Ok(warp::reply::with_status(
            warp::reply::json(&json!({"error": "creator not found"})),
            StatusCode::NOT_FOUND,
        )),
    }
}

async fn handle_post_contact(
    form: ContactForm,
    mailer: Arc<Mailer>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match mailer.send(&form).await {
        Ok(Delivery::Sent) => Ok(warp::reply::with_status(
            warp::reply::json(&json!({"status": "sent"})),
            StatusCode::OK,
        )),
        Ok(Delivery::Mailto { uri, subject, body }) => Ok(warp::reply::with_status(
            warp::reply::json(&json!({
                "status": "mailto",
                "mailto": uri,
                "subject": subject,
                "body": body,
            })),
            StatusCode::OK,
        )),
        Err(e @ SubmissionError::MissingFields(_)) => Ok(warp::reply::with_status(
            warp::reply::json(&json!({"error": e.to_string()})),
            StatusCode::BAD_REQUEST,
        )),
        Err(e) => Ok(warp::reply::with_status(
            warp::reply::json(&json!({"error": e.to_string()})),
            StatusCode::BAD_GATEWAY,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use crate::config::Config;
    use crate::roster::{starter_roster, RosterError, RosterSettings, SheetSource};

    struct NoSheet;

    #[async_trait]
    impl SheetSource for NoSheet {
        async fn fetch_csv(&self) -> Result<String, RosterError> {
            Err(RosterError::Status(500))
        }
    }

    fn routes() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let roster = RosterManager::new(Arc::new(NoSheet), RosterSettings::default(), starter_roster());
        let mailer = Arc::new(Mailer::new(Arc::new(RwLock::new(Config::default()))).unwrap());
        api_routes(roster, mailer)
    }

    #[tokio::test]
    async fn roster_endpoint_lists_visible_creators() {
        let res = warp::test::request()
            .method("GET")
            .path("/api/roster")
            .reply(&routes())
            .await;
        assert_eq!(res.status(), 200);

        let creators: Vec<serde_json::Value> = serde_json::from_slice(res.body()).unwrap();
        assert!(creators.iter().all(|c| c["roster_visible"] == true));
        assert!(!creators.iter().any(|c| c["name"] == "Zophia"));
    }

    #[tokio::test]
    async fn creator_endpoint_resolves_hidden_and_404s_unknown() {
        let routes = routes();

        let res = warp::test::request()
            .method("GET")
            .path("/api/creators/zophia")
            .reply(&routes)
            .await;
        assert_eq!(res.status(), 200);

        let res = warp::test::request()
            .method("GET")
            .path("/api/creators/nobody-here")
            .reply(&routes)
            .await;
        assert_eq!(res.status(), 404);
    }

    #[tokio::test]
    async fn contact_endpoint_reports_the_mailto_fallback() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/contact")
            .json(&serde_json::json!({
                "kind": "talent",
                "name": "Zophia",
                "email": "z@example.com",
            }))
            .reply(&routes())
            .await;
        assert_eq!(res.status(), 200);

        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["status"], "mailto");
        assert!(body["mailto"].as_str().unwrap().starts_with("mailto:"));
    }

    #[tokio::test]
    async fn contact_endpoint_rejects_incomplete_forms() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/contact")
            .json(&serde_json::json!({"kind": "brand"}))
            .reply(&routes())
            .await;
        assert_eq!(res.status(), 400);
    }
}
