use serde_json::Value;

use crate::common::run_app_test;

#[tokio::test]
async fn smoke_test() {
    run_app_test(|app| async move {
        let response = app.client.get("health").send().await?;
        assert_eq!(
            response.status().as_u16(),
            200,
            "response status code should be 200"
        );

        let body: Value = response.json().await?;
        assert_eq!(body["healthy"], Value::Bool(true));
        assert_eq!(body["database"], Value::Bool(true));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn navigation_list() {
    run_app_test(|app| async move {
        let response = app.client.get("navigation").send().await?;
        assert_eq!(response.status().as_u16(), 200);

        // The seeded sidebar items come back in position order.
        let body: Value = response.json().await?;
        let labels = body
            .as_array()
            .expect("navigation is a list")
            .iter()
            .map(|item| item["label"].as_str().unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["Teams", "Registrations"]);
        assert_eq!(body[0]["href"].as_str(), Some("/teams"));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn active_season_resolution() {
    run_app_test(|app| async move {
        let response = app.client.get("seasons/active").send().await?;
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await?;
        assert_eq!(body["id"].as_str(), Some(app.seed.season_id.to_string().as_str()));
        assert_eq!(body["name"].as_str(), Some("2025-2026"));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn program_and_registration_listing() {
    run_app_test(|app| async move {
        let programs: Value = app
            .client
            .get(&format!("programs?season={}", app.seed.season_id))
            .send()
            .await?
            .json()
            .await?;
        let programs = programs.as_array().expect("programs is a list");
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0]["title"].as_str(), Some("Winter Basketball"));

        let registrations: Value = app
            .client
            .get(&format!("programs/{}/registrations", app.seed.program_id))
            .send()
            .await?
            .json()
            .await?;
        let registrations = registrations.as_array().expect("registrations is a list");
        assert_eq!(registrations.len(), 1);
        assert_eq!(registrations[0]["title"].as_str(), Some("5th-6th Grade"));

        let submissions: Value = app
            .client
            .get(&format!(
                "registrations/{}/submissions",
                app.seed.registration_id
            ))
            .send()
            .await?
            .json()
            .await?;
        let submissions = submissions.as_array().expect("submissions is a list");
        let names = submissions
            .iter()
            .map(|s| s["athlete_name"].as_str().unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Avery Brooks", "Jordan Lee", "Sam Ortiz"]);
        Ok(())
    })
    .await
}
