use serde_json::{json, Value};
use sideline_db::object_id::TeamId;

use crate::common::run_app_test;

#[tokio::test]
async fn batch_assignment_is_idempotent() {
    run_app_test(|app| async move {
        let team = app.seed.team_id;
        let ids = &app.seed.submission_ids[..2];

        let first: Value = app
            .client
            .post(&format!("teams/{team}/roster"))
            .json(&json!({ "submission_ids": ids }))
            .send()
            .await?
            .json()
            .await?;
        assert_eq!(first["added"].as_u64(), Some(2));
        assert_eq!(first["counts"]["assigned"].as_u64(), Some(2));

        // Dropping the same selection again adds nothing and errors nothing.
        let second: Value = app
            .client
            .post(&format!("teams/{team}/roster"))
            .json(&json!({ "submission_ids": ids }))
            .send()
            .await?
            .json()
            .await?;
        assert_eq!(second["added"].as_u64(), Some(0));
        assert_eq!(second["counts"]["assigned"].as_u64(), Some(2));

        let roster: Value = app
            .client
            .get(&format!("teams/{team}/roster"))
            .send()
            .await?
            .json()
            .await?;
        assert_eq!(roster["entries"].as_array().map(Vec::len), Some(2));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn partially_overlapping_batch() {
    run_app_test(|app| async move {
        let team = app.seed.team_id;

        let response: Value = app
            .client
            .post(&format!("teams/{team}/roster"))
            .json(&json!({ "submission_ids": [app.seed.submission_ids[0]] }))
            .send()
            .await?
            .json()
            .await?;
        assert_eq!(response["added"].as_u64(), Some(1));

        // One id already assigned, two new; only the new ones count.
        let response: Value = app
            .client
            .post(&format!("teams/{team}/roster"))
            .json(&json!({ "submission_ids": app.seed.submission_ids }))
            .send()
            .await?
            .json()
            .await?;
        assert_eq!(response["added"].as_u64(), Some(2));
        assert_eq!(response["counts"]["assigned"].as_u64(), Some(3));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn unassign_removes_row_and_then_404s() {
    run_app_test(|app| async move {
        let team = app.seed.team_id;
        let athlete = app.seed.submission_ids[0];

        let response = app
            .client
            .post(&format!("teams/{team}/roster"))
            .json(&json!({ "submission_ids": [athlete] }))
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 202);

        let response = app
            .client
            .delete(&format!("teams/{team}/roster/{athlete}"))
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 200);

        // The row is gone, so removing it again is a not-found.
        let response = app
            .client
            .delete(&format!("teams/{team}/roster/{athlete}"))
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 404);
        let body: Value = response.json().await?;
        assert_eq!(body["error"]["kind"].as_str(), Some("not_found"));
        Ok(())
    })
    .await
}

#[tokio::test]
async fn athlete_can_hold_rosters_on_multiple_teams() {
    run_app_test(|app| async move {
        let second_team = app.add_team("Second Squad").await?;
        let athlete = app.seed.submission_ids[0];

        for team in [app.seed.team_id, second_team] {
            let response = app
                .client
                .post(&format!("teams/{team}/roster"))
                .json(&json!({ "submission_ids": [athlete] }))
                .send()
                .await?;
            assert_eq!(response.status().as_u16(), 202);
        }

        // Removing from one team leaves the other assignment in place.
        let response = app
            .client
            .delete(&format!("teams/{}/roster/{athlete}", app.seed.team_id))
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 200);

        let roster: Value = app
            .client
            .get(&format!("teams/{second_team}/roster"))
            .send()
            .await?
            .json()
            .await?;
        let entries = roster["entries"].as_array().expect("roster entries");
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0]["submission_id"].as_str(),
            Some(athlete.to_string().as_str())
        );
        Ok(())
    })
    .await
}

#[tokio::test]
async fn roster_counts_follow_membership() {
    run_app_test(|app| async move {
        let team = app.seed.team_id;

        let response: Value = app
            .client
            .post(&format!("teams/{team}/roster"))
            .json(&json!({ "submission_ids": app.seed.submission_ids }))
            .send()
            .await?
            .json()
            .await?;
        assert_eq!(response["added"].as_u64(), Some(3));
        assert_eq!(response["counts"]["assigned"].as_u64(), Some(3));
        assert_eq!(response["counts"]["invited"].as_u64(), Some(0));

        let dropped = app.seed.submission_ids[1];
        app.client
            .delete(&format!("teams/{team}/roster/{dropped}"))
            .send()
            .await?
            .error_for_status()?;

        let roster: Value = app
            .client
            .get(&format!("teams/{team}/roster"))
            .send()
            .await?
            .json()
            .await?;
        assert_eq!(roster["counts"]["assigned"].as_u64(), Some(2));

        // Entries come back sorted by athlete name.
        let names = roster["entries"]
            .as_array()
            .expect("roster entries")
            .iter()
            .map(|e| e["athlete_name"].as_str().unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Avery Brooks", "Sam Ortiz"]);
        Ok(())
    })
    .await
}

#[tokio::test]
async fn roster_operations_on_unknown_team() {
    run_app_test(|app| async move {
        let missing = TeamId::new();

        let response = app
            .client
            .get(&format!("teams/{missing}/roster"))
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 404);

        let response = app
            .client
            .post(&format!("teams/{missing}/roster"))
            .json(&json!({ "submission_ids": [app.seed.submission_ids[0]] }))
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 404);
        Ok(())
    })
    .await
}
