use axum::{
    extract::Multipart, http::StatusCode, response::IntoResponse, routing::post, Extension, Json,
    Router,
};
use bytes::Bytes;
use chrono::Utc;
use diesel::prelude::*;
use serde_json::json;

use db::{object_id::TeamId, teams, PoolExt};
use sideline_db as db;

use crate::{shared_state::State, Error};

const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

struct AvatarUpload {
    team_id: TeamId,
    extension: String,
    data: Bytes,
}

/// Pull the `file` and `teamId` parts out of the form. Field order is not
/// guaranteed, so both are collected before anything is checked.
async fn read_form(mut form: Multipart) -> Result<AvatarUpload, Error> {
    let mut team_id: Option<TeamId> = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = form.next_field().await? {
        match field.name() {
            Some("teamId") => {
                let value = field.text().await?;
                team_id = Some(value.parse().map_err(Error::InvalidId)?);
            }
            Some("file") => {
                let extension = field
                    .file_name()
                    .and_then(|name| name.rsplit_once('.'))
                    .map(|(_, ext)| ext.to_ascii_lowercase())
                    .unwrap_or_else(|| "png".to_string());
                let data = field.bytes().await?;
                file = Some((extension, data));
            }
            _ => continue,
        }
    }

    let team_id = team_id.ok_or(Error::MissingUploadField("teamId"))?;
    let (extension, data) = file.ok_or(Error::MissingUploadField("file"))?;

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(Error::Validation {
            field: "file",
            message: format!("{extension} uploads are not supported"),
        });
    }
    if data.is_empty() {
        return Err(Error::Validation {
            field: "file",
            message: "uploaded file is empty".to_string(),
        });
    }

    Ok(AvatarUpload {
        team_id,
        extension,
        data,
    })
}

/// Store a team avatar and point the team at its public URL. The object key
/// is derived from the team id, so re-uploading replaces the previous image.
async fn upload_avatar(
    Extension(ref state): Extension<State>,
    form: Multipart,
) -> Result<impl IntoResponse, Error> {
    use db::teams::dsl;

    let upload = read_form(form).await?;
    let team_id = upload.team_id;
    let organization_id = state.organization_id;

    state
        .db
        .interact(move |conn| {
            let exists = teams::table
                .filter(dsl::id.eq(team_id))
                .filter(dsl::organization_id.eq(organization_id))
                .count()
                .get_result::<i64>(conn)?;
            if exists == 0 {
                return Err(Error::ObjectNotFound("team"));
            }
            Ok(())
        })
        .await?;

    let location = format!("avatars/{}.{}", team_id, upload.extension);
    state.storage.put(&location, upload.data).await?;
    let url = state.storage.public_url(&location);

    let stored_url = url.clone();
    state
        .db
        .interact(move |conn| {
            // The team can disappear between the check above and this write;
            // zero rows updated means nothing stores the URL.
            let updated = diesel::update(teams::table)
                .filter(dsl::id.eq(team_id))
                .set((
                    dsl::avatar_url.eq(Some(stored_url)),
                    dsl::updated.eq(Utc::now()),
                ))
                .execute(conn)?;
            if updated == 0 {
                return Err(Error::ObjectNotFound("team"));
            }
            Ok(())
        })
        .await?;

    Ok((StatusCode::OK, Json(json!({ "success": true, "url": url }))))
}

pub fn configure() -> Router {
    Router::new().route("/avatar", post(upload_avatar))
}
