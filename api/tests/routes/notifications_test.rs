#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, call, make_test_app, seed};
    use axum::http::StatusCode;
    use db::models::notification::Model as NotificationModel;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn inbox_lifecycle() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let first = NotificationModel::create(state.db(), &data.tech.id, Some(&data.ticket.id), "one")
            .await
            .unwrap();
        NotificationModel::create(state.db(), &data.tech.id, None, "two").await.unwrap();
        let auth = bearer(&data.tech);

        let (status, json) = call(&app, "GET", "/api/notifications", Some(auth.clone()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["data"][0]["isRead"], false);

        let uri = format!("/api/notifications/{}/read", first.id);
        let (status, json) = call(&app, "PUT", &uri, Some(auth.clone()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["isRead"], true);

        let (status, json) =
            call(&app, "PUT", "/api/notifications/read-all", Some(auth), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["updated"], 1);
    }

    #[tokio::test]
    #[serial]
    async fn someone_elses_notification_is_not_found() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let note = NotificationModel::create(state.db(), &data.tech.id, None, "private").await.unwrap();

        let uri = format!("/api/notifications/{}/read", note.id);
        let (status, json) = call(&app, "PUT", &uri, Some(bearer(&data.owner)), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Notification not found");
    }
}
