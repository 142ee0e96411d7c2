#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, call, make_test_app, seed};
    use axum::http::StatusCode;
    use db::models::{
        chat_message::Model as ChatMessageModel, notification::Model as NotificationModel,
    };
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn creating_a_ticket_notifies_staff() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;

        let (status, json) = call(
            &app,
            "POST",
            "/api/tickets",
            Some(bearer(&data.owner)),
            Some(json!({ "title": "Printer jammed", "description": "Floor 3" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Ticket created successfully");
        assert_eq!(json["data"]["status"], "OPEN");
        assert_eq!(json["data"]["createdById"], data.owner.id);
        assert_eq!(json["data"]["createdBy"]["email"], "owner@test.com");
        assert!(json["data"]["assignedTo"].is_null());

        for staff in [&data.tech, &data.outsider, &data.admin] {
            let inbox = NotificationModel::find_for_user(state.db(), &staff.id).await.unwrap();
            assert_eq!(inbox.len(), 1);
            assert_eq!(inbox[0].message, "New ticket created: Printer jammed");
        }
        assert!(NotificationModel::find_for_user(state.db(), &data.owner.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn empty_fields_are_rejected() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;

        let (status, json) = call(
            &app,
            "POST",
            "/api/tickets",
            Some(bearer(&data.owner)),
            Some(json!({ "title": "", "description": "Floor 3" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Title is required");
    }

    #[tokio::test]
    #[serial]
    async fn list_and_fetch() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let auth = bearer(&data.owner);

        let (status, json) = call(&app, "GET", "/api/tickets", Some(auth.clone()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["assignedTo"]["name"], "Terry Tech");

        let uri = format!("/api/tickets/{}", data.ticket.id);
        let (status, json) = call(&app, "GET", &uri, Some(auth.clone()), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "ASSIGNED");

        let (status, json) = call(&app, "GET", "/api/tickets/missing", Some(auth), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Ticket not found");
    }

    #[tokio::test]
    #[serial]
    async fn closing_sets_resolved_at() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let uri = format!("/api/tickets/{}", data.ticket.id);

        let (status, json) = call(
            &app,
            "PUT",
            &uri,
            Some(bearer(&data.tech)),
            Some(json!({ "status": "CLOSED" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "CLOSED");
        assert!(json["data"]["resolvedAt"].is_string());
    }

    #[tokio::test]
    #[serial]
    async fn reassignment_moves_chat_access() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let ticket_uri = format!("/api/tickets/{}", data.ticket.id);
        let chat_uri = format!("/api/chat/{}", data.ticket.id);

        let (status, json) = call(
            &app,
            "PUT",
            &ticket_uri,
            Some(bearer(&data.admin)),
            Some(json!({ "assignedToId": data.outsider.id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["assignedToId"], data.outsider.id);

        let (status, _) = call(&app, "GET", &chat_uri, Some(bearer(&data.outsider)), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = call(&app, "GET", &chat_uri, Some(bearer(&data.tech)), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    #[serial]
    async fn bad_updates_are_rejected() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let uri = format!("/api/tickets/{}", data.ticket.id);
        let auth = bearer(&data.admin);

        let (status, json) = call(
            &app,
            "PUT",
            &uri,
            Some(auth.clone()),
            Some(json!({ "assignedToId": "ghost" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Assignee not found");

        let (status, json) = call(
            &app,
            "PUT",
            &uri,
            Some(auth.clone()),
            Some(json!({ "status": "ON_HOLD" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid ticket status");

        let (status, _) = call(
            &app,
            "PUT",
            "/api/tickets/missing",
            Some(auth),
            Some(json!({ "title": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn deleting_a_ticket_removes_its_chat() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let uri = format!("/api/tickets/{}", data.ticket.id);
        ChatMessageModel::append(state.db(), &data.ticket.id, &data.owner.id, "hello")
            .await
            .unwrap();

        let (status, json) = call(&app, "DELETE", &uri, Some(bearer(&data.admin)), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Ticket deleted successfully");

        let (status, _) = call(&app, "DELETE", &uri, Some(bearer(&data.admin)), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = call(
            &app,
            "GET",
            &format!("/api/chat/{}", data.ticket.id),
            Some(bearer(&data.owner)),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
