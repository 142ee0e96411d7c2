#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, call, make_test_app, seed};
    use axum::http::StatusCode;
    use db::models::chat_message::Model as ChatMessageModel;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn creator_and_assignee_read_the_same_history() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let uri = format!("/api/chat/{}", data.ticket.id);

        ChatMessageModel::append(state.db(), &data.ticket.id, &data.owner.id, "it won't start")
            .await
            .unwrap();
        ChatMessageModel::append(state.db(), &data.ticket.id, &data.tech.id, "on my way")
            .await
            .unwrap();

        for user in [&data.owner, &data.tech] {
            let (status, json) = call(&app, "GET", &uri, Some(bearer(user)), None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json["success"], true);

            let messages = json["data"].as_array().unwrap();
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0]["message"], "it won't start");
            assert_eq!(messages[0]["ticketId"], data.ticket.id);
            assert_eq!(messages[0]["sender"]["id"], data.owner.id);
            assert_eq!(messages[0]["sender"]["name"], "Olivia Owner");
            assert_eq!(messages[0]["sender"]["role"], "USER");
            assert_eq!(messages[1]["sender"]["role"], "TECHNICIAN");
        }
    }

    #[tokio::test]
    #[serial]
    async fn unrelated_staff_are_forbidden() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let uri = format!("/api/chat/{}", data.ticket.id);

        for user in [&data.outsider, &data.admin] {
            let (status, json) = call(&app, "GET", &uri, Some(bearer(user)), None).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(json["success"], false);
            assert_eq!(json["message"], "You do not have access to this chat");

            let (status, _) = call(
                &app,
                "POST",
                &uri,
                Some(bearer(user)),
                Some(json!({ "message": "let me in" })),
            )
            .await;
            assert_eq!(status, StatusCode::FORBIDDEN);
        }

        let history = ChatMessageModel::list_by_ticket(state.db(), &data.ticket.id).await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn unknown_ticket_is_404() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;

        let (status, json) =
            call(&app, "GET", "/api/chat/no-such-ticket", Some(bearer(&data.owner)), None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Ticket not found");
    }

    #[tokio::test]
    #[serial]
    async fn missing_or_bad_token_is_401() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let uri = format!("/api/chat/{}", data.ticket.id);

        let (status, json) = call(&app, "GET", &uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Authentication required");

        let (status, json) = call(&app, "GET", &uri, Some("Bearer not-a-jwt".into()), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Invalid or expired token");
    }

    #[tokio::test]
    #[serial]
    async fn post_persists_and_returns_the_enriched_message() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let uri = format!("/api/chat/{}", data.ticket.id);

        let (status, json) = call(
            &app,
            "POST",
            &uri,
            Some(bearer(&data.tech)),
            Some(json!({ "message": "Try holding the power button" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["message"], "Try holding the power button");
        assert_eq!(json["data"]["senderId"], data.tech.id);
        assert_eq!(json["data"]["sender"]["name"], "Terry Tech");
        assert!(json["data"]["createdAt"].is_string());

        let history = ChatMessageModel::list_by_ticket(state.db(), &data.ticket.id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, json["data"]["id"]);
    }

    #[tokio::test]
    #[serial]
    async fn post_without_a_message_is_400() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let uri = format!("/api/chat/{}", data.ticket.id);

        for body in [json!({}), json!({ "message": "   " }), json!({ "message": 7 })] {
            let (status, json) =
                call(&app, "POST", &uri, Some(bearer(&data.owner)), Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["message"], "Message is required");
        }
    }
}
