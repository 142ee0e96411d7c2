#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, call, make_test_app, seed};
    use axum::http::StatusCode;
    use db::models::{tickets::Model as TicketModel, user::Model as UserModel};
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn admin_lists_users_and_technicians_separately() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let auth = Some(bearer(&data.admin));

        let (status, json) = call(&app, "GET", "/api/users", auth.clone(), None).await;
        assert_eq!(status, StatusCode::OK);
        let users = json["data"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["id"], data.owner.id);
        assert_eq!(users[0]["email"], "owner@test.com");
        assert_eq!(users[0]["role"], "USER");

        let (status, json) = call(&app, "GET", "/api/users/technicians", auth, None).await;
        assert_eq!(status, StatusCode::OK);
        let mut ids: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        ids.sort();
        let mut expected = vec![data.tech.id.as_str(), data.outsider.id.as_str()];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    #[serial]
    async fn listed_technician_can_be_assigned() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let auth = Some(bearer(&data.admin));
        let ticket = TicketModel::create(state.db(), &data.owner.id, "Screen", "Flicker").await.unwrap();

        let (_, json) = call(&app, "GET", "/api/users/technicians", auth.clone(), None).await;
        let tech_id = json["data"][0]["id"].as_str().unwrap().to_owned();

        let uri = format!("/api/tickets/{}", ticket.id);
        let (status, json) =
            call(&app, "PUT", &uri, auth, Some(json!({ "assignedToId": tech_id }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["assignedToId"], tech_id);
        assert_eq!(json["data"]["status"], "ASSIGNED");
    }

    #[tokio::test]
    #[serial]
    async fn non_admins_are_forbidden() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;

        for user in [&data.owner, &data.tech] {
            let (status, json) = call(&app, "GET", "/api/users", Some(bearer(user)), None).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(json["message"], "Admin access required");
        }
        let uri = format!("/api/users/{}", data.owner.id);
        let (status, _) = call(&app, "DELETE", &uri, Some(bearer(&data.tech)), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(UserModel::find_by_id(state.db(), &data.owner.id).await.unwrap().is_some());
    }

    #[tokio::test]
    #[serial]
    async fn role_change_validates_role_and_user() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let auth = Some(bearer(&data.admin));
        let uri = format!("/api/users/{}/role", data.owner.id);

        let (status, json) =
            call(&app, "PUT", &uri, auth.clone(), Some(json!({ "role": "technician" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["role"], "TECHNICIAN");
        assert_eq!(json["message"], "User role updated successfully");

        let (status, json) =
            call(&app, "PUT", &uri, auth.clone(), Some(json!({ "role": "OWNER" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid role");

        let (status, json) = call(
            &app,
            "PUT",
            "/api/users/ghost/role",
            auth,
            Some(json!({ "role": "ADMIN" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "User not found");
    }

    #[tokio::test]
    #[serial]
    async fn deleting_a_user_removes_their_tickets() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let auth = Some(bearer(&data.admin));
        let uri = format!("/api/users/{}", data.owner.id);

        let (status, json) = call(&app, "DELETE", &uri, auth.clone(), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "User deleted successfully");
        assert!(TicketModel::find_by_id(state.db(), &data.ticket.id).await.unwrap().is_none());

        let (status, _) = call(&app, "DELETE", &uri, auth, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
