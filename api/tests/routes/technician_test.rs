#[cfg(test)]
mod tests {
    use crate::helpers::{bearer, call, make_test_app, seed};
    use axum::http::StatusCode;
    use db::models::tickets::{Model as TicketModel, TicketChanges, TicketStatus};
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn queues_split_active_and_closed_work() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;
        let done = TicketModel::create(state.db(), &data.owner.id, "Old", "Fixed").await.unwrap();
        TicketModel::apply_changes(
            state.db(),
            &done.id,
            TicketChanges {
                assigned_to_id: Some(data.tech.id.clone()),
                status: Some(TicketStatus::Closed),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let (status, json) =
            call(&app, "GET", "/api/technician/tickets", Some(bearer(&data.tech)), None).await;
        assert_eq!(status, StatusCode::OK);
        let active = json["data"].as_array().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0]["id"], data.ticket.id);

        let (status, json) = call(
            &app,
            "GET",
            "/api/technician/completed-tickets",
            Some(bearer(&data.tech)),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let completed = json["data"].as_array().unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0]["id"], done.id);
    }

    #[tokio::test]
    #[serial]
    async fn non_technicians_are_forbidden() {
        let (app, state) = make_test_app().await;
        let data = seed(state.db()).await;

        for user in [&data.owner, &data.admin] {
            let (status, json) =
                call(&app, "GET", "/api/technician/tickets", Some(bearer(user)), None).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(json["message"], "Technician access required");
        }

        let (status, _) = call(&app, "GET", "/api/technician/tickets", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
