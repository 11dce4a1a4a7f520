mod common;

use async_graphql::Variables;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_add_player_assigns_next_id() {
    let (state, schema) = setup_schema();

    let mutation = r#"
        mutation AddPlayer($name: String!, $teamId: ID!) {
            addPlayer(name: $name, teamId: $teamId) {
                id
                name
                team { name }
            }
        }
    "#;

    let data = execute_ok(
        &schema,
        mutation,
        Some(Variables::from_json(
            json!({ "name": "Sergio Agüero", "teamId": "3" }),
        )),
    )
    .await;

    assert_eq!(
        data["addPlayer"],
        json!({ "id": "13", "name": "Sergio Agüero", "team": { "name": "Independiente" } })
    );
    assert_eq!(state.players().count(), 13);
}

#[tokio::test]
async fn test_add_player_with_unknown_team_fails() {
    let (state, schema) = setup_schema();

    for team_id in ["99", "abc"] {
        let response = execute_graphql(
            &schema,
            "mutation($teamId: ID!) { addPlayer(name: \"Nadie\", teamId: $teamId) { id } }",
            Some(Variables::from_json(json!({ "teamId": team_id }))),
        )
        .await;

        assert_eq!(response.errors.len(), 1, "teamId {team_id:?}");
        assert_eq!(response.errors[0].message, "Equipo no encontrado");
    }

    assert_eq!(state.players().count(), 12);
}

#[tokio::test]
async fn test_update_player_partial_fields() {
    let (_state, schema) = setup_schema();

    let data = execute_ok(
        &schema,
        r#"mutation { updatePlayer(id: "5", name: "Franco Daniel Armani") { name teamId } }"#,
        None,
    )
    .await;
    assert_eq!(
        data["updatePlayer"],
        json!({ "name": "Franco Daniel Armani", "teamId": "2" })
    );

    let data = execute_ok(
        &schema,
        r#"mutation { updatePlayer(id: "5", teamId: "4") { name team { id } } }"#,
        None,
    )
    .await;
    assert_eq!(
        data["updatePlayer"],
        json!({ "name": "Franco Daniel Armani", "team": { "id": "4" } })
    );
}

#[tokio::test]
async fn test_update_player_with_unknown_team_changes_nothing() {
    let (_state, schema) = setup_schema();

    let response = execute_graphql(
        &schema,
        r#"mutation { updatePlayer(id: "1", name: "Otro", teamId: "42") { id } }"#,
        None,
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Equipo no encontrado");

    let data = execute_ok(&schema, r#"{ player(id: "1") { name teamId } }"#, None).await;
    assert_eq!(data["player"], json!({ "name": "Carlos Tevez", "teamId": "1" }));
}

#[tokio::test]
async fn test_update_missing_rows_return_null() {
    let (_state, schema) = setup_schema();

    let data = execute_ok(
        &schema,
        r#"
        mutation {
            player: updatePlayer(id: "99", name: "Nadie") { id }
            badTeam: updatePlayer(id: "99", teamId: "abc") { id }
            team: updateTeam(id: "99", name: "Nadie") { id }
        }
        "#,
        None,
    )
    .await;

    assert!(data["player"].is_null());
    assert!(data["badTeam"].is_null());
    assert!(data["team"].is_null());
}

#[tokio::test]
async fn test_delete_player_does_not_reuse_id() {
    let (_state, schema) = setup_schema();

    let data = execute_ok(
        &schema,
        r#"
        mutation {
            first: deletePlayer(id: "3")
            second: deletePlayer(id: "3")
        }
        "#,
        None,
    )
    .await;
    assert_eq!(data["first"], true);
    assert_eq!(data["second"], false);

    let data = execute_ok(
        &schema,
        r#"mutation { addPlayer(name: "Martín Palermo", teamId: "1") { id } }"#,
        None,
    )
    .await;
    assert_eq!(data["addPlayer"]["id"], "13");
}

#[tokio::test]
async fn test_add_and_update_team() {
    let (_state, schema) = setup_schema();

    let data = execute_ok(
        &schema,
        r#"mutation { addTeam(name: "San Lorenzo") { id name players { id } } }"#,
        None,
    )
    .await;
    assert_eq!(
        data["addTeam"],
        json!({ "id": "5", "name": "San Lorenzo", "players": [] })
    );

    let data = execute_ok(
        &schema,
        r#"
        mutation {
            unchanged: updateTeam(id: "5") { name }
            renamed: updateTeam(id: "5", name: "San Lorenzo de Almagro") { name }
        }
        "#,
        None,
    )
    .await;
    assert_eq!(data["unchanged"]["name"], "San Lorenzo");
    assert_eq!(data["renamed"]["name"], "San Lorenzo de Almagro");
}

#[tokio::test]
async fn test_delete_team_cascades() {
    let (state, schema) = setup_schema();

    let data = execute_ok(&schema, r#"mutation { deleteTeam(id: "1") }"#, None).await;
    assert_eq!(data["deleteTeam"], true);

    assert_eq!(state.teams().count(), 3);
    assert_eq!(state.players().count(), 8);

    let data = execute_ok(
        &schema,
        r#"{ players { id } team(id: "1") { id } }"#,
        None,
    )
    .await;
    assert!(data["team"].is_null());
    let ids: Vec<&str> = data["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["4", "5", "6", "7", "8", "9", "10", "11"]);

    let data = execute_ok(
        &schema,
        r#"
        mutation {
            again: deleteTeam(id: "1")
            bad: deleteTeam(id: "abc")
        }
        "#,
        None,
    )
    .await;
    assert_eq!(data["again"], false);
    assert_eq!(data["bad"], false);
}
