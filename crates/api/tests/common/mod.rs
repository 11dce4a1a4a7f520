use api::gql::{build_schema, AppSchema};
use api::{AppState, ServerConfig};
use async_graphql::{Request, Variables};
use infra::Db;

/// Fresh seeded store per test so mutations never leak between tests.
pub fn setup_state() -> AppState {
    AppState::new(Db::seeded(), ServerConfig::default())
}

#[allow(dead_code)]
pub fn setup_schema() -> (AppState, AppSchema) {
    let state = setup_state();
    let schema = build_schema(state.clone());
    (state, schema)
}

/// Helper function to execute GraphQL queries and mutations
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Execute and return `data` as JSON, failing the test on any GraphQL error.
#[allow(dead_code)]
pub async fn execute_ok(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> serde_json::Value {
    let response = execute_graphql(schema, query, variables).await;
    assert!(
        response.errors.is_empty(),
        "Request should succeed: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}
