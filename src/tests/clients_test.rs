#[cfg(test)]
mod tests {
    use crate::tests::{create_schema, run_graphql_query};

    #[tokio::test]
    async fn add_client_returns_the_created_entity() {
        let schema = create_schema().await;

        let result = run_graphql_query(
            &schema,
            r#"mutation {
                addClient(name: "Acme", email: "a@acme.com", phone: "555-0100") {
                    id
                    name
                    email
                    phone
                }
            }"#,
        )
        .await;

        let client = result.get("addClient").unwrap().clone();
        assert_eq!(client["name"], "Acme");
        assert_eq!(client["email"], "a@acme.com");
        assert_eq!(client["phone"], "555-0100");

        let id = client["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        // A fresh lookup returns the same entity
        let result = run_graphql_query(
            &schema,
            &format!(r#"{{ client(id: "{id}") {{ id name email phone }} }}"#),
        )
        .await;
        assert_eq!(result["client"], client);
    }

    #[tokio::test]
    async fn repeated_creation_assigns_unique_ids() {
        let schema = create_schema().await;

        let first = run_graphql_query(
            &schema,
            r#"mutation { addClient(name: "Acme", email: "a@acme.com", phone: "555-0100") { id } }"#,
        )
        .await;
        let second = run_graphql_query(
            &schema,
            r#"mutation { addClient(name: "Acme", email: "a@acme.com", phone: "555-0100") { id } }"#,
        )
        .await;

        assert_ne!(first["addClient"]["id"], second["addClient"]["id"]);
    }

    #[tokio::test]
    async fn missing_client_is_null_not_an_error() {
        let schema = create_schema().await;

        let result = run_graphql_query(&schema, r#"{ clients { id } }"#).await;
        assert_eq!(result["clients"].as_array().unwrap().len(), 0);

        let result = run_graphql_query(&schema, r#"{ client(id: "999") { id } }"#).await;
        assert!(result["client"].is_null());
    }

    #[tokio::test]
    async fn delete_client_removes_the_row() {
        let schema = create_schema().await;

        let result = run_graphql_query(
            &schema,
            r#"mutation { addClient(name: "Acme", email: "a@acme.com", phone: "555-0100") { id } }"#,
        )
        .await;
        let id = result["addClient"]["id"].as_str().unwrap().to_string();

        let result = run_graphql_query(
            &schema,
            &format!(r#"mutation {{ deleteClient(id: "{id}") {{ id name }} }}"#),
        )
        .await;
        assert_eq!(result["deleteClient"]["name"], "Acme");

        let result =
            run_graphql_query(&schema, &format!(r#"{{ client(id: "{id}") {{ id }} }}"#)).await;
        assert!(result["client"].is_null());

        // Deleting again is a silent no-op
        let result = run_graphql_query(
            &schema,
            &format!(r#"mutation {{ deleteClient(id: "{id}") {{ id }} }}"#),
        )
        .await;
        assert!(result["deleteClient"].is_null());
    }

    #[tokio::test]
    async fn malformed_id_is_an_execution_error() {
        let schema = create_schema().await;

        let res = schema.execute(r#"{ client(id: "not-a-number") { id } }"#).await;
        assert!(!res.errors.is_empty());
    }

    #[tokio::test]
    async fn missing_required_argument_is_rejected() {
        let schema = create_schema().await;

        let res = schema.execute(r#"mutation { addClient(name: "Acme") { id } }"#).await;
        assert!(!res.errors.is_empty());
    }
}
