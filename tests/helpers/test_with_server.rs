#[macro_export]
macro_rules! test_with_server {
    ($name:ident, |$server:ident, $ctx_state:ident| $body:block) => {
        #[tokio::test(flavor = "multi_thread")]
        #[serial_test::serial]
        async fn $name() {
            use axum_test::{TestServer, TestServerConfig};
            use kata_server::config::AppConfig;
            use kata_server::database::client::{Database, DbConfig};
            use kata_server::middleware::mw_ctx::create_ctx_state;

            let config = AppConfig {
                db_namespace: "test".to_string(),
                db_database: "test".to_string(),
                db_password: None,
                db_username: None,
                db_url: "mem://".to_string(),
                http_port: 0,
                upload_file_size_max_mb: 15,
                is_development: true,
            };

            let $ctx_state = {
                let db = Database::connect(DbConfig {
                    url: &config.db_url,
                    database: &config.db_database,
                    namespace: &config.db_namespace,
                    password: config.db_password.as_deref(),
                    username: config.db_username.as_deref(),
                })
                .await;

                kata_server::init::run_migrations(&db).await.unwrap();
                create_ctx_state(db, &config)
            };

            let routes_all = kata_server::init::main_router(&$ctx_state);

            let $server = TestServer::new_with_config(
                routes_all,
                TestServerConfig {
                    transport: None,
                    save_cookies: true,
                    expect_success_by_default: false,
                    restrict_requests_with_http_schema: false,
                    default_content_type: None,
                    default_scheme: None,
                },
            )
            .expect("Failed to create test server");

            $body
        }
    };
}
