use dotenvy;

#[derive(Debug)]
pub struct AppConfig {
    pub db_namespace: String,
    pub db_database: String,
    pub db_password: Option<String>,
    pub db_username: Option<String>,
    pub db_url: String,
    pub http_port: u16,
    pub upload_file_size_max_mb: u64,
    pub is_development: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let db_namespace = std::env::var("DB_NAMESPACE").unwrap_or("namespace".to_string());
        let db_database = std::env::var("DB_DATABASE").unwrap_or("database".to_string());
        let db_password = std::env::var("DB_PASSWORD").ok();
        let db_username = std::env::var("DB_USERNAME").ok();
        let db_url = std::env::var("DB_URL").expect("Missing DB_URL in env");

        let http_port: u16 = std::env::var("HTTP_PORT")
            .unwrap_or("8080".to_string())
            .parse()
            .expect("HTTP_PORT should be number");

        let upload_file_size_max_mb: u64 = std::env::var("UPLOAD_MAX_SIZE_MB")
            .unwrap_or("15".to_string())
            .parse()
            .expect("UPLOAD_MAX_SIZE_MB should be number");

        let is_development = std::env::var("DEVELOPMENT")
            .expect("set DEVELOPMENT env var")
            .eq("true");

        Self {
            db_namespace,
            db_database,
            db_password,
            db_username,
            db_url,
            http_port,
            upload_file_size_max_mb,
            is_development,
        }
    }
}
