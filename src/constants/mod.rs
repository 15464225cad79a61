pub const DEV_SECRET_KEY: &str = "your-secret-key-change-in-production";

pub struct Env {
    pub jwt_secret: String,
    pub access_token_expiration: u64,
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
    pub seed_demo_data: bool,
    pub max_upload_size: usize,
}

impl Env {
    fn new() -> Self {
        let jwt_secret = std::env::var("SECRET_KEY").unwrap_or_else(|_| {
            log::warn!("SECRET_KEY is not set, falling back to the development secret");
            DEV_SECRET_KEY.to_string()
        });

        let access_token_expiration = std::env::var("ACCESS_TOKEN_EXPIRATION")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<u64>()
            .expect("ACCESS_TOKEN_EXPIRATION must be a valid u64 integer");

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");

        let seed_demo_data = std::env::var("SEED_DEMO_DATA")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .expect("SEED_DEMO_DATA must be either true or false");
        let max_upload_size = std::env::var("MAX_UPLOAD_SIZE")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse::<usize>()
            .expect("MAX_UPLOAD_SIZE must be a valid usize integer");

        Env {
            jwt_secret,
            access_token_expiration,
            frontend_url,
            ip,
            port,
            seed_demo_data,
            max_upload_size,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
