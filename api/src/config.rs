use clap::Parser;
use sideline_db::object_id::{OrganizationId, UserId};

#[derive(Debug, Parser)]
pub struct Config {
    #[clap(short, long, env, default_value_t = String::from("127.0.0.1"))]
    pub host: String,
    #[clap(short, long, env, default_value_t = 7412)]
    pub port: u16,

    #[clap(env, default_value_t = String::from("production"))]
    pub env: String,

    #[clap(long = "db", env = "DATABASE_URL")]
    pub database_url: String,

    /// S3-compatible endpoint; unset means AWS itself.
    #[clap(long, env = "STORAGE_ENDPOINT")]
    pub storage_endpoint: Option<String>,
    #[clap(long, env = "STORAGE_REGION")]
    pub storage_region: Option<String>,
    #[clap(long, env = "STORAGE_KEY_ID")]
    pub storage_key_id: Option<String>,
    #[clap(long, env = "STORAGE_SECRET_KEY")]
    pub storage_secret_key: Option<String>,
    /// When set, uploads go to this bucket; when unset, to the local
    /// directory below (development and tests).
    #[clap(long, env = "STORAGE_BUCKET")]
    pub storage_bucket: Option<String>,
    #[clap(long, env = "STORAGE_LOCAL_DIR", default_value_t = String::from("./uploads"))]
    pub storage_local_dir: String,
    /// Prefix for the URLs stored on team rows after an avatar upload.
    #[clap(long, env = "PUBLIC_URL_BASE", default_value_t = String::from("http://127.0.0.1:7412/uploads"))]
    pub public_url_base: String,

    // Authentication is stubbed: the whole process acts as this operator.
    #[clap(long, env = "ORGANIZATION_ID")]
    pub organization_id: OrganizationId,
    #[clap(long, env = "OPERATOR_USER_ID")]
    pub operator_user_id: UserId,
}
