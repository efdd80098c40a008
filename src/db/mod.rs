//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! `Database` 핸들은 `main`에서 한 번 만들어 리포지토리 생성자에 전달됩니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let database = Database::new(&DatabaseConfig::from_env()).await?;
//! let users = MongoUserRepository::new(database.clone());
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;
use crate::errors::AppError;

/// MongoDB 데이터베이스 연결 래퍼
///
/// MongoDB 클라이언트(내부적으로 커넥션 풀)와 데이터베이스 이름을 보관합니다.
/// `Client`는 내부에서 `Arc`로 공유되므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 연결 URI를 파싱해 클라이언트를 초기화하고, `ping` 명령으로
    /// 연결 상태를 검증한 후 Database 인스턴스를 반환합니다.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        client_options.app_name = Some("organic_auth".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 테스트
        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// 리포지토리에서 컬렉션에 접근할 때 사용됩니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 지정한 이름의 타입 있는 컬렉션을 반환합니다.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> mongodb::Collection<T> {
        self.get_database().collection::<T>(name)
    }
}
