//! # 사용자 리포지토리
//!
//! `users` 컬렉션 접근을 담당합니다.
//!
//! ## 인덱스
//!
//! | 이름 | 키 | 옵션 |
//! |------|----|------|
//! | `email_unique` | `email` | unique |
//! | `cpf_unique` | `cpf` | unique |
//! | `name_asc` | `name` | 페이지 조회 정렬용 |
//!
//! 유니크 인덱스는 소프트 삭제된 사용자에게도 적용됩니다. 삭제된 계정의 이메일로는
//! 다시 가입할 수 없습니다.

use std::sync::Arc;
use mongodb::{IndexModel, bson::doc, options::IndexOptions};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::{errors::AppError, registry::Repository},
    db::Database,
    domain::entities::users::User,
    domain::value_objects::{Cpf, Email},
    repositories::base::BaseRepository,
};

#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 이메일로 조회합니다. 삭제된 사용자도 포함됩니다.
    pub async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError> {
        Ok(self.collection().find_one(doc! { "email": email.as_str() }).await?)
    }

    pub async fn find_by_cpf(&self, cpf: &Cpf) -> Result<Option<User>, AppError> {
        Ok(self.collection().find_one(doc! { "cpf": cpf.as_str() }).await?)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let cpf_index = IndexModel::builder()
            .keys(doc! { "cpf": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("cpf_unique".to_string())
                .build())
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .name("name_asc".to_string())
                .build())
            .build();

        self.collection::<User>()
            .create_indexes([email_index, cpf_index, name_index])
            .await?;

        Ok(())
    }
}

impl BaseRepository<User> for UserRepository {
    const ENTITY: &'static str = "user";
    const COLLECTION: &'static str = "users";

    fn db(&self) -> &Database {
        &self.db
    }

    fn redis(&self) -> &RedisClient {
        &self.redis
    }
}
