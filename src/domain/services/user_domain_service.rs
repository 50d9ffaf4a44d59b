use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::value_objects::{Cpf, Email};
use crate::repositories::{base::BaseRepository, users::UserRepository};

/// 사용자 식별 정보(이메일, CPF)의 유일성 확인과 행위자 재확인
///
/// 유니크 인덱스가 최종 방어선이지만, 사용자에게 어떤 필드가 충돌했는지
/// 알려주기 위해 저장 전에 먼저 조회합니다.
#[service(name = "user_domain")]
pub struct UserDomainService {
    user_repo: Arc<UserRepository>,
}

impl UserDomainService {
    /// `except_id`는 수정 중인 사용자 자신을 제외할 때 사용합니다.
    pub async fn ensure_email_available(&self, email: &Email, except_id: Option<ObjectId>) -> AppResult<()> {
        let existing = self.user_repo.find_by_email(email).await?;
        ensure_unclaimed(existing.as_ref(), except_id, "이미 등록된 이메일입니다")
    }

    pub async fn ensure_cpf_available(&self, cpf: &Cpf, except_id: Option<ObjectId>) -> AppResult<()> {
        let existing = self.user_repo.find_by_cpf(cpf).await?;
        ensure_unclaimed(existing.as_ref(), except_id, "이미 등록된 CPF입니다")
    }

    /// 토큰의 주체를 저장소에서 다시 읽어 현재 상태의 행위자를 돌려줍니다.
    ///
    /// 토큰 발급 후 삭제되거나 비활성화된 계정은 401, 역할은 저장된 값을 따릅니다.
    pub async fn current_actor(&self, actor: &AuthenticatedUser) -> AppResult<AuthenticatedUser> {
        let stored = self.user_repo.find_by_id(&actor.user_id).await?;
        refreshed_actor(stored.as_ref(), actor)
    }
}

fn refreshed_actor(stored: Option<&User>, actor: &AuthenticatedUser) -> AppResult<AuthenticatedUser> {
    match stored {
        Some(user) if user.audit.is_active() => Ok(AuthenticatedUser {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            role: user.role,
        }),
        _ => {
            log::warn!("토큰 주체가 활성 계정이 아님: {}", actor.user_id);
            Err(AppError::AuthenticationError("삭제되었거나 비활성화된 계정입니다".to_string()))
        }
    }
}

fn ensure_unclaimed(existing: Option<&User>, except_id: Option<ObjectId>, message: &str) -> AppResult<()> {
    match existing {
        Some(user) if Some(user.id) != except_id => Err(AppError::ConflictError(message.to_string())),
        _ => Ok(()),
    }
}
