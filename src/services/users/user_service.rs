//! # 사용자 유스케이스
//!
//! 가입, 조회, 페이지 조회, 수정, 비밀번호 변경, 삭제, 로그인을 담당합니다.
//! 모든 쓰기는 `UnitOfWork` 하나로 커밋합니다.
//!
//! ## 권한 규칙
//!
//! | 작업 | 허용 대상 |
//! |------|-----------|
//! | 가입 (`User` 권한) | 누구나 |
//! | 가입 (`Admin` 권한) | 관리자 |
//! | 수정, 비밀번호 변경, 삭제 | 본인 또는 관리자 |
//! | 권한 변경 | 관리자 |

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    config::PasswordConfig,
    core::errors::{AppError, AppResult},
    db::UnitOfWork,
    domain::{
        dto::{
            common::PagedResult,
            users::{
                request::{ChangePasswordRequest, CreateUserRequest, LoginRequest, UpdateUserRequest, UserFilterQuery},
                response::{LoginResponse, UserResponse},
            },
        },
        entities::users::{User, UserRole},
        models::auth::AuthenticatedUser,
        services::UserDomainService,
        specifications::{Specification, active_users, not_deleted, user_by_email, user_by_name},
        value_objects::{Cpf, Email, Password, PhoneNumber},
    },
    repositories::{base::{BaseRepository, QueryOptions}, users::UserRepository},
    services::auth::TokenService,
    utils::string_utils::parse_object_id,
};

const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

#[service(name = "user")]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    user_domain_service: Arc<UserDomainService>,
    token_service: Arc<TokenService>,
}

impl UserService {
    /// 새 사용자를 등록합니다. `actor`는 관리자가 대신 등록하는 경우에만 존재합니다.
    pub async fn create_user(&self, request: CreateUserRequest, actor: Option<&AuthenticatedUser>) -> AppResult<UserResponse> {
        let refreshed = match actor {
            Some(actor) => Some(self.user_domain_service.current_actor(actor).await?),
            None => None,
        };
        let actor = refreshed.as_ref();

        let role = parse_role(request.role.as_deref())?.unwrap_or_default();
        if role == UserRole::Admin && !actor.is_some_and(AuthenticatedUser::is_admin) {
            return Err(AppError::AuthorizationError("관리자 계정은 관리자만 생성할 수 있습니다".to_string()));
        }

        let email = Email::parse(&request.email)?;
        let cpf = Cpf::parse(&request.cpf)?;
        let phone_number = PhoneNumber::parse(&request.phone_number)?;

        self.user_domain_service.ensure_email_available(&email, None).await?;
        self.user_domain_service.ensure_cpf_available(&cpf, None).await?;

        let password = Password::hash(&request.password, PasswordConfig::bcrypt_cost())?;
        let created_by = actor.and_then(AuthenticatedUser::actor_id);
        let user = User::new(&request.name, email, password, phone_number, cpf, role, created_by)?;

        let mut uow = UnitOfWork::begin();
        self.user_repo.stage_insert(&mut uow, &user)?;
        uow.commit().await?;

        log::info!("사용자 생성: {} ({})", user.id, user.role);
        Ok(UserResponse::from(&user))
    }

    /// 단건 조회. 소프트 삭제된 사용자도 반환합니다.
    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        let user = self.load_user(&parse_object_id(id)?).await?;
        Ok(UserResponse::from(&user))
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self
            .user_repo
            .find_by_spec(&active_users(), QueryOptions::sorted_by("name"))
            .await?;

        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// 이름/이메일 부분 일치 필터와 페이지 범위로 조회합니다 (이름순).
    pub async fn get_paged_users(&self, filter: UserFilterQuery) -> AppResult<PagedResult<UserResponse>> {
        let page_number = filter.page_number();
        let page_size = filter.page_size();
        let spec = paged_user_spec(&filter);

        let total_count = self.user_repo.count_by_spec(&spec).await?;
        let users = self
            .user_repo
            .find_by_spec(&spec, QueryOptions::sorted_by("name").page(page_number, page_size))
            .await?;

        let items = users.iter().map(UserResponse::from).collect();
        Ok(PagedResult::new(items, total_count, page_number, page_size))
    }

    pub async fn update_user(&self, id: &str, request: UpdateUserRequest, actor: &AuthenticatedUser) -> AppResult<UserResponse> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let id = parse_object_id(id)?;
        actor.ensure_self_or_admin(&id)?;

        let mut user = self.load_user(&id).await?;

        let email = Email::parse(&request.email)?;
        if email != user.email {
            return Err(AppError::ConflictError("이메일은 변경할 수 없습니다".to_string()));
        }

        let role = parse_role(request.role.as_deref())?.unwrap_or(user.role);
        if role != user.role && !actor.is_admin() {
            return Err(AppError::AuthorizationError("권한 변경은 관리자만 할 수 있습니다".to_string()));
        }

        let cpf = Cpf::parse(&request.cpf)?;
        let phone_number = PhoneNumber::parse(&request.phone_number)?;
        self.user_domain_service.ensure_cpf_available(&cpf, Some(user.id)).await?;

        user.update_profile(&request.name, phone_number, cpf, role, actor.actor_id())?;

        let mut uow = UnitOfWork::begin();
        self.user_repo.stage_update(&mut uow, &user)?;
        uow.commit().await?;

        log::info!("사용자 수정: {} (by {})", user.id, actor.user_id);
        Ok(UserResponse::from(&user))
    }

    /// 현재 비밀번호가 맞아야 변경됩니다 (관리자 포함).
    pub async fn change_password(&self, id: &str, request: ChangePasswordRequest, actor: &AuthenticatedUser) -> AppResult<()> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let id = parse_object_id(id)?;
        actor.ensure_self_or_admin(&id)?;

        let mut user = self.load_user(&id).await?;
        if !user.password.verify(&request.current_password) {
            log::warn!("비밀번호 변경 거부: 현재 비밀번호 불일치 ({})", user.id);
            return Err(AppError::AuthenticationError("현재 비밀번호가 일치하지 않습니다".to_string()));
        }

        let password = Password::hash(&request.new_password, PasswordConfig::bcrypt_cost())?;
        user.change_password(password, actor.actor_id())?;

        let mut uow = UnitOfWork::begin();
        self.user_repo.stage_update(&mut uow, &user)?;
        uow.commit().await?;

        log::info!("비밀번호 변경: {}", user.id);
        Ok(())
    }

    pub async fn delete_user(&self, id: &str, actor: &AuthenticatedUser) -> AppResult<()> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let id = parse_object_id(id)?;
        actor.ensure_self_or_admin(&id)?;

        let mut user = self.load_user(&id).await?;
        user.delete(actor.actor_id())?;

        let mut uow = UnitOfWork::begin();
        self.user_repo.stage_update(&mut uow, &user)?;
        uow.commit().await?;

        log::info!("사용자 삭제: {} (by {})", user.id, actor.user_id);
        Ok(())
    }

    /// 이메일과 비밀번호를 확인합니다. 실패 사유는 구분하지 않고 401로 응답합니다.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let email = Email::parse(email)
            .map_err(|_| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        if !user.password.verify(password) {
            log::warn!("로그인 실패: {}", email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        if !user.audit.is_active() {
            log::warn!("비활성 계정 로그인 시도: {}", user.id);
            return Err(AppError::AuthenticationError("비활성화된 계정입니다".to_string()));
        }

        Ok(user)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let user = self.authenticate(&request.email, &request.password).await?;
        let access_token = self.token_service.generate_access_token(&user)?;

        log::info!("로그인 성공: {}", user.id);
        Ok(LoginResponse::new(&user, access_token, self.token_service.expires_in_seconds()))
    }

    /// 토큰 주체의 현재 정보
    pub async fn get_current_user(&self, actor: &AuthenticatedUser) -> AppResult<UserResponse> {
        let user = self.load_user(&actor.user_id).await?;
        Ok(UserResponse::from(&user))
    }

    async fn load_user(&self, id: &ObjectId) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}

fn parse_role(raw: Option<&str>) -> AppResult<Option<UserRole>> {
    Ok(raw.map(UserRole::parse).transpose()?)
}

fn paged_user_spec(filter: &UserFilterQuery) -> Specification<User> {
    let name = filter.name.as_deref().unwrap_or_default();
    let email = filter.email.as_deref().unwrap_or_default();

    not_deleted()
        .and(user_by_name(name))
        .and(user_by_email(email))
}
