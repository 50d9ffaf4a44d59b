//! # 디너 유스케이스
//!
//! 디너 CRUD와 참가자(UserDinner) 관리를 담당합니다.
//!
//! ## 참가자 규칙
//!
//! - 삭제된 사용자나 디너로는 등록할 수 없고, 활성 연결이 이미 있으면 409입니다.
//! - 참가 정보는 자신의 ID로 조회하며 경로의 디너에 속해야 합니다 (아니면 404).
//! - 결제 상태 전이는 `UserDinnerDomainService::can_change_payment_status`를 따릅니다.
//! - 디너를 삭제하면 활성 참가 정보도 함께 소프트 삭제됩니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    db::UnitOfWork,
    domain::{
        dto::dinners::{
            AddParticipantRequest, DinnerRequest, DinnerResponse, ParticipantResponse,
            UpdatePaymentStatusRequest, UpdatePresenceRequest,
        },
        entities::{dinners::{Dinner, UserDinner}, users::User},
        models::auth::AuthenticatedUser,
        services::{UserDinnerDomainService, UserDomainService},
    },
    repositories::{
        base::BaseRepository,
        dinners::{DinnerRepository, UserDinnerRepository},
        users::UserRepository,
    },
    utils::string_utils::parse_object_id,
};

#[service(name = "dinner")]
pub struct DinnerService {
    dinner_repo: Arc<DinnerRepository>,
    user_dinner_repo: Arc<UserDinnerRepository>,
    user_repo: Arc<UserRepository>,
    user_domain_service: Arc<UserDomainService>,
}

impl DinnerService {
    pub async fn create_dinner(&self, request: DinnerRequest, actor: &AuthenticatedUser) -> AppResult<DinnerResponse> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let dinner = Dinner::new(&request.name, request.price_cents()?, actor.actor_id())?;

        let mut uow = UnitOfWork::begin();
        self.dinner_repo.stage_insert(&mut uow, &dinner)?;
        uow.commit().await?;

        log::info!("디너 생성: {} '{}'", dinner.id, dinner.name);
        Ok(DinnerResponse::from(&dinner))
    }

    pub async fn get_dinner(&self, id: &str) -> AppResult<DinnerResponse> {
        let dinner = self.load_dinner(&parse_object_id(id)?).await?;
        Ok(DinnerResponse::from(&dinner))
    }

    pub async fn list_dinners(&self) -> AppResult<Vec<DinnerResponse>> {
        let dinners = self.dinner_repo.find_all_active().await?;
        Ok(dinners.iter().map(DinnerResponse::from).collect())
    }

    pub async fn update_dinner(&self, id: &str, request: DinnerRequest, actor: &AuthenticatedUser) -> AppResult<DinnerResponse> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let mut dinner = self.load_dinner(&parse_object_id(id)?).await?;
        dinner.update(&request.name, request.price_cents()?, actor.actor_id())?;

        let mut uow = UnitOfWork::begin();
        self.dinner_repo.stage_update(&mut uow, &dinner)?;
        uow.commit().await?;

        log::info!("디너 수정: {}", dinner.id);
        Ok(DinnerResponse::from(&dinner))
    }

    pub async fn delete_dinner(&self, id: &str, actor: &AuthenticatedUser) -> AppResult<()> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let mut dinner = self.load_dinner(&parse_object_id(id)?).await?;
        dinner.delete(actor.actor_id())?;

        let mut links = self.user_dinner_repo.find_by_dinner(dinner.id).await?;

        let mut uow = UnitOfWork::begin();
        let staged = self.stage_dinner_deletion(&mut uow, &dinner, &mut links, actor);
        if let Err(error) = staged {
            uow.rollback();
            return Err(error);
        }
        uow.commit().await?;

        log::info!("디너 삭제: {} (참가 정보 {}개 포함)", dinner.id, links.len());
        Ok(())
    }

    pub async fn add_user_to_dinner(
        &self,
        dinner_id: &str,
        request: AddParticipantRequest,
        actor: &AuthenticatedUser,
    ) -> AppResult<ParticipantResponse> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let dinner = self.load_dinner(&parse_object_id(dinner_id)?).await?;
        let user = self.load_user(&parse_object_id(&request.user_id)?).await?;
        let payment_status = request.payment_status()?;

        let existing = self.user_dinner_repo.find_active_link(user.id, dinner.id).await?;
        if !UserDinnerDomainService::can_add_user_to_dinner(&user, &dinner, existing.as_ref()) {
            let message = if existing.is_some() {
                "이미 디너에 등록된 사용자입니다"
            } else {
                "삭제된 사용자 또는 디너에는 참가를 등록할 수 없습니다"
            };
            return Err(AppError::ConflictError(message.to_string()));
        }

        let link = UserDinner::new(user.id, dinner.id, request.is_present, payment_status, actor.actor_id());

        let mut uow = UnitOfWork::begin();
        self.user_dinner_repo.stage_insert(&mut uow, &link)?;
        uow.commit().await?;

        log::info!("디너 참가 등록: 사용자 {} → 디너 {}", user.id, dinner.id);
        Ok(ParticipantResponse::from(&link))
    }

    pub async fn list_participants(&self, dinner_id: &str) -> AppResult<Vec<ParticipantResponse>> {
        let dinner = self.load_dinner(&parse_object_id(dinner_id)?).await?;
        let links = self.user_dinner_repo.find_by_dinner(dinner.id).await?;

        Ok(links.iter().map(ParticipantResponse::from).collect())
    }

    pub async fn update_presence(
        &self,
        dinner_id: &str,
        participant_id: &str,
        request: UpdatePresenceRequest,
        actor: &AuthenticatedUser,
    ) -> AppResult<ParticipantResponse> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let mut link = self.load_participant(dinner_id, participant_id).await?;
        link.mark_presence(request.is_present, actor.actor_id())?;

        self.save_participant(&link).await?;

        log::info!("참석 여부 변경: {} → {}", link.id, link.is_present);
        Ok(ParticipantResponse::from(&link))
    }

    pub async fn update_payment_status(
        &self,
        dinner_id: &str,
        participant_id: &str,
        request: UpdatePaymentStatusRequest,
        actor: &AuthenticatedUser,
    ) -> AppResult<ParticipantResponse> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let next = request.payment_status()?;
        let mut link = self.load_participant(dinner_id, participant_id).await?;
        link.change_payment_status(next, actor.actor_id())?;

        self.save_participant(&link).await?;

        log::info!("결제 상태 변경: {} → {}", link.id, link.payment_status);
        Ok(ParticipantResponse::from(&link))
    }

    pub async fn remove_participant(&self, dinner_id: &str, participant_id: &str, actor: &AuthenticatedUser) -> AppResult<()> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let mut link = self.load_participant(dinner_id, participant_id).await?;
        link.remove(actor.actor_id())?;

        self.save_participant(&link).await?;

        log::info!("디너 참가 취소: {}", link.id);
        Ok(())
    }

    fn stage_dinner_deletion(
        &self,
        uow: &mut UnitOfWork,
        dinner: &Dinner,
        links: &mut [UserDinner],
        actor: &AuthenticatedUser,
    ) -> AppResult<()> {
        self.dinner_repo.stage_update(uow, dinner)?;

        for link in links.iter_mut() {
            link.remove(actor.actor_id())?;
            self.user_dinner_repo.stage_update(uow, link)?;
        }
        Ok(())
    }

    async fn save_participant(&self, link: &UserDinner) -> AppResult<()> {
        let mut uow = UnitOfWork::begin();
        self.user_dinner_repo.stage_update(&mut uow, link)?;
        uow.commit().await?;
        Ok(())
    }

    async fn load_dinner(&self, id: &ObjectId) -> AppResult<Dinner> {
        self.dinner_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("디너를 찾을 수 없습니다".to_string()))
    }

    async fn load_user(&self, id: &ObjectId) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 참가 정보를 자신의 ID로 찾고, 경로의 디너에 속하는지 확인합니다.
    /// 이미 취소된 참가 정보에 대한 변경은 엔티티가 409로 거절합니다.
    async fn load_participant(&self, dinner_id: &str, participant_id: &str) -> AppResult<UserDinner> {
        let dinner_id = parse_object_id(dinner_id)?;
        let participant_id = parse_object_id(participant_id)?;

        self.user_dinner_repo
            .find_by_id(&participant_id)
            .await?
            .filter(|link| link.belongs_to(&dinner_id))
            .ok_or_else(|| AppError::NotFound("참가 정보를 찾을 수 없습니다".to_string()))
    }
}
