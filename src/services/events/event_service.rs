//! # 이벤트 유스케이스
//!
//! 이벤트와 그 하위 일정(ScheduledEvent)을 관리합니다.
//!
//! - 이벤트를 삭제하면 남아 있는 일정도 같은 `UnitOfWork`에서 함께 소프트 삭제됩니다.
//! - 일정의 `dinner_id`는 존재하고 삭제되지 않은 디너를 가리켜야 합니다.
//! - 일정은 경로의 이벤트에 속한 경우에만 조회/수정/삭제할 수 있습니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    core::errors::{AppError, AppResult},
    db::UnitOfWork,
    domain::{
        dto::events::{EventRequest, EventResponse, ScheduledEventRequest, ScheduledEventResponse},
        entities::{base::Auditable, events::{Event, ScheduledEvent}},
        models::auth::AuthenticatedUser,
        services::UserDomainService,
    },
    repositories::{
        base::BaseRepository,
        dinners::DinnerRepository,
        events::{EventRepository, ScheduledEventRepository},
    },
    utils::string_utils::parse_object_id,
};

#[service(name = "event")]
pub struct EventService {
    event_repo: Arc<EventRepository>,
    scheduled_event_repo: Arc<ScheduledEventRepository>,
    dinner_repo: Arc<DinnerRepository>,
    user_domain_service: Arc<UserDomainService>,
}

impl EventService {
    pub async fn create_event(&self, request: EventRequest, actor: &AuthenticatedUser) -> AppResult<EventResponse> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let event = Event::new(&request.name, actor.actor_id())?;

        let mut uow = UnitOfWork::begin();
        self.event_repo.stage_insert(&mut uow, &event)?;
        uow.commit().await?;

        log::info!("이벤트 생성: {} '{}'", event.id, event.name);
        Ok(EventResponse::from(&event))
    }

    pub async fn get_event(&self, id: &str) -> AppResult<EventResponse> {
        let event = self.load_event(&parse_object_id(id)?).await?;
        Ok(EventResponse::from(&event))
    }

    pub async fn list_events(&self) -> AppResult<Vec<EventResponse>> {
        let events = self.event_repo.find_all_active().await?;
        Ok(events.iter().map(EventResponse::from).collect())
    }

    pub async fn update_event(&self, id: &str, request: EventRequest, actor: &AuthenticatedUser) -> AppResult<EventResponse> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let mut event = self.load_event(&parse_object_id(id)?).await?;
        event.rename(&request.name, actor.actor_id())?;

        let mut uow = UnitOfWork::begin();
        self.event_repo.stage_update(&mut uow, &event)?;
        uow.commit().await?;

        log::info!("이벤트 수정: {}", event.id);
        Ok(EventResponse::from(&event))
    }

    /// 이벤트와 하위 일정을 함께 소프트 삭제합니다.
    pub async fn delete_event(&self, id: &str, actor: &AuthenticatedUser) -> AppResult<()> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let mut event = self.load_event(&parse_object_id(id)?).await?;
        event.delete(actor.actor_id())?;

        let mut schedules = self.scheduled_event_repo.find_by_event(event.id).await?;

        let mut uow = UnitOfWork::begin();
        let staged = self.stage_event_deletion(&mut uow, &event, &mut schedules, actor);
        if let Err(error) = staged {
            uow.rollback();
            return Err(error);
        }
        uow.commit().await?;

        log::info!("이벤트 삭제: {} (일정 {}개 포함)", event.id, schedules.len());
        Ok(())
    }

    pub async fn add_scheduled_event(
        &self,
        event_id: &str,
        request: ScheduledEventRequest,
        actor: &AuthenticatedUser,
    ) -> AppResult<ScheduledEventResponse> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let event = self.load_event(&parse_object_id(event_id)?).await?;
        event.ensure_not_deleted()?;

        let schedule = request.to_schedule()?;
        self.ensure_dinner_linkable(schedule.dinner_id).await?;

        let scheduled = ScheduledEvent::new(event.id, schedule, actor.actor_id())?;

        let mut uow = UnitOfWork::begin();
        self.scheduled_event_repo.stage_insert(&mut uow, &scheduled)?;
        uow.commit().await?;

        log::info!("일정 추가: {} → 이벤트 {}", scheduled.id, event.id);
        Ok(ScheduledEventResponse::from(&scheduled))
    }

    pub async fn list_scheduled_events(&self, event_id: &str) -> AppResult<Vec<ScheduledEventResponse>> {
        let event = self.load_event(&parse_object_id(event_id)?).await?;
        let schedules = self.scheduled_event_repo.find_by_event(event.id).await?;

        Ok(schedules.iter().map(ScheduledEventResponse::from).collect())
    }

    pub async fn update_scheduled_event(
        &self,
        event_id: &str,
        schedule_id: &str,
        request: ScheduledEventRequest,
        actor: &AuthenticatedUser,
    ) -> AppResult<ScheduledEventResponse> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let mut scheduled = self.load_scheduled_event(event_id, schedule_id).await?;

        let schedule = request.to_schedule()?;
        if schedule.dinner_id != scheduled.dinner_id {
            self.ensure_dinner_linkable(schedule.dinner_id).await?;
        }
        scheduled.reschedule(schedule, actor.actor_id())?;

        let mut uow = UnitOfWork::begin();
        self.scheduled_event_repo.stage_update(&mut uow, &scheduled)?;
        uow.commit().await?;

        log::info!("일정 수정: {}", scheduled.id);
        Ok(ScheduledEventResponse::from(&scheduled))
    }

    pub async fn delete_scheduled_event(&self, event_id: &str, schedule_id: &str, actor: &AuthenticatedUser) -> AppResult<()> {
        let actor = &self.user_domain_service.current_actor(actor).await?;
        let mut scheduled = self.load_scheduled_event(event_id, schedule_id).await?;
        scheduled.delete(actor.actor_id())?;

        let mut uow = UnitOfWork::begin();
        self.scheduled_event_repo.stage_update(&mut uow, &scheduled)?;
        uow.commit().await?;

        log::info!("일정 삭제: {}", scheduled.id);
        Ok(())
    }

    fn stage_event_deletion(
        &self,
        uow: &mut UnitOfWork,
        event: &Event,
        schedules: &mut [ScheduledEvent],
        actor: &AuthenticatedUser,
    ) -> AppResult<()> {
        self.event_repo.stage_update(uow, event)?;

        for scheduled in schedules.iter_mut() {
            scheduled.delete(actor.actor_id())?;
            self.scheduled_event_repo.stage_update(uow, scheduled)?;
        }
        Ok(())
    }

    /// 없는 디너는 404, 삭제된 디너는 409
    async fn ensure_dinner_linkable(&self, dinner_id: Option<ObjectId>) -> AppResult<()> {
        let Some(dinner_id) = dinner_id else {
            return Ok(());
        };

        let dinner = self
            .dinner_repo
            .find_by_id(&dinner_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("디너를 찾을 수 없습니다: {}", dinner_id)))?;

        if dinner.is_deleted() {
            return Err(AppError::ConflictError("삭제된 디너에는 일정을 연결할 수 없습니다".to_string()));
        }
        Ok(())
    }

    async fn load_event(&self, id: &ObjectId) -> AppResult<Event> {
        self.event_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("이벤트를 찾을 수 없습니다".to_string()))
    }

    /// 경로의 이벤트에 속한 일정만 반환합니다.
    async fn load_scheduled_event(&self, event_id: &str, schedule_id: &str) -> AppResult<ScheduledEvent> {
        let event_id = parse_object_id(event_id)?;
        let schedule_id = parse_object_id(schedule_id)?;

        self.scheduled_event_repo
            .find_by_id(&schedule_id)
            .await?
            .filter(|scheduled| scheduled.belongs_to(&event_id))
            .ok_or_else(|| AppError::NotFound("일정을 찾을 수 없습니다".to_string()))
    }
}
