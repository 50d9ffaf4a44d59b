//! SNI 이벤트 백엔드
//!
//! 사용자, 이벤트(일정 포함), 디너와 디너 참가 정보를 관리하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원 가입, 프로필/비밀번호 변경, 소프트 삭제, 이름/이메일 필터 페이지 조회
//! - **JWT 인증**: HS256 액세스 토큰, 역할(User/Admin) 기반 권한
//! - **이벤트/디너**: 일정 관리, 참가자 등록, 참석 여부와 결제 상태 관리
//! - **감사 정보**: 모든 엔티티의 생성/수정/삭제 시각과 행위자 기록
//! - **싱글톤 DI**: `inventory` 기반 자동 등록 컨테이너
//! - **MongoDB + Redis**: 영구 저장과 단건 조회 캐시
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 유스케이스 (UnitOfWork 경계)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← Specification 기반 조회, 변경 스테이징
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! ```rust,ignore
//! use sni_events_backend::services::dinners::DinnerService;
//!
//! let participants = DinnerService::instance().list_participants(&dinner_id).await?;
//! ```

pub mod caching;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
