//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.
//! 실패 응답은 핸들러 에러와 같은 `{"error": "..."}` 형태의 401입니다.
//! 역할 검사는 라우트가 아니라 유스케이스에서 저장된 사용자 기준으로 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 토큰이 없거나 유효하지 않으면 401
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 토큰이 있을 때만 사용자 정보를 넣고 요청은 항상 통과
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use crate::domain::entities::users::{User, UserRole};
    use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
    use crate::domain::value_objects::{Cpf, Email, Password, PhoneNumber};
    use crate::services::auth::TokenService;
    use super::*;

    fn user(role: UserRole) -> User {
        User::new(
            "Maria Souza",
            Email::parse("maria@sni.org").unwrap(),
            Password::hash("segredo123", 4).unwrap(),
            PhoneNumber::parse("11987654321").unwrap(),
            Cpf::parse("52998224725").unwrap(),
            role,
            None,
        )
        .unwrap()
    }

    fn bearer(user: &User) -> String {
        let token = TokenService::instance().generate_access_token(user).unwrap();
        format!("Bearer {}", token)
    }

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.email)
    }

    async fn maybe(user: OptionalUser) -> HttpResponse {
        HttpResponse::Ok().body(if user.0.is_some() { "member" } else { "anonymous" })
    }

    #[actix_web::test]
    async fn test_required_rejects_missing_token_with_json_error() {
        let app = test::init_service(
            App::new().service(web::scope("/p").wrap(AuthMiddleware::required()).route("", web::get().to(whoami)))
        ).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/p").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_required_rejects_garbage_token() {
        let app = test::init_service(
            App::new().service(web::scope("/p").wrap(AuthMiddleware::required()).route("", web::get().to(whoami)))
        ).await;

        let req = test::TestRequest::get()
            .uri("/p")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_required_passes_valid_token() {
        let app = test::init_service(
            App::new().service(web::scope("/p").wrap(AuthMiddleware::required()).route("", web::get().to(whoami)))
        ).await;

        let req = test::TestRequest::get()
            .uri("/p")
            .insert_header(("Authorization", bearer(&user(UserRole::User))))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body, "maria@sni.org");
    }

    #[actix_web::test]
    async fn test_claims_role_reaches_handler() {
        async fn role(user: AuthenticatedUser) -> HttpResponse {
            HttpResponse::Ok().body(user.role.to_string())
        }

        let app = test::init_service(
            App::new().service(web::scope("/r").wrap(AuthMiddleware::required()).route("", web::get().to(role)))
        ).await;

        let req = test::TestRequest::get()
            .uri("/r")
            .insert_header(("Authorization", bearer(&user(UserRole::Admin))))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, UserRole::Admin.to_string());
    }

    #[actix_web::test]
    async fn test_optional_lets_anonymous_through() {
        let app = test::init_service(
            App::new().service(web::scope("/o").wrap(AuthMiddleware::optional()).route("", web::get().to(maybe)))
        ).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/o").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "anonymous");

        let req = test::TestRequest::get()
            .uri("/o")
            .insert_header(("Authorization", bearer(&user(UserRole::User))))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(test::read_body(resp).await, "member");
    }
}
