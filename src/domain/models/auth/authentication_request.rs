//! 인증 미들웨어 동작 방식

/// 토큰이 없을 때의 처리
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    /// 토큰이 없거나 유효하지 않으면 401
    Required,
    /// 토큰이 있으면 사용자 정보를 넣고, 없으면 그대로 진행
    Optional,
}
