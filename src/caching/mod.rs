//! 캐싱 계층 모듈
//!
//! 리포지토리의 단건 조회(read-through)에 사용하는 Redis 캐시입니다.
//! 쓰기 작업은 `UnitOfWork` 커밋 이후 해당 키를 삭제하는 방식으로 무효화합니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! CACHE_TTL_SECONDS=600             # 기본값
//! ```

pub mod redis;
