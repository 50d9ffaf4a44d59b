//! # Unit of Work
//!
//! 하나의 유스케이스에서 발생하는 쓰기 작업을 모아 두었다가 한 번에 커밋합니다.
//!
//! ```text
//! UnitOfWork::begin()
//!   ├─ register_insert / register_update   (메모리에만 기록, ChangeSet)
//!   ├─ commit()   → MongoDB 트랜잭션으로 일괄 적용 → 캐시 키 무효화
//!   └─ rollback() → 기록된 변경 폐기 (저장소는 건드리지 않음)
//! ```
//!
//! 커밋 도중 하나라도 실패하면 트랜잭션을 abort하고 모든 변경을 버린 뒤 에러를 반환합니다.
//! `DatabaseConfig::use_transactions()`가 `false`이면 트랜잭션 없이 순서대로 적용합니다.
//!
//! ## 낙관적 잠금
//!
//! 교체(Replace)는 `{_id, audit.version: <로드 시점 버전>}` 조건으로 적용되고 버전을 1 올립니다.
//! 그 사이 다른 요청이 먼저 커밋했다면 일치하는 문서가 없으므로 409 Conflict가 됩니다.

use std::sync::Arc;
use mongodb::ClientSession;
use mongodb::bson::{self, Document, doc, oid::ObjectId};
use serde::Serialize;
use crate::caching::redis::RedisClient;
use crate::config::DatabaseConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::ServiceLocator;
use crate::db::{Database, map_write_error};

/// 아직 저장소에 반영되지 않은 단일 변경
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    Insert {
        collection: String,
        document: Document,
    },
    Replace {
        collection: String,
        id: ObjectId,
        /// 로드 시점의 `audit.version`. 저장소의 값이 다르면 적용되지 않습니다.
        expected_version: i64,
        document: Document,
    },
}

impl PendingChange {
    pub fn collection(&self) -> &str {
        match self {
            PendingChange::Insert { collection, .. } | PendingChange::Replace { collection, .. } => collection,
        }
    }
}

/// 커밋 대기 중인 변경 목록과 커밋 후 지울 캐시 키
#[derive(Debug, Default)]
pub struct ChangeSet {
    changes: Vec<PendingChange>,
    cache_keys: Vec<String>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: PendingChange) {
        self.changes.push(change);
    }

    pub fn invalidate(&mut self, cache_key: impl Into<String>) {
        let cache_key = cache_key.into();
        if !self.cache_keys.contains(&cache_key) {
            self.cache_keys.push(cache_key);
        }
    }

    pub fn changes(&self) -> &[PendingChange] {
        &self.changes
    }

    pub fn cache_keys(&self) -> &[String] {
        &self.cache_keys
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// 모든 변경을 버리고 버린 개수를 반환합니다.
    pub fn clear(&mut self) -> usize {
        let discarded = self.changes.len();
        self.changes.clear();
        self.cache_keys.clear();
        discarded
    }
}

/// 교체 대상 필터. 버전 필드가 없는 기존 문서는 버전 0으로 취급합니다.
pub fn replace_filter(id: ObjectId, expected_version: i64) -> Document {
    if expected_version == 0 {
        doc! {
            "_id": id,
            "$or": [
                { "audit.version": 0_i64 },
                { "audit.version": { "$exists": false } },
            ],
        }
    } else {
        doc! { "_id": id, "audit.version": expected_version }
    }
}

/// 저장할 문서의 `audit.version`을 `expected_version + 1`로 설정합니다.
fn bump_version(document: &mut Document, expected_version: i64) -> AppResult<()> {
    let audit = document
        .get_document_mut("audit")
        .map_err(|e| AppError::InternalError(format!("audit 필드가 없는 문서입니다: {}", e)))?;
    audit.insert("version", expected_version + 1);
    Ok(())
}

/// 엔티티를 저장용 BSON 문서로 직렬화합니다.
pub fn to_document<T: Serialize>(entity: &T) -> AppResult<Document> {
    bson::to_document(entity)
        .map_err(|e| AppError::InternalError(format!("BSON 직렬화 실패: {}", e)))
}

pub struct UnitOfWork {
    db: Arc<Database>,
    /// 커밋 후 무효화할 캐시. 없으면 무효화를 건너뜁니다.
    cache: Option<Arc<RedisClient>>,
    use_transactions: bool,
    pending: ChangeSet,
}

impl UnitOfWork {
    pub fn new(db: Arc<Database>, cache: Option<Arc<RedisClient>>, use_transactions: bool) -> Self {
        Self {
            db,
            cache,
            use_transactions,
            pending: ChangeSet::new(),
        }
    }

    /// 컨테이너에 등록된 인프라로 새 작업 단위를 시작합니다.
    pub fn begin() -> Self {
        Self::new(
            ServiceLocator::get::<Database>(),
            Some(ServiceLocator::get::<RedisClient>()),
            DatabaseConfig::use_transactions(),
        )
    }

    pub fn register_insert<T: Serialize>(&mut self, collection: &str, entity: &T) -> AppResult<()> {
        let document = to_document(entity)?;
        self.pending.push(PendingChange::Insert {
            collection: collection.to_string(),
            document,
        });
        Ok(())
    }

    /// 기존 문서 전체 교체를 기록하고, 커밋 후 무효화할 캐시 키를 함께 등록합니다.
    ///
    /// `expected_version`은 엔티티를 로드했을 때의 `audit.version`입니다.
    pub fn register_update<T: Serialize>(
        &mut self,
        collection: &str,
        id: ObjectId,
        expected_version: i64,
        entity: &T,
        cache_key: String,
    ) -> AppResult<()> {
        let mut document = to_document(entity)?;
        document.remove("_id");
        bump_version(&mut document, expected_version)?;

        self.pending.push(PendingChange::Replace {
            collection: collection.to_string(),
            id,
            expected_version,
            document,
        });
        self.pending.invalidate(cache_key);
        Ok(())
    }

    pub fn pending(&self) -> &ChangeSet {
        &self.pending
    }

    /// 기록된 변경을 모두 적용합니다. 적용된 변경 수를 반환합니다.
    ///
    /// 실패 시 트랜잭션을 abort하고 기록된 변경을 폐기합니다.
    pub async fn commit(mut self) -> AppResult<usize> {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return Ok(0);
        }

        let database = self.db.get_database();

        if self.use_transactions {
            let mut session = self.db.client().start_session().await?;
            session.start_transaction().await?;

            for change in pending.changes() {
                if let Err(error) = apply_change(&database, change, Some(&mut session)).await {
                    if let Err(abort_error) = session.abort_transaction().await {
                        log::error!("트랜잭션 abort 실패: {}", abort_error);
                    }
                    log::warn!("커밋 실패, {}개 변경 롤백: {}", pending.len(), error);
                    return Err(error);
                }
            }

            session.commit_transaction().await?;
        } else {
            for change in pending.changes() {
                if let Err(error) = apply_change(&database, change, None).await {
                    log::warn!("커밋 실패 (트랜잭션 비활성), 남은 변경 폐기: {}", error);
                    return Err(error);
                }
            }
        }

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.del_multiple(pending.cache_keys()).await {
                log::warn!("캐시 무효화 실패: {}", e);
            }
        }

        log::debug!("UnitOfWork 커밋: {}개 변경", pending.len());
        Ok(pending.len())
    }

    /// 기록된 변경을 모두 버립니다. 저장소에는 아무 것도 반영되지 않습니다.
    pub fn rollback(mut self) -> usize {
        let discarded = self.pending.clear();
        if discarded > 0 {
            log::info!("UnitOfWork 롤백: {}개 변경 폐기", discarded);
        }
        discarded
    }
}

impl Drop for UnitOfWork {
    fn drop(&mut self) {
        if !self.pending.is_empty() {
            log::warn!(
                "커밋되지 않은 UnitOfWork가 해제됨: {}개 변경 폐기",
                self.pending.len()
            );
        }
    }
}

async fn apply_change(
    database: &mongodb::Database,
    change: &PendingChange,
    session: Option<&mut ClientSession>,
) -> AppResult<()> {
    match change {
        PendingChange::Insert { collection, document } => {
            let target = database.collection::<Document>(collection);
            let action = target.insert_one(document);
            let result = match session {
                Some(session) => action.session(session).await,
                None => action.await,
            };
            result.map_err(|e| map_write_error(e, "이미 존재하는 데이터입니다"))?;
        }
        PendingChange::Replace { collection, id, expected_version, document } => {
            let target = database.collection::<Document>(collection);
            let action = target.replace_one(replace_filter(*id, *expected_version), document);
            let result = match session {
                Some(session) => action.session(session).await,
                None => action.await,
            }
            .map_err(|e| map_write_error(e, "이미 존재하는 데이터입니다"))?;

            if result.matched_count == 0 {
                return Err(AppError::ConflictError(format!(
                    "다른 요청이 먼저 변경했습니다. 다시 조회한 뒤 시도하세요 ({} {})",
                    change.collection(),
                    id
                )));
            }
        }
    }

    Ok(())
}
