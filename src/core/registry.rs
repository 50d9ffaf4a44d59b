//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 리포지토리와 서비스(유스케이스)를 타입별 싱글톤으로 관리하는 DI 컨테이너입니다.
//!
//! ## 주요 구성 요소
//!
//! ### ServiceLocator
//! - **전역 싱글톤 컨테이너**: 모든 서비스/리포지토리 인스턴스를 `TypeId` 기준으로 보관
//! - **지연 초기화**: 첫 `get` 호출 시점에 등록된 생성자로 인스턴스 생성
//! - **순환 참조 감지**: 생성 중인 타입을 스레드별로 추적하여 A → B → A 의존을 즉시 보고
//!
//! ### 자동 레지스트리
//! - `#[service]` / `#[repository]` 매크로(`singleton_macro`)가 `instance()`, 트레이트 구현,
//!   `inventory` 등록 정보를 생성합니다.
//! - 검색 키는 타입 이름에서 `Service`/`Repository` 접미사를 뗀 snake_case 형태입니다
//!   (`ScheduledEventRepository` → `scheduled_event`).
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    ├─ #[repository(name = "user", collection = "users")] → RepositoryRegistration
//!    ├─ #[service(name = "user")]                           → ServiceRegistration
//!    └─ inventory::collect! → 전역 레지스트리에 수집
//!
//! 2. 런타임 초기화 (main)
//!    ├─ ServiceLocator::set(Arc<Database>), ServiceLocator::set(Arc<RedisClient>)
//!    ├─ ServiceLocator::initialize_all() → 리포지토리 생성, 서비스 생성
//!    └─ repositories::create_all_indexes() → 컬렉션 인덱스 생성
//!
//! 3. 요청 처리
//!    └─ UserService::instance() → 캐시된 Arc<UserService>
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! #[service(name = "dinner")]
//! pub struct DinnerService {
//!     dinner_repo: Arc<DinnerRepository>,
//! }
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use crate::utils::display_terminal::{print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete, print_step_start, print_sub_task};
use crate::utils::string_utils::to_snake_case;

/// 모든 서비스 컴포넌트의 기본 인터페이스
///
/// `#[service]` 매크로가 적용된 구조체는 이 트레이트를 자동 구현합니다.
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// `#[repository]` 매크로가 자동 구현합니다. 인덱스 생성은 각 리포지토리의
/// `create_indexes`가 담당합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;
    fn collection_name(&self) -> &str;
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[service]` 매크로가 생성하는 등록 정보
pub struct ServiceRegistration {
    /// 등록 이름 (검색 키)
    pub name: &'static str,
    /// 인스턴스 생성 함수. `Arc<T>`를 박싱해서 반환합니다.
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// `#[repository]` 매크로가 생성하는 등록 정보
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 서비스 이름 → 등록정보 매핑 캐시
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (clean_registration_name(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

/// 리포지토리 이름 → 등록정보 매핑 캐시
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
        .map(|registration| (clean_registration_name(registration.name), registration))
        .collect();

    print_cache_initialized("Repository", cache.len());
    cache
});

/// 등록 이름에서 `_service` / `_repository` 접미사를 제거합니다.
fn clean_registration_name(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 컨테이너가 찾을 등록 종류
#[derive(Debug, PartialEq, Eq)]
enum ComponentKind {
    Service,
    Repository,
}

thread_local! {
    /// 현재 스레드에서 생성 중인 타입들 (순환 참조 감지용)
    static RESOLVING: RefCell<HashSet<TypeId>> = RefCell::new(HashSet::new());
}

/// 싱글톤 의존성 주입 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 1. 캐시에 인스턴스가 있으면 바로 반환
    /// 2. 없으면 타입 이름으로 등록 정보를 찾아 생성자를 호출 (락 밖에서)
    /// 3. 생성된 인스턴스를 캐시에 넣되, 그 사이 다른 스레드가 먼저 넣었다면 그것을 사용
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입, 순환 참조, 타입 불일치는 부트스트랩 단계의 프로그래밍 오류이므로
    /// 패닉으로 즉시 보고합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(instance) = Self::cached::<T>() {
            return instance;
        }

        let newly_resolving = RESOLVING.with(|resolving| resolving.borrow_mut().insert(type_id));
        if !newly_resolving {
            panic!("Circular dependency detected: {} is already being initialized", type_name);
        }

        let created = Self::construct::<T>(type_name);

        RESOLVING.with(|resolving| {
            resolving.borrow_mut().remove(&type_id);
        });

        let created = match created {
            Ok(instance) => instance,
            Err(message) => panic!("{}", message),
        };

        let mut instances = LOCATOR.instances.write().unwrap_or_else(PoisonError::into_inner);
        let stored = instances
            .entry(type_id)
            .or_insert_with(|| created.clone() as Arc<dyn Any + Send + Sync>)
            .clone();

        stored.downcast::<T>().unwrap_or(created)
    }

    fn cached<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(PoisonError::into_inner);
        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    fn construct<T: 'static + Send + Sync>(type_name: &str) -> Result<Arc<T>, String> {
        let boxed = match Self::lookup_key(type_name) {
            Some((ComponentKind::Repository, key)) => REPOSITORY_NAME_CACHE
                .get(&key)
                .map(|registration| (registration.constructor)()),
            Some((ComponentKind::Service, key)) => SERVICE_NAME_CACHE
                .get(&key)
                .map(|registration| (registration.constructor)()),
            None => None,
        };

        let boxed = boxed.ok_or_else(|| {
            format!(
                "Service not found: {}. Make sure it's registered with #[service] or #[repository] macro, or manually registered with ServiceLocator::set()",
                type_name
            )
        })?;

        boxed
            .downcast::<Arc<T>>()
            .map(|instance| *instance)
            .map_err(|_| format!("Type mismatch for registration: {}", type_name))
    }

    /// 전체 경로 타입 이름을 등록 종류와 검색 키로 변환합니다.
    ///
    /// `sni_events_backend::repositories::events::ScheduledEventRepository`
    /// → `(Repository, "scheduled_event")`
    fn lookup_key(type_name: &str) -> Option<(ComponentKind, String)> {
        let short_name = type_name.rsplit("::").next().unwrap_or(type_name);

        if let Some(entity) = short_name.strip_suffix("Repository") {
            Some((ComponentKind::Repository, to_snake_case(entity)))
        } else {
            short_name
                .strip_suffix("Service")
                .map(|entity| (ComponentKind::Service, to_snake_case(entity)))
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 매크로로 관리되지 않는 인프라 컴포넌트(`Database`, `RedisClient`)에 사용합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        let short_name = type_name.rsplit("::").next().unwrap_or(type_name);

        print_sub_task(short_name, "📦 Registered");

        let mut instances = LOCATOR.instances.write().unwrap_or_else(PoisonError::into_inner);
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스 인스턴스를 미리 생성합니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _boxed_instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    struct ClockSettings {
        offset_minutes: i32,
    }

    struct LedgerService {
        entries: usize,
    }

    fn ledger_service_constructor() -> Box<dyn Any + Send + Sync> {
        Box::new(Arc::new(LedgerService { entries: 3 }))
    }

    inventory::submit! {
        ServiceRegistration {
            name: "ledger_service",
            constructor: ledger_service_constructor,
        }
    }

    #[test]
    fn test_lookup_key_strips_suffix_and_snake_cases() {
        assert_eq!(
            ServiceLocator::lookup_key("sni_events_backend::repositories::events::ScheduledEventRepository"),
            Some((ComponentKind::Repository, "scheduled_event".to_string()))
        );
        assert_eq!(
            ServiceLocator::lookup_key("UserDomainService"),
            Some((ComponentKind::Service, "user_domain".to_string()))
        );
        assert_eq!(ServiceLocator::lookup_key("RedisClient"), None);
    }

    #[test]
    fn test_clean_registration_name() {
        assert_eq!(clean_registration_name("user_dinner_repository"), "user_dinner");
        assert_eq!(clean_registration_name("token_service"), "token");
        assert_eq!(clean_registration_name("event"), "event");
    }

    #[test]
    fn test_set_and_get_manual_instance() {
        ServiceLocator::set(Arc::new(ClockSettings { offset_minutes: -180 }));

        let settings = ServiceLocator::get::<ClockSettings>();
        assert_eq!(settings.offset_minutes, -180);
    }

    #[test]
    fn test_registered_service_is_singleton() {
        let first = ServiceLocator::get::<LedgerService>();
        let second = ServiceLocator::get::<LedgerService>();

        assert_eq!(first.entries, 3);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
