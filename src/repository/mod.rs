// ==========================================
// 工位排班基础数据 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务校验（名称非空等由 API 层负责）
// ==========================================
// 职责:
// - EntityStore: 内存实体集合与引用完整性
// - KeyValueStore: 本地持久化通道
// ==========================================

pub mod entity_store;
pub mod error;
pub mod id_generator;
pub mod kv_store;
pub mod sqlite_kv_repo;

// 重导出核心仓储
pub use entity_store::EntityStore;
pub use error::{RepositoryError, RepositoryResult};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use kv_store::{InMemoryKeyValueStore, KeyValueStore};
pub use sqlite_kv_repo::SqliteKeyValueRepository;
