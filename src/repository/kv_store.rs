// ==========================================
// 工位排班基础数据 - 本地键值通道
// ==========================================
// 职责: 快照与排程结果的持久化通道（按固定键覆写，无历史、无合并）
// 实现:
// - SqliteKeyValueRepository (sqlite_kv_repo.rs): 默认本地存储
// - InMemoryKeyValueStore: 测试/临时会话
// ==========================================

use std::collections::HashMap;
use std::sync::Mutex;

use crate::repository::error::{RepositoryError, RepositoryResult};

/// 键值存储通道
pub trait KeyValueStore: Send + Sync {
    /// 读取键值（不存在返回 None）
    fn get(&self, key: &str) -> RepositoryResult<Option<String>>;

    /// 写入键值（覆写）
    fn set(&self, key: &str, value: &str) -> RepositoryResult<()>;

    /// 删除键值，返回是否存在过
    fn remove(&self, key: &str) -> RepositoryResult<bool>;
}

// ==========================================
// InMemoryKeyValueStore
// ==========================================
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> RepositoryResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> RepositoryResult<bool> {
        Ok(self.lock()?.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_overwrite_and_remove() {
        let kv = InMemoryKeyValueStore::new();
        assert_eq!(kv.get("k").unwrap(), None);

        kv.set("k", "v1").unwrap();
        kv.set("k", "v2").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v2"));

        assert!(kv.remove("k").unwrap());
        assert!(!kv.remove("k").unwrap());
    }
}
