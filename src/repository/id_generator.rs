// ==========================================
// 工位排班基础数据 - 实体ID生成器
// ==========================================
// 职责: 为人员/产线/工作站分配ID
// 说明: 由 EntityStore 注入使用，唯一性由 EntityStore 最终保证
// ==========================================

use std::sync::atomic::{AtomicU64, Ordering};

/// ID 生成器
pub trait IdGenerator: Send + Sync {
    /// 生成下一个ID
    fn next_id(&self) -> String;
}

// ==========================================
// UuidIdGenerator - 默认实现 (UUID v4)
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

// ==========================================
// SequentialIdGenerator - 单调递增
// ==========================================
// 用途: 测试与可复现的样例数据
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_monotonic() {
        let gen = SequentialIdGenerator::new("id-");
        assert_eq!(gen.next_id(), "id-1");
        assert_eq!(gen.next_id(), "id-2");
        assert_eq!(gen.next_id(), "id-3");
    }

    #[test]
    fn test_uuid_ids_differ() {
        let gen = UuidIdGenerator;
        assert_ne!(gen.next_id(), gen.next_id());
    }
}
