// ==========================================
// 工位排班基础数据 - 快照网关
// ==========================================
// 职责:
// 1. 生成实体集合快照并写入本地键值通道（固定键，覆写）
// 2. 启动时从本地通道恢复（原子：完整解析校验后再整体替换）
// 3. 设定档导入（整体替换，不合并）/ 导出（带 version 与日期文件名）
// 4. 排程结果的暂存与一次性读取
// ==========================================

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::StorageKeys;
use crate::domain::{iso_timestamp, ScheduleResult, WorkplaceSnapshot, REQUIRED_COLLECTIONS};
use crate::persistence::error::{PersistenceError, PersistenceResult};
use crate::repository::{EntityStore, KeyValueStore};

/// 导出文件名前缀
pub const EXPORT_FILE_PREFIX: &str = "workplace_settings_";

// ==========================================
// 输出类型
// ==========================================

/// 导出的设定档
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    /// workplace_settings_<YYYY-MM-DD>.json
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// 本地恢复结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 本地没有快照，仓储保持初始空状态
    Missing,
    /// 已恢复
    Restored {
        personnel: usize,
        production_lines: usize,
        stations: usize,
    },
    /// 快照损坏，仓储未被修改
    Failed(String),
}

// ==========================================
// 快照解析
// ==========================================

/// 解析快照字节
///
/// 三个集合字段（personnel / productionLines / stations）必须存在且不为 null，
/// 否则返回格式错误。解析在临时结构上完成，调用方据此决定是否替换仓储。
pub fn parse_snapshot(bytes: &[u8]) -> PersistenceResult<WorkplaceSnapshot> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| PersistenceError::InvalidFormat("顶层必须是 JSON 对象".to_string()))?;

    for field in REQUIRED_COLLECTIONS {
        match object.get(field) {
            None | Some(Value::Null) => {
                return Err(PersistenceError::MissingCollection(field.to_string()))
            }
            Some(_) => {}
        }
    }

    serde_json::from_value(value).map_err(|e| PersistenceError::InvalidFormat(e.to_string()))
}

/// 导出文件名（按 UTC 日期）
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("{}{}.json", EXPORT_FILE_PREFIX, now.format("%Y-%m-%d"))
}

// ==========================================
// SnapshotGateway
// ==========================================
pub struct SnapshotGateway {
    kv: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl SnapshotGateway {
    pub fn new(kv: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { kv, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// 生成当前快照（savedAt = 当前时间）
    pub fn snapshot(&self, store: &EntityStore) -> WorkplaceSnapshot {
        self.snapshot_at(store, Utc::now())
    }

    pub fn snapshot_at(&self, store: &EntityStore, now: DateTime<Utc>) -> WorkplaceSnapshot {
        WorkplaceSnapshot {
            personnel: store.personnel().to_vec(),
            production_lines: store.production_lines().to_vec(),
            stations: store.stations().to_vec(),
            version: None,
            saved_at: Some(iso_timestamp(now)),
        }
    }

    /// 写入本地通道（覆写旧值）
    pub fn save(&self, snapshot: &WorkplaceSnapshot) -> PersistenceResult<()> {
        let json = serde_json::to_string(snapshot)?;
        self.kv.set(&self.keys.settings, &json)?;
        tracing::debug!(
            personnel = snapshot.personnel.len(),
            production_lines = snapshot.production_lines.len(),
            stations = snapshot.stations.len(),
            "快照已保存"
        );
        Ok(())
    }

    /// 从本地通道恢复
    ///
    /// 读取或解析失败只记录日志，仓储保持调用前的状态。
    pub fn load(&self, store: &mut EntityStore) -> LoadOutcome {
        let raw = match self.kv.get(&self.keys.settings) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!("本地没有已保存的设定");
                return LoadOutcome::Missing;
            }
            Err(e) => {
                tracing::error!("读取本地设定时发生错误: {}", e);
                return LoadOutcome::Failed(e.to_string());
            }
        };

        match parse_snapshot(raw.as_bytes()) {
            Ok(snapshot) => {
                let outcome = LoadOutcome::Restored {
                    personnel: snapshot.personnel.len(),
                    production_lines: snapshot.production_lines.len(),
                    stations: snapshot.stations.len(),
                };
                store.replace_with(snapshot);
                tracing::info!(?outcome, "已恢复本地设定");
                outcome
            }
            Err(e) => {
                tracing::error!("载入本地设定时发生错误: {}", e);
                LoadOutcome::Failed(e.to_string())
            }
        }
    }

    /// 导入设定档，成功后整体替换仓储
    ///
    /// 失败时仓储不变。写回本地通道由调用方负责。
    pub fn import_snapshot(&self, bytes: &[u8], store: &mut EntityStore) -> PersistenceResult<()> {
        let snapshot = parse_snapshot(bytes)?;
        tracing::info!(
            personnel = snapshot.personnel.len(),
            production_lines = snapshot.production_lines.len(),
            stations = snapshot.stations.len(),
            version = ?snapshot.version,
            "导入设定档"
        );
        store.replace_with(snapshot);
        Ok(())
    }

    /// 导出设定档
    pub fn export_snapshot(&self, store: &EntityStore) -> PersistenceResult<ExportedFile> {
        self.export_snapshot_at(store, Utc::now())
    }

    pub fn export_snapshot_at(
        &self,
        store: &EntityStore,
        now: DateTime<Utc>,
    ) -> PersistenceResult<ExportedFile> {
        let snapshot = self.snapshot_at(store, now).into_export();
        let bytes = serde_json::to_vec_pretty(&snapshot)?;
        Ok(ExportedFile {
            file_name: export_file_name(now),
            bytes,
        })
    }

    // ==========================================
    // 排程结果
    // ==========================================

    /// 暂存排程结果（覆写上一次结果）
    pub fn save_schedule_result(&self, result: &ScheduleResult) -> PersistenceResult<()> {
        let json = serde_json::to_string(result)?;
        self.kv.set(&self.keys.schedule_result, &json)?;
        Ok(())
    }

    /// 读取并移除暂存的排程结果
    pub fn take_schedule_result(&self) -> PersistenceResult<Option<ScheduleResult>> {
        let raw = match self.kv.get(&self.keys.schedule_result)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        self.kv.remove(&self.keys.schedule_result)?;

        let result = serde_json::from_str(&raw)
            .map_err(|e| PersistenceError::CorruptScheduleResult(e.to_string()))?;
        Ok(Some(result))
    }
}
