// ==========================================
// 工位排班基础数据 - 基础数据维护 API
// ==========================================
// 职责: 人员/产线/工作站的新增、修改、删除，以及设定档导入导出
// 约束:
// - 校验失败: 返回 InvalidInput，仓储不变，不写快照
// - 引用不存在（删除/编辑/切换休假）: 视为已满足，静默返回
// - 每次实际修改后立即写入本地快照
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{Person, ProductionLine, Station, StationSettings};
use crate::engine::{line_overview, settings_form, station_summary, LineOverview, SettingsForm, StationSummary};
use crate::persistence::{ExportedFile, LoadOutcome, SnapshotGateway};
use crate::repository::{EntityStore, RepositoryError};

mod lines;
mod personnel;
mod stations;

// ==========================================
// WorkplaceApi
// ==========================================

/// 基础数据维护API
///
/// 职责：
/// 1. 人员维护（新增、删除、休假切换、工作站设定）
/// 2. 产线维护（新增、级联删除）
/// 3. 工作站维护（新增、编辑、删除）
/// 4. 本地快照恢复、设定档导入导出
pub struct WorkplaceApi {
    store: EntityStore,
    gateway: Arc<SnapshotGateway>,
}

impl WorkplaceApi {
    pub fn new(store: EntityStore, gateway: Arc<SnapshotGateway>) -> Self {
        Self { store, gateway }
    }

    /// 只读访问实体仓储
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// 将当前仓储写入本地快照
    fn persist(&self) -> ApiResult<()> {
        let snapshot = self.gateway.snapshot(&self.store);
        self.gateway.save(&snapshot).map_err(|e| {
            tracing::error!("自动保存失败: {}", e);
            ApiError::from(e)
        })
    }

    // ==========================================
    // 快照恢复 / 导入 / 导出
    // ==========================================

    /// 启动时从本地快照恢复（失败仅记录日志）
    pub fn restore(&mut self) -> LoadOutcome {
        self.gateway.load(&mut self.store)
    }

    /// 导入设定档（整体替换，不合并）
    pub fn import_snapshot(&mut self, bytes: &[u8]) -> ApiResult<()> {
        self.gateway.import_snapshot(bytes, &mut self.store)?;
        self.persist()
    }

    /// 导出设定档
    pub fn export_snapshot(&self) -> ApiResult<ExportedFile> {
        Ok(self.gateway.export_snapshot(&self.store)?)
    }

    // ==========================================
    // 只读视图
    // ==========================================

    pub fn list_personnel(&self) -> &[Person] {
        self.store.personnel()
    }

    pub fn list_lines(&self) -> &[ProductionLine] {
        self.store.production_lines()
    }

    pub fn list_stations(&self) -> &[Station] {
        self.store.stations()
    }

    /// 产线总览（略过悬空的工作站ID）
    pub fn line_overview(&self) -> Vec<LineOverview<'_>> {
        line_overview(self.store.production_lines(), self.store.stations())
    }

    /// 人员工作站能力摘要
    pub fn station_summary(&self, person_id: &str) -> ApiResult<StationSummary> {
        let person = self.require_person(person_id)?;
        Ok(station_summary(person, self.store.stations()))
    }

    /// 人员工作站设定表单
    pub fn settings_form(&self, person_id: &str) -> ApiResult<SettingsForm> {
        let person = self.require_person(person_id)?;
        Ok(settings_form(
            person,
            self.store.production_lines(),
            self.store.stations(),
        ))
    }

    /// 提交设定表单（整体覆写）
    pub fn submit_settings_form(&mut self, form: &SettingsForm) -> ApiResult<bool> {
        let settings: StationSettings = form.to_settings();
        self.set_person_station_settings(&form.person_id, settings)
    }

    fn require_person(&self, person_id: &str) -> ApiResult<&Person> {
        self.store
            .find_person(person_id)
            .ok_or_else(|| ApiError::from(RepositoryError::not_found("Person", person_id)))
    }
}

#[cfg(test)]
fn test_api() -> (Arc<crate::repository::InMemoryKeyValueStore>, WorkplaceApi) {
    use crate::config::StorageKeys;
    use crate::repository::{InMemoryKeyValueStore, SequentialIdGenerator};

    let kv = Arc::new(InMemoryKeyValueStore::new());
    let gateway = Arc::new(SnapshotGateway::new(kv.clone(), StorageKeys::default()));
    let store = EntityStore::new(Arc::new(SequentialIdGenerator::new("id")));
    (kv, WorkplaceApi::new(store, gateway))
}
