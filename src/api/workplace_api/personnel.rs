// ==========================================
// 人员维护
// ==========================================

use super::*;
use crate::api::validator::require_text;

impl WorkplaceApi {
    /// 新增人员（初始无工作站设定、非休假）
    ///
    /// # 错误
    /// - InvalidInput: 名称为空白
    /// - StorageError: 自动保存失败（人员已加入仓储）
    pub fn add_person(&mut self, name: &str) -> ApiResult<Person> {
        let name = require_text(name, "validation.person_name_required")?;
        let person = self.store.insert_person(name);
        tracing::info!(person_id = %person.id, "新增人员: {}", person.name);

        self.persist()?;
        Ok(person)
    }

    /// 删除人员，不存在时静默返回 false
    pub fn delete_person(&mut self, person_id: &str) -> ApiResult<bool> {
        let Some(person) = self.store.remove_person(person_id) else {
            tracing::debug!(person_id, "删除人员: 目标不存在");
            return Ok(false);
        };
        tracing::info!(person_id, "删除人员: {}", person.name);

        self.persist()?;
        Ok(true)
    }

    /// 切换休假状态
    ///
    /// # 返回
    /// - Some(on_leave): 切换后的状态
    /// - None: 人员不存在
    pub fn toggle_leave(&mut self, person_id: &str) -> ApiResult<Option<bool>> {
        let Some(person) = self.store.find_person_mut(person_id) else {
            return Ok(None);
        };
        person.on_leave = !person.on_leave;
        let on_leave = person.on_leave;
        tracing::info!(person_id, on_leave, "切换休假状态");

        self.persist()?;
        Ok(Some(on_leave))
    }

    /// 整体覆写人员的工作站设定（未出现的工作站条目被移除）
    pub fn set_person_station_settings(
        &mut self,
        person_id: &str,
        settings: StationSettings,
    ) -> ApiResult<bool> {
        let Some(person) = self.store.find_person_mut(person_id) else {
            return Ok(false);
        };
        let count = settings.len();
        person.station_settings = settings;
        tracing::info!(person_id, count, "更新工作站设定");

        self.persist()?;
        Ok(true)
    }
}
