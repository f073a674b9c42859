// ==========================================
// 工作站维护
// ==========================================

use super::*;
use crate::api::validator::require_text;
use crate::i18n::t_with_args;

impl WorkplaceApi {
    /// 新增工作站并追加到所属产线序列末尾
    ///
    /// # 错误
    /// - InvalidInput: 未选择产线或名称为空白
    /// - NotFound: 产线不存在（两个集合均不变）
    pub fn add_station(
        &mut self,
        line_id: &str,
        name: &str,
        high_priority: bool,
        priority_assign: bool,
    ) -> ApiResult<Station> {
        if line_id.trim().is_empty() {
            return Err(ApiError::InvalidInput(crate::i18n::t(
                "validation.station_info_incomplete",
            )));
        }
        let name = require_text(name, "validation.station_info_incomplete")?;

        let station = self
            .store
            .insert_station(line_id, name, high_priority, priority_assign)?;
        tracing::info!(
            station_id = %station.id,
            line_id,
            "{}",
            t_with_args("messages.station_added", &[("name", &station.name)])
        );

        self.persist()?;
        Ok(station)
    }

    /// 编辑工作站（名称、顺序、两个旗标）；所属产线不可更改
    ///
    /// 工作站不存在时静默返回 false
    pub fn edit_station(
        &mut self,
        station_id: &str,
        name: &str,
        order: i32,
        high_priority: bool,
        priority_assign: bool,
    ) -> ApiResult<bool> {
        let name = require_text(name, "validation.station_name_required")?;

        let Some(station) = self.store.find_station_mut(station_id) else {
            tracing::debug!(station_id, "编辑工作站: 目标不存在");
            return Ok(false);
        };
        station.name = name;
        station.order = Some(order);
        station.high_priority = high_priority;
        station.priority_assign = priority_assign;
        tracing::info!(station_id, order, "编辑工作站: {}", station.name);

        self.persist()?;
        Ok(true)
    }

    /// 删除工作站（同时从所属产线序列移除）
    pub fn delete_station(&mut self, station_id: &str) -> ApiResult<bool> {
        let Some(station) = self.store.remove_station(station_id) else {
            return Ok(false);
        };
        tracing::info!(station_id, line_id = %station.line_id, "删除工作站: {}", station.name);

        self.persist()?;
        Ok(true)
    }
}
