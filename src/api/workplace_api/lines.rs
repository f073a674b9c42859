// ==========================================
// 产线维护
// ==========================================

use super::*;
use crate::api::validator::require_text;

impl WorkplaceApi {
    /// 新增空产线
    pub fn add_line(&mut self, name: &str) -> ApiResult<ProductionLine> {
        let name = require_text(name, "validation.line_name_required")?;
        let line = self.store.insert_line(name);
        tracing::info!(line_id = %line.id, "新增产线: {}", line.name);

        self.persist()?;
        Ok(line)
    }

    /// 删除产线，并级联删除其下所有工作站
    ///
    /// 人员设定中指向被删工作站的条目保留不动
    pub fn delete_line(&mut self, line_id: &str) -> ApiResult<bool> {
        let Some((line, removed)) = self.store.remove_line(line_id) else {
            tracing::debug!(line_id, "删除产线: 目标不存在");
            return Ok(false);
        };
        tracing::info!(
            line_id,
            cascaded_stations = removed.len(),
            "删除产线: {}",
            line.name
        );

        self.persist()?;
        Ok(true)
    }
}
