// ==========================================
// 工位排班基础数据 - 领域模型层
// ==========================================
// 职责: 定义人员、产线、工作站、快照与排程结果
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod line;
pub mod personnel;
pub mod snapshot;
pub mod types;

// 重导出核心类型
pub use line::{ProductionLine, Station};
pub use personnel::{Person, StationSetting, StationSettings};
pub use snapshot::{
    iso_timestamp, Assignment, ScheduleResult, WorkplaceSnapshot, EXPORT_VERSION,
    REQUIRED_COLLECTIONS,
};
pub use types::Preference;
