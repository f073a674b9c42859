// ==========================================
// 工位排班基础数据 - 持久化网关层
// ==========================================
// 职责: 实体仓储 ↔ 字节通道（本地键值存储、导入/导出设定档）
// ==========================================

pub mod error;
pub mod snapshot_gateway;

pub use error::{PersistenceError, PersistenceResult};
pub use snapshot_gateway::{
    export_file_name, parse_snapshot, ExportedFile, LoadOutcome, SnapshotGateway,
    EXPORT_FILE_PREFIX,
};
