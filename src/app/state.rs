// ==========================================
// 工位排班基础数据 - 应用状态
// ==========================================
// 职责: 组装仓储、持久化网关、排程客户端与API实例
// 约束: 仓储互斥锁不得跨 await 持有（排程请求先组装再提交）
// ==========================================

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::{ApiError, ApiResult, ScheduleApi, WorkplaceApi};
use crate::config::AppConfig;
use crate::persistence::{LoadOutcome, SnapshotGateway};
use crate::repository::{EntityStore, KeyValueStore, SqliteKeyValueRepository};
use crate::scheduler::{HttpSchedulerClient, SchedulerClient};

/// 应用状态
///
/// 基础数据维护为单写者模型，由互斥锁串行化
pub struct AppState {
    pub config: AppConfig,
    workplace: Mutex<WorkplaceApi>,
    pub schedule_api: Arc<ScheduleApi>,
}

impl AppState {
    /// 按配置创建（SQLite 本地存储 + HTTP 排程客户端）
    pub fn new(config: AppConfig) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", config.db_path);

        if let Some(parent) = Path::new(&config.db_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("无法创建数据目录 {}: {}", parent.display(), e))?;
            }
        }

        let kv: Arc<dyn KeyValueStore> = Arc::new(
            SqliteKeyValueRepository::new(&config.db_path)
                .map_err(|e| format!("无法创建SqliteKeyValueRepository: {}", e))?,
        );
        let client: Arc<dyn SchedulerClient> = Arc::new(
            HttpSchedulerClient::new(config.scheduler.clone())
                .map_err(|e| format!("无法创建排程客户端: {}", e))?,
        );

        Ok(Self::with_components(config, kv, client, EntityStore::default()))
    }

    /// 使用指定组件创建（测试时注入内存存储与模拟排程服务）
    pub fn with_components(
        config: AppConfig,
        kv: Arc<dyn KeyValueStore>,
        client: Arc<dyn SchedulerClient>,
        store: EntityStore,
    ) -> Self {
        let gateway = Arc::new(SnapshotGateway::new(kv, config.storage_keys.clone()));
        let workplace = WorkplaceApi::new(store, gateway.clone());
        let schedule_api = Arc::new(ScheduleApi::new(client, gateway));

        Self {
            config,
            workplace: Mutex::new(workplace),
            schedule_api,
        }
    }

    /// 获取基础数据API（独占）
    pub fn workplace(&self) -> ApiResult<MutexGuard<'_, WorkplaceApi>> {
        self.workplace
            .lock()
            .map_err(|e| ApiError::InternalError(format!("锁获取失败: {}", e)))
    }

    /// 启动时从本地快照恢复
    pub fn restore(&self) -> ApiResult<LoadOutcome> {
        let outcome = self.workplace()?.restore();
        match &outcome {
            LoadOutcome::Missing => tracing::info!("本地无设定快照，以空数据启动"),
            LoadOutcome::Restored {
                personnel,
                production_lines,
                stations,
            } => tracing::info!(
                personnel,
                production_lines,
                stations,
                "已从本地快照恢复"
            ),
            LoadOutcome::Failed(reason) => tracing::warn!("本地快照损坏，以空数据启动: {}", reason),
        }
        Ok(outcome)
    }
}
