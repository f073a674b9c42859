// ==========================================
// 工位排班基础数据 - 排程执行 API
// ==========================================
// 职责:
// 1. 由当前实体集合组装排程请求并提交外部服务
// 2. 成功后暂存排程结果，供结果页读取
// 3. 读取（并消费）暂存结果，按产线分组投影
// 约束: 排程失败时实体仓储与已暂存的结果均不变
// ==========================================

use std::sync::Arc;

use chrono::Utc;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{iso_timestamp, ScheduleResult};
use crate::engine::{project_result, ScheduleReport};
use crate::i18n::t;
use crate::persistence::SnapshotGateway;
use crate::repository::EntityStore;
use crate::scheduler::{ScheduleRequest, SchedulerClient};

/// 排程执行API
pub struct ScheduleApi {
    client: Arc<dyn SchedulerClient>,
    gateway: Arc<SnapshotGateway>,
}

impl ScheduleApi {
    pub fn new(client: Arc<dyn SchedulerClient>, gateway: Arc<SnapshotGateway>) -> Self {
        Self { client, gateway }
    }

    /// 组装排程请求（三个集合的当前内容 + 当前时间）
    ///
    /// 在持有仓储锁期间调用，生成的请求不再引用仓储
    pub fn build_request(store: &EntityStore) -> ScheduleRequest {
        if store.is_empty() {
            tracing::warn!("基础数据为空，仍按原样提交排程请求");
        }
        ScheduleRequest {
            personnel: store.personnel().to_vec(),
            production_lines: store.production_lines().to_vec(),
            stations: store.stations().to_vec(),
            timestamp: iso_timestamp(Utc::now()),
        }
    }

    /// 提交排程并暂存结果
    ///
    /// # 错误
    /// - SchedulerError: 网络失败、非 2xx 响应或结果无法解析
    /// - StorageError: 结果暂存失败
    pub async fn execute(&self, request: ScheduleRequest) -> ApiResult<ScheduleResult> {
        tracing::info!(
            personnel = request.personnel.len(),
            production_lines = request.production_lines.len(),
            stations = request.stations.len(),
            "提交排程请求"
        );

        let result = self.client.submit(&request).await.map_err(|e| {
            tracing::error!("排程执行失败: {}", e);
            ApiError::from(e)
        })?;

        self.gateway.save_schedule_result(&result)?;
        tracing::info!(assignments = result.assignments.len(), "排程结果已暂存");
        Ok(result)
    }

    /// 读取最近一次排程结果并按产线分组
    ///
    /// 结果读取后即从本地通道移除
    pub fn latest_report(&self) -> ApiResult<ScheduleReport> {
        let result = self
            .gateway
            .take_schedule_result()?
            .ok_or_else(|| ApiError::NotFound(t("errors.no_schedule_result")))?;
        Ok(project_result(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageKeys;
    use crate::domain::{Assignment, Person, ProductionLine, Station};
    use crate::repository::{InMemoryKeyValueStore, KeyValueStore, SequentialIdGenerator};
    use crate::scheduler::{SchedulerError, SchedulerResult};
    use async_trait::async_trait;

    struct FixedClient(ScheduleResult);

    #[async_trait]
    impl SchedulerClient for FixedClient {
        async fn submit(&self, _request: &ScheduleRequest) -> SchedulerResult<ScheduleResult> {
            Ok(self.0.clone())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl SchedulerClient for FailingClient {
        async fn submit(&self, _request: &ScheduleRequest) -> SchedulerResult<ScheduleResult> {
            Err(SchedulerError::Status {
                status: 500,
                body: "infeasible".to_string(),
            })
        }
    }

    fn gateway() -> Arc<SnapshotGateway> {
        Arc::new(SnapshotGateway::new(
            Arc::new(InMemoryKeyValueStore::new()),
            StorageKeys::default(),
        ))
    }

    fn sample_result() -> ScheduleResult {
        let line = ProductionLine::new("L1".into(), "Line A".into());
        ScheduleResult {
            timestamp: "2024-05-01T08:00:00".to_string(),
            assignments: vec![Assignment {
                person: Person::new("p1".into(), "Ann".into()),
                station: Station::new("s1".into(), "Weld".into(), "L1".into(), false, false),
                line,
            }],
        }
    }

    #[test]
    fn test_build_request_copies_collections() {
        let mut store = EntityStore::new(Arc::new(SequentialIdGenerator::new("id")));
        store.insert_person("Ann".to_string());
        let line = store.insert_line("Line A".to_string());
        store.insert_station(&line.id, "Weld".to_string(), false, false).unwrap();

        let request = ScheduleApi::build_request(&store);
        assert_eq!(request.personnel.len(), 1);
        assert_eq!(request.production_lines.len(), 1);
        assert_eq!(request.stations.len(), 1);
        assert!(request.timestamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_execute_then_read_report_once() {
        let api = ScheduleApi::new(Arc::new(FixedClient(sample_result())), gateway());
        let store = EntityStore::default();

        let result = api.execute(ScheduleApi::build_request(&store)).await.unwrap();
        assert_eq!(result.assignments.len(), 1);

        let report = api.latest_report().unwrap();
        assert_eq!(report.total_assignments(), 1);
        assert!(report.groups.contains_key("Line A"));

        assert!(matches!(api.latest_report(), Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_failed_execute_keeps_previous_result() {
        let gateway = gateway();
        gateway.save_schedule_result(&sample_result()).unwrap();

        let api = ScheduleApi::new(Arc::new(FailingClient), gateway);
        let err = api
            .execute(ScheduleApi::build_request(&EntityStore::default()))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "SCHEDULER_ERROR");

        let report = api.latest_report().unwrap();
        assert_eq!(report.timestamp, "2024-05-01T08:00:00");
    }

    #[test]
    fn test_corrupt_stored_result_is_internal_error() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        kv.set("scheduleResults", "{not json").unwrap();
        let gateway = Arc::new(SnapshotGateway::new(kv.clone(), StorageKeys::default()));

        let api = ScheduleApi::new(Arc::new(FailingClient), gateway);
        let err = api.latest_report().unwrap_err();
        assert_eq!(err.code(), "INTERNAL_ERROR");

        // 读取即清除，损坏的结果不会反复报错
        assert_eq!(kv.get("scheduleResults").unwrap(), None);
    }
}
