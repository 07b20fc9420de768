// ==========================================
// 诊所医生排班系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::HolidayApi;
use crate::config::CalendarConfig;
use crate::engine::festival::StaticFestivalTable;
use crate::engine::resolver::HolidayResolver;
use crate::repository::error::RepositoryResult;
use crate::repository::holiday_repo::HolidayRepository;

/// 应用状态
///
/// 仓储与解析引擎在 API 间共享；缓存归解析引擎独占
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 节假日管理API
    pub holiday_api: Arc<HolidayApi>,

    /// 工作日解析引擎（排班/报表直接取用）
    pub resolver: Arc<HolidayResolver>,
}

impl AppState {
    pub fn new(db_path: String, config: CalendarConfig) -> RepositoryResult<Self> {
        // 运营文案默认中文（rust-i18n 的内置默认是 "en"）
        crate::i18n::set_locale("zh-CN");

        let repo = Arc::new(HolidayRepository::new(&db_path)?);
        let resolver = Arc::new(HolidayResolver::new(
            repo.clone(),
            Box::new(StaticFestivalTable),
        ));
        let holiday_api = Arc::new(HolidayApi::new(repo, resolver.clone(), config));

        Ok(Self {
            db_path,
            holiday_api,
            resolver,
        })
    }
}
