// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的临时数据库与API环境
// ==========================================

use chrono::NaiveDate;
use std::error::Error;
use std::sync::Arc;
use tempfile::NamedTempFile;

use clinic_roster::api::HolidayApi;
use clinic_roster::config::CalendarConfig;
use clinic_roster::engine::festival::StaticFestivalTable;
use clinic_roster::engine::resolver::HolidayResolver;
use clinic_roster::repository::holiday_repo::HolidayRepository;

/// API 集成测试环境
///
/// 临时数据库文件在环境销毁时自动删除
pub struct ApiTestEnv {
    pub db_path: String,
    pub repo: Arc<HolidayRepository>,
    pub resolver: Arc<HolidayResolver>,
    pub holiday_api: HolidayApi,
    _temp_file: NamedTempFile,
}

impl ApiTestEnv {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Self::with_config(CalendarConfig::default())
    }

    pub fn with_config(config: CalendarConfig) -> Result<Self, Box<dyn Error>> {
        clinic_roster::logging::init_test();
        // 文案断言依赖中文 locale，与运行环境无关
        clinic_roster::i18n::set_locale("zh-CN");

        let temp_file = NamedTempFile::new()?;
        let db_path = temp_file.path().to_str().unwrap().to_string();

        let repo = Arc::new(HolidayRepository::new(&db_path)?);
        let resolver = Arc::new(HolidayResolver::new(
            repo.clone(),
            Box::new(StaticFestivalTable),
        ));
        let holiday_api = HolidayApi::new(repo.clone(), resolver.clone(), config);

        Ok(Self {
            db_path,
            repo,
            resolver,
            holiday_api,
            _temp_file: temp_file,
        })
    }
}

/// 日期字面量
pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("测试日期格式错误")
}
