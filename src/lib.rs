// ==========================================
// 诊所医生排班系统 - 节假日日历核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 排班管理的节假日/工作日判定核心
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 节假日解析规则
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 组装与入口
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{HolidayKind, HolidaySource};

// 领域实体
pub use domain::{HolidayInfo, HolidayRecord, ResolvedDay};

// 引擎
pub use engine::{FestivalSource, HolidayResolver, StaticFestivalTable};

// API
pub use api::HolidayApi;

// 配置
pub use config::CalendarConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "诊所医生排班系统";

// 排班年份下限（产品约束，可经配置覆盖，见 config::CalendarConfig）
pub const DEFAULT_MIN_YEAR: i32 = 2025;
