// ==========================================
// 诊所医生排班系统 - 引擎层
// ==========================================
// 职责: 节假日解析规则与候选日期来源
// 红线: resolve 只看数据库记录 + 周历默认；
//       预定义/农历来源仅供管理页预览，绝不参与排班判定
// ==========================================

pub mod festival;
pub mod predefined;
pub mod resolver;

// 重导出核心引擎
pub use festival::{FestivalSource, FestivalSourceError, StaticFestivalTable};
pub use resolver::HolidayResolver;
