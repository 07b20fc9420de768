// ==========================================
// 诊所医生排班系统 - 领域层
// ==========================================
// 职责: 节假日日历的实体与类型定义
// 红线: 领域层不访问数据库
// ==========================================

pub mod holiday;
pub mod types;

// 重导出核心实体
pub use holiday::{HolidayInfo, HolidayRecord, ResolvedDay};
pub use types::{HolidayKind, HolidaySource};
