// ==========================================
// 诊所医生排班系统 - 节假日仓储
// ==========================================
// 职责: 管理 holidays 表（date 唯一）
// 说明: 记录只增删不改；区间插入带整体冲突检查，单事务提交
// ==========================================

use chrono::{Duration, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use crate::db::open_sqlite_connection;
use crate::domain::holiday::HolidayRecord;
use crate::domain::types::HolidayKind;
use crate::repository::error::{RepositoryError, RepositoryResult};

pub struct HolidayRepository {
    conn: Arc<Mutex<Connection>>,
}

impl HolidayRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        repo.ensure_table()?;
        Ok(repo)
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let repo = Self { conn };
        repo.ensure_table()?;
        Ok(repo)
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 确保表存在（如果不存在则创建）
    fn ensure_table(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS holidays (
              id INTEGER PRIMARY KEY AUTOINCREMENT,
              date TEXT NOT NULL UNIQUE,
              name TEXT NOT NULL,
              type TEXT NOT NULL DEFAULT 'custom',
              is_system INTEGER NOT NULL DEFAULT 0,
              created_at TEXT NOT NULL DEFAULT (datetime('now')),
              updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );

            CREATE INDEX IF NOT EXISTS idx_holidays_date
              ON holidays(date);
            "#,
        )?;
        Ok(())
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<HolidayRecord> {
        let kind_str: String = row.get("type")?;
        let kind = HolidayKind::from_str(&kind_str).unwrap_or(HolidayKind::Custom);
        Ok(HolidayRecord {
            id: row.get("id")?,
            date: row.get("date")?,
            name: row.get("name")?,
            kind,
            is_system: row.get("is_system")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// 查询某一日期的记录
    pub fn find_by_date(&self, date: NaiveDate) -> RepositoryResult<Option<HolidayRecord>> {
        let conn = self.get_conn()?;
        let record = conn
            .query_row(
                r#"
                SELECT id, date, name, type, is_system, created_at, updated_at
                FROM holidays
                WHERE date = ?1
                "#,
                params![date.format("%Y-%m-%d").to_string()],
                Self::map_row,
            )
            .optional()?;
        Ok(record)
    }

    /// 查询某一年份的全部记录（按日期升序）
    pub fn list_by_year(&self, year: i32) -> RepositoryResult<Vec<HolidayRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, name, type, is_system, created_at, updated_at
            FROM holidays
            WHERE date >= ?1 AND date <= ?2
            ORDER BY date
            "#,
        )?;
        let rows = stmt.query_map(
            params![format!("{:04}-01-01", year), format!("{:04}-12-31", year)],
            Self::map_row,
        )?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// 区间插入（含首尾），单事务
    ///
    /// 区间内任一日期已有记录时整体拒绝（HolidayConflict，报告首个冲突日），
    /// 不会留下部分插入的行；date 唯一约束是并发竞争下的最终防线
    pub fn insert_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        name: &str,
        kind: HolidayKind,
        is_system: bool,
    ) -> RepositoryResult<usize> {
        if end < start {
            return Err(RepositoryError::FieldValueError {
                field: "end_date".to_string(),
                message: "结束日期不能早于开始日期".to_string(),
            });
        }

        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        // 冲突检查与插入在同一事务内
        let mut current = start;
        while current <= end {
            let existing: Option<(String, String)> = tx
                .query_row(
                    "SELECT name, type FROM holidays WHERE date = ?1",
                    params![current.format("%Y-%m-%d").to_string()],
                    |row| Ok((row.get(0)?, row.get(1)?)),
                )
                .optional()?;

            if let Some((existing_name, existing_kind)) = existing {
                // 事务随 tx drop 回滚
                return Err(RepositoryError::HolidayConflict {
                    date: current.format("%Y-%m-%d").to_string(),
                    name: existing_name,
                    kind: existing_kind,
                });
            }
            current += Duration::days(1);
        }

        let mut inserted = 0usize;
        let mut current = start;
        while current <= end {
            tx.execute(
                r#"
                INSERT INTO holidays (date, name, type, is_system)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![
                    current.format("%Y-%m-%d").to_string(),
                    name,
                    kind.as_str(),
                    is_system
                ],
            )?;
            inserted += 1;
            current += Duration::days(1);
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(inserted)
    }

    /// 统计某一年份的记录数
    pub fn count_by_year(&self, year: i32) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM holidays WHERE date >= ?1 AND date <= ?2",
            params![format!("{:04}-01-01", year), format!("{:04}-12-31", year)],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// 删除某一日期的记录，返回被删除的记录（用于提示文案）
    pub fn delete_by_date(&self, date: NaiveDate) -> RepositoryResult<HolidayRecord> {
        let record = self
            .find_by_date(date)?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Holiday".to_string(),
                date: date.format("%Y-%m-%d").to_string(),
            })?;

        let conn = self.get_conn()?;
        conn.execute(
            "DELETE FROM holidays WHERE date = ?1",
            params![date.format("%Y-%m-%d").to_string()],
        )?;
        Ok(record)
    }

    /// 单日插入，日期已存在时跳过（初始化脚本专用）
    ///
    /// 返回是否实际插入
    pub fn insert_if_absent(
        &self,
        date: NaiveDate,
        name: &str,
        kind: HolidayKind,
        is_system: bool,
    ) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            r#"
            INSERT OR IGNORE INTO holidays (date, name, type, is_system)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                date.format("%Y-%m-%d").to_string(),
                name,
                kind.as_str(),
                is_system
            ],
        )?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mem_repo() -> HolidayRepository {
        let conn = Connection::open_in_memory().expect("打开内存数据库失败");
        HolidayRepository::from_connection(Arc::new(Mutex::new(conn))).expect("初始化仓储失败")
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_insert_range_与按年查询() {
        let repo = mem_repo();
        let inserted = repo
            .insert_range(
                d("2025-10-01"),
                d("2025-10-03"),
                "国庆节",
                HolidayKind::Holiday,
                false,
            )
            .expect("插入失败");
        assert_eq!(inserted, 3);

        let records = repo.list_by_year(2025).expect("查询失败");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date, d("2025-10-01"));
        assert_eq!(records[0].kind, HolidayKind::Holiday);
        assert!(!records[0].is_system);
    }

    #[test]
    fn test_count_by_year_只计入当年() {
        let repo = mem_repo();
        repo.insert_range(
            d("2025-12-30"),
            d("2026-01-02"),
            "跨年假",
            HolidayKind::Holiday,
            false,
        )
        .expect("插入失败");

        assert_eq!(repo.count_by_year(2025).unwrap(), 2);
        assert_eq!(repo.count_by_year(2026).unwrap(), 2);
        assert_eq!(repo.count_by_year(2027).unwrap(), 0);
    }

    #[test]
    fn test_insert_range_冲突整体回滚() {
        let repo = mem_repo();
        repo.insert_range(
            d("2025-01-01"),
            d("2025-01-01"),
            "元旦",
            HolidayKind::Holiday,
            true,
        )
        .expect("预置失败");

        let result = repo.insert_range(
            d("2024-12-30"),
            d("2025-01-02"),
            "测试假期",
            HolidayKind::Holiday,
            false,
        );
        match result {
            Err(RepositoryError::HolidayConflict { date, name, .. }) => {
                assert_eq!(date, "2025-01-01");
                assert_eq!(name, "元旦");
            }
            other => panic!("期望 HolidayConflict，实际: {:?}", other.err()),
        }

        // 区间内其余日期不应有残留行
        assert!(repo.find_by_date(d("2024-12-30")).unwrap().is_none());
        assert!(repo.find_by_date(d("2024-12-31")).unwrap().is_none());
        assert!(repo.find_by_date(d("2025-01-02")).unwrap().is_none());
    }

    #[test]
    fn test_delete_by_date_不存在() {
        let repo = mem_repo();
        let result = repo.delete_by_date(d("2025-06-01"));
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[test]
    fn test_insert_if_absent_跳过已有日期() {
        let repo = mem_repo();
        assert!(repo
            .insert_if_absent(d("2025-01-01"), "元旦", HolidayKind::Holiday, true)
            .unwrap());
        assert!(!repo
            .insert_if_absent(d("2025-01-01"), "别名", HolidayKind::Custom, false)
            .unwrap());

        let record = repo.find_by_date(d("2025-01-01")).unwrap().unwrap();
        assert_eq!(record.name, "元旦");
        assert!(record.is_system);
    }
}
