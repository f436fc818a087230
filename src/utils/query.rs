//! Single query-plan builder consumed by both execution modes.
//!
//! Every listing endpoint builds one [`QueryPlan`] per request: base table,
//! join topology, filter, ordering, and (under fan-out) the grouping column
//! set. `count_sql` and `list_sql` render from the same plan, so the total
//! and the page can never disagree on predicate or topology.
//!
//! Ordering is always `created_at DESC, id DESC` on the base table: newest
//! first, primary key as tie-breaker so pagination is stable across pages.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use crate::utils::filter::{Bind, Filter};

#[derive(Debug)]
pub struct QueryPlan {
    base: &'static str,
    key: &'static str,
    select: String,
    joins: Vec<&'static str>,
    filter: Filter,
    group_by: Option<&'static str>,
    order_by: &'static str,
}

impl QueryPlan {
    pub fn new(
        base: &'static str,
        key: &'static str,
        select: impl Into<String>,
        order_by: &'static str,
    ) -> Self {
        Self {
            base,
            key,
            select: select.into(),
            joins: Vec::new(),
            filter: Filter::new(),
            group_by: None,
            order_by,
        }
    }

    pub fn join(mut self, clause: &'static str) -> Self {
        self.joins.push(clause);
        self
    }

    pub fn joins(mut self, clauses: &'static [&'static str]) -> Self {
        self.joins.extend_from_slice(clauses);
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Collapses duplicate base rows before pagination. `columns` must be the
    /// full base-entity column set so every selected column is grouped.
    pub fn group_by(mut self, columns: &'static str) -> Self {
        self.group_by = Some(columns);
        self
    }

    pub fn group_when(self, fan_out: bool, columns: &'static str) -> Self {
        if fan_out { self.group_by(columns) } else { self }
    }

    fn from_sql(&self) -> String {
        let mut sql = format!(" FROM {}", self.base);
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        sql.push_str(&self.filter.where_sql());
        sql
    }

    /// Joined rows can repeat the base row, so the count is distinct on the
    /// base primary key whenever a topology is present.
    pub fn count_sql(&self) -> String {
        if self.joins.is_empty() {
            format!("SELECT COUNT(*){}", self.from_sql())
        } else {
            format!("SELECT COUNT(DISTINCT {}){}", self.key, self.from_sql())
        }
    }

    pub fn list_sql(&self, limit: i64, offset: i64) -> String {
        let mut sql = format!("SELECT {}{}", self.select, self.from_sql());
        if let Some(columns) = self.group_by {
            sql.push_str(" GROUP BY ");
            sql.push_str(columns);
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(self.order_by);
        // limit and offset went through pagination normalization; they are
        // plain integers, never user text.
        sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset));
        sql
    }

    pub async fn fetch_count(&self, db: &PgPool) -> Result<i64, sqlx::Error> {
        let sql = self.count_sql();
        let mut query = sqlx::query_scalar::<_, i64>(&sql);
        for bind in self.filter.binds() {
            query = match bind {
                Bind::Text(s) => query.bind(s.clone()),
                Bind::Id(id) => query.bind(*id),
                Bind::Role(role) => query.bind(*role),
            };
        }
        query.fetch_one(db).await
    }

    pub async fn fetch_page<T>(
        &self,
        db: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = self.list_sql(limit, offset);
        let mut query = sqlx::query_as::<_, T>(&sql);
        for bind in self.filter.binds() {
            query = match bind {
                Bind::Text(s) => query.bind(s.clone()),
                Bind::Id(id) => query.bind(*id),
                Bind::Role(role) => query.bind(*role),
            };
        }
        query.fetch_all(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const DEPT_COLUMNS: &str = "d.id, d.code, d.name, d.description, d.created_at, d.updated_at";

    #[test]
    fn test_count_without_joins_is_plain() {
        let plan = QueryPlan::new("departments d", "d.id", DEPT_COLUMNS, "d.created_at DESC, d.id DESC");
        assert_eq!(plan.count_sql(), "SELECT COUNT(*) FROM departments d");
    }

    #[test]
    fn test_count_with_joins_is_distinct_on_base_key() {
        let plan = QueryPlan::new("departments d", "d.id", DEPT_COLUMNS, "d.created_at DESC, d.id DESC")
            .join("LEFT JOIN subjects s ON s.department_id = d.id");
        assert_eq!(
            plan.count_sql(),
            "SELECT COUNT(DISTINCT d.id) FROM departments d LEFT JOIN subjects s ON s.department_id = d.id"
        );
    }

    #[test]
    fn test_count_and_list_share_where_and_topology() {
        let id = Uuid::new_v4();
        let mut filter = Filter::new();
        filter.search(&["d.name", "d.code"], "cs").eq_id("s.id", id);

        let plan = QueryPlan::new("departments d", "d.id", DEPT_COLUMNS, "d.created_at DESC, d.id DESC")
            .join("LEFT JOIN subjects s ON s.department_id = d.id")
            .filter(filter)
            .group_by(DEPT_COLUMNS);

        let count = plan.count_sql();
        let list = plan.list_sql(10, 0);

        let shared = "FROM departments d LEFT JOIN subjects s ON s.department_id = d.id WHERE (d.name ILIKE $1 ESCAPE '\\' OR d.code ILIKE $1 ESCAPE '\\') AND s.id = $2";
        assert!(count.contains(shared), "count was: {count}");
        assert!(list.contains(shared), "list was: {list}");
    }

    #[test]
    fn test_list_groups_by_full_base_column_set_under_fan_out() {
        let plan = QueryPlan::new("departments d", "d.id", DEPT_COLUMNS, "d.created_at DESC, d.id DESC")
            .join("LEFT JOIN subjects s ON s.department_id = d.id")
            .group_when(true, DEPT_COLUMNS);
        let list = plan.list_sql(10, 0);
        assert!(list.contains(&format!("GROUP BY {DEPT_COLUMNS}")), "list was: {list}");
    }

    #[test]
    fn test_no_grouping_without_fan_out() {
        let plan = QueryPlan::new("classes c", "c.id", "c.id, c.name", "c.created_at DESC, c.id DESC")
            .group_when(false, "c.id, c.name");
        assert!(!plan.list_sql(10, 0).contains("GROUP BY"));
    }

    #[test]
    fn test_list_order_and_window() {
        let plan = QueryPlan::new("departments d", "d.id", DEPT_COLUMNS, "d.created_at DESC, d.id DESC");
        let list = plan.list_sql(25, 50);
        assert!(list.ends_with("ORDER BY d.created_at DESC, d.id DESC LIMIT 25 OFFSET 50"));
    }

    #[test]
    fn test_identity_filter_renders_no_where() {
        let plan = QueryPlan::new("users u", "u.id", "u.id", "u.created_at DESC, u.id DESC");
        assert_eq!(plan.list_sql(10, 0), "SELECT u.id FROM users u ORDER BY u.created_at DESC, u.id DESC LIMIT 10 OFFSET 0");
    }
}
