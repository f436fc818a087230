//! Composable WHERE-clause construction for the listing endpoints.
//!
//! A [`Filter`] collects conditions and their bind values in one place so the
//! count query and the list query for a request are built from the same
//! predicate. Conditions combine with AND; a search parameter spanning
//! several columns combines those columns with OR inside one condition.

use uuid::Uuid;

use crate::modules::users::model::UserRole;

/// Escapes LIKE metacharacters so user-supplied text matches literally.
/// `50%-Hub` must find the department named `50%-Hub`, not act as a wildcard.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone)]
pub enum Bind {
    Text(String),
    Id(Uuid),
    Role(UserRole),
}

#[derive(Debug, Default)]
pub struct Filter {
    conditions: Vec<String>,
    binds: Vec<Bind>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match across one or more text columns.
    /// One bind value, OR-ed across the columns.
    pub fn search(&mut self, columns: &[&str], text: &str) -> &mut Self {
        self.binds
            .push(Bind::Text(format!("%{}%", escape_like(text))));
        let n = self.binds.len();
        let parts: Vec<String> = columns
            .iter()
            .map(|col| format!("{col} ILIKE ${n} ESCAPE '\\'"))
            .collect();
        self.conditions.push(format!("({})", parts.join(" OR ")));
        self
    }

    pub fn eq_id(&mut self, column: &str, id: Uuid) -> &mut Self {
        self.binds.push(Bind::Id(id));
        let n = self.binds.len();
        self.conditions.push(format!("{column} = ${n}"));
        self
    }

    pub fn eq_role(&mut self, column: &str, role: UserRole) -> &mut Self {
        self.binds.push(Bind::Role(role));
        let n = self.binds.len();
        self.conditions.push(format!("{column} = ${n}"));
        self
    }

    /// Renders ` WHERE a AND b`, or nothing when no parameter was present.
    pub fn where_sql(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn binds(&self) -> &[Bind] {
        &self.binds
    }
}
