//! Role-conditional join topology.
//!
//! A teacher reaches classes through direct ownership (`classes.teacher_id`);
//! a student reaches them through the `enrollments` join table. Both paths
//! converge on the same `classes → subjects → departments` chain, and both
//! produce the same row shape for a given target entity. Roles outside the
//! closed set have no traversal rule at all, which callers surface as a
//! legitimate empty result rather than an error.
//!
//! Table aliases are fixed across the crate: `departments d`, `subjects s`,
//! `classes c`, `users u`, `enrollments e`.

use crate::modules::users::model::UserRole;

/// An ordered relation traversal connecting a base entity to its scoping
/// entity. `scope_col` is the joined (or base) column the scoping id binds
/// to; applying that predicate is what makes the left joins selective.
#[derive(Debug, Clone, Copy)]
pub struct JoinPlan {
    pub joins: &'static [&'static str],
    pub scope_col: &'static str,
    /// The traversal can multiply one base row into several joined rows, so
    /// the executor must count distinct base keys and group before paging.
    pub fan_out: bool,
}

const TEACHER_CLASSES: JoinPlan = JoinPlan {
    joins: &[],
    scope_col: "c.teacher_id",
    fan_out: false,
};

const STUDENT_CLASSES: JoinPlan = JoinPlan {
    joins: &["LEFT JOIN enrollments e ON e.class_id = c.id"],
    scope_col: "e.student_id",
    fan_out: true,
};

const TEACHER_SUBJECTS: JoinPlan = JoinPlan {
    joins: &["LEFT JOIN classes c ON c.subject_id = s.id"],
    scope_col: "c.teacher_id",
    fan_out: true,
};

const STUDENT_SUBJECTS: JoinPlan = JoinPlan {
    joins: &[
        "LEFT JOIN classes c ON c.subject_id = s.id",
        "LEFT JOIN enrollments e ON e.class_id = c.id",
    ],
    scope_col: "e.student_id",
    fan_out: true,
};

const TEACHER_DEPARTMENTS: JoinPlan = JoinPlan {
    joins: &[
        "LEFT JOIN subjects s ON s.department_id = d.id",
        "LEFT JOIN classes c ON c.subject_id = s.id",
    ],
    scope_col: "c.teacher_id",
    fan_out: true,
};

const STUDENT_DEPARTMENTS: JoinPlan = JoinPlan {
    joins: &[
        "LEFT JOIN subjects s ON s.department_id = d.id",
        "LEFT JOIN classes c ON c.subject_id = s.id",
        "LEFT JOIN enrollments e ON e.class_id = c.id",
    ],
    scope_col: "e.student_id",
    fan_out: true,
};

const TEACHER_SUBJECT_USERS: JoinPlan = JoinPlan {
    joins: &["LEFT JOIN classes c ON c.teacher_id = u.id"],
    scope_col: "c.subject_id",
    fan_out: true,
};

const STUDENT_SUBJECT_USERS: JoinPlan = JoinPlan {
    joins: &[
        "LEFT JOIN enrollments e ON e.student_id = u.id",
        "LEFT JOIN classes c ON c.id = e.class_id",
    ],
    scope_col: "c.subject_id",
    fan_out: true,
};

const TEACHER_CLASS_USERS: JoinPlan = JoinPlan {
    joins: &["LEFT JOIN classes c ON c.teacher_id = u.id"],
    scope_col: "c.id",
    fan_out: true,
};

const STUDENT_CLASS_USERS: JoinPlan = JoinPlan {
    joins: &["LEFT JOIN enrollments e ON e.student_id = u.id"],
    scope_col: "e.class_id",
    fan_out: true,
};

/// The closed set of roles that have a traversal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolePath {
    Teacher,
    Student,
}

impl RolePath {
    /// Parses a `role` query parameter. Anything outside the closed set has
    /// no plan; the caller decides between 400 (role required) and an empty
    /// envelope (role branching optional).
    pub fn parse(role: &str) -> Option<Self> {
        match role {
            "teacher" => Some(Self::Teacher),
            "student" => Some(Self::Student),
            _ => None,
        }
    }

    /// Derives the traversal for a stored user role. Admins own nothing and
    /// enroll in nothing, so they map to no plan.
    pub fn of_user(role: UserRole) -> Option<Self> {
        match role {
            UserRole::Teacher => Some(Self::Teacher),
            UserRole::Student => Some(Self::Student),
            UserRole::Admin => None,
        }
    }

    pub fn classes_for_user(self) -> JoinPlan {
        match self {
            Self::Teacher => TEACHER_CLASSES,
            Self::Student => STUDENT_CLASSES,
        }
    }

    pub fn subjects_for_user(self) -> JoinPlan {
        match self {
            Self::Teacher => TEACHER_SUBJECTS,
            Self::Student => STUDENT_SUBJECTS,
        }
    }

    pub fn departments_for_user(self) -> JoinPlan {
        match self {
            Self::Teacher => TEACHER_DEPARTMENTS,
            Self::Student => STUDENT_DEPARTMENTS,
        }
    }

    pub fn users_for_subject(self) -> JoinPlan {
        match self {
            Self::Teacher => TEACHER_SUBJECT_USERS,
            Self::Student => STUDENT_SUBJECT_USERS,
        }
    }

    pub fn users_for_class(self) -> JoinPlan {
        match self {
            Self::Teacher => TEACHER_CLASS_USERS,
            Self::Student => STUDENT_CLASS_USERS,
        }
    }
}
