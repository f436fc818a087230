pub mod classes;
pub mod departments;
pub mod subjects;
pub mod users;
