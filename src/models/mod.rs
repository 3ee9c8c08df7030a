//! Data models for the Library Manager backend

pub mod book;
pub mod borrow;
pub mod genre;
pub mod member;
pub mod staff;
pub mod stats;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use borrow::{BorrowRecord, BorrowRequest, OverdueEntry, PopularGenre, ReturnRequest};
pub use genre::{CreateGenre, Genre, UpdateGenre};
pub use member::{CreateMember, Member, MemberStatus, UpdateMember};
pub use staff::{CreateStaff, StaffRole, StaffUser, UpdateStaff};
pub use stats::{Dashboard, DashboardStats};
