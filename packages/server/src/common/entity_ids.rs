//! Typed ID definitions for all domain entities.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for School entities (tenants).
pub struct School;

/// Marker type for User entities.
pub struct User;

/// Marker type for SchoolAdmin grants.
pub struct SchoolAdmin;

/// Marker type for Founder (student) profiles.
pub struct Founder;

/// Marker type for Coach (faculty) profiles.
pub struct Coach;

/// Marker type for Course entities.
pub struct Course;

/// Marker type for curriculum Level entities.
pub struct Level;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

pub type SchoolId = Id<School>;
pub type UserId = Id<User>;
pub type SchoolAdminId = Id<SchoolAdmin>;
pub type FounderId = Id<Founder>;
pub type CoachId = Id<Coach>;
pub type CourseId = Id<Course>;
pub type LevelId = Id<Level>;
