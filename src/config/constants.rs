//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Storage
// =============================================================================

/// Default prefix applied to every storage key to avoid collisions with
/// other tenants of the key/value substrate
pub const DEFAULT_STORAGE_NAMESPACE: &str = "admin_data:";

/// Default directory for the file-backed storage port
pub const DEFAULT_DATA_DIR: &str = "./data";

// =============================================================================
// Collections (one per entity kind)
// =============================================================================

pub const COLLECTION_VEHICLES: &str = "vehicles";
pub const COLLECTION_BOOKINGS: &str = "bookings";
pub const COLLECTION_DOCUMENTS: &str = "documents";
pub const COLLECTION_USERS: &str = "users";

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Seeded admin account
// =============================================================================

/// Fixed id of the admin record seeded on first read of the User collection
pub const SEED_ADMIN_ID: &str = "admin-seed";

/// Display name of the seeded admin
pub const SEED_ADMIN_NAME: &str = "Admin User";

/// Email of the seeded admin
pub const SEED_ADMIN_EMAIL: &str = "admin@example.com";
