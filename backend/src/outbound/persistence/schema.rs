//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation. Regenerate with `diesel print-schema` when
//! the migrations change.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        id -> Int4,
        /// Unique login identifier.
        email -> Text,
        name -> Text,
        /// Role label stored alongside the account, defaults to `user`.
        role -> Text,
        created_at -> Timestamptz,
        /// Argon2 digest in PHC string format.
        password_digest -> Text,
    }
}

diesel::table! {
    /// Projects, retired by setting `deleted_at` rather than removing rows.
    projects (id) {
        id -> Int4,
        name -> Text,
        deleted_at -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Documents within a project. Titles are unique per project across both
    /// live and soft-deleted rows.
    documents (id) {
        id -> Int4,
        project_id -> Int4,
        title -> Text,
        deleted_at -> Nullable<Timestamptz>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Membership links between users and projects. Populated by a future
    /// collaboration surface; no handler writes to it yet.
    project_memberships (id) {
        id -> Int4,
        user_id -> Int4,
        project_id -> Int4,
        role -> Text,
        joined_at -> Timestamptz,
    }
}

diesel::joinable!(documents -> projects (project_id));
diesel::joinable!(project_memberships -> users (user_id));
diesel::joinable!(project_memberships -> projects (project_id));

diesel::allow_tables_to_appear_in_same_query!(users, projects, documents, project_memberships);
