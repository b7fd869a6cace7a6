//! Soft-delete capability for entities.
//!
//! Rows are never physically removed by the application. Every entity carries
//! `is_deleted` and `deleted_at` columns; a delete request is rewritten into
//! an update that flips those columns, and every standard query goes through
//! [`SoftDeletable::find_live`], which carries the standing
//! `is_deleted = false` predicate. Neither the rewrite nor the predicate is
//! repeated per entity: implementing the trait is all an entity has to do.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Select,
};

/// Marker capability for soft-deletable entities.
///
/// Exposes the two bookkeeping columns and a query constructor with the
/// "not deleted" predicate already installed.
pub trait SoftDeletable: EntityTrait {
    fn is_deleted_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;

    /// Query surface over live rows only.
    ///
    /// This is the single place the `is_deleted = false` predicate lives;
    /// callers compose further filters on top of it.
    fn find_live() -> Select<Self> {
        Self::find().filter(Self::is_deleted_column().eq(false))
    }
}

/// Rewrite a staged removal into a soft-delete update.
///
/// Sets `is_deleted = true` and stamps `deleted_at` with the current UTC
/// time; all other columns are left unchanged, so the resulting update
/// statement touches only the two bookkeeping columns.
pub fn intercept_delete<E>(model: E::Model) -> E::ActiveModel
where
    E: SoftDeletable,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E>,
{
    let mut active = model.into_active_model();
    active.set(E::is_deleted_column(), true.into());
    active.set(E::deleted_at_column(), Utc::now().into());
    active
}
