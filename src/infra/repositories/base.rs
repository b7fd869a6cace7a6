//! Generic repository over a single entity type.
//!
//! [`Repository`] owns the raw create/read/update/delete operations for one
//! entity. Reads go through the soft-delete aware query surface; deletes are
//! intercepted and rewritten into soft-delete updates before they reach the
//! store. Each operation commits independently; cross-entity consistency is
//! the job of the entity-specific services, not of this layer.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, Select,
};

use super::soft_delete::{intercept_delete, SoftDeletable};
use crate::errors::AppResult;

/// Base capability shared by all persisted entities: a surrogate integer
/// primary key on top of the soft-delete columns.
pub trait BaseEntity: SoftDeletable {
    fn id_column() -> Self::Column;
}

/// Model-side accessors for the base columns.
pub trait BaseModel {
    fn id(&self) -> i32;
    fn is_deleted(&self) -> bool;
    fn deleted_at(&self) -> Option<DateTime<Utc>>;
}

/// Generic repository parameterized by entity type.
#[derive(Clone)]
pub struct Repository<E>
where
    E: BaseEntity,
{
    db: DatabaseConnection,
    entity: PhantomData<E>,
}

impl<E> Repository<E>
where
    E: BaseEntity,
    E::Model: BaseModel + IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Get database connection reference
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Lazily-evaluated, composable query over live rows.
    ///
    /// The `is_deleted = false` predicate is installed by the soft-delete
    /// capability, not by this method; callers add their own filters on top.
    pub fn query(&self) -> Select<E> {
        E::find_live()
    }

    /// Find a row by id, bypassing the live-row predicate.
    ///
    /// Soft-deleted rows are visible here. Used by tests and tooling; the
    /// service layer never calls this.
    pub async fn find_any_by_id(&self, id: i32) -> AppResult<Option<E::Model>> {
        E::find()
            .filter(E::id_column().eq(id))
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    /// Insert a new row and return it with its store-assigned id.
    pub async fn add(&self, model: E::ActiveModel) -> AppResult<E::Model> {
        model.insert(&self.db).await.map_err(Into::into)
    }

    /// Full-record update. The caller supplies the complete entity state;
    /// fails if the row no longer exists or a constraint is violated.
    pub async fn update(&self, model: E::ActiveModel) -> AppResult<E::Model> {
        model.update(&self.db).await.map_err(Into::into)
    }

    /// Soft-delete a row by id.
    ///
    /// Looks the id up among live rows; when found, the removal intent is
    /// rewritten into an `is_deleted`/`deleted_at` update. An absent or
    /// already-deleted id is a silent no-op, so double-delete is tolerated.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let found = E::find_live()
            .filter(E::id_column().eq(id))
            .one(&self.db)
            .await?;

        match found {
            Some(model) => {
                intercept_delete::<E>(model).update(&self.db).await?;
            }
            None => {
                tracing::trace!(id, "row not found for deletion, skipping");
            }
        }

        Ok(())
    }
}
