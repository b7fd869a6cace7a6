//! Generic CRUD service.
//!
//! [`Service`] is parameterized by an entity type and its read/write DTOs
//! and provides the six operations every entity shares. Entity-specific
//! services wrap one `Service` instance and add their domain predicates,
//! widening the projection where a related row is needed.

use std::any::type_name;
use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, IntoActiveModel,
    PaginatorTrait, QueryFilter, Select,
};

use crate::errors::AppResult;
use crate::infra::repositories::{BaseEntity, BaseModel, Repository};
use crate::types::{PageFilter, PageResult};

/// The uniform CRUD surface consumed by the HTTP layer.
///
/// Absent rows are values (`None` / no-op), never errors; the only
/// synchronous failure is pagination-parameter validation.
#[async_trait]
pub trait CrudService<R, W>: Send + Sync
where
    R: Send,
    W: Send,
{
    /// Fetch a single live row by id, projected to the read DTO.
    async fn get_by_id(&self, id: i32) -> AppResult<Option<R>>;

    /// Fetch every live row. Empty vector, never an error, when none exist.
    async fn get_all(&self) -> AppResult<Vec<R>>;

    /// Fetch one page of live rows plus the total live-row count.
    async fn paginate(&self, filter: PageFilter) -> AppResult<PageResult<R>>;

    /// Persist a new row and return its store-assigned id. Any
    /// client-supplied id in the DTO is discarded.
    async fn create(&self, dto: W) -> AppResult<i32>;

    /// Full-record replace.
    async fn update(&self, dto: W) -> AppResult<()>;

    /// Soft-delete by id; silently tolerates ids that are absent or
    /// already deleted.
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Generic service implementation over one [`Repository`].
pub struct Service<E, R, W>
where
    E: BaseEntity,
{
    repo: Repository<E>,
    marker: PhantomData<fn() -> (R, W)>,
}

impl<E, R, W> Service<E, R, W>
where
    E: BaseEntity,
    E::Model: BaseModel + IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(db),
            marker: PhantomData,
        }
    }

    /// Underlying repository, for entity-specific queries.
    pub fn repo(&self) -> &Repository<E> {
        &self.repo
    }

    /// Live-row query surface (shorthand for `repo().query()`).
    pub fn query(&self) -> Select<E> {
        self.repo.query()
    }

    /// Database handle for executing composed queries.
    pub fn db(&self) -> &DatabaseConnection {
        self.repo.db()
    }
}

#[async_trait]
impl<E, R, W> CrudService<R, W> for Service<E, R, W>
where
    E: BaseEntity + 'static,
    E::Model: BaseModel + IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    R: From<E::Model> + Send + 'static,
    W: IntoActiveModel<E::ActiveModel> + Send + 'static,
{
    async fn get_by_id(&self, id: i32) -> AppResult<Option<R>> {
        tracing::trace!(id, entity = type_name::<E>(), "fetching entity by id");

        let model = self
            .repo
            .query()
            .filter(E::id_column().eq(id))
            .one(self.repo.db())
            .await?;

        if model.is_none() {
            tracing::warn!(id, entity = type_name::<E>(), "entity not found");
        }

        Ok(model.map(R::from))
    }

    async fn get_all(&self) -> AppResult<Vec<R>> {
        tracing::trace!(entity = type_name::<E>(), "fetching all entities");

        let models = self.repo.query().all(self.repo.db()).await?;

        tracing::trace!(
            count = models.len(),
            entity = type_name::<E>(),
            "fetched entities"
        );

        Ok(models.into_iter().map(R::from).collect())
    }

    async fn paginate(&self, filter: PageFilter) -> AppResult<PageResult<R>> {
        filter.validate()?;

        let paginator = self.repo.query().paginate(self.repo.db(), filter.limit());
        let total_count = paginator.num_items().await?;
        let items: Vec<R> = paginator
            .fetch_page(filter.page_index())
            .await?
            .into_iter()
            .map(R::from)
            .collect();

        Ok(PageResult::new(items, total_count, &filter))
    }

    async fn create(&self, dto: W) -> AppResult<i32> {
        tracing::trace!(entity = type_name::<E>(), "creating entity");

        let mut active = dto.into_active_model();
        // The store assigns the id; whatever the client sent is discarded.
        active.not_set(E::id_column());

        let model = self.repo.add(active).await?;

        tracing::trace!(id = model.id(), entity = type_name::<E>(), "created entity");

        Ok(model.id())
    }

    async fn update(&self, dto: W) -> AppResult<()> {
        tracing::trace!(entity = type_name::<E>(), "updating entity");

        self.repo.update(dto.into_active_model()).await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        tracing::trace!(id, entity = type_name::<E>(), "deleting entity");

        let existing = self
            .repo
            .query()
            .filter(E::id_column().eq(id))
            .one(self.repo.db())
            .await?;

        match existing {
            Some(_) => self.repo.delete(id).await,
            None => {
                tracing::trace!(
                    id,
                    entity = type_name::<E>(),
                    "entity not found for deletion"
                );
                Ok(())
            }
        }
    }
}
