//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20241120_000001_create_tables;
mod m20241123_000001_add_soft_delete;
mod m20241124_000001_add_unique_constraints;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241120_000001_create_tables::Migration),
            Box::new(m20241123_000001_add_soft_delete::Migration),
            Box::new(m20241124_000001_add_unique_constraints::Migration),
        ]
    }
}
