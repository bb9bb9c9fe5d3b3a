use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::FertilizationActual;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(FertilizationActual::Table)
        .col(
            ColumnDef::new(FertilizationActual::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(FertilizationActual::Estate).string().not_null())
        .col(
            ColumnDef::new(FertilizationActual::Category)
                .string()
                .not_null()
                .string_len(20),
        )
        .col(ColumnDef::new(FertilizationActual::Round).integer().null())
        .col(ColumnDef::new(FertilizationActual::QuantityKg).double().null())
        .col(ColumnDef::new(FertilizationActual::AppliedOn).string().string_len(10).null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(FertilizationActual::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateCategoryIdx;

fn create_category_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_fertilization_actual_category")
        .table(FertilizationActual::Table)
        .col(FertilizationActual::Category)
        .to_owned()
}

fn drop_category_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_fertilization_actual_category")
        .table(FertilizationActual::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateCategoryIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_category_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_category_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
