use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ColumnType, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Pokemon {
    Table,
    Id,
    Name,
    Gen,
    HeightDm,
    WeightHg,
    Types,
    Habitat,
    Color,
    EvolutionStage,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The catalog table. Rows are immutable during normal operation;
        // ids are the ordering basis for daily target selection.
        manager
            .create_table(
                Table::create()
                    .table(Pokemon::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pokemon::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Pokemon::Name)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Pokemon::Gen)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Pokemon::HeightDm)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Pokemon::WeightHg)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Pokemon::Types)
                            .array(ColumnType::Text)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Pokemon::Habitat)
                            .text()
                            .not_null()
                            .default("unknown"),
                    )
                    .col(
                        ColumnDef::new(Pokemon::Color)
                            .text()
                            .not_null()
                            .default("unknown"),
                    )
                    .col(
                        ColumnDef::new(Pokemon::EvolutionStage)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .to_owned(),
            )
            .await?;

        // Prefix search on name (search endpoint orders by id, filters by name).
        manager
            .create_index(
                Index::create()
                    .name("idx_pokemon_name")
                    .table(Pokemon::Table)
                    .col(Pokemon::Name)
                    .to_owned(),
            )
            .await?;

        // Mode pools select ordered ids filtered by generation.
        manager
            .create_index(
                Index::create()
                    .name("idx_pokemon_gen_id")
                    .table(Pokemon::Table)
                    .col(Pokemon::Gen)
                    .col(Pokemon::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pokemon::Table).to_owned())
            .await
    }
}
